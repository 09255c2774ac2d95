use ratatui::style::{Color, Modifier, Style};

/// Visual styles for the transcript viewer.
#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,
    // Message styles by role
    pub prefix_style: Style,
    pub own_text_style: Style,
    pub peer_text_style: Style,
    pub tip_text_style: Style,
    pub notice_text_style: Style,
    // Detected links inside message bodies
    pub link_style: Style,

    // Chrome
    pub title_style: Style,
    pub status_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Black,
            prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            own_text_style: Style::default().fg(Color::Cyan),
            peer_text_style: Style::default().fg(Color::White),
            tip_text_style: Style::default().fg(Color::Yellow),
            notice_text_style: Style::default().fg(Color::DarkGray),
            link_style: Style::default().fg(Color::LightBlue),

            title_style: Style::default().fg(Color::Gray),
            status_style: Style::default().fg(Color::Gray),
        }
    }

    pub fn light() -> Self {
        Theme {
            background_color: Color::White,
            prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            own_text_style: Style::default().fg(Color::Blue),
            peer_text_style: Style::default().fg(Color::Black),
            tip_text_style: Style::default().fg(Color::Magenta),
            notice_text_style: Style::default().fg(Color::Gray),
            link_style: Style::default().fg(Color::Blue),

            title_style: Style::default().fg(Color::DarkGray),
            status_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            // Fallback
            _ => Self::dark_default(),
        }
    }

    /// Apply the configured underline preference to the link style.
    pub fn with_link_underline(mut self, underline: bool) -> Self {
        if underline {
            self.link_style = self.link_style.add_modifier(Modifier::UNDERLINED);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_dark() {
        let theme = Theme::from_name("no-such-theme");
        assert_eq!(theme.background_color, Color::Black);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let theme = Theme::from_name("LIGHT");
        assert_eq!(theme.background_color, Color::White);
    }

    #[test]
    fn underline_preference_decorates_links() {
        let plain = Theme::dark_default().with_link_underline(false);
        assert!(!plain
            .link_style
            .add_modifier
            .contains(Modifier::UNDERLINED));

        let underlined = Theme::dark_default().with_link_underline(true);
        assert!(underlined
            .link_style
            .add_modifier
            .contains(Modifier::UNDERLINED));
    }
}
