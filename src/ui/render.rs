//! Building styled transcript lines from segments and layout.
//!
//! The renderer walks the visual lines of a [`TextLayout`] and segments each
//! one against the detected match list, so link runs get the theme's link
//! style while everything else keeps the message style. Span-kind metadata
//! is emitted parallel to the spans of every line.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::link::segment::{segment_window, LinkMatch, Segment};
use crate::ui::layout::TextLayout;
use crate::ui::span::SpanKind;

/// Styled lines plus span metadata, parallel span-for-span.
#[derive(Debug, Clone, Default)]
pub struct RenderedText {
    pub lines: Vec<Line<'static>>,
    pub metadata: Vec<Vec<SpanKind>>,
}

impl RenderedText {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn push_line(&mut self, line: Line<'static>, kinds: Vec<SpanKind>) {
        debug_assert_eq!(line.spans.len(), kinds.len());
        self.lines.push(line);
        self.metadata.push(kinds);
    }
}

/// Render `text` with `matches` over the given layout. Plain runs use
/// `base`, link runs use `link`.
pub fn render_text(
    text: &str,
    matches: &[LinkMatch],
    layout: &TextLayout,
    base: Style,
    link: Style,
) -> RenderedText {
    let mut rendered = RenderedText::default();

    for range in layout.ranges() {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut kinds: Vec<SpanKind> = Vec::new();

        for segment in segment_window(text, matches, range) {
            match segment {
                Segment::Plain(content) => {
                    spans.push(Span::styled(content.to_string(), base));
                    kinds.push(SpanKind::Text);
                }
                Segment::Link { text: content, url } => {
                    spans.push(Span::styled(content.to_string(), link));
                    kinds.push(SpanKind::link(url));
                }
            }
        }

        if spans.is_empty() {
            spans.push(Span::styled(String::new(), base));
            kinds.push(SpanKind::Text);
        }

        rendered.push_line(Line::from(spans), kinds);
    }

    rendered
}
