//! OSC 8 hyperlink encoding for transcript export.
//!
//! Terminals that understand OSC 8 render the wrapped text as a real
//! hyperlink. Emission is refused for empty segments or segments carrying
//! control bytes, so callers can fall back to plain text instead of writing
//! a broken escape sequence.

use ratatui::text::Line;

use crate::ui::render::RenderedText;
use crate::ui::span::SpanKind;

const OSC_OPEN: &str = "\x1b]8;;";
const ST: &str = "\x1b\\";

/// Encode `text` as an OSC 8 hyperlink pointing at `href`. The open and
/// close sequences are always written together.
pub fn hyperlink(text: &str, href: &str) -> Option<String> {
    if text.is_empty() || href.is_empty() {
        return None;
    }
    if has_disallowed_control(text) || has_disallowed_control(href) {
        return None;
    }

    let mut out = String::with_capacity(2 * (OSC_OPEN.len() + ST.len()) + href.len() + text.len());
    out.push_str(OSC_OPEN);
    out.push_str(href);
    out.push_str(ST);
    out.push_str(text);
    out.push_str(OSC_OPEN);
    out.push_str(ST);
    Some(out)
}

/// Encode one rendered line, wrapping link spans in OSC 8 sequences and
/// passing everything else through verbatim.
pub fn encode_line(line: &Line, kinds: &[SpanKind]) -> String {
    let mut out = String::new();
    for (span, kind) in line.spans.iter().zip(kinds.iter()) {
        let content = span.content.as_ref();
        if let Some(meta) = kind.link_meta() {
            if let Some(encoded) = hyperlink(content, meta.href()) {
                out.push_str(&encoded);
                continue;
            }
        }
        out.push_str(content);
    }
    out
}

/// Encode every line of a rendered message.
pub fn encode_lines(rendered: &RenderedText) -> Vec<String> {
    rendered
        .lines
        .iter()
        .zip(rendered.metadata.iter())
        .map(|(line, kinds)| encode_line(line, kinds))
        .collect()
}

fn has_disallowed_control(input: &str) -> bool {
    input.bytes().any(|b| (b < 0x20 && b != b'\t') || b == 0x1b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Span;

    #[test]
    fn hyperlink_balances_open_and_close() {
        let encoded = hyperlink("Rust", "https://www.rust-lang.org").expect("link");
        assert!(encoded.starts_with(OSC_OPEN));
        assert!(encoded.ends_with(&format!("{OSC_OPEN}{ST}")));
        assert_eq!(encoded.matches(OSC_OPEN).count(), 2);
        assert_eq!(encoded.matches(ST).count(), 2);
        assert!(encoded.contains("Rust"));
    }

    #[test]
    fn hyperlink_rejects_empty_segments() {
        assert!(hyperlink("", "https://example.com").is_none());
        assert!(hyperlink("Example", "").is_none());
    }

    #[test]
    fn hyperlink_rejects_control_bytes() {
        assert!(hyperlink("hi", "bad\u{1b}url").is_none());
        assert!(hyperlink("bad\u{7}text", "https://example.com").is_none());
        assert!(hyperlink("tab\tallowed", "https://example.com").is_some());
    }

    #[test]
    fn encode_line_wraps_only_link_spans() {
        let line = Line::from(vec![
            Span::raw("Visit "),
            Span::raw("https://example.com"),
            Span::raw("!"),
        ]);
        let kinds = vec![
            SpanKind::Text,
            SpanKind::link("https://example.com"),
            SpanKind::Text,
        ];
        let encoded = encode_line(&line, &kinds);
        assert!(encoded.starts_with("Visit "));
        assert!(encoded.ends_with('!'));
        assert_eq!(encoded.matches(OSC_OPEN).count(), 2);
    }

    #[test]
    fn unencodable_links_fall_back_to_plain_text() {
        let line = Line::from(vec![Span::raw("weird")]);
        let kinds = vec![SpanKind::link("bad\u{1b}href")];
        assert_eq!(encode_line(&line, &kinds), "weird");
    }
}
