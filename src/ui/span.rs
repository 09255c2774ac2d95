//! Semantic span metadata for rendered content.
//!
//! [`SpanKind`] classifies rendered text spans so downstream consumers
//! (hit confirmation, OSC export, tests) can identify link cells without
//! relying on styling heuristics such as underline detection. The renderer
//! emits one kind per span, parallel to each rendered line.

use std::sync::Arc;

/// Semantic classification for rendered spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpanKind {
    /// Default text content with no special interaction.
    Text,
    /// A hyperlink span produced from a detected URL.
    Link(LinkMeta),
}

impl SpanKind {
    #[inline]
    pub fn is_link(&self) -> bool {
        matches!(self, SpanKind::Link(_))
    }

    #[inline]
    pub fn link_meta(&self) -> Option<&LinkMeta> {
        match self {
            SpanKind::Link(meta) => Some(meta),
            _ => None,
        }
    }

    #[inline]
    pub fn link(href: impl Into<String>) -> Self {
        SpanKind::Link(LinkMeta::new(href))
    }
}

#[cfg(test)]
impl SpanKind {
    #[inline]
    pub fn link_href(&self) -> Option<&str> {
        self.link_meta().map(LinkMeta::href)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LinkMeta {
    href: Arc<str>,
}

impl LinkMeta {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Arc::<str>::from(href.into()),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_spans_carry_their_href() {
        let kind = SpanKind::link("https://example.com");
        assert!(kind.is_link());
        assert_eq!(kind.link_href(), Some("https://example.com"));
    }

    #[test]
    fn text_spans_have_no_meta() {
        assert!(SpanKind::Text.link_meta().is_none());
        assert!(!SpanKind::Text.is_link());
    }
}
