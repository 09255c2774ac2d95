//! Splitting message text into plain and link runs.
//!
//! The segmenter takes the ordered match list produced by
//! [`detect`](crate::link::detect) and breaks the text into an alternating
//! sequence of plain and link segments. Concatenating the segment text
//! always reproduces the input exactly; renderers rely on that to keep the
//! styled output aligned with the source text byte-for-byte.

use std::ops::Range;

/// A detected link occurrence: a byte range within the source text plus the
/// URL to open when that range is activated.
///
/// Match lists are ordered by position and non-overlapping, with both range
/// ends on char boundaries. The URL is not optional; a detector that cannot
/// resolve one simply does not produce a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    pub range: Range<usize>,
    pub url: String,
}

impl LinkMatch {
    pub fn new(range: Range<usize>, url: impl Into<String>) -> Self {
        Self {
            range,
            url: url.into(),
        }
    }

    /// Whether `offset` falls inside the matched range.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.range.contains(&offset)
    }
}

/// A contiguous run of message text, either plain or carrying a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Link { text: &'a str, url: &'a str },
}

impl<'a> Segment<'a> {
    /// The text this segment covers.
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(text) => text,
            Segment::Link { text, .. } => text,
        }
    }

    pub fn url(&self) -> Option<&'a str> {
        match self {
            Segment::Plain(_) => None,
            Segment::Link { url, .. } => Some(url),
        }
    }

    #[inline]
    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link { .. })
    }
}

/// Split `text` into an ordered segment sequence covering it exactly.
///
/// An empty match list yields a single plain segment (or nothing when the
/// text itself is empty). Adjacent matches produce no empty plain segment
/// between them.
pub fn segment_text<'a>(text: &'a str, matches: &'a [LinkMatch]) -> Vec<Segment<'a>> {
    segment_window(text, matches, 0..text.len())
}

/// Split one `window` of `text` into segments, clipping matches to the
/// window. Renderers use this to segment a wrapped line at a time.
pub fn segment_window<'a>(
    text: &'a str,
    matches: &'a [LinkMatch],
    window: Range<usize>,
) -> Vec<Segment<'a>> {
    debug_assert!(window.end <= text.len());

    let mut segments = Vec::new();
    if window.start >= window.end {
        return segments;
    }

    let mut cursor = window.start;
    for m in matches {
        if m.range.end <= window.start {
            continue;
        }
        if m.range.start >= window.end {
            break;
        }
        let start = m.range.start.max(window.start);
        let end = m.range.end.min(window.end);
        debug_assert!(
            start >= cursor,
            "match list must be ordered and non-overlapping"
        );
        if start > cursor {
            segments.push(Segment::Plain(&text[cursor..start]));
        }
        segments.push(Segment::Link {
            text: &text[start..end],
            url: &m.url,
        });
        cursor = end;
    }

    if cursor < window.end {
        segments.push(Segment::Plain(&text[cursor..window.end]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text()).collect()
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(segment_text("", &[]).is_empty());
    }

    #[test]
    fn no_matches_yields_single_plain_segment() {
        let segments = segment_text("just words", &[]);
        assert_eq!(segments, vec![Segment::Plain("just words")]);
    }

    #[test]
    fn link_between_plain_runs() {
        let text = "see http://a.com now";
        let matches = vec![LinkMatch::new(4..16, "http://a.com")];
        let segments = segment_text(text, &matches);
        assert_eq!(
            segments,
            vec![
                Segment::Plain("see "),
                Segment::Link {
                    text: "http://a.com",
                    url: "http://a.com",
                },
                Segment::Plain(" now"),
            ]
        );
        assert_eq!(segments[0].url(), None);
        assert_eq!(segments[1].url(), Some("http://a.com"));
    }

    #[test]
    fn match_covering_whole_text_yields_single_link() {
        let text = "http://a.com";
        let matches = vec![LinkMatch::new(0..text.len(), "http://a.com")];
        let segments = segment_text(text, &matches);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_link());
        assert_eq!(segments[0].text(), text);
    }

    #[test]
    fn adjacent_matches_emit_no_empty_plain_segment() {
        let text = "http://a.comhttp://b.com";
        let matches = vec![
            LinkMatch::new(0..12, "http://a.com"),
            LinkMatch::new(12..24, "http://b.com"),
        ];
        let segments = segment_text(text, &matches);
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(Segment::is_link));
        assert_eq!(concat(&segments), text);
    }

    #[test]
    fn concatenation_reproduces_text() {
        let text = "a http://x.dev b https://y.dev c";
        let matches = vec![
            LinkMatch::new(2..14, "http://x.dev"),
            LinkMatch::new(17..30, "https://y.dev"),
        ];
        assert_eq!(concat(&segment_text(text, &matches)), text);
    }

    #[test]
    fn window_clips_match_ranges() {
        let text = "see http://a.com now";
        let matches = vec![LinkMatch::new(4..16, "http://a.com")];

        // A window covering half the link keeps the clipped run tagged as
        // a link with the full URL.
        let segments = segment_window(text, &matches, 0..10);
        assert_eq!(
            segments,
            vec![
                Segment::Plain("see "),
                Segment::Link {
                    text: "http:/",
                    url: "http://a.com",
                },
            ]
        );

        let tail = segment_window(text, &matches, 16..text.len());
        assert_eq!(tail, vec![Segment::Plain(" now")]);
    }

    #[test]
    fn empty_window_yields_no_segments() {
        let matches = vec![LinkMatch::new(0..4, "http://a.com")];
        assert!(segment_window("http://a.com", &matches, 3..3).is_empty());
    }

    #[test]
    fn segmentation_is_stable_across_calls() {
        let text = "ping https://example.com pong";
        let matches = vec![LinkMatch::new(5..24, "https://example.com")];
        assert_eq!(segment_text(text, &matches), segment_text(text, &matches));
    }
}
