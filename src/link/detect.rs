//! Plain-text URL detection.
//!
//! Detection is delegated to `linkify`; the rest of the crate only ever
//! sees the resulting [`LinkMatch`] list and treats the finder as a black
//! box. Matches come back ordered by position and non-overlapping, which is
//! exactly the contract the segmenter expects.

use linkify::{LinkFinder, LinkKind};

use crate::link::segment::LinkMatch;

/// Finds URL occurrences in raw message text.
#[derive(Debug)]
pub struct UrlDetector {
    finder: LinkFinder,
}

impl Default for UrlDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlDetector {
    pub fn new() -> Self {
        let mut finder = LinkFinder::new();
        finder.kinds(&[LinkKind::Url]);
        finder.url_must_have_scheme(true);
        Self { finder }
    }

    /// Scan `text` and return every URL occurrence.
    ///
    /// The returned ranges and URLs denote the same substring, so a hit on
    /// any byte of a range resolves to the URL that will be opened.
    pub fn detect(&self, text: &str) -> Vec<LinkMatch> {
        let mut matches = Vec::new();
        for link in self.finder.links(text) {
            let trimmed = trim_trailing_punctuation(link.as_str());
            if trimmed.is_empty() {
                continue;
            }
            let range = link.start()..link.start() + trimmed.len();
            matches.push(LinkMatch::new(range, trimmed));
        }
        matches
    }
}

// The finder excludes most sentence punctuation on its own, but a stray
// quote or comma directly after a URL reads as prose, not address. Brackets
// are left alone: they can be part of the path.
fn trim_trailing_punctuation(s: &str) -> &str {
    s.trim_end_matches(['.', ',', ';', ':', '!', '?', '\'', '"'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_url_with_surrounding_text() {
        let detector = UrlDetector::new();
        let text = "see http://a.com now";
        let matches = detector.detect(text);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].range, 4..16);
        assert_eq!(matches[0].url, "http://a.com");
        assert_eq!(&text[matches[0].range.clone()], matches[0].url);
    }

    #[test]
    fn plain_prose_yields_no_matches() {
        let detector = UrlDetector::new();
        assert!(detector.detect("nothing to click here").is_empty());
    }

    #[test]
    fn schemeless_hosts_are_ignored() {
        let detector = UrlDetector::new();
        assert!(detector.detect("ping example.com for me").is_empty());
    }

    #[test]
    fn multiple_urls_come_back_ordered() {
        let detector = UrlDetector::new();
        let text = "mirrors: https://a.example.org/pkg and https://b.example.org/pkg";
        let matches = detector.detect(text);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].range.end <= matches[1].range.start);
        assert_eq!(matches[0].url, "https://a.example.org/pkg");
        assert_eq!(matches[1].url, "https://b.example.org/pkg");
    }

    #[test]
    fn sentence_punctuation_stays_out_of_the_url() {
        let detector = UrlDetector::new();
        let matches = detector.detect("read https://example.com/doc, then reply");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].url, "https://example.com/doc");
    }

    #[test]
    fn range_and_url_agree_for_every_match() {
        let detector = UrlDetector::new();
        let text = "a https://x.dev/path?q=1 b http://y.dev. c";
        for m in detector.detect(text) {
            assert_eq!(&text[m.range.clone()], m.url);
        }
    }
}
