//! OS URL dispatch.

use tracing::debug;

/// Hand `url` to the platform's default handler, detached. Fire and
/// forget: failures are logged, never surfaced. Only web schemes are
/// dispatched; anything else is dropped.
pub fn open_url(url: &str) {
    if !is_web_url(url) {
        debug!(url, "refusing to open non-web url");
        return;
    }
    if let Err(err) = open::that_detached(url) {
        debug!(url, error = %err, "url dispatch failed");
    }
}

fn is_web_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_schemes_pass_the_gate() {
        assert!(is_web_url("http://example.com"));
        assert!(is_web_url("https://example.com/path?q=1"));
        assert!(is_web_url("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn other_schemes_do_not() {
        assert!(!is_web_url("file:///etc/passwd"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url("ftp://mirror.example.com"));
        assert!(!is_web_url("example.com"));
    }
}
