//! String validation functions

use regex::Regex;

/// Validates minimum length, counted in UTF-16 code units like a browser input
pub fn has_min_length(s: &str, min: usize) -> bool {
    s.encode_utf16().count() >= min
}

/// URL validation
///
/// The value must parse as an absolute `http`, `https` or `ftp` URL with a
/// host (`https://x.com`).
pub fn is_valid_url(url_str: &str) -> bool {
    match url::Url::parse(url_str) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https" | "ftp")
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Regex pattern matching against a compiled pattern
pub fn matches_pattern(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        assert!(has_min_length("hello", 3));
        assert!(has_min_length("abc", 3));
        assert!(!has_min_length("hi", 3));
        assert!(!has_min_length("éé", 3));
        // characters outside the BMP take two code units
        assert!(has_min_length("😀😀😀😀", 8));
        assert!(!has_min_length("😀😀😀", 8));
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://x.com"));
        assert!(is_valid_url("http://test.co.uk"));
        assert!(is_valid_url("https://example.com/path?q=1"));
        assert!(is_valid_url("ftp://files.example.com"));

        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("mailto:user@example.com"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("foo://bar"));
        assert!(!is_valid_url("javascript://x.com"));
        assert!(!is_valid_url("ssh://host"));
        assert!(!is_valid_url("data://x"));
    }

    #[test]
    fn test_pattern_matching() {
        let digits = Regex::new(r"^[0-9]{10}$").unwrap();
        assert!(matches_pattern("1234567890", &digits));
        assert!(!matches_pattern("12345", &digits));
        assert!(!matches_pattern("12345678901", &digits));
    }
}
