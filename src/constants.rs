// RangeScout - Cloud IP range discovery and membership resolution
// Copyright (C) 2025 RangeScout Team
// Licensed under GPL-3.0

//! Fixed external constants: where the provider publishes its range
//! document and how RangeScout talks to it.

use std::time::Duration;

// ==================== Document discovery ====================

/// Landing page that advertises the current machine-readable range document.
///
/// The provider publishes a fresh document every 7 days, and newly listed
/// ranges are not put into service for another 7 days after publication.
pub const RANGE_PAGE_URL: &str =
    "https://www.microsoft.com/en-us/download/confirmation.aspx?id=56519";

/// Pattern a download candidate must match: an https link on the provider's
/// download host that ends in `.json`, with no quote inside the URL.
pub const DOWNLOAD_LINK_PATTERN: &str = r#"https://download\.microsoft\.com/download[^"]*\.json"#;

// ==================== HTTP ====================

/// Timeout applied to every outbound request
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every outbound request
pub const USER_AGENT: &str = "RangeScout/0.1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_page_url_is_https() {
        assert!(RANGE_PAGE_URL.starts_with("https://"));
    }

    #[test]
    fn test_download_link_pattern_compiles() {
        let re = regex::Regex::new(DOWNLOAD_LINK_PATTERN).unwrap();
        assert!(re.is_match(
            r#"<a href="https://download.microsoft.com/download/2/a/ServiceTags_Public.json">"#
        ));
        assert!(!re.is_match("https://download.microsoft.com/download/2/a/notes.txt"));
    }

    #[test]
    fn test_http_timeout_is_reasonable() {
        assert!(HTTP_REQUEST_TIMEOUT.as_secs() >= 5);
        assert!(HTTP_REQUEST_TIMEOUT.as_secs() <= 120);
    }
}
