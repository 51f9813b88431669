// Download Link Discovery
//
// Scans the provider's landing page for direct links to the
// machine-readable range document. The page embeds the link in markup and
// script, so discovery is a byte-level pattern scan, not an HTML parse.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::constants::DOWNLOAD_LINK_PATTERN;
use crate::error::RangeError;
use crate::Result;

lazy_static! {
    static ref DOWNLOAD_LINK_RE: Regex =
        Regex::new(DOWNLOAD_LINK_PATTERN).expect("download link pattern must compile");
}

/// Collect every distinct download URL embedded in the landing page.
///
/// The page bytes are decoded as UTF-8 with invalid sequences replaced;
/// replacement characters can never match the pattern, so a partially
/// binary page still yields its links. Fails with
/// [`RangeError::DownloadLinkNotFound`] when no link matches, which is
/// how a provider page layout change shows up.
pub fn find_download_candidates(page: &[u8]) -> Result<HashSet<String>> {
    let text = String::from_utf8_lossy(page);
    let candidates: HashSet<String> = DOWNLOAD_LINK_RE
        .find_iter(&text)
        .map(|link| link.as_str().to_string())
        .collect();

    if candidates.is_empty() {
        return Err(RangeError::DownloadLinkNotFound {
            pattern: DOWNLOAD_LINK_PATTERN.to_string(),
        });
    }

    debug!("found {} candidate download link(s)", candidates.len());
    Ok(candidates)
}

/// Scan the page and choose the document URL.
///
/// The page repeats the same link several times and occasionally carries
/// more than one distinct candidate; the lexicographically first one is
/// chosen so repeated runs over the same page pick the same link.
pub fn resolve_document_url(page: &[u8]) -> Result<String> {
    let candidates = find_download_candidates(page)?;
    let mut sorted: Vec<String> = candidates.into_iter().collect();
    sorted.sort();
    sorted
        .into_iter()
        .next()
        .ok_or_else(|| RangeError::DownloadLinkNotFound {
            pattern: DOWNLOAD_LINK_PATTERN.to_string(),
        })
}
