// Membership Resolution
//
// Answers which categories of a parsed range document cover a given
// IPv4 address.

use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;
use tracing::debug;

use crate::document::{Category, RangeDocument};
use crate::error::RangeError;
use crate::Result;

/// Parse the target of a membership query.
///
/// Only dotted-quad IPv4 is accepted; hostnames and IPv6 fail with
/// [`RangeError::InvalidAddress`].
pub fn parse_address(ip: &str) -> Result<Ipv4Addr> {
    ip.parse::<Ipv4Addr>()
        .map_err(|source| RangeError::InvalidAddress {
            addr: ip.to_string(),
            source,
        })
}

/// Categories of `document` whose blocks cover `addr`, in document order.
///
/// Each category appears at most once no matter how many of its blocks
/// match; the scan of a category stops at its first covering block.
/// Retained prefixes were validated by the parser, so one that still
/// fails to parse here is treated as not matching.
pub fn categories_containing<'d>(addr: Ipv4Addr, document: &'d RangeDocument) -> Vec<&'d Category> {
    let matches: Vec<&Category> = document
        .categories
        .iter()
        .filter(|category| {
            category.address_prefixes.iter().any(|prefix| {
                prefix
                    .parse::<Ipv4Network>()
                    .map(|network| network.contains(addr))
                    .unwrap_or(false)
            })
        })
        .collect();

    debug!(
        "{} covered by {} of {} categories",
        addr,
        matches.len(),
        document.categories.len()
    );
    matches
}

/// Resolve a textual IPv4 address against a parsed document.
///
/// The address is validated before any scanning happens. An empty result
/// means no category covers the address, not a failure.
pub fn find_categories_containing<'d>(
    ip: &str,
    document: &'d RangeDocument,
) -> Result<Vec<&'d Category>> {
    let addr = parse_address(ip)?;
    Ok(categories_containing(addr, document))
}
