// Range Expansion
//
// Turns IPv4 CIDR blocks into queryable address sets. Sets are stored as
// sorted disjoint spans instead of materialized address lists, so a /8
// (16_777_216 addresses) or even a /0 costs one span; the addresses
// stream out in ascending order on demand.

use std::cmp::Ordering;
use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;
use tracing::debug;

use crate::error::RangeError;
use crate::Result;

/// Parse a single IPv4 CIDR block.
///
/// Host bits are accepted and masked off, so `185.56.64.9/24` covers the
/// same span as `185.56.64.0/24`. IPv6 notation and malformed strings fail
/// with [`RangeError::InvalidRange`].
pub fn parse_block(block: &str) -> Result<Ipv4Network> {
    block
        .parse::<Ipv4Network>()
        .map_err(|source| RangeError::InvalidRange {
            cidr: block.to_string(),
            source,
        })
}

/// Expand one CIDR block into its full address set.
pub fn expand(block: &str) -> Result<AddressSet> {
    let network = parse_block(block)?;
    Ok(AddressSet::from_networks(vec![network]))
}

/// Expand a list of CIDR blocks into one combined set.
///
/// Overlapping blocks contribute their shared addresses once. Any invalid
/// block fails the whole call; nothing is partially expanded.
pub fn expand_all<I, S>(blocks: I) -> Result<AddressSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut networks = Vec::new();
    for block in blocks {
        networks.push(parse_block(block.as_ref())?);
    }
    Ok(AddressSet::from_networks(networks))
}

/// Number of addresses covered by a prefix length, exact up to /0
fn block_size(prefix: u8) -> u64 {
    2u64.pow(32 - u32::from(prefix))
}

/// Inclusive run of addresses in host byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: u32,
    end: u32,
}

impl Span {
    fn from_network(network: Ipv4Network) -> Self {
        let start = u32::from(network.network());
        let size = block_size(network.prefix());
        // start is the masked network address, so start + size - 1 fits in u32
        let end = (u64::from(start) + size - 1) as u32;
        Self { start, end }
    }

    fn len(&self) -> u64 {
        u64::from(self.end) - u64::from(self.start) + 1
    }
}

/// A set of IPv4 addresses stored as sorted, disjoint, inclusive spans
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSet {
    spans: Vec<Span>,
}

impl AddressSet {
    /// Build a set from parsed networks, merging overlaps and adjacency
    pub fn from_networks(networks: Vec<Ipv4Network>) -> Self {
        let block_count = networks.len();
        let mut spans: Vec<Span> = networks.into_iter().map(Span::from_network).collect();
        spans.sort_by_key(|span| (span.start, span.end));

        let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if u64::from(span.start) <= u64::from(last.end) + 1 => {
                    last.end = last.end.max(span.end);
                }
                _ => merged.push(span),
            }
        }

        debug!("merged {} block(s) into {} span(s)", block_count, merged.len());
        Self { spans: merged }
    }

    /// Exact number of addresses in the set.
    ///
    /// Returns u64 because a single `0.0.0.0/0` already holds 2^32 addresses.
    pub fn len(&self) -> u64 {
        self.spans.iter().map(Span::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Membership test without any iteration
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let ip = u32::from(addr);
        self.spans
            .binary_search_by(|span| {
                if span.end < ip {
                    Ordering::Less
                } else if span.start > ip {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Iterate every address in ascending order without materializing the set
    pub fn iter(&self) -> AddressIter<'_> {
        AddressIter {
            spans: self.spans.iter(),
            cursor: None,
        }
    }
}

impl<'a> IntoIterator for &'a AddressSet {
    type Item = Ipv4Addr;
    type IntoIter = AddressIter<'a>;

    fn into_iter(self) -> AddressIter<'a> {
        self.iter()
    }
}

/// Streaming iterator over an [`AddressSet`]
pub struct AddressIter<'a> {
    spans: std::slice::Iter<'a, Span>,
    // u64 cursor so a span ending at 255.255.255.255 terminates cleanly
    cursor: Option<(u64, u64)>,
}

impl Iterator for AddressIter<'_> {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        loop {
            match self.cursor {
                Some((next, end)) if next <= end => {
                    self.cursor = Some((next + 1, end));
                    return Some(Ipv4Addr::from(next as u32));
                }
                _ => {
                    let span = self.spans.next()?;
                    self.cursor = Some((u64::from(span.start), u64::from(span.end)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_slash24_has_256_addresses() {
        let set = expand("185.56.64.0/24").unwrap();
        assert_eq!(set.len(), 256);
        assert_eq!(set.iter().next(), Some(Ipv4Addr::new(185, 56, 64, 0)));
        assert_eq!(set.iter().last(), Some(Ipv4Addr::new(185, 56, 64, 255)));
    }

    #[test]
    fn test_expand_slash32_is_single_address() {
        let set = expand("8.8.8.8/32").unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(Ipv4Addr::new(8, 8, 8, 8)));
        assert!(!set.contains(Ipv4Addr::new(8, 8, 8, 9)));
    }

    #[test]
    fn test_expand_masks_host_bits() {
        let set = expand("185.56.64.9/24").unwrap();
        assert_eq!(set.len(), 256);
        assert_eq!(set.iter().next(), Some(Ipv4Addr::new(185, 56, 64, 0)));
    }

    #[test]
    fn test_expand_slash0_counts_whole_space() {
        let set = expand("0.0.0.0/0").unwrap();
        assert_eq!(set.len(), 4_294_967_296);
        assert!(set.contains(Ipv4Addr::new(0, 0, 0, 0)));
        assert!(set.contains(Ipv4Addr::new(255, 255, 255, 255)));
    }

    #[test]
    fn test_expand_rejects_invalid_block() {
        let err = expand("not-a-cidr").unwrap_err();
        match err {
            RangeError::InvalidRange { cidr, .. } => assert_eq!(cidr, "not-a-cidr"),
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn test_expand_rejects_ipv6_block() {
        let err = expand("2603:1000::/40").unwrap_err();
        assert!(matches!(err, RangeError::InvalidRange { .. }));
    }

    #[test]
    fn test_expand_rejects_out_of_range_prefix() {
        assert!(expand("10.0.0.0/33").is_err());
    }

    #[test]
    fn test_expand_all_dedups_overlapping_blocks() {
        let set = expand_all(["185.56.64.0/24", "185.56.64.0/22"]).unwrap();
        assert_eq!(set.len(), 1024);
    }

    #[test]
    fn test_expand_all_identical_blocks_count_once() {
        let set = expand_all(["10.1.0.0/16", "10.1.0.0/16"]).unwrap();
        assert_eq!(set.len(), 65_536);
    }

    #[test]
    fn test_expand_all_disjoint_blocks_sum() {
        let set = expand_all(["10.0.0.0/24", "192.168.0.0/24"]).unwrap();
        assert_eq!(set.len(), 512);
        assert_eq!(set.iter().next(), Some(Ipv4Addr::new(10, 0, 0, 0)));
        assert_eq!(set.iter().last(), Some(Ipv4Addr::new(192, 168, 0, 255)));
    }

    #[test]
    fn test_expand_all_fails_on_any_invalid_block() {
        let err = expand_all(["10.0.0.0/8", "bogus"]).unwrap_err();
        assert!(matches!(err, RangeError::InvalidRange { .. }));
    }

    #[test]
    fn test_expand_all_empty_input_is_empty_set() {
        let set = expand_all(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().next(), None);
    }

    #[test]
    fn test_contains_span_boundaries() {
        let set = expand("10.0.0.0/30").unwrap();
        assert!(set.contains(Ipv4Addr::new(10, 0, 0, 0)));
        assert!(set.contains(Ipv4Addr::new(10, 0, 0, 3)));
        assert!(!set.contains(Ipv4Addr::new(10, 0, 0, 4)));
        assert!(!set.contains(Ipv4Addr::new(9, 255, 255, 255)));
    }

    #[test]
    fn test_iteration_is_ascending_across_spans() {
        let set = expand_all(["192.168.1.0/30", "10.0.0.0/30"]).unwrap();
        let addrs: Vec<Ipv4Addr> = set.iter().collect();
        assert_eq!(addrs.len(), 8);
        let mut sorted = addrs.clone();
        sorted.sort();
        assert_eq!(addrs, sorted);
        assert_eq!(addrs[0], Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(addrs[7], Ipv4Addr::new(192, 168, 1, 3));
    }

    #[test]
    fn test_adjacent_blocks_merge_without_loss() {
        let set = expand_all(["10.0.0.0/25", "10.0.0.128/25"]).unwrap();
        assert_eq!(set.len(), 256);
        assert!(set.contains(Ipv4Addr::new(10, 0, 0, 127)));
        assert!(set.contains(Ipv4Addr::new(10, 0, 0, 128)));
    }
}
