// Range Document Parsing
//
// Decodes the provider's published JSON document into typed categories.
// The document carries a top-level `values` array of service records,
// each with a `name` and a `properties.addressPrefixes` array of CIDR
// strings. IPv6 prefixes share those arrays with IPv4 ones.

use ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RangeError;
use crate::Result;

/// One named service category and its retained IPv4 blocks
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub address_prefixes: Vec<String>,
}

/// A prefix dropped during parsing, kept for diagnostics
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkippedPrefix {
    pub category: String,
    pub prefix: String,
}

/// Parsed range document: every category in publication order, plus the
/// prefixes that were dropped because they are not IPv4 CIDR blocks
#[derive(Debug, Clone, Serialize)]
pub struct RangeDocument {
    pub categories: Vec<Category>,
    pub skipped: Vec<SkippedPrefix>,
}

impl RangeDocument {
    /// Look up a category by its exact name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Total number of retained IPv4 blocks across all categories
    pub fn total_blocks(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.address_prefixes.len())
            .sum()
    }
}

/// Decode raw document bytes into a [`RangeDocument`].
///
/// Bytes that are not JSON fail with the decoder's own error; JSON that
/// lacks the expected record structure fails with
/// [`RangeError::MalformedDocument`]. Prefixes that are not IPv4 CIDR
/// blocks are skipped and reported, never silently dropped, and a
/// category left with zero blocks stays in the result.
pub fn parse(raw: &[u8]) -> Result<RangeDocument> {
    let value: serde_json::Value = serde_json::from_slice(raw)?;
    let raw_document: RawDocument =
        serde_json::from_value(value).map_err(|err| RangeError::MalformedDocument {
            details: err.to_string(),
        })?;

    let mut categories = Vec::with_capacity(raw_document.values.len());
    let mut skipped = Vec::new();

    for record in raw_document.values {
        let mut retained = Vec::with_capacity(record.properties.address_prefixes.len());
        for prefix in record.properties.address_prefixes {
            if prefix.parse::<Ipv4Network>().is_ok() {
                retained.push(prefix);
            } else {
                skipped.push(SkippedPrefix {
                    category: record.name.clone(),
                    prefix,
                });
            }
        }
        categories.push(Category {
            name: record.name,
            address_prefixes: retained,
        });
    }

    if !skipped.is_empty() {
        warn!("skipped {} non-IPv4 prefix(es) while parsing", skipped.len());
    }
    debug!(
        "parsed {} categories carrying {} IPv4 block(s)",
        categories.len(),
        categories
            .iter()
            .map(|category| category.address_prefixes.len())
            .sum::<usize>()
    );

    Ok(RangeDocument { categories, skipped })
}

// Wire-format records, private to the parser

#[derive(Debug, Deserialize)]
struct RawDocument {
    values: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    properties: RawProperties,
}

#[derive(Debug, Deserialize)]
struct RawProperties {
    #[serde(rename = "addressPrefixes")]
    address_prefixes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_bytes(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_parse_typical_document() {
        let raw = doc_bytes(json!({
            "changeNumber": 342,
            "cloud": "Public",
            "values": [
                {
                    "name": "AzureCloud",
                    "id": "AzureCloud",
                    "properties": {
                        "changeNumber": 25,
                        "region": "",
                        "addressPrefixes": ["13.64.0.0/11", "13.96.0.0/13"]
                    }
                },
                {
                    "name": "Storage",
                    "properties": {
                        "addressPrefixes": ["52.239.152.0/23"]
                    }
                }
            ]
        }));

        let document = parse(&raw).unwrap();
        assert_eq!(document.categories.len(), 2);
        assert_eq!(document.categories[0].name, "AzureCloud");
        assert_eq!(document.categories[1].name, "Storage");
        assert_eq!(document.total_blocks(), 3);
        assert!(document.skipped.is_empty());
    }

    #[test]
    fn test_parse_skips_non_ipv4_prefixes() {
        let raw = doc_bytes(json!({
            "values": [{
                "name": "Mixed",
                "properties": {
                    "addressPrefixes": ["10.0.0.0/8", "not-a-cidr", "2603:1000::/40"]
                }
            }]
        }));

        let document = parse(&raw).unwrap();
        assert_eq!(document.categories[0].address_prefixes, vec!["10.0.0.0/8"]);
        assert_eq!(document.skipped.len(), 2);
        assert_eq!(document.skipped[0].category, "Mixed");
        assert_eq!(document.skipped[0].prefix, "not-a-cidr");
        assert_eq!(document.skipped[1].prefix, "2603:1000::/40");
    }

    #[test]
    fn test_parse_keeps_empty_category() {
        let raw = doc_bytes(json!({
            "values": [{
                "name": "Ipv6Only",
                "properties": { "addressPrefixes": ["2603:1000::/40"] }
            }]
        }));

        let document = parse(&raw).unwrap();
        assert_eq!(document.categories.len(), 1);
        assert!(document.categories[0].address_prefixes.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse(b"{ this is not json").unwrap_err();
        assert!(matches!(err, RangeError::Json(_)));
    }

    #[test]
    fn test_parse_rejects_missing_values() {
        let raw = doc_bytes(json!({ "cloud": "Public" }));
        let err = parse(&raw).unwrap_err();
        assert!(matches!(err, RangeError::MalformedDocument { .. }));
    }

    #[test]
    fn test_parse_rejects_record_without_properties() {
        let raw = doc_bytes(json!({
            "values": [{ "name": "Broken" }]
        }));
        let err = parse(&raw).unwrap_err();
        assert!(matches!(err, RangeError::MalformedDocument { .. }));
    }

    #[test]
    fn test_parse_preserves_category_order() {
        let raw = doc_bytes(json!({
            "values": [
                { "name": "Zeta", "properties": { "addressPrefixes": [] } },
                { "name": "Alpha", "properties": { "addressPrefixes": [] } }
            ]
        }));

        let document = parse(&raw).unwrap();
        let names: Vec<&str> = document
            .categories
            .iter()
            .map(|category| category.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_category_lookup_by_name() {
        let raw = doc_bytes(json!({
            "values": [{
               "name": "Storage",
               "properties": { "addressPrefixes": ["52.239.152.0/23"] }
            }]
        }));

        let document = parse(&raw).unwrap();
        assert!(document.category("Storage").is_some());
        assert!(document.category("storage").is_none());
        assert!(document.category("Compute").is_none());
    }
}
