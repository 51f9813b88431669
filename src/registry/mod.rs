// Built-in Range Groups
//
// Address blocks known ahead of time and shipped with the binary: two
// regional groups of Take-Two Interactive ranges collected from public
// ASN data. The blocks are embedded as written in the upstream listings,
// overlaps included, and validated once at first use.

use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;
use lazy_static::lazy_static;

use crate::error::RangeError;
use crate::expand;
use crate::Result;

// https://whois.ipip.net/AS202021
const T2_EU_BLOCKS: &[&str] = &[
    "185.56.64.0/24",
    "185.56.64.0/22",
    "185.56.65.0/24",
    "185.56.66.0/24",
    "185.56.67.0/24",
];

// https://whois.ipip.net/AS46555
const T2_US_BLOCKS: &[&str] = &[
    "104.255.104.0/24",
    "104.255.104.0/22",
    "104.255.105.0/24",
    "104.255.106.0/24",
    "104.255.107.0/24",
    "192.81.240.0/24",
    "192.81.240.0/22",
    "192.81.241.0/24",
    "192.81.242.0/24",
    "192.81.243.0/24",
    "192.81.244.0/24",
    "192.81.244.0/22",
    "192.81.245.0/24",
    "192.81.246.0/24",
    "192.81.247.0/24",
    "198.133.210.0/24",
];

lazy_static! {
    /// Built-in groups, validated once at first use
    pub static ref STATIC_GROUPS: StaticGroups =
        StaticGroups::load().expect("built-in range groups failed validation");
}

/// A named set of address blocks known ahead of time
#[derive(Debug, Clone)]
pub struct RangeGroup {
    pub name: &'static str,
    pub description: &'static str,
    blocks: &'static [&'static str],
    networks: Vec<Ipv4Network>,
}

impl RangeGroup {
    fn load(
        name: &'static str,
        description: &'static str,
        blocks: &'static [&'static str],
    ) -> Result<Self> {
        let mut networks = Vec::with_capacity(blocks.len());
        for block in blocks {
            let network = expand::parse_block(block).map_err(|err| RangeError::Config {
                message: format!("built-in group '{name}': {err}"),
            })?;
            networks.push(network);
        }
        Ok(Self {
            name,
            description,
            blocks,
            networks,
        })
    }

    /// Source CIDR strings exactly as shipped
    pub fn blocks(&self) -> &'static [&'static str] {
        self.blocks
    }

    /// Parsed form of [`blocks`](Self::blocks), in the same order
    pub fn networks(&self) -> &[Ipv4Network] {
        &self.networks
    }

    /// True when any block of the group covers the address
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.networks.iter().any(|network| network.contains(addr))
    }
}

/// All built-in groups
#[derive(Debug, Clone)]
pub struct StaticGroups {
    pub t2_eu: RangeGroup,
    pub t2_us: RangeGroup,
}

impl StaticGroups {
    fn load() -> Result<Self> {
        Ok(Self {
            t2_eu: RangeGroup::load(
                "t2-eu",
                "Take-Two Interactive, EU region (AS202021)",
                T2_EU_BLOCKS,
            )?,
            t2_us: RangeGroup::load(
                "t2-us",
                "Take-Two Interactive, US region (AS46555)",
                T2_US_BLOCKS,
            )?,
        })
    }

    /// Every group in a stable listing order
    pub fn all_groups(&self) -> Vec<&RangeGroup> {
        vec![&self.t2_eu, &self.t2_us]
    }

    /// Look up a group by name, case-insensitively
    pub fn find(&self, name: &str) -> Option<&RangeGroup> {
        self.all_groups()
            .into_iter()
            .find(|group| group.name.eq_ignore_ascii_case(name))
    }

    /// Groups whose blocks cover the address
    pub fn groups_containing(&self, addr: Ipv4Addr) -> Vec<&RangeGroup> {
        self.all_groups()
            .into_iter()
            .filter(|group| group.contains(addr))
            .collect()
    }

    /// Total number of shipped blocks across all groups
    pub fn total_blocks(&self) -> usize {
        self.all_groups()
            .iter()
            .map(|group| group.blocks.len())
            .sum()
    }
}
