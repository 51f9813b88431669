// Output module - Report types, terminal rendering, JSON export

use serde::Serialize;

use crate::cli::Args;

pub mod json;
pub mod terminal;

pub use terminal::{print_expand, print_groups, print_locate, print_resolve};

/// Result of a landing page scan
#[derive(Debug, Clone, Serialize)]
pub struct LocateReport {
    pub page_url: String,
    /// Distinct candidate URLs, sorted
    pub candidates: Vec<String>,
}

/// Result of a membership resolution
#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    pub ip: String,
    /// Where the range document came from: a URL or a local path
    pub document_source: String,
    pub categories_scanned: usize,
    pub static_groups: Vec<String>,
    pub categories: Vec<CategoryMatch>,
    pub skipped_prefixes: usize,
}

/// One document category covering the resolved address
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMatch {
    pub name: String,
    pub block_count: usize,
}

/// Result of a CIDR expansion
#[derive(Debug, Clone, Serialize)]
pub struct ExpandReport {
    pub blocks: Vec<String>,
    pub address_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
}

/// Listing of the built-in range groups
#[derive(Debug, Clone, Serialize)]
pub struct GroupsReport {
    pub groups: Vec<GroupInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupInfo {
    pub name: String,
    pub description: String,
    pub blocks: Vec<String>,
}

/// Write the report to the file named by --json, if any
pub fn maybe_export<T: Serialize>(report: &T, args: &Args) -> anyhow::Result<()> {
    if let Some(path) = &args.json {
        json::write_json_file(report, path, args.json_pretty)?;
        terminal::print_export_confirmation(path);
    }
    Ok(())
}
