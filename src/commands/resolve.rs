// Membership Resolution Command
//
// The full pipeline: locate the range document, download it, parse it,
// and answer which categories and built-in groups cover the target
// address. A local document file replaces the two network steps.

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::Args;
use crate::commands::command::Command;
use crate::constants::RANGE_PAGE_URL;
use crate::document::{self, RangeDocument};
use crate::fetch::HttpFetcher;
use crate::locator;
use crate::output::{self, CategoryMatch, ResolveReport};
use crate::registry::STATIC_GROUPS;
use crate::resolver;

pub struct ResolveCommand {
    args: Args,
}

impl ResolveCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Load the range document and report where it came from
    fn load_document(&self) -> Result<(RangeDocument, String)> {
        if let Some(path) = &self.args.document {
            let raw = fs::read(path)
                .with_context(|| format!("reading range document {}", path.display()))?;
            let parsed = document::parse(&raw)?;
            return Ok((parsed, path.display().to_string()));
        }

        let page_url = self.args.page_url.as_deref().unwrap_or(RANGE_PAGE_URL);
        let fetcher = HttpFetcher::new();
        let page = fetcher.fetch_bytes(page_url)?;
        let document_url = locator::resolve_document_url(&page)?;
        info!("downloading range document from {}", document_url);

        let raw = fetcher.fetch_bytes(&document_url)?;
        let parsed = document::parse(&raw)?;
        Ok((parsed, document_url))
    }
}

impl Command for ResolveCommand {
    fn execute(&self) -> Result<()> {
        let ip = self.args.target.clone().unwrap_or_default();
        // Reject a bad address before any network traffic
        let addr = resolver::parse_address(&ip)?;

        let (parsed, source) = self.load_document()?;
        let categories = resolver::categories_containing(addr, &parsed);
        let groups = STATIC_GROUPS.groups_containing(addr);

        let report = ResolveReport {
            ip,
            document_source: source,
            categories_scanned: parsed.categories.len(),
            static_groups: groups.iter().map(|group| group.name.to_string()).collect(),
            categories: categories
                .iter()
                .map(|category| CategoryMatch {
                    name: category.name.clone(),
                    block_count: category.address_prefixes.len(),
                })
                .collect(),
            skipped_prefixes: parsed.skipped.len(),
        };
        output::print_resolve(&report);
        output::maybe_export(&report, &self.args)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "resolve"
    }
}
