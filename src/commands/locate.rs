// Landing Page Scan Command
//
// Fetches the landing page and lists every candidate document URL it
// advertises, without downloading any of them.

use anyhow::Result;
use tracing::info;

use crate::cli::Args;
use crate::commands::command::Command;
use crate::constants::RANGE_PAGE_URL;
use crate::fetch::HttpFetcher;
use crate::locator;
use crate::output::{self, LocateReport};

pub struct LocateCommand {
    args: Args,
}

impl LocateCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

impl Command for LocateCommand {
    fn execute(&self) -> Result<()> {
        let page_url = self
            .args
            .page_url
            .clone()
            .unwrap_or_else(|| RANGE_PAGE_URL.to_string());
        info!("scanning {} for document links", page_url);

        let fetcher = HttpFetcher::new();
        let page = fetcher.fetch_bytes(&page_url)?;
        let candidates = locator::find_download_candidates(&page)?;

        let mut urls: Vec<String> = candidates.into_iter().collect();
        urls.sort();

        let report = LocateReport {
            page_url,
            candidates: urls,
        };
        output::print_locate(&report);
        output::maybe_export(&report, &self.args)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "locate"
    }
}
