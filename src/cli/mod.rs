// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 RangeScout Team
// Licensed under GPL-3.0

use clap::Parser;
use std::path::PathBuf;

/// RangeScout - Cloud IP range discovery and membership resolution
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "rangescout")]
#[command(
    about = "Discovers published cloud IP ranges and resolves address membership",
    long_about = None
)]
pub struct Args {
    // ============ Target ============
    /// IPv4 address to resolve against the published document and built-in groups
    #[arg(value_name = "IP")]
    pub target: Option<String>,

    // ============ Modes ============
    /// Scan the landing page and list candidate document URLs
    #[arg(long)]
    pub locate: bool,

    /// Expand a CIDR block into its addresses (repeatable)
    #[arg(long, value_name = "CIDR")]
    pub expand: Vec<String>,

    /// Include a built-in range group in the expansion (repeatable)
    #[arg(long, value_name = "NAME")]
    pub group: Vec<String>,

    /// List the built-in range groups and exit
    #[arg(long)]
    pub list_groups: bool,

    // ============ Document Source ============
    /// Read the range document from a file instead of the network
    #[arg(long, value_name = "FILE")]
    pub document: Option<PathBuf>,

    /// Landing page to scan instead of the built-in one
    #[arg(long, value_name = "URL")]
    pub page_url: Option<String>,

    // ============ Output ============
    /// Print only the address count when expanding
    #[arg(long)]
    pub count_only: bool,

    /// Export results to a JSON file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Pretty-print the exported JSON
    #[arg(long)]
    pub json_pretty: bool,

    /// Suppress the banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// True when any expansion input was given
    pub fn wants_expansion(&self) -> bool {
        !self.expand.is_empty() || !self.group.is_empty()
    }

    /// Validate flag combinations that clap alone cannot rule out
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.count_only && !self.wants_expansion() {
            anyhow::bail!("--count-only only applies to --expand/--group expansion.");
        }

        if self.json_pretty && self.json.is_none() {
            anyhow::bail!("--json-pretty requires --json <FILE>.");
        }

        if self.document.is_some() && self.target.is_none() {
            anyhow::bail!("--document requires an IPv4 address to resolve against it.");
        }

        if self.page_url.is_some() && self.target.is_none() && !self.locate {
            anyhow::bail!("--page-url only applies to --locate or IPv4 resolution.");
        }

        if self.document.is_some() && self.page_url.is_some() {
            anyhow::bail!(
                "Cannot use --document and --page-url together. The file replaces the whole download step."
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_validate() {
        assert!(Args::default().validate().is_ok());
    }

    #[test]
    fn test_count_only_requires_expansion() {
        let args = Args {
            count_only: true,
            ..Default::default()
        };
        assert!(args.validate().is_err());

        let args = Args {
            count_only: true,
            expand: vec!["10.0.0.0/24".to_string()],
            ..Default::default()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_json_pretty_requires_json() {
        let args = Args {
            json_pretty: true,
            ..Default::default()
        };
        assert!(args.validate().is_err());

        let args = Args {
            json_pretty: true,
            json: Some(PathBuf::from("out.json")),
            ..Default::default()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_document_requires_target() {
        let args = Args {
            document: Some(PathBuf::from("ranges.json")),
            ..Default::default()
        };
        assert!(args.validate().is_err());

        let args = Args {
            document: Some(PathBuf::from("ranges.json")),
            target: Some("13.64.0.1".to_string()),
            ..Default::default()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_document_conflicts_with_page_url() {
        let args = Args {
            document: Some(PathBuf::from("ranges.json")),
            page_url: Some("https://example.com/page".to_string()),
            target: Some("13.64.0.1".to_string()),
            ..Default::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_wants_expansion() {
        assert!(!Args::default().wants_expansion());

        let args = Args {
            expand: vec!["10.0.0.0/24".to_string()],
            ..Default::default()
        };
        assert!(args.wants_expansion());

        let args = Args {
            group: vec!["t2-eu".to_string()],
            ..Default::default()
        };
        assert!(args.wants_expansion());
    }

    #[test]
    fn test_parse_positional_target() {
        let args = Args::try_parse_from(["rangescout", "185.56.64.1"]).unwrap();
        assert_eq!(args.target.as_deref(), Some("185.56.64.1"));
    }

    #[test]
    fn test_parse_repeatable_expand() {
        let args = Args::try_parse_from([
            "rangescout",
            "--expand",
            "10.0.0.0/24",
            "--expand",
            "10.1.0.0/24",
            "--count-only",
        ])
        .unwrap();
        assert_eq!(args.expand.len(), 2);
        assert!(args.count_only);
        assert!(args.target.is_none());
    }
}
