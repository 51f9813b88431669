// Terminal Output Module
//
// Human-readable rendering with colored headers. Entry lines stay plain
// so the output pipes cleanly.

use std::path::Path;

use colored::Colorize;

use crate::expand::AddressSet;
use crate::output::{GroupsReport, LocateReport, ResolveReport};

pub fn print_locate(report: &LocateReport) {
    println!(
        "\n{}",
        format!("Candidate document URLs ({})", report.candidates.len())
            .cyan()
            .bold()
    );
    for url in &report.candidates {
        println!("  {url}");
    }
}

pub fn print_resolve(report: &ResolveReport) {
    println!(
        "\n{}",
        format!("Membership for {}", report.ip).cyan().bold()
    );
    println!("  Document: {}", report.document_source);

    if report.static_groups.is_empty() {
        println!("  Built-in groups: {}", "none".yellow());
    } else {
        println!(
            "  Built-in groups: {}",
            report.static_groups.join(", ").green().bold()
        );
    }

    if report.categories.is_empty() {
        println!(
            "  Categories (0 of {}): {}",
            report.categories_scanned,
            "none".yellow()
        );
    } else {
        println!(
            "  Categories ({} of {}):",
            report.categories.len(),
            report.categories_scanned
        );
        for category in &report.categories {
            println!(
                "    {} ({} blocks)",
                category.name.green().bold(),
                category.block_count
            );
        }
    }

    if report.skipped_prefixes > 0 {
        println!(
            "  Note: {} non-IPv4 prefix(es) skipped during parsing",
            report.skipped_prefixes
        );
    }
}

pub fn print_expand(blocks: &[String], set: &AddressSet, count_only: bool) {
    println!(
        "\n{}",
        format!("Expanded {} block(s)", blocks.len()).cyan().bold()
    );
    println!("Total: {} addresses\n", set.len());

    if count_only {
        return;
    }
    for addr in set {
        println!("  {addr}");
    }
}

pub fn print_groups(report: &GroupsReport) {
    println!("\n{}", "Built-in range groups".cyan().bold());
    for group in &report.groups {
        println!("\n  {} - {}", group.name.green().bold(), group.description);
        for block in &group.blocks {
            println!("    {block}");
        }
    }
    let total: usize = report.groups.iter().map(|group| group.blocks.len()).sum();
    println!("\nTotal: {total} blocks");
}

pub fn print_export_confirmation(path: &Path) {
    println!(
        "\n{} Results exported to JSON: {}",
        "✓".green().bold(),
        path.display()
    );
}
