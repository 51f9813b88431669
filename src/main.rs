// RangeScout - Cloud IP range discovery and membership resolution
// Copyright (C) 2025 RangeScout Team
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use anyhow::Result;
use clap::Parser;
use rangescout::commands::CommandRouter;
use rangescout::Args;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    // Parse command line arguments
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    args.validate()?;
    CommandRouter::validate_routing(&args)?;

    display_banner(&args);

    let command = CommandRouter::route(args)?;
    info!("executing {} command", command.name());
    command.execute()
}

fn display_banner(args: &Args) {
    if !args.quiet {
        println!(
            r#"
    ╔═══════════════════════════════════════════════════════════╗
    ║                     RangeScout v0.1.0                     ║
    ║       Cloud IP Range Discovery & Membership Lookup        ║
    ╚═══════════════════════════════════════════════════════════╝

    Licensed under GPL-3.0
    "#
        );
    }
}
