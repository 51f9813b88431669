// RangeScout - Cloud IP range discovery and membership resolution
// Copyright (C) 2025 RangeScout Team
// Licensed under GPL-3.0

//! RangeScout scrapes a cloud provider's download page for its published
//! machine-readable IP range document, parses the document into typed
//! categories, and answers which categories cover a given IPv4 address.
//! It also ships a small registry of known static range groups and a CIDR
//! expansion engine that keeps huge blocks cheap to hold and exact to
//! count.

pub mod cli;
pub mod commands;
pub mod constants;
pub mod document;
pub mod error;
pub mod expand;
pub mod fetch;
pub mod locator;
pub mod output;
pub mod registry;
pub mod resolver;

pub use crate::cli::Args;
pub use crate::document::{Category, RangeDocument, SkippedPrefix};
pub use crate::error::RangeError;
pub use crate::expand::AddressSet;
pub use crate::registry::STATIC_GROUPS;

/// Result type used across RangeScout
pub type Result<T> = std::result::Result<T, RangeError>;
