// Range Expansion Command
//
// Expands literal CIDR blocks and built-in groups into one combined,
// duplicate-free address set.

use anyhow::{bail, Result};
use tracing::info;

use crate::cli::Args;
use crate::commands::command::Command;
use crate::expand::expand_all;
use crate::output::{self, ExpandReport};
use crate::registry::STATIC_GROUPS;

pub struct ExpandCommand {
    args: Args,
}

impl ExpandCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Literal --expand blocks plus every block of each named --group
    fn collect_blocks(&self) -> Result<Vec<String>> {
        let mut blocks: Vec<String> = self.args.expand.clone();
        for name in &self.args.group {
            match STATIC_GROUPS.find(name) {
                Some(group) => {
                    blocks.extend(group.blocks().iter().map(|block| block.to_string()));
                }
                None => bail!("unknown range group '{}' (see --list-groups)", name),
            }
        }
        Ok(blocks)
    }
}

impl Command for ExpandCommand {
    fn execute(&self) -> Result<()> {
        let blocks = self.collect_blocks()?;
        info!("expanding {} block(s)", blocks.len());

        let set = expand_all(&blocks)?;
        output::print_expand(&blocks, &set, self.args.count_only);

        if self.args.json.is_some() {
            let addresses = if self.args.count_only {
                None
            } else {
                Some(set.iter().map(|addr| addr.to_string()).collect())
            };
            let report = ExpandReport {
                blocks,
                address_count: set.len(),
                addresses,
            };
            output::maybe_export(&report, &self.args)?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "expand"
    }
}
