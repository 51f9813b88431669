// Built-in Group Listing Command

use anyhow::Result;

use crate::cli::Args;
use crate::commands::command::Command;
use crate::output::{self, GroupInfo, GroupsReport};
use crate::registry::STATIC_GROUPS;

pub struct GroupsCommand {
    args: Args,
}

impl GroupsCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

impl Command for GroupsCommand {
    fn execute(&self) -> Result<()> {
        let report = GroupsReport {
            groups: STATIC_GROUPS
                .all_groups()
                .iter()
                .map(|group| GroupInfo {
                    name: group.name.to_string(),
                    description: group.description.to_string(),
                    blocks: group.blocks().iter().map(|block| block.to_string()).collect(),
                })
                .collect(),
        };
        output::print_groups(&report);
        output::maybe_export(&report, &self.args)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "list-groups"
    }
}
