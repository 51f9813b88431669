// Command Router
//
// Maps parsed CLI flags to the command that should run. Routing is
// priority ordered: listing and scan modes win over the network
// resolution default.

use anyhow::Result;

use crate::cli::Args;
use crate::commands::command::Command;
use crate::commands::expand::ExpandCommand;
use crate::commands::groups::GroupsCommand;
use crate::commands::locate::LocateCommand;
use crate::commands::resolve::ResolveCommand;

pub struct CommandRouter;

impl CommandRouter {
    /// Select the command for the given flags.
    ///
    /// Priority: --list-groups, --locate, --expand/--group, then the
    /// positional IP.
    pub fn route(args: Args) -> Result<Box<dyn Command>> {
        if args.list_groups {
            return Ok(Box::new(GroupsCommand::new(args)));
        }
        if args.locate {
            return Ok(Box::new(LocateCommand::new(args)));
        }
        if args.wants_expansion() {
            return Ok(Box::new(ExpandCommand::new(args)));
        }
        if args.target.is_some() {
            return Ok(Box::new(ResolveCommand::new(args)));
        }
        anyhow::bail!(
            "nothing to do: pass an IPv4 address or one of --locate, --expand, --list-groups (see --help)"
        )
    }

    /// Reject flag combinations that select more than one mode
    pub fn validate_routing(args: &Args) -> Result<()> {
        let modes = [
            args.list_groups,
            args.locate,
            args.wants_expansion(),
            args.target.is_some(),
        ];
        let selected = modes.iter().filter(|&&enabled| enabled).count();
        if selected > 1 {
            anyhow::bail!(
                "Choose one mode: --list-groups, --locate, --expand/--group, or an IPv4 address."
            );
        }
        Ok(())
    }
}
