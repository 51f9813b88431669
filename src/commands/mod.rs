// Commands module - Command pattern implementation for CLI modes

pub mod command;
pub mod expand;
pub mod groups;
pub mod locate;
pub mod resolve;
pub mod router;

pub use command::Command;
pub use expand::ExpandCommand;
pub use groups::GroupsCommand;
pub use locate::LocateCommand;
pub use resolve::ResolveCommand;
pub use router::CommandRouter;
