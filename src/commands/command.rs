// Command Pattern Implementation
//
// Each CLI mode is a command with a uniform interface, so main stays a
// thin parse-route-execute driver.

use anyhow::Result;

/// A single executable CLI mode
pub trait Command {
    /// Run the command to completion
    fn execute(&self) -> Result<()>;

    /// Name used in logs and diagnostics
    fn name(&self) -> &str;
}
