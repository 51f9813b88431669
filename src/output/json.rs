// JSON Output Module

use std::path::Path;

use serde::Serialize;

use crate::Result;

/// Generate JSON output from any report
pub fn generate_json<T: Serialize>(report: &T, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

/// Write JSON to file
pub fn write_json_file<T: Serialize>(report: &T, path: &Path, pretty: bool) -> anyhow::Result<()> {
    let json = generate_json(report, pretty)?;
    std::fs::write(path, json)?;
    Ok(())
}
