// Unit listing adapter: invokes the service manager's list command and
// parses its output into unit records.

use crate::error::{ProbeError, Result};
use crate::systemd::models::UnitRecord;
use std::process::Command;

/// Source of unit records. The check core only sees this trait, so it can
/// be driven by a fake with no process spawning.
#[cfg_attr(test, mockall::automock)]
pub trait UnitSource {
    /// List all units known to the service manager, in listing order
    fn list_units(&self) -> Result<Vec<UnitRecord>>;
}

/// ListingCommand invokes a configurable command template and parses its
/// stdout as one whitespace-separated unit record per line.
#[derive(Debug, Clone)]
pub struct ListingCommand {
    argv: Vec<String>,
}

impl ListingCommand {
    /// Build from a command template, split on whitespace
    pub fn new(template: &str) -> Result<Self> {
        let argv: Vec<String> = template.split_whitespace().map(str::to_string).collect();
        if argv.is_empty() {
            return Err(ProbeError::EmptyCommand.into());
        }
        Ok(Self { argv })
    }

    fn display(&self) -> String {
        self.argv.join(" ")
    }
}

impl UnitSource for ListingCommand {
    fn list_units(&self) -> Result<Vec<UnitRecord>> {
        tracing::debug!("Running unit listing command: {}", self.display());

        let output = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .output()
            .map_err(|source| ProbeError::Spawn {
                command: self.display(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ProbeError::CommandFailed {
                command: self.display(),
                code: output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string()),
                stderr,
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let units = parse_listing(&stdout)?;
        tracing::debug!("Listed {} units", units.len());
        Ok(units)
    }
}

/// Parse listing output: one unit per line, the first four fields being
/// name, load state, active state and sub state. Trailing fields (the
/// description column) are ignored. A non-blank line with fewer than four
/// fields fails the whole run rather than silently hiding the unit.
pub fn parse_listing(output: &str) -> Result<Vec<UnitRecord>> {
    let mut units = Vec::new();

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(ProbeError::MalformedRecord(line.to_string()).into());
        }

        units.push(UnitRecord {
            name: fields[0].to_string(),
            load_state: fields[1].to_string(),
            active_state: fields[2].to_string(),
            sub_state: fields[3].to_string(),
        });
    }

    Ok(units)
}
