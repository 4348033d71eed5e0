// Plugin status words, exit codes and verdict rendering

use std::fmt;
use std::process::ExitCode;

/// Status represents the aggregate severity of one probe run,
/// following the Nagios plugin exit-code convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Get the process exit code for this status
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    /// Get the status word printed on stdout
    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.exit_code())
    }
}

/// Verdict is the final result of one probe run: a status plus the
/// message body to print after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: Status,
    pub message: String,
}

impl Verdict {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            message: String::new(),
        }
    }

    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Render the single stdout line: "<STATUS>: <message>", or the bare
    /// status word when there is no message body (the OK case).
    pub fn render(&self) -> String {
        if self.message.is_empty() {
            self.status.label().to_string()
        } else {
            format!("{}: {}", self.status, self.message)
        }
    }
}
