// Open file limit check: compares per-process descriptor counts against
// their soft nofile limits.

use crate::error::ProbeError;
use crate::status::{Status, Verdict};
use crate::ulimit::proc::{self, ProcSample};

/// Default percentage of the soft limit that triggers a warning
pub const DEFAULT_WARNING_PERCENT: u64 = 60;

/// UlimitCheck scans the process table once and reports processes at or
/// near their soft open-file limit.
#[derive(Debug, Clone, Copy)]
pub struct UlimitCheck {
    pub warning_percent: u64,
}

impl Default for UlimitCheck {
    fn default() -> Self {
        Self {
            warning_percent: DEFAULT_WARNING_PERCENT,
        }
    }
}

impl UlimitCheck {
    pub fn new(warning_percent: u64) -> Self {
        Self { warning_percent }
    }

    /// Run the check against the live process table
    pub fn run(&self) -> Verdict {
        if !proc::is_root() {
            return Verdict::new(Status::Unknown, ProbeError::NotRoot.to_string());
        }

        self.evaluate(proc::collect_samples())
    }

    /// Evaluate collected samples. The worst state wins; offending
    /// processes are reported one per line.
    pub fn evaluate(&self, samples: impl IntoIterator<Item = ProcSample>) -> Verdict {
        let mut status = Status::Ok;
        let mut lines = Vec::new();

        for sample in samples {
            // Unlimited or unset limits cannot be violated
            let Some(limit) = sample.soft_limit.filter(|&limit| limit > 0) else {
                continue;
            };

            if sample.open_fds >= limit {
                status = Status::Critical;
                lines.push(format!(
                    "PID {} [{}] reached its soft limit (open: {}, limit {})",
                    sample.pid, sample.name, sample.open_fds, limit
                ));
            } else if sample.open_fds * 100 >= limit * self.warning_percent {
                if status != Status::Critical {
                    status = Status::Warning;
                }
                lines.push(format!(
                    "PID {} [{}] nearly reached its soft limit at {} open fds",
                    sample.pid, sample.name, sample.open_fds
                ));
            }
        }

        if lines.is_empty() {
            Verdict::ok()
        } else {
            Verdict::new(status, lines.join("\n"))
        }
    }
}
