// Process table reads from the proc file system.
//
// Proc entries churn while we scan, so every read in here treats a
// vanished pid as absent data rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

/// One process snapshot: open descriptor count and the soft nofile limit.
/// A limit of None means the process cannot violate (unlimited, or the
/// limit was unreadable or not yet set during fork).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcSample {
    pub pid: u32,
    pub name: String,
    pub open_fds: u64,
    pub soft_limit: Option<u64>,
}

fn proc_path(pid: &str, entry: &str) -> PathBuf {
    Path::new("/proc").join(pid).join(entry)
}

/// List the entries of a directory under /proc, empty on any error
fn list_dir(path: &Path) -> Vec<String> {
    match fs::read_dir(path) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Get the name of a process from its cmdline, "unknown" if gone
fn process_name(pid: &str) -> String {
    fs::read_to_string(proc_path(pid, "cmdline"))
        .ok()
        .and_then(|cmdline| {
            cmdline
                .split('\0')
                .next()
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Read the soft "Max open files" limit of a process
fn soft_limit(pid: &str) -> Option<u64> {
    let limits = fs::read_to_string(proc_path(pid, "limits")).ok()?;

    let line = limits
        .lines()
        .find(|line| line.starts_with("Max open files"))?;
    // Columns after the limit name are: soft, hard, units
    let soft = line.trim_start_matches("Max open files").split_whitespace().next()?;

    // "unlimited" cannot be violated
    soft.parse().ok()
}

/// Snapshot every running process
pub fn collect_samples() -> Vec<ProcSample> {
    let mut samples = Vec::new();

    for entry in list_dir(Path::new("/proc")) {
        let Ok(pid) = entry.parse::<u32>() else {
            continue;
        };

        let open_fds = list_dir(&proc_path(&entry, "fd")).len() as u64;
        samples.push(ProcSample {
            pid,
            name: process_name(&entry),
            open_fds,
            soft_limit: soft_limit(&entry),
        });
    }

    tracing::debug!("Collected {} process samples", samples.len());
    samples
}

/// Whether we run as root. Non-root cannot read other users' fd tables,
/// which would silently turn the check into a no-op.
pub fn is_root() -> bool {
    let Ok(status) = fs::read_to_string("/proc/self/status") else {
        return false;
    };

    status
        .lines()
        .find(|line| line.starts_with("Uid:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .is_some_and(|uid| uid == "0")
}
