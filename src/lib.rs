// Sysprobe - Nagios-compatible health check probes for systemd hosts
// Library root

pub mod error;
pub mod status;
pub mod systemd;
pub mod ulimit;
pub mod version;

// Test modules (only compiled during tests)
#[cfg(test)]
mod status_tests;
