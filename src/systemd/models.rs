// Systemd unit data models

use std::cmp::Ordering;

/// UnitRecord represents one systemd unit as reported by the listing
/// command: the unit name plus its three state strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRecord {
    pub name: String,
    pub load_state: String,
    pub active_state: String,
    pub sub_state: String,
}

impl UnitRecord {
    /// Returns true if systemd has a definition loaded for this unit
    pub fn is_loaded(&self) -> bool {
        self.load_state == "loaded"
    }

    /// Returns true if the unit reports a failed active or sub state
    pub fn is_failed(&self) -> bool {
        self.active_state == "failed" || self.sub_state == "failed"
    }
}

/// Problem categories a unit can be classified into.
///
/// The severity order is defined by `severity()` rather than by the order
/// the variants are declared in, so adding or reordering variants cannot
/// silently change aggregation precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Problem {
    /// Unit is loaded and reports a failed active or sub state
    Failed,
    /// Unit is loaded, not failed, but its sub-state is dead (stopped)
    Dead,
    /// Unit is not loaded yet its active-state is not "inactive"
    NotLoadedButNotInactive,
    /// Unit is not loaded, inactive, but its sub-state is not dead
    NotLoadedButNotDead,
}

impl Problem {
    /// Severity rank, 0 is most severe
    fn severity(self) -> u8 {
        match self {
            Problem::Failed => 0,
            Problem::Dead => 1,
            Problem::NotLoadedButNotInactive => 2,
            Problem::NotLoadedButNotDead => 3,
        }
    }

    /// Human-readable label used as the grouping header in messages
    pub fn label(self) -> &'static str {
        match self {
            Problem::Failed => "failed",
            Problem::Dead => "dead",
            Problem::NotLoadedButNotInactive => "not loaded but not inactive",
            Problem::NotLoadedButNotDead => "not loaded but not dead",
        }
    }
}

impl Ord for Problem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl PartialOrd for Problem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
