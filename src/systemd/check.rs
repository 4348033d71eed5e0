// Service health check: classification, aggregation and reporting

use crate::status::{Status, Verdict};
use crate::systemd::listing::UnitSource;
use crate::systemd::models::{Problem, UnitRecord};
use std::collections::HashSet;

/// Detect problems of a single unit.
///
/// Pure function of the three state strings; unknown state strings fall
/// through to the permissive branches and never escalate on their own.
pub fn classify(unit: &UnitRecord) -> Option<Problem> {
    if unit.is_loaded() {
        if unit.is_failed() {
            return Some(Problem::Failed);
        }
        if unit.sub_state == "dead" {
            return Some(Problem::Dead);
        }
        None
    } else if unit.active_state != "inactive" {
        Some(Problem::NotLoadedButNotInactive)
    } else if unit.sub_state != "dead" {
        Some(Problem::NotLoadedButNotDead)
    } else {
        None
    }
}

/// Reduce the classified unit listing to a single verdict.
///
/// Units designated critical escalate to CRITICAL when failed and to
/// WARNING for any other problem. Dead units that are not designated
/// critical are routinely stopped services and dropped entirely.
pub fn aggregate(units: &[UnitRecord], critical_units: &HashSet<String>) -> Verdict {
    let mut criticals: Vec<(Problem, &str)> = Vec::new();
    let mut warnings: Vec<(Problem, &str)> = Vec::new();

    for unit in units {
        let Some(problem) = classify(unit) else {
            continue;
        };
        tracing::debug!("Unit {} classified as {:?}", unit.name, problem);

        if critical_units.contains(&unit.name) {
            if problem == Problem::Failed {
                criticals.push((problem, &unit.name));
            } else {
                warnings.push((problem, &unit.name));
            }
        } else if problem != Problem::Dead {
            warnings.push((problem, &unit.name));
        }
    }

    // Stable sorts: ties within a category keep listing order
    criticals.sort_by_key(|&(problem, _)| problem);
    warnings.sort_by_key(|&(problem, _)| problem);

    if !criticals.is_empty() {
        criticals.extend(warnings);
        Verdict::new(Status::Critical, format_problems(&criticals))
    } else if !warnings.is_empty() {
        Verdict::new(Status::Warning, format_problems(&warnings))
    } else {
        Verdict::ok()
    }
}

/// Format the message body: consecutive entries of the same category are
/// grouped under one label, each followed by its space-joined unit names.
fn format_problems(problems: &[(Problem, &str)]) -> String {
    let mut message = String::new();
    let mut last_problem = None;

    for &(problem, unit_name) in problems {
        if last_problem != Some(problem) {
            message.push_str(problem.label());
            message.push_str(": ");
            last_problem = Some(problem);
        }
        message.push_str(unit_name);
        message.push(' ');
    }

    message
}

/// Run the whole check against a unit source. Adapter failure becomes the
/// UNKNOWN verdict rather than propagating.
pub fn run(source: &dyn UnitSource, critical_units: &HashSet<String>) -> Verdict {
    match source.list_units() {
        Ok(units) => aggregate(&units, critical_units),
        Err(error) => {
            tracing::debug!("Unit listing failed: {:#}", error);
            Verdict::new(Status::Unknown, format!("{:#}", error))
        }
    }
}
