/// Configuration comparison
///
/// Single pass over the statistics table: bucket rows into the "from" and
/// "to" side, then classify every shared instance into exactly one of
/// status change, timing change, objective change, or missing.

use crate::stats::{self, RunRecord};
use crate::types::{InstanceKey, ObjectiveChange, PerformanceChanges, RunOutcome, Status, TimeChange, relative_change};
use log::debug;
use std::collections::BTreeMap;
use std::path::Path;

/// Pure satisfaction problems carry no objective, so matched SATISFIED runs
/// with this method are compared on time instead.
const METHOD_SATISFY: &str = "satisfy";
const METHOD_MAXIMIZE: &str = "maximize";

/// Compare the runs of `from_config` against the runs of `to_config`.
///
/// `time_delta` and `obj_delta` are relative thresholds (0.1 = 10%) below
/// which a timing or objective difference is considered noise.
pub fn compare_configurations(
    statistics: &Path,
    from_config: &str,
    to_config: &str,
    time_delta: f64,
    obj_delta: f64,
) -> Result<PerformanceChanges, String> {
    let mut reader = stats::open_statistics(statistics)?;

    // Ordered maps keep classification output deterministic across runs.
    let mut from_stats: BTreeMap<InstanceKey, RunOutcome> = BTreeMap::new();
    let mut to_stats: BTreeMap<InstanceKey, RunOutcome> = BTreeMap::new();

    for row in reader.deserialize::<RunRecord>() {
        let record = row.map_err(|e| format!("failed to read statistics row: {}", e))?;
        // Two independent membership tests: comparing a configuration with
        // itself must populate both sides, so every instance matches.
        if record.configuration == from_config {
            from_stats.insert(record.key(), record.outcome());
        }
        if record.configuration == to_config {
            to_stats.insert(record.key(), record.outcome());
        }
    }

    debug!(
        "bucketed {} instances for '{}' and {} for '{}'",
        from_stats.len(),
        from_config,
        to_stats.len(),
        to_config
    );

    let mut changes = PerformanceChanges::new(time_delta, obj_delta);

    for (key, from) in &from_stats {
        let Some(to) = to_stats.get(key) else {
            changes.missing_instances.push(key.clone());
            continue;
        };

        if from.status != to.status {
            changes
                .status_changes
                .entry((from.status.clone(), to.status.clone()))
                .or_default()
                .push(key.clone());
        } else if compares_on_time(from) {
            let change = relative_change(from.time, to.time);
            if change.abs() > time_delta {
                changes.time_changes.push(TimeChange {
                    key: key.clone(),
                    from_time: from.time,
                    to_time: to.time,
                });
            }
        } else if compares_on_objective(from) {
            // NaN objectives (empty cells) never exceed the threshold.
            let change = relative_change(from.objective, to.objective);
            if change.abs() > obj_delta {
                changes.obj_changes.push(ObjectiveChange {
                    key: key.clone(),
                    from_obj: from.objective,
                    to_obj: to.objective,
                    maximize: from.method == METHOD_MAXIMIZE,
                });
            }
        }
        // Matching ERROR/UNKNOWN/UNSATISFIABLE pairs are stable; nothing to report.
    }

    if changes.is_empty() {
        debug!("no differences between '{}' and '{}'", from_config, to_config);
    }

    Ok(changes)
}

// Proven-optimal runs and satisfied pure-satisfaction runs have nothing left
// to improve but speed.
fn compares_on_time(outcome: &RunOutcome) -> bool {
    outcome.status == Status::OptimalSolution
        || (outcome.status == Status::Satisfied && outcome.method == METHOD_SATISFY)
}

// A feasible-but-not-proven-optimal solution to an optimization problem is
// judged by its objective value.
fn compares_on_objective(outcome: &RunOutcome) -> bool {
    outcome.status == Status::Satisfied && outcome.method != METHOD_SATISFY
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;
