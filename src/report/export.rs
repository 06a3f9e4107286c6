//! JSON export of comparison results.

use crate::types::{PerformanceChanges, TransitionKind, classify_transition};
use serde_json::json;
use std::fs::File;
use std::path::Path;

/// Build the JSON document for a comparison result.
///
/// Non-finite relative changes (zero-denominator instances) serialize as
/// null; the raw before/after values are always present.
pub fn json_report(changes: &PerformanceChanges, from_config: &str, to_config: &str) -> serde_json::Value {
    let status_changes: Vec<serde_json::Value> = changes
        .status_changes
        .iter()
        .map(|((from, to), keys)| {
            json!({
                "from": from.as_str(),
                "to": to.as_str(),
                "kind": classify_transition(from, to).as_str(),
                "instances": keys,
            })
        })
        .collect();

    let time_changes: Vec<serde_json::Value> = changes
        .time_changes
        .iter()
        .map(|change| {
            json!({
                "model": change.key.model,
                "data_file": change.key.data_file,
                "from_time": change.from_time,
                "to_time": change.to_time,
                "relative_change": change.relative_change(),
            })
        })
        .collect();

    let obj_changes: Vec<serde_json::Value> = changes
        .obj_changes
        .iter()
        .map(|change| {
            json!({
                "model": change.key.model,
                "data_file": change.key.data_file,
                "from_objective": change.from_obj,
                "to_objective": change.to_obj,
                "maximize": change.maximize,
                "relative_change": change.relative_change(),
            })
        })
        .collect();

    json!({
        "generated": chrono::Local::now().to_rfc3339(),
        "from": from_config,
        "to": to_config,
        "time_delta": changes.time_delta,
        "obj_delta": changes.obj_delta,
        "summary": {
            "status_changes": changes.status_change_count(),
            "conflicting": changes.transition_count(TransitionKind::Conflicting),
            "positive": changes.transition_count(TransitionKind::Positive),
            "runtime_changes": changes.time_changes.len(),
            "objective_changes": changes.obj_changes.len(),
            "missing_instances": changes.missing_instances.len(),
        },
        "status_changes": status_changes,
        "time_changes": time_changes,
        "obj_changes": obj_changes,
        "missing_instances": changes.missing_instances,
    })
}

/// Write the JSON comparison report to a file.
pub fn write_json_report(
    changes: &PerformanceChanges,
    from_config: &str,
    to_config: &str,
    output_path: &Path,
) -> std::io::Result<()> {
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &json_report(changes, from_config, to_config))?;
    Ok(())
}
