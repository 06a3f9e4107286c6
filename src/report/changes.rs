//! Human-readable rendering of a configuration comparison.
//!
//! Output order: summary block, then status changes (conflicting first,
//! then the rest, positive last), timing changes sorted worst-first,
//! objective changes sorted worst-first, and finally missing instances.

use crate::types::{ObjectiveChange, PerformanceChanges, TimeChange, TransitionKind, classify_transition};

/// Render the full change report.
pub fn format_changes(changes: &PerformanceChanges) -> String {
    let mut conflicting = String::new();
    let mut negative = String::new();
    let mut positive = String::new();

    for ((from, to), keys) in &changes.status_changes {
        let mut block = format!("{} -> {}:\n", from, to);
        for key in keys {
            block.push_str(&format!("  - {}\n", key));
        }
        match classify_transition(from, to) {
            TransitionKind::Conflicting => conflicting.push_str(&block),
            TransitionKind::Positive => positive.push_str(&block),
            TransitionKind::Other => negative.push_str(&block),
        }
    }

    let mut output = format_summary(changes);

    if changes.status_change_count() > 0 {
        output.push_str("Status Changes:\n===============\n");
        let sections = [
            ("Conflicting Status Changes", &conflicting),
            ("Negative Status Changes", &negative),
            ("Positive Status Changes", &positive),
        ];
        for (title, block) in sections {
            if !block.is_empty() {
                output.push_str(&format!("{}:\n{}\n", title, "-".repeat(title.len() + 1)));
                output.push_str(block);
                output.push('\n');
            }
        }
    }

    if !changes.time_changes.is_empty() {
        output.push_str(&format!(
            "Timing Changes (>±{:.1}%):\n=========================\n",
            changes.time_delta * 100.0
        ));
        let mut sorted: Vec<&TimeChange> = changes.time_changes.iter().collect();
        sorted.sort_by(|a, b| b.relative_change().total_cmp(&a.relative_change()));
        for change in sorted {
            output.push_str(&format!(
                "- ({:.1}%: {:.1}s -> {:.1}s) {}\n",
                change.relative_change() * 100.0,
                change.from_time,
                change.to_time,
                change.key
            ));
        }
        output.push('\n');
    }

    if !changes.obj_changes.is_empty() {
        output.push_str(&format!(
            "Objective Changes (>±{:.1}%):\n=========================\n",
            changes.obj_delta * 100.0
        ));
        let mut sorted: Vec<&ObjectiveChange> = changes.obj_changes.iter().collect();
        sorted.sort_by(|a, b| a.signed_relative_change().total_cmp(&b.signed_relative_change()));
        for change in sorted {
            let direction = if change.maximize { "MAX" } else { "MIN" };
            output.push_str(&format!(
                "- ({:.1}%: {} {:.2} -> {:.2}) {}\n",
                change.relative_change() * 100.0,
                direction,
                change.from_obj,
                change.to_obj,
                change.key
            ));
        }
        output.push('\n');
    }

    if !changes.missing_instances.is_empty() {
        output.push_str("Missing Instances:\n==================\n");
        for key in &changes.missing_instances {
            output.push_str(&format!("- {}\n", key));
        }
    }

    output
}

fn format_summary(changes: &PerformanceChanges) -> String {
    let conflicts = changes.transition_count(TransitionKind::Conflicting);
    let conflicts_part = if conflicts > 0 { format!("conflicts: {}, ", conflicts) } else { String::new() };

    let mut output = String::from("Summary:\n========\n");
    output.push_str(&format!(
        "- Status Changes: {} ({}positive: {})\n",
        changes.status_change_count(),
        conflicts_part,
        changes.transition_count(TransitionKind::Positive)
    ));
    output.push_str(&format!(
        "- Runtime Changes: {} (positive: {})\n",
        changes.time_changes.len(),
        changes.positive_time_count()
    ));
    output.push_str(&format!(
        "- Objective Changes: {} (positive: {})\n",
        changes.obj_changes.len(),
        changes.positive_obj_count()
    ));
    if !changes.missing_instances.is_empty() {
        output.push_str(&format!("- Missing Instances: {}\n", changes.missing_instances.len()));
    }
    output.push_str("\n\n");
    output
}
