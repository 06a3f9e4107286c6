//! Status breakdown tables.
//!
//! Groups statistics rows by configuration (optionally refined by model,
//! problem, and instance) and counts runs per status, with an optional mean
//! of a caller-chosen numeric column.

use super::table::{self, TableFormat};
use crate::stats::{self, HeaderIndex, parse_float};
use crate::types::Status;
use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

/// Build the status breakdown table for a statistics file.
///
/// The grouping key always starts with `configuration`; `per_model`,
/// `per_problem` and `per_instance` append their components in that fixed
/// order. `average` names a numeric CSV column to average per cell (empty
/// or absent values count as 0).
pub fn report_status(
    statistics: &Path,
    per_problem: bool,
    per_model: bool,
    per_instance: bool,
    average: Option<&str>,
    format: TableFormat,
) -> Result<String, String> {
    let mut reader = stats::open_statistics(statistics)?;
    let header = HeaderIndex::from_reader(&mut reader)?;

    let mut key_names: Vec<&str> = vec!["configuration"];
    if per_model {
        key_names.push("model");
    }
    if per_problem {
        key_names.push("problem");
    }
    if per_instance {
        key_names.push("instance");
    }

    // Resolve every needed column up front so a malformed file fails before
    // the scan rather than on some arbitrary row.
    header.require("configuration")?;
    header.require("status")?;
    if per_model {
        header.require("model")?;
    }
    if per_problem {
        header.require("problem")?;
    }
    if per_instance {
        header.require("data_file")?;
    }

    debug!("grouping by [{}], rendered as {}", key_names.join(", "), format.as_str());

    let mut seen_status: BTreeSet<Status> = BTreeSet::new();
    let mut groups: BTreeMap<Vec<String>, HashMap<Status, Vec<f64>>> = BTreeMap::new();

    for row in reader.records() {
        let record = row.map_err(|e| format!("failed to read statistics row: {}", e))?;

        let mut key = vec![header.field(&record, "configuration")?.to_string()];
        if per_model {
            key.push(header.field(&record, "model")?.to_string());
        }
        if per_problem {
            key.push(header.field(&record, "problem")?.to_string());
        }
        if per_instance {
            key.push(instance_name(header.field(&record, "data_file")?));
        }

        let status = Status::from(header.field(&record, "status")?.to_string());
        seen_status.insert(status.clone());

        // An absent average column reads as empty and therefore as 0.
        let value = match average {
            Some(column) => parse_float(header.field_or_empty(&record, column), column, 0.0)?,
            None => 0.0,
        };
        groups.entry(key).or_default().entry(status).or_default().push(value);
    }

    // Status columns in fixed descending lexicographic order.
    let statuses: Vec<Status> = seen_status.into_iter().rev().collect();

    let mut headers: Vec<String> = key_names.iter().map(|name| name.to_string()).collect();
    headers.extend(statuses.iter().map(|status| status.to_string()));

    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|(key, counts)| {
            let mut cells = key.clone();
            for status in &statuses {
                cells.push(render_cell(counts.get(status), average.is_some()));
            }
            cells
        })
        .collect();

    Ok(table::format_table(&headers, &rows, format))
}

/// Instance name: the filename component of the data file path.
fn instance_name(data_file: &str) -> String {
    Path::new(data_file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn render_cell(values: Option<&Vec<f64>>, with_average: bool) -> String {
    match values {
        Some(values) if with_average => {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            format!("{} ({:.2}s)", values.len(), mean)
        }
        Some(values) => values.len().to_string(),
        None => "0".to_string(),
    }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;
