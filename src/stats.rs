/// Statistics file access
///
/// Reading of the benchmark statistics CSV. The comparator deserializes
/// typed records; the status reporter needs dynamic column lookups (the
/// averaged column is caller-chosen), so this module also exposes a header
/// index for raw record access.

use crate::types::{InstanceKey, RunOutcome, Status};
use log::debug;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// One row of the statistics table, as produced by the benchmark harness.
///
/// Extra columns in the file are ignored; the named ones must be present.
#[derive(Debug, Clone, Deserialize)]
pub struct RunRecord {
    pub configuration: String,
    pub problem: String,
    pub model: String,
    pub data_file: String,
    pub status: Status,
    #[serde(deserialize_with = "de_time")]
    pub time: f64,
    #[serde(deserialize_with = "de_objective")]
    pub objective: f64,
    pub method: String,
}

impl RunRecord {
    pub fn key(&self) -> InstanceKey {
        InstanceKey { model: self.model.clone(), data_file: self.data_file.clone() }
    }

    pub fn outcome(&self) -> RunOutcome {
        RunOutcome {
            status: self.status.clone(),
            time: self.time,
            objective: self.objective,
            method: self.method.clone(),
        }
    }
}

// An empty time cell means the run never started the clock.
fn de_time<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_float(&raw, "time", 0.0).map_err(serde::de::Error::custom)
}

// An empty objective cell means the run produced no objective (satisfaction
// problems, or no solution found). NaN keeps it out of every comparison.
fn de_objective<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_float(&raw, "objective", f64::NAN).map_err(serde::de::Error::custom)
}

/// Parse a numeric CSV field, mapping the empty string to `empty_default`.
/// A non-empty, non-numeric value is a hard error.
pub fn parse_float(raw: &str, column: &str, empty_default: f64) -> Result<f64, String> {
    if raw.is_empty() {
        return Ok(empty_default);
    }
    raw.parse::<f64>().map_err(|_| format!("malformed numeric value '{}' in column '{}'", raw, column))
}

/// Open the statistics CSV for a single linear pass.
pub fn open_statistics(path: &Path) -> Result<csv::Reader<File>, String> {
    debug!("opening statistics file {}", path.display());
    csv::Reader::from_path(path)
        .map_err(|e| format!("failed to open statistics file {}: {}", path.display(), e))
}

/// Column-name to index mapping for raw record access.
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn from_reader(reader: &mut csv::Reader<File>) -> Result<Self, String> {
        let headers = reader.headers().map_err(|e| format!("failed to read statistics header: {}", e))?;
        let columns = headers.iter().enumerate().map(|(i, name)| (name.to_string(), i)).collect();
        Ok(HeaderIndex { columns })
    }

    /// Index of a required column; errors before any row is scanned.
    pub fn require(&self, column: &str) -> Result<usize, String> {
        self.columns
            .get(column)
            .copied()
            .ok_or_else(|| format!("statistics file has no '{}' column", column))
    }

    /// Field value of a required column within one record.
    pub fn field<'r>(&self, record: &'r csv::StringRecord, column: &str) -> Result<&'r str, String> {
        let index = self.require(column)?;
        record.get(index).ok_or_else(|| format!("row is missing a value for column '{}'", column))
    }

    /// Field value of an optional column; an absent column reads as empty.
    pub fn field_or_empty<'r>(&self, record: &'r csv::StringRecord, column: &str) -> &'r str {
        self.columns.get(column).and_then(|&index| record.get(index)).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp statistics file");
        write!(file, "{}", contents).expect("write temp statistics file");
        file.flush().expect("flush temp statistics file");
        file
    }

    #[test]
    fn test_parse_float_defaults() {
        assert_eq!(parse_float("", "time", 0.0).unwrap(), 0.0);
        assert!(parse_float("", "objective", f64::NAN).unwrap().is_nan());
        assert_eq!(parse_float("12.5", "time", 0.0).unwrap(), 12.5);
    }

    #[test]
    fn test_parse_float_rejects_garbage() {
        let err = parse_float("12,5", "time", 0.0).unwrap_err();
        assert!(err.contains("'12,5'"), "error should name the bad value: {}", err);
        assert!(err.contains("'time'"), "error should name the column: {}", err);
    }

    #[test]
    fn test_deserialize_record_with_empty_fields() {
        let file = temp_csv(
            "configuration,problem,model,data_file,status,time,objective,method\n\
             gecode,queens,queens.mzn,q8.dzn,SATISFIED,,,satisfy\n",
        );
        let mut reader = open_statistics(file.path()).unwrap();
        let record: RunRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(record.status, Status::Satisfied);
        assert_eq!(record.time, 0.0);
        assert!(record.objective.is_nan());
        assert_eq!(record.key().model, "queens.mzn");
    }

    #[test]
    fn test_deserialize_ignores_extra_columns() {
        let file = temp_csv(
            "configuration,problem,model,data_file,status,time,objective,method,flat_time\n\
             gecode,queens,queens.mzn,q8.dzn,OPTIMAL_SOLUTION,1.5,42,minimize,0.3\n",
        );
        let mut reader = open_statistics(file.path()).unwrap();
        let record: RunRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(record.objective, 42.0);
        assert_eq!(record.method, "minimize");
    }

    #[test]
    fn test_missing_column_is_an_error() {
        // No 'method' column at all.
        let file = temp_csv(
            "configuration,problem,model,data_file,status,time,objective\n\
             gecode,queens,queens.mzn,q8.dzn,SATISFIED,1.0,\n",
        );
        let mut reader = open_statistics(file.path()).unwrap();
        let result: Result<RunRecord, _> = reader.deserialize().next().unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_header_index_lookup() {
        let file = temp_csv(
            "configuration,status,solve_time\n\
             gecode,SATISFIED,4.25\n",
        );
        let mut reader = open_statistics(file.path()).unwrap();
        let header = HeaderIndex::from_reader(&mut reader).unwrap();
        let record = reader.records().next().unwrap().unwrap();

        assert_eq!(header.field(&record, "status").unwrap(), "SATISFIED");
        assert_eq!(header.field_or_empty(&record, "solve_time"), "4.25");
        assert_eq!(header.field_or_empty(&record, "no_such_column"), "");
        assert!(header.require("model").is_err());
    }
}
