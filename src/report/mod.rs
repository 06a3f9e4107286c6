//! Report generation: change reports, status tables, and exports.
//!
//! # Module Organization
//!
//! - `changes` - human-readable rendering of a configuration comparison
//! - `status` - per-status run counts grouped by a configurable key
//! - `table` - plain-text table layouts shared by the reporters
//! - `export` - JSON export of comparison results

mod changes;
mod export;
mod status;
mod table;

pub use changes::format_changes;
pub use export::{json_report, write_json_report};
pub use status::report_status;
pub use table::{TableFormat, format_table};
