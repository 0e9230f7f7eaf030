//! Export module for the expense splitter
//!
//! Provides complete ledger export in multiple formats:
//! - CSV: one row per share, spreadsheet-compatible
//! - JSON: machine-readable full export with schema version
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
