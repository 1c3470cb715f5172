//! Shared data models: the external engine's result shape and the report.

use serde::{Deserialize, Serialize};

/// Severity value the engine uses for errors; lower values are warnings and
/// never make a file "bad".
pub const SEVERITY_ERROR: u64 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One message produced by the external engine for a file.
pub struct Diagnostic {
    #[serde(default)]
    pub rule_id: Option<String>,
    pub severity: u64,
    pub message: String,
    #[serde(default)]
    pub line: u64,
    #[serde(default)]
    pub column: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-file result from the external engine. `file_path` is stored relative
/// to the working root once it passes through the adapter.
pub struct FileResult {
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Derived view over one lint run, used by all printers.
pub struct Report {
    pub good_files_num: usize,
    pub bad_files_num: usize,
    pub ignored_files_num: usize,
    pub bad_files: Vec<String>,
    pub logs: String,
}
