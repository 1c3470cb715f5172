//! The external linting capability and its process adapter.
//!
//! The core never parses source itself. It talks to an engine through the
//! one-method [`Linter`] trait, so tests inject a fake and the binary wires in
//! [`CommandLinter`], which spawns the configured executable and reads its
//! JSON result array from stdout.

use crate::models::{Diagnostic, FileResult, SEVERITY_ERROR};
use crate::paths;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// Hard cap on the rendered diagnostic log, to keep failure output readable.
pub const LOG_LIMIT: usize = 1000;

/// Errors from driving the external engine. All of these are fatal: the run
/// cannot produce a trustworthy verdict without a complete result set.
#[derive(Debug)]
pub enum LinterError {
    /// The engine executable could not be spawned at all.
    Spawn { program: PathBuf, source: std::io::Error },
    /// The engine exited with an unexpected status (0 and 1 are normal).
    Failed { status: Option<i32>, stderr: String },
    /// The engine's stdout was not the expected JSON result array.
    Parse(serde_json::Error),
}

impl fmt::Display for LinterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinterError::Spawn { program, source } => write!(
                f,
                "failed to run linter '{}': {}",
                program.to_string_lossy(),
                source
            ),
            LinterError::Failed { status, stderr } => write!(
                f,
                "linter exited with status {}: {}",
                status.map(|s| s.to_string()).unwrap_or_else(|| "?".into()),
                stderr.trim()
            ),
            LinterError::Parse(e) => write!(f, "could not parse linter output: {}", e),
        }
    }
}

impl std::error::Error for LinterError {}

/// The injected linting capability: run the engine over `files` with the
/// given exclusion patterns, returning one result per processed file with
/// paths relative to the working root.
pub trait Linter {
    fn run(
        &self,
        files: &[String],
        exclusion_patterns: &[String],
    ) -> Result<Vec<FileResult>, LinterError>;
}

/// Adapter over an external linter executable (e.g. an ESLint-compatible CLI).
///
/// Invocation shape: `<program> --format json [--no-config-lookup]
/// [--ignore-pattern <p>]... <files>...`, run from the working root. Exit
/// status 1 means "violations found" and is a normal outcome, not a failure.
pub struct CommandLinter {
    program: PathBuf,
    work_root: PathBuf,
    use_project_config: bool,
}

impl CommandLinter {
    pub fn new(program: PathBuf, work_root: PathBuf, use_project_config: bool) -> Self {
        Self {
            program,
            work_root,
            use_project_config,
        }
    }
}

impl Linter for CommandLinter {
    fn run(
        &self,
        files: &[String],
        exclusion_patterns: &[String],
    ) -> Result<Vec<FileResult>, LinterError> {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(&self.work_root);
        cmd.args(["--format", "json"]);
        if !self.use_project_config {
            cmd.arg("--no-config-lookup");
        }
        for pat in exclusion_patterns {
            cmd.args(["--ignore-pattern", pat]);
        }
        cmd.args(files);
        let out = cmd.output().map_err(|e| LinterError::Spawn {
            program: self.program.clone(),
            source: e,
        })?;
        match out.status.code() {
            Some(0) | Some(1) => {}
            status => {
                return Err(LinterError::Failed {
                    status,
                    stderr: String::from_utf8_lossy(&out.stderr).to_string(),
                })
            }
        }
        let results: Vec<FileResult> =
            serde_json::from_slice(&out.stdout).map_err(LinterError::Parse)?;
        // Engines report absolute paths; fold them back to root-relative.
        Ok(results
            .into_iter()
            .map(|mut r| {
                if let Some(rel) = paths::normalize(&r.file_path, &self.work_root, &self.work_root)
                {
                    r.file_path = rel;
                }
                r
            })
            .collect())
    }
}

/// Keep only files with at least one error-severity message, and only those
/// messages. Warnings never make a file bad.
pub fn error_results(results: &[FileResult]) -> Vec<FileResult> {
    results
        .iter()
        .filter_map(|r| {
            let errors: Vec<Diagnostic> = r
                .messages
                .iter()
                .filter(|m| m.severity == SEVERITY_ERROR)
                .cloned()
                .collect();
            if errors.is_empty() {
                None
            } else {
                Some(FileResult {
                    file_path: r.file_path.clone(),
                    messages: errors,
                })
            }
        })
        .collect()
}

/// Render error results into a human-readable log, one block per file.
pub fn format_log(results: &[FileResult]) -> String {
    let mut out = String::new();
    for r in results {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&r.file_path);
        out.push('\n');
        for m in &r.messages {
            let rule = m.rule_id.as_deref().unwrap_or("");
            out.push_str(&format!(
                "  {}:{}  error  {}  {}\n",
                m.line, m.column, m.message, rule
            ));
        }
    }
    out
}

/// Truncate a rendered log to [`LOG_LIMIT`] characters, appending an ellipsis
/// marker when anything was cut.
pub fn truncate_log(log: &str) -> String {
    if log.chars().count() <= LOG_LIMIT {
        return log.to_string();
    }
    let mut cut: String = log.chars().take(LOG_LIMIT).collect();
    cut.push_str("...");
    cut
}

/// Raw outcome of one engine invocation, before report arithmetic.
#[derive(Debug)]
pub struct Invocation {
    /// Every file the engine actually processed, diagnostics or not.
    pub processed: usize,
    pub bad_files: Vec<String>,
    pub logs: String,
}

/// Drive the engine once and shape its output.
pub fn invoke(
    linter: &dyn Linter,
    files: &[String],
    exclusion_patterns: &[String],
) -> Result<Invocation, LinterError> {
    let results = linter.run(files, exclusion_patterns)?;
    let processed = results.len();
    let errors = error_results(&results);
    let bad_files = errors.iter().map(|r| r.file_path.clone()).collect();
    let logs = truncate_log(&format_log(&errors));
    Ok(Invocation {
        processed,
        bad_files,
        logs,
    })
}

/// Test helper: fabricate a result with `errors` error messages.
#[cfg(test)]
pub fn fake_result(path: &str, errors: usize) -> FileResult {
    FileResult {
        file_path: path.to_string(),
        messages: (0..errors)
            .map(|i| Diagnostic {
                rule_id: Some("no-unused-vars".to_string()),
                severity: SEVERITY_ERROR,
                message: format!("problem {}", i + 1),
                line: (i + 1) as u64,
                column: 1,
            })
            .collect(),
    }
}
