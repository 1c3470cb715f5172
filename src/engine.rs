//! The reconciliation engine: three operating modes over the same blocks.
//!
//! - lint: exclude permanent and temporary entries, fail on any bad file.
//! - check-drift: exclude permanent entries only, re-examine temporarily
//!   ignored files and fail when any of them has become good.
//! - snapshot: exclude permanent entries only, rewrite the temporary ignore
//!   file with the current bad set.

use crate::ignore;
use crate::linter::{self, Linter, LinterError};
use crate::models::Report;
use crate::paths::FileSet;
use crate::report;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum EngineError {
    Linter(LinterError),
    /// The snapshot write failed; silent failure here would corrupt the
    /// re-baselining workflow.
    Snapshot(std::io::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Linter(e) => write!(f, "{}", e),
            EngineError::Snapshot(e) => write!(f, "failed to write ignore file: {}", e),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<LinterError> for EngineError {
    fn from(e: LinterError) -> Self {
        EngineError::Linter(e)
    }
}

/// Lint-mode outcome. `clean` is the verdict; a dirty run is a normal
/// terminal state, not an error.
#[derive(Debug)]
pub struct LintVerdict {
    pub report: Report,
    pub clean: bool,
}

/// Check-drift outcome. `drifted` lists temporarily ignored files that no
/// longer produce errors and should be promoted out of the ignore list.
#[derive(Debug)]
pub struct DriftVerdict {
    pub report: Report,
    pub drifted: Vec<String>,
}

/// Lint mode: permanent and temporary entries are both excluded.
pub fn run_lint(
    work_root: &Path,
    files: &FileSet,
    ignore_file: &str,
    linter: &dyn Linter,
) -> Result<LintVerdict, EngineError> {
    let forever = ignore::load_forever(work_root, files);
    let temporary = ignore::load_temporary(work_root, files, ignore_file);
    let mut exclusions = forever;
    exclusions.extend(temporary.iter().cloned());
    let inv = linter::invoke(linter, files.roots(), &exclusions)?;
    let clean = inv.bad_files.is_empty();
    let report = report::build(inv.processed, inv.bad_files, temporary.len(), inv.logs);
    Ok(LintVerdict { report, clean })
}

/// Check-drift mode: temporary entries are re-examined, not excluded.
pub fn run_check_drift(
    work_root: &Path,
    files: &FileSet,
    ignore_file: &str,
    linter: &dyn Linter,
) -> Result<DriftVerdict, EngineError> {
    let forever = ignore::load_forever(work_root, files);
    let temporary = ignore::load_temporary(work_root, files, ignore_file);
    let inv = linter::invoke(linter, files.roots(), &forever)?;
    let drifted: Vec<String> = temporary
        .iter()
        .filter(|entry| !inv.bad_files.contains(*entry))
        .cloned()
        .collect();
    // Nothing is excluded by the temporary list here, so nothing counts as
    // ignored; the re-examined entries already show up in processed/bad.
    let report = report::build(inv.processed, inv.bad_files, 0, inv.logs);
    Ok(DriftVerdict { report, drifted })
}

/// Snapshot mode: recompute the bad set and rewrite the temporary ignore
/// file wholesale.
pub fn run_snapshot(
    work_root: &Path,
    files: &FileSet,
    ignore_file: &str,
    linter: &dyn Linter,
) -> Result<Report, EngineError> {
    let forever = ignore::load_forever(work_root, files);
    let inv = linter::invoke(linter, files.roots(), &forever)?;
    ignore::snapshot(work_root, &inv.bad_files, ignore_file).map_err(EngineError::Snapshot)?;
    Ok(report::build(inv.processed, inv.bad_files, 0, inv.logs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::fake_result;
    use crate::models::FileResult;
    use std::fs;
    use tempfile::tempdir;

    /// Fake engine: a catalog of (path, error count), filtered the way a
    /// real engine honors file roots and ignore patterns.
    struct FakeLinter {
        catalog: Vec<(String, usize)>,
    }

    impl FakeLinter {
        fn new(catalog: &[(&str, usize)]) -> Self {
            Self {
                catalog: catalog
                    .iter()
                    .map(|(p, n)| (p.to_string(), *n))
                    .collect(),
            }
        }
    }

    impl Linter for FakeLinter {
        fn run(
            &self,
            files: &[String],
            exclusion_patterns: &[String],
        ) -> Result<Vec<FileResult>, LinterError> {
            Ok(self
                .catalog
                .iter()
                .filter(|(p, _)| files.iter().any(|f| f == "." || p.starts_with(f.as_str())))
                .filter(|(p, _)| !exclusion_patterns.iter().any(|x| p.starts_with(x.as_str())))
                .map(|(p, n)| fake_result(p, *n))
                .collect())
        }
    }

    fn everything() -> FileSet {
        FileSet::new(&[".".to_string()])
    }

    #[test]
    fn test_lint_clean_without_ignores() {
        let tmp = tempdir().unwrap();
        let linter = FakeLinter::new(&[("src/a.js", 0), ("src/b.js", 0)]);
        let verdict = run_lint(tmp.path(), &everything(), ".slowlintignore", &linter).unwrap();
        assert!(verdict.clean);
        assert_eq!(verdict.report.bad_files_num, 0);
        assert_eq!(verdict.report.good_files_num, 2);
    }

    #[test]
    fn test_lint_passes_when_bad_files_are_ignored() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(".slowlintignore"), "src/bad.js\n").unwrap();
        let linter = FakeLinter::new(&[("src/ok.js", 0), ("src/bad.js", 3)]);
        let verdict = run_lint(tmp.path(), &everything(), ".slowlintignore", &linter).unwrap();
        assert!(verdict.clean);
        assert_eq!(verdict.report.ignored_files_num, 1);
        assert_eq!(verdict.report.good_files_num, 1);
    }

    #[test]
    fn test_lint_fails_on_unignored_bad_files() {
        let tmp = tempdir().unwrap();
        let linter = FakeLinter::new(&[("src/ok.js", 0), ("src/bad.js", 1), ("src/worse.js", 2)]);
        let verdict = run_lint(tmp.path(), &everything(), ".slowlintignore", &linter).unwrap();
        assert!(!verdict.clean);
        assert_eq!(verdict.report.bad_files, vec!["src/bad.js", "src/worse.js"]);
        assert!(verdict.report.logs.contains("src/bad.js"));
    }

    #[test]
    fn test_lint_permanent_entries_always_excluded() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join(ignore::IGNORE_FOREVER_FILE),
            "vendor/blob.js\n",
        )
        .unwrap();
        let linter = FakeLinter::new(&[("vendor/blob.js", 5), ("src/a.js", 0)]);
        let verdict = run_lint(tmp.path(), &everything(), ".slowlintignore", &linter).unwrap();
        assert!(verdict.clean);
        // Permanent entries do not count as "ignored" in the report.
        assert_eq!(verdict.report.ignored_files_num, 0);
    }

    #[test]
    fn test_check_drift_none_when_ignored_still_bad() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(".slowlintignore"), "src/bad.js\n").unwrap();
        let linter = FakeLinter::new(&[("src/bad.js", 2), ("src/ok.js", 0)]);
        let verdict =
            run_check_drift(tmp.path(), &everything(), ".slowlintignore", &linter).unwrap();
        assert!(verdict.drifted.is_empty());
        // Temporary entries were re-examined, not excluded.
        assert_eq!(verdict.report.bad_files, vec!["src/bad.js"]);
        assert_eq!(verdict.report.ignored_files_num, 0);
    }

    #[test]
    fn test_check_drift_does_not_double_count_still_bad_entries() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(".slowlintignore"), "src/bad.js\n").unwrap();
        let linter = FakeLinter::new(&[("src/bad.js", 1)]);
        let verdict =
            run_check_drift(tmp.path(), &everything(), ".slowlintignore", &linter).unwrap();
        // The sole listed file is still bad: it counts as bad, not as ignored.
        assert_eq!(verdict.report.bad_files_num, 1);
        assert_eq!(verdict.report.ignored_files_num, 0);
        assert_eq!(
            verdict.report.good_files_num + verdict.report.bad_files_num,
            1
        );
    }

    #[test]
    fn test_check_drift_finds_now_good_files() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join(".slowlintignore"),
            "src/fixed.js\nsrc/still-bad.js\n",
        )
        .unwrap();
        let linter = FakeLinter::new(&[("src/fixed.js", 0), ("src/still-bad.js", 1)]);
        let verdict =
            run_check_drift(tmp.path(), &everything(), ".slowlintignore", &linter).unwrap();
        assert_eq!(verdict.drifted, vec!["src/fixed.js"]);
    }

    #[test]
    fn test_fileset_roots_limit_ignore_lists() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join(".slowlintignore"),
            "src/bad.js\ntest/bad.js\n",
        )
        .unwrap();
        // Only the test/ root is in scope, so src/bad.js is not excluded and
        // would fail the run if the engine saw it.
        let files = FileSet::new(&["test".to_string()]);
        let linter = FakeLinter::new(&[("src/bad.js", 1), ("test/bad.js", 1)]);
        let verdict = run_lint(tmp.path(), &files, ".slowlintignore", &linter).unwrap();
        assert!(verdict.clean);
        assert_eq!(verdict.report.ignored_files_num, 1);
    }

    #[test]
    fn test_snapshot_writes_current_bad_set() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(".slowlintignore"), "stale/entry.js\n").unwrap();
        let linter = FakeLinter::new(&[("src/bad.js", 1), ("src/ok.js", 0)]);
        let report = run_snapshot(tmp.path(), &everything(), ".slowlintignore", &linter).unwrap();
        assert_eq!(report.bad_files, vec!["src/bad.js"]);
        let written = fs::read_to_string(tmp.path().join(".slowlintignore")).unwrap();
        assert_eq!(written, "src/bad.js");
    }

    #[test]
    fn test_snapshot_write_failure_is_fatal() {
        let tmp = tempdir().unwrap();
        let linter = FakeLinter::new(&[("src/bad.js", 1)]);
        let err = run_snapshot(
            tmp.path(),
            &everything(),
            "missing-dir/.slowlintignore",
            &linter,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Snapshot(_)));
    }
}
