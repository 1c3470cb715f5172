//! Report arithmetic over one engine invocation. Pure, no I/O.

use crate::models::Report;

/// Combine the raw invocation numbers into the derived report view.
/// `good_files_num` balances against everything the engine processed, so
/// good + bad always equals processed.
pub fn build(
    processed: usize,
    bad_files: Vec<String>,
    ignored_files_num: usize,
    logs: String,
) -> Report {
    let bad_files_num = bad_files.len();
    Report {
        good_files_num: processed.saturating_sub(bad_files_num),
        bad_files_num,
        ignored_files_num,
        bad_files,
        logs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_balances_counts() {
        let report = build(
            10,
            vec!["src/a.js".to_string(), "src/b.js".to_string()],
            3,
            String::new(),
        );
        assert_eq!(report.good_files_num, 8);
        assert_eq!(report.bad_files_num, 2);
        assert_eq!(report.ignored_files_num, 3);
        assert_eq!(report.good_files_num + report.bad_files_num, 10);
    }

    #[test]
    fn test_build_clean_run() {
        let report = build(5, Vec::new(), 0, String::new());
        assert_eq!(report.good_files_num, 5);
        assert_eq!(report.bad_files_num, 0);
        assert!(report.bad_files.is_empty());
    }
}
