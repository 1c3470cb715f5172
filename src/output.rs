//! Output rendering for the three subcommands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form is a stable
//! serde shape composed by pure helpers so tests can snapshot it.

use crate::engine::{DriftVerdict, LintVerdict};
use crate::models::Report;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && utils::use_colors()
}

fn print_counts(report: &Report, color: bool) {
    let lines = format!(
        "Linter passing: {}\nLinter not passing: {}\nLinter ignored: {}",
        report.good_files_num, report.bad_files_num, report.ignored_files_num
    );
    if color {
        println!("{}", lines.bold());
    } else {
        println!("{}", lines);
    }
}

fn print_elapsed(elapsed_secs: f64) {
    println!("Linting took {:.3} seconds", elapsed_secs);
}

/// Print the lint verdict in the requested format.
pub fn print_lint(verdict: &LintVerdict, output: &str, elapsed_secs: f64) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(verdict)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            print_elapsed(elapsed_secs);
            print_counts(&verdict.report, color);
            if verdict.clean {
                let msg = "No lint violations found.";
                if color {
                    println!("{}", msg.green().bold());
                } else {
                    println!("{}", msg);
                }
            } else {
                let head = format!(
                    "Found {} bad files, please fix those!",
                    verdict.report.bad_files_num
                );
                if color {
                    println!("{}", head.red().bold());
                } else {
                    println!("{}", head);
                }
                println!(
                    "List is the following:\n\n{}",
                    verdict.report.bad_files.join("\n")
                );
                if !verdict.report.logs.is_empty() {
                    println!("{}", verdict.report.logs);
                }
            }
        }
    }
}

/// Print the drift verdict in the requested format.
pub fn print_drift(verdict: &DriftVerdict, output: &str, elapsed_secs: f64) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_drift_json(verdict)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            print_elapsed(elapsed_secs);
            print_counts(&verdict.report, color);
            if verdict.drifted.is_empty() {
                println!("No new good files among the ignored ones.");
            } else {
                let head = format!(
                    "Found {} good files which were listed bad, please remove them from the ignore list!",
                    verdict.drifted.len()
                );
                if color {
                    println!("{}", head.yellow().bold());
                } else {
                    println!("{}", head);
                }
                println!("List is the following:\n\n{}", verdict.drifted.join("\n"));
            }
        }
    }
}

/// Print the snapshot summary in the requested format.
pub fn print_snapshot(report: &Report, ignore_file: &str, output: &str, elapsed_secs: f64) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_snapshot_json(report, ignore_file)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            print_elapsed(elapsed_secs);
            print_counts(report, color);
            let msg = format!("Wrote {} entries to '{}'", report.bad_files_num, ignore_file);
            if color {
                println!("{}", msg.green().bold());
            } else {
                println!("{}", msg);
            }
        }
    }
}

/// Compose lint JSON (pure) for testing/snapshot purposes.
pub fn compose_lint_json(verdict: &LintVerdict) -> JsonVal {
    json!({
        "report": serde_json::to_value(&verdict.report).unwrap(),
        "clean": verdict.clean,
    })
}

/// Compose drift JSON (pure) for testing/snapshot purposes.
pub fn compose_drift_json(verdict: &DriftVerdict) -> JsonVal {
    json!({
        "report": serde_json::to_value(&verdict.report).unwrap(),
        "drifted": verdict.drifted,
        "drift": !verdict.drifted.is_empty(),
    })
}

/// Compose snapshot JSON (pure) for testing/snapshot purposes.
pub fn compose_snapshot_json(report: &Report, ignore_file: &str) -> JsonVal {
    json!({
        "report": serde_json::to_value(report).unwrap(),
        "ignoreFile": ignore_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;

    #[test]
    fn test_compose_lint_json_shape() {
        let verdict = LintVerdict {
            report: report::build(
                3,
                vec!["src/bad.js".to_string()],
                1,
                "src/bad.js\n  1:1  error  problem  semi\n".to_string(),
            ),
            clean: false,
        };
        let out = compose_lint_json(&verdict);
        assert_eq!(out["clean"], false);
        assert_eq!(out["report"]["goodFilesNum"], 2);
        assert_eq!(out["report"]["badFilesNum"], 1);
        assert_eq!(out["report"]["ignoredFilesNum"], 1);
        assert_eq!(out["report"]["badFiles"][0], "src/bad.js");
    }

    #[test]
    fn test_compose_drift_json_shape() {
        let verdict = DriftVerdict {
            report: report::build(2, Vec::new(), 2, String::new()),
            drifted: vec!["src/fixed.js".to_string()],
        };
        let out = compose_drift_json(&verdict);
        assert_eq!(out["drift"], true);
        assert_eq!(out["drifted"][0], "src/fixed.js");
    }

    #[test]
    fn test_compose_snapshot_json_shape() {
        let rep = report::build(4, vec!["src/bad.js".to_string()], 0, String::new());
        let out = compose_snapshot_json(&rep, ".slowlintignore");
        assert_eq!(out["ignoreFile"], ".slowlintignore");
        assert_eq!(out["report"]["badFilesNum"], 1);
    }
}
