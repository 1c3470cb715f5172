//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "slowlint",
    version,
    about = "Incremental lint gate for legacy codebases",
    long_about = "Slowlint — run an external linter over a file set while grandfathering known-bad files.\n\nBad files live in a temporary ignore list and are skipped during normal lint runs; drift checks catch ignored files that have since become clean.\n\nConfiguration precedence: CLI > slowlint.toml > defaults.",
    after_help = "Examples:\n  slowlint lint --files bin test --linter-path node_modules/.bin/eslint\n  slowlint check-good --files . --linter-path eslint\n  slowlint save-ignored --files src --linter-path eslint --ignore-file-path ci/.slowlintignore",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for linting, drift checking, and snapshotting.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current slowlint version.")]
    Version,
    /// Lint everything but the ignored files
    #[command(
        about = "Lint everything but bad files",
        long_about = "Run the external linter, excluding permanently ignored files and the temporary known-bad list. Exits 1 when violations are found.",
        after_help = "Examples:\n  slowlint lint --files bin test --linter-path eslint\n  slowlint lint --files . --linter-path eslint --output json"
    )]
    Lint {
        #[arg(long, short = 'f', num_args = 1.., help = "Files or directories to check ('.' means everything)")]
        files: Option<Vec<String>>,
        #[arg(long, help = "Path to the external linter executable")]
        linter_path: Option<String>,
        #[arg(long, help = "Path to the temporary ignore file (default: .slowlintignore)")]
        ignore_file_path: Option<String>,
        #[arg(long, help = "Working root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable the progress line")]
        no_progress: bool,
    },
    /// Check if previously ignored files have become good
    #[command(
        about = "Check if good files are listed as bad",
        long_about = "Re-examine the temporarily ignored files and exit 1 when any of them now passes linting, meaning the ignore list is stale.",
        after_help = "Examples:\n  slowlint check-good --files . --linter-path eslint"
    )]
    CheckGood {
        #[arg(long, short = 'f', num_args = 1.., help = "Files or directories to check ('.' means everything)")]
        files: Option<Vec<String>>,
        #[arg(long, help = "Path to the external linter executable")]
        linter_path: Option<String>,
        #[arg(long, help = "Path to the temporary ignore file (default: .slowlintignore)")]
        ignore_file_path: Option<String>,
        #[arg(long, help = "Working root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable the progress line")]
        no_progress: bool,
    },
    /// Recompute and overwrite the ignored-files list
    #[command(
        about = "Make a new list of ignored files (don't abuse please)",
        long_about = "Run the linter over the file set and overwrite the temporary ignore file with the current bad-file list, re-baselining any drift.",
        after_help = "Examples:\n  slowlint save-ignored --files src --linter-path eslint"
    )]
    SaveIgnored {
        #[arg(long, short = 'f', num_args = 1.., help = "Files or directories to check ('.' means everything)")]
        files: Option<Vec<String>>,
        #[arg(long, help = "Path to the external linter executable")]
        linter_path: Option<String>,
        #[arg(long, help = "Path to the temporary ignore file (default: .slowlintignore)")]
        ignore_file_path: Option<String>,
        #[arg(long, help = "Working root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable the progress line")]
        no_progress: bool,
    },
}
