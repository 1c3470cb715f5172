//! Slowlint CLI binary entry point.
//! Delegates to the engine for lint/check-good/save-ignored and prints results.

mod cli;
mod config;
mod engine;
mod ignore;
mod linter;
mod models;
mod output;
mod paths;
mod progress;
mod report;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use linter::CommandLinter;
use paths::FileSet;
use std::path::PathBuf;
use std::time::Instant;

/// Common per-command setup: resolve config, validate it, build the engine
/// adapter, and emit the progress line.
fn prepare(
    repo_root: Option<&str>,
    files: Option<&[String]>,
    linter_path: Option<&str>,
    ignore_file_path: Option<&str>,
    output: Option<&str>,
    no_progress: bool,
) -> (config::Effective, FileSet, CommandLinter) {
    let eff = config::resolve_effective(
        repo_root,
        files,
        linter_path,
        ignore_file_path,
        output,
        no_progress,
    );
    if !eff.files_configured {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            "Files are not configured. Pass --files or add slowlint.toml."
        );
        std::process::exit(2);
    }
    if !eff.linter_configured {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            "Linter path is not configured. Pass --linter-path or add slowlint.toml."
        );
        std::process::exit(2);
    }
    if config::load_config(&eff.work_root).is_none() {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "No slowlint.toml found; using defaults."
        );
    }
    // Bare command names are left to PATH lookup; anything with a separator
    // is anchored at the working root.
    let program = {
        let p = PathBuf::from(&eff.linter_path);
        if p.is_absolute() || p.components().count() < 2 {
            p
        } else {
            eff.work_root.join(p)
        }
    };
    if eff.output != "json" {
        eprintln!(
            "{} checking paths: \"{}\", using linter: \"{}\"",
            utils::info_prefix(),
            eff.files.join("\", \""),
            program.to_string_lossy()
        );
    }
    let file_set = FileSet::new(&eff.files);
    if !eff.no_progress && eff.output != "json" {
        progress::announce(progress::count_files(&eff.work_root, &file_set));
    }
    let linter = CommandLinter::new(program, eff.work_root.clone(), eff.use_project_config);
    (eff, file_set, linter)
}

fn fatal(err: engine::EngineError) -> ! {
    eprintln!("{} {}", utils::error_prefix(), err);
    std::process::exit(2);
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            files,
            linter_path,
            ignore_file_path,
            repo_root,
            output,
            no_progress,
        } => {
            let (eff, file_set, linter) = prepare(
                repo_root.as_deref(),
                files.as_deref(),
                linter_path.as_deref(),
                ignore_file_path.as_deref(),
                output.as_deref(),
                no_progress,
            );
            let start = Instant::now();
            let verdict =
                match engine::run_lint(&eff.work_root, &file_set, &eff.ignore_file, &linter) {
                    Ok(v) => v,
                    Err(e) => fatal(e),
                };
            output::print_lint(&verdict, &eff.output, start.elapsed().as_secs_f64());
            if !verdict.clean {
                std::process::exit(1);
            }
        }
        Commands::CheckGood {
            files,
            linter_path,
            ignore_file_path,
            repo_root,
            output,
            no_progress,
        } => {
            let (eff, file_set, linter) = prepare(
                repo_root.as_deref(),
                files.as_deref(),
                linter_path.as_deref(),
                ignore_file_path.as_deref(),
                output.as_deref(),
                no_progress,
            );
            let start = Instant::now();
            let verdict = match engine::run_check_drift(
                &eff.work_root,
                &file_set,
                &eff.ignore_file,
                &linter,
            ) {
                Ok(v) => v,
                Err(e) => fatal(e),
            };
            output::print_drift(&verdict, &eff.output, start.elapsed().as_secs_f64());
            if !verdict.drifted.is_empty() {
                std::process::exit(1);
            }
        }
        Commands::SaveIgnored {
            files,
            linter_path,
            ignore_file_path,
            repo_root,
            output,
            no_progress,
        } => {
            let (eff, file_set, linter) = prepare(
                repo_root.as_deref(),
                files.as_deref(),
                linter_path.as_deref(),
                ignore_file_path.as_deref(),
                output.as_deref(),
                no_progress,
            );
            let start = Instant::now();
            let report =
                match engine::run_snapshot(&eff.work_root, &file_set, &eff.ignore_file, &linter) {
                    Ok(r) => r,
                    Err(e) => fatal(e),
                };
            output::print_snapshot(
                &report,
                &eff.ignore_file,
                &eff.output,
                start.elapsed().as_secs_f64(),
            );
        }
    }
}
