//! The two ignore lists: permanent ("never check") and temporary ("known bad").
//!
//! Both files are newline-delimited relative paths. Entries on disk are
//! relative to the ignore file's own directory and are rebased to
//! working-root-relative form at load time, so in-memory comparison always
//! happens in one coordinate system.
//!
//! Reading is never fatal: a missing or unreadable file is an empty list, so
//! linting stays available without any ignore state. Writing the snapshot is
//! the opposite: the user asked to persist, so failures propagate.

use crate::paths::{self, FileSet};
use crate::utils;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed name of the permanent ignore file, at the working root.
pub const IGNORE_FOREVER_FILE: &str = ".slowlintignore-forever";
/// Default name of the temporary ignore file.
pub const DEFAULT_IGNORE_FILE: &str = ".slowlintignore";

/// Load the permanent ignore list. Entries here are excluded in every mode.
/// Absence of the file is not an error.
pub fn load_forever(work_root: &Path, files: &FileSet) -> Vec<String> {
    let path = work_root.join(IGNORE_FOREVER_FILE);
    if !path.exists() {
        return Vec::new();
    }
    load_list(&path, work_root, files)
}

/// Load the temporary ignore list from a caller-supplied path. Absence is
/// logged and treated as empty: all files are assumed good.
pub fn load_temporary(work_root: &Path, files: &FileSet, ignore_file: &str) -> Vec<String> {
    let path = work_root.join(ignore_file);
    if !path.exists() {
        eprintln!(
            "{} could not read bad file list at '{}', assuming all files are good",
            utils::note_prefix(),
            path.to_string_lossy()
        );
        return Vec::new();
    }
    load_list(&path, work_root, files)
}

fn load_list(path: &Path, work_root: &Path, files: &FileSet) -> Vec<String> {
    let raw = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{} failed to read '{}': {}",
                utils::note_prefix(),
                path.to_string_lossy(),
                e
            );
            return Vec::new();
        }
    };
    let base = path.parent().unwrap_or(work_root);
    let entries = paths::normalize_list(raw.lines(), base, work_root);
    if files.is_everything() {
        entries
    } else {
        entries.into_iter().filter(|e| files.matches(e)).collect()
    }
}

/// Overwrite `ignore_file` with `bad_files`, one per line, each expressed
/// relative to the ignore file's own directory. Prior content is fully
/// replaced; this is how drift gets re-baselined.
pub fn snapshot(work_root: &Path, bad_files: &[String], ignore_file: &str) -> io::Result<()> {
    let path = work_root.join(ignore_file);
    let base: PathBuf = path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| work_root.to_path_buf());
    let lines: Vec<String> = bad_files
        .iter()
        .map(|f| {
            let abs = work_root.join(f);
            pathdiff::diff_paths(&abs, &base)
                .unwrap_or(abs)
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    fs::write(&path, lines.join("\n"))
}
