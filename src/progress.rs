//! Optional pre-run file counting for the progress line.
//!
//! This is a lightweight enumeration pass done before the engine runs; the
//! count feeds only the UI, never control flow, and the whole thing can be
//! disabled without changing program behavior.

use crate::paths::FileSet;
use crate::utils;
use glob::glob;
use std::path::Path;

/// Count the files under the given roots. Directories are walked with a
/// recursive glob; unreadable entries are simply skipped.
pub fn count_files(work_root: &Path, files: &FileSet) -> usize {
    let roots: Vec<String> = if files.is_everything() {
        vec![".".to_string()]
    } else {
        files.roots().to_vec()
    };
    let mut count = 0usize;
    for root in roots {
        let p = work_root.join(&root);
        if p.is_file() {
            count += 1;
        } else if p.is_dir() {
            let pattern = format!("{}/**/*", p.to_string_lossy());
            if let Ok(entries) = glob(&pattern) {
                count += entries.flatten().filter(|e| e.is_file()).count();
            }
        }
    }
    count
}

/// Announce the upcoming run on stderr.
pub fn announce(count: usize) {
    eprintln!("{} checking {} files", utils::info_prefix(), count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_count_walks_directories_recursively() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("src/nested")).unwrap();
        fs::write(root.join("src/a.js"), "").unwrap();
        fs::write(root.join("src/nested/b.js"), "").unwrap();
        fs::write(root.join("top.js"), "").unwrap();
        let files = FileSet::new(&["src".to_string()]);
        assert_eq!(count_files(root, &files), 2);
        let all = FileSet::new(&[".".to_string()]);
        assert_eq!(count_files(root, &all), 3);
    }

    #[test]
    fn test_count_single_file_root() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("one.js"), "").unwrap();
        let files = FileSet::new(&["one.js".to_string()]);
        assert_eq!(count_files(root, &files), 1);
    }
}
