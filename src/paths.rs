//! Path normalization relative to an explicit working root.
//!
//! All ignore entries and lint results are compared as working-root-relative
//! strings with `/` separators. Resolution is purely lexical: `.` and `..`
//! components are collapsed without touching the filesystem, so entries may
//! name files that do not exist yet.

use std::path::{Component, Path, PathBuf};

/// The user-specified path roots for one invocation.
///
/// A leading `"."` means "everything": prefix filtering of ignore lists is
/// skipped entirely in that case.
#[derive(Debug, Clone)]
pub struct FileSet {
    roots: Vec<String>,
}

impl FileSet {
    /// Build a file set from raw CLI/config values, trimming each entry and
    /// dropping blanks.
    pub fn new(roots: &[String]) -> Self {
        let roots = roots
            .iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        Self { roots }
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// True when the first root is the literal current-directory marker.
    pub fn is_everything(&self) -> bool {
        self.roots.first().map(|r| r == ".").unwrap_or(false)
    }

    /// Plain `starts_with` match against any root. Intentionally loose: a root
    /// of `"test"` matches both `test/foo.js` and `testX/foo.js`. Downstream
    /// users rely on this, so there is no path-segment boundary check.
    pub fn matches(&self, path: &str) -> bool {
        self.is_everything() || self.roots.iter().any(|r| path.starts_with(r.as_str()))
    }
}

/// Collapse `.` and `..` components lexically.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Normalize one raw path into canonical working-root-relative form.
///
/// Trims surrounding whitespace (blank input yields `None`), resolves relative
/// input against `base_dir`, then expresses the result relative to
/// `work_root`. Normalizing an already-canonical path with
/// `base_dir == work_root` returns it unchanged.
pub fn normalize(raw: &str, base_dir: &Path, work_root: &Path) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let p = Path::new(trimmed);
    let abs = if p.is_absolute() {
        clean(p)
    } else {
        clean(&base_dir.join(p))
    };
    let root = clean(work_root);
    let rel = pathdiff::diff_paths(&abs, &root).unwrap_or(abs);
    Some(rel.to_string_lossy().replace('\\', "/"))
}

/// Normalize a list of raw lines, skipping blanks.
pub fn normalize_list<'a, I>(lines: I, base_dir: &Path, work_root: &Path) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| normalize(line, base_dir, work_root))
        .collect()
}
