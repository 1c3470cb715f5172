//! Configuration discovery and effective settings resolution.
//!
//! Slowlint reads `slowlint.toml|yaml|yml` from the working root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `ignoreFilePath`: `.slowlintignore`
//! - `output`: `human`
//! - `noProgress`: false
//! - `useProjectConfig`: true
//!
//! Overrides precedence: CLI > config file > defaults. The resolved working
//! root is an explicit value threaded through every component call; nothing
//! below `main` consults the process working directory.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `slowlint.toml|yaml`.
pub struct SlowlintConfig {
    pub files: Option<Vec<String>>,
    #[serde(rename = "linterPath")]
    pub linter_path: Option<String>,
    #[serde(rename = "ignoreFilePath")]
    pub ignore_file_path: Option<String>,
    pub output: Option<String>,
    #[serde(rename = "noProgress")]
    pub no_progress: Option<bool>,
    #[serde(rename = "useProjectConfig")]
    pub use_project_config: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub work_root: PathBuf,
    pub files: Vec<String>,
    pub files_configured: bool,
    pub linter_path: String,
    pub linter_configured: bool,
    pub ignore_file: String,
    pub output: String,
    pub no_progress: bool,
    pub use_project_config: bool,
}

/// Walk upward from `start` to detect the working root.
///
/// Stops when a `slowlint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_work_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("slowlint.toml").exists()
            || cur.join("slowlint.yaml").exists()
            || cur.join("slowlint.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `SlowlintConfig` from `slowlint.toml` or `slowlint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<SlowlintConfig> {
    let toml_path = root.join("slowlint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: SlowlintConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["slowlint.yaml", "slowlint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: SlowlintConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_work_root: Option<&str>,
    cli_files: Option<&[String]>,
    cli_linter_path: Option<&str>,
    cli_ignore_file: Option<&str>,
    cli_output: Option<&str>,
    cli_no_progress: bool,
) -> Effective {
    let start = PathBuf::from(cli_work_root.unwrap_or("."));
    let start = if start.is_absolute() {
        start
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&start))
            .unwrap_or(start)
    };
    let work_root = detect_work_root(&start);
    let cfg = load_config(&work_root).unwrap_or_default();

    let files_src = cli_files.map(|f| f.to_vec()).or(cfg.files);
    let (files, files_configured) = match files_src {
        Some(f) if !f.is_empty() => (f, true),
        _ => (Vec::new(), false),
    };
    // CLI args may carry stray whitespace; entries are trimmed here once.
    let files = files
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>();

    let linter_src = cli_linter_path.map(|s| s.to_string()).or(cfg.linter_path);
    let (linter_path, linter_configured) = match linter_src {
        Some(s) => (s, true),
        None => (String::new(), false),
    };

    let ignore_file = cli_ignore_file
        .map(|s| s.to_string())
        .or(cfg.ignore_file_path)
        .unwrap_or_else(|| crate::ignore::DEFAULT_IGNORE_FILE.to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let no_progress = if cli_no_progress {
        true
    } else {
        cfg.no_progress.unwrap_or(false)
    };

    let use_project_config = cfg.use_project_config.unwrap_or(true);

    Effective {
        work_root,
        files,
        files_configured,
        linter_path,
        linter_configured,
        ignore_file,
        output,
        no_progress,
        use_project_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("slowlint.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
files = ["src", "test"]
linterPath = "node_modules/.bin/eslint"
output = "json"
"#
        )
        .unwrap();

        // Resolve using explicit work_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None, None, None, false);
        assert!(eff.files_configured);
        assert_eq!(eff.files, vec!["src", "test"]);
        assert!(eff.linter_configured);
        assert_eq!(eff.linter_path, "node_modules/.bin/eslint");
        assert_eq!(eff.output, "json");
        assert_eq!(eff.ignore_file, ".slowlintignore");
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("slowlint.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
files:
  - "."
linterPath: eslint
noProgress: true
"#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None, None, false);
        assert_eq!(eff.files, vec!["."]);
        assert_eq!(eff.output, "human");
        assert!(eff.no_progress);
        // useProjectConfig defaults to true when unspecified
        assert!(eff.use_project_config);
    }

    #[test]
    fn test_cli_takes_precedence_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("slowlint.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
files = ["src"]
linterPath = "eslint"
ignoreFilePath = "ci/.slowlintignore"
output = "json"
"#
        )
        .unwrap();

        let cli_files = vec![" bin ".to_string(), "test".to_string()];
        let eff = resolve_effective(
            root.to_str(),
            Some(cli_files.as_slice()),
            Some("other-linter"),
            Some(".otherignore"),
            Some("human"),
            false,
        );
        // Trimmed CLI files win over config files
        assert_eq!(eff.files, vec!["bin", "test"]);
        assert_eq!(eff.linter_path, "other-linter");
        assert_eq!(eff.ignore_file, ".otherignore");
        assert_eq!(eff.output, "human");
    }

    #[test]
    fn test_missing_files_and_linter_are_flagged() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let eff = resolve_effective(root.to_str(), None, None, None, None, false);
        assert!(!eff.files_configured);
        assert!(!eff.linter_configured);
    }
}
