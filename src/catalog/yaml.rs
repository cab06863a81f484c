//! YAML file catalog backend.
//!
//! Catalog files are YAML sequences of command entries:
//!
//! ```yaml
//! - cmd: "kubectl get pods"
//!   desc: "List all pods in namespace"
//!   tags: ["k8s", "container"]
//!   platform: ["linux", "darwin"]
//!   examples:
//!     - "kubectl get pods -n kube-system -o wide"
//! ```
//!
//! The primary file is strict: read or parse failures surface as a
//! [`CatalogError`]. Extra paths (files or directories) are best effort: a
//! broken extra file is logged and skipped so it cannot block browsing.

use super::source::CatalogSource;
use crate::domain::{CatalogError, CommandEntry};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the platform name used in catalog `platform` lists.
///
/// Matches Rust's `std::env::consts::OS`, except macOS is reported as
/// `darwin` so catalogs can share platform names with other tooling.
#[must_use]
pub fn current_os() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}

/// Keeps entries without platform constraints or listing `os`.
#[must_use]
pub fn filter_by_platform(commands: Vec<CommandEntry>, os: &str) -> Vec<CommandEntry> {
    commands
        .into_iter()
        .filter(|cmd| cmd.supports_platform(os))
        .collect()
}

/// Parses catalog YAML text without touching the filesystem.
///
/// An empty document is an empty catalog.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the text is not a list of entries.
pub fn parse_commands(text: &str, origin: &Path) -> Result<Vec<CommandEntry>, CatalogError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str::<Vec<CommandEntry>>(text).map_err(|e| CatalogError::parse(origin, &e))
}

/// Reads, parses and platform-filters one catalog file.
///
/// # Errors
///
/// Returns [`CatalogError::Read`] if the file cannot be read, or
/// [`CatalogError::Parse`] if it is not a valid command list.
pub fn load_commands(path: &Path) -> Result<Vec<CommandEntry>, CatalogError> {
    let _span = tracing::debug_span!("load_commands", path = %path.display()).entered();

    let text = fs::read_to_string(path).map_err(|e| CatalogError::read(path, &e))?;
    let commands = parse_commands(&text, path)?;
    let total = commands.len();
    let commands = filter_by_platform(commands, current_os());

    tracing::debug!(total, kept = commands.len(), "catalog file loaded");
    Ok(commands)
}

/// Loads every `.yaml`/`.yml` file directly inside `dir`.
///
/// Files are visited in file-name order. Subdirectories are skipped, and a
/// file that fails to load is logged and skipped.
///
/// # Errors
///
/// Returns [`CatalogError::Read`] if the directory itself cannot be listed.
pub fn load_directory(dir: &Path) -> Result<Vec<CommandEntry>, CatalogError> {
    let _span = tracing::debug_span!("load_directory", dir = %dir.display()).entered();

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| CatalogError::read(dir, &e))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_yaml_extension(path))
        .collect();
    files.sort();

    let mut commands = Vec::new();
    for file in &files {
        match load_commands(file) {
            Ok(mut loaded) => commands.append(&mut loaded),
            Err(e) => tracing::warn!(error = %e, "skipping catalog file"),
        }
    }

    tracing::debug!(files = files.len(), commands = commands.len(), "catalog directory loaded");
    Ok(commands)
}

fn has_yaml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Loads an extra catalog path, which may be a file or a directory.
///
/// Never fails: problems are logged and yield an empty list.
#[must_use]
pub fn load_extra_path(path: &Path) -> Vec<CommandEntry> {
    let result = if path.is_dir() {
        load_directory(path)
    } else {
        load_commands(path)
    };

    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "skipping extra catalog path");
        Vec::new()
    })
}

/// Catalog backed by a primary YAML file plus optional read-only extras.
///
/// The primary file is the one opened in the editor. Extra entries are
/// appended after the primary entries on every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlCatalog {
    primary: PathBuf,
    extra_paths: Vec<PathBuf>,
}

impl YamlCatalog {
    /// Creates a catalog over a single primary file.
    #[must_use]
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            extra_paths: Vec::new(),
        }
    }

    /// Adds extra files or directories merged after the primary file.
    #[must_use]
    pub fn with_extra_paths(mut self, extra_paths: Vec<PathBuf>) -> Self {
        self.extra_paths = extra_paths;
        self
    }
}

impl CatalogSource for YamlCatalog {
    fn load(&self) -> Result<Vec<CommandEntry>, CatalogError> {
        let mut commands = load_commands(&self.primary)?;
        for extra in &self.extra_paths {
            commands.extend(load_extra_path(extra));
        }
        Ok(commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_ENTRIES: &str = r#"
- cmd: "docker ps -a"
  desc: "List all containers"
  tags: ["docker"]
- cmd: "only-on-plan9"
  desc: "Never shown"
  platform: ["plan9"]
"#;

    #[test]
    fn platform_filter_drops_foreign_entries() {
        let commands = vec![
            CommandEntry::new("a", "any"),
            CommandEntry::new("b", "linux").with_platforms(["linux"]),
            CommandEntry::new("c", "windows").with_platforms(["windows"]),
        ];
        let kept: Vec<_> = filter_by_platform(commands, "linux")
            .into_iter()
            .map(|c| c.cmd)
            .collect();
        assert_eq!(kept, vec!["a", "b"]);
    }

    #[test]
    fn empty_file_is_an_empty_catalog() {
        assert!(parse_commands("  \n", Path::new("x.yaml")).unwrap().is_empty());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = parse_commands("- cmd: [unterminated", Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert_eq!(err.path(), Path::new("bad.yaml"));
    }

    #[test]
    fn load_commands_reads_and_filters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("commands.yaml");
        fs::write(&path, TWO_ENTRIES).unwrap();

        let commands = load_commands(&path).unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].cmd, "docker ps -a");
        assert_eq!(commands[0].tags, vec!["docker"]);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = load_commands(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn directory_loading_skips_broken_and_foreign_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.yml"), "- cmd: \"second\"\n  desc: \"B\"\n").unwrap();
        fs::write(dir.path().join("a.YAML"), "- cmd: \"first\"\n  desc: \"A\"\n").unwrap();
        fs::write(dir.path().join("broken.yaml"), "- cmd: [").unwrap();
        fs::write(dir.path().join("notes.txt"), "- cmd: \"ignored\"\n  desc: \"T\"\n").unwrap();
        fs::create_dir(dir.path().join("nested.yaml")).unwrap();

        let cmds: Vec<_> = load_directory(dir.path())
            .unwrap()
            .into_iter()
            .map(|c| c.cmd)
            .collect();
        assert_eq!(cmds, vec!["first", "second"]);
    }

    #[test]
    fn yaml_catalog_appends_extras_and_ignores_broken_ones() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("commands.yaml");
        let extra = dir.path().join("team.yaml");
        fs::write(&primary, TWO_ENTRIES).unwrap();
        fs::write(&extra, "- cmd: \"make test\"\n  desc: \"Run tests\"\n").unwrap();

        let source = YamlCatalog::new(&primary).with_extra_paths(vec![
            extra,
            dir.path().join("missing.yaml"),
        ]);
        let cmds: Vec<_> = source.load().unwrap().into_iter().map(|c| c.cmd).collect();
        assert_eq!(cmds, vec!["docker ps -a", "make test"]);
    }

    #[test]
    fn yaml_catalog_fails_when_primary_is_broken() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("commands.yaml");
        fs::write(&primary, "not: [a, list").unwrap();

        let err = YamlCatalog::new(&primary).load().unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
