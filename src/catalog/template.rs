//! Default catalog bootstrap.
//!
//! On first run the primary catalog file usually does not exist yet. It is
//! created with a handful of sample commands so the browser has something to
//! show and the user has a format to copy from.

use crate::domain::Result;
use std::fs;
use std::path::Path;

/// Sample catalog written when the primary file is missing.
pub const DEFAULT_CATALOG: &str = r#"- cmd: "kubectl get pods"
  desc: "List all pods in namespace"
  tags:
    - "k8s"
    - "container"
  platform:
    - "linux"
    - "darwin"
  examples:
    - "kubectl get pods -n kube-system -o wide"
    - "kubectl get pods --watch"

- cmd: "docker ps -a"
  desc: "List all containers"
  tags:
    - "docker"
    - "container"

- cmd: "git log --oneline --graph --all"
  desc: "Show git commit graph"
  tags:
    - "git"
    - "vcs"

- cmd: "find . -name '*.go' -type f"
  desc: "Find all Go files in current directory"
  tags:
    - "shell"
    - "find"

- cmd: "ps aux | grep <process>"
  desc: "Search for running processes"
  tags:
    - "shell"
    - "process"
  platform:
    - "linux"
    - "darwin"
"#;

/// Creates `path` with [`DEFAULT_CATALOG`] if it does not exist.
///
/// Parent directories are created as needed. An existing file is never
/// touched.
///
/// # Returns
///
/// `true` if the file was created, `false` if it already existed.
///
/// # Errors
///
/// Returns an I/O error if the directory or file cannot be created.
pub fn init_default_catalog(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        tracing::debug!(parent = %parent.display(), "creating catalog directory");
        fs::create_dir_all(parent)?;
    }

    fs::write(path, DEFAULT_CATALOG)?;
    tracing::info!(path = %path.display(), "wrote default catalog");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::yaml::parse_commands;
    use tempfile::tempdir;

    #[test]
    fn template_parses_into_five_entries() {
        let commands = parse_commands(DEFAULT_CATALOG, Path::new("default")).unwrap();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0].examples.len(), 2);
    }

    #[test]
    fn creates_missing_file_and_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kbase").join("commands.yaml");

        assert!(init_default_catalog(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CATALOG);
    }

    #[test]
    fn leaves_existing_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("commands.yaml");
        fs::write(&path, "- cmd: \"mine\"\n  desc: \"Mine\"\n").unwrap();

        assert!(!init_default_catalog(&path).unwrap());
        assert!(fs::read_to_string(&path).unwrap().contains("mine"));
    }
}
