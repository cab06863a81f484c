//! External editor resolution and launching.
//!
//! The editor command is taken from the config file, then `$EDITOR`, then
//! falls back to `vim`. It is split shell-style so values such as
//! `code --wait` work; the catalog path is passed as the last argument.

use super::terminal::TerminalSuspendGuard;
use crate::domain::{KbaseError, Result};
use std::path::Path;
use std::process::Command;

/// Editor used when neither the config nor `$EDITOR` names one.
pub const FALLBACK_EDITOR: &str = "vim";

/// Picks the editor command: `configured`, then `$EDITOR`, then `vim`.
///
/// Blank values are treated as unset.
#[must_use]
pub fn resolve_editor(configured: Option<&str>) -> String {
    let from_env = std::env::var("EDITOR").ok();
    pick_editor(configured, from_env.as_deref())
}

fn pick_editor(configured: Option<&str>, from_env: Option<&str>) -> String {
    [configured, from_env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(FALLBACK_EDITOR)
        .to_string()
}

/// Runs an editor on a file and waits for it to exit.
pub trait EditorLauncher {
    /// Opens `path` with the `program` command line and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns [`KbaseError::Editor`] if the command line is invalid, the
    /// editor cannot be started, or it exits unsuccessfully.
    fn launch(&mut self, program: &str, path: &Path) -> Result<()>;
}

/// Launches the editor in the user's terminal.
///
/// Raw mode and the alternate screen are released for the editor's lifetime
/// and restored afterwards, even if the launch fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEditor;

impl EditorLauncher for TerminalEditor {
    fn launch(&mut self, program: &str, path: &Path) -> Result<()> {
        let _suspended = TerminalSuspendGuard::new()?;
        run_editor(program, path)
    }
}

/// Runs `command` with `path` appended, without touching terminal modes.
///
/// # Errors
///
/// See [`EditorLauncher::launch`].
pub fn run_editor(command: &str, path: &Path) -> Result<()> {
    let parts = shlex::split(command)
        .ok_or_else(|| KbaseError::Editor(format!("invalid editor command line: {command}")))?;
    let (program, args) = parts
        .split_first()
        .ok_or_else(|| KbaseError::Editor("editor command is empty".to_string()))?;

    tracing::debug!(program = %program, args = ?args, path = %path.display(), "launching editor");

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|e| KbaseError::Editor(format!("failed to start {program}: {e}")))?;

    if !status.success() {
        return Err(KbaseError::Editor(format!("{program} exited with {status}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_preference_order() {
        assert_eq!(pick_editor(Some("nvim"), Some("nano")), "nvim");
        assert_eq!(pick_editor(None, Some("nano")), "nano");
        assert_eq!(pick_editor(Some("  "), Some("nano")), "nano");
        assert_eq!(pick_editor(None, Some("")), "vim");
        assert_eq!(pick_editor(None, None), "vim");
    }

    #[test]
    fn empty_command_is_rejected() {
        let err = run_editor("", Path::new("x.yaml")).unwrap_err();
        assert!(matches!(err, KbaseError::Editor(_)));
    }

    #[test]
    fn unbalanced_quotes_are_rejected() {
        let err = run_editor("code \"--wait", Path::new("x.yaml")).unwrap_err();
        assert!(err.to_string().contains("invalid editor command line"));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_reported() {
        assert!(run_editor("true", Path::new("x.yaml")).is_ok());
        let err = run_editor("false", Path::new("x.yaml")).unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    fn missing_program_is_an_error() {
        let err = run_editor("kbase-no-such-editor-xyz", Path::new("x.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to start"));
    }
}
