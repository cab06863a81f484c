//! kbase: a terminal browser for a knowledge base of shell commands.
//!
//! kbase provides:
//! - Live, case-insensitive filtering over commands, descriptions and tags
//! - Keyboard navigation with a windowed list and a detail panel for examples
//! - Clipboard copy of the selected command, with a stdout fallback
//! - Editing the backing YAML file in `$EDITOR` and reloading it on exit

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action execution (session driver)                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Infrastructure│
//! │ (ui/)         │   │ (catalog/)    │   │ (infra../)    │
//! │ - Rendering   │   │ - YAML I/O    │   │ - Clipboard   │
//! │ - Theming     │   │ - Platforms   │   │ - Editor      │
//! │ - Components  │   │ - Template    │   │ - Terminal    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Command entry model, filter, error types         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - JSON log lines in a rotating file                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Settings are read from `~/.config/kbase/config.toml` (created with
//! commented defaults on first run). Command line flags override the file.
//!
//! ```toml
//! commands_file = "~/.config/kbase/commands.yaml"
//! extra_paths = ["~/team/kbase/"]
//! editor = "nvim"
//! theme = "kbase-dark"
//! trace_level = "info"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kbase::{handle_event, AppState, Event, InputAction};
//! use kbase::domain::CommandEntry;
//!
//! let catalog = vec![
//!     CommandEntry::new("docker ps -a", "List all containers"),
//!     CommandEntry::new("kubectl get pods", "List all pods"),
//! ];
//! let mut state = AppState::new(catalog, None, "commands.yaml", "vim");
//!
//! for c in "pods".chars() {
//!     handle_event(&mut state, &Event::Input(InputAction::Char(c)))?;
//! }
//! assert_eq!(state.filtered.len(), 1);
//! # Ok::<(), kbase::KbaseError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Flow, InputAction, Mode, Session};
pub use domain::{CatalogError, CommandEntry, KbaseError, Result};
pub use ui::Theme;

use catalog::{init_default_catalog, CatalogSource, YamlCatalog};
use clap::Parser;
use infrastructure::{default_catalog_path, expand_path, resolve_editor};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Command line arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "kbase", version, about = "Browse, copy and edit your shell command knowledge base")]
pub struct Cli {
    /// Catalog file to browse and edit (overrides `commands_file`).
    pub path: Option<PathBuf>,

    /// Config file to read.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Built-in theme name (overrides `theme`).
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Log filter such as `debug` or `kbase=trace` (overrides `trace_level`).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Written to the config path on first run.
pub const DEFAULT_CONFIG: &str = r#"# kbase configuration. Every setting is optional.

# Catalog file opened by the `e` key.
# commands_file = "~/.config/kbase/commands.yaml"

# Read-only files or directories of *.yaml/*.yml merged after the catalog.
# extra_paths = ["~/team/kbase/"]

# Editor command; defaults to $EDITOR, then vim.
# editor = "nvim"

# Built-in theme: kbase-dark or kbase-light.
# theme = "kbase-dark"

# Custom theme file; takes precedence over `theme`.
# theme_file = "~/.config/kbase/theme.toml"

# Log filter for ~/.local/share/kbase/kbase.log; RUST_LOG wins.
# trace_level = "info"
"#;

/// Application configuration read from TOML.
///
/// All fields are optional. Paths accept `~/` and `$VAR`/`${VAR}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Primary catalog file. Default: `~/.config/kbase/commands.yaml`
    pub commands_file: Option<String>,

    /// Extra catalog files or directories, appended read-only.
    pub extra_paths: Vec<String>,

    /// Editor command line. Default: `$EDITOR`, then `vim`
    pub editor: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing filter. Options: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,

    /// Catalog path from the command line, used verbatim.
    #[serde(skip)]
    pub catalog_override: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`KbaseError::Config`] for invalid TOML, wrong value types or
    /// unknown keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kbase::Config;
    ///
    /// let config = Config::from_toml_str("editor = \"code --wait\"\n")?;
    /// assert_eq!(config.editor.as_deref(), Some("code --wait"));
    /// assert!(config.extra_paths.is_empty());
    /// # Ok::<(), kbase::KbaseError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| KbaseError::Config(e.to_string()))
    }

    /// Loads the config file at `path`.
    ///
    /// A missing file is created with commented defaults and yields the
    /// default config. If it cannot be created, the defaults are used anyway.
    ///
    /// # Errors
    ///
    /// Returns [`KbaseError::Config`] if the file exists but cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Err(e) = write_default_config(path) {
                tracing::warn!(path = %path.display(), error = %e, "could not create default config");
            }
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .map_err(|e| KbaseError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
            .map_err(|e| KbaseError::Config(format!("{}: {e}", path.display())))
    }

    /// Applies command line overrides.
    #[must_use]
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.path {
            self.catalog_override = Some(path.clone());
        }
        if let Some(theme) = &cli.theme {
            self.theme = Some(theme.clone());
            self.theme_file = None;
        }
        if let Some(level) = &cli.log_level {
            self.trace_level = Some(level.clone());
        }
        self
    }

    /// Primary catalog path.
    ///
    /// A command line path was already expanded by the shell and is returned
    /// as given; only `commands_file` from the config goes through
    /// [`expand_path`].
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        if let Some(path) = &self.catalog_override {
            return path.clone();
        }
        self.commands_file
            .as_deref()
            .map_or_else(default_catalog_path, expand_path)
    }

    /// Expanded extra catalog paths.
    #[must_use]
    pub fn extra_paths(&self) -> Vec<PathBuf> {
        self.extra_paths.iter().map(|p| expand_path(p)).collect()
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// # Errors
    ///
    /// Returns [`KbaseError::Theme`] for an unknown theme name or an
    /// unreadable theme file.
    pub fn resolve_theme(&self) -> Result<Theme> {
        if let Some(file) = &self.theme_file {
            return Theme::from_file(expand_path(file));
        }
        match &self.theme {
            Some(name) => Theme::from_name(name).ok_or_else(|| {
                KbaseError::Theme(format!(
                    "unknown theme {name:?} (available: {})",
                    ui::theme::BUILTIN_THEMES.join(", ")
                ))
            }),
            None => Ok(Theme::default()),
        }
    }
}

fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)
}

/// Everything the terminal runtime needs to start a session.
#[derive(Debug)]
pub struct Bootstrap {
    /// Initial session state (error mode if the catalog failed to load).
    pub state: AppState,
    /// Catalog source used for reloads after editing.
    pub source: YamlCatalog,
    /// Resolved theme.
    pub theme: Theme,
}

/// Prepares a session from configuration.
///
/// Writes the sample catalog if the primary file is missing, loads it, and
/// builds the initial state. A catalog that fails to load is not an error
/// here: the session starts in error mode so the user can fix the file.
///
/// # Errors
///
/// Returns an error if the sample catalog cannot be written or the theme
/// cannot be resolved.
pub fn bootstrap(config: &Config) -> Result<Bootstrap> {
    let _span = tracing::debug_span!("bootstrap").entered();

    let theme = config.resolve_theme()?;
    let path = config.catalog_path();
    init_default_catalog(&path)?;

    let source = YamlCatalog::new(path.clone()).with_extra_paths(config.extra_paths());
    let (catalog, load_error) = match source.load() {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            tracing::warn!(error = %e, "initial catalog load failed");
            (Vec::new(), Some(e))
        }
    };

    let editor = resolve_editor(config.editor.as_deref());
    tracing::info!(
        path = %path.display(),
        commands = catalog.len(),
        editor = %editor,
        theme = %theme.name,
        "session bootstrapped"
    );

    Ok(Bootstrap {
        state: AppState::new(catalog, load_error, path, editor),
        source,
        theme,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn default_config_template_parses_to_defaults() {
        assert_eq!(Config::from_toml_str(DEFAULT_CONFIG).unwrap(), Config::default());
    }

    #[test]
    fn full_config_parses() {
        let config = Config::from_toml_str(
            r#"
            commands_file = "/srv/kb/commands.yaml"
            extra_paths = ["/srv/kb/team", "/srv/kb/extra.yml"]
            editor = "code --wait"
            theme = "kbase-light"
            trace_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog_path(), PathBuf::from("/srv/kb/commands.yaml"));
        assert_eq!(config.extra_paths().len(), 2);
        assert_eq!(config.resolve_theme().unwrap().name, "kbase-light");
    }

    #[test]
    fn malformed_or_unknown_keys_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("editor = [1, 2"),
            Err(KbaseError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("scan_depth = 4"),
            Err(KbaseError::Config(_))
        ));
    }

    #[test]
    fn missing_config_is_created_with_comments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn cli_overrides_config() {
        let config = Config {
            commands_file: Some("/a.yaml".to_string()),
            theme_file: Some("/theme.toml".to_string()),
            ..Config::default()
        };
        let cli = Cli {
            path: Some(PathBuf::from("/b.yaml")),
            theme: Some("kbase-light".to_string()),
            log_level: Some("trace".to_string()),
            ..Cli::default()
        };

        let merged = config.with_cli_overrides(&cli);
        assert_eq!(merged.catalog_path(), PathBuf::from("/b.yaml"));
        assert_eq!(merged.theme_file, None);
        assert_eq!(merged.resolve_theme().unwrap().name, "kbase-light");
        assert_eq!(merged.trace_level.as_deref(), Some("trace"));
    }

    #[test]
    fn command_line_path_is_not_expanded_again() {
        std::env::remove_var("notes");
        let cli = Cli::parse_from(["kbase", "/srv/kb/team$notes.yaml"]);
        let config = Config {
            commands_file: Some("$HOME/ignored.yaml".to_string()),
            ..Config::default()
        }
        .with_cli_overrides(&cli);

        assert_eq!(config.catalog_path(), PathBuf::from("/srv/kb/team$notes.yaml"));
        assert_eq!(config.commands_file.as_deref(), Some("$HOME/ignored.yaml"));
    }

    #[test]
    fn catalog_override_is_not_read_from_toml() {
        assert!(matches!(
            Config::from_toml_str("catalog_override = \"/x.yaml\""),
            Err(KbaseError::Config(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn command_line_path_keeps_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = PathBuf::from(OsStr::from_bytes(b"/tmp/kb-\xff.yaml"));
        let cli = Cli {
            path: Some(raw.clone()),
            ..Cli::default()
        };
        assert_eq!(Config::default().with_cli_overrides(&cli).catalog_path(), raw);
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let config = Config {
            theme: Some("neon".to_string()),
            ..Config::default()
        };
        let err = config.resolve_theme().unwrap_err();
        assert!(err.to_string().contains("kbase-dark"));
    }

    #[test]
    fn cli_parses_positional_and_flags() {
        let cli = Cli::parse_from(["kbase", "/tmp/kb.yaml", "--theme", "kbase-light", "--log-level", "debug"]);
        assert_eq!(cli.path, Some(PathBuf::from("/tmp/kb.yaml")));
        assert_eq!(cli.theme.as_deref(), Some("kbase-light"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn bootstrap_writes_template_and_loads_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kb").join("commands.yaml");
        let config = Config {
            commands_file: Some(path.to_string_lossy().into_owned()),
            editor: Some("nano".to_string()),
            ..Config::default()
        };

        let boot = bootstrap(&config).unwrap();
        assert!(path.exists());
        assert!(boot.state.last_error().is_none());
        assert!(boot.state.catalog.iter().any(|c| c.cmd == "docker ps -a"));
        assert_eq!(boot.state.editor, "nano");
        assert_eq!(boot.state.backing_path, path);
        assert_eq!(boot.source, YamlCatalog::new(path));
    }

    #[test]
    fn bootstrap_with_broken_catalog_starts_in_error_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("commands.yaml");
        fs::write(&path, "- cmd: [unclosed\n").unwrap();
        let config = Config {
            commands_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };

        let boot = bootstrap(&config).unwrap();
        assert!(boot.state.mode.is_error());
        assert!(boot.state.catalog.is_empty());
    }
}
