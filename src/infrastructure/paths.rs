//! Default locations and user path expansion.
//!
//! Configuration and the default catalog live under `~/.config/kbase` on every
//! platform, so a catalog synced between machines keeps the same path. Logs go
//! to the platform data directory.

use std::path::PathBuf;

/// Application directory name under the config and data roots.
pub const APP_DIR: &str = "kbase";

/// File name of the default command catalog.
pub const CATALOG_FILE: &str = "commands.yaml";

/// File name of the application config.
pub const CONFIG_FILE: &str = "config.toml";

/// File name of the log file.
pub const LOG_FILE: &str = "kbase.log";

/// Returns the kbase config directory, `~/.config/kbase`.
///
/// Falls back to the platform config directory, then to the current
/// directory, when no home directory is known.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the kbase data directory (e.g. `~/.local/share/kbase` on Linux).
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Default catalog file, `~/.config/kbase/commands.yaml`.
#[must_use]
pub fn default_catalog_path() -> PathBuf {
    config_dir().join(CATALOG_FILE)
}

/// Default config file, `~/.config/kbase/config.toml`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Default log file inside [`data_dir`].
#[must_use]
pub fn default_log_path() -> PathBuf {
    data_dir().join(LOG_FILE)
}

/// Expands a leading `~` and `$VAR` / `${VAR}` references.
///
/// Unset variables expand to the empty string. A `~` anywhere but the start
/// is left alone.
///
/// # Examples
///
/// ```
/// use kbase::infrastructure::expand_path;
///
/// std::env::set_var("KBASE_DOC_DIR", "/srv/kb");
/// assert_eq!(expand_path("$KBASE_DOC_DIR/cmds.yaml").to_str(), Some("/srv/kb/cmds.yaml"));
/// assert_eq!(expand_path("/abs/path").to_str(), Some("/abs/path"));
/// ```
#[must_use]
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = expand_env(raw);
    expand_tilde(&expanded)
}

fn expand_tilde(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

fn expand_env(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        let name: String = if chars.peek() == Some(&'{') {
            chars.next();
            let mut name = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                name.push(c);
            }
            if !closed {
                out.push_str("${");
                out.push_str(&name);
                continue;
            }
            name
        } else {
            let mut name = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    name.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            if name.is_empty() {
                out.push('$');
                continue;
            }
            name
        };

        out.push_str(&std::env::var(&name).unwrap_or_default());
    }

    out
}
