//! Infrastructure layer for the host environment.
//!
//! Everything that touches the outside world besides catalog files: default
//! paths, the system clipboard, the external editor and the terminal.

pub mod clipboard;
pub mod editor;
pub mod paths;
pub mod terminal;

pub use clipboard::{Clipboard, SystemClipboard};
pub use editor::{resolve_editor, EditorLauncher, TerminalEditor};
pub use paths::{
    config_dir, data_dir, default_catalog_path, default_config_path, default_log_path, expand_path,
};
