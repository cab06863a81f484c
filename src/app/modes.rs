//! Session mode state machine types.
//!
//! The session is either browsing the catalog or showing a catalog load
//! error. The error travels inside [`Mode::Error`], so an error is present
//! exactly when the session is in error mode.
//!
//! # State Machine
//!
//! ```text
//!            load ok                         load failed
//!   start ─────────────► Normal ◄──────┐  ┌──────────── start
//!                          │   reload ok │  │
//!              reload fail │             │  ▼
//!                          └──────────► Error(e)
//! ```
//!
//! The only way out of [`Mode::Error`] is editing the catalog and reloading
//! it successfully.

use crate::domain::CatalogError;

/// Current session mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing and searching the catalog.
    ///
    /// Available keybindings: type to filter, Up/Down (k/j) to move, Ctrl+C
    /// to copy, e to edit, Esc or Ctrl+Q to quit.
    #[default]
    Normal,

    /// The catalog failed to load or parse.
    ///
    /// Only e (edit and reload) and the quit keys are accepted.
    Error(CatalogError),
}

impl Mode {
    /// Returns `true` in [`Mode::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The load error, if in error mode.
    #[must_use]
    pub const fn error(&self) -> Option<&CatalogError> {
        match self {
            Self::Error(e) => Some(e),
            Self::Normal => None,
        }
    }
}
