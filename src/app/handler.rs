//! Event handling and state transition logic.
//!
//! This module implements the update engine: it takes one [`Event`], mutates
//! the [`AppState`] and returns whether a render is needed together with the
//! side effects to run. It never performs I/O itself.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal, the tick timer or the session driver
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for the driver to execute
//!
//! Side effects with an outcome (clipboard writes, editor runs) come back as
//! follow-up events: `CopyFinished` and `EditorClosed`.
//!
//! # Example
//!
//! ```rust
//! use kbase::app::{handle_event, Action, AppState, Event, InputAction};
//! use kbase::domain::CommandEntry;
//!
//! let catalog = vec![CommandEntry::new("git status", "Show working tree status")];
//! let mut state = AppState::new(catalog, None, "commands.yaml", "vim");
//! let (_, actions) = handle_event(&mut state, &Event::Input(InputAction::Copy))?;
//! assert_eq!(actions, vec![Action::CopyToClipboard("git status".to_string())]);
//! # Ok::<(), kbase::domain::KbaseError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{CatalogError, CommandEntry};
use chrono::{DateTime, Duration, Utc};

/// Interval between timer ticks.
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);

/// Status shown after a successful copy.
pub const COPIED_STATUS: &str = "Copied!";

/// Status shown when the clipboard cannot be written.
pub const CLIPBOARD_UNSUPPORTED_STATUS: &str = "Clipboard not supported";

const COPIED_TTL_SECS: i64 = 2;
const CLIPBOARD_UNSUPPORTED_TTL_SECS: i64 = 3;

/// User intents decoded from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Ends the session (Esc, Ctrl+Q).
    Quit,
    /// Copies the selected command (Ctrl+C).
    Copy,
    /// Opens the catalog file in the editor (e).
    Edit,
    /// Moves the cursor up (Up, k).
    Up,
    /// Moves the cursor down (Down, j).
    Down,
    /// Deletes the last query character.
    Backspace,
    /// Appends a printable character to the query.
    Char(char),
}

/// Events processed by the update engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Session start. Arms the first tick.
    Init,

    /// A decoded key press.
    Input(InputAction),

    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: usize,
        /// New height in rows.
        height: usize,
    },

    /// Timer tick carrying the current time.
    Tick(DateTime<Utc>),

    /// Outcome of an `Action::CopyToClipboard`.
    CopyFinished {
        /// The command text that was copied.
        text: String,
        /// `Err` holds the clipboard failure reason.
        result: std::result::Result<(), String>,
        /// When the copy completed; status expiry is measured from here.
        at: DateTime<Utc>,
    },

    /// Outcome of an `Action::OpenEditor` and the catalog reload after it.
    EditorClosed {
        /// `Err` holds the editor launch or exit failure.
        exit: std::result::Result<(), String>,
        /// The reloaded catalog.
        reload: std::result::Result<Vec<CommandEntry>, CatalogError>,
    },
}

/// Processes an event, mutates session state, and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the display must be redrawn, and the side
/// effects to run in order. Ignored input returns `(false, vec![])`.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for the
/// driver.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Init => Ok((true, vec![Action::ScheduleTick(TICK_INTERVAL)])),
        Event::Input(input) => Ok(handle_input(state, *input)),
        Event::Resize { width, height } => {
            tracing::debug!(width, height, "viewport resized");
            state.set_viewport(*width, *height);
            Ok((true, vec![]))
        }
        Event::Tick(now) => {
            let cleared = state.clear_status_if_expired(*now);
            if cleared {
                tracing::trace!("status message expired");
            }
            Ok((cleared, vec![Action::ScheduleTick(TICK_INTERVAL)]))
        }
        Event::CopyFinished { text, result, at } => match result {
            Ok(()) => {
                tracing::debug!(command = %text, "copied to clipboard");
                state.set_status(COPIED_STATUS, *at, Duration::seconds(COPIED_TTL_SECS));
                Ok((true, vec![]))
            }
            Err(reason) => {
                tracing::warn!(error = %reason, "clipboard unavailable, printing command");
                state.set_status(
                    CLIPBOARD_UNSUPPORTED_STATUS,
                    *at,
                    Duration::seconds(CLIPBOARD_UNSUPPORTED_TTL_SECS),
                );
                Ok((true, vec![Action::EmitStdout(text.clone())]))
            }
        },
        Event::EditorClosed { exit, reload } => {
            if let Err(reason) = exit {
                tracing::warn!(error = %reason, "editor exited with failure");
            }
            match reload {
                Ok(catalog) => {
                    tracing::debug!(commands = catalog.len(), "catalog reloaded");
                    state.replace_catalog(catalog.clone());
                }
                Err(error) => {
                    tracing::warn!(error = %error, "catalog reload failed");
                    state.enter_error(error.clone());
                }
            }
            Ok((true, vec![]))
        }
    }
}

fn handle_input(state: &mut AppState, input: InputAction) -> (bool, Vec<Action>) {
    match input {
        InputAction::Quit => (false, vec![Action::Quit]),
        InputAction::Edit => {
            tracing::debug!(path = %state.backing_path.display(), editor = %state.editor, "opening editor");
            (
                false,
                vec![Action::OpenEditor {
                    program: state.editor.clone(),
                    path: state.backing_path.clone(),
                }],
            )
        }
        _ if state.mode.is_error() => (false, vec![]),
        InputAction::Copy => state.selected_command().map_or_else(
            || {
                tracing::debug!("nothing selected to copy");
                (false, vec![])
            },
            |command| (false, vec![Action::CopyToClipboard(command.cmd.clone())]),
        ),
        InputAction::Up => {
            state.move_selection_up();
            (true, vec![])
        }
        InputAction::Down => {
            state.move_selection_down();
            (true, vec![])
        }
        InputAction::Backspace => (state.pop_query_char(), vec![]),
        InputAction::Char(c) => {
            state.push_query_char(c);
            (true, vec![])
        }
    }
}
