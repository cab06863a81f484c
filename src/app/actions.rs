//! Actions representing side effects requested by the event handler.
//!
//! The handler never touches the clipboard, the terminal or child processes
//! itself. It returns a `Vec<Action>` and the session driver executes them,
//! feeding any outcome back in as a new event.
//!
//! # Example
//!
//! ```rust
//! use kbase::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::CopyToClipboard("docker ps -a".to_string()),
//!     Action::ScheduleTick(Duration::from_secs(1)),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use std::path::PathBuf;
use std::time::Duration;

/// Commands representing side effects to be executed by the session driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ends the session. No further events are processed.
    Quit,

    /// Writes the given command text to the system clipboard.
    ///
    /// The driver answers with `Event::CopyFinished`.
    CopyToClipboard(String),

    /// Prints the given text on standard output.
    ///
    /// Fallback used when the clipboard is unavailable, so the command can
    /// still be retrieved.
    EmitStdout(String),

    /// Suspends the display and runs the editor on the catalog file.
    ///
    /// Blocks until the editor exits; the driver then reloads the catalog and
    /// answers with `Event::EditorClosed`.
    OpenEditor {
        /// Editor command line (program plus optional arguments).
        program: String,
        /// Catalog file passed as the last argument.
        path: PathBuf,
    },

    /// Arms the next timer tick after the given delay.
    ///
    /// Ticks are one-shot; the handler re-arms them on every tick.
    ScheduleTick(Duration),
}
