//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `compute_viewmodel` and
//! consumed by the renderer. They hold display-ready data only: truncated
//! descriptions, the visible window of rows, and which pieces of chrome to
//! draw.
//!
//! # Example
//!
//! ```rust
//! use kbase::ui::viewmodel::{BrowseView, DisplayItem, SearchBarInfo, StatusLine, UIViewModel};
//!
//! let vm = UIViewModel::Browse(BrowseView {
//!     search_bar: SearchBarInfo { query: "pods".to_string() },
//!     display_items: vec![DisplayItem {
//!         command: "kubectl get pods".to_string(),
//!         description: "List all pods".to_string(),
//!         is_selected: true,
//!     }],
//!     detail: None,
//!     status: StatusLine::help(),
//! });
//! assert!(matches!(vm, UIViewModel::Browse(_)));
//! ```

/// Help text shown in the status line when no transient message is active.
pub const HELP_TEXT: &str = "Ctrl+C: Copy | E: Edit | ↑/↓ or k/j: Navigate | Esc/Ctrl+Q: Quit";

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIViewModel {
    /// Normal mode: search box, list, detail panel and status line.
    Browse(BrowseView),
    /// Error mode: the load error and how to recover.
    Failure(ErrorView),
}

/// Normal mode layout contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView {
    /// Search box contents.
    pub search_bar: SearchBarInfo,
    /// Rows inside the visible window, top to bottom.
    pub display_items: Vec<DisplayItem>,
    /// Extra information about the selected entry, if any.
    pub detail: Option<DetailPanel>,
    /// Bottom status line.
    pub status: StatusLine,
}

/// One row of the command list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Full command text.
    pub command: String,
    /// Description, truncated for the list with a trailing `...`.
    pub description: String,
    /// Whether the cursor is on this row.
    pub is_selected: bool,
}

/// Search box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,
}

/// Detail panel for the selected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPanel {
    /// All usage examples, one per line.
    Examples(Vec<String>),
    /// The untruncated description (only when the list had to cut it).
    Description(String),
}

/// Bottom status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Text to display.
    pub text: String,
    /// `true` for a transient status message, `false` for the help text.
    pub is_transient: bool,
}

impl StatusLine {
    /// The default key binding help line.
    #[must_use]
    pub fn help() -> Self {
        Self {
            text: HELP_TEXT.to_string(),
            is_transient: false,
        }
    }

    /// A transient status message.
    #[must_use]
    pub fn transient(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_transient: true,
        }
    }
}

/// Error mode contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    /// Headline.
    pub title: String,
    /// The load error text.
    pub message: String,
    /// Recovery instructions.
    pub hint: String,
}
