//! Session state and view model computation.
//!
//! [`AppState`] is the single mutable record of a browsing session: the
//! loaded catalog, the query and its filtered result, the cursor, the mode,
//! the transient status message and the last known terminal size. Only the
//! event handler mutates it.
//!
//! # State Components
//!
//! - **Catalog**: every loaded command, replaced wholesale on reload
//! - **Filtered**: catalog entries matching the query, recomputed on every
//!   query or catalog change
//! - **Cursor**: index into `filtered`, reset to 0 whenever it falls out of range
//! - **Mode**: normal browsing or catalog error
//! - **Status**: transient message with an expiry time, cleared by ticks
//!
//! # Example
//!
//! ```rust
//! use kbase::app::AppState;
//! use kbase::domain::CommandEntry;
//!
//! let catalog = vec![CommandEntry::new("docker ps -a", "List all containers")];
//! let mut state = AppState::new(catalog, None, "commands.yaml", "vim");
//! state.push_query_char('p');
//! assert_eq!(state.filtered.len(), 1);
//! ```

use super::modes::Mode;
use crate::domain::{filter_commands, CatalogError, CommandEntry};
use crate::ui::helpers::{single_line, truncate_with_ellipsis};
use crate::ui::viewmodel::{
    BrowseView, DetailPanel, DisplayItem, ErrorView, SearchBarInfo, StatusLine, UIViewModel,
};
use chrono::{DateTime, Duration, Utc};
use std::ops::Range;
use std::path::PathBuf;

/// Descriptions longer than this are cut in the list and shown in full in
/// the detail panel.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// Rows taken by the search box, spacing, detail panel and status line.
const CHROME_ROWS: usize = 8;

/// The list never shrinks below this many rows.
const MIN_LIST_ROWS: usize = 5;

/// A transient status line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// The message is cleared by the first tick after this instant.
    pub expires_at: DateTime<Utc>,
}

/// Central session state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every loaded command, platform-filtered, in file order.
    pub catalog: Vec<CommandEntry>,

    /// Catalog entries matching `query`, in catalog order.
    pub filtered: Vec<CommandEntry>,

    /// Index of the selected entry within `filtered`.
    ///
    /// Always `< filtered.len()` when `filtered` is non-empty, otherwise 0.
    pub cursor: usize,

    /// Current search query.
    pub query: String,

    /// Browsing or error mode.
    pub mode: Mode,

    /// Transient status message, if any.
    pub status: Option<StatusMessage>,

    /// Terminal width in columns (0 until the first resize).
    pub viewport_width: usize,

    /// Terminal height in rows (0 until the first resize).
    pub viewport_height: usize,

    /// Catalog file opened by the edit key.
    pub backing_path: PathBuf,

    /// Editor command used by the edit key.
    pub editor: String,
}

impl AppState {
    /// Creates the session state from the initial catalog load.
    ///
    /// A `load_error` puts the session in error mode regardless of the
    /// catalog contents. The catalog is stored either way so a later
    /// successful reload starts from it.
    #[must_use]
    pub fn new(
        catalog: Vec<CommandEntry>,
        load_error: Option<CatalogError>,
        backing_path: impl Into<PathBuf>,
        editor: impl Into<String>,
    ) -> Self {
        let mode = load_error.map_or(Mode::Normal, Mode::Error);
        Self {
            filtered: catalog.clone(),
            catalog,
            cursor: 0,
            query: String::new(),
            mode,
            status: None,
            viewport_width: 0,
            viewport_height: 0,
            backing_path: backing_path.into(),
            editor: editor.into(),
        }
    }

    /// The error being displayed, if in error mode.
    #[must_use]
    pub const fn last_error(&self) -> Option<&CatalogError> {
        self.mode.error()
    }

    /// The entry under the cursor, if any.
    #[must_use]
    pub fn selected_command(&self) -> Option<&CommandEntry> {
        self.filtered.get(self.cursor)
    }

    /// Moves the cursor up one row, stopping at the first row.
    pub fn move_selection_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row, stopping at the last row.
    pub fn move_selection_down(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
        }
    }

    /// Appends a character to the query and refilters.
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        tracing::trace!(query = %self.query, "search query updated");
        self.apply_search_filter();
    }

    /// Removes the last query character and refilters.
    ///
    /// Returns `false` (and changes nothing) if the query was already empty.
    pub fn pop_query_char(&mut self) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.apply_search_filter();
        true
    }

    /// Recomputes `filtered` from `catalog` and `query`, then clamps the cursor.
    ///
    /// A cursor that no longer points into `filtered` goes back to the first
    /// row rather than to the last one.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_commands = self.catalog.len(),
            query_len = self.query.len()
        )
        .entered();

        self.filtered = filter_commands(&self.catalog, &self.query);
        if self.cursor >= self.filtered.len() {
            self.cursor = 0;
        }

        tracing::debug!(filtered_count = self.filtered.len(), "search filter applied");
    }

    /// Replaces the catalog after a successful reload and returns to normal mode.
    pub fn replace_catalog(&mut self, catalog: Vec<CommandEntry>) {
        self.catalog = catalog;
        self.mode = Mode::Normal;
        self.apply_search_filter();
    }

    /// Enters error mode, keeping the current catalog and filter.
    pub fn enter_error(&mut self, error: CatalogError) {
        self.mode = Mode::Error(error);
    }

    /// Shows `text` in the status line until `now + ttl`.
    pub fn set_status(&mut self, text: impl Into<String>, now: DateTime<Utc>, ttl: Duration) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires_at: now + ttl,
        });
    }

    /// Clears the status message if it expired before `now`.
    ///
    /// Returns `true` if a message was cleared.
    pub fn clear_status_if_expired(&mut self, now: DateTime<Utc>) -> bool {
        if self.status.as_ref().is_some_and(|s| now > s.expires_at) {
            self.status = None;
            return true;
        }
        false
    }

    /// Records the terminal size.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Number of list rows for the current viewport height.
    #[must_use]
    pub fn list_height(&self) -> usize {
        list_height(self.viewport_height)
    }

    /// Computes a renderable view model from the current state.
    ///
    /// In error mode only the error and recovery hint are shown. Otherwise
    /// the list is windowed around the cursor (see [`visible_range`]) and the
    /// detail panel is chosen from the selected entry.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        if let Some(error) = self.last_error() {
            return UIViewModel::Failure(ErrorView {
                title: "⚠ Parsing Failed".to_string(),
                message: error.to_string(),
                hint: "Press 'e' to edit config or Esc to quit".to_string(),
            });
        }

        let window = visible_range(self.cursor, self.list_height(), self.filtered.len());

        let display_items = self.filtered[window.clone()]
            .iter()
            .zip(window)
            .map(|(command, index)| DisplayItem {
                command: single_line(&command.cmd),
                description: single_line(&truncate_with_ellipsis(
                    &command.desc,
                    DESCRIPTION_PREVIEW_CHARS,
                )),
                is_selected: index == self.cursor,
            })
            .collect();

        UIViewModel::Browse(BrowseView {
            search_bar: SearchBarInfo {
                query: self.query.clone(),
            },
            display_items,
            detail: self.compute_detail(),
            status: self.compute_status(),
        })
    }

    /// Examples win over the long description; short descriptions need no panel.
    fn compute_detail(&self) -> Option<DetailPanel> {
        let selected = self.selected_command()?;
        if !selected.examples.is_empty() {
            Some(DetailPanel::Examples(selected.examples.clone()))
        } else if selected.desc.chars().count() > DESCRIPTION_PREVIEW_CHARS {
            Some(DetailPanel::Description(selected.desc.clone()))
        } else {
            None
        }
    }

    fn compute_status(&self) -> StatusLine {
        self.status
            .as_ref()
            .map_or_else(StatusLine::help, |s| StatusLine::transient(s.text.clone()))
    }
}

/// Number of list rows for a terminal `height`: `max(height - 8, 5)`.
#[must_use]
pub fn list_height(height: usize) -> usize {
    height.saturating_sub(CHROME_ROWS).max(MIN_LIST_ROWS)
}

/// Computes the window of rows `[start, end)` to display.
///
/// # Windowing Algorithm
///
/// 1. Center on the cursor: `start = cursor - list_height / 2`, floored at 0
/// 2. `end = start + list_height`
/// 3. If `end` runs past the list, pin it to `total` and pull `start` back
///    to `end - list_height`, floored at 0
///
/// The window always holds `min(list_height, total)` rows and contains the
/// cursor whenever the list is at least one window tall.
#[must_use]
pub fn visible_range(cursor: usize, list_height: usize, total: usize) -> Range<usize> {
    let mut start = cursor.saturating_sub(list_height / 2);
    let mut end = start + list_height;
    if end > total {
        end = total;
        start = end.saturating_sub(list_height);
    }
    start..end
}
