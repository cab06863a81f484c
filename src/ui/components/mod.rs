//! Composable UI component renderers.
//!
//! Each component appends its lines to a [`Frame`]. The two layout functions
//! stack them in order for each mode.
//!
//! # Components
//!
//! - [`search`]: Search input box
//! - [`list`]: Windowed command list
//! - [`detail`]: Examples or full description of the selected command
//! - [`status`]: Status message or key binding help
//! - [`error`]: Catalog error box
//!
//! # Layout Modes
//!
//! - [`render_browse`]: Search box, list, optional detail panel, status line
//! - [`render_failure`]: Error box only

mod detail;
mod error;
mod list;
mod search;
mod status;

use crate::ui::renderer::{Frame, Line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BrowseView, ErrorView};

use detail::render_detail_panel;
use error::render_error_box;
use list::render_command_list;
use search::render_search_bar;
use status::render_status_line;

/// Draws `content` inside a rounded border.
///
/// The box spans the frame width when it is known, otherwise it hugs the
/// widest content line. Content is padded with one space on each side and
/// clipped to fit.
///
/// ```text
/// ╭──────────────╮
/// │ content line │
/// ╰──────────────╯
/// ```
fn render_box(frame: &mut Frame, content: Vec<Line>, border_color: &str) {
    let inner_width = if frame.width() >= 4 {
        frame.width() - 2
    } else {
        content.iter().map(Line::width).max().unwrap_or(0) + 2
    };
    let text_width = inner_width.saturating_sub(2);
    let border = Theme::fg(border_color);

    frame.push(Line::new().styled(border.clone(), format!("╭{}╮", "─".repeat(inner_width))));
    for line in content {
        let line = line.clipped(text_width);
        let padding = " ".repeat(text_width.saturating_sub(line.width()));
        frame.push(
            Line::new()
                .styled(border.clone(), "│ ")
                .join(line)
                .plain(padding)
                .styled(border.clone(), " │"),
        );
    }
    frame.push(Line::new().styled(border, format!("╰{}╯", "─".repeat(inner_width))));
}

/// Renders the normal mode layout.
///
/// Layout structure:
/// ```text
/// [Search box - 3 lines]
/// [blank line]
/// [Command list - list_height rows at most]
/// [Detail panel - optional]
/// [blank line]
/// [Status line]
/// ```
pub fn render_browse(frame: &mut Frame, view: &BrowseView, theme: &Theme) {
    render_search_bar(frame, &view.search_bar, theme);
    frame.push_blank();
    render_command_list(frame, &view.display_items, theme);
    if let Some(detail) = &view.detail {
        render_detail_panel(frame, detail, theme);
    }
    frame.push_blank();
    render_status_line(frame, &view.status, theme);
}

/// Renders the error mode layout.
pub fn render_failure(frame: &mut Frame, view: &ErrorView, theme: &Theme) {
    render_error_box(frame, view, theme);
}
