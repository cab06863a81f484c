//! Search bar component renderer.
//!
//! Renders the query inside a bordered box with a trailing `_` as the cursor.

use super::render_box;
use crate::ui::renderer::{Frame, Line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the search input box (3 lines).
///
/// # Layout
///
/// ```text
/// ╭──────────────────╮
/// │ Search: pods_    │
/// ╰──────────────────╯
/// ```
pub fn render_search_bar(frame: &mut Frame, search: &SearchBarInfo, theme: &Theme) {
    let text = Line::new().styled(
        Theme::fg(&theme.colors.search_fg),
        format!("Search: {}_", search.query),
    );
    render_box(frame, vec![text], &theme.colors.search_border);
}
