//! Error box component renderer.
//!
//! Shown instead of the whole browse layout while the catalog is broken.

use super::render_box;
use crate::ui::renderer::{Frame, Line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ErrorView;

/// Renders the title, error text and recovery hint in a bordered box.
///
/// ```text
/// ╭──────────────────────────────────────────╮
/// │ ⚠ Parsing Failed                         │
/// │                                          │
/// │ failed to parse commands.yaml: ...       │
/// │                                          │
/// │ Press 'e' to edit config or Esc to quit  │
/// ╰──────────────────────────────────────────╯
/// ```
pub fn render_error_box(frame: &mut Frame, view: &ErrorView, theme: &Theme) {
    let error_style = Theme::fg(&theme.colors.error_fg);

    let mut content = vec![
        Line::new().styled(format!("{}{error_style}", Theme::bold()), view.title.clone()),
        Line::new(),
    ];
    content.extend(
        view.message
            .lines()
            .map(|line| Line::new().styled(error_style.clone(), line)),
    );
    content.push(Line::new());
    content.push(Line::new().styled(Theme::fg(&theme.colors.status_fg), view.hint.clone()));

    render_box(frame, content, &theme.colors.error_border);
}
