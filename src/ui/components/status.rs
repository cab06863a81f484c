//! Status line component renderer.

use crate::ui::renderer::{Frame, Line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

/// Renders the bottom line: a transient message in the success color, or the
/// key binding help dimmed.
pub fn render_status_line(frame: &mut Frame, status: &StatusLine, theme: &Theme) {
    let style = if status.is_transient {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.status_success_fg))
    } else {
        Theme::fg(&theme.colors.status_fg)
    };
    frame.push(Line::new().styled(style, status.text.clone()));
}
