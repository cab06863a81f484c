//! Command list component renderer.
//!
//! Renders the visible window of filtered commands, one per row, as
//! `"{marker} {cmd}  {desc}"`. The marker is `>` on the selected row.

use crate::ui::renderer::{Frame, Line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Shown instead of rows when the filter matches nothing.
pub const EMPTY_LIST_TEXT: &str = "No matching commands";

/// Renders all rows of the visible window.
pub fn render_command_list(frame: &mut Frame, items: &[DisplayItem], theme: &Theme) {
    if items.is_empty() {
        frame.push(Line::new().styled(
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
            format!("  {EMPTY_LIST_TEXT}"),
        ));
        return;
    }

    for item in items {
        frame.push(render_row(item, theme));
    }
}

/// Selected rows draw the command bold in the selection color.
fn render_row(item: &DisplayItem, theme: &Theme) -> Line {
    let (marker, command_style) = if item.is_selected {
        (
            '>',
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.selection_fg)),
        )
    } else {
        (' ', Theme::fg(&theme.colors.item_fg))
    };

    Line::new()
        .styled(command_style, format!("{marker} {}", item.command))
        .plain("  ")
        .styled(Theme::fg(&theme.colors.description_fg), item.description.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(command: &str, is_selected: bool) -> DisplayItem {
        DisplayItem {
            command: command.to_string(),
            description: "desc".to_string(),
            is_selected,
        }
    }

    #[test]
    fn marks_only_the_selected_row() {
        let mut frame = Frame::new(0);
        render_command_list(
            &mut frame,
            &[item("ls", false), item("pwd", true)],
            &Theme::default(),
        );
        assert_eq!(frame.plain_lines(), &["  ls  desc", "> pwd  desc"]);
    }

    #[test]
    fn selected_row_is_bold() {
        let mut frame = Frame::new(0);
        render_command_list(&mut frame, &[item("pwd", true)], &Theme::default());
        assert!(frame.lines()[0].starts_with(Theme::bold()));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let mut frame = Frame::new(0);
        render_command_list(&mut frame, &[], &Theme::default());
        assert_eq!(frame.plain_lines(), &["  No matching commands"]);
    }
}
