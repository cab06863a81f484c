//! Detail panel component renderer.

use super::render_box;
use crate::ui::helpers::single_line;
use crate::ui::renderer::{Frame, Line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailPanel;

/// Renders the boxed detail panel under the list.
///
/// Examples get an `Examples:` title and one row per line. A description may
/// span several rows too; control characters within a row are blanked.
pub fn render_detail_panel(frame: &mut Frame, detail: &DetailPanel, theme: &Theme) {
    let content = match detail {
        DetailPanel::Examples(examples) => {
            let example_style = Theme::fg(&theme.colors.example_fg);
            std::iter::once(Line::new().styled(
                format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.detail_title_fg)),
                "Examples:",
            ))
            .chain(
                examples
                    .iter()
                    .flat_map(|example| example.lines())
                    .map(|line| Line::new().styled(example_style.clone(), single_line(line))),
            )
            .collect()
        }
        DetailPanel::Description(text) => {
            let style = Theme::fg(&theme.colors.item_fg);
            text.lines()
                .map(|line| Line::new().styled(style.clone(), single_line(line)))
                .collect()
        }
    };

    render_box(frame, content, &theme.colors.detail_border);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_line_examples_get_one_row_per_line() {
        let mut frame = Frame::new(0);
        let detail = DetailPanel::Examples(vec![
            "printf 'a\\n'\nprintf 'b\\n'\n".to_string(),
            "ls".to_string(),
        ]);
        render_detail_panel(&mut frame, &detail, &Theme::default());

        let rows: Vec<_> = frame.plain_lines().iter().map(|l| l.trim_matches(['│', ' '])).collect();
        assert_eq!(rows[1..5], ["Examples:", "printf 'a\\n'", "printf 'b\\n'", "ls"]);
    }
}
