//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components. Rendering is pure: it builds a
//! [`Frame`] of styled lines that the terminal layer writes out.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Example
//!
//! ```rust
//! use kbase::app::AppState;
//! use kbase::domain::CommandEntry;
//! use kbase::ui::{render, Theme};
//!
//! let state = AppState::new(vec![CommandEntry::new("ls", "List")], None, "c.yaml", "vim");
//! let frame = render(&state, &Theme::default());
//! assert!(frame.plain_lines().iter().any(|line| line.contains("> ls")));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::{clip_to_width, display_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// One screen line built from styled segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    segments: Vec<(String, String)>,
}

impl Line {
    /// An empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` drawn with the ANSI `style` prefix.
    #[must_use]
    pub fn styled(mut self, style: impl Into<String>, text: impl Into<String>) -> Self {
        self.segments.push((style.into(), text.into()));
        self
    }

    /// Appends unstyled text.
    #[must_use]
    pub fn plain(self, text: impl Into<String>) -> Self {
        self.styled(String::new(), text)
    }

    /// Display width of the line without styling.
    #[must_use]
    pub fn width(&self) -> usize {
        self.segments.iter().map(|(_, text)| display_width(text)).sum()
    }

    /// Cuts the line down to at most `max_width` columns.
    #[must_use]
    pub fn clipped(self, max_width: usize) -> Self {
        let mut remaining = max_width;
        let mut segments = Vec::with_capacity(self.segments.len());
        for (style, text) in self.segments {
            if remaining == 0 {
                break;
            }
            let visible = clip_to_width(&text, remaining).to_string();
            remaining -= display_width(&visible);
            segments.push((style, visible));
        }
        Self { segments }
    }

    /// Appends every segment of `other`.
    #[must_use]
    pub fn join(mut self, other: Self) -> Self {
        self.segments.extend(other.segments);
        self
    }
}

/// A rendered screen: styled lines top to bottom.
///
/// Lines are clipped to the frame width when it is non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    lines: Vec<String>,
    plain: Vec<String>,
}

impl Frame {
    /// Creates an empty frame; a `width` of 0 disables clipping.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Clipping width, 0 when unbounded.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Appends a line, clipping it to the frame width.
    pub fn push(&mut self, line: Line) {
        let mut remaining = if self.width == 0 { usize::MAX } else { self.width };
        let mut styled = String::new();
        let mut plain = String::new();

        for (style, text) in &line.segments {
            if remaining == 0 {
                break;
            }
            let visible = clip_to_width(text, remaining);
            remaining -= display_width(visible);
            if style.is_empty() {
                styled.push_str(visible);
            } else {
                styled.push_str(style);
                styled.push_str(visible);
                styled.push_str(Theme::reset());
            }
            plain.push_str(visible);
        }

        self.lines.push(styled);
        self.plain.push(plain);
    }

    /// Appends an empty line.
    pub fn push_blank(&mut self) {
        self.push(Line::new());
    }

    /// Lines with ANSI styling.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines without styling, for tests and plain output.
    #[must_use]
    pub fn plain_lines(&self) -> &[String] {
        &self.plain
    }
}

/// Renders the session state into a frame.
///
/// Computes the view model from session state and delegates to the layout for
/// the current mode. The frame is clipped to `state.viewport_width` once the
/// terminal size is known.
#[must_use]
pub fn render(state: &AppState, theme: &Theme) -> Frame {
    let viewmodel = state.compute_viewmodel();
    let mut frame = Frame::new(state.viewport_width);
    render_viewmodel(&mut frame, &viewmodel, theme);
    frame
}

fn render_viewmodel(frame: &mut Frame, vm: &UIViewModel, theme: &Theme) {
    match vm {
        UIViewModel::Browse(view) => components::render_browse(frame, view, theme),
        UIViewModel::Failure(view) => components::render_failure(frame, view, theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogError, CommandEntry};
    use crate::ui::viewmodel::HELP_TEXT;

    fn catalog() -> Vec<CommandEntry> {
        vec![
            CommandEntry::new("kubectl get pods", "List all pods in current namespace")
                .with_examples(["kubectl get pods -n kube-system", "kubectl get pods -o wide"]),
            CommandEntry::new("docker ps -a", "List all containers"),
            CommandEntry::new("find . -name", "y".repeat(70)),
        ]
    }

    fn plain(state: &AppState) -> Vec<String> {
        render(state, &Theme::default()).plain_lines().to_vec()
    }

    #[test]
    fn browse_layout_top_to_bottom() {
        let state = AppState::new(catalog(), None, "c.yaml", "vim");
        let lines = plain(&state);

        assert!(lines[0].starts_with('╭'));
        assert!(lines[1].contains("Search: _"));
        assert!(lines[2].starts_with('╰'));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "> kubectl get pods  List all pods in current namespace");
        assert_eq!(lines[5], "  docker ps -a  List all containers");
        assert_eq!(lines.last().map(String::as_str), Some(HELP_TEXT));
        assert_eq!(lines[lines.len() - 2], "");
    }

    #[test]
    fn examples_panel_follows_list() {
        let state = AppState::new(catalog(), None, "c.yaml", "vim");
        let lines = plain(&state);
        let title = lines.iter().position(|l| l.contains("Examples:")).expect("examples panel");
        assert!(lines[title + 1].contains("kubectl get pods -n kube-system"));
        assert!(lines[title + 2].contains("kubectl get pods -o wide"));
    }

    #[test]
    fn long_description_is_cut_in_list_and_shown_in_panel() {
        let mut state = AppState::new(catalog(), None, "c.yaml", "vim");
        state.move_selection_down();
        state.move_selection_down();
        let lines = plain(&state);

        let row = format!("> find . -name  {}...", "y".repeat(50));
        assert!(lines.contains(&row));
        assert!(lines.iter().any(|l| l.contains(&"y".repeat(70))));
        assert!(!lines.iter().any(|l| l.contains("Examples:")));
    }

    #[test]
    fn empty_result_shows_placeholder() {
        let mut state = AppState::new(catalog(), None, "c.yaml", "vim");
        for c in "zzz".chars() {
            state.push_query_char(c);
        }
        let lines = plain(&state);
        assert!(lines[1].contains("Search: zzz_"));
        assert!(lines.iter().any(|l| l.contains("No matching commands")));
    }

    #[test]
    fn status_replaces_help_text() {
        let mut state = AppState::new(catalog(), None, "c.yaml", "vim");
        state.set_status("Copied!", chrono::Utc::now(), chrono::Duration::seconds(2));
        let lines = plain(&state);
        assert_eq!(lines.last().map(String::as_str), Some("Copied!"));
    }

    #[test]
    fn error_mode_renders_error_box() {
        let error = CatalogError::Parse {
            path: "c.yaml".into(),
            message: "invalid type: string".into(),
        };
        let state = AppState::new(Vec::new(), Some(error), "c.yaml", "vim");
        let lines = plain(&state);
        let text = lines.join("\n");

        assert!(text.contains("⚠ Parsing Failed"));
        assert!(text.contains("failed to parse c.yaml: invalid type: string"));
        assert!(text.contains("Press 'e' to edit config or Esc to quit"));
        assert!(!text.contains("Search:"));
    }

    #[test]
    fn lines_are_clipped_to_viewport_width() {
        let mut state = AppState::new(catalog(), None, "c.yaml", "vim");
        state.set_viewport(20, 24);
        for line in plain(&state) {
            assert!(display_width(&line) <= 20, "{line:?} exceeds width");
        }
    }

    #[test]
    fn list_is_windowed_to_viewport_height() {
        let catalog: Vec<_> = (0..50)
            .map(|i| CommandEntry::new(format!("cmd-{i:02}"), "d"))
            .collect();
        let mut state = AppState::new(catalog, None, "c.yaml", "vim");
        state.set_viewport(80, 15); // 7 list rows
        let rows = plain(&state)
            .into_iter()
            .filter(|l| l.contains("cmd-"))
            .count();
        assert_eq!(rows, 7);
    }

    #[test]
    fn block_scalars_never_break_frame_lines() {
        let yaml = r#"
- cmd: |
    cat <<EOF > out.txt
    hello
    EOF
  desc: "Write a heredoc"
  examples:
    - |
      printf 'a\n'
      printf 'b\n'
"#;
        let catalog = crate::catalog::yaml::parse_commands(yaml, std::path::Path::new("c.yaml"))
            .expect("valid catalog");
        let mut state = AppState::new(catalog, None, "c.yaml", "vim");
        state.set_viewport(80, 24);
        let frame = render(&state, &Theme::default());

        for line in frame.lines().iter().chain(frame.plain_lines()) {
            assert!(!line.contains(['\n', '\r']), "raw line break in {line:?}");
        }
        let plain = frame.plain_lines();
        assert_eq!(plain[4], "> cat <<EOF > out.txt⏎hello⏎EOF  Write a heredoc");
        assert!(plain.iter().any(|l| l.contains("printf 'b\\n'")));
    }

    #[test]
    fn styled_lines_carry_escape_codes() {
        let state = AppState::new(catalog(), None, "c.yaml", "vim");
        let frame = render(&state, &Theme::default());
        assert!(frame.lines()[4].contains("\u{1b}["));
        assert!(!frame.plain_lines()[4].contains("\u{1b}["));
    }

    #[test]
    fn frame_clips_across_segments() {
        let mut frame = Frame::new(5);
        frame.push(Line::new().styled(Theme::bold(), "abc").plain("defg"));
        assert_eq!(frame.plain_lines(), &["abcde".to_string()]);
    }
}
