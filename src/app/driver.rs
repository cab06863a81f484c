//! Session driver executing handler actions against real collaborators.
//!
//! [`Session`] owns the [`AppState`] and the side-effect seams: clipboard,
//! editor launcher, catalog source, an output stream for the stdout fallback
//! and a clock. Each [`Session::dispatch`] runs one event through the handler,
//! executes the returned actions, and feeds their outcomes back in as
//! follow-up events until the queue drains.
//!
//! ```text
//! Event ─► handle_event ─► Actions ─┬─► CopyToClipboard ─► CopyFinished ─┐
//!   ▲                               ├─► OpenEditor ─► EditorClosed ──────┤
//!   └───────────────────────────────┴────────────────────────────────────┘
//! ```
//!
//! The driver also owns the tick deadline. Ticks are one-shot: a deadline
//! exists only because the handler emitted `Action::ScheduleTick`.

use crate::app::{handle_event, Action, AppState, Event};
use crate::catalog::CatalogSource;
use crate::domain::error::Result;
use crate::infrastructure::{Clipboard, EditorLauncher};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

/// Source of the current time.
pub type Clock = fn() -> DateTime<Utc>;

/// What the main loop should do after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running; redraw if `render` is set.
    Continue {
        /// Whether any processed event changed what is displayed.
        render: bool,
    },
    /// The user asked to quit.
    Quit,
}

/// Result of executing one action.
enum Step {
    Done,
    FollowUp(Event),
    Quit,
}

/// A browsing session wired to its collaborators.
pub struct Session<C, E, S, W> {
    state: AppState,
    clipboard: C,
    editor: E,
    source: S,
    output: W,
    clock: Clock,
    next_tick: Option<DateTime<Utc>>,
}

impl<C, E, S, W> Session<C, E, S, W>
where
    C: Clipboard,
    E: EditorLauncher,
    S: CatalogSource,
    W: Write,
{
    /// Creates a session using the system clock.
    pub fn new(state: AppState, clipboard: C, editor: E, source: S, output: W) -> Self {
        Self {
            state,
            clipboard,
            editor,
            source,
            output,
            clock: Utc::now,
            next_tick: None,
        }
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Current session state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The output stream used for the stdout fallback.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Processes `event` and every follow-up event its actions produce.
    ///
    /// # Errors
    ///
    /// Returns an error if the handler fails or the stdout fallback cannot be
    /// written. Clipboard and editor failures are not errors; they travel
    /// back to the handler as event outcomes.
    pub fn dispatch(&mut self, event: Event) -> Result<Flow> {
        let mut queue = VecDeque::from([event]);
        let mut render = false;

        while let Some(event) = queue.pop_front() {
            let (needs_render, actions) = handle_event(&mut self.state, &event)?;
            render |= needs_render;

            for action in actions {
                match self.execute(action)? {
                    Step::Done => {}
                    Step::FollowUp(event) => queue.push_back(event),
                    Step::Quit => return Ok(Flow::Quit),
                }
            }
        }

        Ok(Flow::Continue { render })
    }

    /// Whether the armed tick deadline has passed.
    pub fn tick_due(&self, now: DateTime<Utc>) -> bool {
        self.next_tick.is_some_and(|deadline| now >= deadline)
    }

    /// Time left until the armed tick, or `None` if no tick is armed.
    pub fn time_until_tick(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.next_tick
            .map(|deadline| (deadline - now).to_std().unwrap_or(Duration::ZERO))
    }

    /// Disarms the tick deadline and dispatches `Event::Tick`.
    ///
    /// # Errors
    ///
    /// See [`Session::dispatch`].
    pub fn fire_tick(&mut self, now: DateTime<Utc>) -> Result<Flow> {
        self.next_tick = None;
        self.dispatch(Event::Tick(now))
    }

    fn execute(&mut self, action: Action) -> Result<Step> {
        match action {
            Action::Quit => {
                tracing::debug!("quit requested");
                Ok(Step::Quit)
            }
            Action::CopyToClipboard(text) => {
                let result = self.clipboard.set(&text).map_err(|e| e.to_string());
                let at = (self.clock)();
                Ok(Step::FollowUp(Event::CopyFinished { text, result, at }))
            }
            Action::EmitStdout(text) => {
                writeln!(self.output, "{text}")?;
                self.output.flush()?;
                Ok(Step::Done)
            }
            Action::OpenEditor { program, path } => {
                let _span =
                    tracing::debug_span!("open_editor", editor = %program, path = %path.display())
                        .entered();
                let exit = self
                    .editor
                    .launch(&program, &path)
                    .map_err(|e| e.to_string());
                let reload = self.source.load();
                Ok(Step::FollowUp(Event::EditorClosed { exit, reload }))
            }
            Action::ScheduleTick(delay) => {
                let delay = TimeDelta::from_std(delay).unwrap_or(TimeDelta::zero());
                self.next_tick = Some((self.clock)() + delay);
                Ok(Step::Done)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogError, CommandEntry, KbaseError};
    use std::path::Path;

    struct NullClipboard;

    impl Clipboard for NullClipboard {
        fn set(&mut self, _contents: &str) -> Result<()> {
            Err(KbaseError::Clipboard("no clipboard".to_string()))
        }
    }

    struct NoEditor;

    impl EditorLauncher for NoEditor {
        fn launch(&mut self, _program: &str, _path: &Path) -> Result<()> {
            Ok(())
        }
    }

    struct FixedSource;

    impl CatalogSource for FixedSource {
        fn load(&self) -> std::result::Result<Vec<CommandEntry>, CatalogError> {
            Ok(Vec::new())
        }
    }

    fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
    }

    fn session() -> Session<NullClipboard, NoEditor, FixedSource, Vec<u8>> {
        let state = AppState::new(
            vec![CommandEntry::new("uptime", "Show load")],
            None,
            "c.yaml",
            "vim",
        );
        Session::new(state, NullClipboard, NoEditor, FixedSource, Vec::new())
            .with_clock(epoch)
    }

    #[test]
    fn no_tick_until_scheduled() {
        let session = session();
        assert!(!session.tick_due(epoch()));
        assert_eq!(session.time_until_tick(epoch()), None);
    }

    #[test]
    fn init_arms_tick_one_second_out() {
        let mut session = session();
        session.dispatch(Event::Init).unwrap();
        assert_eq!(session.time_until_tick(epoch()), Some(Duration::from_secs(1)));
        assert!(!session.tick_due(epoch()));
        assert!(session.tick_due(epoch() + TimeDelta::seconds(1)));
        assert_eq!(
            session.time_until_tick(epoch() + TimeDelta::seconds(5)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn tick_rearms_itself() {
        let mut session = session();
        session.dispatch(Event::Init).unwrap();
        session.fire_tick(epoch() + TimeDelta::seconds(1)).unwrap();
        assert!(session.time_until_tick(epoch()).is_some());
    }

    #[test]
    fn quit_stops_dispatch() {
        let mut session = session();
        let flow = session
            .dispatch(Event::Input(crate::app::InputAction::Quit))
            .unwrap();
        assert_eq!(flow, Flow::Quit);
    }

    #[test]
    fn clipboard_failure_prints_command() {
        let mut session = session();
        let flow = session
            .dispatch(Event::Input(crate::app::InputAction::Copy))
            .unwrap();
        assert_eq!(flow, Flow::Continue { render: true });
        assert_eq!(session.output().as_slice(), b"uptime\n");
    }
}
