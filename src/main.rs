//! kbase terminal entry point.
//!
//! Wires configuration, logging and the catalog into a [`Session`], then runs
//! the event loop: poll the terminal until the next tick is due, dispatch
//! whatever arrived, and redraw when the handler asks for it.

use chrono::Utc;
use clap::Parser;
use kbase::app::{Event, Flow, Session};
use kbase::infrastructure::terminal::{self, TerminalGuard};
use kbase::infrastructure::{default_config_path, default_log_path, SystemClipboard, TerminalEditor};
use kbase::observability::init_tracing;
use kbase::{bootstrap, ui, Bootstrap, Cli, Config, Result, Theme};
use std::io::{self, Stdout};
use std::process::ExitCode;
use std::time::Duration;

/// Poll timeout while no tick is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

type TerminalSession = Session<SystemClipboard, TerminalEditor, kbase::catalog::YamlCatalog, Stdout>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("kbase: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = Config::load(&config_path)?.with_cli_overrides(cli);

    init_tracing(config.trace_level.as_deref(), &default_log_path());
    tracing::debug!(config = ?config, "configuration loaded");

    let Bootstrap { state, source, theme } = bootstrap(&config)?;

    let _guard = TerminalGuard::enter()?;
    let mut session = Session::new(state, SystemClipboard::new(), TerminalEditor, source, io::stdout());
    let result = event_loop(&mut session, &theme);

    if let Err(e) = &result {
        tracing::error!(error = %e, "session ended with error");
    } else {
        tracing::info!("session ended");
    }
    result
}

fn event_loop(session: &mut TerminalSession, theme: &Theme) -> Result<()> {
    let (width, height) = terminal::size()?;
    let mut render = false;

    for event in [Event::Resize { width, height }, Event::Init] {
        match session.dispatch(event)? {
            Flow::Quit => return Ok(()),
            Flow::Continue { render: r } => render |= r,
        }
    }

    let mut stdout = io::stdout();
    loop {
        if render {
            terminal::draw(&mut stdout, &ui::render(session.state(), theme))?;
            render = false;
        }

        let timeout = session.time_until_tick(Utc::now()).unwrap_or(IDLE_POLL);
        if let Some(event) = terminal::poll_event(timeout)? {
            match session.dispatch(event)? {
                Flow::Quit => return Ok(()),
                Flow::Continue { render: r } => render |= r,
            }
        }

        let now = Utc::now();
        if session.tick_due(now) {
            match session.fire_tick(now)? {
                Flow::Quit => return Ok(()),
                Flow::Continue { render: r } => render |= r,
            }
        }
    }
}
