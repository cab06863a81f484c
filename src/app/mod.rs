//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal runtime (main.rs) and the domain/catalog layers. It implements
//! the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Follow-up Events ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`driver`]: Executes actions against the clipboard, editor and catalog
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keymap`]: Key press decoding
//! - [`modes`]: Normal/error mode state machine
//! - [`state`]: Central session state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use kbase::app::{handle_event, AppState, Event, InputAction};
//!
//! let mut state = AppState::new(vec![], None, "commands.yaml", "vim");
//! let (render, _) = handle_event(&mut state, &Event::Input(InputAction::Char('g')))?;
//! assert!(render);
//! # Ok::<(), kbase::domain::KbaseError>(())
//! ```

pub mod actions;
pub mod driver;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use driver::{Flow, Session};
pub use handler::{handle_event, Event, InputAction};
pub use keymap::map_key;
pub use modes::Mode;
pub use state::AppState;
