//! User interface rendering layer with component-based architecture.
//!
//! This module turns session state into ANSI-styled lines through composable
//! rendering components. It provides theme support and width-aware clipping.
//! Nothing here writes to the terminal; see `infrastructure::terminal`.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → Frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator and the `Frame` type
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared text measuring and truncation utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, Frame, Line};
pub use theme::Theme;
pub use viewmodel::{BrowseView, DetailPanel, DisplayItem, ErrorView, SearchBarInfo, StatusLine, UIViewModel};
