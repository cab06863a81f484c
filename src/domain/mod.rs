//! Domain layer for kbase.
//!
//! Core types independent of the terminal, the filesystem layout, and the
//! clipboard: the command entry model, the query filter, and error types.
//!
//! # Organization
//!
//! - [`command`]: `CommandEntry` and its matching rules
//! - [`filter`]: the catalog filter run on every keystroke
//! - [`error`]: error types and result alias

pub mod command;
pub mod error;
pub mod filter;

pub use command::CommandEntry;
pub use error::{CatalogError, KbaseError, Result};
pub use filter::filter_commands;
