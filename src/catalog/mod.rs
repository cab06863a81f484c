//! Command catalog loading.
//!
//! Everything that turns files on disk into `CommandEntry` lists lives here.
//! The session engine only sees the [`CatalogSource`] trait.
//!
//! # Modules
//!
//! - [`source`]: the `CatalogSource` seam used by the session driver
//! - [`yaml`]: YAML file and directory loading with platform filtering
//! - [`template`]: default catalog written on first run

pub mod source;
pub mod template;
pub mod yaml;

pub use source::CatalogSource;
pub use template::{init_default_catalog, DEFAULT_CATALOG};
pub use yaml::{current_os, filter_by_platform, load_commands, load_directory, YamlCatalog};
