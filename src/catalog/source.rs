//! Catalog source abstraction.
//!
//! The [`CatalogSource`] trait is the seam between the session driver and
//! wherever commands come from. The driver only needs a way to (re)load the
//! entries after the editor exits; which file the editor opens is session
//! state (`AppState::backing_path`).

use crate::domain::{CatalogError, CommandEntry};

/// A reloadable origin of command entries.
///
/// # Implementations
///
/// - [`YamlCatalog`](crate::catalog::YamlCatalog): YAML file plus optional extra paths
///
/// # Examples
///
/// ```no_run
/// use kbase::catalog::{CatalogSource, YamlCatalog};
///
/// let source = YamlCatalog::new("/home/me/.config/kbase/commands.yaml");
/// let commands = source.load()?;
/// println!("{} commands loaded", commands.len());
/// # Ok::<(), kbase::domain::CatalogError>(())
/// ```
pub trait CatalogSource {
    /// Loads the full, platform-filtered catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the backing file cannot be read or parsed.
    fn load(&self) -> Result<Vec<CommandEntry>, CatalogError>;
}
