//! Query filtering over the command catalog.
//!
//! Filtering is presence/absence only: an entry is kept when the query is a
//! case-insensitive substring of its command text, description, or any tag.
//! There is no scoring, so the result keeps catalog order.

use super::CommandEntry;

/// Returns the entries of `catalog` matching `query`, in catalog order.
///
/// An empty query returns the whole catalog unchanged.
///
/// # Examples
///
/// ```
/// use kbase::domain::{filter_commands, CommandEntry};
///
/// let catalog = vec![
///     CommandEntry::new("kubectl get pods", "List all pods"),
///     CommandEntry::new("docker ps -a", "List all containers"),
/// ];
/// let hits = filter_commands(&catalog, "PODS");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].cmd, "kubectl get pods");
/// ```
#[must_use]
pub fn filter_commands(catalog: &[CommandEntry], query: &str) -> Vec<CommandEntry> {
    if query.is_empty() {
        return catalog.to_vec();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| entry.matches_query(&needle))
        .cloned()
        .collect()
}
