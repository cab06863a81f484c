//! Command entry domain model.
//!
//! A [`CommandEntry`] is one snippet in the knowledge base: the command text
//! itself, a short description, and optional tags, platform constraints and
//! usage examples. Entries are deserialized from the YAML catalog and never
//! mutated after loading.

use serde::{Deserialize, Serialize};

/// A single command in the knowledge base.
///
/// `cmd` and `desc` are required; a YAML entry missing either fails to parse.
/// The remaining fields default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// The command text copied to the clipboard.
    pub cmd: String,
    /// Short human description.
    pub desc: String,
    /// Free-form classification tags, searched by the filter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Operating systems this command applies to; empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platform: Vec<String>,
    /// Usage examples shown in the detail panel.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl CommandEntry {
    /// Creates an entry with only the required fields set.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbase::domain::CommandEntry;
    ///
    /// let entry = CommandEntry::new("docker ps -a", "List all containers");
    /// assert!(entry.tags.is_empty());
    /// ```
    #[must_use]
    pub fn new(cmd: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            desc: desc.into(),
            tags: Vec::new(),
            platform: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Builder-style setter for tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for platform constraints.
    #[must_use]
    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platform = platforms.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style setter for usage examples.
    #[must_use]
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if the already-lowercased `needle` occurs in the
    /// command text, the description, or any tag.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        self.cmd.to_lowercase().contains(needle)
            || self.desc.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Returns `true` if the entry applies to the operating system `os`.
    ///
    /// Entries without platform constraints apply everywhere.
    #[must_use]
    pub fn supports_platform(&self, os: &str) -> bool {
        self.platform.is_empty() || self.platform.iter().any(|p| p == os)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_of_the_three_fields() {
        let entry = CommandEntry::new("kubectl get pods", "List all pods in namespace")
            .with_tags(["k8s", "Container"]);

        assert!(entry.matches_query("kubectl"));
        assert!(entry.matches_query("namespace"));
        assert!(entry.matches_query("container"));
        assert!(!entry.matches_query("docker"));
    }

    #[test]
    fn examples_are_not_searched() {
        let entry = CommandEntry::new("git log", "Show history").with_examples(["git log --graph"]);
        assert!(!entry.matches_query("graph"));
    }

    #[test]
    fn empty_platform_list_applies_everywhere() {
        let everywhere = CommandEntry::new("ls", "List files");
        let unix = CommandEntry::new("ps aux", "Processes").with_platforms(["linux", "darwin"]);

        assert!(everywhere.supports_platform("windows"));
        assert!(unix.supports_platform("darwin"));
        assert!(!unix.supports_platform("windows"));
    }

    #[test]
    fn missing_description_is_rejected() {
        let yaml = "- cmd: \"ls\"\n";
        let parsed: Result<Vec<CommandEntry>, _> = serde_yaml::from_str(yaml);
        assert!(parsed.is_err());
    }
}
