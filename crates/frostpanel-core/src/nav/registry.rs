//! In-memory registry of sidebar entries.

use super::entry::NavEntry;

/// Entries of one section, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavGroup {
    pub section: String,
    pub entries: Vec<NavEntry>,
}

/// Ordered collection of navigation entries, owned by the navigation shell.
///
/// Insertion order is preserved so rendering is stable. No two entries share
/// both `path` and `label`; the same path under different labels is allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavRegistry {
    entries: Vec<NavEntry>,
}

impl NavRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless its `(path, label)` pair is already present.
    ///
    /// Entries without a path or label are ignored. Returns whether the entry
    /// was stored.
    pub fn register(&mut self, entry: NavEntry) -> bool {
        if !entry.is_complete() || self.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove every entry of `section`, returning how many were removed.
    pub fn clear_section(&mut self, section: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.section != section);
        before - self.entries.len()
    }

    /// Replace the contents of `section` with `entries` in one step.
    ///
    /// Every published entry is moved into `section`. A section that already
    /// exists keeps its place in the grouped order; a new one goes last.
    /// Entries whose identity is held by another section are skipped.
    /// Returns how many entries the section holds afterwards.
    pub fn publish(&mut self, section: &str, entries: impl IntoIterator<Item = NavEntry>) -> usize {
        let slot = self.entries.iter().position(|e| e.section == section);
        self.clear_section(section);

        let mut fresh: Vec<NavEntry> = Vec::new();
        for mut entry in entries {
            entry.section = section.to_string();
            if !entry.is_complete()
                || self.contains(&entry)
                || fresh.iter().any(|f| f.same_identity(&entry))
            {
                continue;
            }
            fresh.push(entry);
        }

        let count = fresh.len();
        let at = slot.unwrap_or(self.entries.len()).min(self.entries.len());
        let tail = self.entries.split_off(at);
        self.entries.extend(fresh);
        self.entries.extend(tail);
        count
    }

    /// Group entries by section.
    ///
    /// Sections appear in the order their first entry was inserted. Computed
    /// on every call; the registry's own ordering is untouched.
    pub fn grouped_view(&self) -> Vec<NavGroup> {
        let mut groups: Vec<NavGroup> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|g| g.section == entry.section) {
                Some(group) => group.entries.push(entry.clone()),
                None => groups.push(NavGroup {
                    section: entry.section.clone(),
                    entries: vec![entry.clone()],
                }),
            }
        }
        groups
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn contains(&self, entry: &NavEntry) -> bool {
        self.entries.iter().any(|e| e.same_identity(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, path: &str, section: &str) -> NavEntry {
        NavEntry::new(label, path, section)
    }

    fn sections(registry: &NavRegistry) -> Vec<String> {
        registry
            .grouped_view()
            .into_iter()
            .map(|g| g.section)
            .collect()
    }

    #[test]
    fn test_duplicate_pair_is_stored_once() {
        let mut registry = NavRegistry::new();
        assert!(registry.register(entry("Console", "/console", "Server")));
        assert!(!registry.register(entry("Console", "/console", "Server")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_path_different_label_is_kept() {
        let mut registry = NavRegistry::new();
        registry.register(entry("Files", "/files", "Server"));
        registry.register(entry("File Manager", "/files", "Server"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_incomplete_entries_are_ignored() {
        let mut registry = NavRegistry::new();
        assert!(!registry.register(entry("", "/files", "Server")));
        assert!(!registry.register(entry("Files", " ", "Server")));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear_section_only_touches_that_section() {
        let mut registry = NavRegistry::new();
        registry.register(entry("API", "/account/api", "Account"));
        registry.register(entry("Console", "/console", "Server"));
        registry.register(entry("SSH Keys", "/account/ssh", "Account"));
        registry.register(entry("Files", "/files", "Server"));

        assert_eq!(registry.clear_section("Account"), 2);
        let paths: Vec<_> = registry.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/console", "/files"]);
        assert_eq!(registry.clear_section("Account"), 0);
    }

    #[test]
    fn test_grouped_view_uses_first_insertion_order() {
        let mut registry = NavRegistry::new();
        registry.register(entry("One", "/b/1", "B"));
        registry.register(entry("Two", "/a/2", "A"));
        registry.register(entry("Three", "/b/3", "B"));

        let groups = registry.grouped_view();
        assert_eq!(sections(&registry), vec!["B", "A"]);
        let b: Vec<_> = groups[0].entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(b, vec!["One", "Three"]);

        // base ordering is untouched by grouping
        let labels: Vec<_> = registry.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_publish_drops_stale_entries() {
        let mut registry = NavRegistry::new();
        registry.publish(
            "Server",
            vec![
                entry("Console", "/console", "Server"),
                entry("Files", "/files", "Server"),
                entry("Backups", "/backups", "Server"),
            ],
        );
        let count = registry.publish("Server", vec![entry("Console", "/console", "Server")]);

        assert_eq!(count, 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.entries()[0].label, "Console");
    }

    #[test]
    fn test_publish_keeps_section_slot() {
        let mut registry = NavRegistry::new();
        registry.publish("Server", vec![entry("Console", "/console", "Server")]);
        registry.publish("Account", vec![entry("API", "/account/api", "Account")]);
        registry.publish(
            "Server",
            vec![
                entry("Console", "/console", "Server"),
                entry("Files", "/files", "Server"),
            ],
        );

        assert_eq!(sections(&registry), vec!["Server", "Account"]);
        assert_eq!(registry.grouped_view()[0].entries.len(), 2);
    }

    #[test]
    fn test_publish_forces_section_and_dedupes() {
        let mut registry = NavRegistry::new();
        registry.register(entry("API", "/account/api", "Account"));
        let count = registry.publish(
            "Server",
            vec![
                entry("Console", "/console", "Elsewhere"),
                entry("Console", "/console", "Server"),
                entry("API", "/account/api", "Server"),
            ],
        );

        assert_eq!(count, 1);
        let server = &registry.grouped_view()[1];
        assert_eq!(server.section, "Server");
        assert_eq!(server.entries[0].section, "Server");
    }

    #[test]
    fn test_publish_empty_set_clears_section() {
        let mut registry = NavRegistry::new();
        registry.publish("Server", vec![entry("Console", "/console", "Server")]);
        assert_eq!(registry.publish("Server", Vec::new()), 0);
        assert!(registry.is_empty());
        assert!(registry.grouped_view().is_empty());
    }
}
