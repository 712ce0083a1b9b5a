//! Navigation context shared between the sidebar and section publishers.
//!
//! The registry and the single publication slot live here, owned by the
//! [`NavigationShell`](super::NavigationShell) that created them. Publishers
//! below the shell reach them through `use_context::<NavContext>()`; nothing
//! is kept in a global.

use frostpanel_core::nav::{
    LegacySlot, NavEntry, NavGroup, NavLink, NavRegistry, drain_slot, publish_links,
};
use leptos::prelude::*;

/// Registry and publication slot of one navigation shell.
///
/// `Copy` because both fields are signals. Writes are `try_update`s so a
/// publisher tearing down after its shell is a no-op.
#[derive(Clone, Copy)]
pub struct NavContext {
    registry: RwSignal<NavRegistry>,
    slot: RwSignal<LegacySlot>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            registry: RwSignal::new(NavRegistry::new()),
            slot: RwSignal::new(LegacySlot::new()),
        }
    }

    /// Create a context and provide it to the current subtree.
    pub fn provide() -> Self {
        let ctx = Self::new();
        provide_context(ctx);
        ctx
    }

    /// Add one entry unless its `(path, label)` is already registered.
    pub fn register_nav_item(&self, entry: NavEntry) -> bool {
        self.registry
            .try_update(|r| r.register(entry))
            .unwrap_or(false)
    }

    /// Replace `section` with the valid entries among `links` in one step.
    pub fn publish(&self, section: &str, links: &[NavLink]) {
        self.registry.try_update(|r| {
            publish_links(r, section, links);
        });
    }

    /// Record `links` as the latest publication, replacing any other.
    pub fn assign_legacy(&self, section: &str, links: Vec<NavLink>) {
        self.slot.try_update(|s| s.assign(section, links));
    }

    /// Clear the publication slot if `section` still owns it.
    pub fn release_legacy(&self, section: &str) -> bool {
        self.slot
            .try_update(|s| s.release(section))
            .unwrap_or(false)
    }

    /// Re-publish the slot's publication into the registry.
    ///
    /// Tracks the slot, so an effect calling this follows every assignment.
    /// Returns the refreshed section.
    pub fn drain_legacy(&self) -> Option<String> {
        let registry = self.registry;
        self.slot
            .try_with(|slot| {
                registry
                    .try_update(|r| drain_slot(r, slot).map(str::to_string))
                    .flatten()
            })
            .flatten()
    }

    /// Sections in first-seen order, tracked.
    pub fn groups(&self) -> Vec<NavGroup> {
        self.registry
            .try_with(|r| r.grouped_view())
            .unwrap_or_default()
    }

    /// All entries in insertion order, tracked.
    pub fn entries(&self) -> Vec<NavEntry> {
        self.registry
            .try_with(|r| r.entries().to_vec())
            .unwrap_or_default()
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}
