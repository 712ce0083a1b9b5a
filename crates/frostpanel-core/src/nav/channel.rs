//! Registration channel between section publishers and the registry.
//!
//! Publishers declare a section and its links; the channel turns them into
//! registry entries. Besides the direct path ([`publish_links`]) there is a
//! single-slot channel ([`LegacySlot`]) that holds the latest publication
//! only. Assigning the slot overwrites whatever was there, whatever its
//! section; releasing it only succeeds for the section that currently owns it.

use super::entry::{NavLink, entries_from_links};
use super::registry::NavRegistry;

/// A section's link set as announced by one publisher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Publication {
    pub section: String,
    pub links: Vec<NavLink>,
}

/// Single-slot, last-writer-wins publication channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacySlot {
    current: Option<Publication>,
}

impl LegacySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `links` for `section`, replacing any previous publisher.
    pub fn assign(&mut self, section: impl Into<String>, links: Vec<NavLink>) {
        self.current = Some(Publication {
            section: section.into(),
            links,
        });
    }

    /// Clear the slot if it still belongs to `section`.
    ///
    /// Returns `false` when a different section has taken the slot since, in
    /// which case the newer publication is left alone.
    pub fn release(&mut self, section: &str) -> bool {
        match &self.current {
            Some(p) if p.section == section => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Publication> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

/// Replace `section` in `registry` with the valid entries among `links`.
///
/// Returns how many entries the section holds afterwards.
pub fn publish_links(registry: &mut NavRegistry, section: &str, links: &[NavLink]) -> usize {
    registry.publish(section, entries_from_links(section, links))
}

/// Re-publish the slot's current publication into `registry`, if any.
///
/// Returns the section that was refreshed.
pub fn drain_slot<'a>(registry: &mut NavRegistry, slot: &'a LegacySlot) -> Option<&'a str> {
    let publication = slot.current()?;
    publish_links(registry, &publication.section, &publication.links);
    Some(&publication.section)
}
