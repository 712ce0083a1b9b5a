//! Sidebar navigation.
//!
//! Pages publish the links of their section; the navigation shell owns a
//! [`NavRegistry`] that stores them and lays the sidebar out from it.
//!
//! - [`entry`] - [`NavEntry`], [`NavLink`] and [`NavIcon`]
//! - [`registry`] - The owned entry collection and its grouped view
//! - [`channel`] - Publishing links into the registry, single-slot channel
//! - [`layout`] - Ordered sidebar items and their presentation

pub mod channel;
pub mod entry;
pub mod layout;
pub mod registry;

pub use channel::{LegacySlot, Publication, drain_slot, publish_links};
pub use entry::{NavEntry, NavIcon, NavLink, entries_from_links};
pub use layout::{InlineSection, ItemTarget, Presentation, SidebarItem, build_sidebar};
pub use registry::{NavGroup, NavRegistry};

/// Section label used when a publisher does not name one.
pub const DEFAULT_SECTION: &str = "Navigation";
