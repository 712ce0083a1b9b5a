//! Sidebar navigation.
//!
//! - [`NavigationShell`] - Layout owning the sidebar's registry
//! - [`NavigationBar`] - The sidebar itself
//! - [`SubNavigation`] - Publishes a page's section links into the sidebar
//! - [`NavContext`] - Registry and publication slot shared between them

mod context;
mod navigation_bar;
mod shell;
mod sub_navigation;

pub use context::NavContext;
pub use navigation_bar::NavigationBar;
pub use shell::NavigationShell;
pub use sub_navigation::SubNavigation;
