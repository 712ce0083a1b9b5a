//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`routers`] - Dashboard, server and auth areas
//! - [`navigation`] - Sidebar, its registry and section publishers
//! - [`dashboard`] - Server list, server rows and search
//! - [`auth`] - Login pages
//! - [`flash`] - Flash message areas
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`screen`] - Full-page notices

pub mod auth;
pub mod dashboard;
pub mod flash;
pub mod icons;
pub mod navigation;
pub mod router;
pub mod routers;
pub mod screen;

pub use router::AppRouter;
