//! Top-level routers, one per area of the panel.
//!
//! Each router renders its own [`NavigationShell`](crate::components::navigation::NavigationShell),
//! so the sidebar registry lives as long as the router does.

mod auth_router;
mod dashboard_router;
mod server_router;

pub use auth_router::AuthRouter;
pub use dashboard_router::DashboardRouter;
pub use server_router::ServerRouter;
