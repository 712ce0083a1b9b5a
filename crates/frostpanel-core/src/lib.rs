//! Browser-independent core of the frostpanel control panel front end.
//!
//! - [`nav`] - Navigation registry, registration channel and sidebar layout
//! - [`route`] - Path routing and active-link matching
//! - [`routes`] - Account and server route tables
//! - [`server`] - Server and resource-usage records with derived display values
//! - [`api`] - Wire envelopes returned by the panel API
//! - [`flash`] - Keyed flash messages
//! - [`search`] - Server search bookkeeping
//! - [`login`] - Login form values and outcomes
//! - [`settings`] - Site configuration and authenticated user records
//! - [`format`] - Display formatters
//! - [`error`] - Error types

pub mod api;
pub mod error;
pub mod flash;
pub mod format;
pub mod login;
pub mod nav;
pub mod route;
pub mod routes;
pub mod search;
pub mod server;
pub mod settings;

pub use error::{ApiError, LoginError, StoreError};
