//! Dashboard components.
//!
//! Components:
//! - [`ServerList`] - The signed-in user's servers
//! - [`ServerRow`] - One server with live resource usage
//! - [`SearchModal`] - Server search opened from the sidebar

mod search_modal;
mod server_list;
mod server_row;

pub use search_modal::SearchModal;
pub use server_list::ServerList;
pub use server_row::ServerRow;
