//! Authentication pages.
//!
//! Components:
//! - [`LoginContainer`] - Username and password form
//! - [`LoginFormContainer`] - Frame shared by the auth forms
//! - [`LoginCheckpoint`] - Second factor step
//! - [`ForgotPassword`] - Password reset request

mod login_container;
mod login_form_container;
mod pages;

pub use login_container::LoginContainer;
pub use login_form_container::LoginFormContainer;
pub use pages::{ForgotPassword, LoginCheckpoint};

use leptos::prelude::*;

/// Confirmation token handed from the login form to the checkpoint page.
#[derive(Clone, Copy)]
pub struct CheckpointToken(pub RwSignal<Option<String>>);

impl CheckpointToken {
    pub fn provide() -> Self {
        let token = Self(RwSignal::new(None));
        provide_context(token);
        token
    }
}
