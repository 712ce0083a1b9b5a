//! Browser glue.
//!
//! - [`dom`] - Window, document, history and bootstrap globals
//! - [`console`] - Console logging
//! - [`http`] - Panel API requests over `gloo-net`
//! - [`recaptcha`] - reCAPTCHA challenge

pub mod console;
pub mod dom;
pub mod http;
pub mod recaptcha;
