//! Application configuration.
//!
//! Centralizes the compile-time constants used throughout the application.
//! Runtime settings (site name, reCAPTCHA) come from the page's bootstrap
//! globals instead; see [`globals`].

// =============================================================================
// Bootstrap Globals
// =============================================================================

/// Names of the values the server renders into the page.
pub mod globals {
    /// `window.SiteConfiguration`: site name, locale and reCAPTCHA settings.
    pub const SITE_CONFIGURATION: &str = "SiteConfiguration";
    /// `window.PterodactylUser`: the signed-in user, absent when signed out.
    pub const USER: &str = "PterodactylUser";
    /// `<meta name="...">` holding the CSRF token.
    pub const CSRF_META: &str = "csrf-token";
}

// =============================================================================
// Polling
// =============================================================================

/// Interval between resource usage refreshes of a server row.
pub const STATS_POLL_INTERVAL_MS: u32 = 30_000;

// =============================================================================
// Search
// =============================================================================

pub mod search {
    pub use frostpanel_core::search::MIN_TERM_LEN;

    /// Quiet period after the last keystroke before a search is sent.
    pub const DEBOUNCE_MS: u32 = 500;
}

// =============================================================================
// Flash Keys
// =============================================================================

/// Areas flash messages are scoped to.
pub mod flash_keys {
    pub const DASHBOARD: &str = "dashboard";
    pub const SEARCH: &str = "search";
    pub const AUTH: &str = "auth";
}

// =============================================================================
// Auth
// =============================================================================

/// Action name reported with the reCAPTCHA challenge.
pub const RECAPTCHA_ACTION: &str = "login";

// =============================================================================
// UI Configuration
// =============================================================================

/// Below this width the sidebar turns into an overlay.
pub const MOBILE_QUERY: &str = "(max-width: 767px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
