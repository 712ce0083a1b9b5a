//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! start-up decoding of the page's bootstrap globals.

use frostpanel_core::flash::FlashStore;
use frostpanel_core::settings::{SiteConfiguration, UserData};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::globals;
use crate::utils::{console, dom};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; any component can reach it
/// with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Site name, locale and reCAPTCHA settings.
    pub settings: RwSignal<SiteConfiguration>,
    /// Signed-in user, `None` when signed out.
    pub user: RwSignal<Option<UserData>>,
    /// Flash messages for every area of the page.
    pub flashes: RwSignal<FlashStore>,
}

impl AppContext {
    /// Creates a context from the page's bootstrap globals.
    ///
    /// Missing or malformed globals fall back to defaults and are logged.
    pub fn new() -> Self {
        let settings = dom::read_global::<SiteConfiguration>(globals::SITE_CONFIGURATION)
            .unwrap_or_else(|e| {
                console::warn(&format!("{}; using default site settings", e));
                SiteConfiguration::default()
            });
        let user = match dom::read_global::<UserData>(globals::USER) {
            Ok(user) => Some(user),
            Err(frostpanel_core::StoreError::Missing(_)) => None,
            Err(e) => {
                console::warn(&e.to_string());
                None
            }
        };

        Self {
            settings: RwSignal::new(settings),
            user: RwSignal::new(user),
            flashes: RwSignal::new(FlashStore::new()),
        }
    }

    /// Whether the signed-in user is a root admin.
    pub fn is_root_admin(&self) -> bool {
        self.user
            .with(|u| u.as_ref().is_some_and(|u| u.root_admin))
    }

    /// Drop the messages of `key`, or all of them when `key` is `None`.
    pub fn clear_flashes(&self, key: Option<&str>) {
        self.flashes.try_update(|f| f.clear(key));
    }

    /// Replace the messages of `key` with one error.
    pub fn clear_and_add_error(&self, key: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        self.flashes
            .try_update(|f| f.clear_and_add_error(key, message));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0f1721;
                    color: #e2e8f0;
                    font-family: 'IBM Plex Sans', sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #f87171; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #94a3b8; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #1a2433;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #64748b;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #f87171;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #3b82f6;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
