//! Application router component.
//!
//! Handles path-based routing with the History API.
//!
//! # Architecture
//!
//! - **`location.pathname` is the source of truth**: the route is derived from it
//! - **Routers stay mounted across page changes**: switching pages inside the
//!   dashboard or one server never remounts that router or its sidebar
//! - **popstate events**: browser back/forward buttons work automatically

use frostpanel_core::route::AppRoute;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::routers::{AuthRouter, DashboardRouter, ServerRouter};
use crate::utils::dom;

// ============================================================================
// Route Context
// ============================================================================

/// Current location, shared with every component below the router.
#[derive(Clone, Copy)]
pub struct RouteContext {
    /// Raw pathname.
    pub path: RwSignal<String>,
    /// Parsed route.
    pub route: Memo<AppRoute>,
}

impl RouteContext {
    fn new() -> Self {
        let path = RwSignal::new(dom::pathname());
        let route = Memo::new(move |_| path.with(|p| AppRoute::from_path(p)));
        Self { path, route }
    }

    /// Navigate inside the app, adding a history entry.
    pub fn navigate(&self, path: &str) {
        if self.path.with_untracked(|current| current == path) {
            return;
        }
        dom::push_path(path);
        self.path.set(path.to_string());
    }

    /// Navigate inside the app, replacing the current history entry.
    pub fn redirect(&self, path: &str) {
        dom::replace_path(path);
        self.path.set(path.to_string());
    }
}

/// Get the route context; panics outside [`AppRouter`].
pub fn use_route() -> RouteContext {
    use_context::<RouteContext>().expect("RouteContext must be provided by AppRouter")
}

/// Which top-level router owns the current path.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Area {
    Auth,
    Server(String),
    Dashboard,
}

impl Area {
    fn of(route: &AppRoute) -> Self {
        match route {
            r if r.is_auth() => Self::Auth,
            AppRoute::Server { id, .. } => Self::Server(id.clone()),
            _ => Self::Dashboard,
        }
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `/auth/...` → [`AuthRouter`]
/// - `/server/<id>/...` → [`ServerRouter`] (one instance per server id)
/// - everything else → [`DashboardRouter`]
///
/// Signed-out visitors are sent to the login page.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let routing = RouteContext::new();
    provide_context(routing);

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let path = routing.path;
        let closure = Closure::wrap(Box::new(move || {
            path.set(dom::pathname());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    Effect::new(move |_| {
        let signed_in = ctx.user.with(|u| u.is_some());
        if !signed_in && !routing.route.with(|r| r.is_auth()) {
            routing.redirect(&AppRoute::Login.to_path());
        }
    });

    let area = Memo::new(move |_| routing.route.with(Area::of));

    move || match area.get() {
        Area::Auth => view! { <AuthRouter /> }.into_any(),
        Area::Server(id) => view! { <ServerRouter id=id /> }.into_any(),
        Area::Dashboard => view! { <DashboardRouter /> }.into_any(),
    }
}

// ============================================================================
// Link
// ============================================================================

/// In-app link.
///
/// Plain left clicks navigate through the History API; modified clicks
/// (new tab, new window) fall through to the browser.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(into)] class: Signal<String>,
    #[prop(optional_no_strip)] title: Option<&'static str>,
    /// Called after an in-app navigation.
    #[prop(optional)]
    on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let routing = use_route();
    let target = href.clone();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let modified =
            ev.button() != 0 || ev.meta_key() || ev.ctrl_key() || ev.shift_key() || ev.alt_key();
        if modified || ev.default_prevented() {
            return;
        }
        ev.prevent_default();
        routing.navigate(&target);
        if let Some(callback) = on_navigate {
            callback.run(());
        }
    };

    view! {
        <a href=href class=class title=title on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_of_route() {
        assert_eq!(Area::of(&AppRoute::from_path("/auth/login")), Area::Auth);
        assert_eq!(
            Area::of(&AppRoute::from_path("/auth/login/checkpoint")),
            Area::Auth
        );
        assert_eq!(
            Area::of(&AppRoute::from_path("/server/1a7ce997/files")),
            Area::Server("1a7ce997".to_string())
        );
        assert_eq!(Area::of(&AppRoute::from_path("/")), Area::Dashboard);
        assert_eq!(Area::of(&AppRoute::from_path("/account/api")), Area::Dashboard);
        assert_eq!(Area::of(&AppRoute::from_path("/nowhere")), Area::Dashboard);
    }
}
