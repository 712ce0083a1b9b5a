//! Pages of one server.

use frostpanel_core::route::{AppRoute, shows_conflict};
use frostpanel_core::routes::{SERVER_ROUTES, can, find_route, server_nav_links};
use frostpanel_core::server::{Server, conflict_notice};
use leptos::prelude::*;

use crate::api;
use crate::app::AppContext;
use crate::components::navigation::{NavigationShell, SubNavigation};
use crate::components::router::use_route;
use crate::components::screen::{NotFound, ScreenBlock, ScreenSpinner};
use crate::utils::console;

/// Loads server `id`, then renders its section and pages.
///
/// One instance serves one server; moving to another server id mounts a new
/// router.
#[component]
pub fn ServerRouter(id: String) -> impl IntoView {
    let server = LocalResource::new(move || {
        let id = id.clone();
        async move {
            api::get_server(&id).await.map_err(|e| {
                console::error(&format!("failed to load server {}: {}", id, e));
                e.to_human()
            })
        }
    });

    move || match server.get() {
        None => view! { <ScreenSpinner /> }.into_any(),
        Some(Err(message)) => view! {
            <ScreenBlock title="An error was encountered" message=message error=true />
        }
        .into_any(),
        Some(Ok(server)) => view! { <ServerPages server=server /> }.into_any(),
    }
}

#[component]
fn ServerPages(server: Server) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let routing = use_route();
    let server = StoredValue::new(server);

    let links = Signal::derive(move || {
        let root_admin = ctx.is_root_admin();
        server.with_value(|s| server_nav_links(&s.id, &s.permissions, root_admin, Some(s.internal_id)))
    });

    let content = move || {
        let root_admin = ctx.is_root_admin();
        let pathname = routing.path.get();
        let page = routing.route.with(|r| match r {
            AppRoute::Server { page, .. } => page.clone(),
            _ => String::new(),
        });

        server.with_value(|s| {
            if shows_conflict(s.in_conflict_state(), root_admin, &pathname, &s.id) {
                let (title, message) = conflict_notice(s).unwrap_or(("Unavailable", ""));
                return view! { <ScreenBlock title=title message=message /> }.into_any();
            }
            match find_route(SERVER_ROUTES, &page) {
                None => view! { <NotFound /> }.into_any(),
                Some(route) if route.permission.is_some_and(|p| !can(&s.permissions, p)) => view! {
                    <ScreenBlock
                        title="Access Denied"
                        message="You do not have permission to access this page."
                        error=true
                    />
                }
                .into_any(),
                Some(route) => view! {
                    <ScreenBlock
                        title=route.name.unwrap_or(s.name.as_str()).to_string()
                        message=format!("{} on {}", s.name, s.node)
                    />
                }
                .into_any(),
            }
        })
    };

    view! {
        <NavigationShell>
            <SubNavigation links=links section="Server".to_string() />
            {content}
        </NavigationShell>
    }
}
