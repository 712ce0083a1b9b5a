use frostpanel_core::nav::Publication;
use frostpanel_core::route::AppRoute;
use frostpanel_core::routes::{ACCOUNT_ROUTES, account_nav_links, find_route};
use leptos::prelude::*;

use crate::components::dashboard::ServerList;
use crate::components::navigation::NavigationShell;
use crate::components::router::use_route;
use crate::components::screen::{NotFound, ScreenBlock};

/// Server list and account pages.
///
/// Under `/account` the sidebar carries the Account section inline.
#[component]
pub fn DashboardRouter() -> impl IntoView {
    let routing = use_route();

    let in_account = Memo::new(move |_| routing.route.with(|r| matches!(r, AppRoute::Account { .. })));
    let inline = Signal::derive(move || {
        in_account.get().then(|| Publication {
            section: "Account".to_string(),
            links: account_nav_links(),
        })
    });

    view! {
        <NavigationShell inline=inline>
            {move || match routing.route.get() {
                AppRoute::Dashboard => view! { <ServerList /> }.into_any(),
                AppRoute::Account { page } => match find_route(ACCOUNT_ROUTES, &page) {
                    Some(route) => view! {
                        <ScreenBlock
                            title=route.name.unwrap_or("Account")
                            message="This page is not available in this panel yet."
                        />
                    }
                    .into_any(),
                    None => view! { <NotFound /> }.into_any(),
                },
                _ => view! { <NotFound /> }.into_any(),
            }}
        </NavigationShell>
    }
}
