//! The dashboard's server list.

use frostpanel_core::search::SearchScope;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::ServerRow;
use crate::api;
use crate::app::AppContext;
use crate::components::flash::FlashMessageRender;
use crate::components::icons as ic;
use crate::config::flash_keys;
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/dashboard/server_list.module.css");

/// Every server the user can access, one [`ServerRow`] each.
///
/// A failed load is reported under the dashboard flash key.
#[component]
pub fn ServerList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let servers = LocalResource::new(move || async move {
        ctx.clear_flashes(Some(flash_keys::DASHBOARD));
        match api::get_servers(None, SearchScope::Default).await {
            Ok(servers) => Some(servers),
            Err(e) => {
                console::error(&format!("failed to load servers: {}", e));
                ctx.clear_and_add_error(Some(flash_keys::DASHBOARD), e.to_human());
                None
            }
        }
    });

    view! {
        <section class=css::list>
            <FlashMessageRender by_key=flash_keys::DASHBOARD />
            {move || match servers.get() {
                None => view! {
                    <div class=css::loading>
                        <span class=css::spinner><Icon icon=ic::SPINNER /></span>
                    </div>
                }
                .into_any(),
                Some(None) => ().into_any(),
                Some(Some(list)) if list.is_empty() => view! {
                    <p class=css::empty>"There are no servers associated with your account."</p>
                }
                .into_any(),
                Some(Some(list)) => list
                    .into_iter()
                    .map(|server| view! { <ServerRow server=server /> })
                    .collect_view()
                    .into_any(),
            }}
        </section>
    }
}
