//! Server search modal.
//!
//! Typing schedules a search [`DEBOUNCE_MS`] after the last keystroke, for
//! terms of at least [`MIN_TERM_LEN`] characters. Each search takes a ticket;
//! only the newest ticket may replace the results, so an older response
//! arriving late is dropped.

use frostpanel_core::search::{
    SearchScope, SearchTracker, TERM_TOO_SHORT, is_searchable, truncate_results,
};
use frostpanel_core::server::Server;
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::components::flash::FlashMessageRender;
use crate::components::icons as ic;
use crate::components::router::Link;
use crate::config::flash_keys;
use crate::config::search::{DEBOUNCE_MS, MIN_TERM_LEN};
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/dashboard/search_modal.module.css");

#[component]
pub fn SearchModal(on_dismissed: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let scope = SearchScope::for_user(ctx.is_root_admin());

    let term = RwSignal::new(String::new());
    let servers = RwSignal::new(Vec::<Server>::new());
    let searching = RwSignal::new(false);
    let tracker = StoredValue::new(SearchTracker::default());
    let pending = StoredValue::new_local(None::<Timeout>);
    let input = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input.get() {
            let _ = input.focus();
        }
    });

    let search = move |query: String| {
        let Some(ticket) = tracker.try_update_value(|t| t.begin()) else {
            return;
        };
        ctx.clear_flashes(Some(flash_keys::SEARCH));
        searching.set(true);

        spawn_local(async move {
            let result = api::get_servers(Some(&query), scope).await;
            if tracker.try_with_value(|t| t.is_current(ticket)) != Some(true) {
                return;
            }
            match result {
                Ok(found) => {
                    servers.try_set(truncate_results(found));
                }
                Err(e) => {
                    console::error(&format!("server search failed: {}", e));
                    ctx.clear_and_add_error(Some(flash_keys::SEARCH), e.to_human());
                }
            }
            searching.try_set(false);
            if let Some(input) = input.get_untracked() {
                let _ = input.focus();
            }
        });
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        term.set(value.clone());
        pending.try_update_value(|p| *p = None);

        if !is_searchable(&value) {
            tracker.try_update_value(|t| t.cancel());
            searching.set(false);
            return;
        }
        let timeout = Timeout::new(DEBOUNCE_MS, move || search(value));
        pending.try_update_value(|p| *p = Some(timeout));
    };

    on_cleanup(move || {
        pending.try_update_value(|p| *p = None);
        tracker.try_update_value(|t| t.cancel());
    });

    let too_short = move || term.with(|t| !t.is_empty() && t.chars().count() < MIN_TERM_LEN);
    let no_results = move || {
        !searching.get() && term.with(|t| is_searchable(t)) && servers.with(|s| s.is_empty())
    };
    let dismiss = move |_: leptos::ev::MouseEvent| on_dismissed.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_dismissed.run(());
        }
    };

    view! {
        <div class=css::backdrop on:click=dismiss></div>
        <div class=css::modal role="dialog" aria-label="Server Search">
            <header class=css::header>
                <div>
                    <h2 class=css::title>"Server Search"</h2>
                    <p class=css::subtitle>"Find your server quickly"</p>
                </div>
                <button class=css::close aria-label="Close" on:click=dismiss>
                    <Icon icon=ic::CLOSE />
                </button>
            </header>

            <div class=css::body>
                <FlashMessageRender by_key=flash_keys::SEARCH />
                <label class=css::label for="search_term">
                    "Search term"
                </label>
                <div class=css::field>
                    <input
                        id="search_term"
                        class=css::input
                        type="search"
                        autocomplete="off"
                        node_ref=input
                        prop:value=move || term.get()
                        on:input=on_input
                        on:keydown=on_keydown
                    />
                    <Show when=move || searching.get()>
                        <span class=css::spinner><Icon icon=ic::SPINNER /></span>
                    </Show>
                </div>
                <p class=css::hint>
                    {move || {
                        if too_short() {
                            TERM_TOO_SHORT
                        } else {
                            "Enter a server name, uuid, or allocation to begin searching."
                        }
                    }}
                </p>
            </div>

            <Show when=move || !searching.get() && servers.with(|s| !s.is_empty())>
                <div class=css::results>
                    <For
                        each=move || servers.get()
                        key=|server| server.uuid.clone()
                        children=move |server| {
                            let allocations = server.default_allocations().join(", ");
                            view! {
                                <Link
                                    href=server.route()
                                    class=css::result.to_string()
                                    on_navigate=on_dismissed
                                >
                                    <div class=css::resultInfo>
                                        <p class=css::resultName>{server.name.clone()}</p>
                                        <p class=css::resultAllocation>{allocations}</p>
                                    </div>
                                    <span class=css::node>{server.node.clone()}</span>
                                </Link>
                            }
                        }
                    />
                </div>
            </Show>

            <Show when=no_results>
                <div class=css::empty>
                    <h3>"No servers found"</h3>
                    <p>"Try a different search term"</p>
                </div>
            </Show>
        </div>
    }
}
