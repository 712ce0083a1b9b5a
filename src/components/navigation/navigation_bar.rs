//! The sidebar.
//!
//! Draws the items [`build_sidebar`] lays out from the registry: dashboard,
//! inline section, registered sections, then search, admin, account and sign
//! out. Collapsing hides text only; icons and targets stay.
//!
//! ## Responsive behavior
//!
//! | Breakpoint | Sidebar |
//! |------------|---------|
//! | Desktop (>= 768px) | Always shown; toggle collapses to icons |
//! | Mobile (< 768px) | Hidden behind a menu button; opens as an overlay |

use frostpanel_core::nav::{
    InlineSection, ItemTarget, Presentation, Publication, SidebarItem, build_sidebar,
};
use frostpanel_core::route::is_active;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use super::NavContext;
use crate::api;
use crate::app::AppContext;
use crate::components::dashboard::SearchModal;
use crate::components::icons as ic;
use crate::components::router::{Link, use_route};
use crate::config::MOBILE_QUERY;
use crate::utils::{console, dom};

stylance::import_crate_style!(css, "src/components/navigation/navigation_bar.module.css");

/// Sidebar state shared by every item.
#[derive(Clone, Copy)]
struct BarState {
    expanded: RwSignal<bool>,
    mobile_hidden: RwSignal<bool>,
    show_search: RwSignal<bool>,
    logging_out: RwSignal<bool>,
    is_mobile: Signal<bool>,
}

impl BarState {
    fn toggle(&self) {
        if self.is_mobile.get_untracked() {
            self.mobile_hidden.update(|hidden| *hidden = !*hidden);
        } else {
            self.expanded.update(|expanded| *expanded = !*expanded);
        }
    }

    fn open_search(&self) {
        self.show_search.set(true);
        if self.is_mobile.get_untracked() {
            self.mobile_hidden.set(true);
        }
    }

    /// `POST /auth/logout`, then leave the app whatever the outcome.
    fn sign_out(&self) {
        if self.logging_out.get_untracked() {
            return;
        }
        self.logging_out.set(true);
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                console::warn(&format!("logout request failed: {}", e));
            }
            dom::assign_location("/");
        });
    }
}

/// Sidebar navigation.
#[component]
pub fn NavigationBar(#[prop(into)] inline: Signal<Option<Publication>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let nav = use_context::<NavContext>().expect("NavContext must be provided by NavigationShell");

    let is_mobile = use_media_query(MOBILE_QUERY);
    let state = BarState {
        expanded: RwSignal::new(true),
        mobile_hidden: RwSignal::new(true),
        show_search: RwSignal::new(false),
        logging_out: RwSignal::new(false),
        is_mobile,
    };

    Effect::new(move |_| {
        if is_mobile.get() {
            state.expanded.set(false);
            state.mobile_hidden.set(true);
        } else {
            state.mobile_hidden.set(false);
        }
    });

    let site_name = Signal::derive(move || ctx.settings.with(|s| s.name.clone()));
    let root_admin = Signal::derive(move || ctx.is_root_admin());

    let items = Memo::new(move |_| {
        let groups = nav.groups();
        inline.with(|publication| {
            let inline = publication.as_ref().map(|p| InlineSection {
                section: &p.section,
                links: &p.links,
            });
            build_sidebar(&groups, inline, root_admin.get())
        })
    });

    let sidebar_class = Signal::derive(move || {
        let mut class = css::sidebar.to_string();
        if !state.expanded.get() {
            class = format!("{} {}", class, css::collapsed);
        }
        if state.is_mobile.get() && state.mobile_hidden.get() {
            class = format!("{} {}", class, css::hidden);
        }
        class
    });

    let toggle_label = move || {
        if state.expanded.get() {
            "Collapse sidebar"
        } else {
            "Expand sidebar"
        }
    };

    view! {
        <Show when=move || state.logging_out.get()>
            <div class=css::spinnerOverlay>
                <span class=css::spinner><Icon icon=ic::SPINNER /></span>
            </div>
        </Show>

        <Show when=move || is_mobile.get() && !state.mobile_hidden.get()>
            <div class=css::overlay on:click=move |_| state.mobile_hidden.set(true)></div>
        </Show>

        <Show when=move || is_mobile.get() && state.mobile_hidden.get()>
            <button
                class=css::mobileToggle
                aria-label="Open menu"
                on:click=move |_| {
                    state.mobile_hidden.set(false);
                    state.expanded.set(true);
                }
            >
                <Icon icon=ic::MENU />
            </button>
        </Show>

        <aside class=sidebar_class>
            <header class=css::header>
                <Show when=move || state.expanded.get()>
                    <Link href="/" class=css::logo.to_string()>{site_name}</Link>
                </Show>
                <button
                    class=css::toggle
                    aria-label=toggle_label
                    on:click=move |_| state.toggle()
                >
                    {move || {
                        if state.expanded.get() {
                            view! { <Icon icon=ic::CHEVRON_LEFT /> }
                        } else {
                            view! { <Icon icon=ic::MENU /> }
                        }
                    }}
                </button>
            </header>

            <nav class=css::items>
                {move || {
                    let expanded = state.expanded.get();
                    items
                        .get()
                        .into_iter()
                        .map(|item| render_item(&item, expanded, state))
                        .collect_view()
                }}
            </nav>
        </aside>
    }
}

fn item_class(item: &SidebarItem) -> &'static str {
    match item {
        SidebarItem::SectionLabel(_) => css::sectionLabel,
        item if item.is_section_child() => css::childItem,
        _ => css::item,
    }
}

fn render_item(item: &SidebarItem, expanded: bool, state: BarState) -> AnyView {
    let Presentation {
        text,
        icon,
        target,
        tooltip,
    } = item.presentation(expanded);
    let base = item_class(item);
    let label = text.clone();

    let body = move || {
        view! {
            {icon.map(|icon| view! { <span class=css::icon><Icon icon=ic::nav_icon(icon) /></span> })}
            {text.clone().map(|text| view! { <span class=css::text>{text}</span> })}
        }
    };

    match target {
        ItemTarget::Route { path, exact } => {
            let routing = use_route();
            let href = path.clone();
            let class = Signal::derive(move || {
                if routing.path.with(|current| is_active(current, &path, exact)) {
                    format!("{} {}", base, css::active)
                } else {
                    base.to_string()
                }
            });
            let close_on_mobile = Callback::new(move |_: ()| {
                if state.is_mobile.get_untracked() {
                    state.mobile_hidden.set(true);
                }
            });
            view! {
                <Link href=href class=class title=tooltip on_navigate=close_on_mobile>
                    {body()}
                </Link>
            }
            .into_any()
        }
        ItemTarget::External(href) => view! {
            <a href=href class=base title=tooltip rel="noreferrer">{body()}</a>
        }
        .into_any(),
        ItemTarget::OpenSearch => view! {
            <div class=css::searchSlot title=tooltip>
                <Show
                    when=move || state.show_search.get()
                    fallback=move || view! {
                        <button class=base on:click=move |_| state.open_search()>{body()}</button>
                    }
                >
                    <SearchModal on_dismissed=Callback::new(move |_: ()| state.show_search.set(false)) />
                </Show>
            </div>
        }
        .into_any(),
        ItemTarget::SignOut => view! {
            <button class=base title=tooltip on:click=move |_| state.sign_out()>{body()}</button>
        }
        .into_any(),
        ItemTarget::None => label
            .map(|text| view! { <div class=base>{text}</div> })
            .into_any(),
    }
}
