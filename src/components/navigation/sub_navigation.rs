//! Section publisher.
//!
//! Pages declare their section links with [`SubNavigation`]; the links end
//! up in the sidebar of the enclosing [`NavigationShell`](super::NavigationShell).

use frostpanel_core::nav::{DEFAULT_SECTION, NavLink};
use frostpanel_core::route::is_active;
use leptos::prelude::*;

use super::NavContext;
use crate::components::router::{Link, use_route};
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/navigation/sub_navigation.module.css");

/// Publish `links` under `section` into the sidebar.
///
/// Each change of `links` or `section` replaces the section in the registry
/// and takes over the publication slot. On unmount the slot is released when
/// this section still owns it; registry entries stay until the shell goes.
///
/// With `render_inline` the links are also drawn in place as a tab bar.
/// Outside a shell nothing is published or drawn.
#[component]
pub fn SubNavigation(
    #[prop(into)] links: Signal<Vec<NavLink>>,
    #[prop(into, default = Signal::stored(DEFAULT_SECTION.to_string()))] section: Signal<String>,
    #[prop(optional)] render_inline: bool,
) -> impl IntoView {
    let Some(nav) = use_context::<NavContext>() else {
        console::warn(
            "SubNavigation: NavContext not found. Make sure NavigationShell is rendered above this component.",
        );
        return ().into_any();
    };

    let owned_section = StoredValue::new(None::<String>);

    Effect::new(move |previous: Option<String>| {
        let section = section.get();
        let links = links.get();

        if let Some(previous) = previous
            && previous != section
        {
            nav.release_legacy(&previous);
        }
        nav.publish(&section, &links);
        nav.assign_legacy(&section, links);
        owned_section.set_value(Some(section.clone()));
        section
    });

    on_cleanup(move || {
        if let Some(Some(section)) = owned_section.try_get_value() {
            nav.release_legacy(&section);
        }
    });

    render_inline
        .then(|| view! { <InlineLinks links=links /> })
        .into_any()
}

/// Horizontal tab bar for a section's links.
#[component]
fn InlineLinks(links: Signal<Vec<NavLink>>) -> impl IntoView {
    let routing = use_route();

    view! {
        <nav class=css::bar>
            <div class=css::inner>
                {move || {
                    links
                        .get()
                        .into_iter()
                        .filter_map(|link| {
                            let destination = link.destination()?.to_string();
                            let text = link.text.clone();
                            if !link.is_route() {
                                return Some(
                                    view! {
                                        <a href=destination class=css::tab rel="noreferrer">
                                            {text}
                                        </a>
                                    }
                                    .into_any(),
                                );
                            }
                            let exact = link.exact;
                            let path = destination.clone();
                            let class = Signal::derive(move || {
                                if routing.path.with(|current| is_active(current, &path, exact)) {
                                    format!("{} {}", css::tab, css::active)
                                } else {
                                    css::tab.to_string()
                                }
                            });
                            Some(view! { <Link href=destination class=class>{text}</Link> }.into_any())
                        })
                        .collect_view()
                }}
            </div>
        </nav>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_renders_nothing_outside_a_shell() {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&host).unwrap();

        let links = vec![NavLink::to("/server/abc", "Console")];
        let handle = leptos::mount::mount_to(host.clone(), move || {
            view! { <SubNavigation links=links.clone() section="Server".to_string() render_inline=true /> }
        });

        assert!(host.query_selector("nav").unwrap().is_none());
        assert_eq!(host.text_content().unwrap_or_default(), "");

        drop(handle);
        host.remove();
    }
}
