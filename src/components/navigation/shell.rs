//! Layout that owns a sidebar and its registry.

use frostpanel_core::nav::Publication;
use leptos::prelude::*;

use super::{NavContext, NavigationBar};

stylance::import_crate_style!(css, "src/components/navigation/shell.module.css");

/// Sidebar plus page content.
///
/// Creates the [`NavContext`] for everything inside it, so [`SubNavigation`]
/// publishers in the page content feed this shell's sidebar. The registry
/// lives exactly as long as the shell.
///
/// `inline` links are drawn in the sidebar directly, without going through
/// the registry.
///
/// [`SubNavigation`]: super::SubNavigation
#[component]
pub fn NavigationShell(
    #[prop(optional, into)] inline: Option<Signal<Option<Publication>>>,
    children: Children,
) -> impl IntoView {
    let nav = NavContext::provide();
    let inline = inline.unwrap_or_else(|| Signal::stored(None));

    // Follow the publication slot into the registry.
    Effect::new(move |_| {
        nav.drain_legacy();
    });

    view! {
        <div class=css::layout>
            <NavigationBar inline=inline />
            <main class=css::content>{children()}</main>
        </div>
    }
}
