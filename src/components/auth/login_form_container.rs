//! Frame around the auth forms.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::flash::FlashMessageRender;
use crate::config::flash_keys;

stylance::import_crate_style!(css, "src/components/auth/login.module.css");

/// Title, flash area, the form and the footer.
#[component]
pub fn LoginFormContainer(
    title: &'static str,
    on_submit: Callback<leptos::ev::SubmitEvent>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let site_name = move || ctx.settings.with(|s| s.name.clone());

    view! {
        <div class=css::container>
            <h2 class=css::title>{title}</h2>
            <FlashMessageRender by_key=flash_keys::AUTH />
            <form class=css::form on:submit=move |ev| on_submit.run(ev)>
                <div class=css::logo>{site_name}</div>
                <div class=css::fields>{children()}</div>
            </form>
            <p class=css::footer>
                {site_name} " · "
                <a rel="noopener nofollow noreferrer" href="https://pterodactyl.io" target="_blank">
                    "Pterodactyl Software"
                </a>
            </p>
        </div>
    }
}
