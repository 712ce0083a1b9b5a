//! Full-page notices: loading, errors, missing pages.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/screen/screen.module.css");

/// Centered title and message.
#[component]
pub fn ScreenBlock(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    let class = if error {
        format!("{} {}", css::block, css::error)
    } else {
        css::block.to_string()
    };

    view! {
        <div class=class>
            <h2 class=css::title>{title}</h2>
            <p class=css::message>{message}</p>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <ScreenBlock
            title="404"
            message="The requested resource was not found."
            error=true
        />
    }
}

#[component]
pub fn ScreenSpinner() -> impl IntoView {
    view! {
        <div class=css::spinnerWrap>
            <span class=css::spinner><Icon icon=ic::SPINNER /></span>
        </div>
    }
}
