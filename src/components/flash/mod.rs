//! Flash message area.

use frostpanel_core::flash::FlashKind;
use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/flash/flash.module.css");

/// Messages flashed under `by_key`, plus the unkeyed ones.
#[component]
pub fn FlashMessageRender(by_key: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let messages = Memo::new(move |_| ctx.flashes.with(|f| f.for_key(Some(by_key))));

    view! {
        <Show when=move || messages.with(|m| !m.is_empty())>
            <div class=css::stack role="status">
                <For
                    each=move || messages.get()
                    key=|message| message.id
                    children=|message| {
                        view! {
                            <div class=format!("{} {}", css::message, kind_class(message.kind))>
                                <span class=css::title>{message.kind.title()}</span>
                                <span>{message.message}</span>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

fn kind_class(kind: FlashKind) -> &'static str {
    match kind {
        FlashKind::Success => css::success,
        FlashKind::Info => css::info,
        FlashKind::Warning => css::warning,
        FlashKind::Error => css::error,
    }
}
