use frostpanel_core::route::AppRoute;
use leptos::prelude::*;

use crate::components::auth::{CheckpointToken, ForgotPassword, LoginCheckpoint, LoginContainer};
use crate::components::router::use_route;
use crate::components::screen::NotFound;

stylance::import_crate_style!(css, "src/components/routers/routers.module.css");

/// `/auth/...` pages. No sidebar.
#[component]
pub fn AuthRouter() -> impl IntoView {
    let routing = use_route();
    CheckpointToken::provide();

    view! {
        <div class=css::auth>
            {move || match routing.route.get() {
                AppRoute::Login => view! { <LoginContainer /> }.into_any(),
                AppRoute::LoginCheckpoint => view! { <LoginCheckpoint /> }.into_any(),
                AppRoute::ForgotPassword => view! { <ForgotPassword /> }.into_any(),
                _ => view! { <NotFound /> }.into_any(),
            }}
        </div>
    }
}
