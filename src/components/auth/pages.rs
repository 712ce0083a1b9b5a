//! Auth steps that only frame the flow for now.

use frostpanel_core::route::AppRoute;
use leptos::prelude::*;

use super::{CheckpointToken, LoginFormContainer};
use crate::components::router::{Link, use_route};

stylance::import_crate_style!(css, "src/components/auth/login.module.css");

/// Second factor step after a login that was not complete.
///
/// Without a confirmation token there is nothing to confirm, so the visitor
/// goes back to the login form.
#[component]
pub fn LoginCheckpoint() -> impl IntoView {
    let checkpoint = use_context::<CheckpointToken>().expect("CheckpointToken must be provided");
    let routing = use_route();

    Effect::new(move |_| {
        if checkpoint.0.with(|t| t.is_none()) {
            routing.redirect(&AppRoute::Login.to_path());
        }
    });

    let on_submit = Callback::new(|ev: leptos::ev::SubmitEvent| ev.prevent_default());

    view! {
        <LoginFormContainer title="Device Checkpoint" on_submit=on_submit>
            <p class=css::note>
                "Check your device's authenticator app for the code to continue."
            </p>
            <div class=css::aside>
                <Link href=AppRoute::Login.to_path() class=css::forgot.to_string()>
                    "Return to Login"
                </Link>
            </div>
        </LoginFormContainer>
    }
}

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let on_submit = Callback::new(|ev: leptos::ev::SubmitEvent| ev.prevent_default());

    view! {
        <LoginFormContainer title="Request Password Reset" on_submit=on_submit>
            <p class=css::note>
                "Contact your panel administrator to reset your account password."
            </p>
            <div class=css::aside>
                <Link href=AppRoute::Login.to_path() class=css::forgot.to_string()>
                    "Return to Login"
                </Link>
            </div>
        </LoginFormContainer>
    }
}
