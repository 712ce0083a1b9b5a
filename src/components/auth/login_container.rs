//! Login form.

use frostpanel_core::LoginError;
use frostpanel_core::login::{LoginOutcome, LoginValues};
use frostpanel_core::route::AppRoute;
use frostpanel_core::settings::SiteConfiguration;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::{CheckpointToken, LoginFormContainer};
use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::{Link, use_route};
use crate::config::{RECAPTCHA_ACTION, flash_keys};
use crate::utils::{console, dom, recaptcha};

stylance::import_crate_style!(css, "src/components/auth/login.module.css");

/// Username or email plus password.
///
/// A complete login leaves the app for the intended page. A login that
/// needs a second factor continues at the checkpoint page with the
/// confirmation token.
#[component]
pub fn LoginContainer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let checkpoint = use_context::<CheckpointToken>().expect("CheckpointToken must be provided");
    let routing = use_route();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<LoginError>);
    let submitting = RwSignal::new(false);

    ctx.clear_flashes(None);

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        ctx.clear_flashes(None);

        let values = LoginValues {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(e) = values.validate() {
            field_error.set(Some(e));
            return;
        }
        field_error.set(None);
        submitting.set(true);

        let settings = ctx.settings.get_untracked();
        spawn_local(async move {
            match attempt(values, &settings).await {
                Ok(LoginOutcome::Complete { redirect }) => dom::assign_location(&redirect),
                Ok(LoginOutcome::Checkpoint { token }) => {
                    checkpoint.0.set(Some(token));
                    routing.redirect(&AppRoute::LoginCheckpoint.to_path());
                }
                Err(e) => {
                    console::error(&format!("login failed: {}", e));
                    password.try_set(String::new());
                    submitting.try_set(false);
                    ctx.clear_and_add_error(Some(flash_keys::AUTH), e.to_human());
                }
            }
        });
    });

    let error_for = move |wanted: LoginError| {
        move || {
            field_error
                .get()
                .filter(|e| *e == wanted)
                .map(|e| view! { <p class=css::fieldError>{e.to_string()}</p> })
        }
    };

    view! {
        <LoginFormContainer title="Login to Continue" on_submit=on_submit>
            <label class=css::label for="username">"Username or Email"</label>
            <input
                id="username"
                class=css::input
                type="text"
                autocomplete="username"
                disabled=move || submitting.get()
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            {error_for(LoginError::MissingUsername)}

            <label class=css::label for="password">"Password"</label>
            <input
                id="password"
                class=css::input
                type="password"
                autocomplete="current-password"
                disabled=move || submitting.get()
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            {error_for(LoginError::MissingPassword)}

            <button class=css::submit type="submit" disabled=move || submitting.get()>
                <Show when=move || submitting.get() fallback=|| "Login">
                    <span class=css::spinner><Icon icon=ic::SPINNER /></span>
                </Show>
            </button>

            <div class=css::aside>
                <Link href=AppRoute::ForgotPassword.to_path() class=css::forgot.to_string()>
                    "Forgot password?"
                </Link>
            </div>
        </LoginFormContainer>
    }
}

/// Run the reCAPTCHA challenge when enabled, then submit the credentials.
///
/// A fresh challenge token is requested for every attempt.
async fn attempt(
    values: LoginValues,
    settings: &SiteConfiguration,
) -> Result<LoginOutcome, LoginError> {
    let token = if settings.recaptcha.enabled {
        Some(recaptcha::execute(settings.recaptcha_site_key(), RECAPTCHA_ACTION).await?)
    } else {
        None
    };
    let response = api::login(&values.into_request(token)).await?;
    Ok(response.into())
}
