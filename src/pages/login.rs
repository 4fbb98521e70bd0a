//! Login page: username + password against `POST {base}/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::dom::ids;

fn spawn_login(config: AuthConfig, username: RwSignal<String>, password: RwSignal<String>, message: RwSignal<String>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let controller = crate::controller::BrowserController::browser(config);
        let form = crate::controller::LoginForm { username: &username, password: &password, message: &message };
        controller.submit_login(&form).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, username, password, message);
    }
}

static RESUME_ATTEMPTED: AtomicBool = AtomicBool::new(false);

/// True only for the first caller per flag; later mounts skip the check.
fn claim_resume(attempted: &AtomicBool) -> bool {
    !attempted.swap(true, Ordering::Relaxed)
}

fn spawn_resume(config: AuthConfig) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::controller::BrowserController::browser(config).resume_session().await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let config = AuthConfig::for_app();

    if config.resume_session && claim_resume(&RESUME_ATTEMPTED) {
        spawn_resume(config.clone());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_login(config.clone(), username, password, message);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Supply Chain Portal"</h1>
                <p class="auth-card__subtitle">"Sign in"</p>
                <form id=ids::LOGIN_FORM class="auth-form" on:submit=on_submit>
                    <input
                        id=ids::USERNAME
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        id=ids::PASSWORD
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit">"Login"</button>
                </form>
                <p id=ids::LOGIN_MESSAGE class="auth-message">{move || message.get()}</p>
                <a class="auth-link" href=super::REGISTER_HREF>"Create an account"</a>
            </div>
        </div>
    }
}
