//! Registration page: account details plus role, with a supplier id field
//! shown only for the supplier role.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::controller::sync_supplier_group;
use crate::dom::{display_value, ids};
use crate::role::{Role, requires_supplier_id};

/// `(value, label)` pairs for the role selector.
fn role_options() -> Vec<(&'static str, &'static str)> {
    Role::ALL.into_iter().map(|role| (role.as_str(), role.label())).collect()
}

fn default_role() -> String {
    Role::ALL[0].as_str().to_owned()
}

#[derive(Clone, Copy)]
struct RegisterSignals {
    username: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    role: RwSignal<String>,
    supplier_id: RwSignal<String>,
    message: RwSignal<String>,
}

fn spawn_register(config: AuthConfig, signals: RegisterSignals) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let controller = crate::controller::BrowserController::browser(config);
        let form = crate::controller::RegisterForm {
            username: &signals.username,
            email: &signals.email,
            password: &signals.password,
            role: &signals.role,
            supplier_id: &signals.supplier_id,
            message: &signals.message,
        };
        controller.submit_register(&form).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, signals);
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let signals = RegisterSignals {
        username: RwSignal::new(String::new()),
        email: RwSignal::new(String::new()),
        password: RwSignal::new(String::new()),
        role: RwSignal::new(default_role()),
        supplier_id: RwSignal::new(String::new()),
        message: RwSignal::new(String::new()),
    };
    let RegisterSignals { username, email, password, role, supplier_id, message } = signals;
    let supplier_visible = RwSignal::new(requires_supplier_id(&role.get_untracked()));
    let config = AuthConfig::for_app();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_register(config.clone(), signals);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Supply Chain Portal"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form id=ids::REGISTER_FORM class="auth-form" on:submit=on_submit>
                    <input
                        id=ids::REG_USERNAME
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        id=ids::REG_EMAIL
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        id=ids::REG_PASSWORD
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        id=ids::REG_ROLE
                        class="auth-input"
                        prop:value=move || role.get()
                        on:change=move |ev| {
                            role.set(event_target_value(&ev));
                            sync_supplier_group(&role.get_untracked(), &supplier_visible);
                        }
                    >
                        {role_options()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                    <div
                        id=ids::SUPPLIER_GROUP
                        class="auth-field"
                        style:display=move || display_value(supplier_visible.get())
                    >
                        <input
                            id=ids::SUPPLIER_ID
                            class="auth-input"
                            type="text"
                            placeholder="Supplier ID"
                            prop:value=move || supplier_id.get()
                            on:input=move |ev| supplier_id.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="auth-button" type="submit">"Register"</button>
                </form>
                <p id=ids::REGISTER_MESSAGE class="auth-message">{move || message.get()}</p>
                <a class="auth-link" href=super::LOGIN_HREF>"Already registered? Sign in"</a>
            </div>
        </div>
    }
}
