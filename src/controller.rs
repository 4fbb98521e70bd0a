//! Auth form controller: login, registration, role toggle and session resume.
//!
//! SYSTEM CONTEXT
//! ==============
//! Static pages (`bind`) and Leptos pages (`pages`) both drive this type. It
//! owns the request/response flow and the resulting page effects; the caller
//! owns element lookup and task spawning.
//!
//! ERROR HANDLING
//! ==============
//! `success: false` renders the server message (or a fixed fallback) into
//! the form's message element. Transport and decode failures render into the
//! same element as `"<fallback>: <error>"` and never navigate or touch the
//! token store.
//!
//! CONCURRENCY
//! ===========
//! No in-flight guard: a second submit while the first is pending issues a
//! second request, and the token store is last-writer-wins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::AuthConfig;
use crate::dom::{BrowserWindow, InputField, PageWindow, TextTarget, Visibility};
use crate::error::AuthError;
use crate::net::api::{AuthTransport, GlooTransport, decode, encode};
use crate::net::types::{AuthResponse, AuthUser, Credentials, ProfileResponse, RegistrationPayload, RoleCheckResponse};
use crate::role::{Redirect, UNKNOWN_ROLE_ALERT, dispatch, requires_supplier_id};
use crate::state::session::{LocalStorage, TokenStore};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTERED_ALERT: &str = "Registration successful! Please log in.";

/// Surfaces of the login form.
pub struct LoginForm<'a> {
    pub username: &'a dyn InputField,
    pub password: &'a dyn InputField,
    pub message: &'a dyn TextTarget,
}

/// Surfaces of the registration form. `role` is the role selector.
pub struct RegisterForm<'a> {
    pub username: &'a dyn InputField,
    pub email: &'a dyn InputField,
    pub password: &'a dyn InputField,
    pub role: &'a dyn InputField,
    pub supplier_id: &'a dyn InputField,
    pub message: &'a dyn TextTarget,
}

/// What a login submit did.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Token stored and the page navigated to this dashboard.
    Redirected(&'static str),
    /// Token stored, role has no dashboard; the user was alerted.
    UnknownRole(String),
    /// Server said `success: false`; the message was displayed.
    Rejected(String),
    /// No usable response; the error was displayed.
    Failed(AuthError),
}

/// What a registration submit did.
#[derive(Debug)]
pub enum RegisterOutcome {
    /// User alerted and sent to the login page.
    Registered,
    Rejected(String),
    Failed(AuthError),
}

/// Controller wired to the real browser.
pub type BrowserController = AuthController<GlooTransport, LocalStorage, BrowserWindow>;

pub struct AuthController<T, S, W> {
    config: AuthConfig,
    transport: T,
    store: S,
    window: W,
}

impl BrowserController {
    pub fn browser(config: AuthConfig) -> Self {
        Self::new(config, GlooTransport, LocalStorage, BrowserWindow)
    }
}

impl<T, S, W> AuthController<T, S, W>
where
    T: AuthTransport,
    S: TokenStore,
    W: PageWindow,
{
    pub fn new(config: AuthConfig, transport: T, store: S, window: W) -> Self {
        Self { config, transport, store, window }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Token saved by the last successful login, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(&self.config.token_key)
    }

    /// `POST {base}/login`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        let reply = self.transport.post_json(&self.config.endpoint("login"), &encode(credentials)?).await?;
        decode(&reply)
    }

    /// `POST {base}/register`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn register(&self, payload: &RegistrationPayload) -> Result<AuthResponse, AuthError> {
        let reply = self.transport.post_json(&self.config.endpoint("register"), &encode(payload)?).await?;
        decode(&reply)
    }

    /// `GET {base}/check-role` with the stored token.
    ///
    /// # Errors
    ///
    /// Returns `NoSession` without a stored token, otherwise transport/decode errors.
    pub async fn check_role(&self) -> Result<RoleCheckResponse, AuthError> {
        let token = self.token().ok_or(AuthError::NoSession)?;
        let reply = self.transport.get_authorized(&self.config.endpoint("check-role"), &token).await?;
        decode(&reply)
    }

    /// `GET {base}/profile` with the stored token.
    ///
    /// # Errors
    ///
    /// Returns `NoSession` without a stored token, `Rejected` when the server
    /// refuses, and `MissingField` when a successful reply carries no user.
    pub async fn profile(&self) -> Result<AuthUser, AuthError> {
        let token = self.token().ok_or(AuthError::NoSession)?;
        let reply = self.transport.get_authorized(&self.config.endpoint("profile"), &token).await?;
        let resp: ProfileResponse = decode(&reply)?;
        if !resp.success {
            return Err(AuthError::Rejected(resp.message.unwrap_or_else(|| "Profile unavailable".to_owned())));
        }
        resp.user.ok_or(AuthError::MissingField("user"))
    }

    /// Handle a login form submission end to end.
    pub async fn submit_login(&self, form: &LoginForm<'_>) -> LoginOutcome {
        let credentials = Credentials { username: form.username.value(), password: form.password.value() };
        let outcome = match self.login(&credentials).await {
            Ok(resp) => self.accept_login(resp),
            Err(err) => LoginOutcome::Failed(err),
        };

        match &outcome {
            LoginOutcome::Redirected(path) => {
                log::info!("login ok; redirecting to {path}");
                self.window.navigate(path);
            }
            LoginOutcome::UnknownRole(role) => {
                log::warn!("login ok but role {role:?} has no dashboard");
                self.window.alert(UNKNOWN_ROLE_ALERT);
            }
            LoginOutcome::Rejected(message) => form.message.set_text(message),
            LoginOutcome::Failed(err) => {
                log::error!("login request failed: {err}");
                form.message.set_text(&format!("{LOGIN_FAILED}: {err}"));
            }
        }
        outcome
    }

    fn accept_login(&self, resp: AuthResponse) -> LoginOutcome {
        if !resp.success {
            return LoginOutcome::Rejected(resp.message_or(LOGIN_FAILED));
        }
        let Some(token) = resp.access_token else {
            return LoginOutcome::Failed(AuthError::MissingField("access_token"));
        };
        let Some(role) = resp.user.and_then(|user| user.role) else {
            return LoginOutcome::Failed(AuthError::MissingField("user.role"));
        };

        self.store.set(&self.config.token_key, &token);
        match dispatch(&role) {
            Redirect::To(path) => LoginOutcome::Redirected(path),
            Redirect::UnknownRole(role) => LoginOutcome::UnknownRole(role),
        }
    }

    /// Handle a registration form submission end to end.
    pub async fn submit_register(&self, form: &RegisterForm<'_>) -> RegisterOutcome {
        let payload = RegistrationPayload::new(
            form.username.value(),
            form.email.value(),
            form.password.value(),
            form.role.value(),
            form.supplier_id.value(),
        );
        let outcome = match self.register(&payload).await {
            Ok(resp) if resp.success => RegisterOutcome::Registered,
            Ok(resp) => RegisterOutcome::Rejected(resp.message_or(REGISTRATION_FAILED)),
            Err(err) => RegisterOutcome::Failed(err),
        };

        match &outcome {
            RegisterOutcome::Registered => {
                log::info!("registered {} as {}", payload.username, payload.role);
                self.window.alert(REGISTERED_ALERT);
                self.window.navigate(&self.config.login_page);
            }
            RegisterOutcome::Rejected(message) => form.message.set_text(message),
            RegisterOutcome::Failed(err) => {
                log::error!("registration request failed: {err}");
                form.message.set_text(&format!("{REGISTRATION_FAILED}: {err}"));
            }
        }
        outcome
    }

    /// Send an already signed-in user straight to their dashboard.
    ///
    /// Only runs when `resume_session` is enabled. Returns the destination
    /// navigated to; every failure is logged and leaves the page alone.
    pub async fn resume_session(&self) -> Option<&'static str> {
        if !self.config.resume_session || self.token().is_none() {
            return None;
        }
        let resp = match self.check_role().await {
            Ok(resp) => resp,
            Err(err) => {
                log::debug!("session resume skipped: {err}");
                return None;
            }
        };
        if !resp.success {
            return None;
        }
        match dispatch(resp.role.as_deref()?) {
            Redirect::To(path) => {
                log::info!("resuming session; redirecting to {path}");
                self.window.navigate(path);
                Some(path)
            }
            Redirect::UnknownRole(role) => {
                log::debug!("session resume skipped for role {role:?}");
                None
            }
        }
    }
}

/// Show the supplier-id group only when `role` is the supplier role.
///
/// Returns the visibility applied. Holds no state, so repeated toggles settle
/// on the latest value.
pub fn sync_supplier_group(role: &str, group: &dyn Visibility) -> bool {
    let visible = requires_supplier_id(role);
    group.set_visible(visible);
    visible
}
