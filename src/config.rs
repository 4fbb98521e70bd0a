//! Client configuration for the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are static files served next to the WASM bundle, so overrides come
//! from `<meta>` tags in the host document rather than the environment:
//!
//! - `auth-api-base`: API base URL (default `http://localhost:5000/api/auth`)
//! - `auth-login-page`: where registration sends the user (default `login.html`)
//! - `auth-resume-session`: `true` to redirect already signed-in users

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api/auth";
pub const DEFAULT_LOGIN_PAGE: &str = "login.html";
/// Login route served by the rendered `App`.
pub const APP_LOGIN_PAGE: &str = "/login";
pub const TOKEN_KEY: &str = "token";

pub const META_API_BASE: &str = "auth-api-base";
pub const META_LOGIN_PAGE: &str = "auth-login-page";
pub const META_RESUME_SESSION: &str = "auth-resume-session";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL the `login`, `register`, `check-role` and `profile` paths hang off.
    pub api_base: String,
    /// Storage key for the access token.
    pub token_key: String,
    /// Navigation target after a successful registration.
    pub login_page: String,
    /// Check an existing token on page load and skip the login form.
    pub resume_session: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            token_key: TOKEN_KEY.to_owned(),
            login_page: DEFAULT_LOGIN_PAGE.to_owned(),
            resume_session: false,
        }
    }
}

impl AuthConfig {
    /// Build config from a name -> value lookup, falling back to defaults for
    /// anything missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_over(Self::default(), lookup)
    }

    /// Defaults for the rendered `App`, whose login page is a router path.
    pub fn app_defaults() -> Self {
        Self { login_page: APP_LOGIN_PAGE.to_owned(), ..Self::default() }
    }

    fn from_lookup_over<F>(defaults: Self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_base = non_blank(META_API_BASE)
            .map(|v| v.trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base);
        let login_page = non_blank(META_LOGIN_PAGE).unwrap_or(defaults.login_page);
        let resume_session = non_blank(META_RESUME_SESSION).map_or(defaults.resume_session, |v| parse_flag(&v));

        Self { api_base, token_key: defaults.token_key, login_page, resume_session }
    }

    /// Read overrides from `<meta name=... content=...>` tags in the current document.
    pub fn from_document() -> Self {
        Self::from_lookup_over(Self::default(), meta_content)
    }

    /// Like [`AuthConfig::from_document`], over [`AuthConfig::app_defaults`].
    pub fn for_app() -> Self {
        Self::from_lookup_over(Self::app_defaults(), meta_content)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_owned();
        self
    }

    /// Full URL for an API path such as `"login"`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

fn meta_content(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())?
            .query_selector(&format!("meta[name=\"{name}\"]"))
            .ok()
            .flatten()?
            .get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
