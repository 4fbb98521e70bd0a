use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn default_points_at_local_auth_api() {
    let cfg = AuthConfig::default();
    assert_eq!(cfg.api_base, "http://localhost:5000/api/auth");
    assert_eq!(cfg.token_key, "token");
    assert_eq!(cfg.login_page, "login.html");
    assert!(!cfg.resume_session);
}

#[test]
fn from_lookup_without_values_matches_default() {
    assert_eq!(AuthConfig::from_lookup(|_| None), AuthConfig::default());
}

#[test]
fn from_lookup_applies_overrides() {
    let cfg = AuthConfig::from_lookup(lookup_from(&[
        (META_API_BASE, "https://scm.example.test/api/auth/"),
        (META_LOGIN_PAGE, "/login"),
        (META_RESUME_SESSION, "TRUE"),
    ]));
    assert_eq!(cfg.api_base, "https://scm.example.test/api/auth");
    assert_eq!(cfg.login_page, "/login");
    assert!(cfg.resume_session);
    assert_eq!(cfg.token_key, TOKEN_KEY);
}

#[test]
fn from_lookup_ignores_blank_values() {
    let cfg = AuthConfig::from_lookup(lookup_from(&[(META_API_BASE, "   "), (META_LOGIN_PAGE, "")]));
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.login_page, DEFAULT_LOGIN_PAGE);
}

#[test]
fn resume_flag_rejects_unrecognized_values() {
    let cfg = AuthConfig::from_lookup(lookup_from(&[(META_RESUME_SESSION, "maybe")]));
    assert!(!cfg.resume_session);
}

#[test]
fn endpoint_joins_base_and_path() {
    let cfg = AuthConfig::default();
    assert_eq!(cfg.endpoint("login"), "http://localhost:5000/api/auth/login");
    assert_eq!(cfg.endpoint("/register"), "http://localhost:5000/api/auth/register");
}

#[test]
fn with_api_base_strips_trailing_slash() {
    let cfg = AuthConfig::default().with_api_base("http://api.test/auth/");
    assert_eq!(cfg.endpoint("check-role"), "http://api.test/auth/check-role");
}

#[cfg(not(feature = "csr"))]
#[test]
fn from_document_falls_back_to_default_outside_browser() {
    assert_eq!(AuthConfig::from_document(), AuthConfig::default());
}

#[test]
fn app_defaults_send_registration_to_login_route() {
    let cfg = AuthConfig::app_defaults();
    assert_eq!(cfg.login_page, APP_LOGIN_PAGE);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn app_defaults_still_accept_login_page_override() {
    let cfg = AuthConfig::from_lookup_over(AuthConfig::app_defaults(), lookup_from(&[(META_LOGIN_PAGE, "/signin")]));
    assert_eq!(cfg.login_page, "/signin");
}

#[cfg(not(feature = "csr"))]
#[test]
fn for_app_falls_back_to_app_defaults_outside_browser() {
    assert_eq!(AuthConfig::for_app(), AuthConfig::app_defaults());
}
