//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own form signals and task spawning; request handling and redirects
//! live in `controller` so static pages behave identically.

pub mod login;
pub mod register;

pub(crate) const LOGIN_HREF: &str = "/login";
pub(crate) const REGISTER_HREF: &str = "/register";
