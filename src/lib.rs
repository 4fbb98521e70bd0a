//! # auth-portal
//!
//! Leptos + WASM login and registration client for the supply-chain portal.
//!
//! The same [`controller::AuthController`] drives two front ends:
//! [`bind::bind_auth_forms`] attaches to forms already present in a static
//! HTML page, and [`app::App`] renders the forms itself. After a successful
//! login the access token is kept in `localStorage` and the browser is sent
//! to the dashboard for the user's role.

pub mod app;
#[cfg(feature = "csr")]
pub mod bind;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod net;
pub mod pages;
pub mod role;
pub mod state;

/// Route panics and `log` output to the browser console.
#[cfg(feature = "csr")]
pub(crate) fn init_logging() {
    console_error_panic_hook::set_once();
    // A second entry point in the same page finds the logger already set.
    let _ = console_log::init_with_level(log::Level::Debug);
}
