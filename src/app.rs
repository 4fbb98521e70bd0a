//! Root application component with routing.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, register::RegisterPage};

const LOGIN_SEGMENT: &str = "login";
const REGISTER_SEGMENT: &str = "register";

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Supply Chain Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment(LOGIN_SEGMENT) view=LoginPage/>
                <Route path=StaticSegment(REGISTER_SEGMENT) view=RegisterPage/>
            </Routes>
        </Router>
    }
}

/// Mount [`App`] onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_app() {
    crate::init_logging();
    leptos::mount::mount_to_body(App);
}
