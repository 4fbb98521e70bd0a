//! UI surfaces the auth controller reads from and writes to.
//!
//! DESIGN
//! ======
//! The controller never looks elements up itself. Callers hand it surfaces
//! implementing these traits: DOM wrappers for static pages, reactive
//! signals for Leptos pages, or fakes in tests. A missing element is passed
//! as `None`, which reads as an empty value and ignores writes.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use leptos::prelude::*;

/// Element ids shared by static pages and the rendered Leptos forms.
pub mod ids {
    pub const LOGIN_FORM: &str = "loginForm";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const LOGIN_MESSAGE: &str = "loginMsg";

    pub const REGISTER_FORM: &str = "registerForm";
    pub const REG_USERNAME: &str = "regUsername";
    pub const REG_EMAIL: &str = "regEmail";
    pub const REG_PASSWORD: &str = "regPassword";
    pub const REG_ROLE: &str = "regRole";
    pub const SUPPLIER_ID: &str = "supplierId";
    pub const SUPPLIER_GROUP: &str = "supplierIdGroup";
    pub const REGISTER_MESSAGE: &str = "registerMsg";
}

/// Something with a current string value (text input, select).
pub trait InputField {
    fn value(&self) -> String;
}

/// Element whose text content can be replaced.
pub trait TextTarget {
    fn set_text(&self, text: &str);
}

/// Element that can be shown or hidden.
pub trait Visibility {
    fn set_visible(&self, visible: bool);
}

/// Page-level effects: full navigation and blocking alerts.
pub trait PageWindow {
    fn navigate(&self, href: &str);
    fn alert(&self, message: &str);
}

impl<T: InputField> InputField for Option<T> {
    fn value(&self) -> String {
        self.as_ref().map(InputField::value).unwrap_or_default()
    }
}

impl<T: TextTarget> TextTarget for Option<T> {
    fn set_text(&self, text: &str) {
        if let Some(target) = self {
            target.set_text(text);
        }
    }
}

impl<T: Visibility> Visibility for Option<T> {
    fn set_visible(&self, visible: bool) {
        if let Some(target) = self {
            target.set_visible(visible);
        }
    }
}

impl InputField for RwSignal<String> {
    fn value(&self) -> String {
        self.get_untracked()
    }
}

impl TextTarget for RwSignal<String> {
    fn set_text(&self, text: &str) {
        self.set(text.to_owned());
    }
}

impl Visibility for RwSignal<bool> {
    fn set_visible(&self, visible: bool) {
        self.set(visible);
    }
}

/// CSS `display` value for a visibility flag.
pub fn display_value(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// The browser window. Navigation and alerts are no-ops outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserWindow;

impl PageWindow for BrowserWindow {
    fn navigate(&self, href: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(href);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = href;
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
        }
    }
}
