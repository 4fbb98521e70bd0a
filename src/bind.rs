//! Binding for static HTML pages that already contain the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! `bind_auth_forms` is exported to JS. Once the document is ready it looks up
//! the login form, registration form, role selector and supplier-id group by
//! id. Each element that exists enables its flow; a missing one silently
//! disables it. Field and message elements are looked up again on every
//! submit, so a page may re-render them between submissions.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::config::AuthConfig;
use crate::controller::{BrowserController, LoginForm, RegisterForm, sync_supplier_group};
use crate::dom::{InputField, TextTarget, Visibility, display_value, ids};

struct DomField(Element);

impl InputField for DomField {
    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            return select.value();
        }
        self.0.get_attribute("value").unwrap_or_default()
    }
}

struct DomText(Element);

impl TextTarget for DomText {
    fn set_text(&self, text: &str) {
        match self.0.dyn_ref::<HtmlElement>() {
            Some(el) => el.set_inner_text(text),
            None => self.0.set_text_content(Some(text)),
        }
    }
}

struct DomGroup(HtmlElement);

impl Visibility for DomGroup {
    fn set_visible(&self, visible: bool) {
        let _ = self.0.style().set_property("display", display_value(visible));
    }
}

fn field(doc: &Document, id: &str) -> Option<DomField> {
    doc.get_element_by_id(id).map(DomField)
}

fn text(doc: &Document, id: &str) -> Option<DomText> {
    doc.get_element_by_id(id).map(DomText)
}

struct LoginSurfaces {
    username: Option<DomField>,
    password: Option<DomField>,
    message: Option<DomText>,
}

impl LoginSurfaces {
    fn locate(doc: &Document) -> Self {
        Self {
            username: field(doc, ids::USERNAME),
            password: field(doc, ids::PASSWORD),
            message: text(doc, ids::LOGIN_MESSAGE),
        }
    }

    fn form(&self) -> LoginForm<'_> {
        LoginForm { username: &self.username, password: &self.password, message: &self.message }
    }
}

struct RegisterSurfaces {
    username: Option<DomField>,
    email: Option<DomField>,
    password: Option<DomField>,
    role: Option<DomField>,
    supplier_id: Option<DomField>,
    message: Option<DomText>,
}

impl RegisterSurfaces {
    fn locate(doc: &Document) -> Self {
        Self {
            username: field(doc, ids::REG_USERNAME),
            email: field(doc, ids::REG_EMAIL),
            password: field(doc, ids::REG_PASSWORD),
            role: field(doc, ids::REG_ROLE),
            supplier_id: field(doc, ids::SUPPLIER_ID),
            message: text(doc, ids::REGISTER_MESSAGE),
        }
    }

    fn form(&self) -> RegisterForm<'_> {
        RegisterForm {
            username: &self.username,
            email: &self.email,
            password: &self.password,
            role: &self.role,
            supplier_id: &self.supplier_id,
            message: &self.message,
        }
    }
}

fn listen<F>(target: &Element, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach the auth handlers to the current document.
#[wasm_bindgen]
pub fn bind_auth_forms() {
    crate::init_logging();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::<dyn FnMut()>::new(move || attach(&doc));
        let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    } else {
        attach(&document);
    }
}

fn attach(document: &Document) {
    let controller = Rc::new(BrowserController::browser(AuthConfig::from_document()));
    log::debug!("binding auth forms against {}", controller.config().api_base);

    if let Some(select) = document.get_element_by_id(ids::REG_ROLE) {
        let group = document
            .get_element_by_id(ids::SUPPLIER_GROUP)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomGroup);
        let role = DomField(select.clone());
        listen(&select, "change", move |_| {
            sync_supplier_group(&role.value(), &group);
        });
    }

    if let Some(form) = document.get_element_by_id(ids::LOGIN_FORM) {
        let controller = Rc::clone(&controller);
        let doc = document.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            let controller = Rc::clone(&controller);
            let surfaces = LoginSurfaces::locate(&doc);
            wasm_bindgen_futures::spawn_local(async move {
                controller.submit_login(&surfaces.form()).await;
            });
        });
    }

    if let Some(form) = document.get_element_by_id(ids::REGISTER_FORM) {
        let controller = Rc::clone(&controller);
        let doc = document.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            let controller = Rc::clone(&controller);
            let surfaces = RegisterSurfaces::locate(&doc);
            wasm_bindgen_futures::spawn_local(async move {
                controller.submit_register(&surfaces.form()).await;
            });
        });
    }

    if controller.config().resume_session {
        wasm_bindgen_futures::spawn_local(async move {
            controller.resume_session().await;
        });
    }
}
