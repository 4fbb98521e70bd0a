use super::*;
use leptos::reactive::owner::Owner;
use std::cell::{Cell, RefCell};

struct Fixed(&'static str);

impl InputField for Fixed {
    fn value(&self) -> String {
        self.0.to_owned()
    }
}

#[derive(Default)]
struct Text(RefCell<String>);

impl TextTarget for Text {
    fn set_text(&self, text: &str) {
        *self.0.borrow_mut() = text.to_owned();
    }
}

#[derive(Default)]
struct Shown(Cell<Option<bool>>);

impl Visibility for Shown {
    fn set_visible(&self, visible: bool) {
        self.0.set(Some(visible));
    }
}

#[test]
fn missing_field_reads_empty() {
    let field: Option<Fixed> = None;
    assert_eq!(field.value(), "");
}

#[test]
fn present_field_reads_through() {
    assert_eq!(Some(Fixed("supplier")).value(), "supplier");
}

#[test]
fn missing_text_target_ignores_writes() {
    let target: Option<Text> = None;
    target.set_text("Login failed");
}

#[test]
fn present_text_target_receives_writes() {
    let target = Some(Text::default());
    target.set_text("Login failed");
    assert_eq!(target.as_ref().unwrap().0.borrow().as_str(), "Login failed");
}

#[test]
fn optional_visibility_forwards_flag() {
    let group = Some(Shown::default());
    group.set_visible(true);
    assert_eq!(group.as_ref().unwrap().0.get(), Some(true));
    let missing: Option<Shown> = None;
    missing.set_visible(true);
}

#[test]
fn display_value_maps_flag_to_css() {
    assert_eq!(display_value(true), "block");
    assert_eq!(display_value(false), "none");
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_window_is_inert_natively() {
    BrowserWindow.navigate("/supplier/dashboard.html");
    BrowserWindow.alert("Unknown role!");
}

#[test]
fn string_signal_reads_and_receives_text() {
    let owner = Owner::new();
    owner.with(|| {
        let field = RwSignal::new("supplier".to_owned());
        assert_eq!(InputField::value(&field), "supplier");
        field.set_text("Registration failed");
        assert_eq!(field.get_untracked(), "Registration failed");
    });
}

#[test]
fn supplier_toggle_drives_bool_signal_idempotently() {
    let owner = Owner::new();
    owner.with(|| {
        let visible = RwSignal::new(false);
        for _ in 0..2 {
            crate::controller::sync_supplier_group("supplier", &visible);
            assert!(visible.get_untracked());
        }
        for _ in 0..2 {
            crate::controller::sync_supplier_group("warehouse_team", &visible);
            assert!(!visible.get_untracked());
        }
    });
}
