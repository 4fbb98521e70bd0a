use super::*;

#[test]
fn dispatch_maps_every_known_role_to_its_dashboard() {
    let expected = [
        ("supply_chain_manager", "/frontend/supply_chain_manager/dashboard.html"),
        ("warehouse_team", "/frontend/warehouse/warehouse_dashboard.html"),
        ("procurement_officer", "/frontend/procurement/dashboard.html"),
        ("supplier", "/supplier/dashboard.html"),
        ("sales_officer", "/sales_officer/dashboard.html"),
    ];
    for (raw, path) in expected {
        assert_eq!(dispatch(raw), Redirect::To(path), "role {raw}");
    }
}

#[test]
fn dispatch_is_case_sensitive_and_does_not_trim() {
    assert_eq!(dispatch("Supplier"), Redirect::UnknownRole("Supplier".to_owned()));
    assert_eq!(dispatch(" supplier"), Redirect::UnknownRole(" supplier".to_owned()));
    assert_eq!(dispatch(""), Redirect::UnknownRole(String::new()));
}

#[test]
fn dispatch_rejects_roles_without_dashboards() {
    assert_eq!(dispatch("admin"), Redirect::UnknownRole("admin".to_owned()));
}

#[test]
fn role_wire_values_round_trip_through_from_str() {
    for role in Role::ALL {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        assert_eq!(role.to_string(), role.as_str());
    }
}

#[test]
fn unknown_role_error_keeps_raw_value() {
    let err = "guest".parse::<Role>().unwrap_err();
    assert_eq!(err, UnknownRole("guest".to_owned()));
    assert_eq!(err.to_string(), "unknown role: guest");
}

#[test]
fn requires_supplier_id_only_for_supplier() {
    assert!(requires_supplier_id("supplier"));
    assert!(!requires_supplier_id("sales_officer"));
    assert!(!requires_supplier_id("SUPPLIER"));
}
