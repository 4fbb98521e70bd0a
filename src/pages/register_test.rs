use super::*;

#[test]
fn role_options_list_every_dashboard_role_in_order() {
    assert_eq!(
        role_options(),
        vec![
            ("supply_chain_manager", "Supply Chain Manager"),
            ("warehouse_team", "Warehouse Team"),
            ("procurement_officer", "Procurement Officer"),
            ("supplier", "Supplier"),
            ("sales_officer", "Sales Officer"),
        ]
    );
}

#[test]
fn default_role_hides_supplier_field() {
    assert!(!requires_supplier_id(&default_role()));
}
