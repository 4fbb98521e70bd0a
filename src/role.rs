//! User roles and the post-login redirect table.
//!
//! DESIGN
//! ======
//! Role strings from the API are matched exactly (case-sensitive, no
//! trimming). Every `Role` variant has a destination; strings that do not
//! parse into a variant take the `Redirect::UnknownRole` arm instead.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

/// Alert text shown when a signed-in user's role has no dashboard.
pub const UNKNOWN_ROLE_ALERT: &str = "Unknown role!";

/// Roles that have a dashboard in the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    SupplyChainManager,
    WarehouseTeam,
    ProcurementOfficer,
    Supplier,
    SalesOfficer,
}

impl Role {
    /// All known roles, in the order the registration selector lists them.
    pub const ALL: [Role; 5] = [
        Role::SupplyChainManager,
        Role::WarehouseTeam,
        Role::ProcurementOfficer,
        Role::Supplier,
        Role::SalesOfficer,
    ];

    /// Wire value used by the auth API.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SupplyChainManager => "supply_chain_manager",
            Role::WarehouseTeam => "warehouse_team",
            Role::ProcurementOfficer => "procurement_officer",
            Role::Supplier => "supplier",
            Role::SalesOfficer => "sales_officer",
        }
    }

    /// Human-readable label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Role::SupplyChainManager => "Supply Chain Manager",
            Role::WarehouseTeam => "Warehouse Team",
            Role::ProcurementOfficer => "Procurement Officer",
            Role::Supplier => "Supplier",
            Role::SalesOfficer => "Sales Officer",
        }
    }

    /// Dashboard path a user with this role lands on after login.
    pub fn destination(self) -> &'static str {
        match self {
            Role::SupplyChainManager => "/frontend/supply_chain_manager/dashboard.html",
            Role::WarehouseTeam => "/frontend/warehouse/warehouse_dashboard.html",
            Role::ProcurementOfficer => "/frontend/procurement/dashboard.html",
            Role::Supplier => "/supplier/dashboard.html",
            Role::SalesOfficer => "/sales_officer/dashboard.html",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == raw)
            .ok_or_else(|| UnknownRole(raw.to_owned()))
    }
}

/// Where a successful login should send the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Redirect {
    To(&'static str),
    UnknownRole(String),
}

/// Resolve a raw role string from the API into a redirect.
pub fn dispatch(raw: &str) -> Redirect {
    match raw.parse::<Role>() {
        Ok(role) => Redirect::To(role.destination()),
        Err(UnknownRole(other)) => Redirect::UnknownRole(other),
    }
}

/// Whether the supplier-id field applies to the selected role value.
pub fn requires_supplier_id(raw: &str) -> bool {
    raw == Role::Supplier.as_str()
}
