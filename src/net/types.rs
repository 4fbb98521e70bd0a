//! Wire DTOs for the auth API.
//!
//! DESIGN
//! ======
//! Response types are lenient: every field is optional or defaulted so a
//! partial body still decodes, and the controller decides which fields a
//! given outcome requires. `success` missing is read as `false`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /register`.
///
/// `supplier_id` is only serialized when present; build through
/// [`RegistrationPayload::new`] so it is present exactly for the supplier role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
}

impl RegistrationPayload {
    pub fn new(username: String, email: String, password: String, role: String, supplier_id: String) -> Self {
        let supplier_id = crate::role::requires_supplier_id(&role).then_some(supplier_id);
        Self { username, email, password, role, supplier_id }
    }
}

/// User record returned alongside a login or profile response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub supplier_id: Option<serde_json::Value>,
}

/// Response of `POST /login` and `POST /register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    // Strict bool: a truthy non-bool such as `1` or `"true"` is a decode error.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl AuthResponse {
    /// Server message, or `fallback` when none (or an empty one) was sent.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_owned()
    }
}

/// Response of `GET /check-role`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RoleCheckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub supplier_id: Option<serde_json::Value>,
}

/// Response of `GET /profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}
