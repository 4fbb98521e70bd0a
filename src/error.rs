//! Error type for auth API calls.
//!
//! ERROR HANDLING
//! ==============
//! Application-level rejections (`success: false`) are not errors; they are
//! carried as outcomes. Only failures that prevent reading a usable response
//! land here, and the controller renders them into the same message element.

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("response missing {0}")]
    MissingField(&'static str),
    #[error("{0}")]
    Rejected(String),
    #[error("not signed in")]
    NoSession,
    #[error("not available outside the browser")]
    Unavailable,
}
