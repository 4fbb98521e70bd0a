use super::*;
use crate::net::types::{AuthResponse, Credentials};

#[test]
fn decode_reads_rejection_body_from_error_status() {
    let reply = HttpReply::new(401, r#"{"success": false, "message": "Invalid username or password"}"#);
    let resp: AuthResponse = decode(&reply).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Invalid username or password"));
}

#[test]
fn decode_reports_status_for_non_json_body() {
    let reply = HttpReply::new(502, "<html>Bad Gateway</html>");
    let err = decode::<AuthResponse>(&reply).unwrap_err();
    assert!(matches!(err, AuthError::Decode { status: 502, .. }));
    assert!(err.to_string().starts_with("invalid response (status 502)"));
}

#[test]
fn encode_produces_json_object() {
    let body = encode(&Credentials { username: "u".to_owned(), password: "p".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({"username": "u", "password": "p"}));
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[cfg(not(feature = "csr"))]
#[test]
fn gloo_transport_is_unavailable_natively() {
    let err = futures::executor::block_on(GlooTransport.post_json("http://x/login", &serde_json::json!({})))
        .unwrap_err();
    assert!(matches!(err, AuthError::Unavailable));
}
