use super::*;

#[test]
fn endpoint_prefixes_the_api_base() {
    assert_eq!(endpoint("/auth/login"), "/api-beca/auth/login");
    assert_eq!(endpoint("/carreras"), "/api-beca/carreras");
}

#[test]
fn bearer_formats_the_authorization_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn login_request_serializes_with_wire_field_names() {
    let req = LoginRequest { identifier: "a".to_owned(), password: "b".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).expect("serializable"),
        serde_json::json!({ "identifier": "a", "password": "b" })
    );
}

#[test]
fn login_response_deserializes_backend_shape() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"access_token":"h.p.s","role":"ADMIN"}"#).expect("valid");
    assert_eq!(resp.access_token, "h.p.s");
    assert_eq!(resp.role, "ADMIN");
}
