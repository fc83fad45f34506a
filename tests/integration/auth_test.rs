//! Integration tests for registration, login, token resolution and logout.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::{Credentials, TestApp, admin_body, patient_body, token_of};
use medcare_auth::jwt::TokenCodec;

#[tokio::test]
async fn test_register_patient_issues_token_and_cookie() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/patient/register",
            Some(patient_body("meredith@seattle.test", 1001)),
            Credentials::Anonymous,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.message(), "Registered Successfully");
    assert_eq!(response.body["user"]["role"], "Patient");
    assert_eq!(response.body["user"]["did"], "1001");
    assert!(response.body["user"].get("password_hash").is_none());

    let cookie = response.cookie("patientToken").expect("patientToken cookie");
    assert!(cookie.contains(&token_of(&response)));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=604800"));
}

#[tokio::test]
async fn test_register_ignores_role_in_body() {
    let app = TestApp::new();
    let mut body = patient_body("sneaky@seattle.test", 1002);
    body["role"] = json!("Admin");

    let response = app
        .request("POST", "/user/patient/register", Some(body), Credentials::Anonymous)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["user"]["role"], "Patient");
    assert!(response.cookie("adminToken").is_none());
}

#[tokio::test]
async fn test_register_rejects_incomplete_form() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/patient/register",
            Some(json!({ "email": "half@seattle.test" })),
            Credentials::Anonymous,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.message(), "Please Fill Full Form!");
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let app = TestApp::new();
    app.register_patient("twice@seattle.test", 1003).await;

    let response = app
        .request(
            "POST",
            "/user/patient/register",
            Some(patient_body("twice@seattle.test", 1004)),
            Credentials::Anonymous,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Email already registered");
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/user/login",
            Some(json!("not an object")),
            Credentials::Anonymous,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.message(), "Invalid request body");
}

#[tokio::test]
async fn test_wrong_field_type_does_not_leak_deserializer_text() {
    let app = TestApp::new();
    let mut body = patient_body("typed@seattle.test", 1010);
    body["phone"] = json!(true);

    let response = app
        .request("POST", "/user/patient/register", Some(body), Credentials::Anonymous)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Invalid request body");
}

#[tokio::test]
async fn test_patient_cannot_reuse_admin_email() {
    let app = TestApp::new();
    app.bootstrap_admin("shared@seattle.test").await;

    let response = app
        .request(
            "POST",
            "/user/patient/register",
            Some(patient_body("shared@seattle.test", 1011)),
            Credentials::Anonymous,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Email already registered");
}

#[tokio::test]
async fn test_admin_cannot_reuse_patient_email() {
    let app = TestApp::new();
    let chief = app.bootstrap_admin("chief@seattle.test").await;
    app.register_patient("shared@seattle.test", 1012).await;

    let response = app
        .request(
            "POST",
            "/user/admin/addnew",
            Some(admin_body("shared@seattle.test")),
            Credentials::Bearer(&chief),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Email already registered");
}

#[tokio::test]
async fn test_login_success_and_failures() {
    let app = TestApp::new();
    app.register_patient("login@seattle.test", 1005).await;

    let token = app.login("login@seattle.test", "patient-pass").await;
    assert!(!token.is_empty());

    let wrong_password = app
        .request(
            "POST",
            "/user/login",
            Some(json!({ "email": "login@seattle.test", "password": "nope-nope" })),
            Credentials::Anonymous,
        )
        .await;
    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.message(), "Invalid Email Or Password!");

    let unknown = app
        .request(
            "POST",
            "/user/login",
            Some(json!({ "email": "ghost@seattle.test", "password": "patient-pass" })),
            Credentials::Anonymous,
        )
        .await;
    assert_eq!(unknown.message(), "Invalid Email Or Password!");

    let wrong_role = app
        .request(
            "POST",
            "/user/login",
            Some(json!({
                "email": "login@seattle.test",
                "password": "patient-pass",
                "role": "Doctor",
            })),
            Credentials::Anonymous,
        )
        .await;
    assert_eq!(wrong_role.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_role.message(), "User Not Found With This Role!");
}

#[tokio::test]
async fn test_profile_by_bearer_and_by_cookie() {
    let app = TestApp::new();
    let token = app.register_patient("me@seattle.test", 1006).await;

    let by_bearer = app
        .request("GET", "/user/patient/me", None, Credentials::Bearer(&token))
        .await;
    assert_eq!(by_bearer.status, StatusCode::OK);
    assert_eq!(by_bearer.body["user"]["email"], "me@seattle.test");

    let by_cookie = app
        .request(
            "GET",
            "/user/patient/me",
            None,
            Credentials::Cookie("patientToken", &token),
        )
        .await;
    assert_eq!(by_cookie.status, StatusCode::OK);

    let any_cookie = app
        .request(
            "GET",
            "/user/patient/me",
            None,
            Credentials::Cookie("doctorToken", &token),
        )
        .await;
    assert_eq!(any_cookie.status, StatusCode::OK);
}

#[tokio::test]
async fn test_wrong_role_is_forbidden() {
    let app = TestApp::new();
    let token = app.register_patient("nosy@seattle.test", 1007).await;

    let response = app
        .request("GET", "/user/admin/me", None, Credentials::Bearer(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.message(),
        "Patient not allowed to access this resource!"
    );
}

#[tokio::test]
async fn test_missing_and_invalid_tokens() {
    let app = TestApp::new();

    let missing = app
        .request("GET", "/user/patient/me", None, Credentials::Anonymous)
        .await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.message(), "User is not authenticated!");

    let invalid = app
        .request("GET", "/user/patient/me", None, Credentials::Bearer("garbage"))
        .await;
    assert_eq!(invalid.status, StatusCode::UNAUTHORIZED);
    assert_eq!(invalid.message(), "Json Web Token is invalid, Try again!");
}

#[tokio::test]
async fn test_expired_token() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/user/patient/register",
            Some(patient_body("old@seattle.test", 1008)),
            Credentials::Anonymous,
        )
        .await;
    let user_id: Uuid = response.body["user"]["_id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    let codec = TokenCodec::new(&app.config.auth);
    let stale = codec
        .issue_at(user_id, Utc::now() - Duration::days(30))
        .unwrap();

    let response = app
        .request("GET", "/user/patient/me", None, Credentials::Bearer(&stale))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Json Web Token is expired, Try again!");
}

#[tokio::test]
async fn test_token_of_deleted_user() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/user/patient/register",
            Some(patient_body("gone@seattle.test", 1009)),
            Credentials::Anonymous,
        )
        .await;
    let token = token_of(&response);
    let user_id: Uuid = response.body["user"]["_id"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    assert!(app.stores.users.delete(user_id).await.unwrap());

    let response = app
        .request("GET", "/user/patient/me", None, Credentials::Bearer(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "User not found for this token");
}

#[tokio::test]
async fn test_logout_expires_role_cookie() {
    let app = TestApp::new();
    let token = app.register_patient("bye@seattle.test", 1010).await;

    let response = app
        .request(
            "GET",
            "/user/patient/logout",
            None,
            Credentials::Cookie("patientToken", &token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.message(), "User Logged Out Successfully.");
    let cookie = response.cookie("patientToken").expect("expired cookie");
    assert!(cookie.starts_with("patientToken=;"));
    assert!(cookie.contains("Max-Age=0"));

    let admin_logout = app
        .request("GET", "/user/admin/logout", None, Credentials::Bearer(&token))
        .await;
    assert_eq!(admin_logout.status, StatusCode::FORBIDDEN);
}
