//! Integration tests for contact messages.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use helpers::{Credentials, TestApp};

fn message_body(message: &str) -> Value {
    json!({
        "firstName": "Miranda",
        "lastName": "Bailey",
        "email": "bailey@seattle.test",
        "phone": 5557654321_i64,
        "message": message,
    })
}

#[tokio::test]
async fn test_send_list_and_delete() {
    let app = TestApp::new();
    let admin = app.bootstrap_admin("chief@seattle.test").await;
    let patient = app.register_patient("patient@seattle.test", 4001).await;

    let sent = app
        .request(
            "POST",
            "/message/send",
            Some(message_body("Please call me back about my results.")),
            Credentials::Bearer(&patient),
        )
        .await;
    assert_eq!(sent.status, StatusCode::OK);
    assert_eq!(sent.message(), "Message Sent!");

    let listed = app
        .request("GET", "/message/getall", None, Credentials::Bearer(&admin))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let messages = listed.body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["phone"], "5557654321");
    let id = messages[0]["_id"].as_str().unwrap().to_string();

    let deleted = app
        .request(
            "DELETE",
            &format!("/message/delete/{id}"),
            None,
            Credentials::Bearer(&admin),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.message(), "Message Deleted Successfully!");

    let again = app
        .request(
            "DELETE",
            &format!("/message/delete/{id}"),
            None,
            Credentials::Bearer(&admin),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.message(), "Message not found!");
}

#[tokio::test]
async fn test_short_message_rejected() {
    let app = TestApp::new();
    let patient = app.register_patient("patient@seattle.test", 4002).await;

    let response = app
        .request(
            "POST",
            "/message/send",
            Some(message_body("hi")),
            Credentials::Bearer(&patient),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "Message Must Contain At Least 10 Characters!"
    );
}

#[tokio::test]
async fn test_sending_requires_authentication() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/message/send",
            Some(message_body("Please call me back about my results.")),
            Credentials::Anonymous,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_only_admins_read_messages() {
    let app = TestApp::new();
    app.bootstrap_admin("chief@seattle.test").await;
    let patient = app.register_patient("patient@seattle.test", 4003).await;

    let response = app
        .request("GET", "/message/getall", None, Credentials::Bearer(&patient))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.message(),
        "Patient not allowed to access this resource!"
    );
}
