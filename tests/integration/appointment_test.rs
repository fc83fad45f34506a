//! Integration tests for appointment booking and administration.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use helpers::{Credentials, TestApp, appointment_body};

/// An app with one admin, one doctor and one patient (DID 1001).
struct Clinic {
    app: TestApp,
    admin: String,
    patient: String,
    doctor: Value,
}

async fn clinic() -> Clinic {
    let app = TestApp::new();
    let admin = app.bootstrap_admin("chief@seattle.test").await;
    let doctor = app
        .add_doctor(&admin, "Derek", "Shepherd", "Neurology", "derek@seattle.test")
        .await;
    let patient = app.register_patient("meredith@seattle.test", 1001).await;
    Clinic {
        app,
        admin,
        patient,
        doctor,
    }
}

async fn book(clinic: &Clinic, body: Value, token: &str) -> helpers::TestResponse {
    clinic
        .app
        .request("POST", "/appointment/post", Some(body), Credentials::Bearer(token))
        .await
}

#[tokio::test]
async fn test_patient_books_and_admin_accepts() {
    let clinic = clinic().await;
    let app = &clinic.app;

    let booked = book(
        &clinic,
        appointment_body("Derek", "Shepherd", "Neurology"),
        &clinic.patient,
    )
    .await;
    assert_eq!(booked.status, StatusCode::OK);
    assert_eq!(booked.message(), "Appointment Sent!");
    let appointment = &booked.body["appointment"];
    assert_eq!(appointment["status"], "Pending");
    assert_eq!(appointment["patientId"], 1001);
    assert_eq!(appointment["pid"], Value::Null);
    assert_eq!(appointment["doctorId"], clinic.doctor["_id"]);
    assert_eq!(appointment["doctor"]["firstName"], "Derek");
    assert_eq!(appointment["hasVisited"], false);
    let id = appointment["_id"].as_str().unwrap().to_string();

    let all = app
        .request("GET", "/appointment/getall", None, Credentials::Bearer(&clinic.admin))
        .await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["appointments"].as_array().unwrap().len(), 1);

    let updated = app
        .request(
            "PUT",
            &format!("/appointment/update/{id}"),
            Some(json!({ "status": "Accepted" })),
            Credentials::Bearer(&clinic.admin),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.message(), "Appointment Status Updated!");
    assert_eq!(updated.body["appointment"]["status"], "Accepted");

    let all = app
        .request("GET", "/appointment/getall", None, Credentials::Bearer(&clinic.admin))
        .await;
    assert_eq!(all.status, StatusCode::OK);
    let all = all.body["appointments"].as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["_id"], id.as_str());
    assert_eq!(all[0]["status"], "Accepted");

    let doctor = app.login("derek@seattle.test", "doctor-pass").await;
    let mine = app
        .request("GET", "/appointment/doctor", None, Credentials::Bearer(&doctor))
        .await;
    assert_eq!(mine.status, StatusCode::OK);
    let mine = mine.body["appointments"].as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["status"], "Accepted");
}

#[tokio::test]
async fn test_submitted_pid_is_kept_apart_from_patient_id() {
    let clinic = clinic().await;
    let mut body = appointment_body("Derek", "Shepherd", "Neurology");
    body["pid"] = json!("  4242 ");

    let booked = book(&clinic, body, &clinic.patient).await;

    assert_eq!(booked.status, StatusCode::OK);
    assert_eq!(booked.body["appointment"]["pid"], 4242);
    assert_eq!(booked.body["appointment"]["patientId"], 1001);
}

#[tokio::test]
async fn test_admin_booking_needs_pid() {
    let clinic = clinic().await;

    let without = book(
        &clinic,
        appointment_body("Derek", "Shepherd", "Neurology"),
        &clinic.admin,
    )
    .await;
    assert_eq!(without.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        without.message(),
        "PID is required when admin creates appointment."
    );

    let mut body = appointment_body("Derek", "Shepherd", "Neurology");
    body["pid"] = json!(2002);
    let with = book(&clinic, body, &clinic.admin).await;
    assert_eq!(with.status, StatusCode::OK);
    assert_eq!(with.body["appointment"]["patientId"], 2002);
    assert_eq!(with.body["appointment"]["pid"], 2002);
}

#[tokio::test]
async fn test_pid_must_be_numeric() {
    let clinic = clinic().await;
    let mut body = appointment_body("Derek", "Shepherd", "Neurology");
    body["pid"] = json!("P-12");

    let response = book(&clinic, body, &clinic.admin).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "PID must be a valid number.");
}

#[tokio::test]
async fn test_unknown_doctor() {
    let clinic = clinic().await;

    let response = book(
        &clinic,
        appointment_body("Derek", "Shepherd", "Cardiology"),
        &clinic.patient,
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Doctor not found");
}

#[tokio::test]
async fn test_booking_requires_authentication_and_full_form() {
    let clinic = clinic().await;

    let anonymous = clinic
        .app
        .request(
            "POST",
            "/appointment/post",
            Some(appointment_body("Derek", "Shepherd", "Neurology")),
            Credentials::Anonymous,
        )
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let mut body = appointment_body("Derek", "Shepherd", "Neurology");
    body["address"] = json!("   ");
    let incomplete = book(&clinic, body, &clinic.patient).await;
    assert_eq!(incomplete.status, StatusCode::BAD_REQUEST);
    assert_eq!(incomplete.message(), "Please Fill Full Form!");
}

#[tokio::test]
async fn test_admin_only_listing() {
    let clinic = clinic().await;

    let patient = clinic
        .app
        .request(
            "GET",
            "/appointment/getall",
            None,
            Credentials::Bearer(&clinic.patient),
        )
        .await;
    assert_eq!(patient.status, StatusCode::FORBIDDEN);

    let mirror = clinic
        .app
        .request(
            "GET",
            "/user/appointment/getall",
            None,
            Credentials::Bearer(&clinic.admin),
        )
        .await;
    assert_eq!(mirror.status, StatusCode::OK);
    assert_eq!(mirror.body["appointments"], json!([]));
}

#[tokio::test]
async fn test_update_and_delete_errors() {
    let clinic = clinic().await;
    let app = &clinic.app;
    let booked = book(
        &clinic,
        appointment_body("Derek", "Shepherd", "Neurology"),
        &clinic.patient,
    )
    .await;
    let id = booked.body["appointment"]["_id"].as_str().unwrap().to_string();
    let admin = Credentials::Bearer(&clinic.admin);

    let empty = app
        .request("PUT", &format!("/appointment/update/{id}"), Some(json!({})), admin)
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.message(), "Provide status or hasVisited to update!");

    let visited = app
        .request(
            "PUT",
            &format!("/appointment/update/{id}"),
            Some(json!({ "hasVisited": true })),
            admin,
        )
        .await;
    assert_eq!(visited.status, StatusCode::OK);
    assert_eq!(visited.body["appointment"]["hasVisited"], true);
    assert_eq!(visited.body["appointment"]["status"], "Pending");

    let unknown = uuid::Uuid::now_v7();
    let missing = app
        .request(
            "PUT",
            &format!("/appointment/update/{unknown}"),
            Some(json!({ "status": "Rejected" })),
            admin,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.message(), "Appointment not found!");

    let deleted = app
        .request("DELETE", &format!("/appointment/delete/{id}"), None, admin)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.message(), "Appointment Deleted!");

    let again = app
        .request("DELETE", &format!("/appointment/delete/{id}"), None, admin)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.message(), "Appointment Not Found!");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found_even_with_empty_body() {
    let clinic = clinic().await;
    let missing = uuid::Uuid::now_v7();

    let response = clinic
        .app
        .request(
            "PUT",
            &format!("/appointment/update/{missing}"),
            Some(json!({})),
            Credentials::Bearer(&clinic.admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Appointment not found!");
}

#[tokio::test]
async fn test_patient_update_is_forbidden_before_body_is_read() {
    let clinic = clinic().await;
    let missing = uuid::Uuid::now_v7();

    let response = clinic
        .app
        .request(
            "PUT",
            &format!("/appointment/update/{missing}"),
            Some(json!({ "status": 7 })),
            Credentials::Bearer(&clinic.patient),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.message(),
        "Patient not allowed to access this resource!"
    );
}
