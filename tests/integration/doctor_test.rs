//! Integration tests for doctor onboarding, listing and removal.

mod helpers;

use http::StatusCode;

use helpers::{Credentials, PNG_BYTES, TestApp, doctor_fields};

#[tokio::test]
async fn test_admin_adds_doctor_with_avatar() {
    let app = TestApp::new();
    let admin = app.bootstrap_admin("chief@seattle.test").await;

    let doctor = app
        .add_doctor(&admin, "Derek", "Shepherd", "Neurology", "derek@seattle.test")
        .await;

    assert_eq!(doctor["role"], "Doctor");
    assert_eq!(doctor["doctorDepartment"], "Neurology");
    let url = doctor["docAvatar"]["url"].as_str().unwrap();
    assert!(url.starts_with(&app.config.storage.public_base_url));
    assert_eq!(app.avatars.len().await, 1);

    let listed = app
        .request("GET", "/user/doctors", None, Credentials::Anonymous)
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["doctors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_avatar_is_required_and_typed() {
    let app = TestApp::new();
    let admin = app.bootstrap_admin("chief@seattle.test").await;
    let fields = doctor_fields("Derek", "Shepherd", "Neurology", "derek@seattle.test");

    let missing = app
        .multipart("/user/doctor/addnew", &fields, None, Credentials::Bearer(&admin))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.message(), "Doctor Avatar Required!");

    let gif = app
        .multipart(
            "/user/doctor/addnew",
            &fields,
            Some(("docAvatar", "image/gif", b"GIF89a".as_slice())),
            Credentials::Bearer(&admin),
        )
        .await;
    assert_eq!(gif.status, StatusCode::BAD_REQUEST);
    assert_eq!(gif.message(), "File Format Not Supported!");

    assert!(app.avatars.is_empty().await);
}

#[tokio::test]
async fn test_only_admins_add_doctors() {
    let app = TestApp::new();
    app.bootstrap_admin("chief@seattle.test").await;
    let patient = app.register_patient("patient@seattle.test", 3001).await;
    let fields = doctor_fields("Derek", "Shepherd", "Neurology", "derek@seattle.test");

    let response = app
        .multipart(
            "/user/doctor/addnew",
            &fields,
            Some(("docAvatar", "image/png", PNG_BYTES)),
            Credentials::Bearer(&patient),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(app.avatars.is_empty().await);
}

#[tokio::test]
async fn test_duplicate_doctor_email() {
    let app = TestApp::new();
    let admin = app.bootstrap_admin("chief@seattle.test").await;
    app.add_doctor(&admin, "Derek", "Shepherd", "Neurology", "derek@seattle.test")
        .await;

    let fields = doctor_fields("Mark", "Sloan", "Plastics", "derek@seattle.test");
    let response = app
        .multipart(
            "/user/doctor/addnew",
            &fields,
            Some(("docAvatar", "image/png", PNG_BYTES)),
            Credentials::Bearer(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Doctor With This Email Already Exists!");
    assert_eq!(app.avatars.len().await, 1);
}

#[tokio::test]
async fn test_doctor_logs_in_and_sees_profile() {
    let app = TestApp::new();
    let admin = app.bootstrap_admin("chief@seattle.test").await;
    app.add_doctor(&admin, "Derek", "Shepherd", "Neurology", "derek@seattle.test")
        .await;

    let response = app
        .request(
            "POST",
            "/user/login",
            Some(serde_json::json!({
                "email": "derek@seattle.test",
                "password": "doctor-pass",
                "role": "Doctor",
            })),
            Credentials::Anonymous,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.cookie("doctorToken").expect("doctorToken cookie");
    let token = cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("doctorToken="))
        .unwrap()
        .to_string();

    let me = app
        .request(
            "GET",
            "/user/doctor/me",
            None,
            Credentials::Cookie("doctorToken", &token),
        )
        .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["doctor"]["email"], "derek@seattle.test");

    let logout = app
        .request(
            "GET",
            "/user/doctor/logout",
            None,
            Credentials::Cookie("doctorToken", &token),
        )
        .await;
    assert_eq!(logout.status, StatusCode::CREATED);
    assert_eq!(logout.message(), "Doctor Logged Out Successfully.");
}

#[tokio::test]
async fn test_delete_doctor_removes_avatar() {
    let app = TestApp::new();
    let admin = app.bootstrap_admin("chief@seattle.test").await;
    let doctor = app
        .add_doctor(&admin, "Derek", "Shepherd", "Neurology", "derek@seattle.test")
        .await;
    let id = doctor["_id"].as_str().unwrap();

    let response = app
        .request(
            "DELETE",
            &format!("/user/admin/doctor/{id}"),
            None,
            Credentials::Bearer(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Doctor Deleted Successfully!");
    assert!(app.avatars.is_empty().await);

    let again = app
        .request(
            "DELETE",
            &format!("/user/admin/doctor/{id}"),
            None,
            Credentials::Bearer(&admin),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.message(), "Doctor Not Found!");
}

#[tokio::test]
async fn test_delete_doctor_rejects_non_doctors_and_bad_ids() {
    let app = TestApp::new();
    let admin = app.bootstrap_admin("chief@seattle.test").await;
    let response = app
        .request(
            "POST",
            "/user/patient/register",
            Some(helpers::patient_body("patient@seattle.test", 3002)),
            Credentials::Anonymous,
        )
        .await;
    let patient_id = response.body["user"]["_id"].as_str().unwrap().to_string();

    let not_doctor = app
        .request(
            "DELETE",
            &format!("/user/admin/doctor/{patient_id}"),
            None,
            Credentials::Bearer(&admin),
        )
        .await;
    assert_eq!(not_doctor.status, StatusCode::NOT_FOUND);
    assert_eq!(not_doctor.message(), "Doctor Not Found!");

    let bad_id = app
        .request(
            "DELETE",
            "/user/admin/doctor/not-an-id",
            None,
            Credentials::Bearer(&admin),
        )
        .await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_id.message(), "Invalid id: not-an-id");
}
