//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use medcare_api::{AppState, build_app};
use medcare_core::config::AppConfig;
use medcare_database::Stores;
use medcare_storage::MemoryAvatarStorage;

/// Boundary used for multipart test bodies.
const BOUNDARY: &str = "medcare-test-boundary";

/// A minimal PNG signature, enough for the avatar store.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stores behind the router, for direct inspection
    pub stores: Stores,
    /// Avatar storage behind the router
    pub avatars: Arc<MemoryAvatarStorage>,
    /// Application config
    pub config: AppConfig,
}

/// How a request presents its token.
#[derive(Debug, Clone, Copy)]
pub enum Credentials<'a> {
    /// No token at all
    Anonymous,
    /// `Authorization: Bearer <token>`
    Bearer(&'a str),
    /// `Cookie: <name>=<token>`
    Cookie(&'a str, &'a str),
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Every `Set-Cookie` header value
    pub set_cookies: Vec<String>,
}

impl TestResponse {
    /// The envelope `message` field.
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }

    /// The `Set-Cookie` value for `name`, if any.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        let prefix = format!("{name}=");
        self.set_cookies
            .iter()
            .find(|c| c.starts_with(&prefix))
            .map(String::as_str)
    }
}

impl TestApp {
    /// Create a new test application over empty in-memory stores
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.storage.provider = "memory".to_string();

        let stores = Stores::memory();
        let avatars = Arc::new(MemoryAvatarStorage::new(&config.storage.public_base_url));
        let state = AppState::new(config.clone(), stores.clone(), avatars.clone());

        Self {
            router: build_app(state),
            stores,
            avatars,
            config,
        }
    }

    /// Prefix an API path with the configured mount point
    pub fn api(&self, path: &str) -> String {
        format!("{}{}", self.config.server.api_prefix, path)
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        credentials: Credentials<'_>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(self.api(path))
            .header(CONTENT_TYPE, "application/json");
        let req = with_credentials(req, credentials)
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a multipart request with text fields and an optional file
    pub async fn multipart(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        file: Option<(&str, &str, &[u8])>,
        credentials: Credentials<'_>,
    ) -> TestResponse {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((name, mime, data)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"avatar\"\r\nContent-Type: {mime}\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri(self.api(path))
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );
        let req = with_credentials(req, credentials)
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(String::from)
            .collect();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookies,
        }
    }

    /// Create the first admin through the open bootstrap route and return
    /// its token
    pub async fn bootstrap_admin(&self, email: &str) -> String {
        let response = self
            .request("POST", "/user/admin/addnew", Some(admin_body(email)), Credentials::Anonymous)
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Bootstrap failed: {:?}",
            response.body
        );
        token_of(&response)
    }

    /// Register a patient with numeric DID `did` and return its token
    pub async fn register_patient(&self, email: &str, did: i64) -> String {
        let response = self
            .request(
                "POST",
                "/user/patient/register",
                Some(patient_body(email, did)),
                Credentials::Anonymous,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
        token_of(&response)
    }

    /// Log in and return the token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/user/login",
                Some(json!({ "email": email, "password": password })),
                Credentials::Anonymous,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        token_of(&response)
    }

    /// Add a doctor as `admin_token` and return the doctor JSON
    pub async fn add_doctor(
        &self,
        admin_token: &str,
        first_name: &str,
        last_name: &str,
        department: &str,
        email: &str,
    ) -> Value {
        let fields = doctor_fields(first_name, last_name, department, email);
        let response = self
            .multipart(
                "/user/doctor/addnew",
                &fields,
                Some(("docAvatar", "image/png", PNG_BYTES)),
                Credentials::Bearer(admin_token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Add doctor failed: {:?}",
            response.body
        );
        response.body["doctor"].clone()
    }
}

fn with_credentials(
    req: http::request::Builder,
    credentials: Credentials<'_>,
) -> http::request::Builder {
    match credentials {
        Credentials::Anonymous => req,
        Credentials::Bearer(token) => req.header(AUTHORIZATION, format!("Bearer {token}")),
        Credentials::Cookie(name, token) => req.header(COOKIE, format!("{name}={token}")),
    }
}

/// The `token` field of an auth response
pub fn token_of(response: &TestResponse) -> String {
    response.body["token"]
        .as_str()
        .expect("No token in response")
        .to_string()
}

/// A valid patient registration body
pub fn patient_body(email: &str, did: i64) -> Value {
    json!({
        "firstName": "Meredith",
        "lastName": "Grey",
        "email": email,
        "phone": "5551234567",
        "did": did,
        "dob": "1990-04-12",
        "gender": "Female",
        "password": "patient-pass",
    })
}

/// A valid admin creation body
pub fn admin_body(email: &str) -> Value {
    json!({
        "firstName": "Richard",
        "lastName": "Webber",
        "email": email,
        "phone": "5559876543",
        "Aid": "A-1",
        "dob": "1960-01-01",
        "gender": "Male",
        "password": "admin-pass",
    })
}

/// Text fields of a valid doctor form
pub fn doctor_fields<'a>(
    first_name: &'a str,
    last_name: &'a str,
    department: &'a str,
    email: &'a str,
) -> Vec<(&'a str, &'a str)> {
    vec![
        ("firstName", first_name),
        ("lastName", last_name),
        ("email", email),
        ("phone", "5550001111"),
        ("did", "7001"),
        ("dob", "1975-09-30"),
        ("gender", "Male"),
        ("password", "doctor-pass"),
        ("doctorDepartment", department),
    ]
}

/// A valid booking body for the given doctor
pub fn appointment_body(doctor_first: &str, doctor_last: &str, department: &str) -> Value {
    json!({
        "firstName": "Meredith",
        "lastName": "Grey",
        "email": "meredith@seattle.test",
        "phone": "5551234567",
        "dob": "1990-04-12",
        "gender": "Female",
        "appointment_date": "2026-11-02",
        "department": department,
        "doctor_firstName": doctor_first,
        "doctor_lastName": doctor_last,
        "hasVisited": false,
        "address": "1 Grey Sloan Way",
    })
}
