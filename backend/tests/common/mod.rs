#![allow(dead_code)]

use std::{str::FromStr, sync::Arc};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bigdecimal::BigDecimal;
use launchpad_server::{
    app_state::AppState, build_app, data_access::data_context::DataContext, settings::Settings,
};
use serde_json::{json, Value};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub settings: Settings,
    _dir: tempfile::TempDir,
}

impl TestApp {
    /// Fresh database with the default admin seeded.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            database_path: dir.path().join("api.redb").to_string_lossy().into_owned(),
            jwt_secret: "test-secret".into(),
            ..Settings::default()
        };
        let data_context = DataContext::new(&settings.database_path).unwrap();
        data_context.ensure_default_user(&settings).unwrap();
        let router = build_app(Arc::new(AppState {
            data_context,
            settings: settings.clone(),
        }));
        TestApp { router, settings, _dir: dir }
    }

    pub async fn call(&self, method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(serde_json::to_string(&v).unwrap())
            }
            None => Body::empty(),
        };
        let resp = self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let json = if bytes.is_empty() {
            json!(null)
        } else {
            serde_json::from_slice(&bytes).unwrap_or(json!(null))
        };
        (status, json)
    }

    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.call("POST", "/api/auth/login", None, Some(json!({ "email": email, "password": password })))
            .await
    }

    pub async fn admin_token(&self) -> String {
        let (status, body) = self
            .login(&self.settings.default_admin_email, &self.settings.default_admin_password)
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Registers and logs in; returns `(user id, token)`.
    pub async fn sign_up(&self, first_name: &str, role: &str) -> (u64, String) {
        let email = format!("{}@launchpad.test", first_name.to_lowercase());
        let (status, body) = self
            .call("POST", "/api/auth/register", None, Some(register_body(first_name, &email, role)))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let id = body["id"].as_u64().unwrap();

        let (status, body) = self.login(&email, "pa55word").await;
        assert_eq!(status, StatusCode::OK, "{body}");
        (id, body["token"].as_str().unwrap().to_string())
    }

    /// A freelancer with a profile, ready to log work.
    pub async fn freelancer(&self, first_name: &str) -> (u64, String) {
        let (id, token) = self.sign_up(first_name, "Freelancer").await;
        let (status, body) = self
            .call(
                "POST",
                "/api/freelancer-profiles",
                Some(&token),
                Some(json!({
                    "skills": "rust",
                    "hourlyRate": "45",
                    "availability": "Full-time",
                    "workingHours": "9-17"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        (id, token)
    }

    pub async fn project(&self, client_token: &str, title: &str) -> u64 {
        let (status, body) = self
            .call(
                "POST",
                "/api/projects",
                Some(client_token),
                Some(json!({
                    "title": title,
                    "description": "Build it",
                    "category": "Web",
                    "deadline": "2030-01-31",
                    "requiredSkills": "rust",
                    "budget": "1500.00",
                    "paymentType": "Milestone"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_u64().unwrap()
    }
}

pub fn register_body(first_name: &str, email: &str, role: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Tester",
        "email": email,
        "phoneNo": "555-0101",
        "password": "pa55word",
        "confirmPassword": "pa55word",
        "role": role
    })
}

/// Money travels as a decimal string; compare by value, not by scale.
pub fn decimal(value: &Value) -> BigDecimal {
    match value {
        Value::String(s) => BigDecimal::from_str(s).unwrap(),
        Value::Number(n) => BigDecimal::from_str(&n.to_string()).unwrap(),
        other => panic!("not a decimal: {other}"),
    }
}
