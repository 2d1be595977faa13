use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use super::*;

fn config(base_url: &str, private_key: Option<&str>) -> EmailJsConfig {
    EmailJsConfig {
        service_id: "service_abc".into(),
        template_id: "template_xyz".into(),
        public_key: "pk_123".into(),
        private_key: private_key.map(str::to_owned),
        base_url: base_url.into(),
    }
}

fn params() -> TemplateParams {
    TemplateParams {
        from_name: "Ada".into(),
        to_name: "Portfolio Owner".into(),
        from_email: "ada@x.com".into(),
        to_email: "owner@example.com".into(),
        message: "hi".into(),
    }
}

// =========================================================================
// Fake EmailJS endpoint
// =========================================================================

#[derive(Clone)]
struct FakeEmailJs {
    seen: Arc<Mutex<Vec<Value>>>,
    status: StatusCode,
    reply: &'static str,
}

async fn handle_send(State(fake): State<FakeEmailJs>, Json(body): Json<Value>) -> (StatusCode, &'static str) {
    fake.seen.lock().unwrap().push(body);
    (fake.status, fake.reply)
}

async fn spawn_fake(status: StatusCode, reply: &'static str) -> (String, Arc<Mutex<Vec<Value>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fake = FakeEmailJs { seen: seen.clone(), status, reply };
    let app = Router::new()
        .route(SEND_PATH, post(handle_send))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), seen)
}

// =========================================================================
// wire shape
// =========================================================================

#[test]
fn send_request_uses_public_key_as_user_id() {
    let cfg = config("http://unused", None);
    let p = params();
    let body = serde_json::to_value(build_send_request(&cfg, &p)).unwrap();
    assert_eq!(
        body,
        json!({
            "service_id": "service_abc",
            "template_id": "template_xyz",
            "user_id": "pk_123",
            "template_params": {
                "from_name": "Ada",
                "to_name": "Portfolio Owner",
                "from_email": "ada@x.com",
                "to_email": "owner@example.com",
                "message": "hi"
            }
        })
    );
}

#[test]
fn send_request_includes_access_token_when_configured() {
    let cfg = config("http://unused", Some("secret"));
    let p = params();
    let body = serde_json::to_value(build_send_request(&cfg, &p)).unwrap();
    assert_eq!(body["accessToken"], "secret");
}

// =========================================================================
// HTTP round trip
// =========================================================================

#[tokio::test]
async fn send_succeeds_on_200() {
    let (base_url, seen) = spawn_fake(StatusCode::OK, "OK").await;
    let client = EmailJsClient::new(config(&base_url, None), HttpTimeouts::default()).unwrap();

    client.send(&params()).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["service_id"], "service_abc");
    assert_eq!(seen[0]["template_params"]["from_email"], "ada@x.com");
}

#[tokio::test]
async fn send_maps_non_200_to_rejected() {
    let (base_url, _seen) = spawn_fake(StatusCode::BAD_REQUEST, "The Public Key is invalid").await;
    let client = EmailJsClient::new(config(&base_url, None), HttpTimeouts::default()).unwrap();

    let err = client.send(&params()).await.unwrap_err();
    match err {
        EmailError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "The Public Key is invalid");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn send_maps_connect_failure_to_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = EmailJsClient::new(config(&format!("http://{addr}"), None), HttpTimeouts::default()).unwrap();
    let err = client.send(&params()).await.unwrap_err();
    assert!(matches!(err, EmailError::Request(_)), "got {err:?}");
}
