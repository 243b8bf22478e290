//! Integration test: boots the real router on an ephemeral port and drives
//! it over HTTP with a cookie-less client, capturing and replaying the
//! session cookie by hand so each test controls exactly which identity a
//! request carries.

use std::sync::Arc;

use serde_json::Value;
use sv_domain::config::Config;
use sv_gateway::api;
use sv_gateway::state::AppState;
use sv_sessions::{SessionSigner, SessionStore};

// ── Test server ─────────────────────────────────────────────────────────

/// Boot the router on an ephemeral port. Returns the base URL.
async fn spawn_server() -> String {
    let state = AppState {
        config: Arc::new(Config::default()),
        sessions: Arc::new(SessionStore::new()),
        signer: Arc::new(SessionSigner::new(*b"integration test secret")),
    };

    let app = api::router().with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    format!("http://{addr}")
}

/// Extract the `name=value` pair from a response's `Set-Cookie` header.
fn session_cookie(resp: &reqwest::Response) -> Option<String> {
    let raw = resp.headers().get("set-cookie")?.to_str().ok()?;
    Some(raw.split(';').next().unwrap_or(raw).trim().to_owned())
}

async fn store(base: &str, value: &str, cookie: Option<&str>) -> reqwest::Response {
    let client = reqwest::Client::new();
    let mut req = client.post(format!("{base}/store/{value}"));
    if let Some(c) = cookie {
        req = req.header("cookie", c);
    }
    req.send().await.expect("store request")
}

async fn read(base: &str, cookie: Option<&str>) -> reqwest::Response {
    let client = reqwest::Client::new();
    let mut req = client.get(format!("{base}/read"));
    if let Some(c) = cookie {
        req = req.header("cookie", c);
    }
    req.send().await.expect("read request")
}

async fn body(resp: reqwest::Response) -> Value {
    resp.json().await.expect("JSON body")
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[tokio::test]
async fn store_then_read_roundtrips() {
    let base = spawn_server().await;

    let resp = store(&base, "hello", None).await;
    assert_eq!(resp.status(), 200);
    let cookie = session_cookie(&resp).expect("store sets the session cookie");
    assert_eq!(
        body(resp).await,
        serde_json::json!({ "detail": "Value stored in session" })
    );

    let resp = read(&base, Some(&cookie)).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        body(resp).await,
        serde_json::json!({ "stored_value": "hello" })
    );
}

#[tokio::test]
async fn read_without_cookie_returns_sentinel() {
    let base = spawn_server().await;

    let resp = read(&base, None).await;
    assert_eq!(resp.status(), 200);
    // Read-only: no session is established for a cookie-less read.
    assert!(session_cookie(&resp).is_none());
    assert_eq!(
        body(resp).await,
        serde_json::json!({ "stored_value": "No value stored" })
    );
}

#[tokio::test]
async fn store_is_idempotent_under_repetition() {
    let base = spawn_server().await;

    let cookie = session_cookie(&store(&base, "v", None).await).unwrap();
    store(&base, "v", Some(&cookie)).await;

    let resp = read(&base, Some(&cookie)).await;
    assert_eq!(body(resp).await["stored_value"], "v");
}

#[tokio::test]
async fn sequential_stores_are_last_write_wins() {
    let base = spawn_server().await;

    let cookie = session_cookie(&store(&base, "v1", None).await).unwrap();
    store(&base, "v2", Some(&cookie)).await;

    let resp = read(&base, Some(&cookie)).await;
    assert_eq!(body(resp).await["stored_value"], "v2");
}

#[tokio::test]
async fn every_store_refreshes_the_cookie() {
    let base = spawn_server().await;

    let cookie = session_cookie(&store(&base, "v1", None).await).unwrap();
    let resp = store(&base, "v2", Some(&cookie)).await;

    // Writes with a valid cookie re-issue it (sliding the Max-Age) for
    // the same identity.
    let refreshed = session_cookie(&resp).expect("write responses re-issue the cookie");
    assert_eq!(refreshed, cookie);

    let resp = read(&base, Some(&refreshed)).await;
    assert_eq!(body(resp).await["stored_value"], "v2");
}

#[tokio::test]
async fn distinct_clients_are_isolated() {
    let base = spawn_server().await;

    let alice = session_cookie(&store(&base, "apples", None).await).unwrap();
    let bob = session_cookie(&store(&base, "bread", None).await).unwrap();
    assert_ne!(alice, bob);

    let resp = read(&base, Some(&alice)).await;
    assert_eq!(body(resp).await["stored_value"], "apples");

    let resp = read(&base, Some(&bob)).await;
    assert_eq!(body(resp).await["stored_value"], "bread");
}

#[tokio::test]
async fn tampered_cookie_falls_back_to_fresh_session() {
    let base = spawn_server().await;

    let cookie = session_cookie(&store(&base, "secret", None).await).unwrap();

    // Flip the last signature nibble.
    let mut tampered = cookie.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == '0' { '1' } else { '0' });

    let resp = read(&base, Some(&tampered)).await;
    assert_eq!(body(resp).await["stored_value"], "No value stored");

    // A write with the tampered cookie mints a brand new session.
    let resp = store(&base, "other", Some(&tampered)).await;
    let reissued = session_cookie(&resp).expect("tampered cookie is replaced");
    assert_ne!(reissued, cookie);

    // The original session is untouched.
    let resp = read(&base, Some(&cookie)).await;
    assert_eq!(body(resp).await["stored_value"], "secret");
}

#[tokio::test]
async fn garbage_cookie_is_ignored() {
    let base = spawn_server().await;

    let resp = read(&base, Some("session=not-a-real-token")).await;
    assert_eq!(body(resp).await["stored_value"], "No value stored");
}

#[tokio::test]
async fn percent_encoded_values_roundtrip_decoded() {
    let base = spawn_server().await;

    let cookie = session_cookie(&store(&base, "hello%20world", None).await).unwrap();
    let resp = read(&base, Some(&cookie)).await;
    assert_eq!(body(resp).await["stored_value"], "hello world");
}

#[tokio::test]
async fn session_cookie_carries_expected_attributes() {
    let base = spawn_server().await;

    let resp = store(&base, "x", None).await;
    let raw = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("set-cookie header")
        .to_owned();

    assert!(raw.starts_with("session="));
    assert!(raw.contains("HttpOnly"));
    assert!(raw.contains("Path=/"));
    assert!(raw.contains("SameSite=Lax"));
    assert!(raw.contains("Max-Age=1209600"));
}
