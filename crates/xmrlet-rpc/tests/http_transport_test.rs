//! HttpTransport against a local axum server speaking digest auth.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use xmrlet_core::config::DigestCredentials;
use xmrlet_rpc::methods::GetBalanceParams;
use xmrlet_rpc::registry::GetBalance;
use xmrlet_rpc::{CallError, Dispatcher, HttpTransport, Transport, TransportError};

const NONCE: &str = "5f1c3a7e9b2d4f6a8c0e1b3d5f7a9c2e";
const REALM: &str = "monero-rpc";

#[derive(Clone, Default)]
struct Hits(Arc<AtomicUsize>);

impl Hits {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

fn challenge() -> String {
    format!(r#"Digest qop="auth",algorithm=MD5,realm="{REALM}",nonce="{NONCE}",stale=false"#)
}

fn balance_reply(body: &str) -> Response {
    let request: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    Json(json!({
        "id": request["id"],
        "jsonrpc": "2.0",
        "result": {"balance": 500, "unlocked_balance": 500}
    }))
    .into_response()
}

/// Accepts only `alice` answering the current nonce for `/json_rpc`.
async fn protected(State(hits): State<Hits>, headers: HeaderMap, body: String) -> Response {
    hits.0.fetch_add(1, Ordering::SeqCst);

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let answered = authorization.starts_with("Digest ")
        && authorization.contains(r#"username="alice""#)
        && authorization.contains(&format!(r#"realm="{REALM}""#))
        && authorization.contains(&format!(r#"nonce="{NONCE}""#))
        && authorization.contains(r#"uri="/json_rpc""#)
        && authorization.contains("response=");

    if answered {
        balance_reply(&body)
    } else {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, challenge())],
        )
            .into_response()
    }
}

async fn open(State(hits): State<Hits>, body: String) -> Response {
    hits.0.fetch_add(1, Ordering::SeqCst);
    balance_reply(&body)
}

async fn broken(State(hits): State<Hits>) -> Response {
    hits.0.fetch_add(1, Ordering::SeqCst);
    (StatusCode::INTERNAL_SERVER_ERROR, "wallet crashed").into_response()
}

async fn slow(State(hits): State<Hits>, body: String) -> Response {
    hits.0.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_secs(3)).await;
    balance_reply(&body)
}

async fn serve(router: Router<Hits>) -> (String, Hits) {
    let hits = Hits::default();
    let app = router.with_state(hits.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/json_rpc"), hits)
}

fn body() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "id": 0,
        "jsonrpc": "2.0",
        "method": "get_balance",
        "params": {"account_index": 0, "address_indices": [0]}
    }))
    .unwrap()
}

fn transport(credentials: Option<DigestCredentials>) -> HttpTransport {
    HttpTransport::new(credentials, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn digest_challenge_is_answered() {
    let (url, hits) = serve(Router::new().route("/json_rpc", post(protected))).await;
    let t = transport(Some(DigestCredentials::new("alice", "s3cret")));

    let reply = t.post_json(&url, body()).await.unwrap();
    let reply: Value = serde_json::from_slice(&reply).unwrap();
    assert_eq!(reply["result"]["balance"], 500);
    assert_eq!(hits.count(), 2);
}

#[tokio::test]
async fn each_call_runs_its_own_challenge() {
    let (url, hits) = serve(Router::new().route("/json_rpc", post(protected))).await;
    let t = Arc::new(transport(Some(DigestCredentials::new("alice", "s3cret"))));

    let a = tokio::spawn({
        let (t, url) = (t.clone(), url.clone());
        async move { t.post_json(&url, body()).await }
    });
    let b = tokio::spawn({
        let (t, url) = (t.clone(), url.clone());
        async move { t.post_json(&url, body()).await }
    });
    assert!(a.await.unwrap().is_ok());
    assert!(b.await.unwrap().is_ok());
    assert_eq!(hits.count(), 4);
}

#[tokio::test]
async fn missing_credentials_is_auth_error() {
    let (url, hits) = serve(Router::new().route("/json_rpc", post(protected))).await;

    let err = transport(None).post_json(&url, body()).await.unwrap_err();
    assert!(matches!(err, TransportError::Auth(_)), "{err:?}");
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn rejected_credentials_are_not_retried() {
    let (url, hits) = serve(Router::new().route("/json_rpc", post(protected))).await;
    let t = transport(Some(DigestCredentials::new("mallory", "guess")));

    let err = t.post_json(&url, body()).await.unwrap_err();
    assert!(matches!(err, TransportError::Auth(_)), "{err:?}");
    assert_eq!(hits.count(), 2);
}

#[tokio::test]
async fn open_server_needs_no_credentials() {
    let (url, hits) = serve(Router::new().route("/json_rpc", post(open))).await;

    let reply = transport(None).post_json(&url, body()).await.unwrap();
    let reply: Value = serde_json::from_slice(&reply).unwrap();
    assert_eq!(reply["id"], 0);
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let (url, _) = serve(Router::new().route("/json_rpc", post(broken))).await;

    let err = transport(None).post_json(&url, body()).await.unwrap_err();
    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "wallet crashed");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_server_times_out() {
    let (url, _) = serve(Router::new().route("/json_rpc", post(slow))).await;
    let t = HttpTransport::new(None, Duration::from_millis(200)).unwrap();

    let err = t.post_json(&url, body()).await.unwrap_err();
    assert!(matches!(err, TransportError::Timeout), "{err:?}");
}

#[tokio::test]
async fn refused_connection_is_connection_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = transport(None)
        .post_json(&format!("http://{addr}/json_rpc"), body())
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Connection(_)), "{err:?}");
}

#[tokio::test]
async fn dispatcher_over_http_with_digest() {
    let (url, _) = serve(Router::new().route("/json_rpc", post(protected))).await;
    let d = Dispatcher::new(
        transport(Some(DigestCredentials::new("alice", "s3cret"))),
        url,
    );

    let balance = d
        .call::<GetBalance>(&GetBalanceParams::default())
        .await
        .unwrap();
    assert_eq!(balance.balance, 500);
    assert_eq!(balance.unlocked_balance, 500);
}

#[tokio::test]
async fn dispatcher_surfaces_transport_errors() {
    let (url, _) = serve(Router::new().route("/json_rpc", post(protected))).await;
    let d = Dispatcher::new(transport(None), url);

    let err = d
        .call::<GetBalance>(&GetBalanceParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CallError::Transport(TransportError::Auth(_))));
}
