//! Endpoint queries exercised end-to-end against a local mock of the
//! statistics API.
//!
//! Each test starts an axum router on a random port in a background thread
//! and drives it with the real blocking client, so request building, status
//! interpretation and body decoding are all covered over real HTTP.

use std::net::TcpListener;
use std::thread;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use siastats_core::{ApiResponse, Endpoint, Error, SiaStats};

fn mock_router() -> Router {
    Router::new()
        .route(
            "/dbs/storage.json",
            get(|| async {
                Json(json!([
                    {"date": 1505088000000i64, "total": 3131.175, "used": 73.92},
                    {"date": 1603152000000i64, "total": 2152.53, "used": 718.93}
                ]))
            }),
        )
        .route(
            "/dbs/activehosts.json",
            get(|| async { Json(json!([{"date": 1506384000000i64, "hosts": 630}])) }),
        )
        .route("/dbs/sfdb.json", get(|| async { Json(json!({"a": 1})) }))
        // 200 with a body that is not JSON at all.
        .route("/dbs/burn.json", get(|| async { "maintenance page" }))
        .route(
            "/custom/path.json",
            get(|| async { Json(json!({"custom": true})) }),
        )
}

/// Serve the mock router from a background thread, returning the root URL.
fn spawn_mock() -> String {
    let std_listener = TcpListener::bind("127.0.0.1:0").expect("bind mock listener");
    let addr = std_listener.local_addr().expect("mock listener addr");
    std_listener.set_nonblocking(true).expect("nonblocking");

    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build mock runtime");
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).expect("tokio listener");
            axum::serve(listener, mock_router()).await
        })
        .expect("serve mock api");
    });

    format!("http://{addr}")
}

#[test]
fn success_returns_body_unchanged() {
    let root = spawn_mock();
    let client = SiaStats::with_root(&root).expect("mock root must parse");

    let response = client.siafunds_metrics().expect("query must not fault");
    assert_eq!(response, ApiResponse::Success(json!({"a": 1})));
}

#[test]
fn array_bodies_keep_their_structure() {
    let root = spawn_mock();
    let client = SiaStats::with_root(&root).expect("mock root must parse");

    let response = client.storage_history().expect("query must not fault");
    let value = response.into_json().expect("must be a success");
    let records = value.as_array().expect("storage series is an array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["total"], json!(3131.175));
    assert_eq!(records[1]["used"], json!(718.93));
}

#[test]
fn unknown_endpoint_is_a_404_failure() {
    let root = spawn_mock();
    let client = SiaStats::with_root(&root).expect("mock root must parse");

    // No /dbs/txfeesdb.json route is mounted.
    let response = client.txn_fee_history().expect("query must not fault");
    assert_eq!(response, ApiResponse::Failure { status: 404 });
}

#[test]
fn fetch_suffix_is_honored_verbatim() {
    let root = spawn_mock();
    let client = SiaStats::with_root(&root).expect("mock root must parse");

    let response = client
        .fetch_suffix("/custom/path.json")
        .expect("query must not fault");
    assert_eq!(response, ApiResponse::Success(json!({"custom": true})));
}

#[test]
fn non_json_200_body_is_a_decode_error() {
    let root = spawn_mock();
    let client = SiaStats::with_root(&root).expect("mock root must parse");

    let err = client.burn_history().expect_err("body is not JSON");
    match err {
        Error::Decode { url, .. } => assert!(url.ends_with("/dbs/burn.json")),
        other => panic!("expected a decode error, got {other}"),
    }
}

#[test]
fn transport_fault_propagates_as_error() {
    // Grab a free port and release it again so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);

    let client = SiaStats::with_root(&format!("http://{addr}")).expect("root must parse");
    let err = client
        .fetch(Endpoint::Storage)
        .expect_err("nothing is listening");
    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn concurrent_clients_are_independent() {
    let root = spawn_mock();

    let storage_root = root.clone();
    let storage = thread::spawn(move || {
        let client = SiaStats::with_root(&storage_root).expect("mock root must parse");
        for _ in 0..10 {
            let value = client
                .storage_history()
                .expect("query must not fault")
                .into_json()
                .expect("must be a success");
            assert_eq!(value.as_array().expect("array").len(), 2);
        }
    });

    let hosts = thread::spawn(move || {
        let client = SiaStats::with_root(&root).expect("mock root must parse");
        for _ in 0..10 {
            let value = client
                .active_host_history()
                .expect("query must not fault")
                .into_json()
                .expect("must be a success");
            assert_eq!(value[0]["hosts"], json!(630));
        }
    });

    storage.join().expect("storage thread");
    hosts.join().expect("hosts thread");
}
