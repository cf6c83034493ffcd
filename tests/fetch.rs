// tests/fetch.rs
//
// Fetcher against a local mock server. The client is blocking, so each call
// runs on a blocking thread while the mock server lives on the test runtime.
//
mod common;

use std::time::Duration;

use common::Recorder;
use quote_scrape::config::FetchOptions;
use quote_scrape::core::net::fetch_page;
use quote_scrape::error::FetchError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn fetch(opts: FetchOptions) -> (Result<String, FetchError>, Recorder) {
    tokio::task::spawn_blocking(move || {
        let mut rec = Recorder::default();
        let res = fetch_page(&opts, &mut rec);
        (res, rec)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn success_returns_body_and_sends_user_agent() {
    let server = MockServer::start().await;
    let opts = FetchOptions::for_url(format!("{}/", server.uri()));
    let expected_ua = opts.user_agent.clone();
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let (res, rec) = fetch(opts).await;
    assert_eq!(res.unwrap(), "<html>ok</html>");
    assert!(rec.logs.iter().any(|l| l.starts_with("Page fetched")));
    assert!(rec.errors.is_empty());

    // The value carries commas, so compare the raw header as received
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert_eq!(sent, expected_ua);
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_is_status_failure_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (res, rec) = fetch(FetchOptions::for_url(server.uri())).await;
    let err = res.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500, .. }));
    assert_eq!(err.status(), Some(500));
    assert_eq!(rec.errors.len(), 1);
    assert!(rec.errors[0].contains("HTTP 500"));
}

#[tokio::test(flavor = "multi_thread")]
async fn not_found_is_status_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (res, _) = fetch(FetchOptions::for_url(server.uri())).await;
    assert_eq!(res.unwrap_err().status(), Some(404));
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let mut opts = FetchOptions::for_url(server.uri());
    opts.timeout = Duration::from_millis(200);

    let (res, rec) = fetch(opts).await;
    assert!(matches!(res, Err(FetchError::Timeout { .. })));
    assert!(rec.errors[0].contains("timed out"));
}

#[tokio::test(flavor = "multi_thread")]
async fn refused_connection_is_connect_failure() {
    // Bind then drop a listener so the port is known to be closed
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let uri = format!("http://127.0.0.1:{port}/");

    let (res, rec) = fetch(FetchOptions::for_url(uri)).await;
    assert!(matches!(res, Err(FetchError::Connect { .. })));
    assert!(rec.errors[0].starts_with("connection error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_url_is_other_failure() {
    let (res, _) = fetch(FetchOptions::for_url("not a url")).await;
    assert!(matches!(res, Err(FetchError::Other { .. })));
}
