//! HyperTransport against a local axum server

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderMap as AxumHeaders;
use axum::routing::{get, post};
use eddy_client::prelude::*;

async fn serve() -> SocketAddr {
    let app = Router::new()
        .route(
            "/accounts/7",
            get(|| async {
                (
                    [("content-type", "application/json")],
                    r#"{"id":7,"owner":"ada"}"#,
                )
            }),
        )
        .route(
            "/agent",
            get(|headers: AxumHeaders| async move {
                headers
                    .get("user-agent")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        )
        .route("/echo", post(|body: String| async move { body }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "late"
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    addr
}

fn request(
    method: Method,
    addr: SocketAddr,
    path: &str,
    body: Option<&'static str>,
) -> ClientRequest {
    let url = Url::parse(&format!("http://{addr}{path}")).expect("valid url");
    ClientRequest::new(method, url, HeaderMap::new(), body.map(|b| bytes::Bytes::from_static(b.as_bytes())))
}

#[tokio::test]
async fn buffers_the_complete_response() {
    env_logger::try_init().ok();
    let addr = serve().await;
    let transport = HyperTransport::new(&ClientConfig::default()).expect("valid config");

    let response = transport
        .submit(request(Method::GET, addr, "/accounts/7", None))
        .await
        .expect("exchange succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.content_type().expect("well formed"),
        Some(mime::APPLICATION_JSON)
    );
    assert_eq!(response.text().expect("utf-8"), r#"{"id":7,"owner":"ada"}"#);
}

#[tokio::test]
async fn error_statuses_are_still_responses() {
    let addr = serve().await;
    let transport = HyperTransport::new(&ClientConfig::default()).expect("valid config");

    let response = transport
        .submit(request(Method::GET, addr, "/missing", None))
        .await
        .expect("exchange succeeds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sends_configured_user_agent() {
    let addr = serve().await;
    let config = ClientConfig::default().with_user_agent("ledger-sync/2.1");
    let transport = HyperTransport::new(&config).expect("valid config");

    let response = transport
        .submit(request(Method::GET, addr, "/agent", None))
        .await
        .expect("exchange succeeds");

    assert_eq!(response.text().expect("utf-8"), "ledger-sync/2.1");
}

#[tokio::test]
async fn writes_the_request_body() {
    let addr = serve().await;
    let transport = HyperTransport::new(&ClientConfig::default()).expect("valid config");

    let response = transport
        .submit(request(Method::POST, addr, "/echo", Some("ping")))
        .await
        .expect("exchange succeeds");

    assert_eq!(response.text().expect("utf-8"), "ping");
}

#[tokio::test]
async fn slow_exchanges_time_out() {
    let addr = serve().await;
    let config = ClientConfig::default().with_timeout(Duration::from_millis(200));
    let transport = HyperTransport::new(&config).expect("valid config");

    let error = transport
        .submit(request(Method::GET, addr, "/slow", None))
        .await
        .unwrap_err();

    assert!(error.is_timeout());
    assert_eq!(error.url().map(Url::path), Some("/slow"));
}

#[tokio::test]
async fn refused_connections_are_transport_errors() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let transport = HyperTransport::new(&ClientConfig::default()).expect("valid config");
    let error = transport
        .submit(request(Method::GET, addr, "/", None))
        .await
        .unwrap_err();

    assert!(error.is_transport());
    assert!(error.url().is_some());
}

#[test]
fn invalid_config_is_rejected() {
    let config = ClientConfig::default().with_timeout(Duration::ZERO);

    let error = HyperTransport::new(&config).unwrap_err();

    assert!(error.is_builder());
}
