//! Failure classification over real sockets: canned axum routers for server
//! errors and a closed port for transport errors.

use axum::{
    http::{header, HeaderMap, Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use booking_core::{
    fetch_json, ApiError, HttpRequest, ServiceApi, ServiceClient, ServiceListHook, UreqTransport,
};
use serde_json::{json, Value};

fn spawn(router: Router) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, router).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// A base URL nobody is listening on.
fn closed_port() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn api(base_url: &str) -> ServiceApi<UreqTransport> {
    ServiceApi::new(ServiceClient::new(base_url), UreqTransport::new())
}

#[test]
fn popular_server_error_surfaces_in_hook() {
    let base = spawn(Router::new().route(
        "/services/popular",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ));

    let hook = ServiceListHook::popular(&api(&base));
    let error = hook.error().unwrap();
    assert!(error.contains("500"), "{error}");
    assert!(error.contains("boom"), "{error}");
    assert!(hook.data().is_empty());
    assert!(!hook.loading());
}

#[test]
fn bookmarked_scenario_populates_hook() {
    let base = spawn(Router::new().route(
        "/services/bookmarked",
        get(|| async {
            Json(json!([{
                "id": "1",
                "title": "Deep Clean",
                "category": "Cleaning",
                "provider": "Sparkle Co",
                "price": 60.0,
                "rating": 4.9,
                "reviewCount": 210,
                "image": "https://img.example/1.jpg",
                "isBookmarked": false
            }]))
        }),
    ));

    let hook = ServiceListHook::bookmarked(&api(&base));
    assert_eq!(hook.data().len(), 1);
    assert_eq!(hook.data()[0].id, "1");
    assert!(!hook.data()[0].is_bookmarked);
    assert!(!hook.loading());
    assert!(hook.error().is_none());
}

#[test]
fn fetch_json_returns_arbitrary_body() {
    let base = spawn(Router::new().route(
        "/anything",
        get(|| async { Json(json!({"nested": {"list": [1, "two", null]}})) }),
    ));

    let value: Value = fetch_json(
        &UreqTransport::new(),
        &HttpRequest::get(format!("{base}/anything")),
    )
    .unwrap();
    assert_eq!(value, json!({"nested": {"list": [1, "two", null]}}));
}

#[test]
fn unknown_route_is_a_status_error() {
    let base = spawn(Router::new());
    let err = api(&base).list_services(None).unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[test]
fn connection_refused_is_status_zero() {
    let base = closed_port();
    let err = api(&base).list_bookmarked().unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }), "{err:?}");
    assert_eq!(err.status(), 0);

    let hook = ServiceListHook::bookmarked(&api(&base));
    assert!(hook.error().unwrap().starts_with("network request failed"));
    assert!(hook.data().is_empty());
}

#[test]
fn json_content_type_reaches_the_server() {
    let base = spawn(Router::new().route(
        "/echo",
        any(|method: Method, headers: HeaderMap| async move {
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            Json(json!({"method": method.as_str(), "contentType": content_type}))
        }),
    ));
    let transport = UreqTransport::new();

    let echoed: Value = fetch_json(&transport, &HttpRequest::get(format!("{base}/echo"))).unwrap();
    assert_eq!(echoed, json!({"method": "GET", "contentType": "application/json"}));

    let echoed: Value = fetch_json(&transport, &HttpRequest::patch(format!("{base}/echo"))).unwrap();
    assert_eq!(echoed, json!({"method": "PATCH", "contentType": "application/json"}));
}

#[test]
fn oversized_body_is_a_decode_error_not_a_transport_error() {
    let base = spawn(Router::new().route(
        "/services",
        get(|| async { "x".repeat(11 * 1024 * 1024) }),
    ));

    let err = api(&base).list_services(None).unwrap_err();
    assert!(matches!(err, ApiError::Deserialization(_)), "{err:?}");

    let hook = ServiceListHook::services(&api(&base), None);
    assert_eq!(hook.error(), Some("Failed to fetch services"));
}
