use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, fixtures, Service};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn patch(uri: &str) -> Request<String> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("content-type", "application/json")
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_services_returns_full_catalogue() {
    let resp = app().oneshot(get("/services")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let services: Vec<Service> = body_json(resp).await;
    assert_eq!(services, fixtures::services());
}

#[tokio::test]
async fn list_services_filters_by_category() {
    let resp = app().oneshot(get("/services?category=Cleaning")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let services: Vec<Service> = body_json(resp).await;
    assert!(!services.is_empty());
    assert!(services.iter().all(|s| s.category == "Cleaning"));
}

#[tokio::test]
async fn list_services_decodes_encoded_category() {
    let mut seed = fixtures::services();
    seed[0].category = "Home & Garden".to_string();
    let resp = app_with(seed)
        .oneshot(get("/services?category=Home%20%26%20Garden"))
        .await
        .unwrap();

    let services: Vec<Service> = body_json(resp).await;
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].id, "1");
}

#[tokio::test]
async fn unknown_category_is_empty() {
    let resp = app().oneshot(get("/services?category=Astronomy")).await.unwrap();
    let services: Vec<Service> = body_json(resp).await;
    assert!(services.is_empty());
}

#[tokio::test]
async fn popular_and_bookmarked_are_curated() {
    let resp = app().oneshot(get("/services/popular")).await.unwrap();
    let popular: Vec<Service> = body_json(resp).await;
    assert!(!popular.is_empty());
    assert!(popular.iter().all(|s| s.is_popular));

    let resp = app().oneshot(get("/services/bookmarked")).await.unwrap();
    let bookmarked: Vec<Service> = body_json(resp).await;
    assert!(!bookmarked.is_empty());
    assert!(bookmarked.iter().all(|s| s.is_bookmarked));
}

// --- get ---

#[tokio::test]
async fn get_service_by_id() {
    let resp = app().oneshot(get("/services/3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let service: Service = body_json(resp).await;
    assert_eq!(service.id, "3");
}

#[tokio::test]
async fn get_service_not_found() {
    let resp = app().oneshot(get("/services/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Service 999 not found");
}

// --- toggles ---

#[tokio::test]
async fn toggle_unknown_service_is_not_found() {
    let resp = app().oneshot(patch("/services/999/bookmark")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app().oneshot(patch("/services/999/popular")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_on_toggle_route_is_rejected() {
    let resp = app().oneshot(get("/services/1/bookmark")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- full toggle lifecycle ---

#[tokio::test]
async fn bookmark_toggle_lifecycle() {
    use tower::Service as _;

    let mut app = app().into_service();
    let before = fixtures::services().remove(0);
    assert!(!before.is_bookmarked);

    // toggle on
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(patch("/services/1/bookmark"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let toggled: Service = body_json(resp).await;
    assert!(toggled.is_bookmarked);
    assert_eq!(
        Service {
            is_bookmarked: false,
            ..toggled.clone()
        },
        before
    );

    // bookmarked list now contains it
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/services/bookmarked"))
        .await
        .unwrap();
    let bookmarked: Vec<Service> = body_json(resp).await;
    assert!(bookmarked.iter().any(|s| s.id == "1"));

    // toggle off
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(patch("/services/1/bookmark"))
        .await
        .unwrap();
    let toggled: Service = body_json(resp).await;
    assert_eq!(toggled, before);

    // popular flag is independent
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(patch("/services/1/popular"))
        .await
        .unwrap();
    let toggled: Service = body_json(resp).await;
    assert_eq!(toggled.is_popular, !before.is_popular);
    assert_eq!(toggled.is_bookmarked, before.is_bookmarked);

    // get reflects the stored state
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/services/1"))
        .await
        .unwrap();
    let fetched: Service = body_json(resp).await;
    assert_eq!(fetched, toggled);
}
