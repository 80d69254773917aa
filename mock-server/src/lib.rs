use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub mod fixtures;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub category: String,
    pub provider: String,
    pub price: f64,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    pub is_bookmarked: bool,
    pub is_popular: bool,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

pub type Db = Arc<RwLock<Vec<Service>>>;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

/// Router seeded with the bundled fixture catalogue.
pub fn app() -> Router {
    app_with(fixtures::services())
}

pub fn app_with(services: Vec<Service>) -> Router {
    let db: Db = Arc::new(RwLock::new(services));
    Router::new()
        .route("/services", get(list_services))
        .route("/services/popular", get(list_popular))
        .route("/services/bookmarked", get(list_bookmarked))
        .route("/services/{id}", get(get_service))
        .route("/services/{id}/bookmark", patch(toggle_bookmark))
        .route("/services/{id}/popular", patch(toggle_popular))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

fn not_found(id: &str) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("Service {id} not found"))
}

async fn list_services(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Service>> {
    let services = db.read().await;
    let category = params.category.filter(|c| !c.is_empty());
    debug!(?category, "list services");
    Json(
        services
            .iter()
            .filter(|s| category.as_deref().map_or(true, |c| s.category == c))
            .cloned()
            .collect(),
    )
}

async fn list_popular(State(db): State<Db>) -> Json<Vec<Service>> {
    let services = db.read().await;
    Json(services.iter().filter(|s| s.is_popular).cloned().collect())
}

async fn list_bookmarked(State(db): State<Db>) -> Json<Vec<Service>> {
    let services = db.read().await;
    Json(services.iter().filter(|s| s.is_bookmarked).cloned().collect())
}

async fn get_service(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<Service> {
    let services = db.read().await;
    services
        .iter()
        .find(|s| s.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

async fn toggle_bookmark(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<Service> {
    let mut services = db.write().await;
    let service = services.iter_mut().find(|s| s.id == id).ok_or_else(|| not_found(&id))?;
    service.is_bookmarked = !service.is_bookmarked;
    info!(id = %service.id, bookmarked = service.is_bookmarked, "bookmark toggled");
    Ok(Json(service.clone()))
}

async fn toggle_popular(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<Service> {
    let mut services = db.write().await;
    let service = services.iter_mut().find(|s| s.id == id).ok_or_else(|| not_found(&id))?;
    service.is_popular = !service.is_popular;
    info!(id = %service.id, popular = service.is_popular, "popular toggled");
    Ok(Json(service.clone()))
}
