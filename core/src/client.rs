//! Stateless HTTP request builder and response parser for the services API.
//!
//! # Design
//! `ServiceClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `ServiceApi` glues the two halves to a `Transport`.

use urlencoding::encode;

use crate::error::ApiError;
use crate::fetch::parse_json;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Service;

/// Synchronous, stateless client for the services API.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All services, optionally filtered server-side by category. An empty
    /// category means no filter.
    pub fn build_list_services(&self, category: Option<&str>) -> HttpRequest {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => HttpRequest::get(format!(
                "{}/services?category={}",
                self.base_url,
                encode(category)
            )),
            None => HttpRequest::get(format!("{}/services", self.base_url)),
        }
    }

    pub fn build_list_popular(&self) -> HttpRequest {
        HttpRequest::get(format!("{}/services/popular", self.base_url))
    }

    pub fn build_list_bookmarked(&self) -> HttpRequest {
        HttpRequest::get(format!("{}/services/bookmarked", self.base_url))
    }

    pub fn build_get_service(&self, id: &str) -> HttpRequest {
        HttpRequest::get(format!("{}/services/{}", self.base_url, encode(id)))
    }

    pub fn build_toggle_bookmark(&self, id: &str) -> HttpRequest {
        HttpRequest::patch(format!("{}/services/{}/bookmark", self.base_url, encode(id)))
    }

    pub fn build_toggle_popular(&self, id: &str) -> HttpRequest {
        HttpRequest::patch(format!("{}/services/{}/popular", self.base_url, encode(id)))
    }

    pub fn parse_service_list(&self, response: HttpResponse) -> Result<Vec<Service>, ApiError> {
        parse_json(response)
    }

    pub fn parse_service(&self, response: HttpResponse) -> Result<Service, ApiError> {
        parse_json(response)
    }
}
