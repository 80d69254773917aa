//! Domain DTOs for the booking API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A bookable offering returned by the API.
///
/// Records are owned by the backend; the client only reads snapshots and
/// asks the server to flip `is_bookmarked` or `is_popular`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub category: String,
    pub provider: String,
    pub price: f64,
    /// 0.0 to 5.0.
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    pub is_bookmarked: bool,
    #[serde(default)]
    pub is_popular: bool,
}
