//! Client core for the booking marketplace API.
//!
//! # Overview
//! Three layers, leaf to root:
//! - the HTTP wrapper (`http`, `transport`, `fetch`) performs a request and
//!   returns parsed JSON or a classified `ApiError`;
//! - the access layer (`client`, `api`) exposes the six typed service
//!   operations;
//! - the hooks (`state`, `hooks`) turn those operations into loading, error
//!   and data state a screen can render.
//!
//! `language` holds the persisted display-language preference and `config`
//! resolves the API base URL.
//!
//! # Design
//! - `ServiceClient` is stateless: `build_*` produces requests and `parse_*`
//!   consumes responses, so the I/O boundary stays explicit.
//! - Errors are raised by the wrapper, passed through by the access layer and
//!   absorbed into state by the hooks.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod hooks;
pub mod http;
pub mod language;
pub mod state;
pub mod transport;
pub mod types;

pub use api::ServiceApi;
pub use client::ServiceClient;
pub use config::ApiConfig;
pub use error::{ApiError, TransportError};
pub use fetch::fetch_json;
pub use hooks::{ServiceDetailHook, ServiceListHook, ServiceQuery, ToggleHook, ToggleKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use language::{
    FileStore, KeyValueStore, Language, LanguagePreference, MemoryStore, StoreError, UnsupportedLanguage,
};
pub use state::{FetchState, RequestToken};
pub use transport::{Transport, UreqTransport};
pub use types::Service;
