//! Per-screen data bindings over `ServiceApi`.
//!
//! A hook owns a `FetchState` and knows which operation feeds it. Creating a
//! list or detail hook performs the first fetch, the way a screen fetches on
//! mount. Hooks never return errors: failures end up in `error()` and the
//! last good data stays visible.
//!
//! # Design
//! Every hook splits a fetch into `start` and `finish`, like the client's
//! `build_*`/`parse_*`. `start` enters the loading state and hands back the
//! request to run plus a `RequestToken`; `finish` takes the transport outcome
//! for that token. A host driving requests from its own event loop sees
//! `loading()` in between, and a `finish` for a superseded token is dropped.
//! `refetch` and friends run both halves over the api's transport.

use tracing::debug;

use crate::api::ServiceApi;
use crate::client::ServiceClient;
use crate::error::{ApiError, TransportError};
use crate::fetch::{execute, parse_json};
use crate::http::{HttpRequest, HttpResponse};
use crate::state::{FetchState, RequestToken};
use crate::transport::Transport;
use crate::types::Service;

/// Which list a `ServiceListHook` shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceQuery {
    All { category: Option<String> },
    Popular,
    Bookmarked,
}

impl ServiceQuery {
    fn fallback(&self) -> &'static str {
        match self {
            ServiceQuery::All { .. } => "Failed to fetch services",
            ServiceQuery::Popular => "Failed to fetch popular services",
            ServiceQuery::Bookmarked => "Failed to fetch bookmarked services",
        }
    }

    fn build(&self, client: &ServiceClient) -> HttpRequest {
        match self {
            ServiceQuery::All { category } => client.build_list_services(category.as_deref()),
            ServiceQuery::Popular => client.build_list_popular(),
            ServiceQuery::Bookmarked => client.build_list_bookmarked(),
        }
    }
}

fn normalize_category(category: Option<&str>) -> Option<String> {
    category.filter(|c| !c.is_empty()).map(str::to_string)
}

/// A list of services plus its loading and error flags.
#[derive(Debug, Clone)]
pub struct ServiceListHook {
    query: ServiceQuery,
    state: FetchState<Vec<Service>>,
}

impl ServiceListHook {
    pub fn mount<T: Transport>(api: &ServiceApi<T>, query: ServiceQuery) -> Self {
        let mut hook = Self::idle(query);
        hook.refetch(api);
        hook
    }

    /// A hook that has not fetched anything yet.
    pub fn idle(query: ServiceQuery) -> Self {
        Self {
            query,
            state: FetchState::default(),
        }
    }

    /// All services, filtered server-side when `category` is set.
    pub fn services<T: Transport>(api: &ServiceApi<T>, category: Option<&str>) -> Self {
        Self::mount(
            api,
            ServiceQuery::All {
                category: normalize_category(category),
            },
        )
    }

    pub fn popular<T: Transport>(api: &ServiceApi<T>) -> Self {
        Self::mount(api, ServiceQuery::Popular)
    }

    pub fn bookmarked<T: Transport>(api: &ServiceApi<T>) -> Self {
        Self::mount(api, ServiceQuery::Bookmarked)
    }

    /// Enter the loading state and return the request to perform.
    pub fn start(&mut self, client: &ServiceClient) -> (RequestToken, HttpRequest) {
        debug!(query = ?self.query, "fetching service list");
        (self.state.begin(), self.query.build(client))
    }

    /// Apply the outcome of the request started with `token`. Returns `false`
    /// when a newer request has been started since.
    pub fn finish(&mut self, token: RequestToken, outcome: Result<HttpResponse, TransportError>) -> bool {
        self.complete(token, outcome.map_err(ApiError::from))
    }

    fn complete(&mut self, token: RequestToken, outcome: Result<HttpResponse, ApiError>) -> bool {
        let result = outcome.and_then(parse_json::<Vec<Service>>);
        self.state.resolve(token, result, self.query.fallback())
    }

    pub fn refetch<T: Transport>(&mut self, api: &ServiceApi<T>) {
        let (token, request) = self.start(api.client());
        let outcome = execute(api.transport(), &request);
        self.complete(token, outcome);
    }

    /// Switch the category filter, refetching only when it actually changed.
    /// Returns whether a fetch happened. Curated lists ignore categories.
    pub fn set_category<T: Transport>(&mut self, api: &ServiceApi<T>, category: Option<&str>) -> bool {
        let next = normalize_category(category);
        match &mut self.query {
            ServiceQuery::All { category } if *category != next => *category = next,
            _ => return false,
        }
        self.refetch(api);
        true
    }

    pub fn query(&self) -> &ServiceQuery {
        &self.query
    }

    pub fn data(&self) -> &[Service] {
        self.state.data()
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}

/// A single service looked up by id.
#[derive(Debug, Clone)]
pub struct ServiceDetailHook {
    id: String,
    state: FetchState<Option<Service>>,
}

impl ServiceDetailHook {
    pub fn mount<T: Transport>(api: &ServiceApi<T>, id: &str) -> Self {
        let mut hook = Self::idle(id);
        hook.refetch(api);
        hook
    }

    pub fn idle(id: &str) -> Self {
        Self {
            id: id.to_string(),
            state: FetchState::default(),
        }
    }

    pub fn start(&mut self, client: &ServiceClient) -> (RequestToken, HttpRequest) {
        debug!(id = %self.id, "fetching service");
        (self.state.begin(), client.build_get_service(&self.id))
    }

    pub fn finish(&mut self, token: RequestToken, outcome: Result<HttpResponse, TransportError>) -> bool {
        self.complete(token, outcome.map_err(ApiError::from))
    }

    fn complete(&mut self, token: RequestToken, outcome: Result<HttpResponse, ApiError>) -> bool {
        let result = outcome.and_then(parse_json::<Service>).map(Some);
        self.state.resolve(token, result, "Failed to fetch service")
    }

    pub fn refetch<T: Transport>(&mut self, api: &ServiceApi<T>) {
        let (token, request) = self.start(api.client());
        let outcome = execute(api.transport(), &request);
        self.complete(token, outcome);
    }

    pub fn set_id<T: Transport>(&mut self, api: &ServiceApi<T>, id: &str) -> bool {
        if self.id == id {
            return false;
        }
        self.id = id.to_string();
        self.refetch(api);
        true
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> Option<&Service> {
        self.state.data().as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    Bookmark,
    Popular,
}

impl ToggleKind {
    fn fallback(&self) -> &'static str {
        match self {
            ToggleKind::Bookmark => "Failed to toggle bookmark",
            ToggleKind::Popular => "Failed to toggle popular",
        }
    }
}

/// Flips one flag on a service. Holds no list: after a successful toggle the
/// caller refetches or patches whatever list it is showing.
#[derive(Debug, Clone)]
pub struct ToggleHook {
    kind: ToggleKind,
    state: FetchState<Option<Service>>,
}

impl ToggleHook {
    pub fn new(kind: ToggleKind) -> Self {
        Self {
            kind,
            state: FetchState::default(),
        }
    }

    pub fn bookmark() -> Self {
        Self::new(ToggleKind::Bookmark)
    }

    pub fn popular() -> Self {
        Self::new(ToggleKind::Popular)
    }

    pub fn start(&mut self, client: &ServiceClient, id: &str) -> (RequestToken, HttpRequest) {
        debug!(id, kind = ?self.kind, "toggling service flag");
        let request = match self.kind {
            ToggleKind::Bookmark => client.build_toggle_bookmark(id),
            ToggleKind::Popular => client.build_toggle_popular(id),
        };
        (self.state.begin(), request)
    }

    /// Returns the updated record, or `None` when the toggle failed or was
    /// superseded by a newer one.
    pub fn finish(
        &mut self,
        token: RequestToken,
        outcome: Result<HttpResponse, TransportError>,
    ) -> Option<Service> {
        self.complete(token, outcome.map_err(ApiError::from))
    }

    fn complete(&mut self, token: RequestToken, outcome: Result<HttpResponse, ApiError>) -> Option<Service> {
        let result = outcome.and_then(parse_json::<Service>);
        let ok = result.is_ok();
        let applied = self.state.resolve(token, result.map(Some), self.kind.fallback());
        if applied && ok {
            self.state.data().clone()
        } else {
            None
        }
    }

    /// Returns the updated record, or `None` when the toggle failed.
    pub fn toggle<T: Transport>(&mut self, api: &ServiceApi<T>, id: &str) -> Option<Service> {
        let (token, request) = self.start(api.client(), id);
        let outcome = execute(api.transport(), &request);
        self.complete(token, outcome)
    }

    pub fn kind(&self) -> ToggleKind {
        self.kind
    }

    pub fn last_updated(&self) -> Option<&Service> {
        self.state.data().as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}
