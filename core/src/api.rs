//! Typed access to the services API.
//!
//! Each operation builds a request with `ServiceClient`, runs it through the
//! transport and parses the reply. Errors pass through unchanged; nothing is
//! caught at this layer.

use crate::client::ServiceClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::fetch::execute;
use crate::transport::{Transport, UreqTransport};
use crate::types::Service;

#[derive(Debug, Clone)]
pub struct ServiceApi<T = UreqTransport> {
    client: ServiceClient,
    transport: T,
}

impl ServiceApi<UreqTransport> {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(ServiceClient::new(&config.base_url), UreqTransport::new())
    }
}

impl<T: Transport> ServiceApi<T> {
    pub fn new(client: ServiceClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ServiceClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_services(&self, category: Option<&str>) -> Result<Vec<Service>, ApiError> {
        let response = execute(&self.transport, &self.client.build_list_services(category))?;
        self.client.parse_service_list(response)
    }

    pub fn list_popular(&self) -> Result<Vec<Service>, ApiError> {
        let response = execute(&self.transport, &self.client.build_list_popular())?;
        self.client.parse_service_list(response)
    }

    pub fn list_bookmarked(&self) -> Result<Vec<Service>, ApiError> {
        let response = execute(&self.transport, &self.client.build_list_bookmarked())?;
        self.client.parse_service_list(response)
    }

    pub fn get_service(&self, id: &str) -> Result<Service, ApiError> {
        let response = execute(&self.transport, &self.client.build_get_service(id))?;
        self.client.parse_service(response)
    }

    pub fn toggle_bookmark(&self, id: &str) -> Result<Service, ApiError> {
        let response = execute(&self.transport, &self.client.build_toggle_bookmark(id))?;
        self.client.parse_service(response)
    }

    pub fn toggle_popular(&self, id: &str) -> Result<Service, ApiError> {
        let response = execute(&self.transport, &self.client.build_toggle_popular(id))?;
        self.client.parse_service(response)
    }
}
