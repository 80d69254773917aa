//! The JSON fetch wrapper: execute, classify, parse.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Perform `request` and return the parsed JSON body.
///
/// A transport failure becomes `ApiError::Transport` (status 0); a response
/// outside the 2xx range becomes `ApiError::Status` carrying the raw body.
pub fn fetch_json<T, X>(transport: &X, request: &HttpRequest) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    X: Transport + ?Sized,
{
    let response = execute(transport, request)?;
    parse_json(response)
}

/// Run the round-trip, mapping transport failures into `ApiError`.
pub fn execute<X>(transport: &X, request: &HttpRequest) -> Result<HttpResponse, ApiError>
where
    X: Transport + ?Sized,
{
    debug!(method = request.method.as_str(), url = %request.url, "sending request");
    match transport.execute(request) {
        Ok(response) => {
            debug!(status = response.status, url = %request.url, "received response");
            Ok(response)
        }
        Err(e) => {
            warn!(url = %request.url, error = %e, "request failed before a response arrived");
            Err(e.into())
        }
    }
}

/// Map non-2xx status codes to `ApiError::Status`.
pub fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    warn!(status = response.status, "server returned an error status");
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

pub fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
