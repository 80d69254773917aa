//! Request lifecycle state shared by every hook.
//!
//! # Design
//! `begin` and `resolve` are split the same way requests are built and
//! parsed: the caller starts a request, performs it however it likes, then
//! hands the outcome back with the token it was given. Each `begin` bumps a
//! generation counter, and a result arriving with an older token is dropped,
//! so a slow response can never overwrite the state of a newer request.

use tracing::debug;

use crate::error::ApiError;

/// Identifies one started request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Loading/error/data triple for one data operation.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    data: T,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> FetchState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter the loading state and clear any previous error.
    pub fn begin(&mut self) -> RequestToken {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        RequestToken(self.generation)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    /// Record the outcome of the request identified by `token`.
    ///
    /// On failure the previous data is kept and the error is reduced to a
    /// display message: classified HTTP errors show their own message, any
    /// other failure shows `fallback`. Returns `false` when the token is
    /// stale and the outcome was discarded.
    pub fn resolve(&mut self, token: RequestToken, result: Result<T, ApiError>, fallback: &str) -> bool {
        if !self.is_current(token) {
            debug!(
                token = token.0,
                current = self.generation,
                "discarding stale response"
            );
            return false;
        }
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(e) => self.error = Some(error_message(&e, fallback)),
        }
        self.loading = false;
        true
    }
}

/// Human-readable message for a failed operation.
pub fn error_message(error: &ApiError, fallback: &str) -> String {
    if error.is_classified() {
        error.to_string()
    } else {
        fallback.to_string()
    }
}
