//! The capability the walker uses to fetch a single page.

use std::{error::Error, future::Future};
use thiserror::Error;
use wk_api::SubjectCollection;

pub type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The response was not a valid page, e.g. a field had the wrong type.
    #[error("response did not match the expected schema")]
    SchemaMismatch(#[from] serde_json::Error),
    #[error("request failed: HTTP {status} {message}")]
    Status { status: u16, message: String },
    #[error("request failed")]
    Transport(#[source] BoxError),
}

impl FetchError {
    pub fn transport(error: impl Into<BoxError>) -> Self {
        Self::Transport(error.into())
    }
}

/// Fetches and decodes the page at a URL.
///
/// Authentication, TLS and any retrying are up to the implementation.
pub trait FetchPage {
    fn fetch_page(
        &mut self,
        url: &str,
    ) -> impl Future<Output = Result<SubjectCollection, FetchError>>;
}

impl<F> FetchPage for &mut F
where
    F: FetchPage,
{
    fn fetch_page(
        &mut self,
        url: &str,
    ) -> impl Future<Output = Result<SubjectCollection, FetchError>> {
        (**self).fetch_page(url)
    }
}

/// Decodes a page from a response body.
/// Any field with an unexpected type fails the entire page.
pub fn decode_page(body: &[u8]) -> Result<SubjectCollection, FetchError> {
    let page = serde_json::from_slice(body)?;
    Ok(page)
}
