//! Fetches pages from the WaniKani API over HTTP.

use crate::fetch::{decode_page, FetchError, FetchPage};
use reqwest::{Client, Response};
use wk_api::{ApiError, SubjectCollection};

/// The API revision the types in `wk_api` are written against.
pub const API_REVISION: &str = "20170710";

/// Fetches pages with a personal API token.
/// Requests are sent once; failures are returned as they are.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    token: String,
}

impl HttpFetcher {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(Client::new(), token)
    }

    pub fn with_client(client: Client, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
        }
    }

    async fn assert_success(res: Response) -> Result<Response, FetchError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let bytes = res.bytes().await.unwrap_or_default();
        let message = match serde_json::from_slice::<ApiError>(&bytes) {
            Ok(error) if !error.error.is_empty() => error.error,
            _ => String::from_utf8_lossy(&bytes).into_owned(),
        };
        tracing::warn!("Server returned {status}: {message}");
        Err(FetchError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

impl FetchPage for HttpFetcher {
    async fn fetch_page(&mut self, url: &str) -> Result<SubjectCollection, FetchError> {
        tracing::debug!("Requesting {url}");

        let res = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header("Wanikani-Revision", API_REVISION)
            .send()
            .await
            .map_err(FetchError::transport)?;
        let res = Self::assert_success(res).await?;
        let body = res.bytes().await.map_err(FetchError::transport)?;

        decode_page(&body)
    }
}
