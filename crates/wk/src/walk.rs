//! Follows the `next_url` links of a collection until the last page.

use crate::fetch::{FetchError, FetchPage};
use futures_util::{
    stream::{self, Stream},
    TryStreamExt,
};
use std::collections::HashSet;
use thiserror::Error;
use wk_api::{Subject, SubjectCollection};

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("page {page} did not match the expected schema")]
    SchemaMismatch {
        page: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to fetch page {page}")]
    Fetch {
        page: usize,
        #[source]
        source: FetchError,
    },
    /// The next page link pointed to a page that was already fetched.
    #[error("page {page} would revisit {url}")]
    PaginationCycle { page: usize, url: String },
}

impl WalkError {
    /// The 0-based index of the page that failed.
    pub fn page(&self) -> usize {
        match self {
            Self::SchemaMismatch { page, .. }
            | Self::Fetch { page, .. }
            | Self::PaginationCycle { page, .. } => *page,
        }
    }

    fn from_fetch(page: usize, error: FetchError) -> Self {
        match error {
            FetchError::SchemaMismatch(source) => Self::SchemaMismatch { page, source },
            source => Self::Fetch { page, source },
        }
    }
}

/// A fetched page and its position in the traversal.
#[derive(Debug, Clone)]
pub struct Page {
    pub index: usize,
    pub collection: SubjectCollection,
}

struct Walker<F> {
    fetcher: F,
    next_url: Option<String>,
    seen: HashSet<String>,
    index: usize,
}

impl<F: FetchPage> Walker<F> {
    async fn next_page(&mut self) -> Result<Option<Page>, WalkError> {
        let Some(url) = self.next_url.take() else {
            tracing::debug!("Reached the last page after {} pages", self.index);
            return Ok(None);
        };
        let index = self.index;

        if !self.seen.insert(url.clone()) {
            tracing::warn!("Page {index} links back to {url}");
            return Err(WalkError::PaginationCycle { page: index, url });
        }

        tracing::trace!("Fetching page {index} from {url}");
        let collection = self
            .fetcher
            .fetch_page(&url)
            .await
            .map_err(|e| WalkError::from_fetch(index, e))?;
        tracing::debug!(
            "Fetched page {index} with {} subjects",
            collection.data.len()
        );

        self.index += 1;
        self.next_url = collection.next_link().map(str::to_string);
        Ok(Some(Page { index, collection }))
    }
}

/// Streams the pages of a collection, starting from `initial_url`.
///
/// Pages are fetched one at a time and only when the stream is polled,
/// so dropping the stream stops the traversal. The stream ends after
/// the first error.
pub fn pages<F>(
    fetcher: F,
    initial_url: impl Into<String>,
) -> impl Stream<Item = Result<Page, WalkError>>
where
    F: FetchPage,
{
    let walker = Walker {
        fetcher,
        next_url: Some(initial_url.into()),
        seen: HashSet::new(),
        index: 0,
    };
    stream::try_unfold(walker, |mut walker| async move {
        let page = walker.next_page().await?;
        Ok::<_, WalkError>(page.map(|page| (page, walker)))
    })
}

/// Streams every subject of a collection in page order.
///
/// Subjects are passed through as they are, so a subject the API
/// repeats on two pages is yielded twice. Subjects yielded before an
/// error remain valid.
pub fn walk<F>(
    fetcher: F,
    initial_url: impl Into<String>,
) -> impl Stream<Item = Result<Subject, WalkError>>
where
    F: FetchPage,
{
    pages(fetcher, initial_url)
        .map_ok(|page| {
            stream::iter(page.collection.data.into_iter().map(Ok::<_, WalkError>))
        })
        .try_flatten()
}

/// Collects every subject of a collection, discarding everything on error.
pub async fn collect<F>(
    fetcher: F,
    initial_url: impl Into<String>,
) -> Result<Vec<Subject>, WalkError>
where
    F: FetchPage,
{
    walk(fetcher, initial_url).try_collect().await
}
