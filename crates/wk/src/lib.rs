//! Walks the paginated collections of the WaniKani API.
//!
//! The [`walk`] function turns a starting URL and a [`FetchPage`] implementation
//! into a stream of subjects, following `pages.next_url` until the last page.

pub mod fetch;
pub mod http;
pub mod index;
pub mod query;
pub mod walk;

pub use fetch::{decode_page, FetchError, FetchPage};
pub use http::HttpFetcher;
pub use index::SubjectIndex;
pub use query::SubjectQuery;
pub use walk::{collect, pages, walk, Page, WalkError};
pub use wk_api;
