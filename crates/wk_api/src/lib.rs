//! Types for responses from the WaniKani API.
//!
//! Field names match the API verbatim. Fields that are absent or `null` in a
//! response decode to their default value, while a field of the wrong type
//! fails the decode of the whole document.

pub mod collection;
pub mod error;
pub mod subject;

pub use chrono::{DateTime, Utc};
pub use collection::{PageSpec, SubjectCollection};
pub use error::ApiError;
pub use subject::{Subject, SubjectData, SubjectId, SubjectKind};

use serde::{Deserialize, Deserializer};

/// Treats `null` the same as a missing field.
/// Used together with `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
