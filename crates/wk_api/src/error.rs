//! Error responses.

use serde::{Deserialize, Serialize};

/// The body the API sends along with a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    #[serde(deserialize_with = "crate::null_as_default")]
    pub error: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub code: u16,
}
