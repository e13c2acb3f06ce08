//! Builds the URL of the first page of the `/subjects` collection.

use chrono::{DateTime, SecondsFormat, Utc};
use url::Url;
use wk_api::{SubjectId, SubjectKind};

pub const DEFAULT_BASE_URL: &str = "https://api.wanikani.com/v2/";

/// Filters for the `/subjects` endpoint. Empty filters are left out of the URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectQuery {
    pub ids: Vec<SubjectId>,
    pub types: Vec<SubjectKind>,
    pub slugs: Vec<String>,
    pub levels: Vec<u32>,
    pub hidden: Option<bool>,
    /// Only subjects updated after this time.
    pub updated_after: Option<DateTime<Utc>>,
}

impl SubjectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(mut self, ids: impl IntoIterator<Item = SubjectId>) -> Self {
        self.ids.extend(ids);
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = SubjectKind>) -> Self {
        self.types.extend(types);
        self
    }

    pub fn slugs<S: Into<String>>(mut self, slugs: impl IntoIterator<Item = S>) -> Self {
        self.slugs.extend(slugs.into_iter().map(Into::into));
        self
    }

    pub fn levels(mut self, levels: impl IntoIterator<Item = u32>) -> Self {
        self.levels.extend(levels);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn updated_after(mut self, updated_after: DateTime<Utc>) -> Self {
        self.updated_after = Some(updated_after);
        self
    }

    /// The URL of the first page, relative to the API's base URL.
    pub fn url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut url = base.join("subjects")?;

        let mut params = vec![];
        if !self.ids.is_empty() {
            params.push(("ids", join(&self.ids)));
        }
        if !self.types.is_empty() {
            let types = self.types.iter().map(|t| t.as_str()).collect::<Vec<_>>();
            params.push(("types", types.join(",")));
        }
        if !self.slugs.is_empty() {
            params.push(("slugs", self.slugs.join(",")));
        }
        if !self.levels.is_empty() {
            params.push(("levels", join(&self.levels)));
        }
        if let Some(hidden) = self.hidden {
            params.push(("hidden", hidden.to_string()));
        }
        if let Some(updated_after) = self.updated_after {
            params.push((
                "updated_after",
                updated_after.to_rfc3339_opts(SecondsFormat::Micros, true),
            ));
        }
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        tracing::trace!("Built subject query {url}");
        Ok(url)
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
