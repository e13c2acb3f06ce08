//! The envelope around a page of a collection endpoint.

use crate::{null_as_default, subject::Subject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of the `/subjects` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectCollection {
    #[serde(deserialize_with = "null_as_default")]
    pub object: String,
    /// The URL this page was fetched from.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Number of subjects across all pages, not just this one.
    #[serde(deserialize_with = "null_as_default")]
    pub total_count: u64,
    pub data_updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: PageSpec,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<Subject>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub per_page: u32,
    /// Empty on the last page.
    #[serde(deserialize_with = "null_as_default")]
    pub next_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub previous_url: String,
}

impl SubjectCollection {
    /// Whether there is a page after this one.
    /// A missing, `null` or empty `next_url` all mean this is the last page.
    pub fn has_next(&self) -> bool {
        !self.pages.next_url.is_empty()
    }

    /// The URL of the next page.
    pub fn next_link(&self) -> Option<&str> {
        self.has_next().then_some(self.pages.next_url.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_page() {
        let page: SubjectCollection = serde_json::from_str(
            r#"{
                "object": "collection",
                "url": "https://api.wanikani.com/v2/subjects?types=kanji",
                "pages": {
                    "per_page": 1000,
                    "next_url": "https://api.wanikani.com/v2/subjects?page_after_id=1439&types=kanji",
                    "previous_url": null
                },
                "total_count": 2027,
                "data_updated_at": "2018-04-09T18:08:59.946969Z",
                "data": [{ "id": 440, "object": "kanji", "data": { "characters": "一" } }]
            }"#,
        )
        .unwrap();
        assert_eq!(page.pages.per_page, 1000);
        assert_eq!(page.total_count, 2027);
        assert_eq!(page.pages.previous_url, "");
        assert!(page.has_next());
        assert_eq!(
            page.next_link(),
            Some("https://api.wanikani.com/v2/subjects?page_after_id=1439&types=kanji")
        );
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].data.characters, "一");
    }

    #[test]
    fn last_page_has_no_next() {
        for json in [
            r#"{"pages": {"per_page": 500, "next_url": null}, "data": []}"#,
            r#"{"pages": {"per_page": 500, "next_url": ""}, "data": []}"#,
            r#"{"pages": {"per_page": 500}, "data": []}"#,
            r#"{"data": []}"#,
        ] {
            let page: SubjectCollection = serde_json::from_str(json).unwrap();
            assert!(!page.has_next(), "{json}");
            assert_eq!(page.next_link(), None);
        }
    }

    #[test]
    fn bad_record_fails_whole_page() {
        let res = serde_json::from_str::<SubjectCollection>(
            r#"{"data": [{"id": 1}, {"id": 2, "data": {"meanings": "one"}}]}"#,
        );
        assert!(res.is_err());
    }
}
