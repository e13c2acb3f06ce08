//! Downloads WaniKani subjects and writes them to stdout as JSON lines.
//!
//! Usage: `wk_sync [types] [updated_after]`, e.g. `wk_sync kanji,vocabulary 2024-01-01T00:00:00Z`.
//! Reads `WANIKANI_API_TOKEN` and optionally `WANIKANI_API_URL` from the environment or `.env`.

use eyre::{ContextCompat, WrapErr};
use futures_util::StreamExt;
use std::{
    env,
    io::{BufWriter, Write},
    pin::pin,
};
use wk::{query::DEFAULT_BASE_URL, HttpFetcher, SubjectIndex, SubjectQuery};
use wk_api::{DateTime, SubjectKind, Utc};

struct Config {
    api_token: String,
    api_url: String,
}

impl Config {
    fn from_env() -> eyre::Result<Self> {
        let api_token = env::var("WANIKANI_API_TOKEN").wrap_err("Missing WANIKANI_API_TOKEN")?;
        let api_url =
            env::var("WANIKANI_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self { api_token, api_url })
    }
}

fn parse_query(args: &[String]) -> eyre::Result<SubjectQuery> {
    let mut query = SubjectQuery::new();
    if let Some(types) = args.get(1).filter(|t| !t.is_empty()) {
        for name in types.split(',') {
            let kind = SubjectKind::from_name(name)
                .with_context(|| format!("Unknown subject type {name}"))?;
            query = query.types([kind]);
        }
    }
    if let Some(updated_after) = args.get(2) {
        let updated_after = updated_after
            .parse::<DateTime<Utc>>()
            .wrap_err("Invalid updated_after timestamp")?;
        query = query.updated_after(updated_after);
    }
    Ok(query)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let args = env::args().collect::<Vec<_>>();
    let query = parse_query(&args)?;
    let url = query
        .url(&config.api_url)
        .wrap_err("Invalid WANIKANI_API_URL")?;

    tracing::info!("Downloading subjects from {url}");
    let fetcher = HttpFetcher::new(config.api_token);
    let mut subjects = pin!(wk::walk(fetcher, url.as_str()));
    let mut index = SubjectIndex::new();
    let mut out = BufWriter::new(std::io::stdout().lock());
    while let Some(subject) = subjects.next().await {
        let subject = subject.wrap_err("Failed to download subjects")?;
        serde_json::to_writer(&mut out, &subject).wrap_err("Failed to write subject")?;
        writeln!(out).wrap_err("Failed to write subject")?;
        index.insert(subject);
    }
    out.flush().wrap_err("Failed to write subjects")?;

    tracing::info!("Downloaded {} subjects", index.len());
    let dangling = index
        .iter()
        .filter(|subject| index.unresolved(subject).next().is_some())
        .count();
    if dangling > 0 {
        tracing::info!("{dangling} subjects refer to subjects that were not downloaded");
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        std::iter::once("wk_sync")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_no_filters() {
        let query = parse_query(&args(&[])).unwrap();
        assert_eq!(query, SubjectQuery::new());
    }

    #[test]
    fn parses_types_and_timestamp() {
        let query = parse_query(&args(&["radical,kanji", "2024-01-01T00:00:00Z"])).unwrap();
        assert_eq!(query.types, vec![SubjectKind::Radical, SubjectKind::Kanji]);
        assert_eq!(
            query.updated_after.unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(parse_query(&args(&["kanji,grammar"])).is_err());
    }

    #[test]
    fn rejects_bad_timestamp() {
        assert!(parse_query(&args(&["", "yesterday"])).is_err());
    }
}
