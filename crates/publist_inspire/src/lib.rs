/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Client for the INSPIRE-HEP literature search API.
//!
//! One batched query fetches the citation counts for every publication
//! matching an author query; the result is a lookup from INSPIRE record
//! id to count. A failed request is an `Err`, never a partial result:
//! callers either get the whole lookup or keep their default badges.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://inspirehep.net";

const USER_AGENT: &str = concat!("publist/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum InspireError {
    #[error("request to INSPIRE failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("INSPIRE returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected INSPIRE response: {0}")]
    Parse(String),
}

#[derive(Debug, Deserialize)]
struct LiteratureResponse {
    hits: Hits,
}

#[derive(Debug, Deserialize)]
struct Hits {
    hits: Vec<Record>,
}

#[derive(Debug, Deserialize)]
struct Record {
    id: RecordId,
    #[serde(default)]
    metadata: Metadata,
}

/// INSPIRE serves record ids as strings, but older payloads carried bare
/// numbers; accept both and key the lookup by the string form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    fn into_key(self) -> String {
        match self {
            RecordId::Number(number) => number.to_string(),
            RecordId::Text(text) => text,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    citation_count: Option<i64>,
}

/// Extract the id → citation-count lookup from a literature API response
/// body.
///
/// Records without a citation count are left out of the lookup. Counts
/// are kept exactly as returned; what to do with an out-of-range value is
/// the consumer's decision.
pub fn parse_citation_counts(body: &str) -> Result<HashMap<String, i64>, InspireError> {
    let response: LiteratureResponse =
        serde_json::from_str(body).map_err(|e| InspireError::Parse(e.to_string()))?;
    let mut counts = HashMap::new();
    for record in response.hits.hits {
        if let Some(count) = record.metadata.citation_count {
            counts.insert(record.id.into_key(), count);
        }
    }
    Ok(counts)
}

/// HTTP client for the literature search endpoint.
#[derive(Debug, Clone)]
pub struct InspireClient {
    http: reqwest::Client,
    base_url: String,
}

impl InspireClient {
    pub fn new() -> Result<Self, InspireError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a non-default endpoint; tests point this at a local
    /// server.
    pub fn with_base_url(base_url: &str) -> Result<Self, InspireError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch citation counts for every record matching `query`.
    ///
    /// One request covers the whole list; a non-success status or a
    /// malformed body is an error with no partial results.
    pub async fn citation_counts(&self, query: &str) -> Result<HashMap<String, i64>, InspireError> {
        let url = self.literature_url(query);
        tracing::debug!(url = %url, "fetching INSPIRE citation counts");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InspireError::Status(status));
        }

        let body = response.text().await?;
        let counts = parse_citation_counts(&body)?;
        tracing::debug!(records = counts.len(), "INSPIRE lookup built");
        Ok(counts)
    }

    fn literature_url(&self, query: &str) -> String {
        format!(
            "{}/api/literature?q={}&fields=citation_count",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}
