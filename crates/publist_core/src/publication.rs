/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The publication record, as authored in the site's publication list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// One entry in the publication list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Publication {
    /// BibTeX citation key. Used verbatim in generated entries and element
    /// ids, so it must be a valid key; see [`is_valid_cite_key`].
    pub id: String,
    /// Bibliographic fields.
    pub bib: BibEntry,
    /// Preview image filename, looked up in the assets directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    /// External resources shown as link badges.
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    /// Whether to emit the expandable BibTeX section for this entry.
    #[serde(default)]
    pub bibtex_show: bool,
    /// Award shown as the first expandable section, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award: Option<Award>,
}

/// Bibliographic fields for one entry.
///
/// The declaration order here is the order fields appear in generated
/// BibTeX, so reordering fields is an output change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BibEntry {
    pub author: String,
    /// Stored wrapped in a pair of quote characters; the wrapping pair is
    /// dropped for display. See [`BibEntry::display_title`].
    pub title: String,
    /// Publication year. Kept as a string and ordered lexicographically,
    /// which coincides with numeric order for four-digit years.
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archiveprefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primaryclass: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
}

impl BibEntry {
    /// Key/value pairs of the set fields, in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("author", self.author.as_str()),
            ("title", self.title.as_str()),
            ("year", self.year.as_str()),
        ];
        let optional = [
            ("journal", &self.journal),
            ("volume", &self.volume),
            ("number", &self.number),
            ("pages", &self.pages),
            ("doi", &self.doi),
            ("eprint", &self.eprint),
            ("archiveprefix", &self.archiveprefix),
            ("primaryclass", &self.primaryclass),
            ("abstract", &self.abstract_text),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                fields.push((key, value.as_str()));
            }
        }
        fields
    }

    /// The title with one character stripped from each end.
    ///
    /// Titles are authored wrapped in a pair of quote characters, and the
    /// strip is unconditional: an unwrapped title silently loses its first
    /// and last character.
    pub fn display_title(&self) -> &str {
        let mut chars = self.title.chars();
        chars.next();
        chars.next_back();
        chars.as_str()
    }
}

/// External resources attached to a publication. A badge is rendered only
/// for the fields that are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct Links {
    /// Direct link to the published article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<Url>,
    /// arXiv identifier, e.g. `2101.00001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arxiv: Option<String>,
    /// Filename of a local PDF served under the site's `/pdf/` path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    /// INSPIRE-HEP literature identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspirehep: Option<String>,
}

impl Links {
    pub fn is_empty(&self) -> bool {
        self.journal.is_none()
            && self.arxiv.is_none()
            && self.pdf.is_none()
            && self.inspirehep.is_none()
    }
}

/// An award attached to a publication, rendered as an expandable section
/// with the name as its summary line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Award {
    pub name: String,
    pub description: String,
}

/// Problems found by [`validate_publications`].
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid citation key `{0}`: keys may not be empty or contain whitespace, commas, braces, or quotes")]
    InvalidKey(String),
    #[error("duplicate citation key `{0}`")]
    DuplicateKey(String),
}

/// Whether `key` can be used as a BibTeX citation key.
///
/// Keys are emitted unescaped, so the characters BibTeX reserves are
/// rejected outright.
pub fn is_valid_cite_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| !c.is_whitespace() && !matches!(c, ',' | '{' | '}' | '"' | '\\' | '#' | '%' | '~'))
}

/// Check citation keys across a whole list: each must be valid and unique.
pub fn validate_publications(publications: &[Publication]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for publication in publications {
        if !is_valid_cite_key(&publication.id) {
            return Err(ValidationError::InvalidKey(publication.id.clone()));
        }
        if !seen.insert(publication.id.as_str()) {
            return Err(ValidationError::DuplicateKey(publication.id.clone()));
        }
    }
    Ok(())
}
