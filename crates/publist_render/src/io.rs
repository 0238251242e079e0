/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Publication list loading.

use std::fs;
use std::path::Path;

use publist_core::Publication;
use serde::Deserialize;

use crate::error::RenderError;

/// A list document may also nest the entries under a `publications` key,
/// which is how the list sits inside a larger site-data file.
#[derive(Deserialize)]
struct PublicationDocument {
    publications: Vec<Publication>,
}

/// Load a publication list from a YAML or JSON file, chosen by extension.
///
/// The document is either a top-level sequence of publications or a
/// mapping with a `publications` key.
pub fn load_publications(path: &Path) -> Result<Vec<Publication>, RenderError> {
    let content = fs::read_to_string(path)
        .map_err(|e| RenderError::Io(path.display().to_string(), e))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "yaml" | "yml" => parse_yaml(&content).map_err(|reason| RenderError::Parse {
            path: path.display().to_string(),
            reason,
        }),
        "json" => parse_json(&content).map_err(|reason| RenderError::Parse {
            path: path.display().to_string(),
            reason,
        }),
        other => Err(RenderError::UnsupportedExtension(other.to_string())),
    }
}

fn parse_yaml(content: &str) -> Result<Vec<Publication>, String> {
    match serde_yaml::from_str::<Vec<Publication>>(content) {
        Ok(publications) => Ok(publications),
        // Report the sequence error: that is the primary shape.
        Err(sequence_err) => serde_yaml::from_str::<PublicationDocument>(content)
            .map(|document| document.publications)
            .map_err(|_| sequence_err.to_string()),
    }
}

fn parse_json(content: &str) -> Result<Vec<Publication>, String> {
    match serde_json::from_str::<Vec<Publication>>(content) {
        Ok(publications) => Ok(publications),
        Err(sequence_err) => serde_json::from_str::<PublicationDocument>(content)
            .map(|document| document.publications)
            .map_err(|_| sequence_err.to_string()),
    }
}
