/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Preview image resolution.
//!
//! Cover images live in one assets directory and are referenced from the
//! publication list by bare filename. The directory is scanned once into
//! an [`AssetMap`]; resolution is then a lookup, and a `preview` naming a
//! file that was not scanned is a hard error rather than a silently
//! missing image.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;
use walkdir::WalkDir;

/// File extensions recognized as preview images.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "webp"];

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to scan assets directory `{0}`: {1}")]
    Scan(String, walkdir::Error),
    #[error("ambiguous asset filename `{name}`: found at `{first}` and `{second}`")]
    Duplicate {
        name: String,
        first: String,
        second: String,
    },
    #[error("no asset named `{0}` in the assets directory")]
    MissingPreview(String),
}

/// A known image file under the assets directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    /// Bare filename, the key `preview` fields refer to.
    pub file_name: String,
    /// Location on disk.
    pub path: PathBuf,
}

impl ImageAsset {
    /// Site-relative URL for this image under `image_base`.
    pub fn href(&self, image_base: &str) -> String {
        format!("{}/{}", image_base.trim_end_matches('/'), self.file_name)
    }
}

/// Lookup from preview filenames to scanned image assets.
#[derive(Debug, Default)]
pub struct AssetMap {
    assets: IndexMap<String, ImageAsset>,
}

impl AssetMap {
    /// Walk `dir` and index every file with a recognized image extension.
    /// Other files are ignored.
    ///
    /// Filenames must be unique across the whole tree: a `preview` field
    /// has no way to tell two files of the same name apart, so a collision
    /// fails the scan.
    pub fn scan(dir: &Path) -> Result<Self, AssetError> {
        let mut assets: IndexMap<String, ImageAsset> = IndexMap::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| AssetError::Scan(dir.display().to_string(), e))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if !has_image_extension(&path) {
                continue;
            }
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            if let Some(existing) = assets.get(&name) {
                return Err(AssetError::Duplicate {
                    name,
                    first: existing.path.display().to_string(),
                    second: path.display().to_string(),
                });
            }
            assets.insert(name.clone(), ImageAsset { file_name: name, path });
        }
        Ok(Self { assets })
    }

    /// Resolve an optional `preview` filename.
    ///
    /// `None` means the publication has no cover image. A filename with no
    /// matching asset is an authoring bug and fails hard; rendering must
    /// not quietly drop the image.
    pub fn resolve(&self, preview: Option<&str>) -> Result<Option<&ImageAsset>, AssetError> {
        match preview {
            None => Ok(None),
            Some(name) => match self.assets.get(name) {
                Some(asset) => Ok(Some(asset)),
                None => Err(AssetError::MissingPreview(name.to_string())),
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&ImageAsset> {
        self.assets.get(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Scanned assets in filename order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageAsset> {
        self.assets.values()
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}
