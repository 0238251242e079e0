/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use publist_core::AssetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("failed to read `{0}`: {1}")]
    Io(String, std::io::Error),
    #[error("failed to parse `{path}`: {reason}")]
    Parse { path: String, reason: String },
    #[error("unsupported input extension `{0}` (expected .yaml, .yml, or .json)")]
    UnsupportedExtension(String),
}
