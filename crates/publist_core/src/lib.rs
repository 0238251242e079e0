/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core types for a publication list: the publication record as authored
//! by the site owner, BibTeX entry formatting, and resolution of preview
//! images against a scanned assets directory.
//!
//! Rendering and network enrichment live in their own crates; everything
//! here is pure data and filesystem lookup.

pub mod assets;
pub mod bibtex;
pub mod publication;

pub use assets::{AssetError, AssetMap, ImageAsset};
pub use publication::{Award, BibEntry, Links, Publication, ValidationError};
