/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML rendering for a publication list.
//!
//! The pipeline is: load the list, scan the assets directory, render the
//! ordered list, wrap it in a page, and (optionally) patch citation
//! counts into the INSPIRE badges afterwards.
//!
//! ```
//! use publist_core::{AssetMap, BibEntry, Links, Publication};
//! use publist_render::{render_list, render_page};
//!
//! let publication = Publication {
//!     id: "einstein1905".to_string(),
//!     bib: BibEntry {
//!         author: "Einstein, A.".to_string(),
//!         title: "\"Zur Elektrodynamik bewegter Körper\"".to_string(),
//!         year: "1905".to_string(),
//!         journal: Some("Annalen der Physik".to_string()),
//!         volume: None,
//!         number: None,
//!         pages: None,
//!         doi: None,
//!         eprint: None,
//!         archiveprefix: None,
//!         primaryclass: None,
//!         abstract_text: None,
//!     },
//!     preview: None,
//!     links: Links::default(),
//!     bibtex_show: true,
//!     award: None,
//! };
//!
//! let assets = AssetMap::default();
//! let list = render_list(&[publication], &assets, "/assets/publications")?;
//! let page = render_page("Publications", &list);
//! assert!(page.contains("Zur Elektrodynamik bewegter Körper"));
//! # Ok::<(), publist_render::RenderError>(())
//! ```

pub mod badges;
pub mod enrich;
pub mod error;
pub mod html;
pub mod io;
pub mod list;
pub mod page;

pub use enrich::{apply_citation_counts, inspire_ids, CitationCounts};
pub use error::RenderError;
pub use io::load_publications;
pub use list::{render_list, PREVIEW_WIDTH};
pub use page::render_page;
