/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation-count enrichment of a rendered page.
//!
//! Fetching counts is the client crate's job; this module is the pure
//! half: deciding which records need a request at all, and patching the
//! badges afterwards. Each badge moves pending → enriched at most once,
//! and only an exact default badge is ever replaced, so applying a second
//! time is a no-op.

use std::collections::{HashMap, HashSet};

use publist_core::Publication;

use crate::badges::inspire_badge;

/// Citation counts keyed by INSPIRE literature id.
pub type CitationCounts = HashMap<String, i64>;

/// INSPIRE ids referenced by the list, deduplicated, in list order.
///
/// An empty result means the page has no INSPIRE badges and the caller
/// must not issue a network request at all.
pub fn inspire_ids(publications: &[Publication]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for publication in publications {
        if let Some(id) = publication.links.inspirehep.as_deref() {
            if seen.insert(id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Patch INSPIRE badges on a rendered page with live citation counts.
///
/// For every id with a non-negative count, the default badge markup is
/// replaced by its count-bearing variant. Ids with no badge on the page
/// and negative counts leave the page unchanged.
pub fn apply_citation_counts(page: &str, counts: &CitationCounts) -> String {
    let mut patched = page.to_string();
    for (id, &count) in counts {
        if count < 0 {
            continue;
        }
        let pending = inspire_badge(id, None);
        if patched.contains(&pending) {
            patched = patched.replace(&pending, &inspire_badge(id, Some(count)));
        }
    }
    patched
}
