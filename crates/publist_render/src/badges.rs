/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Link badges for the row under each publication.
//!
//! The INSPIRE badge exists in two variants built from one template: the
//! default one rendered into the page, and a count-bearing one that the
//! enrichment pass substitutes in. Both always come from
//! [`inspire_badge`], so substitution is an exact markup replacement.

use crate::html::escape;

/// arXiv abstract pages. Kept on plain http; arxiv.org redirects, and the
/// site has linked this form for years.
pub const ARXIV_ABS_BASE: &str = "http://arxiv.org/abs";

/// Site-relative path PDFs are served from.
pub const PDF_BASE: &str = "/pdf";

/// INSPIRE literature record pages.
pub const INSPIRE_LITERATURE_BASE: &str = "https://inspirehep.net/literature";

/// Static badge service, label-message-color form.
const BADGE_SERVICE: &str = "https://img.shields.io/badge";

/// A plain text badge linking to `href`.
pub fn badge(label: &str, href: &str) -> String {
    format!("<a class=\"badge\" href=\"{}\">{}</a>", escape(href), escape(label))
}

/// The INSPIRE badge for a record, with or without a citation count.
///
/// The record id rides along as `data-inspire-id`; the accessible label
/// and the badge image both carry the count once one is known.
pub fn inspire_badge(id: &str, count: Option<i64>) -> String {
    let label = match count {
        Some(count) => format!("INSPIRE HEP ({count} citations)"),
        None => "INSPIRE HEP".to_string(),
    };
    format!(
        "<a class=\"badge inspire\" href=\"{}/{}\" data-inspire-id=\"{}\" aria-label=\"{}\"><img src=\"{}\" alt=\"{}\"></a>",
        INSPIRE_LITERATURE_BASE,
        escape(id),
        escape(id),
        escape(&label),
        badge_image_url(count),
        escape(&label)
    )
}

/// Badge-service URL for the INSPIRE badge image.
pub fn badge_image_url(count: Option<i64>) -> String {
    match count {
        Some(count) => format!("{BADGE_SERVICE}/INSPIRE-{count}%20citations-306cc7"),
        None => format!("{BADGE_SERVICE}/INSPIRE-cite-306cc7"),
    }
}
