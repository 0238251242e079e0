/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The publication list renderer.
//!
//! Output is a semantic ordered list of `<article>` elements with a fixed
//! class contract; all styling lives in the site's stylesheet. Entries are
//! ordered by descending year.

use publist_core::{bibtex, AssetMap, BibEntry, Publication};

use crate::badges::{badge, inspire_badge, ARXIV_ABS_BASE, PDF_BASE};
use crate::error::RenderError;
use crate::html::{details, emph, escape};

/// Display width of preview images, in pixels.
pub const PREVIEW_WIDTH: u32 = 200;

/// Render the whole list as `<ol class="publication-list">`.
///
/// Entries are sorted by descending year, compared as strings; the sort is
/// stable, so equal years keep their input order. `image_base` is the URL
/// prefix preview images are served from.
pub fn render_list(
    publications: &[Publication],
    assets: &AssetMap,
    image_base: &str,
) -> Result<String, RenderError> {
    let mut ordered: Vec<&Publication> = publications.iter().collect();
    ordered.sort_by(|a, b| b.bib.year.cmp(&a.bib.year));

    let mut out = String::with_capacity(publications.len() * 512 + 64);
    out.push_str("<ol class=\"publication-list\">\n");
    for publication in ordered {
        out.push_str(&render_item(publication, assets, image_base)?);
        out.push('\n');
    }
    out.push_str("</ol>\n");
    Ok(out)
}

/// One `<li><article>` block.
///
/// A `preview` that does not resolve aborts the whole render; a dangling
/// image reference is an authoring bug, not a soft fallback.
fn render_item(
    publication: &Publication,
    assets: &AssetMap,
    image_base: &str,
) -> Result<String, RenderError> {
    let bib = &publication.bib;
    let mut item = String::with_capacity(512);
    item.push_str("<li>\n");
    item.push_str(&format!(
        "<article class=\"publication\" id=\"pub-{}\">\n",
        escape(&publication.id)
    ));

    if let Some(asset) = assets.resolve(publication.preview.as_deref())? {
        item.push_str(&format!(
            "<img class=\"preview\" src=\"{}\" alt=\"\" width=\"{}\">\n",
            escape(&asset.href(image_base)),
            PREVIEW_WIDTH
        ));
    }

    item.push_str(&format!("<h3 class=\"title\">{}</h3>\n", escape(bib.display_title())));
    item.push_str(&format!("<p class=\"authors\">{}</p>\n", escape(&bib.author)));
    item.push_str(&format!("<p class=\"venue\">{}</p>\n", venue_line(bib)));

    let badges = badge_row(publication);
    if !badges.is_empty() {
        item.push_str("<p class=\"links\">\n");
        item.push_str(&badges);
        item.push_str("\n</p>\n");
    }

    // Expandable sections keep a fixed order: award, abstract, BibTeX.
    if let Some(award) = &publication.award {
        item.push_str(&details(
            "award",
            &award.name,
            &format!("<p>{}</p>", escape(&award.description)),
        ));
        item.push('\n');
    }
    if let Some(abstract_text) = &bib.abstract_text {
        item.push_str(&details(
            "abstract",
            "Abstract",
            &format!("<p>{}</p>", escape(abstract_text)),
        ));
        item.push('\n');
    }
    if publication.bibtex_show {
        let entry = bibtex::format_entry(&publication.id, bib);
        let body = format!(
            "<pre><code>{}</code></pre>\n<button class=\"bibtex-copy\" type=\"button\" aria-label=\"Copy BibTeX to clipboard\">Copy</button>",
            escape(&entry)
        );
        item.push_str(&details("bibtex", "Cite (BibTeX)", &body));
        item.push('\n');
    }

    item.push_str("</article>\n</li>");
    Ok(item)
}

/// Journal (italicized, only when present) followed by the year.
fn venue_line(bib: &BibEntry) -> String {
    match &bib.journal {
        Some(journal) => format!("{} {}", emph(journal), escape(&bib.year)),
        None => escape(&bib.year),
    }
}

/// The badge row. Each badge appears only when its source field is set;
/// the row itself is omitted when empty.
fn badge_row(publication: &Publication) -> String {
    let links = &publication.links;
    let mut row = Vec::new();
    if let Some(journal) = &links.journal {
        row.push(badge("JOURNAL", journal.as_str()));
    }
    if let Some(arxiv_id) = &links.arxiv {
        row.push(badge("ARXIV", &format!("{ARXIV_ABS_BASE}/{arxiv_id}")));
    }
    if let Some(pdf) = &links.pdf {
        row.push(badge("PDF", &format!("{PDF_BASE}/{pdf}")));
    }
    if let Some(inspire_id) = &links.inspirehep {
        row.push(inspire_badge(inspire_id, None));
    }
    row.join("\n")
}
