/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;

use common::{make_publication, with_inspire};
use publist_core::AssetMap;
use publist_render::{apply_citation_counts, inspire_ids, render_list, render_page, CitationCounts};

const IMAGE_BASE: &str = "/assets/publications";

fn rendered_page(publications: &[publist_core::Publication]) -> String {
    let list = render_list(publications, &AssetMap::default(), IMAGE_BASE).unwrap();
    render_page("Publications", &list)
}

#[test]
fn matching_badge_gains_label_and_image_count() {
    let publications = vec![with_inspire(make_publication("epr1935", "1935"), "8235")];
    let page = rendered_page(&publications);
    assert!(page.contains("aria-label=\"INSPIRE HEP\""));

    let counts = CitationCounts::from([("8235".to_string(), 42)]);
    let patched = apply_citation_counts(&page, &counts);

    assert!(patched.contains("aria-label=\"INSPIRE HEP (42 citations)\""));
    assert!(patched.contains("https://img.shields.io/badge/INSPIRE-42%20citations-306cc7"));
    assert!(!patched.contains("aria-label=\"INSPIRE HEP\""));
}

#[test]
fn only_the_matching_badge_changes() {
    let publications = vec![
        with_inspire(make_publication("a2020", "2020"), "111"),
        with_inspire(make_publication("b2019", "2019"), "222"),
    ];
    let page = rendered_page(&publications);

    let counts = CitationCounts::from([("111".to_string(), 5)]);
    let patched = apply_citation_counts(&page, &counts);

    assert!(patched.contains("data-inspire-id=\"111\" aria-label=\"INSPIRE HEP (5 citations)\""));
    assert!(patched.contains("data-inspire-id=\"222\" aria-label=\"INSPIRE HEP\""));
}

#[test]
fn failed_enrichment_keeps_the_page_unchanged() {
    // A transport error yields no counts at all; the caller applies
    // nothing and every badge stays pending.
    let publications = vec![with_inspire(make_publication("a2020", "2020"), "111")];
    let page = rendered_page(&publications);

    assert_eq!(apply_citation_counts(&page, &CitationCounts::new()), page);
}

#[test]
fn pages_without_inspire_links_need_no_request() {
    let publications = vec![make_publication("plain2020", "2020")];
    assert!(inspire_ids(&publications).is_empty());

    let page = rendered_page(&publications);
    assert!(!page.contains("data-inspire-id"));
}

#[test]
fn shared_inspire_id_is_requested_once_and_patched_everywhere() {
    let publications = vec![
        with_inspire(make_publication("long2018", "2018"), "333"),
        with_inspire(make_publication("erratum2019", "2019"), "333"),
    ];
    assert_eq!(inspire_ids(&publications), vec!["333"]);

    let page = rendered_page(&publications);
    let counts = CitationCounts::from([("333".to_string(), 9)]);
    let patched = apply_citation_counts(&page, &counts);

    assert_eq!(patched.matches("INSPIRE HEP (9 citations)").count(), 4);
}
