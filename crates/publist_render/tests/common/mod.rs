/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use publist_core::{Award, BibEntry, Links, Publication};

/// A minimal publication with the given key and year.
pub fn make_publication(id: &str, year: &str) -> Publication {
    Publication {
        id: id.to_string(),
        bib: make_bib("Doe, J.", "\"Some Title\"", year),
        preview: None,
        links: Links::default(),
        bibtex_show: false,
        award: None,
    }
}

pub fn make_bib(author: &str, title: &str, year: &str) -> BibEntry {
    BibEntry {
        author: author.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        journal: None,
        volume: None,
        number: None,
        pages: None,
        doi: None,
        eprint: None,
        archiveprefix: None,
        primaryclass: None,
        abstract_text: None,
    }
}

pub fn with_journal(mut publication: Publication, journal: &str) -> Publication {
    publication.bib.journal = Some(journal.to_string());
    publication
}

pub fn with_abstract(mut publication: Publication, text: &str) -> Publication {
    publication.bib.abstract_text = Some(text.to_string());
    publication
}

pub fn with_award(mut publication: Publication, name: &str, description: &str) -> Publication {
    publication.award = Some(Award {
        name: name.to_string(),
        description: description.to_string(),
    });
    publication
}

pub fn with_arxiv(mut publication: Publication, arxiv_id: &str) -> Publication {
    publication.links.arxiv = Some(arxiv_id.to_string());
    publication
}

pub fn with_inspire(mut publication: Publication, inspire_id: &str) -> Publication {
    publication.links.inspirehep = Some(inspire_id.to_string());
    publication
}
