/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! BibTeX entry formatting.

use crate::publication::BibEntry;

/// Format one publication as a BibTeX `@article` entry.
///
/// Fields appear in the record's declaration order with the `abstract`
/// field left out. Values are emitted verbatim inside double quotes; a
/// value containing a double quote is the author's problem, exactly as it
/// would be in a hand-written `.bib` file.
///
/// ```
/// use publist_core::bibtex::format_entry;
/// use publist_core::BibEntry;
///
/// let bib = BibEntry {
///     author: "Einstein, A.".to_string(),
///     title: "\"Zur Elektrodynamik bewegter Körper\"".to_string(),
///     year: "1905".to_string(),
///     journal: Some("Annalen der Physik".to_string()),
///     volume: None,
///     number: None,
///     pages: None,
///     doi: None,
///     eprint: None,
///     archiveprefix: None,
///     primaryclass: None,
///     abstract_text: None,
/// };
/// let entry = format_entry("einstein1905", &bib);
/// assert!(entry.starts_with("@article{einstein1905,\n"));
/// assert!(entry.ends_with("\n}"));
/// ```
pub fn format_entry(id: &str, bib: &BibEntry) -> String {
    let mut entry = String::with_capacity(256);
    entry.push_str("@article{");
    entry.push_str(id);
    entry.push_str(",\n");
    let mut first = true;
    for (key, value) in bib.fields() {
        if key == "abstract" {
            continue;
        }
        if !first {
            entry.push_str(",\n");
        }
        first = false;
        entry.push_str("    ");
        entry.push_str(key);
        entry.push_str(" = \"");
        entry.push_str(value);
        entry.push('"');
    }
    entry.push_str("\n}");
    entry
}
