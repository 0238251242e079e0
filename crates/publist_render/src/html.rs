/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Small HTML building blocks shared by the renderer.
//!
//! Every piece of interpolated text goes through [`escape`]; attribute
//! values are always double-quoted, so escaping `"` is enough there.

/// Escape the HTML-significant characters in `text`.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Italicized text, as used for journal names.
pub fn emph(text: &str) -> String {
    format!("<i>{}</i>", escape(text))
}

/// An expandable section: summary line plus a pre-rendered body.
pub fn details(class: &str, summary: &str, body: &str) -> String {
    format!(
        "<details class=\"{class}\">\n<summary>{}</summary>\n{body}\n</details>",
        escape(summary)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a < b & c > \"d\""), "a &lt; b &amp; c &gt; &quot;d&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn escape_is_not_double_applied() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn emph_wraps_and_escapes() {
        assert_eq!(emph("Phys. Rev. <D>"), "<i>Phys. Rev. &lt;D&gt;</i>");
    }

    #[test]
    fn details_escapes_summary_but_not_body() {
        let section = details("abstract", "A & B", "<p>body</p>");
        assert!(section.starts_with("<details class=\"abstract\">"));
        assert!(section.contains("<summary>A &amp; B</summary>"));
        assert!(section.contains("<p>body</p>"));
        assert!(section.ends_with("</details>"));
    }
}
