/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Standalone page assembly.

use crate::html::escape;

/// Client-side wiring for the BibTeX copy buttons. Everything else on the
/// page is static; the clipboard is the one thing that cannot be
/// precomputed. The write is fire-and-forget, matching the button's
/// affordance: no confirmation, no error surface.
const COPY_SCRIPT: &str = r#"<script>
document.querySelectorAll(".bibtex-copy").forEach((button) => {
  button.addEventListener("click", () => {
    const code = button.closest("details").querySelector("pre code");
    if (code) {
      navigator.clipboard.writeText(code.textContent);
    }
  });
});
</script>"#;

/// Wrap a rendered publication list in a minimal standalone document.
pub fn render_page(title: &str, list: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <main>\n\
         <h1>{title}</h1>\n\
         {list}</main>\n\
         {script}\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        list = list,
        script = COPY_SCRIPT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_wraps_list_and_script() {
        let page = render_page("Publications", "<ol class=\"publication-list\">\n</ol>\n");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Publications</title>"));
        assert!(page.contains("<ol class=\"publication-list\">"));
        assert!(page.contains("navigator.clipboard.writeText"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn page_title_is_escaped() {
        let page = render_page("Q & A", "");
        assert!(page.contains("<title>Q &amp; A</title>"));
        assert!(page.contains("<h1>Q &amp; A</h1>"));
    }

    #[test]
    fn copy_script_targets_the_button_class() {
        let page = render_page("Publications", "");
        assert!(page.contains(".bibtex-copy"));
    }
}
