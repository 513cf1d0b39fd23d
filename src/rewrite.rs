//! Targeted markup rewriting.
//!
//! These routines operate on the narrow tag shapes the upstream bundler
//! is known to emit: single-line tags with double-quoted attributes and
//! one reference per asset per document. When a pattern does not match,
//! the document is returned unchanged; nothing here raises an error.

use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};

/// Token the bundler leaves in generated code where a dynamic-import
/// preload list would be filled in. Meaningless once everything lives in
/// one document.
const PRELOAD_MARKER: &str = "\"__VITE_PRELOAD__\"";

/// The bundler's module-loader bootstrap: a `<script type="module"
/// crossorigin>` tag immediately followed by an IIFE that is anonymous
/// or named `polyfill`.
static MODULE_LOADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(<script type="module" crossorigin>\s*)\(function(?: polyfill)?\(\)\s*\{[\s\S]*?\}\)\(\);"#,
    )
    .expect("invalid module loader pattern")
});

/// Pattern for the `<script>` tag referencing `file_name`, tolerating a
/// relative-path prefix of dots and slashes. Captures the attribute text
/// before and after the `src` attribute.
fn script_tag(file_name: &str) -> Regex {
    Regex::new(&format!(
        r#"<script([^>]*?) src="[./]*{}"([^>]*)></script>"#,
        regex::escape(file_name)
    ))
    .expect("tag pattern is built from an escaped literal")
}

/// Pattern for the `<link>` tag referencing `file_name`, self-closing or
/// not, with the same relative-path tolerance.
fn link_tag(file_name: &str) -> Regex {
    Regex::new(&format!(
        r#"<link[^>]*? href="[./]*{}"[^>]*?>"#,
        regex::escape(file_name)
    ))
    .expect("tag pattern is built from an escaped literal")
}

/// Replace the `<script src="...">` tag referencing `file_name` with an
/// inline script carrying `code`, keeping all other tag attributes.
///
/// Preload markers in `code` are scrubbed to `void 0` before insertion.
/// Only the first matching tag is rewritten; bundlers emit a single
/// reference per asset per document. Returns the rewritten document and
/// whether a tag matched.
pub fn inline_script(html: &str, file_name: &str, code: &str) -> (String, bool) {
    let code = code.replace(PRELOAD_MARKER, "void 0");
    let mut matched = false;
    let rewritten = script_tag(file_name).replace(html, |caps: &Captures<'_>| {
        matched = true;
        format!("<script{}{}>\n{}\n</script>", &caps[1], &caps[2], code)
    });
    (rewritten.into_owned(), matched)
}

/// Replace the `<link href="...">` tag referencing `file_name` with a
/// `<style>` block wrapping `css` verbatim.
///
/// Same first-match-only policy as [`inline_script`]. Returns the
/// rewritten document and whether a tag matched.
pub fn inline_style(html: &str, file_name: &str, css: &str) -> (String, bool) {
    let tag = link_tag(file_name);
    if !tag.is_match(html) {
        return (html.to_owned(), false);
    }
    let block = format!("<style>\n{}\n</style>", css);
    (tag.replace(html, NoExpand(&block)).into_owned(), true)
}

/// Best-effort removal of the bundler's module-loader bootstrap, which
/// is dead weight once all scripts are inline.
///
/// Preconditions: the loader is the first declaration in its script
/// block, it is an IIFE that is anonymous or named `polyfill`, and the
/// script tag reads exactly `<script type="module" crossorigin>`. If any
/// of that does not hold the document is returned byte-for-byte
/// unchanged; the tag is left open (as `<script type="module">`) so code
/// inlined after it still executes.
pub fn strip_module_loader(html: &str) -> String {
    MODULE_LOADER
        .replace(html, "<script type=\"module\">\n")
        .into_owned()
}
