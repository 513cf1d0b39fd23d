//! Output classification by filename suffix.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::bundle::Bundle;

/// Matches plain, ES-module and CommonJS script output filenames.
static JS_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[mc]?js$").expect("invalid JS extension pattern"));

pub(crate) fn is_html(file_name: &str) -> bool {
    file_name.ends_with(".html")
}

pub(crate) fn is_css(file_name: &str) -> bool {
    file_name.ends_with(".css")
}

pub(crate) fn is_js(file_name: &str) -> bool {
    JS_EXTENSION.is_match(file_name)
}

/// Bundle filenames partitioned by type, each list in emit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    /// HTML entry documents.
    pub html: Vec<String>,
    /// CSS assets.
    pub css: Vec<String>,
    /// JS chunks.
    pub js: Vec<String>,
}

/// Partition the bundle's filenames into HTML documents, CSS assets and
/// JS chunks. Filenames matching none of the three are left out here;
/// the engine reports them after the pass.
pub fn classify(bundle: &Bundle) -> Classified {
    let mut classified = Classified::default();
    for name in bundle.file_names() {
        if is_html(name) {
            classified.html.push(name.to_owned());
        } else if is_css(name) {
            classified.css.push(name.to_owned());
        } else if is_js(name) {
            classified.js.push(name.to_owned());
        }
    }
    classified
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bundle::OutputItem;
    use rstest::rstest;

    #[rstest]
    #[case("app.js", true)]
    #[case("app.mjs", true)]
    #[case("app.cjs", true)]
    #[case("app.json", false)]
    #[case("app.js.map", false)]
    #[case("js", false)]
    fn js_extension(#[case] file_name: &str, #[case] expected: bool) {
        assert_eq!(is_js(file_name), expected);
    }

    fn sample() -> Bundle {
        [
            ("index.html", OutputItem::Asset { source: "<html>".into() }),
            ("about.html", OutputItem::Asset { source: "<html>".into() }),
            ("app.js", OutputItem::Chunk { code: "1".into() }),
            ("vendor.mjs", OutputItem::Chunk { code: "2".into() }),
            ("app.css", OutputItem::Asset { source: "a{}".into() }),
            ("logo.png", OutputItem::Asset { source: vec![0u8, 1].into() }),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn partitions_in_emit_order() {
        let classified = classify(&sample());
        assert_eq!(classified.html, ["index.html", "about.html"]);
        assert_eq!(classified.css, ["app.css"]);
        assert_eq!(classified.js, ["app.js", "vendor.mjs"]);
    }

    #[test]
    fn classification_is_idempotent() {
        let bundle = sample();
        assert_eq!(classify(&bundle), classify(&bundle));
    }
}
