//! The inlining engine.
//!
//! One pass per build: classify the output set, rewrite each HTML
//! document against every eligible JS and CSS asset, then drop the
//! assets that actually made it into a document.

use crate::bundle::{AssetSource, Bundle, OutputItem};
use crate::classify::{classify, is_css, is_html, is_js};
use crate::config::rt::RtcSingleFile;
use crate::rewrite;

/// Run the full inlining pass over the bundle.
///
/// Documents are processed one at a time, JS assets first, then CSS.
/// A filename joins the deletion set only once a substitution for it
/// matched in some document; an asset that was never inlined anywhere is
/// never deleted. Skipped and unclassified assets are reported through
/// `tracing::warn!` and left untouched.
pub(crate) fn inline_bundle(rtc: &RtcSingleFile, bundle: &mut Bundle) {
    let classified = classify(bundle);
    let mut inlined: Vec<String> = Vec::new();

    for html_name in &classified.html {
        let Some(mut html) = text_asset(bundle, html_name) else {
            continue;
        };

        for js_name in &classified.js {
            if !rtc.eligible(js_name) {
                warn_not_inlined(js_name);
                continue;
            }
            // entries with a JS suffix but no generated code are left alone
            let Some(OutputItem::Chunk { code }) = bundle.get(js_name) else {
                continue;
            };
            let (rewritten, matched) = rewrite::inline_script(&html, js_name, code);
            if matched {
                html = rewritten;
                mark_inlined(&mut inlined, js_name);
            }
        }

        if rtc.remove_module_loader {
            html = rewrite::strip_module_loader(&html);
        }

        for css_name in &classified.css {
            if !rtc.eligible(css_name) {
                warn_not_inlined(css_name);
                continue;
            }
            let Some(css) = text_asset(bundle, css_name) else {
                continue;
            };
            let (rewritten, matched) = rewrite::inline_style(&html, css_name, &css);
            if matched {
                html = rewritten;
                mark_inlined(&mut inlined, css_name);
            }
        }

        tracing::debug!(file = %html_name, "finished inlining document");
        if let Some(OutputItem::Asset { source }) = bundle.get_mut(html_name) {
            *source = AssetSource::Text(html);
        }
    }

    if rtc.delete_inlined_files {
        for name in &inlined {
            bundle.remove(name);
        }
    }

    for name in bundle.file_names() {
        if !is_html(name) && !is_css(name) && !is_js(name) {
            warn_not_inlined(name);
        }
    }
}

/// The textual content of an `Asset` entry, if it is one.
fn text_asset(bundle: &Bundle, file_name: &str) -> Option<String> {
    match bundle.get(file_name)? {
        OutputItem::Asset { source } => source.as_text().map(str::to_owned),
        OutputItem::Chunk { .. } => None,
    }
}

/// Record a successful substitution, once per filename across documents.
fn mark_inlined(inlined: &mut Vec<String>, file_name: &str) {
    if !inlined.iter().any(|name| name == file_name) {
        inlined.push(file_name.to_owned());
    }
}

fn warn_not_inlined(file_name: &str) {
    tracing::warn!(file = %file_name, "asset not inlined");
}
