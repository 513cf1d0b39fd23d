//! Merge a bundler's emitted JavaScript and CSS directly into its HTML
//! entry documents, producing a single self-contained file.
//!
//! The crate plugs into a host bundler at two points: a configuration
//! hook run before bundling, which nudges the host's build settings
//! toward inlining-friendly output, and a finalize hook run on the
//! in-memory output set after bundling, which rewrites each HTML
//! document to embed its scripts and stylesheets and then drops the
//! inlined files from the set.
//!
//! ```
//! use singlefile::{Bundle, OutputItem, SingleFile, SingleFileConfig};
//!
//! let plugin = SingleFile::new(SingleFileConfig::default())?;
//!
//! let mut bundle: Bundle = [
//!     (
//!         "index.html",
//!         OutputItem::Asset {
//!             source: r#"<script type="module" src="./app.js"></script>"#.into(),
//!         },
//!     ),
//!     ("app.js", OutputItem::Chunk { code: "console.log(1)".into() }),
//! ]
//! .into_iter()
//! .collect();
//!
//! plugin.finalize(&mut bundle);
//!
//! assert!(!bundle.contains("app.js"));
//! # Ok::<(), anyhow::Error>(())
//! ```

mod bundle;
mod classify;
pub mod config;
mod inline;
mod rewrite;

pub use bundle::{AssetSource, Bundle, OutputItem};
pub use classify::{Classified, classify};
pub use config::{BuildConfig, ConfigAdapter, OutputOptions, SingleFileConfig};
pub use rewrite::{inline_script, inline_style, strip_module_loader};

use anyhow::{Context, Result};

use crate::config::rt::RtcSingleFile;

/// The single-file plugin, holding resolved configuration for one build.
pub struct SingleFile {
    rtc: RtcSingleFile,
}

impl SingleFile {
    /// Resolve `config` into a plugin instance. Fails if an
    /// `inline_pattern` entry is not a valid glob.
    pub fn new(config: SingleFileConfig) -> Result<Self> {
        let rtc = RtcSingleFile::new(config).context("error resolving single-file configuration")?;
        Ok(Self { rtc })
    }

    /// Configuration hook: apply the enabled build-config adapters, in
    /// order, to the host's build settings. Run this before bundling
    /// starts.
    pub fn tune_build_config(&self, config: BuildConfig) -> BuildConfig {
        let mut adapters: Vec<ConfigAdapter> = Vec::new();
        if self.rtc.use_recommended_build_config {
            adapters.push(config::recommended_build_config);
        }
        if self.rtc.exclude_base {
            adapters.push(config::exclude_base);
        }
        adapters.into_iter().fold(config, |cfg, adapt| adapt(cfg))
    }

    /// Finalize hook: run the inlining pass over the output set, after
    /// the bundle is fully resolved but before files are written.
    ///
    /// HTML entries are rewritten in place; inlined assets are removed
    /// from the set unless `delete_inlined_files` is off. Assets that
    /// could not be inlined are reported via `tracing::warn!` and left
    /// untouched.
    pub fn finalize(&self, bundle: &mut Bundle) {
        inline::inline_bundle(&self.rtc, bundle);
    }
}
