//! Runtime configuration.
//!
//! [`SingleFileConfig`] is what users write; [`RtcSingleFile`] is what
//! the engine consumes, with the inline patterns compiled once.
//! Malformed patterns fail here, at configuration-resolution time,
//! rather than mid-bundle.

use globset::{Glob, GlobSet, GlobSetBuilder};
use thiserror::Error;

use super::models::SingleFileConfig;

/// Configuration-resolution failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An `inline_pattern` entry is not a valid glob.
    #[error("invalid inline pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    /// The pattern set could not be compiled as a whole.
    #[error("failed to compile inline pattern set: {0}")]
    PatternSet(#[source] globset::Error),
}

/// Runtime form of [`SingleFileConfig`].
#[derive(Debug)]
pub struct RtcSingleFile {
    pub use_recommended_build_config: bool,
    pub exclude_base: bool,
    pub remove_module_loader: bool,
    pub delete_inlined_files: bool,
    /// Compiled `inline_pattern` set; `None` when no patterns were
    /// configured, meaning every asset is eligible.
    matcher: Option<GlobSet>,
}

impl RtcSingleFile {
    /// Compile the user-facing model into its runtime form.
    pub fn new(config: SingleFileConfig) -> Result<Self, ConfigError> {
        let matcher = match config.inline_pattern.is_empty() {
            true => None,
            false => {
                let mut builder = GlobSetBuilder::new();
                for pattern in &config.inline_pattern {
                    let glob = Glob::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })?;
                    builder.add(glob);
                }
                Some(builder.build().map_err(ConfigError::PatternSet)?)
            }
        };

        Ok(Self {
            use_recommended_build_config: config.use_recommended_build_config,
            exclude_base: config.exclude_base,
            remove_module_loader: config.remove_module_loader,
            delete_inlined_files: config.delete_inlined_files,
            matcher,
        })
    }

    /// Whether `file_name` may be inlined under the configured patterns.
    pub fn eligible(&self, file_name: &str) -> bool {
        self.matcher
            .as_ref()
            .is_none_or(|matcher| matcher.is_match(file_name))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_patterns_means_everything_is_eligible() {
        let rtc = RtcSingleFile::new(SingleFileConfig::default()).expect("default config");
        assert!(rtc.eligible("app.js"));
        assert!(rtc.eligible("whatever.bin"));
    }

    #[test]
    fn patterns_restrict_eligibility() {
        let rtc = RtcSingleFile::new(SingleFileConfig {
            inline_pattern: vec!["*.css".into()],
            ..Default::default()
        })
        .expect("config with patterns");

        assert!(rtc.eligible("app.css"));
        assert!(!rtc.eligible("app.js"));
    }

    #[test]
    fn malformed_pattern_fails_fast() {
        let err = RtcSingleFile::new(SingleFileConfig {
            inline_pattern: vec!["a[".into()],
            ..Default::default()
        })
        .expect_err("expected pattern to be rejected");

        assert!(matches!(err, ConfigError::InvalidPattern { pattern, .. } if pattern == "a["));
    }
}
