//! Host build settings and the adapters that make them inlining-friendly.
//!
//! Adapters are pure functions from one [`BuildConfig`] value to an
//! updated one, composed by ordered application. They run once during
//! build-configuration resolution, before any bundling happens.

/// Effectively-unlimited byte threshold.
const UNLIMITED: u64 = 100_000_000;

/// The slice of the host bundler's build configuration this plugin
/// tunes. Defaults mirror a typical host's out-of-the-box settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Assets below this size (bytes) are inlined by the host itself.
    pub assets_inline_limit: u64,
    /// Chunk size (bytes) above which the host warns.
    pub chunk_size_warning_limit: u64,
    /// Emit CSS as one file per chunk instead of a single file.
    pub css_code_split: bool,
    /// Options for each configured output target.
    pub outputs: Vec<OutputOptions>,
    /// Sub-path base prefixed to emitted asset URLs.
    pub base: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            assets_inline_limit: 4096,
            chunk_size_warning_limit: 500_000,
            css_code_split: true,
            outputs: vec![OutputOptions::default()],
            base: None,
        }
    }
}

/// Per-output-target options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Merge dynamically imported modules into the entry chunk instead
    /// of emitting them as separate files.
    pub inline_dynamic_imports: bool,
}

/// A build-config adapter, applied in order during resolution.
pub type ConfigAdapter = fn(BuildConfig) -> BuildConfig;

/// Tune the host's build settings so the bundle can be fully inlined:
/// raise the inline-size and chunk-warning thresholds to effectively
/// unlimited, emit exactly one CSS file, and merge dynamic imports into
/// the entry chunk on every output target.
pub fn recommended_build_config(mut config: BuildConfig) -> BuildConfig {
    config.assets_inline_limit = UNLIMITED;
    config.chunk_size_warning_limit = UNLIMITED;
    config.css_code_split = false;
    if config.outputs.is_empty() {
        config.outputs.push(OutputOptions::default());
    }
    for output in &mut config.outputs {
        output.inline_dynamic_imports = true;
    }
    config
}

/// Clear any configured sub-path base prefix. Nothing is served as a
/// separate file, so there is nothing to prefix.
pub fn exclude_base(mut config: BuildConfig) -> BuildConfig {
    config.base = None;
    config
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn recommended_config_forces_single_inlinable_output() {
        let config = recommended_build_config(BuildConfig::default());

        assert_eq!(config.assets_inline_limit, UNLIMITED);
        assert_eq!(config.chunk_size_warning_limit, UNLIMITED);
        assert!(!config.css_code_split);
        assert_eq!(config.outputs.len(), 1);
        assert!(config.outputs[0].inline_dynamic_imports);
    }

    #[test]
    fn recommended_config_covers_every_output_target() {
        let config = recommended_build_config(BuildConfig {
            outputs: vec![OutputOptions::default(), OutputOptions::default()],
            ..Default::default()
        });

        assert!(config.outputs.iter().all(|o| o.inline_dynamic_imports));
    }

    #[test]
    fn adapters_compose_by_sequential_application() {
        let config = BuildConfig {
            base: Some("/app/".into()),
            ..Default::default()
        };

        let adapters: Vec<ConfigAdapter> = vec![recommended_build_config, exclude_base];
        let config = adapters.into_iter().fold(config, |cfg, adapt| adapt(cfg));

        assert_eq!(config.base, None);
        assert!(!config.css_code_split);
    }
}
