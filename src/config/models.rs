//! The user-facing configuration model.

use schemars::JsonSchema;
use serde::Deserialize;

/// Options recognized by the single-file plugin.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SingleFileConfig {
    /// Adjust the host's build settings so the bundle is
    /// inlining-friendly: unlimited inline thresholds, a single CSS
    /// file, dynamic imports merged into the entry chunk. [default: true]
    #[serde(default = "default_true", alias = "useRecommendedBuildConfig")]
    pub use_recommended_build_config: bool,

    /// Clear any configured sub-path base prefix; path prefixing is
    /// meaningless once nothing is served as a separate file.
    /// [default: true]
    #[serde(default = "default_true", alias = "excludeBase")]
    pub exclude_base: bool,

    /// Strip the bundler's module-loader bootstrap from inlined
    /// documents. Safe to enable since all JS ends up inline; applied
    /// best-effort and never corrupts output. [default: false]
    #[serde(default, alias = "removeViteModuleLoader")]
    pub remove_module_loader: bool,

    /// Only inline assets whose filename matches one of these glob
    /// patterns. Empty means all assets are eligible. [default: []]
    #[serde(default, alias = "inlinePattern")]
    pub inline_pattern: Vec<String>,

    /// Remove inlined assets from the output set so they are never
    /// written to disk. [default: true]
    #[serde(default = "default_true", alias = "deleteInlinedFiles")]
    pub delete_inlined_files: bool,
}

impl Default for SingleFileConfig {
    fn default() -> Self {
        Self {
            use_recommended_build_config: true,
            exclude_base: true,
            remove_module_loader: false,
            inline_pattern: Vec::new(),
            delete_inlined_files: true,
        }
    }
}

const fn default_true() -> bool {
    true
}
