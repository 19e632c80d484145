//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to supply everything product-specific:
//! identity, where the bundled sources can be found, and the closing
//! instructions printed after scaffolding.

use crate::choice::ScaffoldChoice;
use crate::files::ScriptKind;
use crate::presets::PresetTable;

/// Configuration trait for the scaffolding CLI
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable overriding the bundled package location
    fn package_root_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after scaffolding
    fn next_steps(
        &self,
        choice: &ScaffoldChoice,
        presets: &PresetTable,
        kind: ScriptKind,
    ) -> Vec<String>;

    /// Banner printed before the first question
    fn banner(&self) -> String {
        format!("{} - project setup", self.display_name())
    }
}
