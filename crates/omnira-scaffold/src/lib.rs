//! Omnira Scaffold - Shared library behind the `omnira-ui init` command
//!
//! This library copies the bundled Omnira UI sources into a consumer project and
//! generates the few files that record the operator's choices (accent color and
//! theme mode).
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Preset table, pickers, file copying and pure
//!   content generators
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and [`init::run`],
//!   driven through the [`prompt::Prompter`] and [`report::Reporter`] seams
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompter
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use omnira_scaffold::{choice, generate, PresetTable, ScaffoldChoice};
//!
//! let presets = PresetTable::builtin()?;
//! let color = choice::pick_color(&presets, "2");
//! let theme = choice::pick_theme("");
//! let choice = ScaffoldChoice::new("my-app", color.value, theme.value);
//! let css = generate::overrides_stylesheet(&choice, &presets)?;
//! ```

pub mod choice;
pub mod error;
pub mod files;
pub mod generate;
pub mod init;
pub mod presets;
pub mod product;
pub mod prompt;
pub mod report;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use choice::{Picked, ScaffoldChoice, ThemeMode};
pub use error::{PresetError, PromptError};
pub use files::{CopyOutcome, ScriptKind, WriteOutcome};
pub use init::{run, InitArgs, InitReport};
pub use presets::{ColorPreset, PresetTable};
pub use product::ProductConfig;
pub use prompt::{LinePrompter, Prompter};
pub use report::Reporter;

/// Project name used when the operator leaves the question blank
pub const DEFAULT_PROJECT_NAME: &str = "my-app";
