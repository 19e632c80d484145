//! Generated project files
//!
//! Every generator is a pure function of the scaffold choice: the same choice
//! always yields byte-identical text.

mod config;
mod overrides;
mod provider;

pub use config::{config_file, config_file_name};
pub use overrides::{overrides_stylesheet, OVERRIDES_FILE};
pub use provider::{provider_file, provider_file_name};

/// First line of every generated file's header
const GENERATED_BY: &str = "Generated by omnira-ui init";

/// Quote a string as a JavaScript string literal
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}
