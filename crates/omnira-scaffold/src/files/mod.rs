//! Filesystem side of scaffolding
//!
//! This module provides:
//! - Best-effort copies that tell "source not bundled" apart from real I/O failures
//! - The fixed map of bundled sources to project destinations
//! - Package root resolution and project flavor detection

pub mod copier;
pub mod layout;

use std::path::Path;

pub use copier::{copy_dir_recursive, copy_file, write_file, write_file_if_absent};
pub use layout::{resolve_package_root, BundleLayout, LibFile};

/// Result of a copy whose source may legitimately be absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Number of files copied
    Copied(usize),
    /// Source path does not exist; nothing was touched
    NotFound,
}

impl CopyOutcome {
    pub fn files(&self) -> usize {
        match self {
            CopyOutcome::Copied(n) => *n,
            CopyOutcome::NotFound => 0,
        }
    }
}

/// Result of a guarded write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// Destination already existed and was left untouched
    Skipped,
}

/// Language flavor of the target project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    TypeScript,
    JavaScript,
}

impl ScriptKind {
    /// Projects with a tsconfig.json get TypeScript files
    pub fn detect(project_dir: &Path) -> Self {
        if project_dir.join("tsconfig.json").exists() {
            ScriptKind::TypeScript
        } else {
            ScriptKind::JavaScript
        }
    }

    /// Extension for plain modules
    pub fn module_ext(&self) -> &'static str {
        match self {
            ScriptKind::TypeScript => "ts",
            ScriptKind::JavaScript => "js",
        }
    }

    /// Extension for modules containing JSX
    pub fn component_ext(&self) -> &'static str {
        match self {
            ScriptKind::TypeScript => "tsx",
            ScriptKind::JavaScript => "jsx",
        }
    }
}
