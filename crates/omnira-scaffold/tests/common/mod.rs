//! Common test utilities and helpers
//!
//! Builds a fake installed package (bundled sources) next to a target project.

#![allow(dead_code)]

use omnira_scaffold::{InitArgs, PresetTable, ProductConfig, ScaffoldChoice, ScriptKind};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Product configuration used by the integration tests
#[derive(Clone)]
pub struct TestConfig;

impl ProductConfig for TestConfig {
    fn name(&self) -> &'static str {
        "omnira-ui"
    }

    fn display_name(&self) -> &'static str {
        "Omnira UI"
    }

    fn package_root_env(&self) -> &'static str {
        "OMNIRA_TEST_PACKAGE_ROOT_UNSET"
    }

    fn docs_url(&self) -> &'static str {
        "https://example.invalid/docs"
    }

    fn cli_description(&self) -> &'static str {
        "test"
    }

    fn next_steps(
        &self,
        choice: &ScaffoldChoice,
        presets: &PresetTable,
        _kind: ScriptKind,
    ) -> Vec<String> {
        let mut steps = vec!["Wrap the app in <Providers>".to_string()];
        if !presets.is_default(&choice.color_key) {
            steps.push("Import omnira-overrides.css".to_string());
        }
        steps
    }
}

/// Temporary package + project pair
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let ws = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        std::fs::create_dir_all(ws.project()).expect("Failed to create project directory");
        ws
    }

    /// Workspace whose package contains a small bundled tree
    pub fn with_bundle() -> Self {
        let ws = Self::new();
        ws.package_file("components/ui/button/button.tsx", "export function Button() {}");
        ws.package_file("components/ui/button/button.module.css", ".button {}");
        ws.package_file("components/ui/tag/tag.tsx", "export function Tag() {}");
        ws.package_file("lib/cn.ts", "export const cn = () => \"\";");
        ws.package_file("lib/copy-to-clipboard.ts", "export async function copy() {}");
        ws.package_file("lib/theme-context.tsx", "export function ThemeProvider() {}");
        ws.package_file("app/globals.css", ":root { --accent: #8b5cf6; }");
        ws
    }

    pub fn package(&self) -> PathBuf {
        self.dir.path().join("package")
    }

    pub fn project(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    pub fn package_file(&self, name: &str, content: &str) {
        write(&self.package().join(name), content);
    }

    pub fn project_file(&self, name: &str, content: &str) {
        write(&self.project().join(name), content);
    }

    pub fn read_project_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.project().join(name)).expect("Failed to read file")
    }

    pub fn args(&self) -> InitArgs {
        InitArgs {
            directory: Some(self.project()),
            package_root: Some(self.package()),
            ..InitArgs::default()
        }
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
