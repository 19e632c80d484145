//! Integration tests for the init workflow against a fake installed package

mod common;

use common::{TestConfig, Workspace};
use omnira_scaffold::{
    run, CopyOutcome, InitReport, LinePrompter, PresetTable, Reporter, ScriptKind, WriteOutcome,
};
use std::io::Cursor;

async fn run_with_input(ws: &Workspace, input: &str) -> (InitReport, String) {
    let presets = PresetTable::builtin().unwrap();
    let mut prompter = LinePrompter::new(Cursor::new(input.to_string()), Vec::new());
    let mut reporter = Reporter::new(Vec::new(), false);
    let report = run(&TestConfig, &ws.args(), &presets, &mut prompter, &mut reporter)
        .await
        .expect("init should succeed");
    let output = String::from_utf8(reporter.into_inner()).unwrap();
    (report, output)
}

#[tokio::test]
async fn test_copies_bundle_and_generates_files() {
    let ws = Workspace::with_bundle();
    ws.project_file("tsconfig.json", "{}");

    let (report, output) = run_with_input(&ws, "dashboard\nblue\nlight\n").await;

    assert_eq!(report.kind, ScriptKind::TypeScript);
    assert_eq!(report.components, CopyOutcome::Copied(3));
    assert!(report
        .lib_files
        .iter()
        .all(|(_, outcome)| *outcome == CopyOutcome::Copied(1)));
    assert_eq!(report.globals, CopyOutcome::Copied(1));
    assert_eq!(report.provider, WriteOutcome::Written);

    assert_eq!(
        ws.read_project_file("components/ui/tag/tag.tsx"),
        "export function Tag() {}"
    );
    assert!(ws.project().join("lib/theme-context.tsx").is_file());
    assert!(ws.project().join("app/globals.css").is_file());

    let config = ws.read_project_file("omnira.config.ts");
    assert!(config.contains("// Project: dashboard\n"));
    assert!(config.contains("// Accent: blue\n"));
    assert!(config.contains("// Theme: light-first\n"));

    let css = ws.read_project_file("omnira-overrides.css");
    assert_eq!(css.matches("[data-theme=").count(), 2);

    let provider = ws.read_project_file("app/providers.tsx");
    assert!(provider.contains("defaultTheme=\"light\""));

    assert!(output.contains("  ✓ components/ui (3 files)"));
    assert!(output.contains("  1.  Wrap the app in <Providers>"));
    assert!(output.contains("  2.  Import omnira-overrides.css"));
}

#[tokio::test]
async fn test_missing_bundle_is_not_fatal() {
    let ws = Workspace::new();

    let (report, output) = run_with_input(&ws, "\n\n\n").await;

    assert_eq!(report.components, CopyOutcome::NotFound);
    assert_eq!(report.globals, CopyOutcome::NotFound);
    assert!(report
        .lib_files
        .iter()
        .all(|(_, outcome)| *outcome == CopyOutcome::NotFound));
    assert!(!ws.project().join("components").exists());

    assert!(output.contains("! Bundled components not found"));
    assert!(output.contains("✗ lib/cn.ts (not found in package)"));

    // Generated files are still written
    assert!(ws.project().join("omnira.config.js").is_file());
    assert!(ws.project().join("omnira-overrides.css").is_file());
    assert!(ws.project().join("app/providers.jsx").is_file());

    // Default accent: no overrides instruction
    assert!(!output.contains("Import omnira-overrides.css"));
}

#[tokio::test]
async fn test_rerun_keeps_provider_but_rewrites_generated_files() {
    let ws = Workspace::with_bundle();
    ws.project_file("tsconfig.json", "{}");

    let (first, _) = run_with_input(&ws, "site\n3\n1\n").await;
    assert_eq!(first.provider, WriteOutcome::Written);
    assert!(ws.read_project_file("omnira.config.ts").contains("Accent: cyan"));

    ws.project_file("app/providers.tsx", "// hand edited\n");

    let (second, output) = run_with_input(&ws, "site\nrose\n2\n").await;
    assert_eq!(second.provider, WriteOutcome::Skipped);
    assert_eq!(ws.read_project_file("app/providers.tsx"), "// hand edited\n");
    assert!(output.contains("~ app/providers.tsx already exists, left untouched"));

    let config = ws.read_project_file("omnira.config.ts");
    assert!(config.contains("Accent: rose"));
    assert!(config.contains("Theme: light-first"));
    assert!(ws
        .read_project_file("omnira-overrides.css")
        .contains("--accent: #f43f5e;"));
}

#[tokio::test]
async fn test_switching_back_to_default_clears_overrides() {
    let ws = Workspace::with_bundle();

    run_with_input(&ws, "site\namber\n\n").await;
    assert!(ws.read_project_file("omnira-overrides.css").contains("data-theme"));

    run_with_input(&ws, "site\n1\n\n").await;
    assert!(!ws.read_project_file("omnira-overrides.css").contains("data-theme"));
}
