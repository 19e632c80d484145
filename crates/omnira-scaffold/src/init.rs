//! The `init` workflow: questions, copies, generated files, next steps
//!
//! A single linear pass. Missing bundled sources are reported and skipped;
//! any other I/O failure aborts with context, leaving already-written files
//! in place.

use crate::choice::{self, ScaffoldChoice};
use crate::files::{self, BundleLayout, CopyOutcome, ScriptKind, WriteOutcome};
use crate::generate;
use crate::presets::PresetTable;
use crate::product::ProductConfig;
use crate::prompt::Prompter;
use crate::report::Reporter;
use crate::DEFAULT_PROJECT_NAME;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments for the init command
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Project directory to scaffold into (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Directory containing the bundled Omnira UI sources
    #[arg(long = "package-root")]
    pub package_root: Option<PathBuf>,

    /// Project name (skips the prompt)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Accent color: menu number or color name (skips the prompt)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Theme mode: 1/dark or 2/light (skips the prompt)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// YAML preset table to use instead of the built-in one
    #[arg(long)]
    pub presets: Option<PathBuf>,

    /// Use defaults for every question not answered by a flag (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// What one init run did
#[derive(Debug, Clone)]
pub struct InitReport {
    pub choice: ScaffoldChoice,
    pub kind: ScriptKind,
    pub project_dir: PathBuf,
    pub components: CopyOutcome,
    pub lib_files: Vec<(&'static str, CopyOutcome)>,
    pub globals: CopyOutcome,
    pub config_path: PathBuf,
    pub overrides_path: PathBuf,
    pub provider_path: PathBuf,
    pub provider: WriteOutcome,
    /// Warnings emitted while resolving answers
    pub warnings: Vec<String>,
}

/// Load the preset table named by `--presets`, or the built-in one
pub fn load_presets(path: Option<&Path>) -> Result<PresetTable> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            PresetTable::from_yaml_str(&content)
                .with_context(|| format!("Invalid preset table {}", path.display()))
        }
        None => PresetTable::builtin().context("Built-in preset table is invalid"),
    }
}

/// Run the init workflow
pub async fn run<C, P, W>(
    config: &C,
    args: &InitArgs,
    presets: &PresetTable,
    prompter: &mut P,
    reporter: &mut Reporter<W>,
) -> Result<InitReport>
where
    C: ProductConfig,
    P: Prompter,
    W: Write,
{
    reporter.banner(&config.banner())?;
    reporter.blank()?;

    // Step 1: Questions
    let (choice, warnings) = ask_choice(args, presets, prompter, reporter)?;
    prompter.close()?;

    // Step 2: Summary
    let project_dir = resolve_project_dir(args.directory.as_deref())?;
    let package_root =
        files::resolve_package_root(args.package_root.as_deref(), config.package_root_env());
    let layout = BundleLayout::new(package_root, project_dir.clone());
    let kind = ScriptKind::detect(&project_dir);
    let preset = presets.require(&choice.color_key)?;

    tracing::debug!(
        package_root = %layout.package_root().display(),
        project = %project_dir.display(),
        ?kind,
        "scaffolding"
    );

    reporter.heading("Configuration")?;
    reporter.field("Project", &choice.project_name)?;
    reporter.field("Accent", &format!("{} ({})", preset.key, preset.hex))?;
    reporter.field("Theme", choice.theme_mode.as_str())?;
    reporter.field("Directory", &project_dir.display().to_string())?;

    // Step 3: Bundled sources
    reporter.heading("Copying files")?;
    let components = copy_components(&layout, reporter).await?;
    let lib_files = copy_lib_files(&layout, reporter).await?;
    let globals = copy_globals(&layout, reporter).await?;

    // Step 4: Generated files
    reporter.heading("Generating files")?;
    let config_path = layout.project_file(&generate::config_file_name(kind));
    files::write_file(&config_path, &generate::config_file(&choice, kind))
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    reporter.success(&generate::config_file_name(kind))?;

    let overrides_path = layout.project_file(generate::OVERRIDES_FILE);
    let stylesheet = generate::overrides_stylesheet(&choice, presets)?;
    files::write_file(&overrides_path, &stylesheet)
        .await
        .with_context(|| format!("Failed to write {}", overrides_path.display()))?;
    if presets.is_default(&choice.color_key) {
        reporter.success(&format!(
            "{} (default accent, no overrides)",
            generate::OVERRIDES_FILE
        ))?;
    } else {
        reporter.success(generate::OVERRIDES_FILE)?;
    }

    let provider_name = generate::provider_file_name(kind);
    let provider_path = layout.project_file(&provider_name);
    let provider = files::write_file_if_absent(
        &provider_path,
        &generate::provider_file(&choice, kind),
    )
    .await
    .with_context(|| format!("Failed to write {}", provider_path.display()))?;
    match provider {
        WriteOutcome::Written => reporter.success(&provider_name)?,
        WriteOutcome::Skipped => {
            reporter.skipped(&format!("{} already exists, left untouched", provider_name))?
        }
    }

    // Step 5: Next steps
    print_next_steps(config, &choice, presets, kind, reporter)?;
    reporter.flush()?;

    Ok(InitReport {
        choice,
        kind,
        project_dir,
        components,
        lib_files,
        globals,
        config_path,
        overrides_path,
        provider_path,
        provider,
        warnings,
    })
}

/// Collect the three answers and resolve them
fn ask_choice<P: Prompter, W: Write>(
    args: &InitArgs,
    presets: &PresetTable,
    prompter: &mut P,
    reporter: &mut Reporter<W>,
) -> Result<(ScaffoldChoice, Vec<String>)> {
    let mut warnings = Vec::new();

    let raw_name = match &args.name {
        Some(name) => name.clone(),
        None if args.yes => String::new(),
        None => prompter.ask("Project name", DEFAULT_PROJECT_NAME)?,
    };
    let project_name = choice::pick_project_name(&raw_name);

    let raw_color = match &args.color {
        Some(color) => color.clone(),
        None if args.yes => String::new(),
        None => {
            prompter.menu("Accent colors", &presets.menu_items())?;
            prompter.ask(
                &format!("Accent color (1-{} or name)", presets.len()),
                presets.default_key(),
            )?
        }
    };
    let color = choice::pick_color(presets, &raw_color);
    if let Some(warning) = color.warning {
        reporter.warn(&warning)?;
        warnings.push(warning);
    }

    let raw_theme = match &args.theme {
        Some(theme) => theme.clone(),
        None if args.yes => String::new(),
        None => {
            prompter.menu(
                "Theme mode",
                &["1. Dark first".to_string(), "2. Light first".to_string()],
            )?;
            prompter.ask("Theme (1/dark or 2/light)", "dark")?
        }
    };
    let theme = choice::pick_theme(&raw_theme);
    if let Some(warning) = theme.warning {
        reporter.warn(&warning)?;
        warnings.push(warning);
    }

    Ok((
        ScaffoldChoice::new(project_name, color.value, theme.value),
        warnings,
    ))
}

fn resolve_project_dir(directory: Option<&Path>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    Ok(match directory {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    })
}

async fn copy_components<W: Write>(
    layout: &BundleLayout,
    reporter: &mut Reporter<W>,
) -> Result<CopyOutcome> {
    let source = layout.components_source();
    let outcome = files::copy_dir_recursive(&source, &layout.components_dest())
        .await
        .with_context(|| format!("Failed to copy components from {}", source.display()))?;

    match outcome {
        CopyOutcome::Copied(count) => {
            reporter.success(&format!("components/ui ({} files)", count))?
        }
        CopyOutcome::NotFound => reporter.warn(&format!(
            "Bundled components not found at {}, skipping",
            source.display()
        ))?,
    }
    Ok(outcome)
}

async fn copy_lib_files<W: Write>(
    layout: &BundleLayout,
    reporter: &mut Reporter<W>,
) -> Result<Vec<(&'static str, CopyOutcome)>> {
    let mut outcomes = Vec::new();
    for lib in layout.lib_files() {
        let outcome = files::copy_file(&lib.source, &lib.dest)
            .await
            .with_context(|| format!("Failed to copy {}", lib.source.display()))?;
        match outcome {
            CopyOutcome::Copied(_) => reporter.success(lib.name)?,
            CopyOutcome::NotFound => {
                reporter.failed(&format!("{} (not found in package)", lib.name))?
            }
        }
        outcomes.push((lib.name, outcome));
    }
    Ok(outcomes)
}

async fn copy_globals<W: Write>(
    layout: &BundleLayout,
    reporter: &mut Reporter<W>,
) -> Result<CopyOutcome> {
    let source = layout.globals_source();
    let outcome = files::copy_file(&source, &layout.globals_dest())
        .await
        .with_context(|| format!("Failed to copy {}", source.display()))?;
    match outcome {
        CopyOutcome::Copied(_) => reporter.success("app/globals.css")?,
        CopyOutcome::NotFound => reporter.warn(&format!(
            "Global stylesheet not found at {}, skipping",
            source.display()
        ))?,
    }
    Ok(outcome)
}

fn print_next_steps<C: ProductConfig, W: Write>(
    config: &C,
    choice: &ScaffoldChoice,
    presets: &PresetTable,
    kind: ScriptKind,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let steps = config.next_steps(choice, presets, kind);

    reporter.heading("Next steps")?;
    reporter.blank()?;
    for (i, step) in steps.iter().enumerate() {
        reporter.line(&format!("  {}.  {}", i + 1, step))?;
    }
    reporter.blank()?;
    reporter.line(&format!("  Docs: {}", config.docs_url()))?;

    Ok(())
}
