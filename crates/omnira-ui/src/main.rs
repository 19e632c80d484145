//! Omnira UI CLI - Copies Omnira UI components into a Next.js project

use anyhow::Result;
use clap::{Parser, Subcommand};
use omnira_scaffold::init::{self, InitArgs};
use omnira_scaffold::tui::{restore_cursor, ClackPrompter};
use omnira_scaffold::{
    LinePrompter, PresetTable, ProductConfig, PromptError, Reporter, ScaffoldChoice, ScriptKind,
};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Omnira UI product configuration
#[derive(Clone)]
pub struct OmniraConfig;

impl ProductConfig for OmniraConfig {
    fn name(&self) -> &'static str {
        "omnira-ui"
    }

    fn display_name(&self) -> &'static str {
        "Omnira UI"
    }

    fn package_root_env(&self) -> &'static str {
        "OMNIRA_PACKAGE_ROOT"
    }

    fn docs_url(&self) -> &'static str {
        "https://omnira-ui.dev/docs"
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold Omnira UI components, tokens and theme setup into your project"
    }

    fn next_steps(
        &self,
        choice: &ScaffoldChoice,
        presets: &PresetTable,
        kind: ScriptKind,
    ) -> Vec<String> {
        let ext = kind.component_ext();
        let mut steps = Vec::new();

        // Step 1: Provider
        steps.push(format!(
            "Wrap your app in <Providers> (app/providers.{ext}) inside app/layout.{ext}"
        ));

        // Step 2: Design tokens
        steps.push("Import the design tokens in app/layout: import \"./globals.css\";".to_string());

        // Step 3: Accent overrides, only when they carry anything
        if !presets.is_default(&choice.color_key) {
            steps.push(
                "Import the accent overrides after globals.css: import \"../omnira-overrides.css\";"
                    .to_string(),
            );
        }

        // Step 4: Use components
        steps.push(
            "Use a component: import { Button } from \"@/components/ui/button\";".to_string(),
        );

        // Step 5: Theme
        steps.push(format!(
            "The app starts in {} mode; switch at runtime with useTheme() from @/lib/theme-context",
            choice.theme_mode.provider_default()
        ));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "omnira-ui")]
#[command(about = "Scaffold Omnira UI components, tokens and theme setup into your project")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy components and generate config in the current project
    Init(InitArgs),
    /// List the available accent color presets
    Presets(PresetsArgs),
}

#[derive(Parser, Debug)]
pub struct PresetsArgs {
    /// YAML preset table to list instead of the built-in one
    #[arg(long)]
    pub presets: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_cursor();
        default_panic(info);
    }));

    // Ctrl+C ends the run immediately; files already written stay in place
    ctrlc::set_handler(move || {
        restore_cursor();
        std::process::exit(130);
    })
    .ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = OmniraConfig;

    let result = match args.command {
        Some(Command::Init(init_args)) => run_init(&config, init_args).await,
        Some(Command::Presets(presets_args)) => list_presets(&presets_args),
        // No subcommand provided, default to init (interactive mode)
        None => run_init(&config, InitArgs::default()).await,
    };

    if let Err(err) = result {
        restore_cursor();
        eprintln!("error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

/// 130 when the operator cancelled a prompt, 1 for every other failure
fn exit_code(err: &anyhow::Error) -> i32 {
    let cancelled = err
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<PromptError>(), Some(PromptError::Interrupted)));
    if cancelled {
        130
    } else {
        1
    }
}

async fn run_init(config: &OmniraConfig, args: InitArgs) -> Result<()> {
    let presets = init::load_presets(args.presets.as_deref())?;
    let color = !args.no_color && std::io::stdout().is_terminal();
    let mut reporter = Reporter::new(std::io::stdout(), color);

    let result = if std::io::stdin().is_terminal() && !args.yes {
        let mut prompter = ClackPrompter::new();
        init::run(config, &args, &presets, &mut prompter, &mut reporter).await
    } else {
        let mut prompter = LinePrompter::new(std::io::stdin().lock(), std::io::stdout());
        init::run(config, &args, &presets, &mut prompter, &mut reporter).await
    };

    // Ensure cursor is visible on normal exit
    restore_cursor();

    result.map(|_| ())
}

fn list_presets(args: &PresetsArgs) -> Result<()> {
    let presets = init::load_presets(args.presets.as_deref())?;

    println!();
    println!("  Accent color presets");
    println!();
    for item in presets.menu_items() {
        println!("    {}", item);
    }
    println!();
    println!("  Pass a number or name to `omnira-ui init --color <value>`");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnira_scaffold::ThemeMode;

    #[test]
    fn test_next_steps_skip_overrides_for_default_accent() {
        let presets = PresetTable::builtin().unwrap();
        let choice = ScaffoldChoice::new("my-app", "violet", ThemeMode::DarkFirst);
        let steps = OmniraConfig.next_steps(&choice, &presets, ScriptKind::TypeScript);

        assert!(!steps.iter().any(|s| s.contains("omnira-overrides.css")));
        assert!(steps[0].contains("app/providers.tsx"));
        assert!(steps.last().unwrap().contains("dark mode"));
    }

    #[test]
    fn test_next_steps_include_overrides_for_custom_accent() {
        let presets = PresetTable::builtin().unwrap();
        let choice = ScaffoldChoice::new("my-app", "rose", ThemeMode::LightFirst);
        let steps = OmniraConfig.next_steps(&choice, &presets, ScriptKind::JavaScript);

        assert!(steps.iter().any(|s| s.contains("omnira-overrides.css")));
        assert!(steps[0].contains("app/providers.jsx"));
        assert!(steps.last().unwrap().contains("light mode"));
    }

    #[test]
    fn test_args_parse_init_flags() {
        let args = Args::try_parse_from([
            "omnira-ui", "init", "--name", "shop", "--color", "2", "--theme", "light", "--yes",
        ])
        .unwrap();

        match args.command {
            Some(Command::Init(init)) => {
                assert_eq!(init.name.as_deref(), Some("shop"));
                assert_eq!(init.color.as_deref(), Some("2"));
                assert!(init.yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_banner_uses_display_name() {
        assert_eq!(OmniraConfig.banner(), "Omnira UI - project setup");
    }

    #[test]
    fn test_exit_code_for_cancelled_prompt() {
        let cancelled = anyhow::Error::from(PromptError::Interrupted).context("Init failed");
        assert_eq!(exit_code(&cancelled), 130);

        let closed = anyhow::Error::from(PromptError::InputClosed {
            question: "Theme".to_string(),
        });
        assert_eq!(exit_code(&closed), 1);
        assert_eq!(exit_code(&anyhow::anyhow!("disk full")), 1);
    }

    #[test]
    fn test_args_default_to_no_subcommand() {
        let args = Args::try_parse_from(["omnira-ui"]).unwrap();
        assert!(args.command.is_none());
    }
}
