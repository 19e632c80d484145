//! Resolution of raw prompt answers into a scaffold choice
//!
//! Every picker here is total: unrecognized input falls back to a default and
//! carries a warning out for the caller to print. Nothing in this module does I/O.

use crate::presets::PresetTable;
use crate::DEFAULT_PROJECT_NAME;
use std::fmt;

/// Which appearance the generated project starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    DarkFirst,
    LightFirst,
}

impl ThemeMode {
    /// Canonical name recorded in omnira.config
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::DarkFirst => "dark-first",
            ThemeMode::LightFirst => "light-first",
        }
    }

    /// `defaultTheme` value handed to the theme provider
    pub fn provider_default(&self) -> &'static str {
        match self {
            ThemeMode::DarkFirst => "dark",
            ThemeMode::LightFirst => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The operator's resolved answers for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldChoice {
    pub project_name: String,
    pub color_key: String,
    pub theme_mode: ThemeMode,
}

impl ScaffoldChoice {
    pub fn new(
        project_name: impl Into<String>,
        color_key: impl Into<String>,
        theme_mode: ThemeMode,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            color_key: color_key.into(),
            theme_mode,
        }
    }
}

/// A resolved value plus the warning emitted while resolving it, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picked<T> {
    pub value: T,
    pub warning: Option<String>,
}

impl<T> Picked<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    fn fallback(value: T, warning: String) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }
}

/// Project name: trimmed answer with control characters turned into spaces,
/// or the default when blank
pub fn pick_project_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let name = cleaned.trim();
    if name.is_empty() {
        DEFAULT_PROJECT_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Resolve an accent color answer against the preset table.
///
/// Order: blank, 1-based menu number, exact key (case-insensitive), prefix of a
/// key or label (first in menu order), then the default with a warning. Numbers
/// outside the menu range are not rejected; they go through the string
/// matching like any other text.
pub fn pick_color(presets: &PresetTable, raw: &str) -> Picked<String> {
    let answer = raw.trim();
    if answer.is_empty() {
        return Picked::clean(presets.default_key().to_string());
    }

    if let Ok(position) = answer.parse::<usize>() {
        if let Some(preset) = presets.by_position(position) {
            return Picked::clean(preset.key.clone());
        }
    }

    let needle = answer.to_lowercase();

    if let Some(preset) = presets.iter().find(|p| p.key.to_lowercase() == needle) {
        return Picked::clean(preset.key.clone());
    }

    if let Some(preset) = presets.iter().find(|p| {
        p.key.to_lowercase().starts_with(&needle) || p.label.to_lowercase().starts_with(&needle)
    }) {
        return Picked::clean(preset.key.clone());
    }

    Picked::fallback(
        presets.default_key().to_string(),
        format!(
            "Unknown color \"{}\" (expected 1-{} or a color name), using {}",
            answer,
            presets.len(),
            presets.default_key()
        ),
    )
}

/// Resolve a theme answer: `1`/`dark...` or `2`/`light...`, blank is dark-first
pub fn pick_theme(raw: &str) -> Picked<ThemeMode> {
    let answer = raw.trim().to_lowercase();

    if answer.is_empty() || answer == "1" || answer.starts_with("dark") {
        return Picked::clean(ThemeMode::DarkFirst);
    }
    if answer == "2" || answer.starts_with("light") {
        return Picked::clean(ThemeMode::LightFirst);
    }

    Picked::fallback(
        ThemeMode::DarkFirst,
        format!(
            "Unknown theme \"{}\" (expected 1/dark or 2/light), using {}",
            raw.trim(),
            ThemeMode::DarkFirst
        ),
    )
}
