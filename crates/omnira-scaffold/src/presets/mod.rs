//! Accent color presets
//!
//! The table is plain data: an embedded YAML document parsed and validated once
//! at startup, then only read.

use crate::error::PresetError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// Built-in preset table shipped with the binary
const BUILTIN_PRESETS: &str = include_str!("presets.yaml");

/// A named accent color with its design-token overrides per theme
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorPreset {
    /// Stable lowercase identifier (recorded in omnira.config)
    pub key: String,

    /// Human-readable name shown in the prompt menu
    pub label: String,

    /// Representative color, `#rrggbb`
    pub hex: String,

    /// CSS custom property overrides under `[data-theme="dark"]`
    pub dark: BTreeMap<String, String>,

    /// CSS custom property overrides under `[data-theme="light"]`
    pub light: BTreeMap<String, String>,
}

/// On-disk shape of a preset table document
#[derive(Debug, Deserialize)]
struct PresetDocument {
    default: String,
    presets: Vec<ColorPreset>,
}

/// Validated, ordered preset table
#[derive(Debug, Clone)]
pub struct PresetTable {
    presets: Vec<ColorPreset>,
    default_key: String,
}

impl PresetTable {
    /// Load the table embedded in the binary
    pub fn builtin() -> Result<Self, PresetError> {
        Self::from_yaml_str(BUILTIN_PRESETS)
    }

    /// Parse and validate a preset table document
    pub fn from_yaml_str(content: &str) -> Result<Self, PresetError> {
        let doc: PresetDocument = serde_yaml::from_str(content)?;
        Self::new(doc.presets, doc.default)
    }

    /// Build a table from already-constructed presets
    pub fn new(presets: Vec<ColorPreset>, default_key: String) -> Result<Self, PresetError> {
        if presets.is_empty() {
            return Err(PresetError::Empty);
        }

        let mut seen = HashSet::new();
        for preset in &presets {
            validate_preset(preset)?;
            if !seen.insert(preset.key.as_str()) {
                return Err(PresetError::DuplicateKey {
                    key: preset.key.clone(),
                });
            }
        }

        if !seen.contains(default_key.as_str()) {
            return Err(PresetError::UnknownDefault { key: default_key });
        }

        Ok(Self {
            presets,
            default_key,
        })
    }

    /// Number of presets
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Always false for a validated table
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Presets in menu order
    pub fn iter(&self) -> impl Iterator<Item = &ColorPreset> {
        self.presets.iter()
    }

    /// Look up a preset by exact key
    pub fn get(&self, key: &str) -> Option<&ColorPreset> {
        self.presets.iter().find(|p| p.key == key)
    }

    /// Look up a preset by exact key, failing with [`PresetError::NotFound`]
    pub fn require(&self, key: &str) -> Result<&ColorPreset, PresetError> {
        self.get(key).ok_or_else(|| PresetError::NotFound {
            key: key.to_string(),
        })
    }

    /// Look up a preset by its 1-based menu position
    pub fn by_position(&self, position: usize) -> Option<&ColorPreset> {
        position
            .checked_sub(1)
            .and_then(|index| self.presets.get(index))
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    pub fn default_preset(&self) -> &ColorPreset {
        // Validated in `new`
        self.get(&self.default_key)
            .unwrap_or_else(|| &self.presets[0])
    }

    /// Whether `key` names the built-in default accent
    pub fn is_default(&self, key: &str) -> bool {
        self.default_key == key
    }

    /// Menu lines for the color prompt, e.g. ` 2. Ocean Blue (#3b82f6)`
    pub fn menu_items(&self) -> Vec<String> {
        let width = self.presets.len().to_string().len();
        self.presets
            .iter()
            .enumerate()
            .map(|(idx, preset)| {
                let marker = if self.is_default(&preset.key) {
                    " (default)"
                } else {
                    ""
                };
                format!(
                    "{:>width$}. {} ({}){}",
                    idx + 1,
                    preset.label,
                    preset.hex,
                    marker,
                    width = width
                )
            })
            .collect()
    }
}

fn validate_preset(preset: &ColorPreset) -> Result<(), PresetError> {
    let key_ok = !preset.key.is_empty()
        && preset
            .key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !key_ok {
        return Err(PresetError::InvalidKey {
            key: preset.key.clone(),
        });
    }

    if !is_hex_color(&preset.hex) {
        return Err(PresetError::InvalidHex {
            key: preset.key.clone(),
            hex: preset.hex.clone(),
        });
    }

    for (mode, overrides) in [("dark", &preset.dark), ("light", &preset.light)] {
        if overrides.is_empty() {
            return Err(PresetError::MissingOverrides {
                key: preset.key.clone(),
                mode,
            });
        }
        if let Some(property) = overrides.keys().find(|p| !is_custom_property(p)) {
            return Err(PresetError::InvalidProperty {
                key: preset.key.clone(),
                property: property.clone(),
            });
        }
        if let Some((property, value)) = overrides.iter().find(|(_, v)| !is_declaration_value(v)) {
            return Err(PresetError::InvalidValue {
                key: preset.key.clone(),
                property: property.clone(),
                value: value.clone(),
            });
        }
    }

    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

/// A value that stays inside one `property: value;` declaration
fn is_declaration_value(value: &str) -> bool {
    !value.trim().is_empty()
        && !value
            .chars()
            .any(|c| matches!(c, '{' | '}' | ';') || c.is_control())
}

fn is_custom_property(name: &str) -> bool {
    name.len() > 2
        && name.starts_with("--")
        && name[2..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
