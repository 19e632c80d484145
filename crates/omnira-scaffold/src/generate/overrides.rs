//! omnira-overrides.css generation

use super::GENERATED_BY;
use crate::choice::ScaffoldChoice;
use crate::error::PresetError;
use crate::presets::PresetTable;
use std::collections::BTreeMap;
use std::fmt::Write;

/// File name of the overrides stylesheet, at the project root
pub const OVERRIDES_FILE: &str = "omnira-overrides.css";

/// Stylesheet replacing the accent design tokens.
///
/// The default accent needs no overrides and gets a comment-only file;
/// any other accent gets one `[data-theme]` block per mode.
pub fn overrides_stylesheet(
    choice: &ScaffoldChoice,
    presets: &PresetTable,
) -> Result<String, PresetError> {
    let preset = presets.require(&choice.color_key)?;
    let mut css = String::new();

    if presets.is_default(&preset.key) {
        let _ = write!(
            css,
            "/* {OVERRIDES_FILE}\n \
             * {GENERATED_BY}.\n \
             *\n \
             * Accent: {} ({}) is the built-in default, no overrides needed.\n \
             */\n",
            preset.key, preset.hex
        );
        return Ok(css);
    }

    let _ = write!(
        css,
        "/* {OVERRIDES_FILE}\n \
         * {GENERATED_BY}.\n \
         *\n \
         * Accent: {} ({})\n \
         * Import after globals.css so these values win.\n \
         */\n",
        preset.key, preset.hex
    );

    css.push('\n');
    write_block(&mut css, "dark", &preset.dark);
    css.push('\n');
    write_block(&mut css, "light", &preset.light);

    Ok(css)
}

fn write_block(css: &mut String, mode: &str, overrides: &BTreeMap<String, String>) {
    let _ = writeln!(css, "[data-theme=\"{}\"] {{", mode);
    for (property, value) in overrides {
        let _ = writeln!(css, "  {}: {};", property, value);
    }
    css.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::ThemeMode;

    fn table() -> PresetTable {
        PresetTable::builtin().unwrap()
    }

    #[test]
    fn test_default_accent_has_no_blocks() {
        let choice = ScaffoldChoice::new("my-app", "violet", ThemeMode::DarkFirst);
        let css = overrides_stylesheet(&choice, &table()).unwrap();

        assert!(!css.contains("data-theme"));
        assert!(!css.contains('{'));
        assert!(css.contains("no overrides needed"));
    }

    #[test]
    fn test_every_other_accent_has_two_complete_blocks() {
        let presets = table();
        for preset in presets.iter().filter(|p| !presets.is_default(&p.key)) {
            let choice = ScaffoldChoice::new("my-app", preset.key.clone(), ThemeMode::DarkFirst);
            let css = overrides_stylesheet(&choice, &presets).unwrap();

            assert_eq!(css.matches("[data-theme=").count(), 2, "{}", preset.key);

            let dark_start = css.find("[data-theme=\"dark\"] {").unwrap();
            let light_start = css.find("[data-theme=\"light\"] {").unwrap();
            assert!(dark_start < light_start);

            let dark_block = &css[dark_start..light_start];
            let light_block = &css[light_start..];
            for (property, value) in &preset.dark {
                assert!(dark_block.contains(&format!("  {}: {};\n", property, value)));
            }
            for (property, value) in &preset.light {
                assert!(light_block.contains(&format!("  {}: {};\n", property, value)));
            }
        }
    }

    #[test]
    fn test_block_layout() {
        let choice = ScaffoldChoice::new("my-app", "blue", ThemeMode::LightFirst);
        let css = overrides_stylesheet(&choice, &table()).unwrap();

        assert!(css.contains(
            "[data-theme=\"dark\"] {\n  --accent: #3b82f6;\n  --accent-glow: rgba(59, 130, 246, 0.45);\n"
        ));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn test_deterministic() {
        let choice = ScaffoldChoice::new("my-app", "emerald", ThemeMode::DarkFirst);
        let presets = table();
        assert_eq!(
            overrides_stylesheet(&choice, &presets).unwrap(),
            overrides_stylesheet(&choice, &presets).unwrap()
        );
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let choice = ScaffoldChoice::new("my-app", "plaid", ThemeMode::DarkFirst);
        assert!(matches!(
            overrides_stylesheet(&choice, &table()),
            Err(PresetError::NotFound { .. })
        ));
    }
}
