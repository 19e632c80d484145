//! omnira.config.* generation

use super::{js_string, GENERATED_BY};
use crate::choice::ScaffoldChoice;
use crate::files::ScriptKind;

/// `omnira.config.ts` or `omnira.config.js`
pub fn config_file_name(kind: ScriptKind) -> String {
    format!("omnira.config.{}", kind.module_ext())
}

/// Module recording the project name, accent and theme
pub fn config_file(choice: &ScaffoldChoice, kind: ScriptKind) -> String {
    let name = config_file_name(kind);
    let suffix = match kind {
        ScriptKind::TypeScript => " as const",
        ScriptKind::JavaScript => "",
    };

    format!(
        "// {name}\n\
         // {GENERATED_BY}. Re-running init overwrites this file.\n\
         //\n\
         // Project: {project}\n\
         // Accent: {accent}\n\
         // Theme: {theme}\n\
         \n\
         const omniraConfig = {{\n\
         \x20 project: {project_lit},\n\
         \x20 accent: {accent_lit},\n\
         \x20 theme: {theme_lit},\n\
         }}{suffix};\n\
         \n\
         export default omniraConfig;\n",
        project = comment_text(&choice.project_name),
        accent = comment_text(&choice.color_key),
        theme = choice.theme_mode,
        project_lit = js_string(&choice.project_name),
        accent_lit = js_string(&choice.color_key),
        theme_lit = js_string(choice.theme_mode.as_str()),
    )
}

/// Keep a value on one comment line
fn comment_text(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
