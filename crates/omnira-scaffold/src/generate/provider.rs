//! app/providers.* generation

use super::GENERATED_BY;
use crate::choice::ScaffoldChoice;
use crate::files::ScriptKind;

/// `app/providers.tsx` or `app/providers.jsx`
pub fn provider_file_name(kind: ScriptKind) -> String {
    format!("app/providers.{}", kind.component_ext())
}

/// Client component wrapping the app in the theme provider
pub fn provider_file(choice: &ScaffoldChoice, kind: ScriptKind) -> String {
    let props = match kind {
        ScriptKind::TypeScript => "{ children }: { children: React.ReactNode }",
        ScriptKind::JavaScript => "{ children }",
    };
    let react_import = match kind {
        ScriptKind::TypeScript => "import type React from \"react\";\n",
        ScriptKind::JavaScript => "",
    };

    format!(
        "\"use client\";\n\
         \n\
         // {GENERATED_BY}. Safe to edit: init never overwrites this file.\n\
         \n\
         {react_import}\
         import {{ ThemeProvider }} from \"@/lib/theme-context\";\n\
         \n\
         export function Providers({props}) {{\n\
         \x20 return <ThemeProvider defaultTheme=\"{mode}\">{{children}}</ThemeProvider>;\n\
         }}\n",
        mode = choice.theme_mode.provider_default(),
    )
}
