//! Where bundled sources live and where they land in the project

use std::path::{Path, PathBuf};

/// Bundled component tree, relative to the package root
const COMPONENTS_DIR: &str = "components/ui";

/// Global design-token stylesheet, relative to both roots
const GLOBALS_CSS: &str = "app/globals.css";

/// Library helpers copied verbatim, relative to both roots
const LIB_FILES: &[&str] = &["lib/cn.ts", "lib/copy-to-clipboard.ts", "lib/theme-context.tsx"];

/// One library helper to copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibFile {
    pub name: &'static str,
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Source/destination pairs for one scaffold run
#[derive(Debug, Clone)]
pub struct BundleLayout {
    package_root: PathBuf,
    project_dir: PathBuf,
}

impl BundleLayout {
    pub fn new(package_root: impl Into<PathBuf>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            package_root: package_root.into(),
            project_dir: project_dir.into(),
        }
    }

    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn components_source(&self) -> PathBuf {
        self.package_root.join(COMPONENTS_DIR)
    }

    pub fn components_dest(&self) -> PathBuf {
        self.project_dir.join(COMPONENTS_DIR)
    }

    pub fn lib_files(&self) -> Vec<LibFile> {
        LIB_FILES
            .iter()
            .map(|&name| LibFile {
                name,
                source: self.package_root.join(name),
                dest: self.project_dir.join(name),
            })
            .collect()
    }

    pub fn globals_source(&self) -> PathBuf {
        self.package_root.join(GLOBALS_CSS)
    }

    pub fn globals_dest(&self) -> PathBuf {
        self.project_dir.join(GLOBALS_CSS)
    }

    /// Path of a generated file in the project
    pub fn project_file(&self, relative: &str) -> PathBuf {
        self.project_dir.join(relative)
    }
}

/// Locate the directory holding the bundled sources.
///
/// Precedence: explicit path, then `env_var`, then the closest ancestor of the
/// running executable that contains `components/ui`, then the executable's
/// parent directory.
pub fn resolve_package_root(explicit: Option<&Path>, env_var: &str) -> PathBuf {
    if let Some(path) = explicit {
        tracing::debug!(root = %path.display(), "package root from flag");
        return path.to_path_buf();
    }

    if let Some(value) = std::env::var_os(env_var).filter(|v| !v.is_empty()) {
        let path = PathBuf::from(value);
        tracing::debug!(root = %path.display(), env = env_var, "package root from environment");
        return path;
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let root = find_bundle_ancestor(&exe_dir).unwrap_or_else(|| {
        exe_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| exe_dir.clone())
    });
    tracing::debug!(root = %root.display(), "package root from executable location");
    root
}

fn find_bundle_ancestor(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(COMPONENTS_DIR).is_dir())
        .map(Path::to_path_buf)
}
