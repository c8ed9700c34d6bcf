use std::path::{Path, PathBuf};
use crate::config::DataConfig;
use crate::errors::TestlensError;
use tracing::debug;

/// Names of the immediate subdirectories of `root`, sorted.
///
/// A missing or unreadable root yields an empty list.
pub fn list_projects(root: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(root = %root.display(), error = %e, "Data root not readable");
            return Vec::new();
        }
    };

    let mut projects: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    projects.sort();
    projects
}

/// Files directly inside `project_dir` whose names end in `.<extension>`,
/// sorted by file name. No recursion; a missing directory yields nothing.
pub fn list_build_files(project_dir: &Path, extension: &str) -> Vec<PathBuf> {
    if !project_dir.is_dir() {
        debug!(dir = %project_dir.display(), "Project directory not found");
        return Vec::new();
    }

    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&project_dir.to_string_lossy()),
        glob::Pattern::escape(extension)
    );
    let paths = match glob::glob(&pattern) {
        Ok(paths) => paths,
        Err(e) => {
            debug!(pattern = %pattern, error = %e, "Invalid glob pattern");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = paths
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    files
}

/// Project discovery rooted at the configured data directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    extension: String,
}

impl Catalog {
    pub fn new(config: &DataConfig) -> Self {
        Self {
            root: config.root.clone(),
            extension: config.extension.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn projects(&self) -> Vec<String> {
        list_projects(&self.root)
    }

    /// Directory for `project`. Names must be a single path component.
    pub fn project_dir(&self, project: &str) -> Result<PathBuf, TestlensError> {
        let invalid = project.is_empty()
            || project == "."
            || project == ".."
            || project.contains('/')
            || project.contains('\\');
        if invalid {
            return Err(TestlensError::InvalidProject(format!(
                "'{}' is not a project directory name",
                project
            )));
        }
        Ok(self.root.join(project))
    }

    pub fn build_files(&self, project: &str) -> Result<Vec<PathBuf>, TestlensError> {
        let dir = self.project_dir(project)?;
        Ok(list_build_files(&dir, &self.extension))
    }
}
