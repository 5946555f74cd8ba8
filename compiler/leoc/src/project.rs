//! Project path helpers.
//!
//! A project root is found by name: the first directory component equal to
//! a marker (`leo` by default). Everything here is a pure function of its
//! arguments except [`project_dir`], which reads the working directory.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ProjectPathError {
    #[error("no `{marker}` directory in {}", .path.display())]
    MarkerNotFound { marker: String, path: PathBuf },
    #[error("cannot read the current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

/// Prefix of `path` up to and including the first component named `marker`.
pub fn project_root(path: &Path, marker: &str) -> Result<PathBuf, ProjectPathError> {
    let mut root = PathBuf::new();
    for component in path.components() {
        root.push(component);
        if component.as_os_str() == marker {
            return Ok(root);
        }
    }
    Err(ProjectPathError::MarkerNotFound {
        marker: marker.to_string(),
        path: path.to_path_buf(),
    })
}

/// [`project_root`] of the current working directory.
pub fn project_dir(marker: &str) -> Result<PathBuf, ProjectPathError> {
    let cwd = std::env::current_dir().map_err(ProjectPathError::CurrentDir)?;
    let root = project_root(&cwd, marker)?;
    tracing::debug!(root = %root.display(), "resolved project root");
    Ok(root)
}

/// `relative` resolved against the project root.
pub fn project_relative_path(root: &Path, relative: impl AsRef<Path>) -> PathBuf {
    root.join(relative)
}

/// `path` without its last component. A single component, or the
/// filesystem root, gives the empty path.
pub fn parent_path(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests;
