#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn root_is_prefix_through_marker() {
    let root = project_root(Path::new("/home/u/leo/src/parser"), "leo").unwrap();
    assert_eq!(root, PathBuf::from("/home/u/leo"));
}

#[test]
fn first_marker_wins() {
    let root = project_root(Path::new("/a/leo/b/leo/c"), "leo").unwrap();
    assert_eq!(root, PathBuf::from("/a/leo"));
}

#[test]
fn path_ending_at_marker() {
    let root = project_root(Path::new("/work/leo"), "leo").unwrap();
    assert_eq!(root, PathBuf::from("/work/leo"));
}

#[test]
fn relative_paths_work() {
    let root = project_root(Path::new("repos/leo/tests"), "leo").unwrap();
    assert_eq!(root, PathBuf::from("repos/leo"));
}

#[test]
fn marker_must_match_whole_component() {
    let error = project_root(Path::new("/home/leopard/src"), "leo").unwrap_err();
    assert!(matches!(error, ProjectPathError::MarkerNotFound { .. }));
    assert_eq!(error.to_string(), "no `leo` directory in /home/leopard/src");
}

#[test]
fn custom_marker() {
    let root = project_root(Path::new("/x/workspace/y"), "workspace").unwrap();
    assert_eq!(root, PathBuf::from("/x/workspace"));
}

#[test]
fn relative_join() {
    let path = project_relative_path(Path::new("/a/leo"), "tests/cases");
    assert_eq!(path, PathBuf::from("/a/leo/tests/cases"));
}

#[test]
fn parent_drops_last_component() {
    assert_eq!(parent_path(Path::new("/a/leo/src")), PathBuf::from("/a/leo"));
    assert_eq!(parent_path(Path::new("src")), PathBuf::new());
    assert_eq!(parent_path(Path::new("/")), PathBuf::new());
}
