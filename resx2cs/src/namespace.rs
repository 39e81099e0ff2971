//! Finding the project that owns a resource and deriving its namespace.
//!
//! The project root is the nearest ancestor directory containing a `.csproj`
//! file. The namespace is the project directory name followed by the path
//! from the project root to the resource directory, with separators replaced
//! by dots.

use std::{
    fs,
    path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::Error, paths};

/// Extension of the project descriptor that marks a project root.
pub const PROJECT_FILE_EXTENSION: &str = "csproj";

lazy_static! {
    static ref CULTURE_SUFFIX_REGEX: Regex = Regex::new(r"[a-zA-Z]{2}-[a-zA-Z]{2}$").unwrap();
}

/// `true` when the resource name ends in a culture tag such as `en-US`.
///
/// Such resources are satellites resolved at runtime, so no code is
/// generated for them.
pub fn resource_name_contains_culture(resource_name: &str) -> bool {
    CULTURE_SUFFIX_REGEX.is_match(resource_name)
}

/// Walks upward from `start_dir` and returns the first directory that
/// directly contains a project file.
///
/// Relative paths are resolved against the current directory first.
/// `start_dir` does not need to exist: missing directories simply contain no
/// project file and the walk continues with their parent. The filesystem root
/// itself is never treated as a project root.
pub fn resolve_project_root(start_dir: &Path) -> Result<PathBuf, Error> {
    let start_dir = paths::canonical_path(start_dir)?;
    let mut current = start_dir.as_path();

    while let Some(parent) = current.parent() {
        if contains_project_file(current) {
            tracing::debug!(project_root = %current.display(), "resolved project root");
            return Ok(current.to_path_buf());
        }
        current = parent;
    }

    Err(Error::ProjectNotFound(start_dir))
}

fn contains_project_file(dir: &Path) -> bool {
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && paths::has_extension_ignore_case(&entry.path(), PROJECT_FILE_EXTENSION)
    })
}

/// Builds the namespace for resources in `resource_dir`, a directory inside
/// `project_root`.
///
/// Directory comparisons ignore case. If `resource_dir` is not below
/// `project_root` the project directory name alone is used.
pub fn resolve_namespace(project_root: &Path, resource_dir: &Path) -> String {
    let base = project_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if paths::paths_equal_ignore_case(project_root, resource_dir) {
        return base;
    }

    match paths::relative_segments_ignore_case(resource_dir, project_root) {
        Some(segments) if !segments.is_empty() => {
            format!("{}.{}", base, segments.join("."))
        }
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_culture_suffix() {
        assert!(resource_name_contains_culture("en-US"));
        assert!(resource_name_contains_culture("Strings.ru-ru"));
        assert!(!resource_name_contains_culture("Strings"));
        assert!(!resource_name_contains_culture("en"));
        assert!(!resource_name_contains_culture("en-US.Extra"));
        assert!(!resource_name_contains_culture("zh-Hans"));
    }

    #[test]
    fn test_namespace_at_project_root() {
        let ns = resolve_namespace(Path::new("/work/MyApp"), Path::new("/work/myapp/"));
        assert_eq!(ns, "MyApp");
    }

    #[test]
    fn test_namespace_below_project_root() {
        let ns = resolve_namespace(Path::new("/proj"), Path::new("/proj/Strings"));
        assert_eq!(ns, "proj.Strings");
        let ns = resolve_namespace(
            Path::new("/work/MyApp"),
            Path::new("/work/MYAPP/Resources/Errors"),
        );
        assert_eq!(ns, "MyApp.Resources.Errors");
    }

    #[test]
    fn test_resolve_project_root_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("MyApp");
        let nested = project.join("Resources").join("Errors");
        fs::create_dir_all(&nested).unwrap();
        fs::write(project.join("MyApp.csproj"), "<Project />").unwrap();

        let root = resolve_project_root(&nested).unwrap();
        assert_eq!(root, paths::clean(&project));
    }

    #[test]
    fn test_resolve_project_root_from_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("MyApp");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("MyApp.CSPROJ"), "<Project />").unwrap();

        let not_yet_created = project.join("obj").join("Generated");
        let root = resolve_project_root(&not_yet_created).unwrap();
        assert_eq!(root, paths::clean(&project));
    }

    #[test]
    fn test_project_marker_must_be_a_direct_child() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("Outer");
        let deeper = project.join("Inner");
        fs::create_dir_all(deeper.join("sub")).unwrap();
        fs::write(deeper.join("sub").join("Hidden.csproj"), "<Project />").unwrap();
        fs::write(project.join("Outer.csproj"), "<Project />").unwrap();

        let root = resolve_project_root(&deeper).unwrap();
        assert_eq!(root, paths::clean(&project));
    }

    #[test]
    fn test_directory_named_like_project_file_is_not_a_marker() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("App");
        fs::create_dir_all(project.join("Fake.csproj")).unwrap();
        fs::write(temp_dir.path().join("Real.csproj"), "<Project />").unwrap();

        let root = resolve_project_root(&project).unwrap();
        assert_eq!(root, paths::clean(temp_dir.path()));
    }

    #[test]
    fn test_relative_start_dir_is_made_absolute() {
        // Test binaries run from the crate directory, which has no project file above it.
        let expected = paths::canonical_path("src").unwrap();
        match resolve_project_root(Path::new("src")) {
            Err(Error::ProjectNotFound(dir)) => {
                assert!(dir.is_absolute());
                assert_eq!(dir, expected);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_project_root_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nothing").join("here");
        fs::create_dir_all(&dir).unwrap();
        // Walks past the temp directory too; no system directory above it holds a .csproj.
        let result = resolve_project_root(&dir);
        assert!(matches!(result, Err(Error::ProjectNotFound(_))));
    }
}
