//! Platform-neutral path helpers.
//!
//! Paths coming from project files and command lines mix `/` and `\`, may be
//! relative, and may point at directories that do not exist yet. Everything
//! here is lexical: nothing touches the filesystem except
//! [`canonical_path`], which asks for the current directory.

use std::{
    ffi::OsStr,
    path::{Component, MAIN_SEPARATOR, Path, PathBuf},
};

use crate::error::Error;

#[cfg(windows)]
const ALT_SEPARATOR: char = '/';
#[cfg(not(windows))]
const ALT_SEPARATOR: char = '\\';

/// Replaces the alternate directory separator with the platform one.
pub fn normalize_separators(path: &str) -> String {
    path.replace(ALT_SEPARATOR, &MAIN_SEPARATOR.to_string())
}

/// Trims surrounding whitespace and normalizes separators. Paths that are
/// not valid UTF-8 are returned unchanged.
pub fn normalize(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(normalize_separators(s.trim())),
        None => path.to_path_buf(),
    }
}

/// Resolves `path` against `base` and removes `.`/`..` segments.
///
/// Surrounding whitespace is trimmed first. An empty `path` yields `base`.
pub fn to_absolute_path(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let candidate = normalize(path.as_ref());
    if candidate.is_absolute() {
        clean(&candidate)
    } else {
        clean(&base.join(candidate))
    }
}

/// Resolves `path` against the current working directory.
pub fn canonical_path(path: impl AsRef<Path>) -> Result<PathBuf, Error> {
    let current_dir = std::env::current_dir()?;
    Ok(to_absolute_path(&current_dir, path))
}

/// `true` if `path` is empty or only whitespace.
pub fn is_blank(path: &Path) -> bool {
    path.to_str().is_some_and(|s| s.trim().is_empty())
}

/// Lexically normalizes a path: drops `.` segments and folds `..` into the
/// preceding segment. A `..` directly under the root is dropped.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn fold_case(segment: &OsStr) -> String {
    segment.to_string_lossy().to_lowercase()
}

/// Compares two paths segment by segment, ignoring case.
///
/// Trailing separators do not matter: `/a/b/` equals `/A/B`.
pub fn paths_equal_ignore_case(a: &Path, b: &Path) -> bool {
    let mut left = a.components();
    let mut right = b.components();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(l), Some(r)) if fold_case(l.as_os_str()) == fold_case(r.as_os_str()) => {}
            _ => return false,
        }
    }
}

/// Returns the segments of `path` below `base`, comparing the shared prefix
/// case-insensitively. `None` when `path` is not inside `base`.
pub fn relative_segments_ignore_case(path: &Path, base: &Path) -> Option<Vec<String>> {
    let mut components = path.components();
    for base_component in base.components() {
        let component = components.next()?;
        if fold_case(component.as_os_str()) != fold_case(base_component.as_os_str()) {
            return None;
        }
    }
    Some(
        components
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect(),
    )
}

/// `true` if the final extension of `path` equals `extension` (without the
/// dot), ignoring case.
pub fn has_extension_ignore_case(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Strips `suffix` from the end of `name`, ignoring ASCII case.
pub fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(suffix.len())?;
    if !name.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = name.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
