//! Options for single-file and directory conversions.

use std::path::PathBuf;

use crate::types::AccessModifier;

/// Options for [`crate::converter::convert_file`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Explicit `.cs` output path. Derived from the input path when `None`.
    pub output_path: Option<PathBuf>,
    /// Explicit namespace. Resolved from the enclosing project when `None`.
    pub namespace: Option<String>,
    pub access_modifier: AccessModifier,
}

impl ConvertOptions {
    /// Creates default convert options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output file path.
    pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> Self {
        self.output_path = output_path;
        self
    }

    /// Sets a namespace override. Blank strings count as no override.
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace.filter(|ns| !ns.trim().is_empty());
        self
    }

    /// Sets the access modifier of the generated class.
    pub fn with_access_modifier(mut self, access_modifier: AccessModifier) -> Self {
        self.access_modifier = access_modifier;
        self
    }
}

/// Options for [`crate::batch::FileConverter`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchOptions {
    /// Directory receiving every generated file. When `None` each file is
    /// written next to its `.resx`.
    pub output_dir: Option<PathBuf>,
    pub namespace: Option<String>,
    pub access_modifier: AccessModifier,
}

impl BatchOptions {
    /// Creates default batch options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir.filter(|dir| !dir.as_os_str().is_empty());
        self
    }

    /// Sets a namespace override. Blank strings count as no override.
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace.filter(|ns| !ns.trim().is_empty());
        self
    }

    /// Sets the access modifier of the generated classes.
    pub fn with_access_modifier(mut self, access_modifier: AccessModifier) -> Self {
        self.access_modifier = access_modifier;
        self
    }

    /// Per-file options for `output_path`, sharing namespace and modifier.
    pub fn file_options(&self, output_path: Option<PathBuf>) -> ConvertOptions {
        ConvertOptions::new()
            .with_output_path(output_path)
            .with_namespace(self.namespace.clone())
            .with_access_modifier(self.access_modifier)
    }
}
