//! Core value types passed between the parser, the renderer and the drivers.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// A single `<data>` entry of a resource document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// The `name` attribute; empty when the attribute is missing.
    pub name: String,

    /// Text of the `<value>` child; empty when there is none.
    pub value: String,
}

impl ResourceEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Display for ResourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceEntry {{ name: {}, value: {} }}", self.name, self.value)
    }
}

/// Entries of one resource document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDocument {
    pub entries: Vec<ResourceEntry>,
}

impl ResourceDocument {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResourceEntry> {
        self.entries.iter()
    }

    pub fn find_entry(&self, name: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

impl<'a> IntoIterator for &'a ResourceDocument {
    type Item = &'a ResourceEntry;
    type IntoIter = std::slice::Iter<'a, ResourceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Visibility of the generated class and its members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccessModifier {
    #[default]
    Public,
    Internal,
}

impl AccessModifier {
    /// Maps the `--internal-access-modifier` style switch onto a modifier.
    pub fn from_internal_flag(internal: bool) -> Self {
        if internal {
            AccessModifier::Internal
        } else {
            AccessModifier::Public
        }
    }

    /// The C# keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Internal => "internal",
        }
    }
}

impl Display for AccessModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Everything the renderer needs to know about where a resource lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceContext {
    /// Directory holding the project file. `None` when the namespace was
    /// supplied explicitly and no lookup happened.
    pub project_root: Option<PathBuf>,
    pub resource_namespace: String,
    pub resource_name: String,
    pub access_modifier: AccessModifier,
}

/// Outcome of converting one `.resx` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// Generated C# source; empty for culture-specific (satellite) resources.
    pub converted_content: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ConversionResult {
    /// `true` when no code was generated because the resource is a satellite.
    pub fn is_satellite(&self) -> bool {
        self.converted_content.is_empty()
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Counters accumulated over one directory run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub converted: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total files: {}. Converted: {}. Failed: {}.",
            self.processed, self.converted, self.failed
        )
    }
}
