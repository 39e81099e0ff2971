//! Conversion of one `.resx` document into C# source.
//!
//! [`convert_file`] ties the pieces together: path checks, namespace lookup,
//! parsing and rendering. It never writes anything; the batch driver decides
//! whether the result needs to reach the disk.

use std::path::{Path, PathBuf};

use crate::{
    document,
    error::Error,
    namespace::{resolve_namespace, resolve_project_root, resource_name_contains_culture},
    options::ConvertOptions,
    paths,
    renderer::render,
    traits::Parser,
    types::{AccessModifier, ConversionResult, NamespaceContext, ResourceDocument},
};

/// Extension of resource documents.
pub const RESOURCE_EXTENSION: &str = "resx";
/// Extension of generated C# files.
pub const SOURCE_EXTENSION: &str = "cs";
/// Suffix that replaces `.resx` in generated file names.
pub const GENERATED_FILE_SUFFIX: &str = ".Designer.cs";

/// Converts resource document text into C# source.
///
/// Returns an empty string when `resource_name` carries a culture suffix; in
/// that case `code` is not parsed.
///
/// # Example
///
/// ```rust
/// use resx2cs::{AccessModifier, convert_code};
///
/// let resx = r#"<root><data name="Title"><value>Hello</value></data></root>"#;
/// let code = convert_code(resx, "MyApp", "Strings", AccessModifier::Public)?;
/// assert!(code.contains("public static string Title"));
///
/// let satellite = convert_code(resx, "MyApp", "Strings.fr-FR", AccessModifier::Public)?;
/// assert!(satellite.is_empty());
/// # Ok::<(), resx2cs::Error>(())
/// ```
pub fn convert_code(
    code: &str,
    resource_namespace: &str,
    resource_name: &str,
    access_modifier: AccessModifier,
) -> Result<String, Error> {
    if code.trim().is_empty() {
        return Err(Error::InvalidArgument("code"));
    }
    if resource_namespace.trim().is_empty() {
        return Err(Error::InvalidArgument("resource_namespace"));
    }
    if resource_name.trim().is_empty() {
        return Err(Error::InvalidArgument("resource_name"));
    }
    if resource_name_contains_culture(resource_name) {
        return Ok(String::new());
    }

    let document = document::parse(code)?;
    Ok(render(
        resource_name,
        resource_namespace,
        &document.entries,
        access_modifier,
    ))
}

/// `Strings.resx` → `Strings.Designer.cs` in the same directory.
pub fn generated_file_path(input_path: &Path) -> PathBuf {
    input_path.with_file_name(generated_file_name(input_path))
}

/// `<output_dir>/<stem>.Designer.cs`. Subdirectories of the input are not
/// reproduced below `output_dir`.
pub fn output_path_in_dir(input_path: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(generated_file_name(input_path))
}

fn generated_file_name(input_path: &Path) -> String {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}{}", stem, GENERATED_FILE_SUFFIX)
}

/// The class name for an output file: the file name without `.Designer.cs`,
/// or without its extension if it does not follow that convention.
pub fn resource_name_from_output(output_path: &Path) -> String {
    let file_name = output_path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match paths::strip_suffix_ignore_case(&file_name, GENERATED_FILE_SUFFIX) {
        Some(name) => name.to_string(),
        None => output_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Works out namespace and class name for a generated file at `output_path`.
///
/// An explicit `namespace` wins; otherwise the project enclosing the output
/// directory is looked up.
pub fn resolve_context(
    output_path: &Path,
    namespace: Option<&str>,
    access_modifier: AccessModifier,
) -> Result<NamespaceContext, Error> {
    let resource_name = resource_name_from_output(output_path);

    let (project_root, resource_namespace) = match namespace {
        Some(ns) if !ns.trim().is_empty() => (None, ns.trim().to_string()),
        _ => {
            let output_dir = output_path.parent().unwrap_or(output_path);
            let project_root = resolve_project_root(output_dir)?;
            let resource_namespace = resolve_namespace(&project_root, output_dir);
            (Some(project_root), resource_namespace)
        }
    };

    Ok(NamespaceContext {
        project_root,
        resource_namespace,
        resource_name,
        access_modifier,
    })
}

/// Converts the `.resx` file at `input_path`.
///
/// The output path defaults to `<input dir>/<stem>.Designer.cs`. Culture
/// specific resources (`Strings.de-DE.resx`) produce a result with empty
/// content without reading the input or looking for a project.
pub fn convert_file(
    input_path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<ConversionResult, Error> {
    let input_path = input_path.as_ref();
    if paths::is_blank(input_path) {
        return Err(Error::InvalidArgument("input_path"));
    }

    let input_path = paths::canonical_path(input_path)?;
    if !paths::has_extension_ignore_case(&input_path, RESOURCE_EXTENSION) {
        return Err(Error::NotAResourceFile(input_path));
    }

    let output_path = match options.output_path.as_deref() {
        Some(path) if !paths::is_blank(path) => {
            let path = paths::canonical_path(path)?;
            if !paths::has_extension_ignore_case(&path, SOURCE_EXTENSION) {
                return Err(Error::NotATargetLanguageFile(path));
            }
            path
        }
        _ => generated_file_path(&input_path),
    };

    let resource_name = resource_name_from_output(&output_path);
    if resource_name_contains_culture(&resource_name) {
        tracing::debug!(input = %input_path.display(), "skipping culture-specific resource");
        return Ok(ConversionResult {
            converted_content: String::new(),
            input_path,
            output_path,
        });
    }

    let context = resolve_context(
        &output_path,
        options.namespace.as_deref(),
        options.access_modifier,
    )?;
    let document = ResourceDocument::read_from(&input_path)?;
    tracing::debug!(
        input = %input_path.display(),
        namespace = %context.resource_namespace,
        entries = document.len(),
        "rendering resource class"
    );

    let converted_content = render(
        &context.resource_name,
        &context.resource_namespace,
        &document.entries,
        context.access_modifier,
    );

    Ok(ConversionResult {
        converted_content,
        input_path,
        output_path,
    })
}
