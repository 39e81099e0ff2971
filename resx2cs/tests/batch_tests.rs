use indoc::indoc;
use resx2cs::logger::{MemoryLogger, Severity};
use resx2cs::{AccessModifier, BatchOptions, FileConverter};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const VALID: &str = indoc! {r#"
    <root>
      <data name="Title"><value>Title text</value></data>
    </root>
"#};

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project(temp_dir: &TempDir) -> std::path::PathBuf {
    let root = temp_dir.path().join("App");
    write(&root.join("App.csproj"), "<Project />");
    root
}

#[test]
fn test_two_converted_one_failed() {
    let temp_dir = TempDir::new().unwrap();
    let root = project(&temp_dir);
    write(&root.join("Resources").join("Errors.resx"), VALID);
    write(&root.join("Resources").join("Labels.resx"), VALID);
    write(&root.join("Resources").join("Broken.resx"), "<root><data name=\"X\">");
    // Stale output that must be replaced.
    write(&root.join("Resources").join("Labels.Designer.cs"), "// old");

    let converter = FileConverter::new(MemoryLogger::new());
    let summary = converter.run(&root, &BatchOptions::new()).unwrap();

    assert_eq!(summary.processed, 3);
    assert_eq!(summary.converted, 2);
    assert_eq!(summary.failed, 1);
    assert!(!summary.is_success());

    let logger = converter.logger();
    assert!(logger.contains("Total files: 3. Converted: 2. Failed: 1."));
    assert!(logger.contains("Broken.resx' file failed to convert"));
    assert_eq!(
        logger.messages().last().unwrap(),
        &(Severity::Error, "Conversion is failed.".to_string())
    );

    let labels = fs::read_to_string(root.join("Resources").join("Labels.Designer.cs")).unwrap();
    assert!(labels.contains("namespace App.Resources\n"));
    assert!(!root.join("Resources").join("Broken.Designer.cs").exists());
}

#[test]
fn test_convert_returns_overall_result() {
    let temp_dir = TempDir::new().unwrap();
    let root = project(&temp_dir);
    write(&root.join("Strings.resx"), VALID);

    let converter = FileConverter::new(MemoryLogger::new());
    assert!(converter.convert(&root, &BatchOptions::new()));
    assert_eq!(
        converter.logger().messages_of(Severity::Success),
        vec!["Conversion is successful.".to_string()]
    );

    write(&root.join("Bad.resx"), "not xml at all <");
    let converter = FileConverter::new(MemoryLogger::new());
    assert!(!converter.convert(&root, &BatchOptions::new()));
}

#[test]
fn test_unchanged_output_is_not_rewritten() {
    let temp_dir = TempDir::new().unwrap();
    let root = project(&temp_dir);
    write(&root.join("Strings.resx"), VALID);
    let options = BatchOptions::new();

    FileConverter::new(MemoryLogger::new()).run(&root, &options).unwrap();
    let output = root.join("Strings.Designer.cs");
    let before = fs::metadata(&output).unwrap().modified().unwrap();

    let converter = FileConverter::new(MemoryLogger::new());
    let summary = converter.run(&root, &options).unwrap();
    assert_eq!(summary.converted, 0);
    assert!(converter.logger().contains("'Strings.resx' file has not changed"));
    assert_eq!(fs::metadata(&output).unwrap().modified().unwrap(), before);
}

#[test]
fn test_output_directory_is_created_and_sets_namespace() {
    let temp_dir = TempDir::new().unwrap();
    let root = project(&temp_dir);
    write(&root.join("Resources").join("Nested").join("Strings.resx"), VALID);
    let out = root.join("Generated");

    let options = BatchOptions::new()
        .with_output_dir(Some(out.clone()))
        .with_access_modifier(AccessModifier::Internal);
    let converter = FileConverter::new(MemoryLogger::new());
    let summary = converter.run(root.join("Resources"), &options).unwrap();

    assert_eq!(summary.converted, 1);
    let code = fs::read_to_string(out.join("Strings.Designer.cs")).unwrap();
    assert!(code.contains("namespace App.Generated\n"));
    assert!(code.contains("internal class Strings"));
}

#[test]
fn test_explicit_namespace_overrides_project() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("loose");
    write(&dir.join("Strings.resx"), VALID);

    let options = BatchOptions::new().with_namespace(Some("Shared.Text".to_string()));
    let converter = FileConverter::new(MemoryLogger::new());
    assert!(converter.convert(&dir, &options));
    let code = fs::read_to_string(dir.join("Strings.Designer.cs")).unwrap();
    assert!(code.contains("namespace Shared.Text\n"));
}

#[test]
fn test_missing_project_fails_the_file_only() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("loose");
    write(&dir.join("A.resx"), VALID);
    write(&dir.join("B.resx"), VALID);

    let converter = FileConverter::new(MemoryLogger::new());
    let summary = converter.run(&dir, &BatchOptions::new()).unwrap();
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(
        converter
            .logger()
            .messages_of(Severity::Error)
            .iter()
            .filter(|m| m.starts_with("Project file not found"))
            .count(),
        2
    );
}
