//! Directory conversion: walks a tree for `.resx` files, converts each one and
//! writes the outputs whose content changed.

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use ignore::WalkBuilder;

use crate::{
    converter::{RESOURCE_EXTENSION, convert_file, output_path_in_dir, resource_name_from_output},
    error::Error,
    logger::Logger,
    namespace::resource_name_contains_culture,
    options::BatchOptions,
    paths,
    types::{BatchSummary, ConversionResult},
};

/// What happened to one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOutcome {
    Converted,
    Unchanged,
    Skipped,
}

/// Converts every `.resx` file below a directory and reports through `L`.
///
/// ```rust,no_run
/// use resx2cs::{BatchOptions, FileConverter, logger::TracingLogger};
///
/// let converter = FileConverter::new(TracingLogger);
/// let ok = converter.convert("src/MyApp", &BatchOptions::new());
/// assert!(ok);
/// ```
#[derive(Debug)]
pub struct FileConverter<L: Logger> {
    logger: L,
}

impl<L: Logger> FileConverter<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Converts the directory and returns `true` when no file failed.
    ///
    /// A missing input directory is logged as an error and returns `false`.
    pub fn convert(&self, input_dir: impl AsRef<Path>, options: &BatchOptions) -> bool {
        match self.run(input_dir, options) {
            Ok(summary) => summary.is_success(),
            Err(e) => {
                self.logger.error(format_args!("{}", e));
                false
            }
        }
    }

    /// Converts the directory and returns the counters.
    ///
    /// A blank `input_dir` means the current directory. Per-file failures are
    /// logged and counted; only a missing input directory or an unavailable
    /// current directory is returned as an error.
    pub fn run(
        &self,
        input_dir: impl AsRef<Path>,
        options: &BatchOptions,
    ) -> Result<BatchSummary, Error> {
        let current_dir = std::env::current_dir()?;
        let input_dir = paths::to_absolute_path(&current_dir, input_dir);
        if !input_dir.is_dir() {
            return Err(Error::DirectoryNotFound(input_dir));
        }
        let output_dir = options
            .output_dir
            .as_deref()
            .filter(|dir| !paths::is_blank(dir))
            .map(|dir| paths::to_absolute_path(&current_dir, dir));

        self.logger.info(format_args!(
            "Starting conversion of `.resx` files in the '{}' directory:",
            input_dir.display()
        ));

        let mut summary = BatchSummary::default();
        let mut seen_outputs = HashSet::new();

        for input_path in find_resource_files(&input_dir) {
            let display_path = input_path
                .strip_prefix(&input_dir)
                .unwrap_or(input_path.as_path());
            let output_path = output_dir
                .as_deref()
                .map(|dir| output_path_in_dir(&input_path, dir));

            if let Some(output_path) = output_path.as_deref().filter(|p| writes_output(p)) {
                if !seen_outputs.insert(output_path.to_path_buf()) {
                    self.logger.warn(format_args!(
                        "\t* '{}' file overwrites the output of another resource: '{}'",
                        display_path.display(),
                        output_path.display()
                    ));
                }
            }

            match self.convert_one(&input_path, output_path, options) {
                Ok(FileOutcome::Converted) => {
                    self.logger.info(format_args!(
                        "\t* '{}' file has been successfully converted",
                        display_path.display()
                    ));
                    summary.converted += 1;
                }
                Ok(FileOutcome::Unchanged) => {
                    self.logger.info(format_args!(
                        "\t* '{}' file has not changed",
                        display_path.display()
                    ));
                }
                Ok(FileOutcome::Skipped) => {
                    self.logger.info(format_args!(
                        "\t* '{}' file is culture-specific and has been skipped",
                        display_path.display()
                    ));
                }
                Err(e) => {
                    self.logger.info(format_args!(
                        "\t* '{}' file failed to convert",
                        display_path.display()
                    ));
                    self.logger.error(format_args!("{}", e));
                    summary.failed += 1;
                }
            }

            summary.processed += 1;
        }

        if summary.processed > 0 {
            self.logger.info(format_args!("{}", summary));
            if summary.is_success() {
                self.logger.success(format_args!("Conversion is successful."));
            } else {
                self.logger.error(format_args!("Conversion is failed."));
            }
        } else {
            self.logger.warn(format_args!(
                "There are no resx files found in the '{}' directory.",
                input_dir.display()
            ));
        }

        Ok(summary)
    }

    fn convert_one(
        &self,
        input_path: &Path,
        output_path: Option<PathBuf>,
        options: &BatchOptions,
    ) -> Result<FileOutcome, Error> {
        let result = convert_file(input_path, &options.file_options(output_path))?;
        if result.is_satellite() {
            return Ok(FileOutcome::Skipped);
        }
        if write_if_changed(&result)? {
            Ok(FileOutcome::Converted)
        } else {
            tracing::debug!(output = %result.output_path.display(), "output is up to date");
            Ok(FileOutcome::Unchanged)
        }
    }
}

/// Satellite resources never produce a file, so they cannot collide.
fn writes_output(output_path: &Path) -> bool {
    !resource_name_contains_culture(&resource_name_from_output(output_path))
}

/// All `.resx` files below `dir`, sorted by path. Hidden files and ignore
/// files are not special.
fn find_resource_files(dir: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for dent in walker {
        let dent = match dent {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        if dent.file_type().is_some_and(|t| t.is_file())
            && paths::has_extension_ignore_case(dent.path(), RESOURCE_EXTENSION)
        {
            files.push(dent.into_path());
        }
    }
    files
}

/// `true` when `path` does not exist or holds something other than `content`.
pub fn has_file_content_changed(path: &Path, content: &str) -> Result<bool, Error> {
    match fs::read(path) {
        Ok(existing) => Ok(existing != content.as_bytes()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(Error::unwritable(path, e)),
    }
}

/// Writes the generated content unless the file already holds it. Returns
/// whether a write happened.
fn write_if_changed(result: &ConversionResult) -> Result<bool, Error> {
    if !has_file_content_changed(&result.output_path, &result.converted_content)? {
        return Ok(false);
    }
    if let Some(parent) = result.output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::unwritable(&result.output_path, e))?;
    }
    fs::write(&result.output_path, &result.converted_content)
        .map_err(|e| Error::unwritable(&result.output_path, e))?;
    Ok(true)
}
