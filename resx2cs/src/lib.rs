#![forbid(unsafe_code)]
//! Strongly typed C# resource classes from `.resx` files.
//!
//! Reads the `<data>` entries of a `.resx` document, finds the namespace from
//! the enclosing `.csproj` project and renders a `*.Designer.cs` accessor
//! class with one property per string.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resx2cs::{BatchOptions, ConvertOptions, FileConverter, convert_file, logger::TracingLogger};
//!
//! // One file, result kept in memory
//! let result = convert_file("MyApp/Resources/Strings.resx", &ConvertOptions::new())?;
//! println!("{}", result.converted_content);
//!
//! // A whole tree, writing only outputs whose content changed
//! let converter = FileConverter::new(TracingLogger);
//! converter.convert("MyApp", &BatchOptions::new());
//! # Ok::<(), resx2cs::Error>(())
//! ```
//!
//! # Conventions
//!
//! - `Strings.resx` generates `Strings.Designer.cs` next to it, or under the
//!   output directory when one is given.
//! - The namespace is the project directory name followed by the path of the
//!   output directory below it, joined with dots.
//! - Culture-specific resources such as `Strings.fr-FR.resx` generate nothing.

pub mod batch;
pub mod converter;
pub mod document;
pub mod error;
pub mod logger;
pub mod namespace;
pub mod options;
pub mod paths;
pub mod renderer;
pub mod text;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    batch::FileConverter,
    converter::{convert_code, convert_file, generated_file_path, output_path_in_dir},
    error::Error,
    logger::{Logger, Severity},
    options::{BatchOptions, ConvertOptions},
    traits::Parser,
    types::{
        AccessModifier, BatchSummary, ConversionResult, NamespaceContext, ResourceDocument,
        ResourceEntry,
    },
};
