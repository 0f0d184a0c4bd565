//! Translation resources to AngularJS `$translationCache` preloading modules.
//!
//! This crate turns a JSON (or plain text) translation file into a generated
//! script that puts the file's content into `$translationCache`, keyed by the
//! file's URL, so the application never fetches it over the network. It
//! handles:
//! - Deriving the cache URL from the file's relative path (prefix stripping,
//!   prefix prepending, rename hook)
//! - Choosing between one-module-per-file, shared-module, and
//!   predeclared-module output, or a custom template
//! - Escaping content into single-quoted script literals
//! - Driving whole directory trees through the transform
//!
//! # Example
//!
//! ```
//! use ng_lang2js::{transform, TransformOptions};
//! use pipeline_file::PipelineFile;
//!
//! let mut file = PipelineFile::buffered(
//!     "/project/locales/en.json",
//!     "locales/en.json",
//!     r#"{"TITLE": "Hello"}"#,
//! );
//! let options = TransformOptions::new().with_module_name("translations");
//!
//! transform(&mut file, &options).unwrap();
//! assert_eq!(file.relative_path(), "locales/en.js");
//! ```

mod escape;
mod options;
mod pipeline;
mod resolve;
mod template;
mod transform;

pub use escape::{escape_content, pretty_escape_content};
pub use options::{ModuleName, ModuleNameFn, RenameFn, TransformOptions};
pub use pipeline::{FailedFile, Pipeline, PipelineError, PipelineSummary};
pub use resolve::{resolve_module_name, resolve_url};
pub use template::{
    render_template, select_template, SelectedTemplate, Template, TranslationContext,
    MODULE_PER_FILE, SINGLE_DECLARED_MODULE, SINGLE_MODULE,
};
pub use transform::{generate_declaration, transform, TransformError, OUTPUT_EXTENSION};
