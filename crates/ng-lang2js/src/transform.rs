//! The pipeline-facing transform entry point.

use pipeline_file::PipelineFile;
use thiserror::Error;

use crate::options::TransformOptions;
use crate::resolve::{resolve_module_name, resolve_url};
use crate::template::{render_template, select_template, TranslationContext};

/// Extension given to generated files.
pub const OUTPUT_EXTENSION: &str = "js";

/// Errors surfaced by [`transform`].
#[derive(Debug, Error)]
pub enum TransformError {
    /// The file's contents are only available as an unread stream.
    #[error("streaming contents are not supported")]
    StreamingUnsupported,
}

/// Generates the preloading script for a file without touching it.
///
/// Resolves the file's URL and module name, escapes its buffered contents,
/// and renders the selected template. Files without buffered contents render
/// with empty content.
pub fn generate_declaration(file: &PipelineFile, options: &TransformOptions) -> String {
    let url = resolve_url(file, options);
    let module_name = resolve_module_name(&url, file, options);
    let content = file.text().unwrap_or_default();

    let context = TranslationContext::new(module_name, url, content.into_owned());
    render_template(select_template(options).source(), &context)
}

/// Transforms one file in place.
///
/// Buffered files (including empty ones) get their contents replaced with
/// the generated script and their extension swapped to `.js`. Streamed files
/// are rejected untouched. Files carrying no contents pass through untouched
/// and report success.
pub fn transform(
    file: &mut PipelineFile,
    options: &TransformOptions,
) -> Result<(), TransformError> {
    if file.contents().is_stream() {
        return Err(TransformError::StreamingUnsupported);
    }

    if file.contents().is_buffer() {
        let generated = generate_declaration(file, options);
        file.set_contents(generated);
        file.replace_extension(OUTPUT_EXTENSION);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_buffered_file_is_rewritten_in_place() {
        let mut file = PipelineFile::buffered("/work/en.json", "en.json", r#"{"a":1}"#);
        transform(&mut file, &TransformOptions::new()).unwrap();

        assert_eq!(file.path(), Utf8Path::new("/work/en.js"));
        assert_eq!(file.relative_path(), Utf8Path::new("en.js"));
        assert_eq!(
            file.text().as_deref(),
            Some(
                r#"angular.module('en.json', []).run(['$translationCache', function($translationCache) {
  $translationCache.put('en.json',
    '{"a":1}');
}]);
"#
            )
        );
    }

    #[test]
    fn test_streamed_file_is_rejected_untouched() {
        let mut file = PipelineFile::streamed("/work/en.json", "en.json", std::io::empty());
        let result = transform(&mut file, &TransformOptions::new());

        assert!(matches!(result, Err(TransformError::StreamingUnsupported)));
        assert_eq!(file.path(), Utf8Path::new("/work/en.json"));
        assert_eq!(file.relative_path(), Utf8Path::new("en.json"));
        assert!(file.contents().is_stream());
    }

    #[test]
    fn test_contentless_file_passes_through() {
        let mut file = PipelineFile::without_contents("/work/locales", "locales");
        transform(&mut file, &TransformOptions::new()).unwrap();

        assert_eq!(file.path(), Utf8Path::new("/work/locales"));
        assert!(file.contents().is_absent());
    }

    #[test]
    fn test_empty_buffer_is_still_transformed() {
        let mut file = PipelineFile::buffered("/work/empty.json", "empty.json", "");
        transform(&mut file, &TransformOptions::new()).unwrap();

        assert_eq!(file.relative_path(), Utf8Path::new("empty.js"));
        assert!(file.text().as_deref().is_some_and(|text| {
            text.contains("$translationCache.put('empty.json',\n    '');")
        }));
    }

    #[test]
    fn test_generate_declaration_leaves_the_file_alone() {
        let file = PipelineFile::buffered("/work/en.json", "en.json", r#"{"a":1}"#);
        let generated = generate_declaration(&file, &TransformOptions::new());

        assert!(generated.starts_with("angular.module('en.json', [])"));
        assert_eq!(file.relative_path(), Utf8Path::new("en.json"));
        assert_eq!(file.text().as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_rename_result_feeds_url_and_module_name() {
        let options = TransformOptions::new()
            .with_prefix("assets/")
            .with_rename(|url, _| url.replace(".json", ".lang"));
        let mut file = PipelineFile::buffered("/work/en.json", "en.json", "{}");
        transform(&mut file, &options).unwrap();

        let generated = file.text().unwrap_or_default().into_owned();
        assert!(generated.contains("angular.module('assets/en.lang', [])"));
        assert!(generated.contains("$translationCache.put('assets/en.lang',"));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            TransformError::StreamingUnsupported.to_string(),
            "streaming contents are not supported"
        );
    }
}
