//! URL and module-name resolution.

use pipeline_file::PipelineFile;

use crate::options::{ModuleName, TransformOptions};

/// Derives the logical resource URL for a file.
///
/// Starts from the base-relative path with backslashes normalized to forward
/// slashes, strips `strip_prefix` when the URL starts with it, prepends
/// `prefix`, and finally lets the `rename` hook rewrite the result.
pub fn resolve_url(file: &PipelineFile, options: &TransformOptions) -> String {
    let mut url = file.relative_path().as_str().replace('\\', "/");

    if let Some(strip) = options.strip_prefix.as_deref() {
        if let Some(stripped) = url.strip_prefix(strip) {
            url = stripped.to_owned();
        }
    }
    if let Some(prefix) = options.prefix.as_deref() {
        url.insert_str(0, prefix);
    }
    if let Some(rename) = &options.rename {
        url = rename(&url, file);
    }

    url
}

/// Derives the module name for a file: a computed name wins, then a
/// non-empty static one, with the resolved URL as the fallback.
pub fn resolve_module_name(url: &str, file: &PipelineFile, options: &TransformOptions) -> String {
    match &options.module_name {
        Some(ModuleName::Computed(f)) => f(file),
        Some(ModuleName::Static(name)) if !name.is_empty() => name.clone(),
        _ => url.to_owned(),
    }
}
