//! Directory pipeline: discover translation files, transform, write.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use pipeline_file::PipelineFile;
use thiserror::Error;
use walkdir::WalkDir;

use crate::options::TransformOptions;
use crate::transform::{transform, TransformError};

const DEFAULT_INCLUDE: &str = "**/*.json";

/// Pipeline errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// Failed to read a source file.
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a generated file.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    /// The transform rejected the file.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// A file the pipeline could not process.
#[derive(Debug)]
pub struct FailedFile {
    /// Path relative to the source root.
    pub relative_path: Utf8PathBuf,
    /// What went wrong.
    pub error: PipelineError,
}

/// Counts and per-file failures from one pipeline run.
#[derive(Debug, Default)]
pub struct PipelineSummary {
    /// Files transformed and written.
    pub transformed: usize,
    /// Files that failed. The rest of the run still completes.
    pub failures: Vec<FailedFile>,
}

/// Reads translation files under a source root, transforms each one, and
/// writes one generated script per input under a destination root, mirroring
/// the relative layout.
#[derive(Debug)]
pub struct Pipeline {
    source_root: Utf8PathBuf,
    dest_root: Utf8PathBuf,
    options: TransformOptions,
    include: Vec<String>,
    ignore: Vec<String>,
}

impl Pipeline {
    /// Creates a pipeline reading under `source_root` and writing under
    /// `dest_root`. Matches `**/*.json` until an include pattern is added.
    pub fn new(source_root: impl Into<Utf8PathBuf>, dest_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            dest_root: dest_root.into(),
            options: TransformOptions::default(),
            include: Vec::new(),
            ignore: Vec::new(),
        }
    }

    /// Sets the transform options applied to every file.
    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    /// Adds an include pattern, replacing the `**/*.json` default.
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    /// Adds an ignore pattern. Ignores win over includes.
    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore.push(pattern.into());
        self
    }

    /// Walks the source root and processes every matching file.
    ///
    /// An invalid glob pattern aborts the run before any file is touched;
    /// everything after that is collected per file in the summary.
    pub fn run(&self) -> Result<PipelineSummary, PipelineError> {
        let mut include_patterns: Vec<&str> = self.include.iter().map(String::as_str).collect();
        if include_patterns.is_empty() {
            include_patterns.push(DEFAULT_INCLUDE);
        }
        let include = build_glob_set(&include_patterns)?;

        let ignore_patterns: Vec<&str> = self.ignore.iter().map(String::as_str).collect();
        let ignore = build_glob_set(&ignore_patterns)?;

        let mut summary = PipelineSummary::default();
        for path in WalkDir::new(&self.source_root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| Utf8PathBuf::try_from(entry.into_path()).ok())
        {
            let relative = path
                .strip_prefix(&self.source_root)
                .unwrap_or(&path)
                .to_path_buf();
            if !include.is_match(relative.as_str()) || ignore.is_match(relative.as_str()) {
                continue;
            }

            match self.process(&path, &relative) {
                Ok(()) => summary.transformed += 1,
                Err(error) => summary.failures.push(FailedFile {
                    relative_path: relative,
                    error,
                }),
            }
        }

        Ok(summary)
    }

    fn process(&self, path: &Utf8Path, relative: &Utf8Path) -> Result<(), PipelineError> {
        let bytes = fs::read(path).map_err(|source| PipelineError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let mut file = PipelineFile::buffered(path.to_path_buf(), relative.to_path_buf(), bytes);
        transform(&mut file, &self.options)?;

        let dest = self.dest_root.join(file.relative_path());
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| PipelineError::WriteFailed {
                path: dest.clone(),
                source,
            })?;
        }
        let generated = file.contents().as_bytes().unwrap_or_default();
        fs::write(&dest, generated).map_err(|source| PipelineError::WriteFailed {
            path: dest,
            source,
        })?;

        Ok(())
    }
}

fn build_glob_set(patterns: &[&str]) -> Result<GlobSet, PipelineError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| PipelineError::InvalidGlob(e.to_string()))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| PipelineError::InvalidGlob(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_include_pattern_aborts() {
        let result = Pipeline::new("src", "dest").include("[").run();
        assert!(matches!(result, Err(PipelineError::InvalidGlob(_))));
    }

    #[test]
    fn test_invalid_ignore_pattern_aborts() {
        let result = Pipeline::new("src", "dest").ignore("[").run();
        assert!(matches!(result, Err(PipelineError::InvalidGlob(_))));
    }
}
