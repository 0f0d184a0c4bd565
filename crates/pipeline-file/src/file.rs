//! The file object transforms operate on.

use std::borrow::Cow;
use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};

use crate::FileContents;

/// A single file moving through a transform pipeline.
///
/// Carries the file's working path, its path relative to the pipeline's base
/// directory, and its contents. Transforms receive the file mutably, rewrite
/// contents and paths in place, and hand it back; the pipeline keeps
/// ownership throughout.
#[derive(Debug)]
pub struct PipelineFile {
    path: Utf8PathBuf,
    relative_path: Utf8PathBuf,
    contents: FileContents,
}

impl PipelineFile {
    /// Creates a file with fully buffered contents.
    pub fn buffered(
        path: impl Into<Utf8PathBuf>,
        relative_path: impl Into<Utf8PathBuf>,
        contents: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            path: path.into(),
            relative_path: relative_path.into(),
            contents: FileContents::Buffer(contents.into()),
        }
    }

    /// Creates a file whose contents are only available as a stream.
    pub fn streamed(
        path: impl Into<Utf8PathBuf>,
        relative_path: impl Into<Utf8PathBuf>,
        reader: impl Read + Send + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            relative_path: relative_path.into(),
            contents: FileContents::Stream(Box::new(reader)),
        }
    }

    /// Creates a file that carries no contents, e.g. a directory entry.
    pub fn without_contents(
        path: impl Into<Utf8PathBuf>,
        relative_path: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            path: path.into(),
            relative_path: relative_path.into(),
            contents: FileContents::Absent,
        }
    }

    /// The file's working path.
    #[inline]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// The file's path relative to the pipeline's base directory.
    #[inline]
    pub fn relative_path(&self) -> &Utf8Path {
        &self.relative_path
    }

    /// The file's contents.
    #[inline]
    pub fn contents(&self) -> &FileContents {
        &self.contents
    }

    /// Replaces the file's contents.
    pub fn set_contents(&mut self, contents: impl Into<FileContents>) {
        self.contents = contents.into();
    }

    /// Returns buffered contents as text, replacing invalid UTF-8 with the
    /// replacement character. `None` for streamed or absent contents.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        self.contents.as_bytes().map(String::from_utf8_lossy)
    }

    /// Swaps the extension of both stored paths, appending one when the file
    /// has none.
    pub fn replace_extension(&mut self, extension: &str) {
        self.path.set_extension(extension);
        self.relative_path.set_extension(extension);
    }
}
