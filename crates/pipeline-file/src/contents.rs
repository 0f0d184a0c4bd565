//! Contents representations for pipeline files.

use std::fmt;
use std::io::Read;

/// The contents carried by a [`crate::PipelineFile`].
///
/// A pipeline delivers each file in exactly one of three representations:
/// fully buffered bytes, a not-yet-read byte stream, or no contents at all
/// (directory entries and other placeholders).
pub enum FileContents {
    /// Contents fully loaded into memory. May be empty.
    Buffer(Vec<u8>),
    /// Contents available only through a reader that has not been consumed.
    Stream(Box<dyn Read + Send>),
    /// No contents, e.g. a directory entry.
    Absent,
}

impl FileContents {
    /// Returns true for fully buffered contents.
    #[inline]
    pub fn is_buffer(&self) -> bool {
        matches!(self, Self::Buffer(_))
    }

    /// Returns true for streamed contents.
    #[inline]
    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    /// Returns true when the file carries no contents.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the buffered bytes, or `None` for the other representations.
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }
}

// Readers are not `Debug`, so summarize instead of deriving.
impl fmt::Debug for FileContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer(bytes) => write!(f, "Buffer({} bytes)", bytes.len()),
            Self::Stream(_) => write!(f, "Stream(..)"),
            Self::Absent => write!(f, "Absent"),
        }
    }
}

impl From<Vec<u8>> for FileContents {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Buffer(bytes)
    }
}

impl From<String> for FileContents {
    fn from(text: String) -> Self {
        Self::Buffer(text.into_bytes())
    }
}

impl From<&str> for FileContents {
    fn from(text: &str) -> Self {
        Self::Buffer(text.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_predicates() {
        let contents = FileContents::from("hello");
        assert!(contents.is_buffer());
        assert!(!contents.is_stream());
        assert!(!contents.is_absent());
        assert_eq!(contents.as_bytes(), Some(b"hello".as_slice()));
    }

    #[test]
    fn test_empty_buffer_is_still_a_buffer() {
        let contents = FileContents::Buffer(Vec::new());
        assert!(contents.is_buffer());
        assert_eq!(contents.as_bytes(), Some(b"".as_slice()));
    }

    #[test]
    fn test_stream_predicates() {
        let contents = FileContents::Stream(Box::new(std::io::empty()));
        assert!(contents.is_stream());
        assert!(!contents.is_buffer());
        assert_eq!(contents.as_bytes(), None);
    }

    #[test]
    fn test_absent_predicates() {
        let contents = FileContents::Absent;
        assert!(contents.is_absent());
        assert!(!contents.is_buffer());
        assert!(!contents.is_stream());
        assert_eq!(contents.as_bytes(), None);
    }

    #[test]
    fn test_debug_summarizes_without_dumping_bytes() {
        assert_eq!(
            format!("{:?}", FileContents::from("hello")),
            "Buffer(5 bytes)"
        );
        assert_eq!(
            format!("{:?}", FileContents::Stream(Box::new(std::io::empty()))),
            "Stream(..)"
        );
        assert_eq!(format!("{:?}", FileContents::Absent), "Absent");
    }
}
