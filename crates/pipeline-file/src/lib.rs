//! In-memory file objects for one-file-at-a-time transform pipelines.
//!
//! This crate provides the file object a pipeline hands to each transform step:
//! a pair of paths (working and base-relative) plus contents in one of three
//! representations (fully buffered, unread stream, or absent). Transforms
//! mutate the file in place and return it to the pipeline.

mod contents;
mod file;

pub use contents::FileContents;
pub use file::PipelineFile;
