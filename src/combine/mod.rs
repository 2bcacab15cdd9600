//! Virtual combined-asset module
//!
//! Maps a request target like `/assets/??a.js,b.js` to an ordered set of
//! files under the configured root, then concatenates their bytes into a
//! single payload. Resolution and reading are decoupled so each can be
//! tested without a running server.

pub mod combiner;
pub mod resolver;

use std::path::PathBuf;

// Re-export the two core entry points
pub use combiner::combine_files;
pub use resolver::{parse_request_target, RequestDescriptor};

/// Failures of the resolve/combine pipeline.
///
/// Every variant maps to exactly one terminal HTTP response in the handler:
/// `MalformedUrl` and `PathTraversal` become a 400 before any file is
/// touched, `FileRead` becomes a 404 carrying the error text.
#[derive(Debug, thiserror::Error)]
pub enum CombineError {
    #[error("malformed combine URL '{target}': {reason}")]
    MalformedUrl { target: String, reason: &'static str },

    #[error("path traversal rejected in '{target}'")]
    PathTraversal { target: String },

    #[error("failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CombineError {
    /// True for errors raised before any filesystem access.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MalformedUrl { .. } | Self::PathTraversal { .. })
    }
}
