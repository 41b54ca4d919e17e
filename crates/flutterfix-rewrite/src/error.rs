//! Error types for rewrite operations.

use flutterfix_io::IoError;
use thiserror::Error;

/// Error types for rewrite operations.
///
/// Every failure on a single file funnels through here; the batch runner
/// reports it and moves on to the next file.
#[derive(Error, Debug)]
pub enum RewriteError {
    /// Reading or decoding the source file failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// Writing the rewritten content back failed.
    #[error("Write error: {0}")]
    Write(IoError),
}
