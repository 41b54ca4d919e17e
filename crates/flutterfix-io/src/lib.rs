#![allow(clippy::doc_markdown)]

//! flutterfix-io - Safe text I/O for the flutterfix rewrite engine
//!
//! A small synchronous file I/O layer with safety checks.
//!
//! # Features
//!
//! - **Safety**: Binary detection & size limits before a file is touched
//! - **Strict decoding**: invalid UTF-8 is an error, never silently mangled
//! - **In-place writes**: whole-file overwrite, matching the rewrite contract
//!
//! # Architecture
//!
//! ```text
//! flutterfix-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & decoding
//! └── sync.rs     # read_text_safe / write_text
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use flutterfix_io::{read_text_safe, write_text};
//!
//! let content = read_text_safe("lib/main.dart", 1024 * 1024)?;
//! write_text("lib/main.dart", &content)?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod detect;
mod error;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::IoError;
pub use sync::{read_text_safe, write_text};

// Re-export detection utilities for advanced use
pub use detect::{decode_buffer, is_binary};
