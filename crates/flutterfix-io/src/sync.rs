//! Synchronous file I/O operations.
//!
//! The rewrite engine is fully sequential, so the whole API is blocking.
//! Handles are scoped; a failure cannot leak an open file.

use std::fs as std_fs;
use std::io::Read;
use std::path::Path;

use crate::detect::decode_buffer;
use crate::error::IoError;

/// Read text from a file with size and binary checks.
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Returns
/// Decoded text content or an error.
///
/// # Example
///
/// ```rust,ignore
/// use flutterfix_io::read_text_safe;
///
/// let content = read_text_safe("lib/main.dart", 1024 * 1024)?;
/// ```
///
/// # Errors
/// Returns `IoError::NotFound` for a missing file, `IoError::TooLarge`
/// past the size cap, and the decode errors from [`decode_buffer`].
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = std_fs::metadata(path)
        .map_err(|_| IoError::NotFound(path.to_string_lossy().to_string()))?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = std_fs::File::open(path)?;
    let mut buffer = Vec::with_capacity(metadata.len() as usize);
    file.read_to_end(&mut buffer)?;

    decode_buffer(buffer)
}

/// Overwrite a file with new text content, in place.
///
/// The content is fully materialized in memory before the write syscall,
/// so a file is never left half-transformed under normal operation. There
/// is no temp-file+rename step: a crash during the write itself can still
/// corrupt the file, and that is part of the contract.
///
/// # Errors
/// Returns `IoError::System` when the underlying write fails.
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), IoError> {
    std_fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_sync_read() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("sync.dart");
        std_fs::write(&p, "Sync Read").unwrap();
        assert_eq!(read_text_safe(&p, 1024).unwrap(), "Sync Read");
    }

    #[test]
    fn test_sync_binary() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("binary.bin");
        let mut file = std_fs::File::create(&p).unwrap();
        file.write_all(b"\x00\x01\x02\x03").unwrap();
        assert!(matches!(read_text_safe(&p, 1024), Err(IoError::BinaryFile)));
    }

    #[test]
    fn test_file_too_large() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("large.dart");
        std_fs::write(&p, "12345678901234567890").unwrap();
        assert!(matches!(
            read_text_safe(&p, 10),
            Err(IoError::TooLarge(_, _))
        ));
    }

    #[test]
    fn test_file_not_found() {
        let result = read_text_safe("/nonexistent/file.dart", 1024);
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("round.dart");
        write_text(&p, "void main() {}\n").unwrap();
        assert_eq!(read_text_safe(&p, 1024).unwrap(), "void main() {}\n");
    }

    #[test]
    fn test_write_overwrites_in_place() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("over.dart");
        std_fs::write(&p, "old content that is longer").unwrap();
        write_text(&p, "new").unwrap();
        assert_eq!(read_text_safe(&p, 1024).unwrap(), "new");
    }
}
