//! Binary detection and decoding utilities.
//!
//! Quick binary detection using NULL byte scanning.

use memchr::memchr;

use crate::error::IoError;

/// Quick binary detection - checks first 8KB for NULL bytes.
///
/// Files containing NULL bytes in the first 8KB are considered binary.
/// This is a fast heuristic that works well for most text files.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let check_len = std::cmp::min(buffer.len(), 8192);
    memchr(0, &buffer[..check_len]).is_some()
}

/// Decode bytes to String, strictly.
///
/// First checks for binary content, then attempts UTF-8 decoding. A file
/// that fails to decode is skipped by the caller, never rewritten, so the
/// decode is strict rather than lossy.
///
/// # Errors
/// Returns `IoError::BinaryFile` when binary content is detected and
/// `IoError::Encoding` when the buffer is not valid UTF-8.
pub fn decode_buffer(buffer: Vec<u8>) -> Result<String, IoError> {
    if is_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }

    String::from_utf8(buffer).map_err(|_| IoError::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_not_binary() {
        assert!(!is_binary(b"Navigator.pop(context);"));
    }

    #[test]
    fn test_nul_is_binary() {
        assert!(is_binary(b"abc\x00def"));
    }

    #[test]
    fn test_decode_valid_utf8() {
        let decoded = decode_buffer(b"print('hello');".to_vec()).expect("valid utf-8");
        assert_eq!(decoded, "print('hello');");
    }

    #[test]
    fn test_decode_invalid_utf8_is_error() {
        let result = decode_buffer(vec![0xff, 0xfe, 0x41]);
        assert!(matches!(result, Err(IoError::Encoding)));
    }

    #[test]
    fn test_decode_binary_is_error() {
        let result = decode_buffer(vec![0x00, 0x01, 0x02]);
        assert!(matches!(result, Err(IoError::BinaryFile)));
    }
}
