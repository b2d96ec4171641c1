//! Phrase input module
//!
//! Reads the phrase to analyze from a file (with encoding detection and
//! transcoding to UTF-8) or from any buffered reader such as stdin.

use crate::error::{FrequencyError, Result};

use bytesize::ByteSize;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::io::BufRead;
use std::path::Path;

/// Bytes sampled for encoding detection
const DETECTION_SAMPLE_SIZE: usize = 64 * 1024;

const LINE_ENDINGS: &[char] = &['\n', '\r'];

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of raw content by sampling its start
pub fn detect_encoding(content: &[u8]) -> EncodingInfo {
    let sample = &content[..content.len().min(DETECTION_SAMPLE_SIZE)];

    if sample.is_empty() {
        return EncodingInfo::default();
    }

    if let Some(encoding) = detect_bom(sample) {
        return EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == content.len());
    let encoding = detector.guess(None, true);

    // Rough confidence: valid UTF-8 is certain, anything else is a guess
    let confidence = if encoding == encoding_rs::UTF_8 {
        if std::str::from_utf8(sample).is_ok() {
            1.0
        } else {
            0.5
        }
    } else {
        0.8
    };

    EncodingInfo {
        name: encoding.name(),
        confidence,
        encoding,
    }
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.len() >= 3 && content[0..3] == [0xEF, 0xBB, 0xBF] {
        return Some(encoding_rs::UTF_8);
    }
    if content.len() >= 2 {
        if content[0..2] == [0xFE, 0xFF] {
            return Some(encoding_rs::UTF_16BE);
        }
        if content[0..2] == [0xFF, 0xFE] {
            return Some(encoding_rs::UTF_16LE);
        }
    }
    None
}

/// Decode raw content and return its first line
pub fn first_line(content: &[u8]) -> String {
    let info = detect_encoding(content);
    log::debug!("Detected encoding {} (confidence {:.1})", info.name, info.confidence);

    let (decoded, _, had_errors) = info.encoding.decode(content);
    if had_errors {
        log::warn!("Encoding errors in input, using lossy conversion");
    }

    // A line ends at the first '\n' or lone '\r'
    decoded.split(LINE_ENDINGS).next().unwrap_or_default().to_string()
}

/// Read the phrase from the first line of a file
pub fn read_phrase_file(path: &Path) -> Result<String> {
    let content = std::fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
            FrequencyError::InputOpen {
                path: path.to_path_buf(),
                source,
            }
        }
        _ => FrequencyError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    log::debug!("Read {:?} ({})", path, ByteSize(content.len() as u64));
    Ok(first_line(&content))
}

/// Read the phrase as one line from a buffered reader
///
/// The raw bytes go through the same decoding as file input. End of input
/// before any data yields the empty phrase.
pub fn read_phrase<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line).map_err(FrequencyError::Stdin)?;
    Ok(first_line(&line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_utf8_detection() {
        let info = detect_encoding("Hello, World!\nПривет мир!\n".as_bytes());
        assert_eq!(info.name, "UTF-8");
    }

    #[test]
    fn test_bom_detection() {
        assert_eq!(detect_bom(&[0xEF, 0xBB, 0xBF, b'a']), Some(encoding_rs::UTF_8));
        assert_eq!(detect_bom(&[0xFF, 0xFE, b'a', 0]), Some(encoding_rs::UTF_16LE));
        assert_eq!(detect_bom(b"plain"), None);
    }

    #[test]
    fn test_first_line_only() {
        assert_eq!(first_line(b"Hello Logic\r\nsecond line\n"), "Hello Logic");
        assert_eq!(first_line(b""), "");
    }

    #[test]
    fn test_first_line_cr_endings() {
        assert_eq!(first_line(b"logic\rworld\r"), "logic");
        assert_eq!(first_line(b"\rlogic"), "");
    }

    #[test]
    fn test_first_line_utf16() {
        let mut content = vec![0xFF, 0xFE];
        for unit in "logic\nrest".encode_utf16() {
            content.extend_from_slice(&unit.to_le_bytes());
        }

        assert_eq!(first_line(&content), "logic");
    }

    #[test]
    fn test_read_phrase_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "I love to work in global logic!").unwrap();
        writeln!(file, "ignored").unwrap();

        let phrase = read_phrase_file(file.path()).unwrap();
        assert_eq!(phrase, "I love to work in global logic!");
    }

    #[test]
    fn test_read_phrase_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_phrase_file(&dir.path().join("missing.txt")).unwrap_err();

        assert!(matches!(err, FrequencyError::InputOpen { .. }));
    }

    #[test]
    fn test_read_phrase_reader() {
        assert_eq!(read_phrase(Cursor::new("logic\nmore\n")).unwrap(), "logic");
        assert_eq!(read_phrase(Cursor::new("no newline")).unwrap(), "no newline");
        assert_eq!(read_phrase(Cursor::new("")).unwrap(), "");
        assert_eq!(read_phrase(Cursor::new("logic\rworld\n")).unwrap(), "logic");
    }

    #[test]
    fn test_read_phrase_invalid_utf8() {
        let bytes = vec![b'l', 0xff, b'o', b'\n'];

        let phrase = read_phrase(Cursor::new(bytes.clone())).unwrap();
        assert_eq!(phrase, first_line(&bytes));
        assert!(phrase.starts_with('l') && phrase.ends_with('o'));
    }
}
