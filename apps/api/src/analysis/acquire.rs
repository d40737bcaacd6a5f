//! Text acquisition for uploaded files. Only plain text is decoded here;
//! binary document formats are reported rather than parsed.

use std::path::Path;

use tracing::debug;

use crate::errors::AppError;

const TEXT_EXTENSIONS: &[&str] = &["txt"];
const BINARY_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "rtf", "odt", "png", "jpg", "jpeg", "gif", "tif", "tiff", "bmp", "webp",
];
const UTF8_BOM: char = '\u{feff}';

/// Decodes an uploaded résumé to normalised text: lossy UTF-8, leading BOM
/// removed, CRLF and lone CR turned into LF.
pub fn decode_resume_text(bytes: &[u8], file_name: Option<&str>) -> Result<String, AppError> {
    let extension = file_name
        .and_then(|name| Path::new(name).extension())
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        None => {}
        Some(ext) if TEXT_EXTENSIONS.contains(&ext) => {}
        Some(ext) if BINARY_EXTENSIONS.contains(&ext) => {
            return Err(AppError::UnsupportedFormat(format!(
                ".{ext} files must be converted to plain text before analysis"
            )));
        }
        Some(ext) => {
            return Err(AppError::UnsupportedFormat(format!(
                "unrecognised file type '.{ext}'; upload a .txt file"
            )));
        }
    }

    let decoded = String::from_utf8_lossy(bytes);
    let decoded: &str = &decoded;
    let text = decoded
        .strip_prefix(UTF8_BOM)
        .unwrap_or(decoded)
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    debug!(bytes = bytes.len(), chars = text.chars().count(), "decoded upload");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = decode_resume_text(b"Jane Smith\nPython", Some("resume.txt")).unwrap();
        assert_eq!(text, "Jane Smith\nPython");
    }

    #[test]
    fn test_missing_name_or_extension_is_text() {
        assert_eq!(decode_resume_text(b"hello", None).unwrap(), "hello");
        assert_eq!(decode_resume_text(b"hello", Some("RESUME")).unwrap(), "hello");
    }

    #[test]
    fn test_bom_and_line_endings_normalised() {
        let raw = b"\xEF\xBB\xBFline one\r\nline two\rline three";
        let text = decode_resume_text(raw, Some("cv.TXT")).unwrap();
        assert_eq!(text, "line one\nline two\nline three");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let text = decode_resume_text(b"caf\xFF", None).unwrap();
        assert_eq!(text, "caf\u{FFFD}");
    }

    #[test]
    fn test_binary_formats_rejected() {
        for name in ["resume.pdf", "resume.DOCX", "scan.png"] {
            let err = decode_resume_text(b"%PDF-1.7", Some(name)).unwrap_err();
            assert!(matches!(err, AppError::UnsupportedFormat(_)), "{name}");
        }
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = decode_resume_text(b"{}", Some("resume.json")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(msg) if msg.contains(".json")));
    }
}
