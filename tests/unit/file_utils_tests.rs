/*!
 * Tests for file and payload utility functions
 */

use babelgate::file_utils::{
    encode_bytes_base64, format_base64_image, is_url, strip_base64_prefix, FileSource,
    BASE64_JPEG_PREFIX,
};

use crate::common;

#[test]
fn test_formatBase64Image_thenStrip_shouldRoundTrip() {
    let formatted = format_base64_image("QUJD");
    assert!(formatted.starts_with(BASE64_JPEG_PREFIX));
    assert_eq!(strip_base64_prefix(&formatted), "QUJD");
}

#[test]
fn test_fileSource_path_shouldResolveFileContent() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "image.jpg", "ABC").unwrap();

    let source = FileSource::Path(path);
    assert_eq!(source.resolve().unwrap(), b"ABC");
    assert_eq!(source.resolve_base64().unwrap(), encode_bytes_base64(b"ABC"));
}

#[test]
fn test_fileSource_missingFile_shouldBeUnsupportedFormat() {
    let temp_dir = common::create_temp_dir().unwrap();
    let source = FileSource::Path(temp_dir.path().join("missing.jpg"));

    let error = source.resolve().unwrap_err();
    assert_eq!(error.status_code(), 400);
    assert_eq!(error.public_message(), "Unsupported file format");
}

#[test]
fn test_isUrl_shouldOnlyAcceptHttpSchemes() {
    assert!(is_url("https://example.com/glossary.xlsx"));
    assert!(is_url("http://example.com/doc.pdf"));
    assert!(!is_url("ftp://example.com/doc.pdf"));
    assert!(!is_url("./relative/path.pdf"));
    assert!(!is_url(""));
}
