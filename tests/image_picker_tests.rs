//! Background image loading: the publish form's image payload acquisition.

use promptarch::app::archui::image_picker::load_image_as_data_uri;
use std::io::Write;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

#[test]
fn loads_a_png_into_a_data_uri() {
    let mut file = tempfile::NamedTempFile::with_suffix(".png").unwrap();
    file.write_all(&PNG_SIGNATURE).unwrap();
    file.flush().unwrap();

    let handle = load_image_as_data_uri(file.path().to_path_buf());
    let result = handle.recv().expect("loader thread should report back");

    let uri = result.unwrap();
    assert!(uri.starts_with("data:image/png;base64,"));
}

#[test]
fn mime_type_follows_the_sniffed_format_not_the_extension() {
    // JPEG bytes behind a .png name still come back as image/jpeg
    let mut file = tempfile::NamedTempFile::with_suffix(".png").unwrap();
    file.write_all(&JPEG_SIGNATURE).unwrap();
    file.flush().unwrap();

    let handle = load_image_as_data_uri(file.path().to_path_buf());
    let uri = handle.recv().unwrap().unwrap();
    assert!(uri.starts_with("data:image/jpeg;base64,"));
}

#[test]
fn non_image_bytes_are_reported_as_an_error() {
    let mut file = tempfile::NamedTempFile::with_suffix(".png").unwrap();
    file.write_all(b"just some text").unwrap();
    file.flush().unwrap();

    let handle = load_image_as_data_uri(file.path().to_path_buf());
    let result = handle.recv().unwrap();
    assert!(result.is_err());
}

#[test]
fn missing_file_is_reported_as_an_error() {
    let handle = load_image_as_data_uri("/definitely/not/here.png".into());
    let result = handle.recv().unwrap();
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("/definitely/not/here.png"));
}
