//! Inline previews for uploaded screenshots.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::ImageReader;

use crate::domain::upload::{ImagePreview, UploadedFile};

/// Data URL plus sniffed MIME type and pixel size. Content that does not
/// decode still gets a preview, typed by its extension.
pub fn build_preview(upload: &UploadedFile) -> ImagePreview {
    let mime_type = image::guess_format(&upload.bytes)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| mime_from_extension(&upload.file_name).to_string());

    let dimensions = ImageReader::new(Cursor::new(upload.bytes.as_slice()))
        .with_guessed_format()
        .ok()
        .and_then(|reader| reader.into_dimensions().ok());

    ImagePreview {
        file_name: upload.file_name.clone(),
        data_url: format!("data:{};base64,{}", mime_type, STANDARD.encode(&upload.bytes)),
        mime_type,
        dimensions,
    }
}

fn mime_from_extension(file_name: &str) -> &'static str {
    let extension = file_name.rsplit('.').next().unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
