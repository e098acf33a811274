use serde::{Deserialize, Serialize};
use std::fmt;

/// A file handed over by the shell: its name and raw content
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn from_text(file_name: impl Into<String>, text: &str) -> Self {
        Self::new(file_name, text.as_bytes().to_vec())
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Inline preview of an uploaded screenshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePreview {
    pub file_name: String,
    pub mime_type: String,

    /// `data:<mime>;base64,...`
    pub data_url: String,

    /// Width and height in pixels, when the content decodes as an image
    pub dimensions: Option<(u32, u32)>,
}
