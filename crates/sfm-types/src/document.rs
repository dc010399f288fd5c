/// MIME type the upload flow accepts
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A file chosen by the user, read fully into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// PDF by MIME type; browsers that report no type fall back to the extension
    pub fn is_pdf(&self) -> bool {
        if self.mime_type.is_empty() {
            self.name.to_ascii_lowercase().ends_with(".pdf")
        } else {
            self.mime_type == PDF_MIME_TYPE
        }
    }
}
