//! Client-side checks run before any file leaves the browser.

use super::limits::MAX_IMAGE_BYTES;

/// Why a selected file was refused. `Display` is the alert text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("请上传文本文件 (.txt)")]
    NotPlainText,
    #[error("请上传CSV格式的文件，文件需包含content列")]
    NotCsv,
    #[error("请上传图片文件")]
    NotImage,
    #[error("图片大小不能超过5MB")]
    ImageTooLarge { size: u64 },
}

const DOCUMENT_MIME_TYPES: &[&str] = &["text/plain", "application/octet-stream"];
const DOCUMENT_EXTENSIONS: &[&str] = &["txt", "text"];

/// What a dropped file is treated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Document,
}

impl FileKind {
    pub fn classify(mime: &str) -> Self {
        if is_image_mime(mime) {
            FileKind::Image
        } else {
            FileKind::Document
        }
    }
}

/// Lower-cased extension after the last dot.
pub fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Single-document upload: plain-text MIME type or `.txt`/`.text` extension.
pub fn validate_document(name: &str, mime: &str) -> Result<(), UploadRejection> {
    let mime_ok = DOCUMENT_MIME_TYPES.contains(&mime);
    let ext_ok = file_extension(name)
        .map(|ext| DOCUMENT_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);
    if mime_ok || ext_ok {
        Ok(())
    } else {
        Err(UploadRejection::NotPlainText)
    }
}

/// Batch clustering and evaluation sets must be `.csv`.
pub fn validate_batch_csv(name: &str) -> Result<(), UploadRejection> {
    if name.to_ascii_lowercase().ends_with(".csv") {
        Ok(())
    } else {
        Err(UploadRejection::NotCsv)
    }
}

/// Images for visual QA: `image/*` and at most [`MAX_IMAGE_BYTES`].
pub fn validate_image(mime: &str, size: u64) -> Result<(), UploadRejection> {
    if !is_image_mime(mime) {
        return Err(UploadRejection::NotImage);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(UploadRejection::ImageTooLarge { size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_accepts_plain_text() {
        assert_eq!(validate_document("report.txt", ""), Ok(()));
        assert_eq!(validate_document("REPORT.TXT", ""), Ok(()));
        assert_eq!(validate_document("notes.text", "application/x-unknown"), Ok(()));
        assert_eq!(validate_document("病历", "text/plain"), Ok(()));
        assert_eq!(validate_document("blob", "application/octet-stream"), Ok(()));
    }

    #[test]
    fn test_document_rejects_other_types() {
        assert_eq!(
            validate_document("scan.pdf", "application/pdf"),
            Err(UploadRejection::NotPlainText)
        );
        assert_eq!(
            validate_document("photo.png", "image/png"),
            Err(UploadRejection::NotPlainText)
        );
        assert_eq!(
            validate_document("txt", "application/msword"),
            Err(UploadRejection::NotPlainText)
        );
    }

    #[test]
    fn test_batch_requires_csv() {
        assert_eq!(validate_batch_csv("corpus.CSV"), Ok(()));
        assert_eq!(validate_batch_csv("corpus.xlsx"), Err(UploadRejection::NotCsv));
        assert_eq!(validate_batch_csv("csv"), Err(UploadRejection::NotCsv));
    }

    #[test]
    fn test_image_limits() {
        assert_eq!(validate_image("image/jpeg", MAX_IMAGE_BYTES), Ok(()));
        assert_eq!(
            validate_image("image/jpeg", MAX_IMAGE_BYTES + 1),
            Err(UploadRejection::ImageTooLarge {
                size: MAX_IMAGE_BYTES + 1
            })
        );
        assert_eq!(validate_image("text/plain", 10), Err(UploadRejection::NotImage));
        assert_eq!(validate_image("", 10), Err(UploadRejection::NotImage));
    }

    #[test]
    fn test_classify_drop() {
        assert_eq!(FileKind::classify("image/png"), FileKind::Image);
        assert_eq!(FileKind::classify("text/plain"), FileKind::Document);
        assert_eq!(FileKind::classify(""), FileKind::Document);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("a.b.TXT"), Some("txt".to_string()));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), None);
    }
}
