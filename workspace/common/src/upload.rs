use thiserror::Error;

/// Largest image the pest detection service accepts.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Image extensions the pest detection service accepts.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Reasons a file is refused before it is uploaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("{name} is not a supported image (allowed: png, jpg, jpeg, gif)")]
    UnsupportedExtension { name: String },

    #[error("{name} is {size} bytes, the limit is {limit} bytes")]
    TooLarge { name: String, size: u64, limit: u64 },
}

/// Check a file chosen in the pest form before it is sent.
///
/// An empty name means the file input was left blank; the browser still
/// submits the entry, so it passes through untouched.
pub fn validate_upload(name: &str, size: u64) -> Result<(), UploadError> {
    if name.is_empty() {
        return Ok(());
    }

    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    let allowed = extension
        .as_deref()
        .is_some_and(|ext| ALLOWED_IMAGE_EXTENSIONS.contains(&ext));
    if !allowed {
        return Err(UploadError::UnsupportedExtension { name: name.to_string() });
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            name: name.to_string(),
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_images_case_insensitively() {
        assert!(validate_upload("leaf.png", 1024).is_ok());
        assert!(validate_upload("LEAF.JPEG", 1024).is_ok());
        assert!(validate_upload("scan.2024.gif", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn blank_file_input_passes() {
        assert!(validate_upload("", 0).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(
            validate_upload("notes.pdf", 10),
            Err(UploadError::UnsupportedExtension { name: "notes.pdf".to_string() })
        );
        assert!(validate_upload("png", 10).is_err());
    }

    #[test]
    fn rejects_oversized_files() {
        let err = validate_upload("field.jpg", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(matches!(err, UploadError::TooLarge { size, .. } if size == MAX_UPLOAD_BYTES + 1));
        assert!(err.to_string().contains("field.jpg"));
    }
}
