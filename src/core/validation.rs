//! Client-side input validation
//!
//! Checks that run before any network call: a failed validation produces an
//! inline message and issues no request.

/// Upload size ceiling enforced client-side.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Maximum folder name length accepted by the backend.
pub const MAX_FOLDER_NAME_LENGTH: usize = 255;

/// File extensions accepted by the upload dialog.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "txt", "jpg", "jpeg", "png", "gif", "bmp", "webp", "xlsx", "xls",
    "pptx", "ppt",
];

/// A validation failure, carrying the inline message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Validate a folder name before creation: trims, rejects empty and overlong.
/// Returns the trimmed name to send.
pub fn validate_folder_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("Folder name is required"));
    }
    if name.len() > MAX_FOLDER_NAME_LENGTH {
        return Err(ValidationError::new(format!(
            "Folder name too long (max {} characters)",
            MAX_FOLDER_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}

/// Validate a selected upload against the size ceiling.
pub fn validate_upload_size(size: u64) -> Result<(), ValidationError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::new("File size must be less than 50MB"));
    }
    Ok(())
}

/// The `accept` attribute value for the upload file input.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

/// Validate a login/registration email field.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("Email is required"));
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::new("Please enter a valid email"));
    }
    Ok(())
}

/// Validate a required password field.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new("Password is required"));
    }
    Ok(())
}

/// Validate the registration password confirmation.
pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::new("Passwords do not match"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_name_is_trimmed() {
        assert_eq!(validate_folder_name("  Reports  ").unwrap(), "Reports");
    }

    #[test]
    fn test_empty_folder_name_rejected() {
        assert!(validate_folder_name("").is_err());
        assert!(validate_folder_name("   ").is_err());
    }

    #[test]
    fn test_overlong_folder_name_rejected() {
        let long = "x".repeat(MAX_FOLDER_NAME_LENGTH + 1);
        assert!(validate_folder_name(&long).is_err());

        let exact = "x".repeat(MAX_FOLDER_NAME_LENGTH);
        assert!(validate_folder_name(&exact).is_ok());
    }

    #[test]
    fn test_upload_over_ceiling_rejected() {
        // 51 MB is over the 50 MB ceiling.
        assert!(validate_upload_size(51 * 1024 * 1024).is_err());
        assert!(validate_upload_size(MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_upload_size(0).is_ok());
    }

    #[test]
    fn test_upload_error_message() {
        let err = validate_upload_size(MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert_eq!(err.to_string(), "File size must be less than 50MB");
    }

    #[test]
    fn test_accept_attribute_lists_dotted_extensions() {
        let accept = accept_attribute();
        assert!(accept.starts_with(".pdf,"));
        assert!(accept.contains(".docx"));
        assert!(accept.ends_with(".ppt"));
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("hunter2").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password_confirmation("a", "a").is_ok());
        assert!(validate_password_confirmation("a", "b").is_err());
    }
}
