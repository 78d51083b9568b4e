use crate::error::AppError;

/// Normalizes an email address for customer identity lookups
///
/// Customers are keyed by email compared case-insensitively, so every lookup and
/// insert goes through this trimmed, lower-cased form.
///
/// # Arguments
/// - `email` - The email as supplied by the caller
///
/// # Returns
/// - `Ok(String)` - Trimmed, lower-cased email
/// - `Err(AppError::Validation)` - Email is blank or lacks an `@`
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let normalized = email.trim().to_lowercase();

    if normalized.is_empty() || !normalized.contains('@') {
        return Err(AppError::Validation(format!(
            "Invalid email address '{}'",
            email.trim()
        )));
    }

    Ok(normalized)
}
