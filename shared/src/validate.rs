//! Local form validation
//!
//! Everything here is blocked client-side before any network call is made.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error("Description is required")]
    EmptyDescription,

    #[error("Title is required")]
    EmptyTitle,

    #[error("Username is required")]
    EmptyUsername,

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Only Gmail addresses are allowed")]
    NotGmail,
}

/// Reject comments that are empty or whitespace-only; returns the trimmed
/// text that should actually be sent
pub fn validate_comment(content: &str) -> Result<&str, ValidationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyComment)
    } else {
        Ok(trimmed)
    }
}

pub fn validate_post_description(description: &str) -> Result<&str, ValidationError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyDescription)
    } else {
        Ok(trimmed)
    }
}

pub fn validate_title(title: &str) -> Result<&str, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyTitle)
    } else {
        Ok(trimmed)
    }
}

pub fn validate_registration(
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// The insight e-mail feature only delivers to Gmail
pub fn validate_gmail_address(address: &str) -> Result<(), ValidationError> {
    let address = address.trim();
    if address.len() > "@gmail.com".len() && address.ends_with("@gmail.com") {
        Ok(())
    } else {
        Err(ValidationError::NotGmail)
    }
}

/// Toggle `user_id` in a like list, returning the new list and whether the
/// post ends up liked. Used for the optimistic patch; the pre-mutation list
/// is kept by the caller for precise rollback.
pub fn toggle_like(likes: &[String], user_id: &str) -> (Vec<String>, bool) {
    if likes.iter().any(|id| id == user_id) {
        (
            likes.iter().filter(|id| *id != user_id).cloned().collect(),
            false,
        )
    } else {
        let mut next = likes.to_vec();
        next.push(user_id.to_string());
        (next, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_comment_rejected() {
        assert_eq!(validate_comment("   \t\n"), Err(ValidationError::EmptyComment));
        assert_eq!(validate_comment(""), Err(ValidationError::EmptyComment));
        assert_eq!(validate_comment(" nice post "), Ok("nice post"));
    }

    #[test]
    fn test_registration_rules() {
        assert!(validate_registration("ada", "longenough", "longenough").is_ok());
        assert_eq!(
            validate_registration("", "longenough", "longenough"),
            Err(ValidationError::EmptyUsername)
        );
        assert_eq!(
            validate_registration("ada", "short", "short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_registration("ada", "longenough", "different"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_gmail_only() {
        assert!(validate_gmail_address("friend@gmail.com").is_ok());
        assert_eq!(
            validate_gmail_address("friend@example.com"),
            Err(ValidationError::NotGmail)
        );
        // A bare domain is not an address
        assert_eq!(
            validate_gmail_address("@gmail.com"),
            Err(ValidationError::NotGmail)
        );
    }

    #[test]
    fn test_double_toggle_restores_likes() {
        let original = vec!["u1".to_string(), "u2".to_string()];

        let (liked, is_liked) = toggle_like(&original, "u3");
        assert!(is_liked);
        assert_eq!(liked.len(), 3);

        let (unliked, is_liked) = toggle_like(&liked, "u3");
        assert!(!is_liked);
        assert_eq!(unliked, original);
    }

    #[test]
    fn test_unlike_removes_only_that_user() {
        let likes = vec!["u1".to_string(), "u2".to_string()];
        let (next, is_liked) = toggle_like(&likes, "u1");
        assert!(!is_liked);
        assert_eq!(next, vec!["u2".to_string()]);
    }
}
