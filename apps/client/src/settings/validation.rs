#![allow(dead_code)]

//! Local validation for the password-change and account-deletion flows.
//! These run before any network call: a failure here aborts the operation
//! with no side effects, and the remote adapter is never invoked.

use crate::errors::ClientError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// The exact phrase a user must type to confirm account deletion.
/// Case-sensitive; "delete" does not pass.
pub const DELETION_PHRASE: &str = "DELETE";

/// Ephemeral password-change payload. Exists for one submission only.
#[derive(Debug, Clone)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Ephemeral account-deletion payload.
#[derive(Debug, Clone)]
pub struct AccountDeletionRequest {
    pub password: String,
    pub confirmation_phrase: String,
}

pub fn validate_password_change(req: &PasswordChangeRequest) -> Result<(), ClientError> {
    if req.current_password.is_empty() {
        return Err(ClientError::Validation(
            "Current password is required".to_string(),
        ));
    }
    if req.new_password != req.confirm_password {
        return Err(ClientError::Validation(
            "New passwords do not match".to_string(),
        ));
    }
    if req.new_password.len() < MIN_PASSWORD_LEN {
        return Err(ClientError::Validation(format!(
            "New password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_deletion(req: &AccountDeletionRequest) -> Result<(), ClientError> {
    if req.confirmation_phrase != DELETION_PHRASE {
        return Err(ClientError::Validation(format!(
            "Type {DELETION_PHRASE} to confirm account deletion"
        )));
    }
    if req.password.is_empty() {
        return Err(ClientError::Validation("Password is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(current: &str, new: &str, confirm: &str) -> PasswordChangeRequest {
        PasswordChangeRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn deletion(password: &str, phrase: &str) -> AccountDeletionRequest {
        AccountDeletionRequest {
            password: password.to_string(),
            confirmation_phrase: phrase.to_string(),
        }
    }

    #[test]
    fn test_valid_change_passes() {
        assert!(validate_password_change(&change("x", "abcdef", "abcdef")).is_ok());
    }

    #[test]
    fn test_short_new_password_rejected() {
        let err = validate_password_change(&change("x", "ab", "ab")).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn test_exactly_min_length_passes() {
        assert!(validate_password_change(&change("x", "abcdef", "abcdef")).is_ok());
        assert!(validate_password_change(&change("x", "abcde", "abcde")).is_err());
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let err = validate_password_change(&change("x", "abcdef", "xyzxyz")).unwrap_err();
        match err {
            ClientError::Validation(msg) => assert!(msg.contains("do not match")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_current_password_rejected() {
        assert!(validate_password_change(&change("", "abcdef", "abcdef")).is_err());
    }

    #[test]
    fn test_deletion_requires_exact_uppercase_phrase() {
        assert!(validate_deletion(&deletion("pw", "DELETE")).is_ok());
        assert!(validate_deletion(&deletion("pw", "delete")).is_err());
        assert!(validate_deletion(&deletion("pw", "Delete")).is_err());
        assert!(validate_deletion(&deletion("pw", "DELETE ")).is_err());
        assert!(validate_deletion(&deletion("pw", "")).is_err());
    }

    #[test]
    fn test_deletion_requires_password() {
        let err = validate_deletion(&deletion("", "DELETE")).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
