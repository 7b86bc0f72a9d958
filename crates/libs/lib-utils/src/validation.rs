//! # Validation Utilities
//!
//! Input validation for registration fields. Each validator returns a
//! human-readable reason on failure; callers decide how to surface it.

/// Validate password strength.
///
/// Requires at least 8 characters with one uppercase letter, one lowercase
/// letter, and one digit.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }
    Ok(())
}

/// Validate email syntax.
///
/// Syntax check only: a single `@` separating a non-empty local part from a
/// dotted domain, with no whitespace. Deliverability is not our problem.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.chars().any(char::is_whitespace) {
        return Err("Email must not contain whitespace".to_string());
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err("Invalid email format".to_string());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err("Invalid email domain".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_accepts_strong() {
        assert!(validate_password("Str0ng!Pass").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let err = validate_password("Ab1").expect_err("short password should fail");
        assert_eq!(err, "Password must be at least 8 characters long");
    }

    #[test]
    fn test_password_missing_uppercase() {
        assert!(validate_password("weakpass1").is_err());
    }

    #[test]
    fn test_password_missing_digit() {
        assert!(validate_password("NoDigitsHere").is_err());
    }

    #[test]
    fn test_email_accepts_plus_tag() {
        assert!(validate_email("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_rejects_missing_at() {
        assert!(validate_email("invalid-email").is_err());
    }

    #[test]
    fn test_email_rejects_double_at() {
        assert!(validate_email("a@b@example.com").is_err());
    }

    #[test]
    fn test_email_rejects_bare_domain() {
        assert!(validate_email("a@localhost").is_err());
    }

    #[test]
    fn test_email_rejects_whitespace() {
        assert!(validate_email("a b@example.com").is_err());
    }
}
