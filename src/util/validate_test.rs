use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_simple_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last@mail.example.co"));
    assert!(is_valid_email("a@b.c"));
}

#[test]
fn rejects_missing_at() {
    assert!(!is_valid_email("user.example.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn rejects_missing_dot_after_at() {
    assert!(!is_valid_email("user@localhost"));
    assert!(!is_valid_email("first.last@example"));
}

#[test]
fn rejects_dot_only_at_domain_edges() {
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@com."));
}

#[test]
fn rejects_empty_local_part_and_extra_at() {
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("a@b@example.com"));
}

#[test]
fn rejects_whitespace() {
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email("user@exa mple.com"));
}

// =============================================================
// Wallet address
// =============================================================

#[test]
fn wallet_address_requires_prefix_and_forty_hex_digits() {
    assert!(is_wallet_address("0xABCDEF0123456789abcdef0123456789ABCDEF01"));
    assert!(!is_wallet_address("ABCDEF0123456789abcdef0123456789ABCDEF0123"));
    assert!(!is_wallet_address("0xABCDEF"));
    assert!(!is_wallet_address("0xZZCDEF0123456789abcdef0123456789ABCDEF01"));
}

// =============================================================
// Login form
// =============================================================

#[test]
fn login_errors_report_required_fields() {
    let errs = login_errors("", "");
    assert_eq!(
        errs,
        vec![
            ValidationError::new("email", "Email is required"),
            ValidationError::new("password", "Password is required"),
        ]
    );
}

#[test]
fn login_errors_report_malformed_email() {
    let errs = login_errors("nobody", "secret");
    assert_eq!(errs, vec![ValidationError::new("email", "Valid email is required")]);
}

#[test]
fn login_errors_empty_for_valid_input() {
    assert!(login_errors("user@example.com", "secret").is_empty());
}

#[test]
fn padded_email_is_malformed_not_trimmed() {
    for email in ["  user@example.com", "user@example.com ", "   "] {
        let errs = login_errors(email, "secret");
        assert_eq!(errs, vec![ValidationError::new("email", "Valid email is required")], "email {email:?}");
    }
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn field_errors_keep_first_message_per_field() {
    let errors: FieldErrors = vec![
        ValidationError::new("email", "first"),
        ValidationError::new("email", "second"),
        ValidationError::new("password", "Password is required"),
    ]
    .into_iter()
    .collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("email"), Some("first"));
}

#[test]
fn field_errors_clear_removes_single_field() {
    let mut errors = FieldErrors::default();
    errors.insert("email", "bad");
    errors.insert("password", "missing");
    errors.clear("email");
    assert_eq!(errors.get("email"), None);
    assert_eq!(errors.get("password"), Some("missing"));
    errors.clear("email");
    assert!(!errors.is_empty());
}
