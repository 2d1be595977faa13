use super::*;

fn form(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.set(Field::Name, name);
    form.set(Field::Email, email);
    form.set(Field::Message, message);
    form
}

#[test]
fn email_pattern_accepts_conventional_addresses() {
    for email in ["user@example.com", "ada@x.com", "first.last@mail.example.org", "a_b-c@sub-domain.io"] {
        assert!(is_valid_email(email), "{email} should be accepted");
    }
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    for email in [
        "plainaddress",
        "a@b",
        "@missing-local.com",
        "user@example.c",
        "user@example.toolongtld",
        "user..dots@example.com",
        "user@@example.com",
        "us er@example.com",
        "",
    ] {
        assert!(!is_valid_email(email), "{email} should be rejected");
    }
}

#[test]
fn email_pattern_is_ascii_only() {
    assert!(!is_valid_email("jos\u{e9}@example.com"));
}

#[test]
fn validate_reports_first_missing_field() {
    assert_eq!(validate(&form("", "", "")), Err(ValidationError::MissingField(Field::Name)));
    assert_eq!(validate(&form("Ada", "", "hi")), Err(ValidationError::MissingField(Field::Email)));
    assert_eq!(validate(&form("Ada", "ada@x.com", "")), Err(ValidationError::MissingField(Field::Message)));
}

#[test]
fn validate_checks_presence_before_email_shape() {
    assert_eq!(validate(&form("", "not-an-email", "hi")), Err(ValidationError::MissingField(Field::Name)));
    assert_eq!(validate(&form("Ada", "not-an-email", "hi")), Err(ValidationError::InvalidEmail));
}

#[test]
fn validate_accepts_complete_form() {
    assert_eq!(validate(&form("Ada", "ada@x.com", "hi")), Ok(()));
}

#[test]
fn errors_map_to_notices() {
    assert_eq!(ValidationError::MissingField(Field::Email).notice(), Notice::FillAllFields);
    assert_eq!(ValidationError::InvalidEmail.notice(), Notice::InvalidEmail);
}
