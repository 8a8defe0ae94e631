//! Unit tests for user domain values.

use crate::user::domain::{EmailAddress, User, UserDomainError};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[case("ada@example.com", "ada@example.com")]
#[case("  Ada@Example.COM ", "ada@example.com")]
fn email_is_trimmed_and_lowercased(#[case] raw: &str, #[case] expected: &str) {
    let email = EmailAddress::new(raw).expect("valid email");
    assert_eq!(email.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("ada")]
#[case("@example.com")]
#[case("ada@")]
#[case("ada@@example.com")]
#[case("a da@example.com")]
fn malformed_email_is_rejected(#[case] raw: &str) {
    assert_eq!(
        EmailAddress::new(raw),
        Err(UserDomainError::InvalidEmail(raw.to_owned()))
    );
}

#[rstest]
fn display_name_is_trimmed() {
    let email = EmailAddress::new("ada@example.com").expect("valid email");
    let user = User::new(email, "  Ada Lovelace ", &DefaultClock).expect("valid user");
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[rstest]
fn blank_display_name_is_rejected() {
    let email = EmailAddress::new("ada@example.com").expect("valid email");
    assert_eq!(
        User::new(email, "   ", &DefaultClock),
        Err(UserDomainError::EmptyDisplayName)
    );
}
