//! Contact page form: inquiry prefill, phone cleanup and field validation.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str =
    "Thank you for contacting us! We will get back to you within 24 hours.";

const MAX_PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// First failing rule, in the order the form checks them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter a valid name (at least 2 characters).")]
    NameTooShort,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a subject (at least 3 characters).")]
    SubjectTooShort,

    #[error("Please enter a message (at least 10 characters).")]
    MessageTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Blank form opened from a property's "Contact Us" button.
    pub fn inquiry_about(property_title: &str) -> Self {
        Self {
            subject: format!("Inquiry about: {}", property_title),
            ..Self::default()
        }
    }

    /// Every field trimmed, and the phone reduced to its digits.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: normalize_phone(self.phone.trim()),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Checks name, email, subject and message in that order. Phone is optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        let form = self.trimmed();

        if form.name.chars().count() < 2 {
            return Err(ContactError::NameTooShort);
        }
        if !is_valid_email(&form.email) {
            return Err(ContactError::InvalidEmail);
        }
        if form.subject.chars().count() < 3 {
            return Err(ContactError::SubjectTooShort);
        }
        if form.message.chars().count() < 10 {
            return Err(ContactError::MessageTooShort);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Keeps the first ten digits of whatever was typed.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect()
}
