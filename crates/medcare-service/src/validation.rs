//! Field checks shared by registration, booking and messages.
//!
//! Presence is checked first and fails with one fixed message. Format
//! checks are then collected so that every problem with a submission is
//! reported at once, space separated.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use medcare_core::error::AppError;
use medcare_core::result::AppResult;
use medcare_entity::user::Gender;

/// Message for any missing required field.
pub const FILL_FULL_FORM: &str = "Please Fill Full Form!";

/// A JSON scalar accepted where clients send either numbers or strings
/// (phone numbers and external identifiers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A JSON integer.
    Int(i64),
    /// A JSON number with a fraction or exponent.
    Float(f64),
    /// A JSON string.
    Text(String),
}

impl Scalar {
    /// True for strings that are empty after trimming.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Textual form, trimmed. Integral floats render without a fraction.
    pub fn to_text(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Float(f) => match integral(*f) {
                Some(n) => n.to_string(),
                None => f.to_string(),
            },
            Self::Text(s) => s.trim().to_string(),
        }
    }

    /// Whole-number value, if this scalar is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) => integral(*f),
            Self::Text(s) => parse_number(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

/// Parse a trimmed decimal string as a whole number.
pub fn parse_number(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().and_then(integral))
}

/// The trimmed value if it is present and non-blank.
pub fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// The scalar if it is present and non-blank.
pub fn filled_scalar(value: &Option<Scalar>) -> Option<&Scalar> {
    value.as_ref().filter(|s| !s.is_blank())
}

/// Fail with [`FILL_FULL_FORM`] unless every flag is true.
pub fn require_all(present: &[bool]) -> AppResult<()> {
    if present.iter().all(|p| *p) {
        Ok(())
    } else {
        Err(AppError::validation(FILL_FULL_FORM))
    }
}

/// True for exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// True for a syntactically valid email address.
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Accumulates format errors for one submission.
#[derive(Debug, Default)]
pub struct FieldErrors {
    messages: Vec<String>,
}

impl FieldErrors {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` unless `ok`.
    pub fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.messages.push(message.into());
        }
    }

    /// Minimum character count for a name field.
    pub fn min_chars(&mut self, value: &str, min: usize, label: &str) {
        self.check(
            value.chars().count() >= min,
            format!("{label} Must Contain At Least {min} Characters!"),
        );
    }

    /// Email syntax.
    pub fn email(&mut self, email: &str) {
        self.check(is_valid_email(email), "Provide A Valid Email!");
    }

    /// Ten-digit phone.
    pub fn phone(&mut self, phone: &str) {
        self.check(
            is_valid_phone(phone),
            "Phone Number Must Contain Exactly 10 Digits!",
        );
    }

    /// Parse a gender, recording the failure.
    pub fn gender(&mut self, value: &str) -> Option<Gender> {
        match value.parse::<Gender>() {
            Ok(gender) => Some(gender),
            Err(e) => {
                self.messages.push(e.message);
                None
            }
        }
    }

    /// Parse a date of birth, recording the failure.
    pub fn dob(&mut self, value: &str) -> Option<NaiveDate> {
        let parsed = parse_date(value);
        self.check(parsed.is_some(), "Invalid dob");
        parsed
    }

    /// Common checks for a person's name and contact details.
    pub fn person(&mut self, first_name: &str, last_name: &str, email: &str, phone: &str) {
        self.min_chars(first_name, 3, "First Name");
        self.min_chars(last_name, 3, "Last Name");
        self.email(email);
        self.phone(phone);
    }

    /// `Ok` if nothing was recorded, otherwise one validation error with
    /// every message.
    pub fn finish(self) -> AppResult<()> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(self.messages.join(" ")))
        }
    }
}
