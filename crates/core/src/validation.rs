//! Intake validation rules.
//!
//! Each rule is a pure function that either accepts its input or returns the
//! [`ValidationError`] carrying the fixed message for that rule. Patient registration runs them
//! in the order they appear here and stops at the first failure.

use crate::constants::BIRTH_DATE_FORMAT;
use crate::ValidationError;
use chrono::{Local, NaiveDate};
use triage_types::{Cpf, EmailAddress, NonEmptyText};

/// Rejects empty and whitespace-only names.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    NonEmptyText::new(name)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidName)
}

/// Accepts only CPF numbers made of exactly 11 ASCII digits.
pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    Cpf::parse(cpf)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidCpf)
}

/// Accepts addresses shaped like `local@domain.tld`.
///
/// See [`EmailAddress`] for the exact structural rule.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    EmailAddress::parse(email)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidEmail)
}

/// Parses a `DD/MM/YYYY` birth date that is not later than `today`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidBirthDate` if the string is not a real calendar date in that
/// format, or if the date is in the future relative to `today`. The year must be written with
/// exactly four digits and no sign.
pub fn parse_birth_date(date: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let year_ok = date
        .rsplit_once('/')
        .is_some_and(|(_, year)| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()));
    if !year_ok {
        return Err(ValidationError::InvalidBirthDate);
    }

    let parsed = NaiveDate::parse_from_str(date, BIRTH_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthDate)?;

    if parsed > today {
        return Err(ValidationError::InvalidBirthDate);
    }

    Ok(parsed)
}

/// Same rule as [`parse_birth_date`], discarding the parsed value.
pub fn validate_birth_date(date: &str, today: NaiveDate) -> Result<(), ValidationError> {
    parse_birth_date(date, today).map(|_| ())
}

/// [`validate_birth_date`] against today's date in the desk's local time zone.
pub fn validate_birth_date_now(date: &str) -> Result<(), ValidationError> {
    validate_birth_date(date, local_today())
}

/// Today's calendar date in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
