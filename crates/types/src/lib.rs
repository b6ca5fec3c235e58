//! Validated text primitives shared by the triage crates.
//!
//! Each type in this crate guarantees its shape once constructed, so code further in only has to
//! deal with values that already passed the intake rules. Values are stored exactly as supplied:
//! validation never rewrites what the clerk typed.

use std::fmt;

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input did not have the required number of characters
    #[error("expected {expected} characters, got {actual}")]
    Length { expected: usize, actual: usize },
    /// The input contained something other than ASCII digits
    #[error("expected only ASCII digits")]
    NotDigits,
    /// The input was not shaped like `local@domain.tld`
    #[error("malformed e-mail address")]
    MalformedEmail,
}

/// A string type that guarantees at least one non-whitespace character.
///
/// Unlike a trimmed string, the original input is kept verbatim; only the check ignores
/// surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the input is empty or contains only whitespace.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(input))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(s).map_err(serde::de::Error::custom)
    }
}

/// A Brazilian CPF number in its bare form: exactly 11 ASCII digits.
///
/// Punctuated forms such as `123.456.789-01` are rejected rather than normalised; the check
/// digits are not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Number of digits in a CPF.
    pub const LEN: usize = 11;

    /// Validates and wraps a CPF string.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Length` when the input is not 11 characters long and
    /// `TextError::NotDigits` when any character is not an ASCII digit.
    pub fn parse(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        let actual = input.chars().count();
        if actual != Self::LEN {
            return Err(TextError::Length {
                expected: Self::LEN,
                actual,
            });
        }
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TextError::NotDigits);
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An e-mail address with a plausible `local@domain` shape.
///
/// The check is structural only:
/// - exactly one `@`
/// - non-empty local part
/// - non-empty domain containing at least one `.`
///
/// Nothing else is inspected, so `joao@.com` and `jo ao@example.com` pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates and wraps an e-mail address.
    ///
    /// # Errors
    ///
    /// Returns `TextError::MalformedEmail` if the address does not have the shape above.
    pub fn parse(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        let (local, domain) = input.split_once('@').ok_or(TextError::MalformedEmail)?;

        if local.is_empty() || domain.contains('@') || !domain.contains('.') {
            return Err(TextError::MalformedEmail);
        }

        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
