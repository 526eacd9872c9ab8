//! A typed, valid-by-construction RUT.

use std::fmt;
use std::str::FromStr;

use crate::checksum::{compute_check_digit, format, strip_decorations};
use crate::error::RutError;

/// A validated Chilean RUT: normalized digit body plus its check character.
///
/// A `Rut` can only be obtained through [`Rut::parse`] (which verifies the
/// supplied check character) or [`Rut::from_body`] (which derives it), so
/// every value of this type carries a correct checksum.
///
/// Equality and hashing are on the normalized content, so
/// `"12.345.678-5"` and `"12345678-5"` parse to equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    body: String,
    check_digit: char,
}

impl Rut {
    /// Parses a full identifier (body plus trailing check character).
    ///
    /// Decorations (`.`, `-`, spaces) are stripped first; the check
    /// character is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// - [`RutError::Empty`] if the input is blank or the body holds no
    ///   digits
    /// - [`RutError::TooShort`] if only a single character remains after
    ///   stripping decorations
    /// - [`RutError::InvalidCheckDigit`] if the supplied check character
    ///   does not match the computed one
    pub fn parse(s: &str) -> Result<Self, RutError> {
        let stripped = strip_decorations(s);

        let mut chars = stripped.chars();
        let Some(supplied) = chars.next_back() else {
            return Err(RutError::Empty);
        };
        let raw_body = chars.as_str();
        if raw_body.is_empty() {
            return Err(RutError::TooShort);
        }

        let body: String = raw_body.chars().filter(|c| c.is_ascii_digit()).collect();
        let expected = compute_check_digit(&body)?;

        let found = supplied.to_ascii_lowercase();
        if found != expected {
            return Err(RutError::InvalidCheckDigit { expected, found });
        }

        Ok(Self {
            body,
            check_digit: expected,
        })
    }

    /// Derives the check character for a bare digit body.
    ///
    /// # Errors
    ///
    /// Returns [`RutError::Empty`] if the input contains no digits.
    pub fn from_body(body: &str) -> Result<Self, RutError> {
        let normalized: String = body.chars().filter(|c| c.is_ascii_digit()).collect();
        let check_digit = compute_check_digit(&normalized)?;
        Ok(Self {
            body: normalized,
            check_digit,
        })
    }

    /// The normalized digit body, without decorations or check character.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The check character (lowercase; `'k'` when applicable).
    pub fn check_digit(&self) -> char {
        self.check_digit
    }

    /// Compact storage form: no dot grouping, uppercase check character
    /// (`12345678-5`, `1000005-K`).
    pub fn compact(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 2);
        out.push_str(&self.body);
        out.push('-');
        out.push(self.check_digit.to_ascii_uppercase());
        out
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format(&self.body, true))
    }
}

impl FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Rut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Rut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
