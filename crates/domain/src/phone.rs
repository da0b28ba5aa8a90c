use regex::Regex;
use serde::{Serialize, Serializer};
use std::{fmt::Display, str::FromStr, sync::OnceLock};
use thiserror::Error;

/// Dialing code every stored number is normalized to
pub const COUNTRY_CODE: &str = "254";
/// Leading digit of numbers written in the local format, e.g. `0712345678`
pub const TRUNK_PREFIX: char = '0';

/// Country code, one mobile operator prefix digit and eight subscriber digits.
/// ASCII digits only, `\d` is Unicode aware.
const MOBILE_NUMBER_PATTERN: &str = r"^\+254[17][0-9]{8}$";

fn mobile_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MOBILE_NUMBER_PATTERN).expect("Mobile number pattern to be valid"))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPhoneNumber {
    #[error("Phone number is empty")]
    Empty,
    #[error("Phone number `{0}` is neither in local nor in international format")]
    UnknownFormat(String),
    #[error("Phone number `{0}` is not a valid mobile number")]
    InvalidFormat(String),
}

/// A dialable mobile number in international format, e.g. `+254712345678`.
///
/// The only way to get one is through `PhoneNumber::parse`, so holding a
/// `PhoneNumber` means the number has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalizes a raw, user submitted phone number.
    ///
    /// Separators (whitespace, hyphens and parentheses) are stripped. A local
    /// number gets its trunk prefix replaced by the country code, a number
    /// carrying the bare country code gets a leading `+`. Anything else is
    /// rejected, as is a result that does not look like a mobile number.
    pub fn parse(raw: &str) -> Result<Self, InvalidPhoneNumber> {
        let stripped = raw
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
            .collect::<String>();

        if stripped.is_empty() {
            return Err(InvalidPhoneNumber::Empty);
        }

        let international = if let Some(local) = stripped.strip_prefix(TRUNK_PREFIX) {
            format!("+{}{}", COUNTRY_CODE, local)
        } else if stripped.starts_with(COUNTRY_CODE) {
            format!("+{}", stripped)
        } else if stripped.starts_with('+') && stripped[1..].starts_with(COUNTRY_CODE) {
            stripped
        } else {
            return Err(InvalidPhoneNumber::UnknownFormat(raw.to_string()));
        };

        if !mobile_number_regex().is_match(&international) {
            return Err(InvalidPhoneNumber::InvalidFormat(raw.to_string()));
        }

        Ok(Self(international))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = InvalidPhoneNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
