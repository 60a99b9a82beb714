use std::{fmt, str::FromStr};

use thiserror::Error;

/// A plain e-mail address without a display name.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self(address)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let s = s.trim();
        let (local, domain) = s.split_once('@').ok_or(EmailAddressParseError)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') || s.contains(char::is_whitespace) {
            return Err(EmailAddressParseError);
        }
        Ok(Self(s.to_lowercase()))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
