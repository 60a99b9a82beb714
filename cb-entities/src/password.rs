use std::str::FromStr;

use thiserror::Error;

/// A salted bcrypt password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl Password {
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_hash(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, plain: &str) -> bool {
        pwhash::bcrypt::verify(plain, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.len() < MIN_PASSWORD_LEN || plain.contains(char::is_whitespace) {
            return Err(ParseError);
        }
        let hash = pwhash::bcrypt::hash(plain).map_err(|_| ParseError)?;
        Ok(Self(hash))
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}
