use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};

use crate::{email::EmailAddress, password::Password};

/// Numeric user identifier as carried by bearer tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<UserId> for i64 {
    fn from(from: UserId) -> Self {
        from.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id       : UserId,
    pub email    : EmailAddress,
    pub password : Password,
    pub role     : Role,
}

/// Platform-wide authority, ordered by privilege.
///
/// Staff members review official-status submissions. Staff membership
/// is granted out of band and never through the web API.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    #[default]
    User  = 0,
    Staff = 1,
}
