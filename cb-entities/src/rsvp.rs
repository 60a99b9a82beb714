use std::str::FromStr;

use num_derive::{FromPrimitive, ToPrimitive};

use crate::{id::Id, time::Timestamp, user::UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum RsvpStatus {
    Attending = 0,
    Maybe = 1,
    Declined = 2,
}

#[derive(Debug)]
pub struct RsvpStatusParseError;

impl FromStr for RsvpStatus {
    type Err = RsvpStatusParseError;
    fn from_str(s: &str) -> Result<RsvpStatus, Self::Err> {
        match &*s.to_lowercase() {
            "attending" => Ok(RsvpStatus::Attending),
            "maybe" => Ok(RsvpStatus::Maybe),
            "declined" => Ok(RsvpStatus::Declined),
            _ => Err(RsvpStatusParseError),
        }
    }
}

/// A user's reply to an event. At most one per (event, user).
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rsvp {
    pub event_id   : Id,
    pub user_id    : UserId,
    pub status     : RsvpStatus,
    pub created_at : Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsvpStats {
    pub attending: u64,
    pub maybe: u64,
    pub declined: u64,
}
