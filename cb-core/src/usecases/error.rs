use thiserror::Error;

use crate::{
    repositories,
    util::validate::{EventInvalidation, OrgInvalidation},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("The title is invalid")]
    Title,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Invalid e-mail address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid RSVP status")]
    RsvpStatus,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("Exactly one of org_id and event_id must be given")]
    InvalidOfficialTarget,
    #[error("The target must have both a thumbnail and banner image")]
    MissingImages,
    #[error("An official-status request is already pending")]
    AlreadyPending,
    #[error("The target is already official")]
    AlreadyOfficial,
    #[error("No pending official-status request found")]
    NoPendingSubmission,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<cb_entities::password::ParseError> for Error {
    fn from(_: cb_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<cb_entities::email::EmailAddressParseError> for Error {
    fn from(_: cb_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<cb_entities::rsvp::RsvpStatusParseError> for Error {
    fn from(_: cb_entities::rsvp::RsvpStatusParseError) -> Self {
        Self::RsvpStatus
    }
}

impl From<OrgInvalidation> for Error {
    fn from(err: OrgInvalidation) -> Self {
        match err {
            OrgInvalidation::Name => Self::Name,
        }
    }
}

impl From<EventInvalidation> for Error {
    fn from(err: EventInvalidation) -> Self {
        match err {
            EventInvalidation::Title => Self::Title,
            EventInvalidation::EndDateBeforeStart => Self::EndDateBeforeStart,
        }
    }
}
