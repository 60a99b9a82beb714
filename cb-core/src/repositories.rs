// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    // The id of the given user is ignored on insert and the
    // database-assigned id is returned instead.
    fn create_user(&self, user: &User) -> Result<UserId>;

    fn get_user(&self, id: UserId) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;

    fn set_user_role(&self, email: &EmailAddress, role: Role) -> Result<()>;
}

pub trait OrganizationRepo {
    fn create_org(&self, org: &Organization) -> Result<()>;
    fn get_org(&self, id: &Id) -> Result<Organization>;

    fn add_org_admin(&self, org_id: &Id, user_id: UserId) -> Result<()>;
    fn is_org_admin(&self, org_id: &Id, user_id: UserId) -> Result<bool>;
    fn org_admin_user_ids(&self, org_id: &Id) -> Result<Vec<UserId>>;

    fn add_org_member(&self, org_id: &Id, user_id: UserId) -> Result<()>;
    fn count_org_members(&self, org_id: &Id) -> Result<u64>;
}

pub trait EventRepo {
    fn create_event(&self, event: &Event) -> Result<()>;
    fn get_event(&self, id: &Id) -> Result<Event>;
    fn events_of_org(&self, org_id: &Id) -> Result<Vec<Event>>;

    fn add_event_admin(&self, event_id: &Id, user_id: UserId) -> Result<()>;
    fn is_event_admin(&self, event_id: &Id, user_id: UserId) -> Result<bool>;
    fn event_admin_user_ids(&self, event_id: &Id) -> Result<Vec<UserId>>;
}

pub trait RsvpRepo {
    // Replaces any previous reply of the same user to the same event.
    fn set_rsvp(&self, rsvp: &Rsvp) -> Result<()>;

    fn count_rsvps_with_status(&self, event_id: &Id, status: RsvpStatus) -> Result<u64>;
    fn count_rsvps_of_org_events(&self, org_id: &Id) -> Result<u64>;
}

pub trait OfficialRepo {
    // Fails with `Error::AlreadyExists` if the target already has a
    // pending submission. The storage layer enforces this with a
    // uniqueness constraint, which makes concurrent submissions safe.
    fn add_pending_submission(&self, submission: &PendingSubmission) -> Result<()>;
    fn delete_pending_submission(&self, target: &OfficialTarget) -> Result<usize>;
    fn is_submission_pending(&self, target: &OfficialTarget) -> Result<bool>;

    fn add_official_entry(&self, target: &OfficialTarget, created_at: Timestamp) -> Result<()>;
    fn is_official(&self, target: &OfficialTarget) -> Result<bool>;

    fn pending_organizations(&self) -> Result<Vec<(Organization, PendingSubmission)>>;
    fn pending_events(&self) -> Result<Vec<(Event, PendingSubmission)>>;
    fn count_pending_submissions(&self) -> Result<PendingCounts>;
}
