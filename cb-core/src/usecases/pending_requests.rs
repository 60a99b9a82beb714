use super::prelude::*;
use crate::usecases::authorize_user_by_id;

#[derive(Debug, Default)]
pub struct PendingRequests {
    pub organizations: Vec<(Organization, PendingSubmission)>,
    pub events: Vec<(Event, PendingSubmission)>,
}

pub fn list_pending_requests<R>(repo: &R, user_id: UserId) -> Result<PendingRequests>
where
    R: UserRepo + OfficialRepo,
{
    authorize_user_by_id(repo, user_id, Role::Staff)?;
    Ok(PendingRequests {
        organizations: repo.pending_organizations()?,
        events: repo.pending_events()?,
    })
}

pub fn pending_counts<R>(repo: &R, user_id: UserId) -> Result<PendingCounts>
where
    R: UserRepo + OfficialRepo,
{
    authorize_user_by_id(repo, user_id, Role::Staff)?;
    Ok(repo.count_pending_submissions()?)
}
