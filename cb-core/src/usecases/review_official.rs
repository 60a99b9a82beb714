use super::prelude::*;
use crate::usecases::{authorize_user_by_id, submit_for_official::describe_target};

/// Approves a pending official-status submission.
///
/// Inserting the official entry and removing the pending submission
/// form one logical transition; callers are expected to run this use
/// case within a database transaction.
pub fn approve_official<R>(
    repo: &R,
    user_id: UserId,
    org_id: Option<Id>,
    event_id: Option<Id>,
) -> Result<()>
where
    R: UserRepo + OfficialRepo,
{
    let (reviewer, target) = authorize_review(repo, user_id, org_id, event_id)?;
    if !repo.is_submission_pending(&target)? {
        return Err(Error::NoPendingSubmission);
    }
    repo.add_official_entry(&target, Timestamp::now())?;
    let deleted = repo.delete_pending_submission(&target)?;
    debug_assert_eq!(deleted, 1);
    log::info!(
        "Staff {} approved official status of {}",
        reviewer.email,
        describe_target(&target)
    );
    Ok(())
}

/// Rejects a pending official-status submission.
///
/// The pending entry is removed without a trace; the target may be
/// submitted again afterwards.
pub fn reject_official<R>(
    repo: &R,
    user_id: UserId,
    org_id: Option<Id>,
    event_id: Option<Id>,
) -> Result<()>
where
    R: UserRepo + OfficialRepo,
{
    let (reviewer, target) = authorize_review(repo, user_id, org_id, event_id)?;
    let deleted = repo.delete_pending_submission(&target)?;
    if deleted == 0 {
        return Err(Error::NoPendingSubmission);
    }
    log::info!(
        "Staff {} rejected official-status request of {}",
        reviewer.email,
        describe_target(&target)
    );
    Ok(())
}

// Staff membership is checked before the target identifiers are
// validated, so a non-staff caller never learns whether its request
// body was well-formed.
fn authorize_review<R>(
    repo: &R,
    user_id: UserId,
    org_id: Option<Id>,
    event_id: Option<Id>,
) -> Result<(User, OfficialTarget)>
where
    R: UserRepo,
{
    let reviewer = authorize_user_by_id(repo, user_id, Role::Staff)?;
    let target =
        OfficialTarget::from_optional_ids(org_id, event_id).ok_or(Error::InvalidOfficialTarget)?;
    Ok((reviewer, target))
}
