use super::prelude::*;
use crate::{repositories::Error as RepoError, usecases::authorize_target_admin};

/// Submits an organization or event for official status.
///
/// Preconditions are checked in a fixed order and the first failing
/// check wins; nothing is written on any failure path:
///
/// 1. exactly one target id is given
/// 2. the caller administers the target
/// 3. the target has both a thumbnail and a banner image
/// 4. no submission is already pending for the target
/// 5. the target is not already official
pub fn submit_for_official<R>(
    repo: &R,
    user_id: UserId,
    org_id: Option<Id>,
    event_id: Option<Id>,
) -> Result<()>
where
    R: OrganizationRepo + EventRepo + OfficialRepo,
{
    let target =
        OfficialTarget::from_optional_ids(org_id, event_id).ok_or(Error::InvalidOfficialTarget)?;
    authorize_target_admin(repo, user_id, &target)?;
    if !target_has_both_images(repo, &target)? {
        return Err(Error::MissingImages);
    }
    if repo.is_submission_pending(&target)? {
        return Err(Error::AlreadyPending);
    }
    if repo.is_official(&target)? {
        return Err(Error::AlreadyOfficial);
    }
    let submission = PendingSubmission {
        target,
        created_at: Timestamp::now(),
    };
    log::info!(
        "User {user_id} submitted {} for official status",
        describe_target(&submission.target)
    );
    repo.add_pending_submission(&submission).map_err(|err| {
        match err {
            // Lost a concurrent submission race; the uniqueness
            // constraint reports it after our pending check passed.
            RepoError::AlreadyExists => Error::AlreadyPending,
            err => Error::Repo(err),
        }
    })
}

fn target_has_both_images<R>(repo: &R, target: &OfficialTarget) -> Result<bool>
where
    R: OrganizationRepo + EventRepo,
{
    let has_both_images = match target {
        OfficialTarget::Organization(org_id) => match repo.get_org(org_id) {
            Ok(org) => org.has_both_images(),
            Err(RepoError::NotFound) => false,
            Err(err) => return Err(Error::Repo(err)),
        },
        OfficialTarget::Event(event_id) => match repo.get_event(event_id) {
            Ok(event) => event.has_both_images(),
            Err(RepoError::NotFound) => false,
            Err(err) => return Err(Error::Repo(err)),
        },
    };
    Ok(has_both_images)
}

pub(crate) fn describe_target(target: &OfficialTarget) -> String {
    match target {
        OfficialTarget::Organization(id) => format!("organization {id}"),
        OfficialTarget::Event(id) => format!("event {id}"),
    }
}
