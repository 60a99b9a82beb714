use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Resolves the user behind a verified token id and checks the
/// required minimum role.
///
/// An id that no longer resolves to a user counts as unauthenticated,
/// an insufficient role as forbidden.
pub fn authorize_user_by_id<R: UserRepo>(
    repo: &R,
    user_id: UserId,
    min_required_role: Role,
) -> Result<User> {
    match repo.get_user(user_id) {
        Ok(user) => crate::authorization::user::authorize_role(&user, min_required_role)
            .map(|()| user)
            .map_err(|_| Error::Forbidden),
        Err(RepoError::NotFound) => Err(Error::Unauthorized),
        Err(err) => Err(Error::Repo(err)),
    }
}

/// Checks that the user administers the submission target.
pub fn authorize_target_admin<R>(repo: &R, user_id: UserId, target: &OfficialTarget) -> Result<()>
where
    R: OrganizationRepo + EventRepo,
{
    let is_admin = match target {
        OfficialTarget::Organization(org_id) => repo.is_org_admin(org_id, user_id)?,
        OfficialTarget::Event(event_id) => repo.is_event_admin(event_id, user_id)?,
    };
    if is_admin {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}
