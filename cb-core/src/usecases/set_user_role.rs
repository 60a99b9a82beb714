use super::prelude::*;

/// Grants or revokes a platform role.
///
/// Reserved for out-of-band administration, e.g. the command line.
/// Roles are never changed through the web API.
pub fn set_user_role<R: UserRepo>(repo: &R, email: &EmailAddress, role: Role) -> Result<()> {
    repo.set_user_role(email, role)?;
    log::info!("Set role of {email} to {role:?}");
    Ok(())
}
