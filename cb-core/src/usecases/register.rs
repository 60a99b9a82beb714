use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<UserId> {
    if !validate::is_valid_email(&u.email) {
        return Err(Error::EmailAddress);
    }
    let email = u.email.parse::<EmailAddress>()?;
    let password = u.password.parse::<Password>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        // Replaced by the database-assigned id on insert.
        id: UserId::from(0),
        email,
        password,
        role: Role::User,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    let id = repo.create_user(&new_user)?;
    Ok(id)
}
