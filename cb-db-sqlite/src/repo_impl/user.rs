use num_traits::ToPrimitive as _;

use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<UserId> {
        unreachable!();
    }
    fn set_user_role(&self, _email: &EmailAddress, _role: Role) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: UserId) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<UserId> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn set_user_role(&self, email: &EmailAddress, role: Role) -> Result<()> {
        set_user_role(&mut self.conn.borrow_mut(), email, role)
    }

    fn get_user(&self, id: UserId) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<UserId> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn set_user_role(&self, email: &EmailAddress, role: Role) -> Result<()> {
        set_user_role(&mut self.conn.borrow_mut(), email, role)
    }

    fn get_user(&self, id: UserId) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<UserId> {
    use schema::users::dsl;
    let new_user = models::NewUser::from(u);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = dsl::users
        .select(dsl::id)
        .filter(dsl::email.eq(new_user.email))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(UserId::from(id))
}

fn set_user_role(conn: &mut SqliteConnection, email: &EmailAddress, role: Role) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::email.eq(email.as_str())))
        .set(dsl::role.eq(role.to_i16().unwrap_or_default()))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: UserId) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(i64::from(id)))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
