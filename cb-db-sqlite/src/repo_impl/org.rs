use super::*;

impl<'a> OrganizationRepo for DbReadOnly<'a> {
    fn create_org(&self, _org: &Organization) -> Result<()> {
        unreachable!();
    }
    fn add_org_admin(&self, _org_id: &Id, _user_id: UserId) -> Result<()> {
        unreachable!();
    }
    fn add_org_member(&self, _org_id: &Id, _user_id: UserId) -> Result<()> {
        unreachable!();
    }

    fn get_org(&self, id: &Id) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn is_org_admin(&self, org_id: &Id, user_id: UserId) -> Result<bool> {
        is_org_admin(&mut self.conn.borrow_mut(), org_id, user_id)
    }
    fn org_admin_user_ids(&self, org_id: &Id) -> Result<Vec<UserId>> {
        org_admin_user_ids(&mut self.conn.borrow_mut(), org_id)
    }
    fn count_org_members(&self, org_id: &Id) -> Result<u64> {
        count_org_members(&mut self.conn.borrow_mut(), org_id)
    }
}

impl<'a> OrganizationRepo for DbReadWrite<'a> {
    fn create_org(&self, org: &Organization) -> Result<()> {
        create_org(&mut self.conn.borrow_mut(), org)
    }
    fn add_org_admin(&self, org_id: &Id, user_id: UserId) -> Result<()> {
        add_org_admin(&mut self.conn.borrow_mut(), org_id, user_id)
    }
    fn add_org_member(&self, org_id: &Id, user_id: UserId) -> Result<()> {
        add_org_member(&mut self.conn.borrow_mut(), org_id, user_id)
    }

    fn get_org(&self, id: &Id) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn is_org_admin(&self, org_id: &Id, user_id: UserId) -> Result<bool> {
        is_org_admin(&mut self.conn.borrow_mut(), org_id, user_id)
    }
    fn org_admin_user_ids(&self, org_id: &Id) -> Result<Vec<UserId>> {
        org_admin_user_ids(&mut self.conn.borrow_mut(), org_id)
    }
    fn count_org_members(&self, org_id: &Id) -> Result<u64> {
        count_org_members(&mut self.conn.borrow_mut(), org_id)
    }
}

impl<'a> OrganizationRepo for DbConnection<'a> {
    fn create_org(&self, org: &Organization) -> Result<()> {
        create_org(&mut self.conn.borrow_mut(), org)
    }
    fn add_org_admin(&self, org_id: &Id, user_id: UserId) -> Result<()> {
        add_org_admin(&mut self.conn.borrow_mut(), org_id, user_id)
    }
    fn add_org_member(&self, org_id: &Id, user_id: UserId) -> Result<()> {
        add_org_member(&mut self.conn.borrow_mut(), org_id, user_id)
    }

    fn get_org(&self, id: &Id) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn is_org_admin(&self, org_id: &Id, user_id: UserId) -> Result<bool> {
        is_org_admin(&mut self.conn.borrow_mut(), org_id, user_id)
    }
    fn org_admin_user_ids(&self, org_id: &Id) -> Result<Vec<UserId>> {
        org_admin_user_ids(&mut self.conn.borrow_mut(), org_id)
    }
    fn count_org_members(&self, org_id: &Id) -> Result<u64> {
        count_org_members(&mut self.conn.borrow_mut(), org_id)
    }
}

fn create_org(conn: &mut SqliteConnection, org: &Organization) -> Result<()> {
    let new_org = models::NewOrganization::from(org);
    diesel::insert_into(schema::organization::table)
        .values(&new_org)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_org(conn: &mut SqliteConnection, id: &Id) -> Result<Organization> {
    use schema::organization::dsl;
    Ok(dsl::organization
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::OrganizationEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn add_org_admin(conn: &mut SqliteConnection, org_id: &Id, user_id: UserId) -> Result<()> {
    let new_admin = models::NewOrganizationAdmin {
        org_rowid: resolve_org_rowid(conn, org_id)?,
        user_id: user_id.into(),
    };
    diesel::insert_into(schema::organization_admin::table)
        .values(&new_admin)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn is_org_admin(conn: &mut SqliteConnection, org_id: &Id, user_id: UserId) -> Result<bool> {
    use schema::organization_admin::dsl;
    let org_rowid = match resolve_org_rowid(conn, org_id) {
        Ok(rowid) => rowid,
        Err(repo::Error::NotFound) => return Ok(false),
        Err(err) => return Err(err),
    };
    let count = dsl::organization_admin
        .filter(dsl::org_rowid.eq(org_rowid))
        .filter(dsl::user_id.eq(i64::from(user_id)))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn org_admin_user_ids(conn: &mut SqliteConnection, org_id: &Id) -> Result<Vec<UserId>> {
    use schema::organization_admin::dsl;
    let org_rowid = resolve_org_rowid(conn, org_id)?;
    Ok(dsl::organization_admin
        .select(dsl::user_id)
        .filter(dsl::org_rowid.eq(org_rowid))
        .load::<i64>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(UserId::from)
        .collect())
}

fn add_org_member(conn: &mut SqliteConnection, org_id: &Id, user_id: UserId) -> Result<()> {
    let new_member = models::NewOrganizationMember {
        org_rowid: resolve_org_rowid(conn, org_id)?,
        user_id: user_id.into(),
    };
    diesel::insert_into(schema::organization_member::table)
        .values(&new_member)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn count_org_members(conn: &mut SqliteConnection, org_id: &Id) -> Result<u64> {
    use schema::organization_member::dsl;
    let org_rowid = resolve_org_rowid(conn, org_id)?;
    let count = dsl::organization_member
        .filter(dsl::org_rowid.eq(org_rowid))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as u64)
}
