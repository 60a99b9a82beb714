use super::*;

impl<'a> EventRepo for DbReadOnly<'a> {
    fn create_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }
    fn add_event_admin(&self, _event_id: &Id, _user_id: UserId) -> Result<()> {
        unreachable!();
    }

    fn get_event(&self, id: &Id) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn events_of_org(&self, org_id: &Id) -> Result<Vec<Event>> {
        events_of_org(&mut self.conn.borrow_mut(), org_id)
    }
    fn is_event_admin(&self, event_id: &Id, user_id: UserId) -> Result<bool> {
        is_event_admin(&mut self.conn.borrow_mut(), event_id, user_id)
    }
    fn event_admin_user_ids(&self, event_id: &Id) -> Result<Vec<UserId>> {
        event_admin_user_ids(&mut self.conn.borrow_mut(), event_id)
    }
}

impl<'a> EventRepo for DbReadWrite<'a> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn add_event_admin(&self, event_id: &Id, user_id: UserId) -> Result<()> {
        add_event_admin(&mut self.conn.borrow_mut(), event_id, user_id)
    }

    fn get_event(&self, id: &Id) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn events_of_org(&self, org_id: &Id) -> Result<Vec<Event>> {
        events_of_org(&mut self.conn.borrow_mut(), org_id)
    }
    fn is_event_admin(&self, event_id: &Id, user_id: UserId) -> Result<bool> {
        is_event_admin(&mut self.conn.borrow_mut(), event_id, user_id)
    }
    fn event_admin_user_ids(&self, event_id: &Id) -> Result<Vec<UserId>> {
        event_admin_user_ids(&mut self.conn.borrow_mut(), event_id)
    }
}

impl<'a> EventRepo for DbConnection<'a> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn add_event_admin(&self, event_id: &Id, user_id: UserId) -> Result<()> {
        add_event_admin(&mut self.conn.borrow_mut(), event_id, user_id)
    }

    fn get_event(&self, id: &Id) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn events_of_org(&self, org_id: &Id) -> Result<Vec<Event>> {
        events_of_org(&mut self.conn.borrow_mut(), org_id)
    }
    fn is_event_admin(&self, event_id: &Id, user_id: UserId) -> Result<bool> {
        is_event_admin(&mut self.conn.borrow_mut(), event_id, user_id)
    }
    fn event_admin_user_ids(&self, event_id: &Id) -> Result<Vec<UserId>> {
        event_admin_user_ids(&mut self.conn.borrow_mut(), event_id)
    }
}

fn create_event(conn: &mut SqliteConnection, e: &Event) -> Result<()> {
    let org_rowid = resolve_org_rowid(conn, &e.org_id)?;
    let new_event = models::NewEvent::from_event(e, org_rowid);
    diesel::insert_into(schema::event::table)
        .values(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_event(conn: &mut SqliteConnection, id: &Id) -> Result<Event> {
    use schema::{event, organization};
    Ok(event::table
        .inner_join(organization::table)
        .select((
            event::rowid,
            event::id,
            event::title,
            event::description,
            event::start_at,
            event::end_at,
            event::thumbnail_url,
            event::banner_url,
            event::visibility,
            event::landmark,
            event::custom_location,
            organization::id,
        ))
        .filter(event::id.eq(id.as_str()))
        .first::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn events_of_org(conn: &mut SqliteConnection, org_id: &Id) -> Result<Vec<Event>> {
    use schema::{event, organization};
    Ok(event::table
        .inner_join(organization::table)
        .select((
            event::rowid,
            event::id,
            event::title,
            event::description,
            event::start_at,
            event::end_at,
            event::thumbnail_url,
            event::banner_url,
            event::visibility,
            event::landmark,
            event::custom_location,
            organization::id,
        ))
        .filter(organization::id.eq(org_id.as_str()))
        .order_by(event::start_at.asc())
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn add_event_admin(conn: &mut SqliteConnection, event_id: &Id, user_id: UserId) -> Result<()> {
    let new_admin = models::NewEventAdmin {
        event_rowid: resolve_event_rowid(conn, event_id)?,
        user_id: user_id.into(),
    };
    diesel::insert_into(schema::event_admin::table)
        .values(&new_admin)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn is_event_admin(conn: &mut SqliteConnection, event_id: &Id, user_id: UserId) -> Result<bool> {
    use schema::event_admin::dsl;
    let event_rowid = match resolve_event_rowid(conn, event_id) {
        Ok(rowid) => rowid,
        Err(repo::Error::NotFound) => return Ok(false),
        Err(err) => return Err(err),
    };
    let count = dsl::event_admin
        .filter(dsl::event_rowid.eq(event_rowid))
        .filter(dsl::user_id.eq(i64::from(user_id)))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn event_admin_user_ids(conn: &mut SqliteConnection, event_id: &Id) -> Result<Vec<UserId>> {
    use schema::event_admin::dsl;
    let event_rowid = resolve_event_rowid(conn, event_id)?;
    Ok(dsl::event_admin
        .select(dsl::user_id)
        .filter(dsl::event_rowid.eq(event_rowid))
        .load::<i64>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(UserId::from)
        .collect())
}
