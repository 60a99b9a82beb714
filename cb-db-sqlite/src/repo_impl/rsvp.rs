use num_traits::ToPrimitive as _;

use super::*;

impl<'a> RsvpRepo for DbReadOnly<'a> {
    fn set_rsvp(&self, _rsvp: &Rsvp) -> Result<()> {
        unreachable!();
    }

    fn count_rsvps_with_status(&self, event_id: &Id, status: RsvpStatus) -> Result<u64> {
        count_rsvps_with_status(&mut self.conn.borrow_mut(), event_id, status)
    }
    fn count_rsvps_of_org_events(&self, org_id: &Id) -> Result<u64> {
        count_rsvps_of_org_events(&mut self.conn.borrow_mut(), org_id)
    }
}

impl<'a> RsvpRepo for DbReadWrite<'a> {
    fn set_rsvp(&self, rsvp: &Rsvp) -> Result<()> {
        set_rsvp(&mut self.conn.borrow_mut(), rsvp)
    }

    fn count_rsvps_with_status(&self, event_id: &Id, status: RsvpStatus) -> Result<u64> {
        count_rsvps_with_status(&mut self.conn.borrow_mut(), event_id, status)
    }
    fn count_rsvps_of_org_events(&self, org_id: &Id) -> Result<u64> {
        count_rsvps_of_org_events(&mut self.conn.borrow_mut(), org_id)
    }
}

impl<'a> RsvpRepo for DbConnection<'a> {
    fn set_rsvp(&self, rsvp: &Rsvp) -> Result<()> {
        set_rsvp(&mut self.conn.borrow_mut(), rsvp)
    }

    fn count_rsvps_with_status(&self, event_id: &Id, status: RsvpStatus) -> Result<u64> {
        count_rsvps_with_status(&mut self.conn.borrow_mut(), event_id, status)
    }
    fn count_rsvps_of_org_events(&self, org_id: &Id) -> Result<u64> {
        count_rsvps_of_org_events(&mut self.conn.borrow_mut(), org_id)
    }
}

// A repeated reply replaces the previous one.
fn set_rsvp(conn: &mut SqliteConnection, rsvp: &Rsvp) -> Result<()> {
    use schema::event_rsvp::dsl;
    let new_rsvp = models::NewEventRsvp {
        event_rowid: resolve_event_rowid(conn, &rsvp.event_id)?,
        user_id: rsvp.user_id.into(),
        status: rsvp.status.to_i16().unwrap_or_default(),
        created_at: rsvp.created_at.as_millis(),
    };
    diesel::insert_into(schema::event_rsvp::table)
        .values(&new_rsvp)
        .on_conflict((dsl::event_rowid, dsl::user_id))
        .do_update()
        .set(&new_rsvp)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn count_rsvps_with_status(
    conn: &mut SqliteConnection,
    event_id: &Id,
    status: RsvpStatus,
) -> Result<u64> {
    use schema::event_rsvp::dsl;
    let event_rowid = resolve_event_rowid(conn, event_id)?;
    let count = dsl::event_rsvp
        .filter(dsl::event_rowid.eq(event_rowid))
        .filter(dsl::status.eq(status.to_i16().unwrap_or_default()))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as u64)
}

fn count_rsvps_of_org_events(conn: &mut SqliteConnection, org_id: &Id) -> Result<u64> {
    use schema::{event, event_rsvp, organization};
    let count = event_rsvp::table
        .inner_join(event::table.inner_join(organization::table))
        .filter(organization::id.eq(org_id.as_str()))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as u64)
}
