use super::*;

impl<'a> OfficialRepo for DbReadOnly<'a> {
    fn add_pending_submission(&self, _submission: &PendingSubmission) -> Result<()> {
        unreachable!();
    }
    fn delete_pending_submission(&self, _target: &OfficialTarget) -> Result<usize> {
        unreachable!();
    }
    fn add_official_entry(&self, _target: &OfficialTarget, _created_at: Timestamp) -> Result<()> {
        unreachable!();
    }

    fn is_submission_pending(&self, target: &OfficialTarget) -> Result<bool> {
        is_submission_pending(&mut self.conn.borrow_mut(), target)
    }
    fn is_official(&self, target: &OfficialTarget) -> Result<bool> {
        is_official(&mut self.conn.borrow_mut(), target)
    }
    fn pending_organizations(&self) -> Result<Vec<(Organization, PendingSubmission)>> {
        pending_organizations(&mut self.conn.borrow_mut())
    }
    fn pending_events(&self) -> Result<Vec<(Event, PendingSubmission)>> {
        pending_events(&mut self.conn.borrow_mut())
    }
    fn count_pending_submissions(&self) -> Result<PendingCounts> {
        count_pending_submissions(&mut self.conn.borrow_mut())
    }
}

impl<'a> OfficialRepo for DbReadWrite<'a> {
    fn add_pending_submission(&self, submission: &PendingSubmission) -> Result<()> {
        add_pending_submission(&mut self.conn.borrow_mut(), submission)
    }
    fn delete_pending_submission(&self, target: &OfficialTarget) -> Result<usize> {
        delete_pending_submission(&mut self.conn.borrow_mut(), target)
    }
    fn add_official_entry(&self, target: &OfficialTarget, created_at: Timestamp) -> Result<()> {
        add_official_entry(&mut self.conn.borrow_mut(), target, created_at)
    }

    fn is_submission_pending(&self, target: &OfficialTarget) -> Result<bool> {
        is_submission_pending(&mut self.conn.borrow_mut(), target)
    }
    fn is_official(&self, target: &OfficialTarget) -> Result<bool> {
        is_official(&mut self.conn.borrow_mut(), target)
    }
    fn pending_organizations(&self) -> Result<Vec<(Organization, PendingSubmission)>> {
        pending_organizations(&mut self.conn.borrow_mut())
    }
    fn pending_events(&self) -> Result<Vec<(Event, PendingSubmission)>> {
        pending_events(&mut self.conn.borrow_mut())
    }
    fn count_pending_submissions(&self) -> Result<PendingCounts> {
        count_pending_submissions(&mut self.conn.borrow_mut())
    }
}

impl<'a> OfficialRepo for DbConnection<'a> {
    fn add_pending_submission(&self, submission: &PendingSubmission) -> Result<()> {
        add_pending_submission(&mut self.conn.borrow_mut(), submission)
    }
    fn delete_pending_submission(&self, target: &OfficialTarget) -> Result<usize> {
        delete_pending_submission(&mut self.conn.borrow_mut(), target)
    }
    fn add_official_entry(&self, target: &OfficialTarget, created_at: Timestamp) -> Result<()> {
        add_official_entry(&mut self.conn.borrow_mut(), target, created_at)
    }

    fn is_submission_pending(&self, target: &OfficialTarget) -> Result<bool> {
        is_submission_pending(&mut self.conn.borrow_mut(), target)
    }
    fn is_official(&self, target: &OfficialTarget) -> Result<bool> {
        is_official(&mut self.conn.borrow_mut(), target)
    }
    fn pending_organizations(&self) -> Result<Vec<(Organization, PendingSubmission)>> {
        pending_organizations(&mut self.conn.borrow_mut())
    }
    fn pending_events(&self) -> Result<Vec<(Event, PendingSubmission)>> {
        pending_events(&mut self.conn.borrow_mut())
    }
    fn count_pending_submissions(&self) -> Result<PendingCounts> {
        count_pending_submissions(&mut self.conn.borrow_mut())
    }
}

// The partial unique indexes on official_pending turn a concurrent
// duplicate submission into a unique violation that surfaces as
// `repo::Error::AlreadyExists`.
fn add_pending_submission(conn: &mut SqliteConnection, s: &PendingSubmission) -> Result<()> {
    let (org_rowid, event_rowid) = resolve_target_rowids(conn, &s.target)?;
    let new_pending = models::NewOfficialPending {
        org_rowid,
        event_rowid,
        created_at: s.created_at.as_millis(),
    };
    diesel::insert_into(schema::official_pending::table)
        .values(&new_pending)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_pending_submission(conn: &mut SqliteConnection, target: &OfficialTarget) -> Result<usize> {
    use schema::official_pending::dsl;
    let (org_rowid, event_rowid) = match resolve_target_rowids(conn, target) {
        Ok(rowids) => rowids,
        Err(repo::Error::NotFound) => return Ok(0),
        Err(err) => return Err(err),
    };
    let count = match (org_rowid, event_rowid) {
        (Some(rowid), None) => diesel::delete(dsl::official_pending.filter(dsl::org_rowid.eq(rowid)))
            .execute(conn),
        (_, Some(rowid)) => diesel::delete(dsl::official_pending.filter(dsl::event_rowid.eq(rowid)))
            .execute(conn),
        (None, None) => unreachable!(),
    }
    .map_err(from_diesel_err)?;
    Ok(count)
}

fn add_official_entry(
    conn: &mut SqliteConnection,
    target: &OfficialTarget,
    created_at: Timestamp,
) -> Result<()> {
    let (org_rowid, event_rowid) = resolve_target_rowids(conn, target)?;
    let new_official = models::NewOfficial {
        org_rowid,
        event_rowid,
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::official::table)
        .values(&new_official)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn is_submission_pending(conn: &mut SqliteConnection, target: &OfficialTarget) -> Result<bool> {
    use schema::official_pending::dsl;
    let (org_rowid, event_rowid) = match resolve_target_rowids(conn, target) {
        Ok(rowids) => rowids,
        Err(repo::Error::NotFound) => return Ok(false),
        Err(err) => return Err(err),
    };
    let count = match (org_rowid, event_rowid) {
        (Some(rowid), None) => dsl::official_pending
            .filter(dsl::org_rowid.eq(rowid))
            .count()
            .get_result::<i64>(conn),
        (_, Some(rowid)) => dsl::official_pending
            .filter(dsl::event_rowid.eq(rowid))
            .count()
            .get_result::<i64>(conn),
        (None, None) => unreachable!(),
    }
    .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn is_official(conn: &mut SqliteConnection, target: &OfficialTarget) -> Result<bool> {
    use schema::official::dsl;
    let (org_rowid, event_rowid) = match resolve_target_rowids(conn, target) {
        Ok(rowids) => rowids,
        Err(repo::Error::NotFound) => return Ok(false),
        Err(err) => return Err(err),
    };
    let count = match (org_rowid, event_rowid) {
        (Some(rowid), None) => dsl::official
            .filter(dsl::org_rowid.eq(rowid))
            .count()
            .get_result::<i64>(conn),
        (_, Some(rowid)) => dsl::official
            .filter(dsl::event_rowid.eq(rowid))
            .count()
            .get_result::<i64>(conn),
        (None, None) => unreachable!(),
    }
    .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn pending_organizations(
    conn: &mut SqliteConnection,
) -> Result<Vec<(Organization, PendingSubmission)>> {
    use schema::{official_pending, organization};
    Ok(official_pending::table
        .inner_join(
            organization::table
                .on(official_pending::org_rowid.eq(organization::rowid.nullable())),
        )
        .select((organization::all_columns, official_pending::created_at))
        .order_by(official_pending::created_at.asc())
        .load::<(models::OrganizationEntity, i64)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(entity, created_at)| {
            let org = Organization::from(entity);
            let submission = PendingSubmission {
                target: OfficialTarget::Organization(org.id.clone()),
                created_at: Timestamp::from_millis(created_at),
            };
            (org, submission)
        })
        .collect())
}

fn pending_events(conn: &mut SqliteConnection) -> Result<Vec<(Event, PendingSubmission)>> {
    use schema::{event, official_pending, organization};
    Ok(official_pending::table
        .inner_join(
            event::table
                .on(official_pending::event_rowid.eq(event::rowid.nullable()))
                .inner_join(organization::table),
        )
        .select((
            (
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
            ),
            official_pending::created_at,
        ))
        .order_by(official_pending::created_at.asc())
        .load::<(models::EventEntity, i64)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(entity, created_at)| {
            let event = Event::from(entity);
            let submission = PendingSubmission {
                target: OfficialTarget::Event(event.id.clone()),
                created_at: Timestamp::from_millis(created_at),
            };
            (event, submission)
        })
        .collect())
}

fn count_pending_submissions(conn: &mut SqliteConnection) -> Result<PendingCounts> {
    use schema::official_pending::dsl;
    let org_count = dsl::official_pending
        .filter(dsl::org_rowid.is_not_null())
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let event_count = dsl::official_pending
        .filter(dsl::event_rowid.is_not_null())
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(PendingCounts {
        org_count: org_count as u64,
        event_count: event_count as u64,
    })
}
