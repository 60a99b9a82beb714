// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use cb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod event;
mod official;
mod org;
mod rsvp;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_org_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::organization::dsl;
    dsl::organization
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_event_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::event::dsl;
    dsl::event
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

// Rowid columns of the official tables, resolved from the target's
// public identifier. The target must exist.
fn resolve_target_rowids(
    conn: &mut SqliteConnection,
    target: &OfficialTarget,
) -> Result<(Option<i64>, Option<i64>)> {
    match target {
        OfficialTarget::Organization(id) => Ok((Some(resolve_org_rowid(conn, id)?), None)),
        OfficialTarget::Event(id) => Ok((None, Some(resolve_event_rowid(conn, id)?))),
    }
}
