use super::*;

pub fn create_event(
    connections: &sqlite::Connections,
    created_by: UserId,
    new_event: usecases::NewEvent,
) -> Result<Id> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_event(conn, created_by, new_event).map_err(|err| {
            warn!("Failed to create event: {}", err);
            err
        })
    })?)
}
