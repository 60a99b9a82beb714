use super::*;

pub fn submit_for_official(
    connections: &sqlite::Connections,
    user_id: UserId,
    org_id: Option<Id>,
    event_id: Option<Id>,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::submit_for_official(conn, user_id, org_id, event_id).map_err(|err| {
            warn!("Failed to submit for official status: {}", err);
            err
        })
    })?)
}

// Approval inserts the official entry and removes the pending
// submission. Both writes commit or roll back together.
pub fn approve_official(
    connections: &sqlite::Connections,
    user_id: UserId,
    org_id: Option<Id>,
    event_id: Option<Id>,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::approve_official(conn, user_id, org_id, event_id).map_err(|err| {
            warn!("Failed to approve official status: {}", err);
            err
        })
    })?)
}

pub fn reject_official(
    connections: &sqlite::Connections,
    user_id: UserId,
    org_id: Option<Id>,
    event_id: Option<Id>,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::reject_official(conn, user_id, org_id, event_id).map_err(|err| {
            warn!("Failed to reject official-status request: {}", err);
            err
        })
    })?)
}
