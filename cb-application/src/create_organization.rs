use super::*;

pub fn create_organization(
    connections: &sqlite::Connections,
    created_by: UserId,
    new_org: usecases::NewOrganization,
) -> Result<Id> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_organization(conn, created_by, new_org).map_err(|err| {
            warn!("Failed to create organization: {}", err);
            err
        })
    })?)
}

pub fn join_organization(
    connections: &sqlite::Connections,
    user_id: UserId,
    org_id: &Id,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::join_organization(conn, user_id, org_id).map_err(|err| {
            warn!("User {} failed to join organization {}: {}", user_id, org_id, err);
            err
        })
    })?)
}
