use super::*;

pub fn set_user_role(
    connections: &sqlite::Connections,
    user_email: &EmailAddress,
    role: Role,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::set_user_role(conn, user_email, role).map_err(|err| {
            warn!("Failed to set role for {}: {}", user_email, err);
            err
        })
    })?)
}
