use super::*;
use cb_boundary as json;

#[post("/orgs", format = "application/json", data = "<new_org>")]
pub fn post_org(
    db: sqlite::Connections,
    account: Account,
    new_org: JsonResult<json::NewOrganization>,
) -> Result<String> {
    let json::NewOrganization {
        name,
        description,
        thumbnail_url,
        banner_url,
        visibility,
    } = new_org?.into_inner();
    let new_org = usecases::NewOrganization {
        name,
        description,
        thumbnail_url,
        banner_url,
        visibility: visibility.into(),
    };
    let id = flows::create_organization(db.pool(), account.user_id(), new_org)?;
    Ok(Json(id.to_string()))
}

#[get("/orgs/<id>", format = "application/json")]
pub fn get_org(db: sqlite::Connections, id: String) -> Result<json::Organization> {
    let org = usecases::get_organization(&db.shared()?, &id.into())?;
    Ok(Json(org.into()))
}

#[get("/orgs/<id>/events", format = "application/json")]
pub fn get_org_events(db: sqlite::Connections, id: String) -> Result<Vec<json::Event>> {
    let events = usecases::events_of_organization(&db.shared()?, &id.into())?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

#[post("/orgs/<id>/join", format = "application/json")]
pub fn post_org_join(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    flows::join_organization(db.pool(), account.user_id(), &id.into())?;
    Ok(Json(()))
}
