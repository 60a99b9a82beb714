use super::*;
use cb_boundary as json;

#[post("/events", format = "application/json", data = "<new_event>")]
pub fn post_event(
    db: sqlite::Connections,
    account: Account,
    new_event: JsonResult<json::NewEvent>,
) -> Result<String> {
    let json::NewEvent {
        org_id,
        title,
        description,
        start,
        end,
        thumbnail_url,
        banner_url,
        visibility,
        location,
    } = new_event?.into_inner();
    let new_event = usecases::NewEvent {
        org_id: org_id.into(),
        title,
        description,
        start: Timestamp::from_secs(start),
        end: end.map(Timestamp::from_secs),
        thumbnail_url,
        banner_url,
        visibility: visibility.into(),
        location: location.map(Into::into),
    };
    let id = flows::create_event(db.pool(), account.user_id(), new_event)?;
    Ok(Json(id.to_string()))
}

#[get("/events/<id>", format = "application/json")]
pub fn get_event(db: sqlite::Connections, id: String) -> Result<json::Event> {
    let event = usecases::get_event(&db.shared()?, &id.into())?;
    Ok(Json(event.into()))
}

#[post("/events/<id>/rsvp", format = "application/json", data = "<rsvp>")]
pub fn post_event_rsvp(
    db: sqlite::Connections,
    account: Account,
    id: String,
    rsvp: JsonResult<json::RsvpRequest>,
) -> Result<()> {
    let json::RsvpRequest { status } = rsvp?.into_inner();
    usecases::rsvp_event(
        &db.exclusive()?,
        account.user_id(),
        &id.into(),
        status.into(),
    )?;
    Ok(Json(()))
}
