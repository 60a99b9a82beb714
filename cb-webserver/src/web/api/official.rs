use super::*;
use cb_boundary as json;

#[post("/official/submit", format = "application/json", data = "<target>")]
pub fn post_official_submit(
    db: sqlite::Connections,
    account: Account,
    target: JsonResult<json::OfficialTargetRef>,
) -> Result<json::ResultMessage> {
    let json::OfficialTargetRef { org_id, event_id } = target?.into_inner();
    flows::submit_for_official(
        db.pool(),
        account.user_id(),
        org_id.map(Into::into),
        event_id.map(Into::into),
    )?;
    Ok(Json(json::ResultMessage {
        message: "Official status requested".into(),
    }))
}

// The pending and official flags are public so that profile pages can
// render a badge without any authentication.

#[get("/official/pending?<org_id>&<event_id>", format = "application/json")]
pub fn get_official_pending(
    db: sqlite::Connections,
    org_id: Option<String>,
    event_id: Option<String>,
) -> Result<json::PendingFlag> {
    let pending = usecases::check_official_pending(
        &db.shared()?,
        org_id.map(Into::into),
        event_id.map(Into::into),
    )?;
    Ok(Json(json::PendingFlag { pending }))
}

#[get("/official/status?<org_id>&<event_id>", format = "application/json")]
pub fn get_official_status(
    db: sqlite::Connections,
    org_id: Option<String>,
    event_id: Option<String>,
) -> Result<json::OfficialFlag> {
    let official = usecases::check_official(
        &db.shared()?,
        org_id.map(Into::into),
        event_id.map(Into::into),
    )?;
    Ok(Json(json::OfficialFlag { official }))
}
