use super::*;
use cb_boundary as json;

#[get("/admin/pending-requests", format = "application/json")]
pub fn get_pending_requests(
    db: sqlite::Connections,
    account: Account,
) -> Result<json::PendingRequests> {
    let pending = usecases::list_pending_requests(&db.shared()?, account.user_id())?;
    let organizations = pending
        .organizations
        .into_iter()
        .map(|(org, submission)| json::PendingOrganization {
            organization: org.into(),
            submitted_at: submission.created_at.as_millis(),
        })
        .collect();
    let events = pending
        .events
        .into_iter()
        .map(|(event, submission)| json::PendingEvent {
            event: event.into(),
            submitted_at: submission.created_at.as_millis(),
        })
        .collect();
    Ok(Json(json::PendingRequests {
        organizations,
        events,
    }))
}

#[get("/admin/pending-counts", format = "application/json")]
pub fn get_pending_counts(db: sqlite::Connections, account: Account) -> Result<json::PendingCounts> {
    let counts = usecases::pending_counts(&db.shared()?, account.user_id())?;
    Ok(Json(counts.into()))
}

#[get("/admin/org-details/<id>", format = "application/json")]
pub fn get_org_details(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::OrgReviewDetails> {
    let details = usecases::org_review_details(&db.shared()?, account.user_id(), &id.into())?;
    Ok(Json(json::OrgReviewDetails {
        organization: details.organization.into(),
        admins: details.admins.into_iter().map(i64::from).collect(),
        member_count: details.member_count,
        events: details.events.into_iter().map(Into::into).collect(),
        event_count: details.event_count,
        total_rsvps: details.total_rsvps,
    }))
}

#[get("/admin/event-details/<id>", format = "application/json")]
pub fn get_event_details(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::EventReviewDetails> {
    let details = usecases::event_review_details(&db.shared()?, account.user_id(), &id.into())?;
    Ok(Json(json::EventReviewDetails {
        event: details.event.into(),
        organization: details.organization.map(Into::into),
        admins: details.admins.into_iter().map(i64::from).collect(),
        rsvp_stats: details.rsvp_stats.into(),
    }))
}

#[post("/admin/approve-official", format = "application/json", data = "<target>")]
pub fn post_approve_official(
    db: sqlite::Connections,
    account: Account,
    target: JsonResult<json::OfficialTargetRef>,
) -> Result<json::ResultMessage> {
    let json::OfficialTargetRef { org_id, event_id } = target?.into_inner();
    flows::approve_official(
        db.pool(),
        account.user_id(),
        org_id.map(Into::into),
        event_id.map(Into::into),
    )?;
    Ok(Json(json::ResultMessage {
        message: "Official status approved".into(),
    }))
}

#[post("/admin/reject-official", format = "application/json", data = "<target>")]
pub fn post_reject_official(
    db: sqlite::Connections,
    account: Account,
    target: JsonResult<json::OfficialTargetRef>,
) -> Result<json::ResultMessage> {
    let json::OfficialTargetRef { org_id, event_id } = target?.into_inner();
    flows::reject_official(
        db.pool(),
        account.user_id(),
        org_id.map(Into::into),
        event_id.map(Into::into),
    )?;
    Ok(Json(json::ResultMessage {
        message: "Official status request rejected".into(),
    }))
}
