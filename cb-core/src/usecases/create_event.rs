use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub org_id: Id,
    pub title: String,
    pub description: Option<String>,
    pub start: Timestamp,
    pub end: Option<Timestamp>,
    pub thumbnail_url: Option<String>,
    pub banner_url: Option<String>,
    pub visibility: EventVisibility,
    pub location: Option<EventLocation>,
}

/// Creates a new event within an organization the acting user
/// administers. The creator becomes the event's first admin.
///
/// Both repository calls must run within one transaction.
pub fn create_event<R>(repo: &R, created_by: UserId, e: NewEvent) -> Result<Id>
where
    R: OrganizationRepo + EventRepo,
{
    if !repo.is_org_admin(&e.org_id, created_by)? {
        return Err(Error::Forbidden);
    }
    validate::event(&e.title, e.start, e.end)?;
    let NewEvent {
        org_id,
        title,
        description,
        start,
        end,
        thumbnail_url,
        banner_url,
        visibility,
        location,
    } = e;
    // The organization must exist; a dangling reference would only
    // surface later as a foreign key violation.
    repo.get_org(&org_id)?;
    let event = Event {
        id: Id::new(),
        org_id,
        title,
        description,
        start,
        end,
        thumbnail_url,
        banner_url,
        visibility,
        location,
    };
    repo.create_event(&event)?;
    repo.add_event_admin(&event.id, created_by)?;
    log::info!("Created event {} ({})", event.title, event.id);
    Ok(event.id)
}

pub fn get_event<R: EventRepo>(repo: &R, id: &Id) -> Result<Event> {
    Ok(repo.get_event(id)?)
}

pub fn events_of_organization<R: EventRepo>(repo: &R, org_id: &Id) -> Result<Vec<Event>> {
    Ok(repo.events_of_org(org_id)?)
}
