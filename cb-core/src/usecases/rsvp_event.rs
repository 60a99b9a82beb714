use super::prelude::*;

pub fn rsvp_event<R>(repo: &R, user_id: UserId, event_id: &Id, status: RsvpStatus) -> Result<()>
where
    R: EventRepo + RsvpRepo,
{
    let event = repo.get_event(event_id)?;
    let rsvp = Rsvp {
        event_id: event.id,
        user_id,
        status,
        created_at: Timestamp::now(),
    };
    repo.set_rsvp(&rsvp)?;
    Ok(())
}
