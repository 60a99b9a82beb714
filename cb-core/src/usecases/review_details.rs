use super::prelude::*;
use crate::{repositories::Error as RepoError, usecases::authorize_user_by_id};

#[derive(Debug)]
pub struct OrgReviewDetails {
    pub organization: Organization,
    pub admins: Vec<UserId>,
    pub member_count: u64,
    pub events: Vec<Event>,
    pub event_count: u64,
    pub total_rsvps: u64,
}

#[derive(Debug)]
pub struct EventReviewDetails {
    pub event: Event,
    pub organization: Option<Organization>,
    pub admins: Vec<UserId>,
    pub rsvp_stats: RsvpStats,
}

/// Loads everything a staff reviewer needs to judge an organization's
/// official-status submission.
///
/// The counts are display-only: a failing count query is logged and
/// reported as 0 instead of failing the whole request.
pub fn org_review_details<R>(repo: &R, user_id: UserId, org_id: &Id) -> Result<OrgReviewDetails>
where
    R: UserRepo + OrganizationRepo + EventRepo + RsvpRepo,
{
    authorize_user_by_id(repo, user_id, Role::Staff)?;
    let organization = repo.get_org(org_id)?;
    let admins = repo.org_admin_user_ids(org_id)?;
    let member_count = count_or_zero(repo.count_org_members(org_id), "organization members");
    let events = repo.events_of_org(org_id)?;
    let event_count = events.len() as u64;
    let total_rsvps = count_or_zero(
        repo.count_rsvps_of_org_events(org_id),
        "RSVPs of organization events",
    );
    Ok(OrgReviewDetails {
        organization,
        admins,
        member_count,
        events,
        event_count,
        total_rsvps,
    })
}

/// Event counterpart of [`org_review_details`].
///
/// Each RSVP count degrades to 0 independently, so one broken count
/// never hides the remaining ones.
pub fn event_review_details<R>(
    repo: &R,
    user_id: UserId,
    event_id: &Id,
) -> Result<EventReviewDetails>
where
    R: UserRepo + OrganizationRepo + EventRepo + RsvpRepo,
{
    authorize_user_by_id(repo, user_id, Role::Staff)?;
    let event = repo.get_event(event_id)?;
    let organization = match repo.get_org(&event.org_id) {
        Ok(org) => Some(org),
        Err(RepoError::NotFound) => None,
        Err(err) => return Err(Error::Repo(err)),
    };
    let admins = repo.event_admin_user_ids(event_id)?;
    let rsvp_stats = RsvpStats {
        attending: count_or_zero(
            repo.count_rsvps_with_status(event_id, RsvpStatus::Attending),
            "attending RSVPs",
        ),
        maybe: count_or_zero(
            repo.count_rsvps_with_status(event_id, RsvpStatus::Maybe),
            "maybe RSVPs",
        ),
        declined: count_or_zero(
            repo.count_rsvps_with_status(event_id, RsvpStatus::Declined),
            "declined RSVPs",
        ),
    };
    Ok(EventReviewDetails {
        event,
        organization,
        admins,
        rsvp_stats,
    })
}

fn count_or_zero(count: std::result::Result<u64, RepoError>, what: &str) -> u64 {
    count.unwrap_or_else(|err| {
        log::warn!("Failed to count {what}: {err}");
        0
    })
}
