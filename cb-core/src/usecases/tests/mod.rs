use std::cell::{Cell, RefCell};

use super::prelude::*;
use crate::{repositories::Error as RepoError, usecases};

use anyhow::anyhow;
use cb_entities::builders::Builder;

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory stand-in for the SQLite repositories with failure
/// injection for the display-only count queries.
#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub orgs: RefCell<Vec<Organization>>,
    pub events: RefCell<Vec<Event>>,
    pub org_admins: RefCell<Vec<(Id, UserId)>>,
    pub event_admins: RefCell<Vec<(Id, UserId)>>,
    pub org_members: RefCell<Vec<(Id, UserId)>>,
    pub rsvps: RefCell<Vec<Rsvp>>,
    pub pending: RefCell<Vec<PendingSubmission>>,
    pub official: RefCell<Vec<OfficialTarget>>,

    // Pretends the pending lookup saw nothing although the storage
    // already holds an entry, like a lost concurrent-submission race.
    pub hide_pending_submissions: Cell<bool>,
    pub fail_rsvp_status_counts: RefCell<Vec<RsvpStatus>>,
    pub fail_member_count: Cell<bool>,
}

impl MockDb {
    pub fn with_user(&self, email: &str, role: Role) -> UserId {
        let user = User {
            id: UserId::from(0),
            email: email.parse().unwrap(),
            password: "secret99".parse().unwrap(),
            role,
        };
        self.create_user(&user).unwrap()
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<UserId> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        let id = UserId::from(users.len() as i64 + 1);
        users.push(User {
            id,
            ..user.clone()
        });
        Ok(id)
    }
    fn get_user(&self, id: UserId) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
    fn set_user_role(&self, email: &EmailAddress, role: Role) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let user = users
            .iter_mut()
            .find(|u| &u.email == email)
            .ok_or(RepoError::NotFound)?;
        user.role = role;
        Ok(())
    }
}

impl OrganizationRepo for MockDb {
    fn create_org(&self, org: &Organization) -> RepoResult<()> {
        let mut orgs = self.orgs.borrow_mut();
        if orgs.iter().any(|o| o.id == org.id || o.name == org.name) {
            return Err(RepoError::AlreadyExists);
        }
        orgs.push(org.clone());
        Ok(())
    }
    fn get_org(&self, id: &Id) -> RepoResult<Organization> {
        self.orgs
            .borrow()
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn add_org_admin(&self, org_id: &Id, user_id: UserId) -> RepoResult<()> {
        self.org_admins
            .borrow_mut()
            .push((org_id.clone(), user_id));
        Ok(())
    }
    fn is_org_admin(&self, org_id: &Id, user_id: UserId) -> RepoResult<bool> {
        Ok(self
            .org_admins
            .borrow()
            .iter()
            .any(|(o, u)| o == org_id && *u == user_id))
    }
    fn org_admin_user_ids(&self, org_id: &Id) -> RepoResult<Vec<UserId>> {
        Ok(self
            .org_admins
            .borrow()
            .iter()
            .filter(|(o, _)| o == org_id)
            .map(|(_, u)| *u)
            .collect())
    }
    fn add_org_member(&self, org_id: &Id, user_id: UserId) -> RepoResult<()> {
        self.org_members
            .borrow_mut()
            .push((org_id.clone(), user_id));
        Ok(())
    }
    fn count_org_members(&self, org_id: &Id) -> RepoResult<u64> {
        if self.fail_member_count.get() {
            return Err(RepoError::Other(anyhow!("member count unavailable")));
        }
        Ok(self
            .org_members
            .borrow()
            .iter()
            .filter(|(o, _)| o == org_id)
            .count() as u64)
    }
}

impl EventRepo for MockDb {
    fn create_event(&self, event: &Event) -> RepoResult<()> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
    fn get_event(&self, id: &Id) -> RepoResult<Event> {
        self.events
            .borrow()
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn events_of_org(&self, org_id: &Id) -> RepoResult<Vec<Event>> {
        Ok(self
            .events
            .borrow()
            .iter()
            .filter(|e| &e.org_id == org_id)
            .cloned()
            .collect())
    }
    fn add_event_admin(&self, event_id: &Id, user_id: UserId) -> RepoResult<()> {
        self.event_admins
            .borrow_mut()
            .push((event_id.clone(), user_id));
        Ok(())
    }
    fn is_event_admin(&self, event_id: &Id, user_id: UserId) -> RepoResult<bool> {
        Ok(self
            .event_admins
            .borrow()
            .iter()
            .any(|(e, u)| e == event_id && *u == user_id))
    }
    fn event_admin_user_ids(&self, event_id: &Id) -> RepoResult<Vec<UserId>> {
        Ok(self
            .event_admins
            .borrow()
            .iter()
            .filter(|(e, _)| e == event_id)
            .map(|(_, u)| *u)
            .collect())
    }
}

impl RsvpRepo for MockDb {
    fn set_rsvp(&self, rsvp: &Rsvp) -> RepoResult<()> {
        let mut rsvps = self.rsvps.borrow_mut();
        rsvps.retain(|r| !(r.event_id == rsvp.event_id && r.user_id == rsvp.user_id));
        rsvps.push(rsvp.clone());
        Ok(())
    }
    fn count_rsvps_with_status(&self, event_id: &Id, status: RsvpStatus) -> RepoResult<u64> {
        if self.fail_rsvp_status_counts.borrow().contains(&status) {
            return Err(RepoError::Other(anyhow!("RSVP count unavailable")));
        }
        Ok(self
            .rsvps
            .borrow()
            .iter()
            .filter(|r| &r.event_id == event_id && r.status == status)
            .count() as u64)
    }
    fn count_rsvps_of_org_events(&self, org_id: &Id) -> RepoResult<u64> {
        let events = self.events_of_org(org_id)?;
        Ok(self
            .rsvps
            .borrow()
            .iter()
            .filter(|r| events.iter().any(|e| e.id == r.event_id))
            .count() as u64)
    }
}

impl OfficialRepo for MockDb {
    fn add_pending_submission(&self, submission: &PendingSubmission) -> RepoResult<()> {
        let mut pending = self.pending.borrow_mut();
        if pending.iter().any(|p| p.target == submission.target) {
            return Err(RepoError::AlreadyExists);
        }
        pending.push(submission.clone());
        Ok(())
    }
    fn delete_pending_submission(&self, target: &OfficialTarget) -> RepoResult<usize> {
        let mut pending = self.pending.borrow_mut();
        let before = pending.len();
        pending.retain(|p| &p.target != target);
        Ok(before - pending.len())
    }
    fn is_submission_pending(&self, target: &OfficialTarget) -> RepoResult<bool> {
        if self.hide_pending_submissions.get() {
            return Ok(false);
        }
        Ok(self.pending.borrow().iter().any(|p| &p.target == target))
    }
    fn add_official_entry(&self, target: &OfficialTarget, _created_at: Timestamp) -> RepoResult<()> {
        let mut official = self.official.borrow_mut();
        if official.contains(target) {
            return Err(RepoError::AlreadyExists);
        }
        official.push(target.clone());
        Ok(())
    }
    fn is_official(&self, target: &OfficialTarget) -> RepoResult<bool> {
        Ok(self.official.borrow().contains(target))
    }
    fn pending_organizations(&self) -> RepoResult<Vec<(Organization, PendingSubmission)>> {
        Ok(self
            .pending
            .borrow()
            .iter()
            .filter_map(|p| {
                let org_id = p.target.org_id()?;
                let org = self.get_org(org_id).ok()?;
                Some((org, p.clone()))
            })
            .collect())
    }
    fn pending_events(&self) -> RepoResult<Vec<(Event, PendingSubmission)>> {
        Ok(self
            .pending
            .borrow()
            .iter()
            .filter_map(|p| {
                let event_id = p.target.event_id()?;
                let event = self.get_event(event_id).ok()?;
                Some((event, p.clone()))
            })
            .collect())
    }
    fn count_pending_submissions(&self) -> RepoResult<PendingCounts> {
        let pending = self.pending.borrow();
        Ok(PendingCounts {
            org_count: pending.iter().filter(|p| p.target.org_id().is_some()).count() as u64,
            event_count: pending
                .iter()
                .filter(|p| p.target.event_id().is_some())
                .count() as u64,
        })
    }
}

fn org_with_images(db: &MockDb, name: &str) -> Id {
    let org = Organization::build()
        .name(name)
        .thumbnail_url("t.png")
        .banner_url("b.png")
        .finish();
    let id = org.id.clone();
    db.create_org(&org).unwrap();
    id
}

fn event_with_images(db: &MockDb, org_id: &Id, title: &str) -> Id {
    let event = Event::build()
        .org_id(org_id.clone())
        .title(title)
        .thumbnail_url("t.png")
        .banner_url("b.png")
        .finish();
    let id = event.id.clone();
    db.create_event(&event).unwrap();
    id
}

#[test]
fn submit_org_for_official() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let org_id = org_with_images(&db, "Chess Club");
    db.add_org_admin(&org_id, admin).unwrap();

    usecases::submit_for_official(&db, admin, Some(org_id.clone()), None).unwrap();
    assert!(usecases::check_official_pending(&db, Some(org_id), None).unwrap());
}

#[test]
fn submit_requires_exactly_one_target() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let org_id = org_with_images(&db, "Chess Club");
    db.add_org_admin(&org_id, admin).unwrap();
    let event_id = event_with_images(&db, &org_id, "Blitz night");

    assert!(matches!(
        usecases::submit_for_official(&db, admin, None, None),
        Err(Error::InvalidOfficialTarget)
    ));
    assert!(matches!(
        usecases::submit_for_official(&db, admin, Some(org_id), Some(event_id)),
        Err(Error::InvalidOfficialTarget)
    ));
    assert!(db.pending.borrow().is_empty());
}

#[test]
fn submit_requires_target_admin() {
    let db = MockDb::default();
    let stranger = db.with_user("stranger@campus.edu", Role::User);
    let org_id = org_with_images(&db, "Chess Club");

    assert!(matches!(
        usecases::submit_for_official(&db, stranger, Some(org_id), None),
        Err(Error::Forbidden)
    ));
    assert!(db.pending.borrow().is_empty());
}

#[test]
fn submit_requires_both_images() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let org = Organization::build()
        .name("Chess Club")
        .thumbnail_url("t.png")
        .finish();
    let org_id = org.id.clone();
    db.create_org(&org).unwrap();
    db.add_org_admin(&org_id, admin).unwrap();

    assert!(matches!(
        usecases::submit_for_official(&db, admin, Some(org_id), None),
        Err(Error::MissingImages)
    ));
    assert!(db.pending.borrow().is_empty());
}

#[test]
fn submit_twice_conflicts() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let org_id = org_with_images(&db, "Chess Club");
    db.add_org_admin(&org_id, admin).unwrap();

    usecases::submit_for_official(&db, admin, Some(org_id.clone()), None).unwrap();
    assert!(matches!(
        usecases::submit_for_official(&db, admin, Some(org_id), None),
        Err(Error::AlreadyPending)
    ));
}

#[test]
fn concurrent_submission_race_reports_conflict() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let org_id = org_with_images(&db, "Chess Club");
    db.add_org_admin(&org_id, admin).unwrap();

    usecases::submit_for_official(&db, admin, Some(org_id.clone()), None).unwrap();
    // The second submission races past the pending check and only the
    // storage uniqueness constraint stops it.
    db.hide_pending_submissions.set(true);
    assert!(matches!(
        usecases::submit_for_official(&db, admin, Some(org_id), None),
        Err(Error::AlreadyPending)
    ));
    assert_eq!(db.pending.borrow().len(), 1);
}

#[test]
fn submit_already_official_conflicts() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let org_id = org_with_images(&db, "Chess Club");
    db.add_org_admin(&org_id, admin).unwrap();
    db.add_official_entry(
        &OfficialTarget::Organization(org_id.clone()),
        Timestamp::now(),
    )
    .unwrap();

    assert!(matches!(
        usecases::submit_for_official(&db, admin, Some(org_id), None),
        Err(Error::AlreadyOfficial)
    ));
}

#[test]
fn approve_pending_submission() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let staff = db.with_user("staff@campus.edu", Role::Staff);
    let org_id = org_with_images(&db, "Chess Club");
    db.add_org_admin(&org_id, admin).unwrap();
    usecases::submit_for_official(&db, admin, Some(org_id.clone()), None).unwrap();

    usecases::approve_official(&db, staff, Some(org_id.clone()), None).unwrap();
    assert!(usecases::check_official(&db, Some(org_id.clone()), None).unwrap());
    assert!(!usecases::check_official_pending(&db, Some(org_id.clone()), None).unwrap());

    // A second approval finds nothing pending.
    assert!(matches!(
        usecases::approve_official(&db, staff, Some(org_id), None),
        Err(Error::NoPendingSubmission)
    ));
}

#[test]
fn approve_without_pending_submission() {
    let db = MockDb::default();
    let staff = db.with_user("staff@campus.edu", Role::Staff);
    let org_id = org_with_images(&db, "Chess Club");

    assert!(matches!(
        usecases::approve_official(&db, staff, Some(org_id), None),
        Err(Error::NoPendingSubmission)
    ));
}

#[test]
fn reject_allows_resubmission() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let staff = db.with_user("staff@campus.edu", Role::Staff);
    let org_id = org_with_images(&db, "Chess Club");
    db.add_org_admin(&org_id, admin).unwrap();
    usecases::submit_for_official(&db, admin, Some(org_id.clone()), None).unwrap();

    usecases::reject_official(&db, staff, Some(org_id.clone()), None).unwrap();
    assert!(!usecases::check_official(&db, Some(org_id.clone()), None).unwrap());
    assert!(!usecases::check_official_pending(&db, Some(org_id.clone()), None).unwrap());

    usecases::submit_for_official(&db, admin, Some(org_id.clone()), None).unwrap();
    assert!(usecases::check_official_pending(&db, Some(org_id), None).unwrap());
}

#[test]
fn review_requires_staff_role() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let org_id = org_with_images(&db, "Chess Club");
    db.add_org_admin(&org_id, admin).unwrap();
    usecases::submit_for_official(&db, admin, Some(org_id.clone()), None).unwrap();

    assert!(matches!(
        usecases::list_pending_requests(&db, admin),
        Err(Error::Forbidden)
    ));
    assert!(matches!(
        usecases::pending_counts(&db, admin),
        Err(Error::Forbidden)
    ));
    assert!(matches!(
        usecases::approve_official(&db, admin, Some(org_id.clone()), None),
        Err(Error::Forbidden)
    ));
    assert!(matches!(
        usecases::reject_official(&db, admin, Some(org_id.clone()), None),
        Err(Error::Forbidden)
    ));
    assert!(matches!(
        usecases::org_review_details(&db, admin, &org_id),
        Err(Error::Forbidden)
    ));
    // The pending entry survived all of it.
    assert!(usecases::check_official_pending(&db, Some(org_id), None).unwrap());
}

#[test]
fn staff_check_precedes_target_validation() {
    let db = MockDb::default();
    let user = db.with_user("user@campus.edu", Role::User);
    let staff = db.with_user("staff@campus.edu", Role::Staff);

    // Malformed target, non-staff caller: the role check wins.
    assert!(matches!(
        usecases::approve_official(&db, user, None, None),
        Err(Error::Forbidden)
    ));
    assert!(matches!(
        usecases::approve_official(&db, staff, None, None),
        Err(Error::InvalidOfficialTarget)
    ));
}

#[test]
fn list_pending_requests_joins_targets() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let staff = db.with_user("staff@campus.edu", Role::Staff);
    let org_id = org_with_images(&db, "Chess Club");
    db.add_org_admin(&org_id, admin).unwrap();
    let event_id = event_with_images(&db, &org_id, "Blitz night");
    db.add_event_admin(&event_id, admin).unwrap();

    usecases::submit_for_official(&db, admin, Some(org_id.clone()), None).unwrap();
    usecases::submit_for_official(&db, admin, None, Some(event_id.clone())).unwrap();

    let pending = usecases::list_pending_requests(&db, staff).unwrap();
    assert_eq!(pending.organizations.len(), 1);
    assert_eq!(pending.organizations[0].0.id, org_id);
    assert_eq!(pending.events.len(), 1);
    assert_eq!(pending.events[0].0.id, event_id);

    let counts = usecases::pending_counts(&db, staff).unwrap();
    assert_eq!(counts.org_count, 1);
    assert_eq!(counts.event_count, 1);
}

#[test]
fn org_review_details_with_failing_member_count() {
    let db = MockDb::default();
    let admin = db.with_user("admin@campus.edu", Role::User);
    let staff = db.with_user("staff@campus.edu", Role::Staff);
    let org_id = org_with_images(&db, "Chess Club");
    db.add_org_admin(&org_id, admin).unwrap();
    db.add_org_member(&org_id, admin).unwrap();
    let event_id = event_with_images(&db, &org_id, "Blitz night");
    usecases::rsvp_event(&db, admin, &event_id, RsvpStatus::Attending).unwrap();

    db.fail_member_count.set(true);
    let details = usecases::org_review_details(&db, staff, &org_id).unwrap();
    assert_eq!(details.organization.id, org_id);
    assert_eq!(details.admins, vec![admin]);
    // The failing count degrades to 0 without hiding the rest.
    assert_eq!(details.member_count, 0);
    assert_eq!(details.event_count, 1);
    assert_eq!(details.total_rsvps, 1);
}

#[test]
fn event_review_details_with_failing_rsvp_count() {
    let db = MockDb::default();
    let staff = db.with_user("staff@campus.edu", Role::Staff);
    let org_id = org_with_images(&db, "Chess Club");
    let event_id = event_with_images(&db, &org_id, "Blitz night");
    for email in ["a@campus.edu", "b@campus.edu", "c@campus.edu"] {
        let user = db.with_user(email, Role::User);
        usecases::rsvp_event(&db, user, &event_id, RsvpStatus::Attending).unwrap();
    }
    let maybe_user = db.with_user("d@campus.edu", Role::User);
    usecases::rsvp_event(&db, maybe_user, &event_id, RsvpStatus::Maybe).unwrap();

    db.fail_rsvp_status_counts
        .borrow_mut()
        .push(RsvpStatus::Declined);
    let details = usecases::event_review_details(&db, staff, &event_id).unwrap();
    assert_eq!(details.event.id, event_id);
    assert_eq!(details.organization.as_ref().map(|o| o.id.clone()), Some(org_id));
    assert_eq!(
        details.rsvp_stats,
        RsvpStats {
            attending: 3,
            maybe: 1,
            declined: 0,
        }
    );
}

#[test]
fn review_details_for_missing_target() {
    let db = MockDb::default();
    let staff = db.with_user("staff@campus.edu", Role::Staff);

    assert!(matches!(
        usecases::org_review_details(&db, staff, &Id::new()),
        Err(Error::Repo(RepoError::NotFound))
    ));
    assert!(matches!(
        usecases::event_review_details(&db, staff, &Id::new()),
        Err(Error::Repo(RepoError::NotFound))
    ));
}

#[test]
fn rsvp_replaces_previous_reply() {
    let db = MockDb::default();
    let user = db.with_user("user@campus.edu", Role::User);
    let org_id = org_with_images(&db, "Chess Club");
    let event_id = event_with_images(&db, &org_id, "Blitz night");

    usecases::rsvp_event(&db, user, &event_id, RsvpStatus::Attending).unwrap();
    usecases::rsvp_event(&db, user, &event_id, RsvpStatus::Declined).unwrap();
    assert_eq!(
        db.count_rsvps_with_status(&event_id, RsvpStatus::Attending)
            .unwrap(),
        0
    );
    assert_eq!(
        db.count_rsvps_with_status(&event_id, RsvpStatus::Declined)
            .unwrap(),
        1
    );
}

#[test]
fn register_rejects_duplicate_email() {
    let db = MockDb::default();
    let new_user = usecases::NewUser {
        email: "one@campus.edu".into(),
        password: "secret99".into(),
    };
    usecases::create_new_user(&db, new_user.clone()).unwrap();
    assert!(matches!(
        usecases::create_new_user(&db, new_user),
        Err(Error::UserExists)
    ));
}

#[test]
fn login_with_wrong_password() {
    let db = MockDb::default();
    db.with_user("one@campus.edu", Role::User);
    let email = "one@campus.edu".parse().unwrap();
    assert!(usecases::login_with_email(
        &db,
        &usecases::Credentials {
            email: &email,
            password: "secret99",
        }
    )
    .is_ok());
    assert!(matches!(
        usecases::login_with_email(
            &db,
            &usecases::Credentials {
                email: &email,
                password: "wrong99",
            }
        ),
        Err(Error::Credentials)
    ));
}

#[test]
fn create_event_requires_org_admin() {
    let db = MockDb::default();
    let user = db.with_user("user@campus.edu", Role::User);
    let org_id = org_with_images(&db, "Chess Club");

    let new_event = usecases::NewEvent {
        org_id: org_id.clone(),
        title: "Blitz night".into(),
        description: None,
        start: Timestamp::from_secs(1_700_000_000),
        end: None,
        thumbnail_url: None,
        banner_url: None,
        visibility: EventVisibility::Public,
        location: None,
    };
    assert!(matches!(
        usecases::create_event(&db, user, new_event.clone()),
        Err(Error::Forbidden)
    ));

    db.add_org_admin(&org_id, user).unwrap();
    let event_id = usecases::create_event(&db, user, new_event).unwrap();
    assert!(db.is_event_admin(&event_id, user).unwrap());
}
