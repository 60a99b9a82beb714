// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use num_traits::{FromPrimitive as _, ToPrimitive as _};

use cb_core::entities::*;

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub role: i16,
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(from: &'a User) -> Self {
        Self {
            email: from.email.as_str(),
            password: from.password.as_hash(),
            role: from.role.to_i16().unwrap_or_default(),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub role: i16,
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            email,
            password,
            role,
        } = from;
        Self {
            id: UserId::from(id),
            email: EmailAddress::new_unchecked(email),
            password: Password::from_hash(password),
            role: Role::from_i16(role).unwrap_or_default(),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = organization)]
pub struct NewOrganization<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub thumbnail_url: Option<&'a str>,
    pub banner_url: Option<&'a str>,
    pub visibility: i16,
    pub created_at: i64,
}

impl<'a> From<&'a Organization> for NewOrganization<'a> {
    fn from(from: &'a Organization) -> Self {
        Self {
            id: from.id.as_str(),
            name: &from.name,
            description: &from.description,
            thumbnail_url: from.thumbnail_url.as_deref(),
            banner_url: from.banner_url.as_deref(),
            visibility: from.visibility.to_i16().unwrap_or_default(),
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct OrganizationEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub banner_url: Option<String>,
    pub visibility: i16,
    pub created_at: i64,
}

impl From<OrganizationEntity> for Organization {
    fn from(from: OrganizationEntity) -> Self {
        let OrganizationEntity {
            rowid: _,
            id,
            name,
            description,
            thumbnail_url,
            banner_url,
            visibility,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            thumbnail_url,
            banner_url,
            visibility: OrgVisibility::from_i16(visibility).unwrap_or_default(),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = event)]
pub struct NewEvent<'a> {
    pub id: &'a str,
    pub org_rowid: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub start_at: i64,
    pub end_at: Option<i64>,
    pub thumbnail_url: Option<&'a str>,
    pub banner_url: Option<&'a str>,
    pub visibility: i16,
    pub landmark: Option<&'a str>,
    pub custom_location: Option<&'a str>,
}

impl<'a> NewEvent<'a> {
    pub fn from_event(from: &'a Event, org_rowid: i64) -> Self {
        let (landmark, custom_location) = match &from.location {
            Some(EventLocation::Landmark(name)) => (Some(name.as_str()), None),
            Some(EventLocation::Custom(text)) => (None, Some(text.as_str())),
            None => (None, None),
        };
        Self {
            id: from.id.as_str(),
            org_rowid,
            title: &from.title,
            description: from.description.as_deref(),
            start_at: from.start.as_millis(),
            end_at: from.end.map(Timestamp::as_millis),
            thumbnail_url: from.thumbnail_url.as_deref(),
            banner_url: from.banner_url.as_deref(),
            visibility: from.visibility.to_i16().unwrap_or_default(),
            landmark,
            custom_location,
        }
    }
}

#[derive(Queryable)]
pub struct EventEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_at: i64,
    pub end_at: Option<i64>,
    pub thumbnail_url: Option<String>,
    pub banner_url: Option<String>,
    pub visibility: i16,
    pub landmark: Option<String>,
    pub custom_location: Option<String>,
    // Joined columns
    pub org_id: String,
}

impl From<EventEntity> for Event {
    fn from(from: EventEntity) -> Self {
        let EventEntity {
            rowid: _,
            id,
            title,
            description,
            start_at,
            end_at,
            thumbnail_url,
            banner_url,
            visibility,
            landmark,
            custom_location,
            org_id,
        } = from;
        let location = match (landmark, custom_location) {
            (Some(name), _) => Some(EventLocation::Landmark(name)),
            (None, Some(text)) => Some(EventLocation::Custom(text)),
            (None, None) => None,
        };
        Self {
            id: id.into(),
            org_id: org_id.into(),
            title,
            description,
            start: Timestamp::from_millis(start_at),
            end: end_at.map(Timestamp::from_millis),
            thumbnail_url,
            banner_url,
            visibility: EventVisibility::from_i16(visibility).unwrap_or_default(),
            location,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = organization_admin)]
pub struct NewOrganizationAdmin {
    pub org_rowid: i64,
    pub user_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = organization_member)]
pub struct NewOrganizationMember {
    pub org_rowid: i64,
    pub user_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = event_admin)]
pub struct NewEventAdmin {
    pub event_rowid: i64,
    pub user_id: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = event_rsvp)]
pub struct NewEventRsvp {
    pub event_rowid: i64,
    pub user_id: i64,
    pub status: i16,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = official_pending)]
pub struct NewOfficialPending {
    pub org_rowid: Option<i64>,
    pub event_rowid: Option<i64>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = official)]
pub struct NewOfficial {
    pub org_rowid: Option<i64>,
    pub event_rowid: Option<i64>,
    pub created_at: i64,
}
