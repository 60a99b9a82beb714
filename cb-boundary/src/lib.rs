use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Staff,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewOrganization {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub visibility: OrgVisibility,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Organization {
    pub id            : String,
    pub name          : String,
    pub description   : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url    : Option<String>,
    pub visibility    : OrgVisibility,
    pub created_at    : i64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum OrgVisibility {
    #[default]
    Public,
    Private,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewEvent {
    pub org_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub visibility: EventVisibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<EventLocation>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Event {
    pub id            : String,
    pub org_id        : String,
    pub title         : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description   : Option<String>,
    pub start         : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end           : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url    : Option<String>,
    pub visibility    : EventVisibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location      : Option<EventLocation>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum EventVisibility {
    #[default]
    Public,
    Organization,
    Private,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum EventLocation {
    Landmark(String),
    Custom(String),
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RsvpRequest {
    pub status: RsvpStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Attending,
    Maybe,
    Declined,
}

/// Identifies the subject of an official-status request.
///
/// Exactly one of the two fields must be set.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct OfficialTargetRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct PendingFlag {
    pub pending: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct OfficialFlag {
    pub official: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PendingOrganization {
    pub organization: Organization,
    pub submitted_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PendingEvent {
    pub event: Event,
    pub submitted_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PendingRequests {
    pub organizations: Vec<PendingOrganization>,
    pub events: Vec<PendingEvent>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct PendingCounts {
    pub org_count: u64,
    pub event_count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct RsvpStats {
    pub attending: u64,
    pub maybe: u64,
    pub declined: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct OrgReviewDetails {
    pub organization: Organization,
    pub admins: Vec<i64>,
    pub member_count: u64,
    pub events: Vec<Event>,
    pub event_count: u64,
    pub total_rsvps: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct EventReviewDetails {
    pub event: Event,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    pub admins: Vec<i64>,
    pub rsvp_stats: RsvpStats,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ResultMessage {
    pub message: String,
}

/// Error response payload.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{http_status}: {message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
