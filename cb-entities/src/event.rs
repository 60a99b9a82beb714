use num_derive::{FromPrimitive, ToPrimitive};

use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id            : Id,
    pub org_id        : Id,
    pub title         : String,
    pub description   : Option<String>,
    // Start/end time stamps are stored with second precision.
    pub start         : Timestamp,
    pub end           : Option<Timestamp>,
    pub thumbnail_url : Option<String>,
    pub banner_url    : Option<String>,
    pub visibility    : EventVisibility,
    pub location      : Option<EventLocation>,
}

impl Event {
    pub fn has_both_images(&self) -> bool {
        fn non_empty(url: &Option<String>) -> bool {
            url.as_deref().is_some_and(|url| !url.trim().is_empty())
        }
        non_empty(&self.thumbnail_url) && non_empty(&self.banner_url)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum EventVisibility {
    #[default]
    Public = 0,
    Organization = 1,
    Private = 2,
}

/// Either a reference to a campus landmark or a free-text location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLocation {
    Landmark(String),
    Custom(String),
}
