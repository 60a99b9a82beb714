use super::*;
use cb_entities as e;

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            role,
            password: _password,
        } = from;
        Self {
            id: id.into(),
            email: email.into_string(),
            role: role.into(),
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            User => UserRole::User,
            Staff => UserRole::Staff,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::User => User,
            UserRole::Staff => Staff,
        }
    }
}

impl From<e::organization::Organization> for Organization {
    fn from(from: e::organization::Organization) -> Self {
        let e::organization::Organization {
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
            visibility: visibility.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::organization::OrgVisibility> for OrgVisibility {
    fn from(from: e::organization::OrgVisibility) -> Self {
        use e::organization::OrgVisibility::*;
        match from {
            Public => OrgVisibility::Public,
            Private => OrgVisibility::Private,
        }
    }
}

impl From<OrgVisibility> for e::organization::OrgVisibility {
    fn from(from: OrgVisibility) -> Self {
        use e::organization::OrgVisibility::*;
        match from {
            OrgVisibility::Public => Public,
            OrgVisibility::Private => Private,
        }
    }
}

impl From<e::event::Event> for Event {
    fn from(from: e::event::Event) -> Self {
        let e::event::Event {
            id,
            org_id,
            title,
            description,
            start,
            end,
            thumbnail_url,
            banner_url,
            visibility,
            location,
        } = from;
        Self {
            id: id.into(),
            org_id: org_id.into(),
            title,
            description,
            start: start.as_secs(),
            end: end.map(e::time::Timestamp::as_secs),
            thumbnail_url,
            banner_url,
            visibility: visibility.into(),
            location: location.map(Into::into),
        }
    }
}

impl From<e::event::EventVisibility> for EventVisibility {
    fn from(from: e::event::EventVisibility) -> Self {
        use e::event::EventVisibility::*;
        match from {
            Public => EventVisibility::Public,
            Organization => EventVisibility::Organization,
            Private => EventVisibility::Private,
        }
    }
}

impl From<EventVisibility> for e::event::EventVisibility {
    fn from(from: EventVisibility) -> Self {
        use e::event::EventVisibility::*;
        match from {
            EventVisibility::Public => Public,
            EventVisibility::Organization => Organization,
            EventVisibility::Private => Private,
        }
    }
}

impl From<e::event::EventLocation> for EventLocation {
    fn from(from: e::event::EventLocation) -> Self {
        use e::event::EventLocation::*;
        match from {
            Landmark(name) => EventLocation::Landmark(name),
            Custom(text) => EventLocation::Custom(text),
        }
    }
}

impl From<EventLocation> for e::event::EventLocation {
    fn from(from: EventLocation) -> Self {
        use e::event::EventLocation::*;
        match from {
            EventLocation::Landmark(name) => Landmark(name),
            EventLocation::Custom(text) => Custom(text),
        }
    }
}

impl From<e::rsvp::RsvpStatus> for RsvpStatus {
    fn from(from: e::rsvp::RsvpStatus) -> Self {
        use e::rsvp::RsvpStatus::*;
        match from {
            Attending => RsvpStatus::Attending,
            Maybe => RsvpStatus::Maybe,
            Declined => RsvpStatus::Declined,
        }
    }
}

impl From<RsvpStatus> for e::rsvp::RsvpStatus {
    fn from(from: RsvpStatus) -> Self {
        use e::rsvp::RsvpStatus::*;
        match from {
            RsvpStatus::Attending => Attending,
            RsvpStatus::Maybe => Maybe,
            RsvpStatus::Declined => Declined,
        }
    }
}

impl From<e::rsvp::RsvpStats> for RsvpStats {
    fn from(from: e::rsvp::RsvpStats) -> Self {
        let e::rsvp::RsvpStats {
            attending,
            maybe,
            declined,
        } = from;
        Self {
            attending,
            maybe,
            declined,
        }
    }
}

impl From<e::official::PendingCounts> for PendingCounts {
    fn from(from: e::official::PendingCounts) -> Self {
        let e::official::PendingCounts {
            org_count,
            event_count,
        } = from;
        Self {
            org_count,
            event_count,
        }
    }
}
