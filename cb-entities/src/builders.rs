use crate::{event::*, id::Id, organization::*, time::Timestamp};

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

#[derive(Debug)]
pub struct OrganizationBuild {
    org: Organization,
}

impl OrganizationBuild {
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.org.id = id.into();
        self
    }
    pub fn name(mut self, name: &str) -> Self {
        self.org.name = name.into();
        self
    }
    pub fn description(mut self, desc: &str) -> Self {
        self.org.description = desc.into();
        self
    }
    pub fn thumbnail_url(mut self, url: &str) -> Self {
        self.org.thumbnail_url = Some(url.into());
        self
    }
    pub fn banner_url(mut self, url: &str) -> Self {
        self.org.banner_url = Some(url.into());
        self
    }
    pub fn visibility(mut self, visibility: OrgVisibility) -> Self {
        self.org.visibility = visibility;
        self
    }
    pub fn finish(self) -> Organization {
        self.org
    }
}

impl Builder for Organization {
    type Build = OrganizationBuild;
    fn build() -> Self::Build {
        Self::Build {
            org: Organization {
                id: Id::new(),
                name: "".into(),
                description: "".into(),
                thumbnail_url: None,
                banner_url: None,
                visibility: OrgVisibility::Public,
                created_at: Timestamp::now(),
            },
        }
    }
}

#[derive(Debug)]
pub struct EventBuild {
    event: Event,
}

impl EventBuild {
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.event.id = id.into();
        self
    }
    pub fn org_id(mut self, id: impl Into<Id>) -> Self {
        self.event.org_id = id.into();
        self
    }
    pub fn title(mut self, title: &str) -> Self {
        self.event.title = title.into();
        self
    }
    pub fn start(mut self, start: Timestamp) -> Self {
        self.event.start = start;
        self
    }
    pub fn end(mut self, end: Timestamp) -> Self {
        self.event.end = Some(end);
        self
    }
    pub fn thumbnail_url(mut self, url: &str) -> Self {
        self.event.thumbnail_url = Some(url.into());
        self
    }
    pub fn banner_url(mut self, url: &str) -> Self {
        self.event.banner_url = Some(url.into());
        self
    }
    pub fn location(mut self, location: EventLocation) -> Self {
        self.event.location = Some(location);
        self
    }
    pub fn finish(self) -> Event {
        self.event
    }
}

impl Builder for Event {
    type Build = EventBuild;
    fn build() -> Self::Build {
        Self::Build {
            event: Event {
                id: Id::new(),
                org_id: Id::new(),
                title: "".into(),
                description: None,
                start: Timestamp::now(),
                end: None,
                thumbnail_url: None,
                banner_url: None,
                visibility: EventVisibility::Public,
                location: None,
            },
        }
    }
}
