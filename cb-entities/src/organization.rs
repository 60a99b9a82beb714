use num_derive::{FromPrimitive, ToPrimitive};

use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id            : Id,
    pub name          : String,
    pub description   : String,
    pub thumbnail_url : Option<String>,
    pub banner_url    : Option<String>,
    pub visibility    : OrgVisibility,
    pub created_at    : Timestamp,
}

impl Organization {
    /// Both images are required before an organization may be
    /// submitted for official status.
    pub fn has_both_images(&self) -> bool {
        fn non_empty(url: &Option<String>) -> bool {
            url.as_deref().is_some_and(|url| !url.trim().is_empty())
        }
        non_empty(&self.thumbnail_url) && non_empty(&self.banner_url)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum OrgVisibility {
    #[default]
    Public = 0,
    Private = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org_with_images(thumbnail: Option<&str>, banner: Option<&str>) -> Organization {
        Organization {
            id: Id::new(),
            name: "Chess Club".into(),
            description: String::new(),
            thumbnail_url: thumbnail.map(Into::into),
            banner_url: banner.map(Into::into),
            visibility: OrgVisibility::Public,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn both_images_required() {
        assert!(org_with_images(Some("t.png"), Some("b.png")).has_both_images());
        assert!(!org_with_images(Some("t.png"), None).has_both_images());
        assert!(!org_with_images(None, Some("b.png")).has_both_images());
        assert!(!org_with_images(Some(""), Some("b.png")).has_both_images());
        assert!(!org_with_images(Some("t.png"), Some("  ")).has_both_images());
    }
}
