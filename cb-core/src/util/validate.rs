use crate::entities::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgInvalidation {
    Name,
}

pub fn organization(name: &str) -> Result<(), OrgInvalidation> {
    if name.trim().is_empty() {
        return Err(OrgInvalidation::Name);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventInvalidation {
    Title,
    EndDateBeforeStart,
}

pub fn event(title: &str, start: Timestamp, end: Option<Timestamp>) -> Result<(), EventInvalidation> {
    if title.trim().is_empty() {
        return Err(EventInvalidation::Title);
    }
    if let Some(end) = end {
        if end < start {
            return Err(EventInvalidation::EndDateBeforeStart);
        }
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    fast_chemail::is_valid_email(email)
}
