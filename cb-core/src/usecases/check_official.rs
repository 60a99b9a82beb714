use super::prelude::*;

// Public reads without any authentication.

pub fn check_official_pending<R: OfficialRepo>(
    repo: &R,
    org_id: Option<Id>,
    event_id: Option<Id>,
) -> Result<bool> {
    let target =
        OfficialTarget::from_optional_ids(org_id, event_id).ok_or(Error::InvalidOfficialTarget)?;
    Ok(repo.is_submission_pending(&target)?)
}

pub fn check_official<R: OfficialRepo>(
    repo: &R,
    org_id: Option<Id>,
    event_id: Option<Id>,
) -> Result<bool> {
    let target =
        OfficialTarget::from_optional_ids(org_id, event_id).ok_or(Error::InvalidOfficialTarget)?;
    Ok(repo.is_official(&target)?)
}
