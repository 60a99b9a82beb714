use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub name: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub banner_url: Option<String>,
    pub visibility: OrgVisibility,
}

/// Creates a new organization with the acting user as its first admin.
///
/// Both repository calls must run within one transaction.
pub fn create_organization<R>(repo: &R, created_by: UserId, o: NewOrganization) -> Result<Id>
where
    R: OrganizationRepo,
{
    validate::organization(&o.name)?;
    let NewOrganization {
        name,
        description,
        thumbnail_url,
        banner_url,
        visibility,
    } = o;
    let org = Organization {
        id: Id::new(),
        name,
        description,
        thumbnail_url,
        banner_url,
        visibility,
        created_at: Timestamp::now(),
    };
    repo.create_org(&org)?;
    repo.add_org_admin(&org.id, created_by)?;
    log::info!("Created organization {} ({})", org.name, org.id);
    Ok(org.id)
}

pub fn join_organization<R>(repo: &R, user_id: UserId, org_id: &Id) -> Result<()>
where
    R: OrganizationRepo,
{
    // Ensure the organization exists before linking the member.
    let org = repo.get_org(org_id)?;
    repo.add_org_member(&org.id, user_id)?;
    Ok(())
}

pub fn get_organization<R: OrganizationRepo>(repo: &R, id: &Id) -> Result<Organization> {
    Ok(repo.get_org(id)?)
}
