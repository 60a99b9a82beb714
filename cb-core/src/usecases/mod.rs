mod authorize;
mod check_official;
mod create_event;
mod create_organization;
mod error;
mod login;
mod pending_requests;
mod register;
mod review_details;
mod review_official;
mod rsvp_event;
mod set_user_role;
mod submit_for_official;

#[cfg(test)]
pub mod tests;

pub use self::{
    authorize::*, check_official::*, create_event::*, create_organization::*, error::Error,
    login::*, pending_requests::*, register::*, review_details::*, review_official::*,
    rsvp_event::*, set_user_role::*, submit_for_official::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
