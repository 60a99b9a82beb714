pub mod email;
pub mod event;
pub mod id;
pub mod official;
pub mod organization;
pub mod password;
pub mod rsvp;
pub mod time;
pub mod user;

#[cfg(feature = "builders")]
pub mod builders;
