#[macro_use]
extern crate log;

mod create_event;
mod create_organization;
mod official;
mod set_user_role;

pub mod prelude {
    pub use super::{create_event::*, create_organization::*, official::*, set_user_role::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use cb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use cb_db_sqlite::Connections;
}
