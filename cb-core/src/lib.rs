pub mod authorization;
pub mod entities;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use repositories::Error as RepoError;
