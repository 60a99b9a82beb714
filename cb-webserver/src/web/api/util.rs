use rocket::{get, State};

use crate::web::guards::Version;

#[get("/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.inner().0
}
