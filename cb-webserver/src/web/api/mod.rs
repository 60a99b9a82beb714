use std::{fmt::Display, result};

use cb_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, get,
    http::Status,
    post,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::web::{jwt, sqlite};
use cb_application::prelude as flows;
use cb_core::{entities::*, usecases};

mod admin;
mod error;
mod events;
mod official;
mod orgs;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_user,
        users::post_login,
        users::post_logout,
        users::get_current_user,
        // ---   organizations   --- //
        orgs::post_org,
        orgs::get_org,
        orgs::get_org_events,
        orgs::post_org_join,
        // ---   events   --- //
        events::post_event,
        events::get_event,
        events::post_event_rsvp,
        // ---   official status   --- //
        official::post_official_submit,
        official::get_official_pending,
        official::get_official_status,
        // ---   staff review   --- //
        admin::get_pending_requests,
        admin::get_pending_counts,
        admin::get_org_details,
        admin::get_event_details,
        admin::post_approve_official,
        admin::post_reject_official,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
