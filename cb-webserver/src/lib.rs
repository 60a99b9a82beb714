#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use cb_db_sqlite::Connections;

mod web;

pub async fn run(
    connections: Connections,
    port: Option<u16>,
    enable_cors: bool,
    version: &'static str,
) {
    web::run(connections.into(), port, enable_cors, version).await;
}
