#[macro_use]
extern crate log;

mod cfg;
mod cli;

use anyhow::Result;
use clap::Parser as _;

use cb_application::prelude as flows;
use cb_core::entities::{EmailAddress, Role};
use cb_db_sqlite::Connections;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = cli::Args::parse();
    let cfg = cfg::Cfg::from_env_or_default();
    let db_url = args.db_url.unwrap_or(cfg.db_url);

    info!("Opening database {db_url}");
    let connections = Connections::init(&db_url, cfg.db_connection_pool_size)?;
    cb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    match args.command {
        Some(cli::Command::GrantStaff { email }) => {
            let email = email.parse::<EmailAddress>()?;
            flows::set_user_role(&connections, &email, Role::Staff)?;
            println!("Granted the staff role to {email}");
        }
        None => {
            cb_webserver::run(connections, Some(args.port), args.enable_cors, VERSION).await;
        }
    }
    Ok(())
}
