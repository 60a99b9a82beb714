use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "campusboard", version, about = "Campus events and organizations server")]
pub struct Args {
    /// The port to listen on
    #[arg(short, long, default_value_t = 6767)]
    pub port: u16,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Grant the staff role to an existing user
    GrantStaff {
        /// E-mail address of the user
        email: String,
    },
}
