//! # pguser
//!
//! Creates and reads user records in PostgreSQL.
//!
//! ## Usage
//!
//! ```bash
//! pguser          # greet every user
//! pguser create   # prompt for a first and last name and insert a user
//! pguser find     # prompt for a first name and greet the first match
//! ```

use anyhow::Context;
use clap::Parser;
use pguser_cli::config::Config;
use pguser_cli::dispatcher::{dispatch, Command};
use pguser_shared::db::pool::{close_pool, create_pool};
use pguser_shared::store::PgUserStore;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pguser", version)]
#[command(about = "Create and list user records stored in PostgreSQL")]
struct Cli {
    #[arg(
        value_name = "COMMAND",
        help = "`create` or `find`; anything else (or nothing) lists all users"
    )]
    command: Option<String>,

    /// Anything after the command is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

impl Cli {
    fn selected_command(&self) -> Command {
        Command::parse(self.command.as_deref())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries prompts and greetings only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pguser_cli=warn,pguser_shared=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!("pguser v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let pool = create_pool(config.pool_config()).context("invalid database settings")?;
    let store = PgUserStore::new(pool);

    let command = cli.selected_command();
    let result = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        dispatch(&store, command, &mut stdin.lock(), &mut stdout.lock()).await
    };

    // Release the pool on every path before reporting the result.
    close_pool(store.into_pool()).await;

    let outcome = result?;
    Ok(ExitCode::from(outcome.exit_code()))
}
