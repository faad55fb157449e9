//! # pguser CLI Library
//!
//! Configuration, prompting, and command dispatch for the `pguser` binary.
//!
//! ## Modules
//!
//! - `config`: Environment-based configuration
//! - `prompt`: Interactive line prompts
//! - `dispatcher`: Command selection and execution
//!
//! ## Example
//!
//! ```no_run
//! use pguser_cli::config::Config;
//! use pguser_cli::dispatcher::{dispatch, Command};
//! use pguser_shared::db::pool::create_pool;
//! use pguser_shared::store::PgUserStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! let store = PgUserStore::new(create_pool(config.pool_config())?);
//!
//! let stdin = std::io::stdin();
//! let stdout = std::io::stdout();
//! let outcome = dispatch(&store, Command::List, &mut stdin.lock(), &mut stdout.lock()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatcher;
pub mod prompt;
