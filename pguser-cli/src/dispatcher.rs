//! Command dispatcher
//!
//! Selects one of three command paths from the first positional argument,
//! drives the prompts it needs, calls the store, and renders the result.
//!
//! ```text
//! create  ─> prompt first, last ─> UserStore::create             ─> (silent)
//! find    ─> prompt first       ─> UserStore::find_by_first_name ─> greeting | "No user found"
//! <other> ─>                       UserStore::list               ─> one greeting per user
//! ```

use anyhow::Context;
use pguser_shared::models::user::User;
use pguser_shared::store::UserStore;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::prompt::prompt;

/// Printed when `find` has nothing to show
pub const NOT_FOUND_MESSAGE: &str = "No user found";

/// The command selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a first and last name and insert a user
    Create,

    /// Prompt for a first name and greet the first matching user
    Find,

    /// Greet every user
    List,
}

impl Command {
    /// Maps the positional argument to a command
    ///
    /// Anything other than `create` or `find`, including no argument at
    /// all, lists users.
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            Some("create") => Command::Create,
            Some("find") => Command::Find,
            _ => Command::List,
        }
    }
}

/// How a successfully dispatched command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    NotFound,
}

impl Outcome {
    /// Process exit status for this outcome
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Completed => 0,
            Outcome::NotFound => 1,
        }
    }
}

/// Formats the greeting line for a user
pub fn greeting(user: &User) -> String {
    format!("Hello, {} {}!", user.first_name, user.last_name)
}

/// Runs `command` against `store`
///
/// Prompts are written to `output` and answers read from `input`. A prompt
/// that fails (closed or truncated input) yields an empty answer.
///
/// # Errors
///
/// Returns an error if `create` or `list` fails in the store, or if writing
/// to `output` fails. A failed `find` is not an error: it prints
/// [`NOT_FOUND_MESSAGE`] and returns [`Outcome::NotFound`].
pub async fn dispatch<S, R, W>(
    store: &S,
    command: Command,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Outcome>
where
    S: UserStore + ?Sized,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    debug!(?command, "Dispatching command");

    match command {
        Command::Create => {
            let first_name = prompt_or_empty(input, output, "First name: ");
            let last_name = prompt_or_empty(input, output, "Last name: ");

            store
                .create(&first_name, &last_name)
                .await
                .context("failed to create user")?;

            info!(first_name = %first_name, last_name = %last_name, "User created");
            Ok(Outcome::Completed)
        }

        Command::Find => {
            let first_name = prompt_or_empty(input, output, "First name: ");

            match store.find_by_first_name(&first_name).await {
                Ok(user) => {
                    writeln!(output, "{}", greeting(&user))?;
                    Ok(Outcome::Completed)
                }
                Err(err) => {
                    if !err.is_not_found() {
                        warn!(error = %err, "User lookup failed; reporting as not found");
                    }
                    writeln!(output, "{NOT_FOUND_MESSAGE}")?;
                    Ok(Outcome::NotFound)
                }
            }
        }

        Command::List => {
            let users = store.list().await.context("failed to list users")?;

            for user in &users {
                writeln!(output, "{}", greeting(user))?;
            }
            output.flush()?;

            Ok(Outcome::Completed)
        }
    }
}

fn prompt_or_empty<R, W>(input: &mut R, output: &mut W, question: &str) -> String
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    match prompt(input, output, question) {
        Ok(answer) => answer,
        Err(err) => {
            debug!(error = %err, question, "Prompt failed; using empty answer");
            String::new()
        }
    }
}
