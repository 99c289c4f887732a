use crate::api::RequestExecutor;
use crate::error::Result;
use crate::operations::{get_context, search_library};
use serde_json::Value;
use std::fmt;
use std::io::Write;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { library_name: String, query: String },
    Context { library_id: String, query: String },
}

/// Which usage line to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    TopLevel,
    Search,
    Context,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::TopLevel => write!(f, "Usage: context7-api <search|context> <args...>"),
            UsageError::Search => write!(f, "Usage: context7-api search <libraryName> <query>"),
            UsageError::Context => write!(f, "Usage: context7-api context <libraryId> <query>"),
        }
    }
}

impl std::error::Error for UsageError {}

#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchOptions {
    /// Exit non-zero when the request fails instead of only printing `null`.
    pub strict: bool,
}

impl Command {
    /// Parse the positional words: `<subcommand> <arg> <query>`.
    pub fn from_args(words: &[String]) -> std::result::Result<Self, UsageError> {
        let subcommand = words.first().map(String::as_str);
        let usage = match subcommand {
            Some("search") => UsageError::Search,
            Some("context") => UsageError::Context,
            _ => return Err(UsageError::TopLevel),
        };

        let first = words.get(1).filter(|s| !s.is_empty()).ok_or(usage)?;
        let query = words.get(2).filter(|s| !s.is_empty()).ok_or(usage)?;

        if words.len() > 3 {
            tracing::warn!(ignored = ?&words[3..], "ignoring extra arguments");
        }

        Ok(match usage {
            UsageError::Search => Command::Search {
                library_name: first.clone(),
                query: query.clone(),
            },
            _ => Command::Context {
                library_id: first.clone(),
                query: query.clone(),
            },
        })
    }

    /// Prefix for the stderr line written when the request fails.
    pub fn failure_label(&self) -> &'static str {
        match self {
            Command::Search { .. } => "Error searching library",
            Command::Context { .. } => "Error getting context",
        }
    }

    pub async fn run(&self, executor: &dyn RequestExecutor) -> Result<Value> {
        match self {
            Command::Search {
                library_name,
                query,
            } => search_library(executor, library_name, query).await,
            Command::Context { library_id, query } => {
                get_context(executor, library_id, query).await
            }
        }
    }
}

/// Run `command`, print the result as indented JSON and return the exit code.
///
/// A failed request is reported on `err` and printed as `null` on `out`.
/// The exit code stays 0 in that case unless `options.strict` is set.
pub async fn execute<O, E>(
    command: &Command,
    executor: &dyn RequestExecutor,
    options: DispatchOptions,
    out: &mut O,
    err: &mut E,
) -> Result<i32>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match command.run(executor).await {
        Ok(value) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            Ok(EXIT_OK)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "request failed");
            writeln!(err, "{}: {}", command.failure_label(), e)?;
            writeln!(out, "null")?;
            Ok(if options.strict {
                EXIT_FAILURE
            } else {
                EXIT_OK
            })
        }
    }
}
