//! Run commands through the host's command line interpreter.
//!
//! A command that works in a terminal often fails when spawned directly with
//! `std::process::Command`, because builtins, aliases and `PATH` tweaks only
//! exist inside the interpreter. This crate wraps a command into a single
//! interpreter invocation instead:
//!
//! - POSIX: `$SHELL -c "name arg1 arg2"`
//! - Windows: `%COMSPEC% /c "name arg1 arg2"`
//!
//! The `safe_*` variants skip the environment and always use `/bin/sh` or
//! `cmd.exe`. In both modes the interpreter must be locatable, otherwise the
//! lookup error is returned.
//!
//! Arguments are joined with single spaces and are neither quoted nor escaped.
//!
//! # Example
//!
//! ```no_run
//! let desc = shex::safe_command("echo", ["Hello", "world"])?;
//! // /bin/sh -c "echo Hello world"
//! let status = desc.command().status()?;
//! assert!(status.success());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use command::{CancellationToken, CommandRequest, ProcessDescriptor, build};
pub use env::{Env, Lookup, ProcessEnv, SearchPath};
pub use error::{Error, Result};
pub use resolver::{Mode, Resolver};
pub use shell::{InterpreterSpec, Platform};

pub mod command;
pub mod env;
mod error;
pub mod resolver;
pub mod shell;

fn make_command<I, S>(
    mode: Mode,
    cancellation_token: Option<CancellationToken>,
    name: &str,
    args: I,
) -> Result<ProcessDescriptor>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let request = CommandRequest::new(name, args);
    Resolver::new().command(mode, &request, cancellation_token)
}

/// Runs `name args...` through the interpreter named by `SHELL` (`COMSPEC` on
/// Windows).
///
/// Fails with [`Error::InterpreterNotFound`] if the variable is unset or empty.
pub fn command<I, S>(name: &str, args: I) -> Result<ProcessDescriptor>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    make_command(Mode::Auto, None, name, args)
}

/// Like [`command`], attaching `token` to the descriptor.
pub fn command_with_cancellation<I, S>(
    token: CancellationToken,
    name: &str,
    args: I,
) -> Result<ProcessDescriptor>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    make_command(Mode::Auto, Some(token), name, args)
}

/// Runs `name args...` through `/bin/sh` (`cmd.exe` on Windows), whatever the
/// environment says.
pub fn safe_command<I, S>(name: &str, args: I) -> Result<ProcessDescriptor>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    make_command(Mode::Safe, None, name, args)
}

/// Like [`safe_command`], attaching `token` to the descriptor.
pub fn safe_command_with_cancellation<I, S>(
    token: CancellationToken,
    name: &str,
    args: I,
) -> Result<ProcessDescriptor>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    make_command(Mode::Safe, Some(token), name, args)
}
