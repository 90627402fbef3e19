//! Interpreter resolution.
//!
//! A [`Resolver`] owns the three things resolution depends on: the platform
//! conventions, a read-only [`Env`] and an executable [`Lookup`]. Defaults read
//! the real process environment and `PATH`; tests swap in maps and closures.

use crate::command::{self, CancellationToken, CommandRequest, ProcessDescriptor};
use crate::env::{Env, Lookup, ProcessEnv, SearchPath};
use crate::error::{Error, Result};
use crate::shell::{InterpreterSpec, Platform};

/// How the interpreter is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Use the interpreter named by the platform environment variable.
    #[default]
    Auto,
    /// Always use the platform default interpreter, ignoring the environment.
    Safe,
}

#[derive(Debug, Clone)]
pub struct Resolver<E = ProcessEnv, L = SearchPath> {
    platform: Platform,
    env:      E,
    lookup:   L,
}

impl Default for Resolver {
    fn default() -> Self { Self::new() }
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
            env:      ProcessEnv,
            lookup:   SearchPath,
        }
    }
}

impl<E, L> Resolver<E, L>
where
    E: Env,
    L: Lookup,
{
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn env<E2: Env>(self, env: E2) -> Resolver<E2, L> {
        Resolver {
            platform: self.platform,
            env,
            lookup: self.lookup,
        }
    }

    pub fn lookup<L2: Lookup>(self, lookup: L2) -> Resolver<E, L2> {
        Resolver {
            platform: self.platform,
            env: self.env,
            lookup,
        }
    }

    /// Picks the interpreter for `mode` and checks that it can be located.
    ///
    /// `command` only feeds the error message.
    fn resolve_for(
        &self,
        mode: Mode,
        command: impl FnOnce() -> Option<String>,
    ) -> Result<InterpreterSpec> {
        let platform = self.platform;
        let executable = match mode {
            Mode::Safe => platform.default_interpreter().to_string(),
            Mode::Auto => match self.env.var(platform.env_var()) {
                Some(val) if !val.is_empty() => val,
                _ => {
                    return Err(Error::InterpreterNotFound {
                        env_var: platform.env_var(),
                        command: command(),
                    });
                }
            },
        };

        let located = self.lookup.lookup(&executable)?;
        tracing::debug!(
            ?mode,
            ?platform,
            interpreter = %executable,
            located = %located.display(),
            "resolved command line interpreter"
        );

        Ok(InterpreterSpec::new(executable, platform.invocation_flag()))
    }

    pub fn resolve(&self, mode: Mode) -> Result<InterpreterSpec> {
        self.resolve_for(mode, || None)
    }

    /// Resolves the interpreter and wraps `request` into a descriptor.
    pub fn command(
        &self,
        mode: Mode,
        request: &CommandRequest,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<ProcessDescriptor> {
        let interpreter = self.resolve_for(mode, || Some(request.joined()))?;
        Ok(command::build(&interpreter, request, cancellation_token))
    }
}
