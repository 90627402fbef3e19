//! Read-only access to environment variables and the executable search path.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::path::PathBuf;

/// Read-only key/value view of an environment.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
///
/// A value that is not valid UTF-8 reads as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> { env::var(key).ok() }
}

impl Env for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> { self.get(key).cloned() }
}

impl Env for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> { self.get(key).cloned() }
}

impl<E: Env + ?Sized> Env for &E {
    fn var(&self, key: &str) -> Option<String> { (**self).var(key) }
}

/// Locates an executable from a bare name or a path.
pub trait Lookup {
    fn lookup(&self, candidate: &str) -> Result<PathBuf, which::Error>;
}

/// Resolution against the `PATH` of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchPath;

impl Lookup for SearchPath {
    fn lookup(&self, candidate: &str) -> Result<PathBuf, which::Error> { which::which(candidate) }
}

impl<F> Lookup for F
where
    F: Fn(&str) -> Result<PathBuf, which::Error>,
{
    fn lookup(&self, candidate: &str) -> Result<PathBuf, which::Error> { self(candidate) }
}
