//! Host interpreter conventions.

/// Platform class, deciding which interpreter conventions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// Platform class of the host this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Environment variable naming the user's interpreter.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Posix => "SHELL",
            Self::Windows => "COMSPEC",
        }
    }

    /// Flag telling the interpreter to run the next argument as a command line.
    pub const fn invocation_flag(self) -> &'static str {
        match self {
            Self::Posix => "-c",
            Self::Windows => "/c",
        }
    }

    /// Interpreter used when the environment is not consulted.
    pub const fn default_interpreter(self) -> &'static str {
        match self {
            Self::Posix => "/bin/sh",
            Self::Windows => "cmd.exe",
        }
    }
}

impl Default for Platform {
    fn default() -> Self { Self::current() }
}

/// Interpreter executable and the flag it expects before a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterSpec {
    executable_path: String,
    invocation_flag: &'static str,
}

impl InterpreterSpec {
    pub fn new(executable_path: impl Into<String>, invocation_flag: &'static str) -> Self {
        Self {
            executable_path: executable_path.into(),
            invocation_flag,
        }
    }

    /// Platform default interpreter.
    pub fn default_for(platform: Platform) -> Self {
        Self::new(platform.default_interpreter(), platform.invocation_flag())
    }

    pub fn executable_path(&self) -> &str { &self.executable_path }

    pub fn invocation_flag(&self) -> &'static str { self.invocation_flag }
}
