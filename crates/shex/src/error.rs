use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "\"{}\" is a required environment variable: it allows to know which command line \
         interpreter to use for running {}",
        .env_var,
        running(.command)
    )]
    InterpreterNotFound {
        env_var: &'static str,
        command: Option<String>,
    },

    #[error(transparent)]
    Lookup(#[from] which::Error),
}

fn running(command: &Option<String>) -> String {
    match command {
        Some(command) => format!("\"{command}\""),
        None => "a command".to_string(),
    }
}

impl Error {
    /// Name of the environment variable that failed to yield an interpreter.
    pub fn env_var(&self) -> Option<&'static str> {
        match self {
            Self::InterpreterNotFound { env_var, .. } => Some(*env_var),
            Self::Lookup(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpreter_not_found_message() {
        let err = Error::InterpreterNotFound {
            env_var: "SHELL",
            command: Some("echo Hello world".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "\"SHELL\" is a required environment variable: it allows to know which command line \
             interpreter to use for running \"echo Hello world\""
        );
        assert_eq!(err.env_var(), Some("SHELL"));
    }

    #[test]
    fn test_interpreter_not_found_message_without_command() {
        let err = Error::InterpreterNotFound {
            env_var: "COMSPEC",
            command: None,
        };
        assert_eq!(
            err.to_string(),
            "\"COMSPEC\" is a required environment variable: it allows to know which command line \
             interpreter to use for running a command"
        );
    }

    #[test]
    fn test_lookup_is_transparent() {
        let err = Error::from(which::Error::CannotFindBinaryPath);
        assert_eq!(err.to_string(), which::Error::CannotFindBinaryPath.to_string());
        assert_eq!(err.env_var(), None);
    }
}
