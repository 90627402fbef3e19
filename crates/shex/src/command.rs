use crate::shell::InterpreterSpec;
use std::fmt;
use std::process::Command as StdCommand;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag handed through to whoever runs the process.
///
/// Nothing in this crate reads it.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self { Self::default() }

    pub fn cancel(&self) { self.0.store(true, Ordering::SeqCst); }

    pub fn is_cancelled(&self) -> bool { self.0.load(Ordering::SeqCst) }
}

impl PartialEq for CancellationToken {
    fn eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl Eq for CancellationToken {}

/// Logical command to run through the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    name:      String,
    arguments: Vec<String>,
}

impl CommandRequest {
    pub fn new<I, S>(name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name:      name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn arguments(&self) -> &[String] { &self.arguments }

    /// Name and arguments joined by single spaces.
    ///
    /// Nothing is quoted or escaped: an argument containing whitespace or shell
    /// metacharacters is reinterpreted by the interpreter.
    pub fn joined(&self) -> String {
        let mut joined = self.name.clone();
        for arg in &self.arguments {
            joined.push(' ');
            joined.push_str(arg);
        }
        joined
    }
}

/// Executable and arguments ready for `std::process::Command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDescriptor {
    executable_path:    String,
    argument_vector:    Vec<String>,
    cancellation_token: Option<CancellationToken>,
}

impl ProcessDescriptor {
    pub fn executable(&self) -> &str { &self.executable_path }

    /// `[invocation_flag, joined_command]`.
    pub fn args(&self) -> &[String] { &self.argument_vector }

    /// Executable followed by its arguments.
    pub fn argv(&self) -> [&str; 3] {
        [
            &self.executable_path,
            &self.argument_vector[0],
            &self.argument_vector[1],
        ]
    }

    pub fn invocation_flag(&self) -> &str { &self.argument_vector[0] }

    pub fn joined_command(&self) -> &str { &self.argument_vector[1] }

    pub fn cancellation_token(&self) -> Option<&CancellationToken> {
        self.cancellation_token.as_ref()
    }

    /// Native command for this descriptor. The cancellation token is not
    /// carried over; callers running the process own that.
    pub fn command(&self) -> StdCommand {
        let mut cmd = StdCommand::new(&self.executable_path);
        cmd.args(&self.argument_vector);
        cmd
    }
}

impl From<&ProcessDescriptor> for StdCommand {
    fn from(desc: &ProcessDescriptor) -> Self { desc.command() }
}

impl From<ProcessDescriptor> for StdCommand {
    fn from(desc: ProcessDescriptor) -> Self { desc.command() }
}

impl fmt::Display for ProcessDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\"",
            self.executable_path,
            self.invocation_flag(),
            self.joined_command()
        )
    }
}

/// Wraps `request` into a single interpreter invocation.
pub fn build(
    interpreter: &InterpreterSpec,
    request: &CommandRequest,
    cancellation_token: Option<CancellationToken>,
) -> ProcessDescriptor {
    let joined = request.joined();
    tracing::debug!(
        interpreter = interpreter.executable_path(),
        command = %joined,
        "built interpreter invocation"
    );
    ProcessDescriptor {
        executable_path: interpreter.executable_path().to_string(),
        argument_vector: vec![interpreter.invocation_flag().to_string(), joined],
        cancellation_token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Platform;

    fn sh() -> InterpreterSpec { InterpreterSpec::new("/bin/sh", "-c") }

    #[test]
    fn test_request_joined_no_arguments() {
        let req = CommandRequest::new("ls", Vec::<String>::new());
        assert_eq!(req.joined(), "ls");
    }

    #[test]
    fn test_request_joined_keeps_order() {
        let req = CommandRequest::new("echo", ["c", "a", "b"]);
        assert_eq!(req.joined(), "echo c a b");
    }

    #[test]
    fn test_request_joined_does_not_quote() {
        let req = CommandRequest::new("echo", ["Hello world", "\"x\"", "a;b"]);
        assert_eq!(req.joined(), "echo Hello world \"x\" a;b");
    }

    #[test]
    fn test_build_argument_vector() {
        let req = CommandRequest::new("echo", ["Hello", "world"]);
        let desc = build(&sh(), &req, None);
        assert_eq!(desc.executable(), "/bin/sh");
        assert_eq!(desc.args(), ["-c", "echo Hello world"]);
        assert_eq!(desc.argv(), ["/bin/sh", "-c", "echo Hello world"]);
        assert!(desc.cancellation_token().is_none());
    }

    #[test]
    fn test_build_windows_flag() {
        let spec = InterpreterSpec::default_for(Platform::Windows);
        let desc = build(&spec, &CommandRequest::new("dir", ["/b"]), None);
        assert_eq!(desc.argv(), ["cmd.exe", "/c", "dir /b"]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let req = CommandRequest::new("foo", ["bar", "baz"]);
        assert_eq!(build(&sh(), &req, None), build(&sh(), &req, None));
    }

    #[test]
    fn test_build_attaches_token_untouched() {
        let token = CancellationToken::new();
        let desc = build(&sh(), &CommandRequest::new("sleep", ["5"]), Some(token.clone()));
        assert_eq!(desc.cancellation_token(), Some(&token));
        assert!(!token.is_cancelled());

        token.cancel();
        assert!(desc.cancellation_token().is_some_and(CancellationToken::is_cancelled));
    }

    #[test]
    fn test_distinct_tokens_are_not_equal() {
        assert_ne!(CancellationToken::new(), CancellationToken::new());
    }

    #[test]
    fn test_command_program_and_args() {
        let desc = build(&sh(), &CommandRequest::new("echo", ["hi"]), None);
        let cmd: StdCommand = (&desc).into();
        assert_eq!(cmd.get_program().to_string_lossy(), "/bin/sh");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["-c", "echo hi"]);
    }

    #[test]
    fn test_display() {
        let desc = build(&sh(), &CommandRequest::new("echo", ["Hello", "world"]), None);
        assert_eq!(desc.to_string(), "/bin/sh -c \"echo Hello world\"");
    }
}
