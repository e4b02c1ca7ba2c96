//! # Command Specifications and Execution Options
//!
//! File: cli/src/common/process/command.rs
//!
//! ## Overview
//!
//! Defines what the executors run (`CommandSpec`), how they run it
//! (`ExecOptions`, `Redirect`), and the shared plumbing that turns the two into a
//! `std::process::Command` ready to spawn.
//!
//! A command is either an argument vector or a single human-friendly string. A
//! string is split with POSIX shell quoting rules (`shlex`) unless the `shell`
//! option is set, in which case it is handed to `/bin/sh -c` untouched.
//!
use crate::core::error::{BuildError, ProcessResult};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Interpreter used when the `shell` option is set.
pub const SHELL: &str = "/bin/sh";

/// A single command: an argument vector or a raw command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSpec {
    /// Program followed by its arguments.
    Argv(Vec<String>),
    /// A command line. Tokenized with shell rules, or run by the shell when
    /// the `shell` option is set.
    Line(String),
}

impl CommandSpec {
    pub fn argv<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::Argv(args.into_iter().map(Into::into).collect())
    }

    pub fn line(line: impl Into<String>) -> Self {
        CommandSpec::Line(line.into())
    }

    /// Resolves the program and arguments that will actually be executed.
    ///
    /// With `shell` off, a `Line` is split using shell quoting rules, so
    /// `"echo 'hello world'"` becomes `["echo", "hello world"]` and no shell is
    /// involved. With `shell` on, a `Line` becomes `/bin/sh -c <line>` and an
    /// `Argv` becomes `/bin/sh -c <argv[0]> <argv[1..]>`.
    ///
    /// # Errors
    ///
    /// `BuildError::BadCommand` if the string has unbalanced quotes or the
    /// command resolves to nothing.
    pub fn to_argv(&self, shell: bool) -> ProcessResult<Vec<String>> {
        let argv = match (self, shell) {
            (CommandSpec::Argv(args), _) if args.is_empty() => Vec::new(),
            (CommandSpec::Line(line), true) => {
                vec![SHELL.to_string(), "-c".to_string(), line.clone()]
            }
            (CommandSpec::Argv(args), true) => {
                let mut argv = vec![SHELL.to_string(), "-c".to_string()];
                argv.extend(args.iter().cloned());
                argv
            }
            (CommandSpec::Line(line), false) => shlex::split(line).ok_or_else(|| {
                BuildError::BadCommand(format!("cannot split command line {:?}", line))
            })?,
            (CommandSpec::Argv(args), false) => args.clone(),
        };
        if argv.is_empty() {
            return Err(BuildError::BadCommand("empty command".to_string()));
        }
        Ok(argv)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandSpec::Line(line) => f.write_str(line),
            CommandSpec::Argv(args) => match shlex::try_join(args.iter().map(String::as_str)) {
                Ok(joined) => f.write_str(&joined),
                // Only arguments with NUL bytes cannot be quoted.
                Err(_) => write!(f, "{:?}", args),
            },
        }
    }
}

impl From<&str> for CommandSpec {
    fn from(line: &str) -> Self {
        CommandSpec::Line(line.to_string())
    }
}

impl From<String> for CommandSpec {
    fn from(line: String) -> Self {
        CommandSpec::Line(line)
    }
}

impl From<Vec<String>> for CommandSpec {
    fn from(args: Vec<String>) -> Self {
        CommandSpec::Argv(args)
    }
}

impl From<&[&str]> for CommandSpec {
    fn from(args: &[&str]) -> Self {
        CommandSpec::argv(args.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for CommandSpec {
    fn from(args: [&str; N]) -> Self {
        CommandSpec::argv(args)
    }
}

impl From<&CommandSpec> for CommandSpec {
    fn from(spec: &CommandSpec) -> Self {
        spec.clone()
    }
}

/// Where a child's standard stream is connected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Redirect {
    /// Share the caller's stream.
    #[default]
    Inherit,
    /// `/dev/null`.
    Null,
    /// A file: opened for reading when used as stdin, created/truncated when
    /// used as stdout or stderr.
    File(PathBuf),
}

impl Redirect {
    pub(crate) fn input(&self) -> io::Result<Stdio> {
        Ok(match self {
            Redirect::Inherit => Stdio::inherit(),
            Redirect::Null => Stdio::null(),
            Redirect::File(path) => Stdio::from(File::open(path)?),
        })
    }

    pub(crate) fn output(&self) -> io::Result<Stdio> {
        Ok(match self {
            Redirect::Inherit => Stdio::inherit(),
            Redirect::Null => Stdio::null(),
            Redirect::File(path) => Stdio::from(File::create(path)?),
        })
    }
}

/// Options recognized by every executor.
///
/// `nostrip`, `err2out` and `clocale` only affect the capturing executors.
/// For a pipeline, `stdin` applies to the first command and `stdout` to the
/// last; everything else applies to every command.
#[derive(Debug, Clone)]
pub struct ExecOptions {
    /// Run the command through `/bin/sh -c`.
    pub shell: bool,
    /// Keep leading/trailing whitespace in captured output.
    pub nostrip: bool,
    /// Merge standard error into the captured standard output.
    pub err2out: bool,
    /// Force `LC_ALL=C` and `LANG=C` for captured commands. On by default.
    pub clocale: bool,
    /// Base environment. Replaces the inherited environment when set.
    pub env: Option<HashMap<String, String>>,
    /// Working directory of the child.
    pub cwd: Option<PathBuf>,
    pub stdin: Redirect,
    pub stdout: Redirect,
    pub stderr: Redirect,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            shell: false,
            nostrip: false,
            err2out: false,
            clocale: true,
            env: None,
            cwd: None,
            stdin: Redirect::Inherit,
            stdout: Redirect::Inherit,
            stderr: Redirect::Inherit,
        }
    }
}

impl ExecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shell(mut self, shell: bool) -> Self {
        self.shell = shell;
        self
    }

    pub fn nostrip(mut self, nostrip: bool) -> Self {
        self.nostrip = nostrip;
        self
    }

    pub fn err2out(mut self, err2out: bool) -> Self {
        self.err2out = err2out;
        self
    }

    pub fn clocale(mut self, clocale: bool) -> Self {
        self.clocale = clocale;
        self
    }

    pub fn env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    pub fn stdin(mut self, stdin: Redirect) -> Self {
        self.stdin = stdin;
        self
    }

    pub fn stdout(mut self, stdout: Redirect) -> Self {
        self.stdout = stdout;
        self
    }

    pub fn stderr(mut self, stderr: Redirect) -> Self {
        self.stderr = stderr;
        self
    }
}

/// Builds the `Command` for `spec`: program, arguments, working directory and
/// base environment. Standard streams are left to the caller.
pub(crate) fn prepare(spec: &CommandSpec, options: &ExecOptions) -> ProcessResult<Command> {
    let argv = spec.to_argv(options.shell)?;
    let mut command = Command::new(&argv[0]);
    command.args(&argv[1..]);
    if let Some(cwd) = &options.cwd {
        command.current_dir(cwd);
    }
    if let Some(env) = &options.env {
        command.env_clear().envs(env);
    }
    Ok(command)
}

/// Wraps an I/O failure that happened while setting up or starting `spec`.
pub(crate) fn spawn_error(spec: &CommandSpec, source: io::Error) -> BuildError {
    BuildError::Spawn {
        command: spec.to_string(),
        source,
    }
}

/// Integer exit status of a finished child: its exit code, or `-N` when it was
/// killed by signal `N`.
pub(crate) fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
