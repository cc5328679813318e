use crate::command::{CommandFactory, Context, ExitCode};
use anyhow::{Result, anyhow};
use log::debug;
use std::io::{Read, Write};

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate (see `BuiltinCommand`).
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Runs commands by name against a set of pluggable factories.
///
/// Every invocation receives the interpreter's [`Context`]; cancelling it through
/// [`Interpreter::context`] is visible to all later invocations.
///
/// Example
/// ```
/// use echo_command::Interpreter;
/// let mut sh = Interpreter::default();
/// let mut out = Vec::new();
/// let code = sh
///     .run_with("echo", &["hello", "world"], &mut std::io::empty(), &mut out, &mut std::io::sink())
///     .unwrap();
/// assert_eq!(code, 0);
/// assert_eq!(out, b"hello world\n");
/// ```
pub struct Interpreter {
    ctx: Context,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            ctx: Context::new(),
            commands,
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Run a single command invocation against the process stdio.
    ///
    /// Stdout is flushed before returning so output without a trailing newline
    /// is not left in the buffer.
    pub fn run(&mut self, name: &str, args: &[&str]) -> Result<ExitCode> {
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();
        let mut stderr = std::io::stderr().lock();
        let code = self.run_with(name, args, &mut stdin, &mut stdout, &mut stderr)?;
        stdout.flush()?;
        Ok(code)
    }

    /// Run a single command invocation against caller-supplied streams.
    ///
    /// Returns the command's exit code, or its error unchanged if it failed.
    pub fn run_with(
        &mut self,
        name: &str,
        args: &[&str],
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<ExitCode> {
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(name, args) {
                debug!("dispatching {} with {} args", name, args.len());
                return cmd.execute(&self.ctx, stdin, stdout, stderr);
            }
        }
        Err(anyhow!("command not found: {}", name))
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the built-in `echo`.
    fn default() -> Self {
        use crate::echo::Echo;
        Self::new(vec![Box::new(Factory::<Echo>::default())])
    }
}
