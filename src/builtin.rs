use crate::command::{CommandFactory, Context, ExecutableCommand, ExitCode};
use crate::interpreter::Factory;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use log::debug;
use std::io::{Read, Write};

/// Built-in commands known to the interpreter at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed directly
/// in-process without spawning a child process.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "echo".
    fn name() -> &'static str;

    /// Rewrites raw arguments before argh sees them.
    ///
    /// argh only understands one switch per argument; builtins that accept
    /// bundled switches such as `-ne` split them here.
    fn split_switches(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    /// Executes the command using provided IO streams.
    ///
    /// Return value should follow shell conventions: 0 for success, non-zero for error.
    fn execute(
        &self,
        ctx: &Context,
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        ctx: &Context,
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<ExitCode> {
        debug!("running builtin {}", T::name());
        <T as BuiltinCommand>::execute(&self, ctx, stdin, stdout, stderr)
    }
}

/// Stand-in produced when argh stops early: either `--help` was requested
/// or the arguments did not parse.
struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        _ctx: &Context,
        _stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<ExitCode> {
        if self.is_error {
            stderr.write_all(self.output.as_bytes())?;
            Ok(1)
        } else {
            stdout.write_all(self.output.as_bytes())?;
            Ok(0)
        }
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            let args = T::split_switches(args);
            let args: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
            Some(match T::from_args(&[name], &args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                    output,
                    is_error: status.is_err(),
                }),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::echo::Echo;
    use std::io::Cursor;

    fn run(name: &str, args: &[&str]) -> (Option<ExitCode>, String, String) {
        let factory = Factory::<Echo>::default();
        let Some(cmd) = factory.try_create(name, args) else {
            return (None, String::new(), String::new());
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = cmd
            .execute(&Context::new(), &mut Cursor::new(Vec::new()), &mut out, &mut err)
            .unwrap();
        (
            Some(code),
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_factory_ignores_other_names() {
        let (code, out, err) = run("printf", &["hello"]);
        assert_eq!(code, None);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_factory_parses_switches() {
        let (code, out, _) = run("echo", &["-n", "-e", "a\\tb"]);
        assert_eq!(code, Some(0));
        assert_eq!(out, "a\tb");
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (code, out, err) = run("echo", &["--help"]);
        assert_eq!(code, Some(0));
        assert!(out.contains("Usage: echo"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_unknown_switch_goes_to_stderr() {
        let (code, out, err) = run("echo", &["--bogus"]);
        assert_eq!(code, Some(1));
        assert!(out.is_empty());
        assert!(err.contains("--bogus"));
    }

    #[test]
    fn test_usage_error_ends_with_single_newline() {
        let (_, _, err) = run("echo", &["-x"]);
        assert!(err.ends_with('\n'));
        assert!(!err.ends_with("\n\n"));
    }

    #[test]
    fn test_factory_accepts_bundled_switches() {
        let (code, out, err) = run("echo", &["-ne", "x\\ty"]);
        assert_eq!(code, Some(0));
        assert_eq!(out, "x\ty");
        assert!(err.is_empty());
    }
}
