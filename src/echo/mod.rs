//! The `echo` builtin.
//!
//! Joins its positional arguments with single spaces, optionally decodes
//! backslash escapes in the result and terminates it with a newline unless
//! asked not to. The whole line is written with a single `write_all`.

mod escape;
mod opt;

use crate::builtin::BuiltinCommand;
use crate::command::{Context, ExitCode};
use anyhow::Result;
use argh::FromArgs;
use log::debug;
use std::io::{Read, Write};

use opt::Configure;

pub use escape::decode;
pub use opt::{
    DisableEscape, EnableEscape, EscapeFlag, NewlineFlag, NoNewline, Param, WithNewline,
};

#[derive(FromArgs, Debug, Clone, Default, PartialEq, Eq)]
/// write the arguments to standard output, separated by spaces.
/// by default, a trailing newline is printed.
/// switches may be bundled (-ne) but must come before the first value.
pub struct Echo {
    #[argh(switch, short = 'n')]
    /// do not output the trailing newline.
    no_newline: bool,

    #[argh(switch, short = 'e')]
    /// interpret backslash escapes (\n, \t, \r, \\, \a, \b, \f, \v).
    escape: bool,

    #[argh(positional, greedy)]
    /// values to print, separated by spaces.
    args: Vec<String>,
}

impl Echo {
    /// Build an `echo` from a mixed list of text and flags.
    ///
    /// Text entries become the positional arguments in the order given.
    /// Flags may appear anywhere; when the same flag is given twice the last
    /// one wins. Unset flags keep their defaults, [`WithNewline`] and
    /// [`DisableEscape`].
    pub fn new<I, P>(params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Param>,
    {
        let mut echo = Echo::default();
        for param in params {
            match param.into() {
                Param::Text(text) => echo.args.push(text),
                Param::Newline(flag) => flag.configure(&mut echo),
                Param::Escape(flag) => flag.configure(&mut echo),
            }
        }
        echo
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn newline(&self) -> NewlineFlag {
        if self.no_newline { NoNewline } else { WithNewline }
    }

    pub fn escape(&self) -> EscapeFlag {
        if self.escape { EnableEscape } else { DisableEscape }
    }

    /// The exact text this command writes.
    pub fn render(&self) -> String {
        let joined = self.args.join(" ");
        let mut output = if self.escape {
            decode(&joined)
        } else {
            joined
        };
        if !self.no_newline {
            output.push('\n');
        }
        output
    }
}

impl BuiltinCommand for Echo {
    fn name() -> &'static str {
        "echo"
    }

    fn split_switches(args: &[&str]) -> Vec<String> {
        let mut out = Vec::with_capacity(args.len());
        let mut in_switches = true;
        for arg in args {
            let bundle = arg
                .strip_prefix('-')
                .filter(|rest| rest.len() > 1 && rest.chars().all(|c| c == 'n' || c == 'e'));
            match bundle {
                Some(rest) if in_switches => {
                    out.extend(rest.chars().map(|c| format!("-{}", c)));
                }
                _ => {
                    if !arg.starts_with('-') {
                        in_switches = false;
                    }
                    out.push(arg.to_string());
                }
            }
        }
        out
    }

    fn execute(
        &self,
        _ctx: &Context,
        _stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        _stderr: &mut dyn Write,
    ) -> Result<ExitCode> {
        let output = self.render();
        debug!(
            "echo: {} args, escape={}, no_newline={}, {} bytes",
            self.args.len(),
            self.escape,
            self.no_newline,
            output.len()
        );
        stdout.write_all(output.as_bytes())?;
        Ok(0)
    }
}

/// Build an [`Echo`] from a variadic list of text and flags.
///
/// ```
/// use echo_command::echo;
/// use echo_command::echo::{EnableEscape, NoNewline};
///
/// let cmd = echo!["tab\\there", NoNewline, EnableEscape];
/// assert_eq!(cmd.render(), "tab\there");
/// ```
#[macro_export]
macro_rules! echo {
    ($($param:expr),* $(,)?) => {{
        let params: ::std::vec::Vec<$crate::echo::Param> =
            ::std::vec![$($crate::echo::Param::from($param)),*];
        $crate::echo::Echo::new(params)
    }};
}
