//! An `echo` builtin for a small in-process command runner.
//!
//! `echo` joins its positional arguments with single spaces, can decode a fixed
//! set of backslash escapes and appends a newline unless told not to. It plugs
//! into the command framework in [`command`]: commands are created by name
//! through a [`command::CommandFactory`] and run against caller-supplied
//! streams via [`command::ExecutableCommand`].
//!
//! The main entry point is [`Interpreter`], which can execute commands by name with
//! arguments. Library users who only want the formatting can build an
//! [`echo::Echo`] directly with [`echo!`] or [`echo::Echo::new`].

mod builtin;
pub mod command;
pub mod echo;
mod interpreter;

/// Just a convenient re-export of the command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
