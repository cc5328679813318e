use super::Echo;

/// Whether `echo` terminates its output with a newline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NewlineFlag {
    #[default]
    WithNewline,
    NoNewline,
}

/// Whether `echo` interprets backslash escapes in its arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeFlag {
    #[default]
    DisableEscape,
    EnableEscape,
}

pub use EscapeFlag::{DisableEscape, EnableEscape};
pub use NewlineFlag::{NoNewline, WithNewline};

/// An option that knows how to apply itself to an [`Echo`] under construction.
pub(crate) trait Configure {
    fn configure(self, echo: &mut Echo);
}

impl Configure for NewlineFlag {
    fn configure(self, echo: &mut Echo) {
        echo.no_newline = self == NoNewline;
    }
}

impl Configure for EscapeFlag {
    fn configure(self, echo: &mut Echo) {
        echo.escape = self == EnableEscape;
    }
}

/// One entry of the parameter list accepted by [`Echo::new`].
///
/// Text and flags may be mixed in any order; only the relative order of the
/// text entries matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Text(String),
    Newline(NewlineFlag),
    Escape(EscapeFlag),
}

impl From<&str> for Param {
    fn from(text: &str) -> Self {
        Param::Text(text.to_string())
    }
}

impl From<String> for Param {
    fn from(text: String) -> Self {
        Param::Text(text)
    }
}

impl From<NewlineFlag> for Param {
    fn from(flag: NewlineFlag) -> Self {
        Param::Newline(flag)
    }
}

impl From<EscapeFlag> for Param {
    fn from(flag: EscapeFlag) -> Self {
        Param::Escape(flag)
    }
}
