//! Colour palette for the human-readable output formats.

use std::env;
use std::ffi::OsStr;

/// ANSI sequences for each role in the pretty view, or empty strings when
/// colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub reset: &'static str,
    pub heading: &'static str,
    pub vertex: &'static str,
    pub cost: &'static str,
    pub muted: &'static str,
    pub warning: &'static str,
}

impl Palette {
    pub const ANSI: Palette = Palette {
        reset: "\x1b[0m",
        heading: "\x1b[1;36m",
        vertex: "\x1b[1;97m",
        cost: "\x1b[32m",
        muted: "\x1b[90m",
        warning: "\x1b[38;5;208m",
    };

    pub const NONE: Palette = Palette {
        reset: "",
        heading: "",
        vertex: "",
        cost: "",
        muted: "",
        warning: "",
    };

    /// Palette for the current process, honouring `NO_COLOR` and `TERM=dumb`.
    pub fn from_env() -> Self {
        let no_color = env::var_os("NO_COLOR");
        let term = env::var_os("TERM");
        Self::resolve(no_color.as_deref(), term.as_deref())
    }

    /// Pick a palette from the raw `NO_COLOR` and `TERM` values.
    ///
    /// A non-empty `NO_COLOR` disables colour (<https://no-color.org>).
    pub fn resolve(no_color: Option<&OsStr>, term: Option<&OsStr>) -> Self {
        let disabled = no_color.is_some_and(|value| !value.is_empty())
            || term.is_some_and(|value| value.eq_ignore_ascii_case("dumb"));
        if disabled {
            Self::NONE
        } else {
            Self::ANSI
        }
    }
}

/// Render `value` with a comma between each group of three digits.
///
/// ```
/// # use gridroute_cli::terminal::group_thousands;
/// assert_eq!(group_thousands(400), "400");
/// assert_eq!(group_thousands(1800), "1,800");
/// ```
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
