//! Best-effort formatted output to any `std::io::Write` destination.
//!
//! None of these functions report failures: a destination that refuses a write is logged at
//! `debug` level and otherwise ignored.

use std::fmt::{self, Display};
use std::io::Write;
use tracing::debug;

use crate::template::Template;
use crate::value::Value;

/// Write `args` substituted into `template` to `dest`, with no trailing line terminator.
pub fn write_formatted<W: Write + ?Sized>(dest: &mut W, template: &Template, args: &[Value<'_>]) {
    write_args(dest, format_args!("{}", template.apply(args)));
}

/// Write the textual representations of `args` to `dest`, separated by single spaces and followed
/// by a newline.
pub fn write_line<W: Write + ?Sized>(dest: &mut W, args: &[Value<'_>]) {
    write_args(dest, format_args!("{}\n", Joined(args)));
}

/// Write already-formatted arguments to `dest`.
///
/// The text is rendered before anything is written. If a `Display` implementation among the
/// arguments fails, whatever was rendered up to that point is written.
pub fn write_args<W: Write + ?Sized>(dest: &mut W, args: fmt::Arguments<'_>) {
    let mut text = String::new();
    if fmt::Write::write_fmt(&mut text, args).is_err() {
        debug!("Formatting failed after {} bytes; writing partial output", text.len());
    }
    // Best-effort output: the write result is deliberately discarded.
    let _ = dest
        .write_all(text.as_bytes())
        .map_err(|e| debug!("Discarded failed write: {e}"));
}

struct Joined<'a>(&'a [Value<'a>]);

impl Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, value) in self.0.iter().enumerate() {
            if n > 0 {
                f.write_str(" ")?;
            }
            value.fmt(f)?;
        }
        Ok(())
    }
}

/// Write formatted text to a destination, ignoring write failures.
///
/// The first argument is a `&mut` reference to a `std::io::Write`; the rest are exactly as for
/// `format!`.
///
/// ```
/// let mut out = Vec::new();
/// textsink::fprint!(&mut out, "{} of {}", 3, 4);
/// assert_eq!(out, b"3 of 4");
/// ```
#[macro_export]
macro_rules! fprint {
    ($dst:expr, $($arg:tt)+) => {
        $crate::writer::write_args($dst, ::std::format_args!($($arg)+))
    };
}

/// Write values separated by spaces and followed by a newline, ignoring write failures.
///
/// Each value is converted with `Value::from`.
///
/// ```
/// let mut out = Vec::new();
/// textsink::fprintln!(&mut out, "x", 42);
/// assert_eq!(out, b"x 42\n");
/// ```
#[macro_export]
macro_rules! fprintln {
    ($dst:expr $(,)?) => {
        $crate::writer::write_line($dst, &[])
    };
    ($dst:expr, $($arg:expr),+ $(,)?) => {
        $crate::writer::write_line($dst, &[$($crate::value::Value::from($arg)),+])
    };
}
