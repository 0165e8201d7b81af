//! Best-effort text output.
//!
//! Two small units live here:
//!
//! - the error reporter ([`report`], [`report_to`]), which writes `ERROR: <message>` for a failed
//!   [`Outcome`] and nothing for a successful one;
//! - the formatted writer ([`write_formatted`], [`write_line`], and the [`fprint!`] and
//!   [`fprintln!`] macros), which writes text to any [`std::io::Write`] destination.
//!
//! Write failures from the destination are never surfaced to the caller.

pub mod error;
pub mod outcome;
pub mod reporter;
pub mod template;
pub mod value;
pub mod writer;

#[cfg(test)]
mod testing;

pub use error::TemplateError;
pub use outcome::{Failure, Outcome};
pub use reporter::{report, report_to};
pub use template::Template;
pub use value::Value;
pub use writer::{write_args, write_formatted, write_line};
