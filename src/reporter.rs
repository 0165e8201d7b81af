use std::io::Write;

use crate::outcome::Outcome;
use crate::writer::write_args;

/// The text written ahead of every failure message.
pub const PREFIX: &str = "ERROR: ";

/// Report a failed outcome to stderr as `ERROR: <message>`, with no trailing newline.
///
/// A successful outcome writes nothing. A failure to write to stderr is ignored: reporting a
/// problem never becomes a problem for the caller.
///
/// The message is the failure's alternate `Display` form, so error chains such as those built
/// with `anyhow::Context` are rendered on one line as `outer: inner`.
pub fn report<O: Outcome>(outcome: O) {
    if !outcome.is_failure() {
        return;
    }
    let mut stderr = std::io::stderr().lock();
    report_to(&mut stderr, outcome);
}

/// Report a failed outcome to the given destination, exactly as [`report`] does for stderr.
pub fn report_to<W: Write + ?Sized, O: Outcome>(dest: &mut W, outcome: O) {
    if let Some(failure) = outcome.failure() {
        write_args(dest, format_args!("{PREFIX}{failure:#}"));
    }
}
