use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Get a buffered writer for the file at the specified output destination, or stdout if not specified.
pub fn get_writer_for_file_or_stdout<P: AsRef<Path>>(
    path: Option<P>,
) -> std::io::Result<Box<dyn Write>> {
    match path.as_ref() {
        None => Ok(Box::new(BufWriter::new(stdout()))),
        Some(p) => {
            let f = File::create(p)?;
            Ok(Box::new(BufWriter::new(f)))
        }
    }
}

/// Flush a buffered writer, ignoring failures like every other write to it.
pub fn finish_writer<W: Write + ?Sized>(writer: &mut W) {
    // Best-effort output: the flush result is deliberately discarded.
    let _ = writer.flush().map_err(|e| debug!("Discarded failed flush: {e}"));
}
