use anyhow::{Context, Result};
use tracing::debug;

use textsink::write_line;

use crate::args::{GlobalArgs, PrintlnArgs};
use crate::util::finish_writer;

pub fn run(_global_args: &GlobalArgs, args: &PrintlnArgs) -> Result<()> {
    let values = args.value_args.values();
    for v in values.iter() {
        debug!("{} value: {v:?}", v.kind());
    }

    let mut writer = args
        .output_args
        .get_writer()
        .context("Failed to open output destination for writing")?;
    write_line(&mut writer, &values);
    finish_writer(&mut writer);
    Ok(())
}
