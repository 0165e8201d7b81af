use anyhow::{Context, Result};
use tracing::debug;

use textsink::{write_formatted, Template};

use crate::args::{GlobalArgs, PrintfArgs};
use crate::util::finish_writer;

pub fn run(_global_args: &GlobalArgs, args: &PrintfArgs) -> Result<()> {
    let template = Template::parse(&args.template)
        .with_context(|| format!("Failed to parse template {:?}", args.template))?;
    let values = args.value_args.values();
    if args.strict {
        template
            .check_arity(values.len())
            .context("Arguments do not match the template")?;
    }
    debug!(
        "Filling template with {} placeholder slots from {} values",
        template.arity(),
        values.len()
    );

    let mut writer = args
        .output_args
        .get_writer()
        .context("Failed to open output destination for writing")?;
    write_formatted(&mut writer, &template, &values);
    finish_writer(&mut writer);
    Ok(())
}
