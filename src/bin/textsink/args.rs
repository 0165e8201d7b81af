use clap::{crate_description, ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use textsink::Value;

// -----------------------------------------------------------------------------
// command-line args
// -----------------------------------------------------------------------------
#[derive(Parser, Debug)]
#[command(
    name("textsink"),
    bin_name("textsink"),

    version,  // retrieved from Cargo.toml `version`
    about,    // retrieved from Cargo.toml `description`

    long_about = concat!(
        crate_description!(),
        "\n\n",
        "Output is best-effort: failures writing to stdout, stderr, or an output file are ignored.",
    ),
)]
/// Write formatted text and report errors, best-effort
pub struct CommandLineArgs {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let mut s = Self::parse();

        // If `NO_COLOR` is set in the environment, disable colored output
        //
        // https://no-color.org/
        if std::env::var("NO_COLOR").is_ok() {
            s.global_args.color = Mode::Never
        }

        s
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a template with arguments substituted
    ///
    /// No newline is added after the output.
    ///
    /// A placeholder with no matching argument is written as `{!MISSING}`, and arguments beyond
    /// those the template uses are appended as ` {!EXTRA a, b}`, unless `--strict` is given.
    #[command(display_order = 1)]
    Printf(PrintfArgs),

    /// Write arguments separated by spaces, followed by a newline
    #[command(display_order = 2)]
    Println(PrintlnArgs),

    /// Report an error message to stderr
    ///
    /// If MESSAGE is given, `ERROR: MESSAGE` is written to stderr with no trailing newline.
    /// Otherwise nothing is written.
    ///
    /// The exit status is 0 in both cases.
    #[command(display_order = 3)]
    Report(ReportArgs),
}

// -----------------------------------------------------------------------------
// global options
// -----------------------------------------------------------------------------
#[derive(Args, Debug)]
#[command(next_help_heading = "Global Options")]
pub struct GlobalArgs {
    /// Enable verbose output
    ///
    /// This can be repeated up to 3 times to enable successively more output.
    /// Log messages are written to stderr.
    #[arg(global=true, long, short, action=ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error log messages
    ///
    /// This overrides any `-v`/`--verbose` options.
    #[arg(global=true, long, short)]
    pub quiet: bool,

    /// Enable or disable colored log output
    ///
    /// When this is "auto", colors are enabled when stderr is a tty.
    ///
    /// If the `NO_COLOR` environment variable is set, it takes precedence and is equivalent to `--color=never`.
    #[arg(global=true, long, default_value_t=Mode::Auto, value_name="MODE")]
    pub color: Mode,
}

impl GlobalArgs {
    pub fn use_color<T: IsTerminal>(&self, out: T) -> bool {
        match self.color {
            Mode::Never => false,
            Mode::Always => true,
            Mode::Auto => out.is_terminal(),
        }
    }
}

/// A generic auto/never/always mode value
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Mode {
    Auto,
    Never,
    Always,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Auto => "auto",
            Mode::Never => "never",
            Mode::Always => "always",
        };
        write!(f, "{s}")
    }
}

// -----------------------------------------------------------------------------
// `printf` command
// -----------------------------------------------------------------------------
#[derive(Args, Debug)]
pub struct PrintfArgs {
    /// The template to fill in
    ///
    /// `{}` takes the next argument and `{N}` takes the argument at index N, counting from 0.
    /// Write `{{` and `}}` for literal braces.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    #[command(flatten)]
    pub value_args: ValueArgs,

    /// Fail unless the number of arguments matches the template exactly
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub output_args: OutputArgs,
}

// -----------------------------------------------------------------------------
// `println` command
// -----------------------------------------------------------------------------
#[derive(Args, Debug)]
pub struct PrintlnArgs {
    #[command(flatten)]
    pub value_args: ValueArgs,

    #[command(flatten)]
    pub output_args: OutputArgs,
}

// -----------------------------------------------------------------------------
// `report` command
// -----------------------------------------------------------------------------
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// The error message to report
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,
}

// -----------------------------------------------------------------------------
// value options
// -----------------------------------------------------------------------------
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Values to write
    ///
    /// Use `--` before values that begin with a hyphen.
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// Interpret values that look like integers, floats, or booleans as such
    ///
    /// For example, `1.50` is written as `1.5` and `007` as `7`.
    #[arg(long)]
    pub typed: bool,
}

impl ValueArgs {
    pub fn values(&self) -> Vec<Value<'_>> {
        self.values
            .iter()
            .map(|v| if self.typed { Value::infer(v) } else { Value::from(v) })
            .collect()
    }
}

// -----------------------------------------------------------------------------
// output options
// -----------------------------------------------------------------------------
#[derive(Args, Debug)]
#[command(next_help_heading = "Output Options")]
pub struct OutputArgs {
    /// Write output to the specified path
    ///
    /// If this argument is not provided, stdout will be used.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Get a writer for the specified output destination.
    pub fn get_writer(&self) -> std::io::Result<Box<dyn std::io::Write>> {
        crate::util::get_writer_for_file_or_stdout(self.output.as_ref())
    }
}
