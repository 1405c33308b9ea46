//! Command-line argument parsing for the `ezargs` binary.
//!
//! The binary's own options are parsed with `clap`; everything after them is
//! handed untouched to the registry built from the declaration file.

use clap::Parser;
use ezargs_core::config::DEFAULT_START_INDEX;

/// Command-line arguments for the `ezargs` tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use ezargs_cli::cli_args::Args;
///
/// let args = Args::parse_from(["ezargs", "-c", "args.yml", "--", "--file", "out.h"]);
/// assert_eq!(args.full_argv("BuildInc"), ["BuildInc", "--file", "out.h"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the argument declaration YAML.
    ///
    /// If not provided, defaults to `~/.ezargs/declaration.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Print the help generated from the declaration and exit.
    #[arg(long, short = 'u', action)]
    pub usage: bool,

    /// Fail when a required argument is left without a value.
    ///
    /// Without this flag missing required arguments are only reported.
    #[arg(long, short = 's', action)]
    pub strict: bool,

    /// Index of the first token to parse. Index 0 is the application name.
    #[arg(long, default_value_t = DEFAULT_START_INDEX)]
    pub start_index: usize,

    /// Tokens to parse against the declaration, as a user would type them.
    ///
    /// # Examples
    /// ```bash
    /// ezargs -c build.yml -- v --project demo --label=nightly
    /// ```
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub argv: Vec<String>,
}

impl Args {
    /// The argv seen by the declared application: its name, then the user tokens.
    #[must_use]
    pub fn full_argv(&self, app_name: &str) -> Vec<String> {
        std::iter::once(app_name.to_string())
            .chain(self.argv.iter().cloned())
            .collect()
    }
}
