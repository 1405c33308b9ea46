//! ezargs Core Library
//!
//! This crate provides a small command-line argument declaration and parsing
//! library. Callers declare positional and optional arguments, parse a raw
//! argument vector in a single pass, then query presence and typed values by
//! alias. Help text with aligned columns is generated from the declarations.
//!
//! # Key Features
//!
//! - **Aliases**: `-f/--file` style keys, matched with leading dashes ignored
//! - **Value Delimiters**: space separated (`--file out.h`) or same-token
//!   (`--label=foo`) values
//! - **Shorthand Clusters**: single-character flags combined as `-abc`
//! - **Typed Access**: values are stored raw and converted on read
//! - **Help Rendering**: usage line plus aligned positional and optional blocks
//! - **Declaration Files**: registries described in YAML
//!
//! # Examples
//!
//! ```
//! use ezargs_core::Registry;
//!
//! let mut args = Registry::new("BuildInc")?;
//! args.add_positional("prefix")?.help("prefix of the build id");
//! args
//!     .add_optional("--project")?
//!     .help("project of the build id")
//!     .delimiter(' ');
//! args.add_optional("v/verbose")?.help("chatty output");
//!
//! args.parse(&["BuildInc", "rc", "--project", "demo"], 1)?;
//! assert_eq!(args.get_value::<String>("project")?, "demo");
//! assert_eq!(args.get_value::<String>("prefix")?, "rc");
//! # Ok::<(), ezargs_core::error::Error>(())
//! ```

pub mod config;
pub mod convert;
pub mod declaration;
pub mod error;
pub mod file_handling;
pub mod help;
pub mod parser;
pub mod registry;
pub mod spec;

pub use convert::FromArgValue;
pub use parser::ParseOutcome;
pub use registry::Registry;
pub use spec::{ArgId, ArgKind, ArgumentSpec, Delimiter};
