//! ezargs CLI Library
//!
//! This crate provides the `ezargs` command-line tool, a driver around
//! [`ezargs_core`]. It loads an argument declaration from YAML, builds a
//! registry from it, parses the tokens given after `--` and prints what the
//! declared application would see.
//!
//! # Architecture
//!
//! - [`cli_args`]: the tool's own command-line options
//! - [`report`]: rendering of presence and values after a parse
//!
//! # Examples
//!
//! ```bash
//! # Show the help generated from a declaration
//! ezargs -c build.yml --usage
//!
//! # Parse tokens as the declared application would
//! ezargs -c build.yml -- v --project demo --label=nightly
//!
//! # Fail if required arguments are missing
//! ezargs -c build.yml --strict -- --project demo
//! ```

pub mod cli_args;
pub mod report;
