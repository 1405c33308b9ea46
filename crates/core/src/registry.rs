//! The argument registry: declaration, lookup and typed access.
//!
//! A [`Registry`] owns the ordered positional and optional specs plus the
//! implicit `-h/--help` spec. Arguments are declared up front with
//! [`Registry::add_positional`] and [`Registry::add_optional`], filled in by
//! a single call to `parse`, then read back by alias.
//!
//! ```
//! use ezargs_core::Registry;
//!
//! let mut args = Registry::new("BuildInc")?;
//! args.add_positional("prefix")?.help("prefix of the build id");
//! args.add_optional("--file")?.help("file of the build id").delimiter(' ');
//!
//! args.parse(&["BuildInc", "v", "--file", "build.h"], 1)?;
//! assert_eq!(args.get_value::<String>("prefix")?, "v");
//! assert_eq!(args.get_value::<String>("file")?, "build.h");
//! # Ok::<(), ezargs_core::error::Error>(())
//! ```

use std::io::{self, Write};

use crate::convert::FromArgValue;
use crate::error::{Error, Result};
use crate::help::HelpFormatter;
use crate::spec::{normalize, ArgId, ArgKind, ArgumentSpec, SpecBuilder};

/// Registration key of the implicit help argument.
pub const HELP_KEY: &str = "-h/--help";
const HELP_TEXT: &str = "Show the usage";

#[derive(Debug, Clone)]
pub struct Registry {
    app_name: String,
    header: String,
    description: String,
    footer: String,
    pub(crate) help: ArgumentSpec,
    pub(crate) positionals: Vec<ArgumentSpec>,
    pub(crate) optionals: Vec<ArgumentSpec>,
}

impl Registry {
    /// Creates a registry for `app_name` with the help argument registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAppName`] if `app_name` is empty.
    pub fn new(app_name: &str) -> Result<Self> {
        if app_name.is_empty() {
            return Err(Error::EmptyAppName);
        }

        let mut help = ArgumentSpec::new(HELP_KEY, false)?;
        SpecBuilder::new(&mut help, ArgId::HELP).help(HELP_TEXT);

        Ok(Self {
            app_name: app_name.to_string(),
            header: String::new(),
            description: String::new(),
            footer: String::new(),
            help,
            positionals: Vec::new(),
            optionals: Vec::new(),
        })
    }

    pub fn add_header(&mut self, header: &str) -> &mut Self {
        self.header = header.to_string();
        self
    }

    pub fn add_description(&mut self, description: &str) -> &mut Self {
        self.description = description.to_string();
        self
    }

    pub fn add_footer(&mut self, footer: &str) -> &mut Self {
        self.footer = footer.to_string();
        self
    }

    /// Declares the next positional argument. Positionals are required by default.
    ///
    /// # Errors
    ///
    /// Returns a config error if `key` is empty or contains an empty alias.
    pub fn add_positional(&mut self, key: &str) -> Result<SpecBuilder<'_>> {
        let spec = ArgumentSpec::new(key, true)?;
        let index = self.positionals.len();
        self.positionals.push(spec);
        Ok(SpecBuilder::new(
            &mut self.positionals[index],
            ArgId::new(ArgKind::Positional, index),
        ))
    }

    /// Declares an optional argument such as `-f/--file`.
    ///
    /// Declaration order is also match priority and help order.
    ///
    /// # Errors
    ///
    /// Returns a config error if `key` is empty or contains an empty alias.
    pub fn add_optional(&mut self, key: &str) -> Result<SpecBuilder<'_>> {
        let spec = ArgumentSpec::new(key, false)?;
        let index = self.optionals.len();
        self.optionals.push(spec);
        Ok(SpecBuilder::new(
            &mut self.optionals[index],
            ArgId::new(ArgKind::Optional, index),
        ))
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn footer(&self) -> &str {
        &self.footer
    }

    #[must_use]
    pub fn positionals(&self) -> &[ArgumentSpec] {
        &self.positionals
    }

    #[must_use]
    pub fn optionals(&self) -> &[ArgumentSpec] {
        &self.optionals
    }

    #[must_use]
    pub fn help_spec(&self) -> &ArgumentSpec {
        &self.help
    }

    /// The help spec followed by the declared optionals.
    pub fn optional_specs(&self) -> impl Iterator<Item = &ArgumentSpec> {
        std::iter::once(&self.help).chain(self.optionals.iter())
    }

    #[must_use]
    pub fn spec(&self, id: ArgId) -> Option<&ArgumentSpec> {
        match id.kind() {
            ArgKind::Help => Some(&self.help),
            ArgKind::Positional => self.positionals.get(id.index()),
            ArgKind::Optional => self.optionals.get(id.index()),
        }
    }

    /// Finds the spec answering to `alias`, searching positionals first.
    #[must_use]
    pub fn find(&self, alias: &str) -> Option<&ArgumentSpec> {
        let key = normalize(alias);
        self.positionals
            .iter()
            .chain(self.optionals.iter())
            .chain(std::iter::once(&self.help))
            .find(|spec| spec.matches(key))
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownArgument`] if no spec answers to `alias`.
    pub fn lookup(&self, alias: &str) -> Result<&ArgumentSpec> {
        self.find(alias)
            .ok_or_else(|| Error::UnknownArgument(alias.to_string()))
    }

    pub(crate) fn is_known(&self, token: &str) -> bool {
        self.find(token).is_some()
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownArgument`] if no spec answers to `alias`.
    pub fn is_present(&self, alias: &str) -> Result<bool> {
        Ok(self.lookup(alias)?.is_present())
    }

    /// Like [`Registry::is_present`], but an unknown alias reads as `false`.
    #[must_use]
    pub fn is_present_or_false(&self, alias: &str) -> bool {
        self.find(alias).is_some_and(ArgumentSpec::is_present)
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownArgument`] if no spec answers to `alias`.
    pub fn has_value(&self, alias: &str) -> Result<bool> {
        Ok(self.lookup(alias)?.has_value())
    }

    /// Like [`Registry::has_value`], but an unknown alias reads as `false`.
    #[must_use]
    pub fn has_value_or_false(&self, alias: &str) -> bool {
        self.find(alias).is_some_and(ArgumentSpec::has_value)
    }

    /// Reads the stored value of `alias` as `T`.
    ///
    /// An empty stored value yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownArgument`] for an unknown alias and a value
    /// error when the stored text does not convert to `T`.
    pub fn get_value<T: FromArgValue>(&self, alias: &str) -> Result<T> {
        convert_value(self.lookup(alias)?)
    }

    /// Like [`Registry::get_value`], but an unknown alias yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns a value error when the stored text does not convert to `T`.
    pub fn get_value_or_default<T: FromArgValue>(&self, alias: &str) -> Result<T> {
        match self.find(alias) {
            Some(spec) => convert_value(spec),
            None => Ok(T::default()),
        }
    }

    /// Canonical aliases of required arguments that ended up without a value.
    ///
    /// Parsing never enforces `required`; callers decide what to do with this.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&str> {
        self.positionals
            .iter()
            .chain(self.optionals.iter())
            .filter(|spec| {
                spec.is_required() && !spec.has_value() && spec.default_value().is_empty()
            })
            .map(ArgumentSpec::canonical)
            .collect()
    }

    /// Opt-in enforcement of `required` after parsing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRequired`] naming every argument reported by
    /// [`Registry::missing_required`].
    pub fn ensure_required(&self) -> Result<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            return Ok(());
        }
        Err(Error::MissingRequired(
            missing.into_iter().map(ToString::to_string).collect(),
        ))
    }

    #[must_use]
    pub fn help(&self) -> String {
        HelpFormatter::new(self).render()
    }

    #[must_use]
    pub fn help_with_headers(&self, positional_header: &str, optional_header: &str) -> String {
        HelpFormatter::new(self)
            .with_headers(positional_header, optional_header)
            .render()
    }

    /// Writes the help text followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stdio`] if writing fails.
    pub fn write_help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.help())?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`Error::Stdio`] if standard output cannot be written.
    pub fn print_help(&self) -> Result<()> {
        self.write_help(&mut io::stdout().lock())
    }

    pub(crate) fn reset(&mut self) {
        self.help.reset();
        for spec in self.positionals.iter_mut().chain(self.optionals.iter_mut()) {
            spec.reset();
        }
    }
}

fn convert_value<T: FromArgValue>(spec: &ArgumentSpec) -> Result<T> {
    let raw = spec.raw_value();
    if raw.is_empty() {
        return Ok(T::default());
    }
    T::from_arg_value(spec.canonical(), raw)
}
