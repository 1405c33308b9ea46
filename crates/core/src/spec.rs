//! Argument specifications and their fluent configuration handle.
//!
//! An [`ArgumentSpec`] describes one positional or optional parameter: the
//! aliases it answers to, how its value is delimited, and the help metadata
//! used when rendering usage. It also carries the presence and value state
//! filled in by the parser.

use indexmap::IndexSet;

use crate::error::{Error, Result};

/// Strips every leading `-` from a token or alias.
///
/// Tokens, stored aliases and query keys all go through this function so
/// `-h`, `h` and `--help` compare equal against a `-h/--help` spec.
#[must_use]
pub fn normalize(token: &str) -> &str {
    token.trim_start_matches('-')
}

/// How an optional argument receives its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// The argument is a plain flag and never takes a value.
    #[default]
    None,
    /// The value is the following argv token (`--file out.h`).
    Space,
    /// The value follows the given character in the same token (`--label=foo`).
    Char(char),
}

impl From<char> for Delimiter {
    fn from(value: char) -> Self {
        match value {
            ' ' => Self::Space,
            '\0' => Self::None,
            c => Self::Char(c),
        }
    }
}

/// Which sequence of the registry an argument lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Help,
    Positional,
    Optional,
}

/// Stable handle to an argument owned by a registry.
///
/// Handles stay valid for the lifetime of the registry that issued them,
/// no matter how many arguments are registered afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgId {
    kind: ArgKind,
    index: usize,
}

impl ArgId {
    pub(crate) const HELP: Self = Self {
        kind: ArgKind::Help,
        index: 0,
    };

    pub(crate) fn new(kind: ArgKind, index: usize) -> Self {
        Self { kind, index }
    }

    #[must_use]
    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    /// Declaration order within the argument's own sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    aliases: Vec<String>,
    alias_set: IndexSet<String>,
    shorthand: Option<char>,
    help_text: String,
    value_name: String,
    type_hint: String,
    delimiter: Delimiter,
    required: bool,
    default: String,
    is_present: bool,
    has_value: bool,
    value: String,
}

impl ArgumentSpec {
    /// Builds a spec from a registration key such as `-f/--file`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKey`] for an empty key and [`Error::EmptyAlias`]
    /// when a `/`-separated segment is empty once dashes are stripped.
    pub(crate) fn new(key: &str, required: bool) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }

        let aliases: Vec<String> = key.split('/').map(ToString::to_string).collect();
        let mut alias_set = IndexSet::new();
        for alias in &aliases {
            let normalized = normalize(alias);
            if normalized.is_empty() {
                return Err(Error::EmptyAlias(key.to_string()));
            }
            alias_set.insert(normalized.to_string());
        }

        let mut chars = key.chars();
        let shorthand = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        Ok(Self {
            aliases,
            alias_set,
            shorthand,
            help_text: String::new(),
            value_name: String::new(),
            type_hint: String::new(),
            delimiter: Delimiter::None,
            required,
            default: String::new(),
            is_present: false,
            has_value: false,
            value: String::new(),
        })
    }

    /// Aliases exactly as registered, in registration order.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The first alias, used in diagnostics and reports.
    #[must_use]
    pub fn canonical(&self) -> &str {
        self.aliases.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn shorthand(&self) -> Option<char> {
        self.shorthand
    }

    #[must_use]
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    #[must_use]
    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    #[must_use]
    pub fn type_hint(&self) -> &str {
        &self.type_hint
    }

    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.is_present
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        self.has_value
    }

    /// Raw stored value: the parsed value, or the default when none was given.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        &self.value
    }

    /// True when `key` (already normalized) is one of this spec's aliases.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.alias_set.contains(key)
    }

    /// Label shown for positionals in the usage line and help block.
    pub(crate) fn display_token(&self) -> &str {
        if self.value_name.is_empty() {
            self.canonical()
        } else {
            &self.value_name
        }
    }

    pub(crate) fn reset(&mut self) {
        self.is_present = false;
        self.has_value = false;
        self.value.clone_from(&self.default);
    }

    pub(crate) fn mark_present(&mut self) {
        self.is_present = true;
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.has_value = true;
    }
}

/// Fluent configuration for a freshly registered argument.
///
/// Returned by the registry's `add_*` methods. The builder borrows the
/// registry only while it is being configured; keep [`SpecBuilder::id`] to
/// refer to the argument later.
pub struct SpecBuilder<'a> {
    spec: &'a mut ArgumentSpec,
    id: ArgId,
}

impl<'a> SpecBuilder<'a> {
    pub(crate) fn new(spec: &'a mut ArgumentSpec, id: ArgId) -> Self {
        Self { spec, id }
    }

    pub fn help(self, text: &str) -> Self {
        self.spec.help_text = text.to_string();
        self
    }

    /// Placeholder shown after the aliases in help, e.g. `FILE`.
    pub fn value_name(self, name: &str) -> Self {
        self.spec.value_name = name.to_string();
        self
    }

    /// Value reported when the argument is not given on the command line.
    pub fn default(self, value: &str) -> Self {
        self.spec.default = value.to_string();
        self.spec.value = value.to_string();
        self
    }

    pub fn type_hint(self, hint: &str) -> Self {
        self.spec.type_hint = hint.to_string();
        self
    }

    pub fn delimiter(self, delimiter: impl Into<Delimiter>) -> Self {
        self.spec.delimiter = delimiter.into();
        self
    }

    pub fn required(self, required: bool) -> Self {
        self.spec.required = required;
        self
    }

    #[must_use]
    pub fn id(&self) -> ArgId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_leading_dashes_only() {
        assert_eq!(normalize("--help"), "help");
        assert_eq!(normalize("-h"), "h");
        assert_eq!(normalize("h"), "h");
        assert_eq!(normalize("--dry-run"), "dry-run");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_key_split_into_aliases() {
        let spec = ArgumentSpec::new("-h/--help", false).unwrap();
        assert_eq!(spec.aliases(), ["-h", "--help"]);
        assert_eq!(spec.canonical(), "-h");
        assert!(spec.matches("h"));
        assert!(spec.matches("help"));
        assert!(!spec.matches("-h"));
        assert_eq!(spec.shorthand(), None);
    }

    #[test]
    fn test_single_character_key_enables_shorthand() {
        let spec = ArgumentSpec::new("v", false).unwrap();
        assert_eq!(spec.shorthand(), Some('v'));

        let spec = ArgumentSpec::new("-v", false).unwrap();
        assert_eq!(spec.shorthand(), None);
    }

    #[test]
    fn test_empty_keys_rejected() {
        assert!(matches!(ArgumentSpec::new("", false), Err(Error::EmptyKey)));
        assert!(matches!(
            ArgumentSpec::new("-a//--b", false),
            Err(Error::EmptyAlias(_))
        ));
        assert!(matches!(
            ArgumentSpec::new("--", false),
            Err(Error::EmptyAlias(_))
        ));
    }

    #[test]
    fn test_delimiter_from_char() {
        assert_eq!(Delimiter::from(' '), Delimiter::Space);
        assert_eq!(Delimiter::from('='), Delimiter::Char('='));
        assert_eq!(Delimiter::from('\0'), Delimiter::None);
    }

    #[test]
    fn test_builder_configures_spec() {
        let mut spec = ArgumentSpec::new("--file", false).unwrap();
        let id = ArgId::new(ArgKind::Optional, 3);
        let builder = SpecBuilder::new(&mut spec, id)
            .help("file of the build id")
            .value_name("FILE")
            .type_hint("path")
            .delimiter(' ')
            .required(true)
            .default("build.h");
        assert_eq!(builder.id(), id);

        assert_eq!(spec.help_text(), "file of the build id");
        assert_eq!(spec.value_name(), "FILE");
        assert_eq!(spec.type_hint(), "path");
        assert_eq!(spec.delimiter(), Delimiter::Space);
        assert!(spec.is_required());
        assert_eq!(spec.raw_value(), "build.h");
        assert!(!spec.has_value());
    }

    #[test]
    fn test_reset_restores_default() {
        let mut spec = ArgumentSpec::new("--label", false).unwrap();
        SpecBuilder::new(&mut spec, ArgId::HELP).default("none");
        spec.mark_present();
        spec.set_value("foo");
        assert_eq!(spec.raw_value(), "foo");

        spec.reset();
        assert!(!spec.is_present());
        assert!(!spec.has_value());
        assert_eq!(spec.raw_value(), "none");
    }
}
