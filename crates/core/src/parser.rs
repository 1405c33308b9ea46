//! Single-pass argv tokenizer.
//!
//! Each token is normalized (leading dashes stripped) and then, in order:
//!
//! 1. checked against the help aliases, which stops parsing;
//! 2. offered to every optional spec in declaration order, which may split
//!    `key<delim>value` tokens, match clustered shorthand characters or
//!    match a full alias;
//! 3. assigned to the next unfilled positional if no optional claimed it.
//!
//! A value is never taken from a token that is itself a known alias, so
//! `--out --other` leaves `--out` present but without a value.

use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::spec::{normalize, Delimiter};

/// How a successful parse ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every token was processed.
    Completed,
    /// A help alias was found; help was written and later tokens ignored.
    HelpShown,
    /// No user tokens were given while positionals are declared, so help
    /// was written as a usage hint.
    UsageShown,
}

/// An optional spec claimed by the current token.
struct TokenMatch {
    index: usize,
    wants_value: bool,
    inline_value: Option<String>,
}

impl Registry {
    /// Parses `argv` starting at `start`, writing any help to stdout.
    ///
    /// `start` is usually 1 to skip the program name. State from a previous
    /// parse is cleared first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValue`] or [`Error::MoreThanOneValue`] when a token
    /// carrying a custom delimiter does not split into exactly one key and
    /// one value, and [`Error::Stdio`] if help cannot be written.
    pub fn parse<S: AsRef<str>>(&mut self, argv: &[S], start: usize) -> Result<ParseOutcome> {
        self.parse_to(argv, start, &mut io::stdout().lock())
    }

    /// Same as [`Registry::parse`], writing any help to `out`.
    ///
    /// # Errors
    ///
    /// See [`Registry::parse`].
    pub fn parse_to<S: AsRef<str>, W: Write>(
        &mut self,
        argv: &[S],
        start: usize,
        out: &mut W,
    ) -> Result<ParseOutcome> {
        self.reset();

        let tokens: Vec<&str> = argv.iter().map(AsRef::as_ref).collect();
        let mut positional_index = 0;
        let mut idx = start;

        while idx < tokens.len() {
            let raw = tokens[idx];
            let key = normalize(raw);

            if self.help.matches(key) {
                self.help.mark_present();
                self.write_help(out)?;
                return Ok(ParseOutcome::HelpShown);
            }

            let next = tokens.get(idx + 1).copied();
            let matches = self.match_optionals(raw, key)?;
            if matches.is_empty() {
                // Extra tokens past the declared positionals are dropped.
                if let Some(positional) = self.positionals.get_mut(positional_index) {
                    positional.mark_present();
                    positional.set_value(raw);
                    positional_index += 1;
                }
            } else if self.apply_matches(matches, next) {
                idx += 1;
            }

            idx += 1;
        }

        if tokens.len() == start && !self.positionals.is_empty() {
            self.write_help(out)?;
            return Ok(ParseOutcome::UsageShown);
        }

        Ok(ParseOutcome::Completed)
    }

    fn match_optionals(&self, raw: &str, key: &str) -> Result<Vec<TokenMatch>> {
        let mut matches = Vec::new();

        for (index, spec) in self.optionals.iter().enumerate() {
            let (compare, inline) = match spec.delimiter() {
                Delimiter::Char(delimiter) if key.contains(delimiter) => {
                    let (left, right) = split_inline(raw, key, delimiter)?;
                    (left, Some(right))
                }
                _ => (key, None),
            };

            let wants_value = match spec.shorthand() {
                Some(c) if compare.contains(c) => compare.ends_with(c),
                Some(_) => continue,
                None if spec.matches(compare) => true,
                None => continue,
            };

            let inline_value = inline
                .filter(|value| !self.is_known(value))
                .map(ToString::to_string);

            matches.push(TokenMatch {
                index,
                wants_value,
                inline_value,
            });
        }

        Ok(matches)
    }

    /// Marks matched specs present and stores their values.
    ///
    /// Returns true when the following token was consumed as a value.
    fn apply_matches(&mut self, matches: Vec<TokenMatch>, next: Option<&str>) -> bool {
        let next_value = next.filter(|token| !self.is_known(token));
        let mut consumed_next = false;

        for token_match in matches {
            let spec = &mut self.optionals[token_match.index];
            spec.mark_present();
            if !token_match.wants_value {
                continue;
            }

            match spec.delimiter() {
                Delimiter::Space => {
                    if let (false, Some(value)) = (consumed_next, next_value) {
                        spec.set_value(value);
                        consumed_next = true;
                    }
                }
                Delimiter::Char(_) => {
                    if let Some(value) = token_match.inline_value {
                        spec.set_value(&value);
                    }
                }
                Delimiter::None => {}
            }
        }

        consumed_next
    }
}

/// Splits `key` on `delimiter` into exactly one key and one value.
///
/// Empty parts are ignored, so `label=` and `=foo` have no value.
fn split_inline<'k>(raw: &str, key: &'k str, delimiter: char) -> Result<(&'k str, &'k str)> {
    let mut parts = key.split(delimiter).filter(|part| !part.is_empty());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Ok((left, right)),
        (_, Some(_), Some(_)) => Err(Error::MoreThanOneValue(raw.to_string())),
        _ => Err(Error::NoValue(raw.to_string())),
    }
}
