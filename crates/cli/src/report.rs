//! Human-readable summary of a parsed registry.

use ezargs_core::{ArgumentSpec, ParseOutcome, Registry};
use itertools::Itertools;

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub alias: String,
    pub kind: &'static str,
    pub present: bool,
    pub value: Option<String>,
    pub is_default: bool,
}

impl Entry {
    fn from_spec(spec: &ArgumentSpec, kind: &'static str) -> Self {
        let (value, is_default) = if spec.has_value() {
            (Some(spec.raw_value().to_string()), false)
        } else if spec.raw_value().is_empty() {
            (None, false)
        } else {
            (Some(spec.raw_value().to_string()), true)
        };

        Self {
            alias: spec.canonical().to_string(),
            kind,
            present: spec.is_present(),
            value,
            is_default,
        }
    }

    fn value_column(&self) -> String {
        match (&self.value, self.is_default) {
            (Some(value), false) => format!("\"{value}\""),
            (Some(value), true) => format!("\"{value}\" (default)"),
            (None, _) => "-".to_string(),
        }
    }
}

/// Collects positionals first, then the declared optionals, in declaration order.
#[must_use]
pub fn collect_entries(registry: &Registry) -> Vec<Entry> {
    registry
        .positionals()
        .iter()
        .map(|spec| Entry::from_spec(spec, "positional"))
        .chain(
            registry
                .optionals()
                .iter()
                .map(|spec| Entry::from_spec(spec, "optional")),
        )
        .collect()
}

fn outcome_label(outcome: ParseOutcome) -> &'static str {
    match outcome {
        ParseOutcome::Completed => "completed",
        ParseOutcome::HelpShown => "help requested",
        ParseOutcome::UsageShown => "usage shown",
    }
}

/// Renders the entries as aligned columns under a one-line title.
#[must_use]
pub fn render(registry: &Registry, outcome: ParseOutcome) -> String {
    let entries = collect_entries(registry);
    let width = entries
        .iter()
        .map(|entry| entry.alias.chars().count())
        .max()
        .unwrap_or(0);

    let rows = entries
        .iter()
        .map(|entry| {
            format!(
                "  {:<width$}  {:<10}  {:<7}  {}",
                entry.alias,
                entry.kind,
                if entry.present { "present" } else { "absent" },
                entry.value_column(),
            )
        })
        .join("\n");

    let mut out = format!("{} ({})\n", registry.app_name(), outcome_label(outcome));
    if !rows.is_empty() {
        out.push_str(&rows);
        out.push('\n');
    }
    out
}
