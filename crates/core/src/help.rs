//! Usage and help text rendering.
//!
//! Help is laid out in two columns: the aliases (plus value placeholder) on
//! the left and the help text on the right. Every row of both the positional
//! and optional blocks starts its help text at the same column.

use std::fmt::Write;

use itertools::Itertools;

use crate::registry::Registry;
use crate::spec::ArgumentSpec;

pub const DEFAULT_POSITIONAL_HEADER: &str = "Positional arguments";
pub const DEFAULT_OPTIONAL_HEADER: &str = "Optional arguments";

/// Spaces between the widest left column and the help text.
const COLUMN_GAP: usize = 4;

struct Row<'a> {
    left: String,
    help: &'a str,
}

pub struct HelpFormatter<'a> {
    registry: &'a Registry,
    positional_header: &'a str,
    optional_header: &'a str,
}

impl<'a> HelpFormatter<'a> {
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            positional_header: DEFAULT_POSITIONAL_HEADER,
            optional_header: DEFAULT_OPTIONAL_HEADER,
        }
    }

    #[must_use]
    pub fn with_headers(mut self, positional_header: &'a str, optional_header: &'a str) -> Self {
        self.positional_header = positional_header;
        self.optional_header = optional_header;
        self
    }

    /// One-line synopsis, e.g. ` Usage : app [--file FILE] prefix`.
    #[must_use]
    pub fn usage_line(&self) -> String {
        let mut line = format!(" Usage : {}", self.registry.app_name());
        for spec in self.registry.optionals() {
            line.push_str(" [");
            line.push_str(&spec.aliases().iter().join(":"));
            if !spec.value_name().is_empty() {
                line.push(' ');
                line.push_str(spec.value_name());
            }
            line.push(']');
        }
        for spec in self.registry.positionals() {
            line.push(' ');
            line.push_str(spec.display_token());
        }
        line
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let header = self.registry.header();
        if !header.is_empty() {
            let _ = write!(out, "{header}\n\n");
        }
        let _ = writeln!(out, "{}", self.usage_line());
        let description = self.registry.description();
        if !description.is_empty() {
            let _ = write!(out, "\n {description}\n");
        }
        out.push_str(&self.details());
        let footer = self.registry.footer();
        if !footer.is_empty() {
            let _ = write!(out, "\n{footer}\n");
        }
        out
    }

    fn details(&self) -> String {
        let positional_rows: Vec<Row<'_>> = self
            .registry
            .positionals()
            .iter()
            .map(positional_row)
            .collect();
        let optional_rows: Vec<Row<'_>> = self
            .registry
            .optionals()
            .iter()
            .map(optional_row)
            .collect();

        let width = positional_rows
            .iter()
            .chain(optional_rows.iter())
            .map(|row| row.left.chars().count())
            .max()
            .unwrap_or(0)
            + COLUMN_GAP;

        let mut out = String::new();
        write_block(&mut out, self.positional_header, &positional_rows, width);
        write_block(&mut out, self.optional_header, &optional_rows, width);
        out
    }
}

fn positional_row(spec: &ArgumentSpec) -> Row<'_> {
    Row {
        left: format!("  {}", spec.display_token()),
        help: spec.help_text(),
    }
}

fn optional_row(spec: &ArgumentSpec) -> Row<'_> {
    let mut left = format!("  {}", spec.aliases().iter().join(", "));
    if !spec.value_name().is_empty() {
        left.push(' ');
        left.push_str(spec.value_name());
    }
    Row {
        left,
        help: spec.help_text(),
    }
}

fn write_block(out: &mut String, title: &str, rows: &[Row<'_>], width: usize) {
    if rows.is_empty() {
        return;
    }
    let _ = write!(out, "\n {title} : \n");
    for row in rows {
        let _ = writeln!(out, "{:<width$}{}", row.left, row.help);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_registry() -> Registry {
        let mut registry = Registry::new("BuildInc").unwrap();
        registry
            .add_positional("prefix")
            .unwrap()
            .help("prefix of the build id");
        registry
            .add_optional("--project")
            .unwrap()
            .help("project of the build id")
            .delimiter(' ');
        registry
            .add_optional("-f/--file")
            .unwrap()
            .help("file of the build id")
            .value_name("FILE")
            .delimiter(' ');
        registry
    }

    #[test]
    fn test_usage_line() {
        let registry = build_registry();
        assert_eq!(
            HelpFormatter::new(&registry).usage_line(),
            " Usage : BuildInc [--project] [-f:--file FILE] prefix"
        );
    }

    #[test]
    fn test_render_aligns_help_column() {
        let registry = build_registry();
        let expected = concat!(
            " Usage : BuildInc [--project] [-f:--file FILE] prefix\n",
            "\n",
            " Positional arguments : \n",
            "  prefix             prefix of the build id\n",
            "\n",
            " Optional arguments : \n",
            "  --project          project of the build id\n",
            "  -f, --file FILE    file of the build id\n",
        );
        assert_eq!(HelpFormatter::new(&registry).render(), expected);
    }

    #[test]
    fn test_render_header_description_footer() {
        let mut registry = Registry::new("tool").unwrap();
        registry
            .add_header("TOOL v1")
            .add_description("Does things")
            .add_footer("See the manual");
        registry.add_optional("-q").unwrap().help("quiet");

        let help = HelpFormatter::new(&registry)
            .with_headers("Inputs", "Flags")
            .render();
        let expected = concat!(
            "TOOL v1\n",
            "\n",
            " Usage : tool [-q]\n",
            "\n",
            " Does things\n",
            "\n",
            " Flags : \n",
            "  -q    quiet\n",
            "\n",
            "See the manual\n",
        );
        assert_eq!(help, expected);
    }

    #[test]
    fn test_positional_uses_value_name_when_set() {
        let mut registry = Registry::new("tool").unwrap();
        registry.add_positional("input").unwrap().value_name("INPUT");
        let help = HelpFormatter::new(&registry).render();
        assert!(help.starts_with(" Usage : tool INPUT\n"));
        assert!(help.contains("\n  INPUT "));
        assert!(!help.contains("input"));
    }

    #[test]
    fn test_help_argument_not_listed() {
        let mut registry = Registry::new("BuildInc").unwrap();
        registry.add_positional("prefix").unwrap().help("prefix");
        registry.add_optional("--project").unwrap().help("project");
        registry.add_optional("--file").unwrap().help("file");

        let expected = concat!(
            " Usage : BuildInc [--project] [--file] prefix\n",
            "\n",
            " Positional arguments : \n",
            "  prefix       prefix\n",
            "\n",
            " Optional arguments : \n",
            "  --project    project\n",
            "  --file       file\n",
        );
        assert_eq!(HelpFormatter::new(&registry).render(), expected);
        assert!(registry.is_present("help").is_ok());
    }

    #[test]
    fn test_help_only_registry_renders_bare_usage() {
        let registry = Registry::new("tool").unwrap();
        assert_eq!(HelpFormatter::new(&registry).render(), " Usage : tool\n");
    }
}
