use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::Registry;
use crate::spec::SpecBuilder;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentDefinition {
    pub key: String,
    pub help: Option<String>,
    pub value_name: Option<String>,
    pub delimiter: Option<char>,
    pub default: Option<String>,
    #[serde(rename = "type")]
    pub type_hint: Option<String>,
    pub required: Option<bool>,
}

impl ArgumentDefinition {
    fn configure(&self, mut builder: SpecBuilder<'_>) {
        if let Some(help) = &self.help {
            builder = builder.help(help);
        }
        if let Some(value_name) = &self.value_name {
            builder = builder.value_name(value_name);
        }
        if let Some(delimiter) = self.delimiter {
            builder = builder.delimiter(delimiter);
        }
        if let Some(default) = &self.default {
            builder = builder.default(default);
        }
        if let Some(type_hint) = &self.type_hint {
            builder = builder.type_hint(type_hint);
        }
        if let Some(required) = self.required {
            builder.required(required);
        }
    }
}

impl Display for ArgumentDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.key)?;

        if let Some(help) = &self.help {
            write!(formatter, " ({help})")?;
        }

        Ok(())
    }
}

/// A registry described as data, typically loaded from YAML.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    pub app: String,
    pub header: Option<String>,
    pub description: Option<String>,
    pub footer: Option<String>,
    #[serde(default)]
    pub positionals: Vec<ArgumentDefinition>,
    #[serde(default)]
    pub optionals: Vec<ArgumentDefinition>,
}

impl Declaration {
    /// Builds a registry by replaying every definition through the builder API.
    ///
    /// # Errors
    ///
    /// Returns the same config errors as direct registration: an empty app
    /// name, or an empty or malformed argument key.
    pub fn build_registry(&self) -> Result<Registry> {
        let mut registry = Registry::new(&self.app)?;

        if let Some(header) = &self.header {
            registry.add_header(header);
        }
        if let Some(description) = &self.description {
            registry.add_description(description);
        }
        if let Some(footer) = &self.footer {
            registry.add_footer(footer);
        }

        for definition in &self.positionals {
            definition.configure(registry.add_positional(&definition.key)?);
        }
        for definition in &self.optionals {
            definition.configure(registry.add_optional(&definition.key)?);
        }

        Ok(registry)
    }
}

impl Display for Declaration {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} ({} positional, {} optional)",
            self.app,
            self.positionals.len(),
            self.optionals.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::spec::Delimiter;

    fn definition(key: &str) -> ArgumentDefinition {
        ArgumentDefinition {
            key: key.to_string(),
            ..ArgumentDefinition::default()
        }
    }

    #[test]
    fn test_build_registry_replays_builders() {
        let declaration = Declaration {
            app: "BuildInc".to_string(),
            description: Some("Bumps build numbers".to_string()),
            positionals: vec![ArgumentDefinition {
                help: Some("prefix of the build id".to_string()),
                ..definition("prefix")
            }],
            optionals: vec![ArgumentDefinition {
                help: Some("file of the build id".to_string()),
                value_name: Some("FILE".to_string()),
                delimiter: Some(' '),
                default: Some("build.h".to_string()),
                type_hint: Some("path".to_string()),
                required: Some(true),
                ..definition("-f/--file")
            }],
            ..Declaration::default()
        };

        let registry = declaration.build_registry().unwrap();
        assert_eq!(registry.app_name(), "BuildInc");
        assert_eq!(registry.description(), "Bumps build numbers");
        assert_eq!(registry.positionals().len(), 1);

        let file = registry.lookup("file").unwrap();
        assert_eq!(file.aliases(), ["-f", "--file"]);
        assert_eq!(file.value_name(), "FILE");
        assert_eq!(file.delimiter(), Delimiter::Space);
        assert_eq!(file.default_value(), "build.h");
        assert_eq!(file.type_hint(), "path");
        assert!(file.is_required());
    }

    #[test]
    fn test_build_registry_propagates_config_errors() {
        let declaration = Declaration {
            app: String::new(),
            ..Declaration::default()
        };
        assert!(matches!(
            declaration.build_registry(),
            Err(Error::EmptyAppName)
        ));

        let declaration = Declaration {
            app: "app".to_string(),
            optionals: vec![definition("")],
            ..Declaration::default()
        };
        assert!(matches!(declaration.build_registry(), Err(Error::EmptyKey)));
    }

    #[test]
    fn test_display() {
        let declaration = Declaration {
            app: "app".to_string(),
            optionals: vec![definition("--a"), definition("--b")],
            ..Declaration::default()
        };
        assert_eq!(declaration.to_string(), "app (0 positional, 2 optional)");

        let argument = ArgumentDefinition {
            help: Some("output file".to_string()),
            ..definition("--out")
        };
        assert_eq!(argument.to_string(), "`--out` (output file)");
    }
}
