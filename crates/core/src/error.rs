use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad registration input or malformed same-token delimiter usage.
    Config,
    /// A query named an alias that no argument declares.
    Lookup,
    /// A stored raw value could not be converted to the requested type, or
    /// a required value was never supplied.
    Value,
    /// Reading a declaration file or writing help text failed.
    Io,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Application name cannot be empty")]
    EmptyAppName,

    #[error("Argument key cannot be empty")]
    EmptyKey,

    #[error("Argument key `{}` contains an empty alias", .0)]
    EmptyAlias(String),

    #[error("Bad parsing of key \"{}\": no value", .0)]
    NoValue(String),

    #[error("Bad parsing of key \"{}\": more than one value", .0)]
    MoreThanOneValue(String),

    #[error("Missing value for required argument(s): {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("Argument not found: `{}`", .0)]
    UnknownArgument(String),

    #[error("Cannot convert value \"{}\" of argument `{}` to {}", .value, .alias, .target)]
    Conversion {
        alias: String,
        value: String,
        target: &'static str,
    },

    #[error("Invalid boolean \"{}\" for argument `{}` (expected true, false, 1 or 0)", .value, .alias)]
    InvalidBool { alias: String, value: String },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Invalid declaration: {}", .0)]
    InvalidDeclaration(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn conversion(alias: &str, value: &str, target: &'static str) -> Self {
        Self::Conversion {
            alias: alias.to_string(),
            value: value.to_string(),
            target,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyAppName
            | Self::EmptyKey
            | Self::EmptyAlias(_)
            | Self::NoValue(_)
            | Self::MoreThanOneValue(_) => ErrorKind::Config,
            Self::UnknownArgument(_) => ErrorKind::Lookup,
            Self::Conversion { .. } | Self::InvalidBool { .. } | Self::MissingRequired(_) => {
                ErrorKind::Value
            }
            Self::Yaml { .. } | Self::Io { .. } | Self::InvalidDeclaration(_) | Self::Stdio(_) => {
                ErrorKind::Io
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::EmptyKey.kind(), ErrorKind::Config);
        assert_eq!(Error::MoreThanOneValue("a=b=c".into()).kind(), ErrorKind::Config);
        assert_eq!(Error::UnknownArgument("x".into()).kind(), ErrorKind::Lookup);
        assert_eq!(Error::conversion("n", "abc", "i32").kind(), ErrorKind::Value);
        assert_eq!(
            Error::InvalidBool {
                alias: "b".into(),
                value: "maybe".into()
            }
            .kind(),
            ErrorKind::Value
        );
    }

    #[test]
    fn test_delimiter_error_messages() {
        let err = Error::MoreThanOneValue("label=a=b".to_string());
        assert_eq!(
            err.to_string(),
            "Bad parsing of key \"label=a=b\": more than one value"
        );
    }
}
