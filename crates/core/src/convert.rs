//! Conversion of raw argument strings into typed values.
//!
//! Values are stored as the raw text found on the command line and only
//! converted when read back through [`crate::Registry::get_value`]. Each
//! readable type implements [`FromArgValue`]; the type chosen at the call
//! site selects the conversion.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// A type that can be read from a stored argument value.
///
/// `Default` supplies the value returned when nothing is stored.
pub trait FromArgValue: Sized + Default {
    /// Converts `raw`, reporting failures against `alias`.
    ///
    /// # Errors
    ///
    /// Returns a value error when `raw` cannot be represented as `Self`.
    fn from_arg_value(alias: &str, raw: &str) -> Result<Self>;
}

impl FromArgValue for String {
    fn from_arg_value(_alias: &str, raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

impl FromArgValue for PathBuf {
    fn from_arg_value(_alias: &str, raw: &str) -> Result<Self> {
        Ok(PathBuf::from(raw))
    }
}

impl FromArgValue for bool {
    fn from_arg_value(alias: &str, raw: &str) -> Result<Self> {
        match raw {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(Error::InvalidBool {
                alias: alias.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

macro_rules! from_str_conversion {
    ($($target:ty),* $(,)?) => {
        $(
            impl FromArgValue for $target {
                fn from_arg_value(alias: &str, raw: &str) -> Result<Self> {
                    raw.trim()
                        .parse::<$target>()
                        .map_err(|_| Error::conversion(alias, raw, stringify!($target)))
                }
            }
        )*
    };
}

from_str_conversion!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_bool_accepts_only_known_spellings() {
        assert!(bool::from_arg_value("b", "true").unwrap());
        assert!(bool::from_arg_value("b", "1").unwrap());
        assert!(!bool::from_arg_value("b", "false").unwrap());
        assert!(!bool::from_arg_value("b", "0").unwrap());

        for raw in ["maybe", "TRUE", "yes", "2"] {
            let err = bool::from_arg_value("b", raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Value, "{raw} should be rejected");
        }
    }

    #[test]
    fn test_numeric_conversion() {
        assert_eq!(i32::from_arg_value("n", "42").unwrap(), 42);
        assert_eq!(i32::from_arg_value("n", " -7 ").unwrap(), -7);
        assert_eq!(u8::from_arg_value("n", "255").unwrap(), 255);
        assert!((f64::from_arg_value("n", "1.5").unwrap() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_numeric_conversion_failure_names_target() {
        let err = u8::from_arg_value("count", "300").unwrap_err();
        match err {
            Error::Conversion {
                alias,
                value,
                target,
            } => {
                assert_eq!(alias, "count");
                assert_eq!(value, "300");
                assert_eq!(target, "u8");
            }
            other => panic!("Expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn test_string_and_path_pass_through() {
        assert_eq!(String::from_arg_value("s", " a b ").unwrap(), " a b ");
        assert_eq!(
            PathBuf::from_arg_value("p", "out/build.h").unwrap(),
            PathBuf::from("out/build.h")
        );
    }
}
