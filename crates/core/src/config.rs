//! Configuration path utilities for ezargs.
//!
//! This module resolves the declaration file path and expands shell
//! variables like `~` in paths.

/// Default path for the argument declaration file
const DEFAULT_DECLARATION_PATH: &str = "~/.ezargs/declaration.yml";

/// Index of the first user token in a conventional argv.
pub const DEFAULT_START_INDEX: usize = 1;

/// Resolves the declaration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// declaration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use ezargs_core::config::get_declaration_path;
///
/// let default_path = get_declaration_path(None);
/// let custom_path = get_declaration_path(Some("/path/to/declaration.yml"));
/// assert_eq!(custom_path, "/path/to/declaration.yml");
/// ```
#[must_use]
pub fn get_declaration_path(declaration_path_arg: Option<&str>) -> String {
    let declaration_path = declaration_path_arg.unwrap_or(DEFAULT_DECLARATION_PATH);

    shellexpand::tilde(declaration_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_declaration_path_with_custom_path() {
        let result = get_declaration_path(Some("/custom/path/args.yml"));
        assert_eq!(result, "/custom/path/args.yml");
    }

    #[test]
    fn test_get_declaration_path_with_none() {
        let result = get_declaration_path(None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".ezargs/declaration.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_declaration_path_with_tilde() {
        let result = get_declaration_path(Some("~/my-args.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-args.yml"));
    }

    #[test]
    fn test_default_start_index_constant() {
        assert_eq!(DEFAULT_START_INDEX, 1);
    }
}
