//! Reading argument declarations from disk.
//!
//! Declarations are YAML documents (see [`Declaration`]). Loading validates
//! that the document names an application and that every argument key is
//! usable before any registry is built from it.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

use log::debug;

use crate::declaration::{ArgumentDefinition, Declaration};
use crate::error::{Error, Result};
use crate::registry::HELP_KEY;
use crate::spec::normalize;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_definitions(declaration: &Declaration) -> Result<()> {
    let reserved: HashSet<&str> = HELP_KEY.split('/').map(normalize).collect();
    let mut seen = HashSet::new();
    let definitions = declaration
        .positionals
        .iter()
        .chain(declaration.optionals.iter());

    for definition in definitions {
        validate_key(definition)?;

        for alias in definition.key.split('/') {
            let alias = normalize(alias);
            if reserved.contains(alias) {
                return Err(Error::InvalidDeclaration(format!(
                    "alias `{alias}` of {definition} is reserved for help"
                )));
            }
            if !seen.insert(alias.to_string()) {
                return Err(Error::InvalidDeclaration(format!(
                    "alias `{alias}` of {definition} is declared more than once"
                )));
            }
        }
    }

    Ok(())
}

fn validate_key(definition: &ArgumentDefinition) -> Result<()> {
    if definition.key.is_empty() {
        return Err(Error::EmptyKey);
    }

    if definition.key.contains(char::is_whitespace) {
        return Err(Error::InvalidDeclaration(format!(
            "key of {definition} may not contain whitespace"
        )));
    }

    Ok(())
}

/// Parses a declaration from YAML text.
///
/// `path` is only used in error messages.
///
/// # Errors
///
/// Returns an error if the YAML is invalid, a key is empty or contains
/// whitespace, or an alias is declared twice.
pub fn parse_declaration(content: &str, path: &str) -> Result<Declaration> {
    let declaration: Declaration = serde_yaml::from_str(content).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "declaration".to_string(),
            path.to_string(),
            e,
        )
    })?;

    if declaration.app.is_empty() {
        return Err(Error::EmptyAppName);
    }

    validate_definitions(&declaration)?;
    Ok(declaration)
}

/// Loads and validates an argument declaration file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The file contains invalid YAML or does not match [`Declaration`]
/// - The declaration fails validation (see [`parse_declaration`])
pub fn get_declaration(declaration_path: &str) -> Result<Declaration> {
    let mut reader = get_reader("declaration", declaration_path)?;
    let mut content = String::new();
    reader.read_to_string(&mut content).map_err(|e| {
        Error::io_error("declaration".to_string(), declaration_path.to_string(), e)
    })?;

    let declaration = parse_declaration(&content, declaration_path)?;
    debug!("Loaded declaration {declaration} from `{declaration_path}`");

    Ok(declaration)
}
