//! Schema validation.
//!
//! Checks structural invariants of a [`CliSchema`]: well-formed markers,
//! unique names and markers, and non-empty command groups. Validation is
//! advisory; the parser accepts any schema, and a duplicated option name
//! simply overwrites the earlier entry's result.
//!
//! # Examples
//!
//! ```
//! use argschema_core::*;
//!
//! let mut schema = CliSchema::new("tool");
//! schema.flags.push(FlagSchema::new("verbose", "-v").with_long("--verbose"));
//! assert!(validate_schema(&schema).is_empty());
//!
//! // Invalid: short flag missing leading dash
//! let mut bad = CliSchema::new("tool");
//! bad.flags.push(FlagSchema::new("verbose", "v"));
//! assert!(!validate_schema(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Arity, CliSchema, CommandGroupSchema};

/// Schema validation errors.
///
/// Each variant describes a specific structural problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An option, flag, group or command has an empty name.
    #[error("name cannot be empty")]
    EmptyName,
    /// Short marker is not a single dash followed by one character.
    #[error("invalid short marker format: {0}")]
    InvalidShortMarker(String),
    /// Long marker does not start with `--` or is too short.
    #[error("invalid long marker format: {0}")]
    InvalidLongMarker(String),
    /// Two options or two flags share a result key.
    #[error("duplicate parameter name: {0}")]
    DuplicateName(String),
    /// Two entries share a short or long marker.
    #[error("duplicate marker: {0}")]
    DuplicateMarker(String),
    /// Fixed arity of zero values.
    #[error("option {0} has a fixed arity of zero")]
    ZeroArity(String),
    /// A command group has no commands.
    #[error("command group has no commands: {0}")]
    EmptyCommandGroup(String),
    /// Two commands in one group share a name.
    #[error("duplicate command in group {group}: {command}")]
    DuplicateCommand { group: String, command: String },
}

/// Validates a schema.
///
/// Returns the first problem found, or an empty vector when the schema is
/// well formed.
///
/// # Examples
///
/// ```
/// use argschema_core::*;
///
/// let mut schema = CliSchema::new("tool");
/// schema.options.push(OptionSchema::new("out", "-o"));
/// schema.flags.push(FlagSchema::new("overwrite", "-o"));
///
/// let errors = validate_schema(&schema);
/// assert_eq!(errors, vec![ValidationError::DuplicateMarker("-o".to_string())]);
/// ```
pub fn validate_schema(schema: &CliSchema) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut markers = HashSet::new();

    let mut option_names = HashSet::new();
    for option in &schema.options {
        if let Some(err) = check_name(&option.name, &mut option_names)
            .or_else(|| check_short(&option.short, &mut markers))
            .or_else(|| check_long(option.long.as_deref(), &mut markers))
        {
            errors.push(err);
            return errors;
        }
        if option.arity == Arity::Fixed(0) {
            errors.push(ValidationError::ZeroArity(option.name.clone()));
            return errors;
        }
    }

    let mut flag_names = HashSet::new();
    for flag in &schema.flags {
        if let Some(err) = check_name(&flag.name, &mut flag_names)
            .or_else(|| check_short(&flag.short, &mut markers))
            .or_else(|| check_long(flag.long.as_deref(), &mut markers))
        {
            errors.push(err);
            return errors;
        }
        if flag.short_char().is_none() {
            errors.push(ValidationError::InvalidShortMarker(flag.short.clone()));
            return errors;
        }
    }

    let mut group_names = HashSet::new();
    for group in &schema.command_groups {
        if let Some(err) = check_name(&group.name, &mut group_names) {
            errors.push(err);
            return errors;
        }
        errors.extend(validate_commands(group));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

fn validate_commands(group: &CommandGroupSchema) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if group.commands.is_empty() {
        errors.push(ValidationError::EmptyCommandGroup(group.name.clone()));
        return errors;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for command in &group.commands {
        let name = command.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyName);
            return errors;
        }
        if !seen.insert(name) {
            errors.push(ValidationError::DuplicateCommand {
                group: group.name.clone(),
                command: name.to_string(),
            });
            return errors;
        }
    }

    errors
}

fn check_name<'a>(name: &'a str, seen: &mut HashSet<&'a str>) -> Option<ValidationError> {
    if name.trim().is_empty() {
        return Some(ValidationError::EmptyName);
    }
    if !seen.insert(name) {
        return Some(ValidationError::DuplicateName(name.to_string()));
    }
    None
}

fn check_short(short: &str, seen: &mut HashSet<String>) -> Option<ValidationError> {
    if !short.starts_with('-') || short.starts_with("--") || short.len() < 2 {
        return Some(ValidationError::InvalidShortMarker(short.to_string()));
    }
    if !seen.insert(short.to_string()) {
        return Some(ValidationError::DuplicateMarker(short.to_string()));
    }
    None
}

fn check_long(long: Option<&str>, seen: &mut HashSet<String>) -> Option<ValidationError> {
    let long = long?;
    if !long.starts_with("--") || long.len() < 3 {
        return Some(ValidationError::InvalidLongMarker(long.to_string()));
    }
    if !seen.insert(long.to_string()) {
        return Some(ValidationError::DuplicateMarker(long.to_string()));
    }
    None
}
