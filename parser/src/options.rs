//! Option resolution.
//!
//! Options are resolved one schema entry at a time, in registration order.
//! Each entry looks for the first occurrence of its short marker (falling
//! back to its long marker) anywhere in the remaining arguments, so options
//! may appear in any order on the command line. The marker and the value
//! tokens it consumes are removed from the argument list.

use argschema_core::{
    Arity, InvalidInputError, OptionSchema, ParamValue, Params, Result, ValueType,
};
use tracing::{debug, trace};

/// Resolves every option in `options`, removing consumed tokens from `args`.
///
/// A missing optional option leaves no key in the result; a missing
/// required one fails with [`InvalidInputError::MissingOption`].
pub fn resolve_options(args: &mut Vec<String>, options: &[OptionSchema]) -> Result<Params> {
    let mut params = Params::new();

    for option in options {
        debug!(option = %option.markers(), ?args, "Testing option");
        let Some(index) = find_marker(args, option) else {
            if option.required {
                debug!(option = %option.markers(), "Required option not found");
                return Err(InvalidInputError::MissingOption {
                    markers: option.markers(),
                }
                .into());
            }
            continue;
        };

        let (value, consumed) = take_values(&args[index + 1..], option)?;
        args.drain(index..=index + consumed);
        params.insert(option.name.clone(), value);
    }

    trace!(?args, "Args after options");
    Ok(params)
}

/// Returns `true` if a token ends a run of option values.
fn is_marker(token: &str) -> bool {
    token.starts_with('-')
}

fn find_marker(args: &[String], option: &OptionSchema) -> Option<usize> {
    args.iter().position(|a| *a == option.short).or_else(|| {
        let long = option.long.as_deref()?;
        args.iter().position(|a| a == long)
    })
}

/// Picks the value tokens for `option` out of the tokens that follow its
/// marker. Returns the value and how many tokens it consumed.
fn take_values(following: &[String], option: &OptionSchema) -> Result<(ParamValue, usize)> {
    match option.arity {
        // The next token is taken whatever it looks like.
        Arity::ExactlyOne | Arity::Fixed(1) => {
            let token = following
                .first()
                .ok_or_else(|| InvalidInputError::MissingValue {
                    option: option.markers(),
                })?;
            Ok((convert_single(option, token)?, 1))
        }
        Arity::Fixed(expected) => {
            let values = value_run(following);
            if values.len() != expected {
                return Err(InvalidInputError::WrongValueCount {
                    option: option.markers(),
                    expected,
                    found: values.len(),
                }
                .into());
            }
            Ok((convert_list(option, values)?, expected))
        }
        Arity::ZeroOrMore => {
            let values = value_run(following);
            if values.is_empty() {
                return Ok((ParamValue::Null, 0));
            }
            Ok((convert_list(option, values)?, values.len()))
        }
        Arity::OneOrMore => {
            let values = value_run(following);
            if values.is_empty() {
                return Err(InvalidInputError::NoValues {
                    option: option.markers(),
                }
                .into());
            }
            Ok((convert_list(option, values)?, values.len()))
        }
    }
}

/// Contiguous tokens up to the next marker or the end of input.
fn value_run(tokens: &[String]) -> &[String] {
    let end = tokens
        .iter()
        .position(|t| is_marker(t))
        .unwrap_or(tokens.len());
    &tokens[..end]
}

fn convert_single(option: &OptionSchema, token: &str) -> Result<ParamValue> {
    match option.value_type {
        ValueType::String => Ok(ParamValue::String(token.to_string())),
        ValueType::Number => parse_number(option, token).map(ParamValue::Number),
    }
}

fn convert_list(option: &OptionSchema, tokens: &[String]) -> Result<ParamValue> {
    match option.value_type {
        ValueType::String => Ok(ParamValue::StringList(tokens.to_vec())),
        ValueType::Number => tokens
            .iter()
            .map(|t| parse_number(option, t))
            .collect::<Result<Vec<_>>>()
            .map(ParamValue::NumberList),
    }
}

/// Only finite numbers are accepted; `nan` and `inf` are rejected.
fn parse_number(option: &OptionSchema, token: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| {
            InvalidInputError::NotANumber {
                option: option.markers(),
                value: token.to_string(),
            }
            .into()
        })
}
