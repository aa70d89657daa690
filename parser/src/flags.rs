//! Flag resolution.
//!
//! Scans the remaining arguments left to right. A `--long` token must name a
//! registered flag; a `-xyz` token is a cluster of short flags, each
//! character looked up on its own. Every registered flag ends up in the
//! result, `false` when it was not seen.

use argschema_core::{ConfigError, FlagSchema, InvalidInputError, Params, Result};
use tracing::{debug, trace};

/// Resolves flags, removing every flag token from `args`.
///
/// Tokens that do not start with `-` are kept in order for the command
/// resolver.
///
/// # Errors
///
/// - [`ConfigError::UnknownFlag`] for a `--long` token no flag declares.
/// - [`InvalidInputError::UnknownShortFlag`] for a cluster character no
///   flag declares.
pub fn resolve_flags(args: &mut Vec<String>, flags: &[FlagSchema]) -> Result<Params> {
    let mut params = Params::new();

    for token in std::mem::take(args) {
        if token.starts_with("--") {
            debug!(token = %token, "Long flag found");
            let flag = flags
                .iter()
                .find(|f| f.matches(&token))
                .ok_or_else(|| ConfigError::UnknownFlag(token.clone()))?;
            params.insert(flag.name.clone(), true);
        } else if let Some(cluster) = token.strip_prefix('-') {
            debug!(token = %token, "Short flag(s) found");
            for ch in cluster.chars() {
                let flag = find_short(flags, ch).ok_or_else(|| {
                    InvalidInputError::UnknownShortFlag {
                        flag: ch,
                        cluster: token.clone(),
                    }
                })?;
                params.insert(flag.name.clone(), true);
            }
        } else {
            args.push(token);
        }
    }

    for flag in flags {
        if !params.contains(&flag.name) {
            params.insert(flag.name.clone(), false);
        }
    }

    trace!(?args, "Args after flags");
    Ok(params)
}

fn find_short(flags: &[FlagSchema], ch: char) -> Option<&FlagSchema> {
    flags.iter().find(|f| f.short_char() == Some(ch))
}
