//! Command group resolution.
//!
//! Groups are visited in registration order. Each compares the first
//! remaining argument against its commands; on a match the argument is
//! shifted off, the group key is set to the command name, and the command's
//! callback runs before the group's.

use argschema_core::{CommandGroupSchema, InvalidInputError, ParseContext, Params, Result};
use tracing::debug;

/// Resolves command groups, removing each matched token from the front of
/// `args`.
///
/// `ctx` carries what has been resolved before this step; callbacks see it
/// extended with the groups matched so far.
///
/// # Errors
///
/// [`InvalidInputError::MissingCommand`] when a required group does not
/// match the first remaining argument.
pub fn resolve_commands(
    args: &mut Vec<String>,
    groups: &[CommandGroupSchema],
    ctx: &ParseContext<'_>,
) -> Result<Params> {
    let mut params = Params::new();
    let mut view = ctx.params().clone();

    for group in groups {
        debug!(group = %group.name, "Checking command group");
        let Some(command) = args.first().and_then(|token| group.find_command(token)) else {
            if group.required {
                debug!(group = %group.name, "Required command group not matched");
                return Err(InvalidInputError::MissingCommand {
                    group: group.name.clone(),
                }
                .into());
            }
            continue;
        };

        debug!(group = %group.name, command = %command.name, "Command found");
        args.remove(0);
        params.insert(group.name.clone(), command.name.clone());
        view.insert(group.name.clone(), command.name.clone());

        let callback_ctx = ParseContext::new(ctx.program(), ctx.schema(), &view);
        if let Some(callback) = &command.callback {
            callback.call(&callback_ctx, command);
        }
        if let Some(callback) = &group.callback {
            callback.call(&callback_ctx, command);
        }
    }

    Ok(params)
}
