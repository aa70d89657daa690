//! Callback plumbing for command matches.
//!
//! Commands and command groups may carry a [`Callback`]. When a command
//! matches, its callback runs first, then the group's, each receiving a
//! read-only [`ParseContext`] describing the parse in progress.

use std::fmt;
use std::sync::Arc;

use crate::{CliSchema, CommandSchema, Params};

type CallbackFn = dyn Fn(&ParseContext<'_>, &CommandSchema) + Send + Sync;

/// Shared, clonable command callback.
///
/// Callbacks get a read-only [`ParseContext`] rather than the parser
/// itself, since the parser is mutably borrowed while a parse runs. The
/// context carries the program name, the schema and the params resolved so
/// far (options, flags and earlier command groups).
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// use argschema_core::{Callback, CliSchema, CommandSchema, ParseContext, Params};
///
/// let hits = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&hits);
/// let callback = Callback::new(move |_ctx, _cmd| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// let schema = CliSchema::default();
/// let params = Params::new();
/// let ctx = ParseContext::new(Some("prog"), &schema, &params);
/// callback.call(&ctx, &CommandSchema::new("run"));
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
    /// Wraps a closure as a callback.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ParseContext<'_>, &CommandSchema) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the callback.
    pub fn call(&self, ctx: &ParseContext<'_>, command: &CommandSchema) {
        (self.0)(ctx, command)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Read-only view of a parse in progress.
///
/// Handed to callbacks in place of the parser itself. `params` holds what
/// has been resolved so far: every option and flag, plus the command groups
/// matched before the current one.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    program: Option<&'a str>,
    schema: &'a CliSchema,
    params: &'a Params,
}

impl<'a> ParseContext<'a> {
    /// Creates a context.
    pub fn new(program: Option<&'a str>, schema: &'a CliSchema, params: &'a Params) -> Self {
        Self {
            program,
            schema,
            params,
        }
    }

    /// The discarded first argument (program or script name), if any.
    pub fn program(&self) -> Option<&'a str> {
        self.program
    }

    /// The schema being parsed against.
    pub fn schema(&self) -> &'a CliSchema {
        self.schema
    }

    /// Parameters resolved so far.
    pub fn params(&self) -> &'a Params {
        self.params
    }
}
