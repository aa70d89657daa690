//! Core schema types and shared parse primitives.
//!
//! This crate defines the declarative model a command-line parser is
//! configured with, and the values and errors it produces:
//!
//! - [`OptionSchema`]: a value-taking option with short/long markers, a
//!   [`ValueType`] and an [`Arity`].
//! - [`FlagSchema`]: a boolean switch; short forms may be clustered.
//! - [`CommandGroupSchema`]: a set of mutually exclusive
//!   [`CommandSchema`] keywords occupying one slot.
//! - [`CliSchema`]: the three ordered collections above.
//! - [`Params`] / [`ParamValue`]: the result of a parse.
//! - [`ParseError`]: [`ConfigError`] or [`InvalidInputError`].
//!
//! Validation ([`validate_schema`]) catches structural errors such as
//! duplicate names, malformed markers and empty command groups.
//!
//! # Example
//!
//! ```
//! use argschema_core::*;
//!
//! let mut schema = CliSchema::new("mycli");
//! schema.options.push(
//!     OptionSchema::new("port", "-p")
//!         .with_long("--port")
//!         .with_type(ValueType::Number)
//!         .with_description("Port to listen on"),
//! );
//! schema.flags.push(FlagSchema::new("verbose", "-v").with_long("--verbose"));
//! schema.command_groups.push(
//!     CommandGroupSchema::new("action")
//!         .with_command(CommandSchema::new("serve"))
//!         .required(),
//! );
//!
//! assert!(schema.find_flag("--verbose").is_some());
//! assert!(validate_schema(&schema).is_empty());
//! ```

mod context;
mod error;
mod types;
mod validate;
mod value;

pub use context::{Callback, ParseContext};
pub use error::{ConfigError, InvalidInputError, ParseError, Result};
pub use types::*;
pub use validate::{ValidationError, validate_schema};
pub use value::{ParamValue, Params};
