//! Declarative command-line argument parsing.
//!
//! Given a [`CliSchema`](argschema_core::CliSchema) of options, flags and
//! command groups, [`Cli::parse`] consumes an argument vector and produces a
//! [`Params`](argschema_core::Params) mapping. Resolution runs in a fixed
//! order, each step removing the tokens it consumes:
//!
//! 1. [`resolve_options`]: each option, in registration order, finds the
//!    first occurrence of its marker and takes its values by arity.
//! 2. [`resolve_flags`]: `--long` flags and `-xyz` short-flag clusters.
//! 3. [`resolve_commands`]: command groups match the leading positional
//!    tokens and fire callbacks.
//!
//! Any token left after the last step fails the parse.
//!
//! # Example
//!
//! ```
//! use argschema_core::{CommandGroupSchema, CommandSchema, FlagSchema, OptionSchema, ValueType};
//! use argschema_parser::Cli;
//!
//! let mut cli = Cli::new();
//! cli.option(
//!     OptionSchema::new("size", "-s")
//!         .with_long("--size")
//!         .with_type(ValueType::Number),
//! )
//! .flag(FlagSchema::new("all", "-a"))
//! .flag(FlagSchema::new("force", "-f"))
//! .command_group(
//!     CommandGroupSchema::new("action")
//!         .with_command(CommandSchema::new("resize"))
//!         .required(),
//! );
//!
//! let params = cli.parse(["img", "resize", "-af", "--size", "12.5"]).unwrap();
//! assert_eq!(params.get_str("action"), Some("resize"));
//! assert_eq!(params.get_number("size"), Some(12.5));
//! assert!(params.flag("all") && params.flag("force"));
//!
//! let err = cli.parse(["img", "resize", "stray"]).unwrap_err();
//! assert!(err.is_invalid_input());
//! ```

mod cli;
mod commands;
mod flags;
mod help;
mod options;
mod schema_file;

pub use cli::Cli;
pub use commands::resolve_commands;
pub use flags::resolve_flags;
pub use help::render_help;
pub use options::resolve_options;
pub use schema_file::{SchemaFileError, SchemaFormat, load_schema, save_schema, schema_from_yaml};
