//! The parser instance.
//!
//! [`Cli`] owns a [`CliSchema`] and drives the resolvers in a fixed order:
//! options, then flags, then command groups. Whatever is left afterwards
//! is an error.

use std::path::Path;

use argschema_core::{
    CliSchema, CommandGroupSchema, FlagSchema, InvalidInputError, OptionSchema, ParseContext,
    Params, Result, ValidationError, validate_schema,
};
use tracing::debug;

use crate::commands::resolve_commands;
use crate::flags::resolve_flags;
use crate::help::render_help;
use crate::options::resolve_options;
use crate::schema_file::{SchemaFileError, load_schema};

/// Declarative argument parser.
///
/// Register options, flags and command groups, then call
/// [`parse`](Cli::parse) as often as needed. Registrations persist across
/// calls; each call starts from an empty result.
///
/// # Examples
///
/// ```
/// use argschema_core::{Arity, FlagSchema, OptionSchema};
/// use argschema_parser::Cli;
///
/// let mut cli = Cli::new();
/// cli.option(OptionSchema::new("test1", "-t").with_long("--test1"))
///     .option(OptionSchema::new("files", "-f").with_arity(Arity::ZeroOrMore))
///     .flag(FlagSchema::new("verbose", "-v"));
///
/// let params = cli.parse(["prog", "-f", "a", "b", "--test1", "x", "-v"]).unwrap();
/// assert_eq!(params.get_str("test1"), Some("x"));
/// assert_eq!(params.get_list("files").map(<[String]>::len), Some(2));
/// assert!(params.flag("verbose"));
/// assert_eq!(cli.script_name(), Some("prog"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cli {
    schema: CliSchema,
    script_name: Option<String>,
    params: Params,
}

impl Cli {
    /// Creates a parser with an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser for an existing schema.
    pub fn from_schema(schema: CliSchema) -> Self {
        Self {
            schema,
            ..Default::default()
        }
    }

    /// Creates a parser from a YAML or JSON schema file.
    pub fn from_schema_file(path: impl AsRef<Path>) -> std::result::Result<Self, SchemaFileError> {
        load_schema(path).map(Self::from_schema)
    }

    /// Registers an option.
    ///
    /// Registering a second option with the same name is allowed; whichever
    /// resolves later overwrites the earlier result.
    pub fn option(&mut self, option: OptionSchema) -> &mut Self {
        self.schema.options.push(option);
        self
    }

    /// Registers a flag.
    pub fn flag(&mut self, flag: FlagSchema) -> &mut Self {
        self.schema.flags.push(flag);
        self
    }

    /// Registers a command group.
    pub fn command_group(&mut self, group: CommandGroupSchema) -> &mut Self {
        self.schema.command_groups.push(group);
        self
    }

    /// Registers an option, consuming and returning the parser.
    pub fn with_option(mut self, option: OptionSchema) -> Self {
        self.option(option);
        self
    }

    /// Registers a flag, consuming and returning the parser.
    pub fn with_flag(mut self, flag: FlagSchema) -> Self {
        self.flag(flag);
        self
    }

    /// Registers a command group, consuming and returning the parser.
    pub fn with_command_group(mut self, group: CommandGroupSchema) -> Self {
        self.command_group(group);
        self
    }

    /// Parses an argument vector.
    ///
    /// The first element is the program or script name and is discarded.
    /// On success the result is stored and returned; on failure the stored
    /// result is left empty.
    ///
    /// # Errors
    ///
    /// A [`ConfigError`](argschema_core::ConfigError) for an unknown long
    /// flag, otherwise an [`InvalidInputError`] for missing, malformed or
    /// leftover arguments.
    pub fn parse<I, S>(&mut self, args: I) -> Result<&Params>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args: Vec<String> = args.into_iter().map(Into::into).collect();
        self.params = Params::new();
        self.script_name = (!args.is_empty()).then(|| args.remove(0));
        debug!(script = ?self.script_name, ?args, "Parsing arguments");

        let mut params = resolve_options(&mut args, &self.schema.options)?;
        params.merge(resolve_flags(&mut args, &self.schema.flags)?);

        let ctx = ParseContext::new(self.script_name.as_deref(), &self.schema, &params);
        let commands = resolve_commands(&mut args, &self.schema.command_groups, &ctx)?;
        params.merge(commands);

        check_for_extras(args)?;

        self.params = params;
        Ok(&self.params)
    }

    /// Parses the process's own arguments.
    pub fn parse_env(&mut self) -> Result<&Params> {
        self.parse(std::env::args())
    }

    /// Result of the most recent successful parse.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// First argument of the most recent parse.
    pub fn script_name(&self) -> Option<&str> {
        self.script_name.as_deref()
    }

    /// The registered schema.
    pub fn schema(&self) -> &CliSchema {
        &self.schema
    }

    /// Checks the registered schema for structural problems.
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_schema(&self.schema)
    }

    /// Renders help text, using the last script name when there is one.
    pub fn help_text(&self) -> String {
        render_help(&self.schema, self.script_name.as_deref())
    }
}

impl From<CliSchema> for Cli {
    fn from(schema: CliSchema) -> Self {
        Self::from_schema(schema)
    }
}

fn check_for_extras(args: Vec<String>) -> Result<()> {
    if args.is_empty() {
        return Ok(());
    }
    debug!(?args, "Unconsumed arguments");
    Err(InvalidInputError::ExtraArguments(args).into())
}
