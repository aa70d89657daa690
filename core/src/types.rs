//! Schema type definitions for argument declarations.
//!
//! This module defines the declarative records a parser is configured with:
//! value-taking options, boolean flags, and groups of mutually exclusive
//! commands. The types are designed for serialization with [`serde`] so a
//! complete [`CliSchema`] can be kept in a JSON or YAML file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::{Callback, ParseContext};

/// Value type for option values.
///
/// Every token collected for an option is interpreted according to its
/// value type. `Number` values are parsed as 64-bit floats.
///
/// # Examples
///
/// ```
/// use argschema_core::ValueType;
///
/// assert_eq!(ValueType::default(), ValueType::String);
/// assert_eq!("number".parse::<ValueType>().unwrap(), ValueType::Number);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Raw string value (the default).
    #[default]
    String,
    /// Floating-point number.
    Number,
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            other => Err(format!("unknown value type: {other}")),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
        }
    }
}

/// Accepted count of values following an option marker.
///
/// In text and schema files an arity is written as a positive count or one
/// of the symbols `*` (zero or more) and `+` (one or more). A count of `1`
/// means [`ExactlyOne`](Arity::ExactlyOne).
///
/// # Examples
///
/// ```
/// use argschema_core::Arity;
///
/// assert_eq!(Arity::default(), Arity::ExactlyOne);
/// assert_eq!("*".parse::<Arity>().unwrap(), Arity::ZeroOrMore);
/// assert_eq!("+".parse::<Arity>().unwrap(), Arity::OneOrMore);
/// assert_eq!("3".parse::<Arity>().unwrap(), Arity::Fixed(3));
/// assert_eq!("1".parse::<Arity>().unwrap(), Arity::ExactlyOne);
/// assert!("0".parse::<Arity>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "ArityRepr", into = "ArityRepr")]
pub enum Arity {
    /// A single value taken from the next token (the default).
    #[default]
    ExactlyOne,
    /// Exactly `n` values, collected as a list.
    Fixed(usize),
    /// Any number of values; none at all yields an explicit null.
    ZeroOrMore,
    /// At least one value.
    OneOrMore,
}

impl Arity {
    /// Builds an arity from a value count.
    ///
    /// Returns `None` for zero, [`ExactlyOne`](Arity::ExactlyOne) for one and
    /// [`Fixed`](Arity::Fixed) otherwise.
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Self::ExactlyOne),
            n => Some(Self::Fixed(n)),
        }
    }
}

/// Error returned when an arity string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid arity '{0}': expected a positive count, '*' or '+'")]
pub struct ArityParseError(pub String);

impl FromStr for Arity {
    type Err = ArityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "*" => Ok(Self::ZeroOrMore),
            "+" => Ok(Self::OneOrMore),
            raw => raw
                .parse::<usize>()
                .ok()
                .and_then(Self::from_count)
                .ok_or_else(|| ArityParseError(raw.to_string())),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactlyOne => f.write_str("1"),
            Self::Fixed(n) => write!(f, "{n}"),
            Self::ZeroOrMore => f.write_str("*"),
            Self::OneOrMore => f.write_str("+"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ArityRepr {
    Count(usize),
    Symbol(String),
}

impl TryFrom<ArityRepr> for Arity {
    type Error = ArityParseError;

    fn try_from(repr: ArityRepr) -> Result<Self, Self::Error> {
        match repr {
            ArityRepr::Count(n) => Self::from_count(n).ok_or_else(|| ArityParseError(n.to_string())),
            ArityRepr::Symbol(s) => s.parse(),
        }
    }
}

impl From<Arity> for ArityRepr {
    fn from(arity: Arity) -> Self {
        match arity {
            Arity::ExactlyOne => Self::Count(1),
            Arity::Fixed(n) => Self::Count(n),
            Arity::ZeroOrMore => Self::Symbol("*".to_string()),
            Arity::OneOrMore => Self::Symbol("+".to_string()),
        }
    }
}

/// Schema for a value-taking option.
///
/// An option is found by its short marker (e.g. `-t`) or its long marker
/// (e.g. `--test`) and consumes the value tokens that follow according to
/// its [`Arity`]. The resolved value is stored under [`name`](Self::name).
///
/// # Examples
///
/// ```
/// use argschema_core::{Arity, OptionSchema, ValueType};
///
/// let opt = OptionSchema::new("files", "-f")
///     .with_long("--files")
///     .with_arity(Arity::OneOrMore)
///     .with_description("Input files");
/// assert!(opt.matches("-f"));
/// assert!(opt.matches("--files"));
/// assert_eq!(opt.markers(), "-f/--files");
///
/// let port = OptionSchema::new("port", "-p").with_type(ValueType::Number).required();
/// assert!(port.required);
/// assert_eq!(port.long, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSchema {
    /// Key in the resulting parameter mapping
    pub name: String,
    /// Description for help output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short marker (e.g., "-t")
    pub short: String,
    /// Long marker (e.g., "--test")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    /// How collected values are interpreted
    #[serde(default)]
    pub value_type: ValueType,
    /// How many values follow the marker
    #[serde(default)]
    pub arity: Arity,
    /// Fail the parse when the option is absent
    #[serde(default)]
    pub required: bool,
}

impl OptionSchema {
    /// Creates an optional, single-valued string option.
    pub fn new(name: &str, short: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            short: short.to_string(),
            long: None,
            value_type: ValueType::String,
            arity: Arity::ExactlyOne,
            required: false,
        }
    }

    /// Sets the long marker. An empty string clears it.
    pub fn with_long(mut self, long: &str) -> Self {
        self.long = (!long.is_empty()).then(|| long.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Sets the value type.
    pub fn with_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Sets the arity.
    pub fn with_arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Marks the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Checks if a token is this option's short or long marker.
    pub fn matches(&self, token: &str) -> bool {
        self.short == token || self.long.as_deref() == Some(token)
    }

    /// Returns both markers joined for messages (e.g. `-t/--test`).
    pub fn markers(&self) -> String {
        match &self.long {
            Some(long) => format!("{}/{long}", self.short),
            None => self.short.clone(),
        }
    }
}

/// Schema for a boolean flag.
///
/// A flag is `true` when its short form appears on its own or inside a
/// short-flag cluster (`-abc`), or when its long form appears. It is `false`
/// otherwise; a flag is never missing from a parse result.
///
/// # Examples
///
/// ```
/// use argschema_core::FlagSchema;
///
/// let verbose = FlagSchema::new("verbose", "-v").with_long("--verbose");
/// assert!(verbose.matches("-v"));
/// assert!(verbose.matches("--verbose"));
/// assert!(!verbose.matches("-x"));
/// assert_eq!(verbose.short_char(), Some('v'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSchema {
    /// Key in the resulting parameter mapping
    pub name: String,
    /// Description for help output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short form: a single dash and one character
    pub short: String,
    /// Long form (e.g., "--verbose")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

impl FlagSchema {
    /// Creates a flag with a short form only.
    pub fn new(name: &str, short: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            short: short.to_string(),
            long: None,
        }
    }

    /// Sets the long form. An empty string clears it.
    pub fn with_long(mut self, long: &str) -> Self {
        self.long = (!long.is_empty()).then(|| long.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Checks if a token is this flag's short or long form.
    pub fn matches(&self, token: &str) -> bool {
        self.short == token || self.long.as_deref() == Some(token)
    }

    /// Returns the character of a well-formed short form (`-v` → `v`).
    pub fn short_char(&self) -> Option<char> {
        let mut chars = self.short.strip_prefix('-')?.chars();
        let ch = chars.next()?;
        chars.next().is_none().then_some(ch)
    }
}

/// A keyword that can occupy a command group's slot.
///
/// The optional callback runs when the command is matched, before the
/// owning group's callback.
///
/// # Examples
///
/// ```
/// use argschema_core::CommandSchema;
///
/// let build = CommandSchema::new("build").with_description("Compile the project");
/// assert_eq!(build.name, "build");
/// assert!(build.callback.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandSchema {
    /// Token that selects this command
    pub name: String,
    /// Description for help output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Invoked when the command is matched
    #[serde(skip)]
    pub callback: Option<Callback>,
}

impl CommandSchema {
    /// Creates a command without a callback.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Attaches a callback invoked when this command is matched.
    pub fn with_callback<F>(mut self, f: F) -> Self
    where
        F: Fn(&ParseContext<'_>, &CommandSchema) + Send + Sync + 'static,
    {
        self.callback = Some(Callback::new(f));
        self
    }
}

/// A closed set of mutually exclusive commands under one parameter key.
///
/// At most one command of a group matches per parse; its name becomes the
/// value stored under the group's [`name`](Self::name).
///
/// # Examples
///
/// ```
/// use argschema_core::{CommandGroupSchema, CommandSchema};
///
/// let group = CommandGroupSchema::new("action")
///     .with_command(CommandSchema::new("start"))
///     .with_command(CommandSchema::new("stop"))
///     .required();
/// assert!(group.required);
/// assert_eq!(group.command_names(), vec!["start", "stop"]);
/// assert!(group.find_command("stop").is_some());
/// assert!(group.find_command("restart").is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandGroupSchema {
    /// Key in the resulting parameter mapping
    pub name: String,
    /// Description for help output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Candidate commands, matched in order
    #[serde(default)]
    pub commands: Vec<CommandSchema>,
    /// Invoked after the matched command's own callback
    #[serde(skip)]
    pub callback: Option<Callback>,
    /// Fail the parse when no command matches
    #[serde(default)]
    pub required: bool,
}

impl CommandGroupSchema {
    /// Creates an empty, optional command group.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Appends a command.
    pub fn with_command(mut self, command: CommandSchema) -> Self {
        self.commands.push(command);
        self
    }

    /// Appends several commands in order.
    pub fn with_commands(mut self, commands: impl IntoIterator<Item = CommandSchema>) -> Self {
        self.commands.extend(commands);
        self
    }

    /// Attaches a callback invoked after any command of this group matches.
    pub fn with_callback<F>(mut self, f: F) -> Self
    where
        F: Fn(&ParseContext<'_>, &CommandSchema) + Send + Sync + 'static,
    {
        self.callback = Some(Callback::new(f));
        self
    }

    /// Marks the group as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Finds the first command whose name equals `token`.
    pub fn find_command(&self, token: &str) -> Option<&CommandSchema> {
        self.commands.iter().find(|c| c.name == token)
    }

    /// Gets all command names in registration order.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Complete argument schema for one program.
///
/// Holds the three ordered collections the parser resolves against. Order
/// matters: options are resolved in registration order and command groups
/// are matched in registration order.
///
/// # Examples
///
/// ```
/// use argschema_core::*;
///
/// let mut schema = CliSchema::new("deploy");
/// schema.options.push(OptionSchema::new("target", "-t").with_long("--target"));
/// schema.flags.push(FlagSchema::new("dry_run", "-n"));
/// schema.command_groups.push(
///     CommandGroupSchema::new("action").with_command(CommandSchema::new("up")),
/// );
///
/// assert!(schema.find_option("target").is_some());
/// assert!(schema.find_flag("-n").is_some());
/// assert!(schema.find_flag("--dry-run").is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliSchema {
    /// Program name used in help output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short description of the program
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value-taking options
    #[serde(default)]
    pub options: Vec<OptionSchema>,
    /// Boolean flags
    #[serde(default)]
    pub flags: Vec<FlagSchema>,
    /// Command groups
    #[serde(default)]
    pub command_groups: Vec<CommandGroupSchema>,
}

impl CliSchema {
    /// Creates an empty schema for the named program.
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Finds an option by its parameter name.
    pub fn find_option(&self, name: &str) -> Option<&OptionSchema> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Finds a flag by its short or long form.
    pub fn find_flag(&self, marker: &str) -> Option<&FlagSchema> {
        self.flags.iter().find(|f| f.matches(marker))
    }

    /// Finds a command group by its parameter name.
    pub fn find_command_group(&self, name: &str) -> Option<&CommandGroupSchema> {
        self.command_groups.iter().find(|g| g.name == name)
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.flags.is_empty() && self.command_groups.is_empty()
    }
}
