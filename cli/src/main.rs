use std::path::PathBuf;

use argschema_core::{ParseError, Params};
use argschema_parser::{Cli as SchemaParser, load_schema, render_help};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Output format for parse results.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "argschema")]
#[command(disable_help_subcommand = true)]
#[command(about = "Run declarative argument schemas against argument vectors")]
struct Cli {
    /// Emit debug logs to stderr (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an argument vector against a schema file and print the result.
    Parse(ParseArgs),
    /// Check a schema file for structural problems.
    Validate(ValidateArgs),
    /// Print help text generated from a schema file.
    Help(HelpArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Schema file (YAML or JSON).
    #[arg(long)]
    schema: PathBuf,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Arguments to parse, after `--`; the first is the program name.
    #[arg(last = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Schema file (YAML or JSON).
    #[arg(long)]
    schema: PathBuf,
}

#[derive(Debug, Args)]
struct HelpArgs {
    /// Schema file (YAML or JSON).
    #[arg(long)]
    schema: PathBuf,
    /// Program name for the usage line (defaults to the schema name).
    #[arg(long)]
    program: Option<String>,
}

/// A failed run: message for stderr and the process exit status.
#[derive(Debug)]
struct Failure {
    message: String,
    code: i32,
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self { message, code: 1 }
    }
}

impl From<ParseError> for Failure {
    fn from(err: ParseError) -> Self {
        let code = if err.is_invalid_input() { 2 } else { 1 };
        Self {
            message: err.to_string(),
            code,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Validate(args) => run_validate(args),
        Command::Help(args) => run_help(args),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err.message);
        std::process::exit(err.code);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_parse(args: ParseArgs) -> Result<(), Failure> {
    let mut parser = SchemaParser::from_schema_file(&args.schema)
        .map_err(|err| format!("Failed to load '{}': {err}", args.schema.display()))?;
    debug!(schema = %args.schema.display(), args = ?args.args, "Running parse");

    let params = parser.parse(args.args)?;
    println!("{}", format_params(params, args.format)?);
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), Failure> {
    let parser = SchemaParser::from_schema_file(&args.schema)
        .map_err(|err| format!("Failed to load '{}': {err}", args.schema.display()))?;

    let errors = parser.validate();
    if let Some(first) = errors.first() {
        return Err(format!("Invalid schema '{}': {first}", args.schema.display()).into());
    }

    let schema = parser.schema();
    println!(
        "Validated '{}': {} option(s), {} flag(s), {} command group(s).",
        args.schema.display(),
        schema.options.len(),
        schema.flags.len(),
        schema.command_groups.len()
    );
    Ok(())
}

fn run_help(args: HelpArgs) -> Result<(), Failure> {
    let schema = load_schema(&args.schema)
        .map_err(|err| format!("Failed to load '{}': {err}", args.schema.display()))?;
    print!("{}", render_help(&schema, args.program.as_deref()));
    Ok(())
}

fn format_params(params: &Params, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(params)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(params).map_err(|e| format!("YAML serialization failed: {e}"))
        }
    }
}
