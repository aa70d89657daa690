use std::sync::{Arc, Mutex};

use argschema_core::{
    Arity, CommandGroupSchema, CommandSchema, FlagSchema, InvalidInputError, OptionSchema,
    ParamValue, ParseError, ValueType,
};
use argschema_parser::Cli;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test1() -> OptionSchema {
    OptionSchema::new("test1", "-t")
        .with_long("--test1")
        .with_description("Just a test parameter")
}

fn test2() -> OptionSchema {
    OptionSchema::new("test2", "-u")
        .with_long("--test2")
        .with_description("Just another test parameter")
}

fn setup_multiple() -> Cli {
    Cli::new().with_option(test1()).with_option(test2())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Basic options
// ---------------------------------------------------------------------------

#[test]
fn test_option_basic() {
    let mut cli = Cli::new().with_option(test1());
    let params = cli.parse(["cli-test.js", "-t", "value1"]).unwrap();
    assert_eq!(params.get_str("test1"), Some("value1"));
}

#[test]
fn test_option_number_type() {
    let mut cli = Cli::new().with_option(test1().with_type(ValueType::Number));
    let params = cli.parse(["cli-test.js", "-t", "123.5"]).unwrap();
    assert_eq!(params.get("test1"), Some(&ParamValue::Number(123.5)));
}

#[test]
fn test_option_missing_is_absent() {
    let mut cli = Cli::new().with_option(test1());
    let params = cli.parse(["cli-test.js"]).unwrap();
    assert_eq!(params.get("test1"), None);
    assert!(params.is_empty());
}

#[test]
fn test_option_missing_first_is_fine() {
    let mut cli = setup_multiple();
    let params = cli.parse(["cli-test.js", "--test2", "value2"]).unwrap();
    assert_eq!(params.get_str("test2"), Some("value2"));
    assert!(!params.contains("test1"));
}

// ---------------------------------------------------------------------------
// Multiple options
// ---------------------------------------------------------------------------

#[test]
fn test_option_multiple_shorts() {
    let mut cli = setup_multiple();
    let params = cli.parse(["cli-test.js", "-t", "value1", "-u", "hello"]).unwrap();
    assert_eq!(params.get_str("test1"), Some("value1"));
    assert_eq!(params.get_str("test2"), Some("hello"));
}

#[test]
fn test_option_multiple_longs() {
    let mut cli = setup_multiple();
    let params = cli
        .parse(["cli-test.js", "--test1", "value1", "--test2", "hello"])
        .unwrap();
    assert_eq!(params.get_str("test1"), Some("value1"));
    assert_eq!(params.get_str("test2"), Some("hello"));
}

#[test]
fn test_option_multiple_long_and_short() {
    let mut cli = setup_multiple();
    let params = cli
        .parse(["cli-test.js", "-t", "value1", "--test2", "hello"])
        .unwrap();
    assert_eq!(params.get_str("test1"), Some("value1"));
    assert_eq!(params.get_str("test2"), Some("hello"));
}

#[test]
fn test_option_multiple_out_of_order() {
    let mut cli = setup_multiple();
    let params = cli
        .parse(["cli-test.js", "-u", "hello", "--test1", "value1"])
        .unwrap();
    assert_eq!(params.get_str("test1"), Some("value1"));
    assert_eq!(params.get_str("test2"), Some("hello"));
    assert_eq!(params.len(), 2);
}

#[test]
fn test_swapping_unrelated_registrations_keeps_values() {
    let input = ["cli-test.js", "-u", "hello", "-t", "value1"];
    let mut forward = setup_multiple();
    let mut reversed = Cli::new().with_option(test2()).with_option(test1());

    let a = forward.parse(input).unwrap().clone();
    let b = reversed.parse(input).unwrap().clone();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Required options
// ---------------------------------------------------------------------------

#[test]
fn test_option_required() {
    let mut cli = Cli::new().with_option(test1().required());
    let params = cli.parse(["cli-test.js", "-t", "value1"]).unwrap();
    assert_eq!(params.get_str("test1"), Some("value1"));

    let err = cli.parse(["cli-test.js"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::from(InvalidInputError::MissingOption {
            markers: "-t/--test1".to_string()
        })
    );
}

#[test]
fn test_option_required_multiple() {
    let mut cli = Cli::new()
        .with_option(test1().required())
        .with_option(test2().required());
    let params = cli.parse(["cli-test.js", "-t", "value1", "-u", "hello"]).unwrap();
    assert_eq!(params.get_str("test1"), Some("value1"));
    assert_eq!(params.get_str("test2"), Some("hello"));

    let err = cli
        .parse(["cli-test.js", "--test1", "value1", "hello"])
        .unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_option_single_value_leftovers_fail() {
    let mut cli = Cli::new()
        .with_option(test1())
        .with_option(test2().with_arity(Arity::ExactlyOne));

    assert_eq!(
        cli.parse(["cli-test.js", "-u", "value2"]).unwrap().get_str("test2"),
        Some("value2")
    );
    assert_eq!(
        cli.parse(["cli-test.js", "-u", "hello"]).unwrap().get_str("test2"),
        Some("hello")
    );

    assert!(cli.parse(["cli-test.js", "hello"]).is_err());
    let err = cli
        .parse(["cli-test.js", "--test1", "value1", "hello"])
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::from(InvalidInputError::ExtraArguments(strings(&["hello"])))
    );
}

// ---------------------------------------------------------------------------
// Arity
// ---------------------------------------------------------------------------

#[test]
fn test_option_fixed_length() {
    let mut cli = Cli::new().with_option(test1().with_arity(Arity::Fixed(3)));
    let params = cli
        .parse(["cli-test.js", "-t", "value1", "value2", "value3"])
        .unwrap();
    assert_eq!(
        params.get_list("test1"),
        Some(&strings(&["value1", "value2", "value3"])[..])
    );
}

#[test]
fn test_option_fixed_length_too_few() {
    let mut cli = Cli::new().with_option(test1().with_arity(Arity::Fixed(3)));

    assert!(cli.parse(["cli-test.js", "-t", "hello"]).unwrap_err().is_invalid_input());
    assert!(
        cli.parse(["cli-test.js", "-t", "hello", "world"])
            .unwrap_err()
            .is_invalid_input()
    );
}

#[test]
fn test_option_fixed_length_too_many() {
    let mut cli = Cli::new().with_option(test1().with_arity(Arity::Fixed(3)));

    let err = cli
        .parse(["cli-test.js", "-t", "hello", "world", "too", "many"])
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::from(InvalidInputError::WrongValueCount {
            option: "-t/--test1".to_string(),
            expected: 3,
            found: 4
        })
    );
}

#[test]
fn test_option_star_any_length() {
    let mut cli = Cli::new().with_option(test1().with_arity(Arity::ZeroOrMore));
    let params = cli
        .parse(["cli-test.js", "-t", "hello", "world", "here", "are", "many"])
        .unwrap();
    assert_eq!(
        params.get_list("test1"),
        Some(&strings(&["hello", "world", "here", "are", "many"])[..])
    );

    cli.option(OptionSchema::new("other", "-o").with_long("--other"));
    let params = cli
        .parse(["cli-test.js", "-t", "hello", "world", "-o", "something"])
        .unwrap();
    assert_eq!(params.get_list("test1"), Some(&strings(&["hello", "world"])[..]));
    assert_eq!(params.get_str("other"), Some("something"));
}

#[test]
fn test_option_star_with_earlier_option() {
    let mut cli = Cli::new()
        .with_option(OptionSchema::new("otherOpt", "-a").with_long(""))
        .with_option(test1().with_arity(Arity::ZeroOrMore));
    let params = cli
        .parse([
            "cli-test.js", "-t", "hello", "world", "here", "are", "many", "-a", "derp",
        ])
        .unwrap();
    assert_eq!(
        params.get_list("test1"),
        Some(&strings(&["hello", "world", "here", "are", "many"])[..])
    );
    assert_eq!(params.get_str("otherOpt"), Some("derp"));
}

#[test]
fn test_option_star_without_values_is_null() {
    let mut cli = Cli::new().with_option(test1().with_arity(Arity::ZeroOrMore));
    let params = cli.parse(["cli-test.js", "-t"]).unwrap();
    assert_eq!(params.get("test1"), Some(&ParamValue::Null));
}

#[test]
fn test_option_plus_at_least_one() {
    let mut cli = Cli::new().with_option(test1().with_arity(Arity::OneOrMore));
    let params = cli
        .parse(["cli-test.js", "-t", "hello", "world", "here", "are", "many"])
        .unwrap();
    assert_eq!(
        params.get_list("test1"),
        Some(&strings(&["hello", "world", "here", "are", "many"])[..])
    );
}

#[test]
fn test_option_plus_without_values_fails() {
    let mut cli = Cli::new().with_option(test1().with_arity(Arity::OneOrMore));
    let err = cli.parse(["cli-test.js", "-t"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::from(InvalidInputError::NoValues {
            option: "-t/--test1".to_string()
        })
    );
}

#[test]
fn test_option_number_list() {
    let mut cli = Cli::new().with_option(
        test1()
            .with_type(ValueType::Number)
            .with_arity(Arity::Fixed(2)),
    );
    let params = cli.parse(["cli-test.js", "-t", "1", "2.25"]).unwrap();
    assert_eq!(params.get_numbers("test1"), Some(&[1.0, 2.25][..]));
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

fn setup_flags() -> Cli {
    Cli::new()
        .with_flag(FlagSchema::new("a", "-a").with_long("--alpha"))
        .with_flag(FlagSchema::new("b", "-b"))
        .with_flag(FlagSchema::new("c", "-c"))
}

#[test]
fn test_flag_cluster() {
    let mut cli = setup_flags();
    let params = cli.parse(["cli-test.js", "-abc"]).unwrap();
    assert!(params.flag("a"));
    assert!(params.flag("b"));
    assert!(params.flag("c"));
}

#[test]
fn test_flag_cluster_unknown_char() {
    let mut cli = setup_flags();
    let err = cli.parse(["cli-test.js", "-abx"]).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_flag_long_form_and_defaults() {
    let mut cli = setup_flags();
    let params = cli.parse(["cli-test.js", "--alpha"]).unwrap();
    assert_eq!(params.get("a"), Some(&ParamValue::Bool(true)));
    assert_eq!(params.get("b"), Some(&ParamValue::Bool(false)));
    assert_eq!(params.get("c"), Some(&ParamValue::Bool(false)));
}

#[test]
fn test_flag_unknown_long_is_config_error() {
    let mut cli = setup_flags();
    let err = cli.parse(["cli-test.js", "--beta"]).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_option_value_is_not_mistaken_for_flag() {
    let mut cli = setup_flags().with_option(test1());
    let params = cli.parse(["cli-test.js", "-t", "-x", "-b"]).unwrap();
    assert_eq!(params.get_str("test1"), Some("-x"));
    assert!(params.flag("b"));
}

#[test]
fn test_empty_input_is_all_flags_false() {
    let mut cli = setup_flags().with_option(test1());
    let params = cli.parse(["cli-test.js"]).unwrap();
    assert_eq!(params.len(), 3);
    assert!(params.iter().all(|(_, v)| *v == ParamValue::Bool(false)));
}

// ---------------------------------------------------------------------------
// Command groups
// ---------------------------------------------------------------------------

#[test]
fn test_required_command_group_missing() {
    let mut cli = Cli::new().with_command_group(
        CommandGroupSchema::new("action")
            .with_commands(["start", "stop"].map(CommandSchema::new))
            .required(),
    );

    let err = cli.parse(["cli-test.js"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::from(InvalidInputError::MissingCommand {
            group: "action".to_string()
        })
    );
    assert!(cli.parse(["cli-test.js", "restart"]).is_err());
}

#[test]
fn test_optional_command_group_absent() {
    let mut cli = Cli::new().with_command_group(
        CommandGroupSchema::new("action").with_command(CommandSchema::new("start")),
    );
    let params = cli.parse(["cli-test.js"]).unwrap();
    assert!(!params.contains("action"));
}

#[test]
fn test_command_callback_runs_before_group_callback() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let command_log = Arc::clone(&calls);
    let group_log = Arc::clone(&calls);

    let mut cli = Cli::new().with_command_group(
        CommandGroupSchema::new("action")
            .with_command(CommandSchema::new("start").with_callback(move |_, cmd| {
                command_log
                    .lock()
                    .unwrap()
                    .push(format!("command:{}", cmd.name));
            }))
            .with_callback(move |_, cmd| {
                group_log.lock().unwrap().push(format!("group:{}", cmd.name));
            })
            .required(),
    );

    let params = cli.parse(["cli-test.js", "start"]).unwrap();
    assert_eq!(params.get_str("action"), Some("start"));
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["command:start".to_string(), "group:start".to_string()]
    );
}

#[test]
fn test_command_after_options_and_flags() {
    let mut cli = setup_flags().with_option(test1()).with_command_group(
        CommandGroupSchema::new("action")
            .with_commands(["start", "stop"].map(CommandSchema::new))
            .required(),
    );

    let params = cli
        .parse(["cli-test.js", "-ab", "stop", "--test1", "value1"])
        .unwrap();
    assert_eq!(params.get_str("action"), Some("stop"));
    assert_eq!(params.get_str("test1"), Some("value1"));
    assert!(params.flag("a") && params.flag("b") && !params.flag("c"));
}

#[test]
fn test_callback_sees_options_and_flags() {
    let seen = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&seen);

    let mut cli = setup_flags().with_option(test1()).with_command_group(
        CommandGroupSchema::new("action").with_command(CommandSchema::new("start").with_callback(
            move |ctx, _| {
                *slot.lock().unwrap() = Some((
                    ctx.program().map(String::from),
                    ctx.params().get_str("test1").map(String::from),
                    ctx.params().flag("c"),
                ));
            },
        )),
    );

    cli.parse(["cli-test.js", "start", "-c", "-t", "v"]).unwrap();
    assert_eq!(
        *seen.lock().unwrap(),
        Some((Some("cli-test.js".to_string()), Some("v".to_string()), true))
    );
}

// ---------------------------------------------------------------------------
// Leftovers
// ---------------------------------------------------------------------------

#[test]
fn test_leftovers_are_listed() {
    let mut cli = Cli::new().with_command_group(
        CommandGroupSchema::new("action").with_command(CommandSchema::new("start")),
    );
    let err = cli.parse(["cli-test.js", "start", "one", "two"]).unwrap_err();
    assert_eq!(err.to_string(), "invalid extra params supplied: one, two");
}
