//! Plain-text help rendering.
//!
//! Produces a usage line followed by aligned sections listing every
//! registered option, flag and command group. Lines are not wrapped.

use argschema_core::{Arity, CliSchema, OptionSchema, ValueType};

/// Renders help text for `schema`.
///
/// `program` overrides the schema's own name in the usage line.
pub fn render_help(schema: &CliSchema, program: Option<&str>) -> String {
    let program = program
        .or(schema.name.as_deref())
        .unwrap_or("program");
    let mut out = format!("Usage: {}\n", usage_line(schema, program));

    if let Some(desc) = &schema.description {
        out.push_str(&format!("\n{desc}\n"));
    }

    if !schema.options.is_empty() {
        let rows = schema
            .options
            .iter()
            .map(|opt| {
                let left = format!("{} {}", markers(&opt.short, opt.long.as_deref()), value_hint(opt));
                (left, described(opt.description.as_deref(), opt.required))
            })
            .collect::<Vec<_>>();
        push_section(&mut out, "Options", &rows);
    }

    if !schema.flags.is_empty() {
        let rows = schema
            .flags
            .iter()
            .map(|flag| {
                (
                    markers(&flag.short, flag.long.as_deref()),
                    flag.description.clone().unwrap_or_default(),
                )
            })
            .collect::<Vec<_>>();
        push_section(&mut out, "Flags", &rows);
    }

    if !schema.command_groups.is_empty() {
        let mut rows = Vec::new();
        for group in &schema.command_groups {
            rows.push((
                group.name.clone(),
                described(group.description.as_deref(), group.required),
            ));
            for command in &group.commands {
                rows.push((
                    format!("  {}", command.name),
                    command.description.clone().unwrap_or_default(),
                ));
            }
        }
        push_section(&mut out, "Commands", &rows);
    }

    out
}

fn usage_line(schema: &CliSchema, program: &str) -> String {
    let mut parts = vec![program.to_string()];
    for opt in schema.options.iter().filter(|o| o.required) {
        parts.push(format!("{} {}", opt.short, value_hint(opt)));
    }
    if schema.options.iter().any(|o| !o.required) {
        parts.push("[options]".to_string());
    }
    if !schema.flags.is_empty() {
        parts.push("[flags]".to_string());
    }
    for group in &schema.command_groups {
        if group.required {
            parts.push(format!("<{}>", group.name));
        } else {
            parts.push(format!("[{}]", group.name));
        }
    }
    parts.join(" ")
}

fn markers(short: &str, long: Option<&str>) -> String {
    match long {
        Some(long) => format!("{short}, {long}"),
        None => short.to_string(),
    }
}

fn value_hint(opt: &OptionSchema) -> String {
    let name = match opt.value_type {
        ValueType::String => "value",
        ValueType::Number => "number",
    };
    match opt.arity {
        Arity::ExactlyOne | Arity::Fixed(1) => format!("<{name}>"),
        Arity::Fixed(n) => format!("<{name}> x{n}"),
        Arity::ZeroOrMore => format!("[{name}]..."),
        Arity::OneOrMore => format!("<{name}>..."),
    }
}

fn described(description: Option<&str>, required: bool) -> String {
    match (description, required) {
        (Some(desc), true) => format!("{desc} (required)"),
        (Some(desc), false) => desc.to_string(),
        (None, true) => "(required)".to_string(),
        (None, false) => String::new(),
    }
}

fn push_section(out: &mut String, title: &str, rows: &[(String, String)]) {
    let width = rows.iter().map(|(left, _)| left.chars().count()).max().unwrap_or(0);
    out.push_str(&format!("\n{title}:\n"));
    for (left, right) in rows {
        let line = format!("  {left:<width$}  {right}");
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
