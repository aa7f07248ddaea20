//! Terminal output.
//!
//! Values returned by the service go to stdout so they can be piped; status
//! lines are decorated and errors go to stderr.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field of a status report.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print one entity descriptor of a listing, with its group if it has one.
pub fn descriptor(name: &str, group: Option<&str>) {
    match group {
        Some(group) => println!("{} {}", name, format!("({group})").dimmed()),
        None => println!("{name}"),
    }
}

/// Print a service value. Strings are printed bare, everything else as
/// indented JSON.
pub fn value(value: &Value) -> Result<()> {
    match value {
        Value::String(text) => println!("{text}"),
        other => json_pretty(other)?,
    }
    Ok(())
}

/// Print a value as one line of JSON.
pub fn json_line<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
