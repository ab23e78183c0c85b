//! Output formatting for CLI responses.

use serde::Serialize;

/// Prints a success message.
pub fn print_success(message: &str) {
    eprintln!("[OK] {message}");
}

/// Pretty-prints a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
