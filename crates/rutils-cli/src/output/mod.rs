//! Output helpers shared by the commands.

pub mod diagnostic;
pub mod table;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

pub use diagnostic::RutilsDiagnostic;

/// Print `value` to stdout as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{json}");
    Ok(())
}
