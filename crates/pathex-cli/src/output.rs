use serde::Serialize;

use crate::cli::OutputFormat;

/// Print a value as pretty JSON.
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print `lines` raw, or the serialized value as JSON.
pub fn emit<T: Serialize>(format: OutputFormat, value: &T, lines: &[String]) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => json(value),
        OutputFormat::Raw => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
    }
}
