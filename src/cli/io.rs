//! JSON output for CLI commands
//!
//! One pretty-printed JSON value per command, written to stdout.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a JSON value to stdout followed by a newline
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    write_json_to(&mut stdout, value)
}

fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_ends_with_newline() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &json!({"initialized": true})).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["initialized"], true);
    }
}
