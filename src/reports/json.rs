use crate::view::Dashboard;
use std::io::{Result, Write};

/// Write the dashboard as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing to `writer` fails
pub fn generate<W: Write>(dashboard: &Dashboard, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, dashboard)?;
    writeln!(writer)
}
