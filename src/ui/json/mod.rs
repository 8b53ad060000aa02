//! NDJSON output
//!
//! One JSON object per line; every object carries an `event` field.

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write + ?Sized>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
