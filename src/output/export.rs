//! Text export of the raw and processed series.
//!
//! ```text
//! Raw Data:
//! 1
//! 2.5
//!
//! Processed Data:
//! 1.5
//! 2
//! ```
//!
//! Values use the default `f64` display formatting, one per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

pub fn write_series<W: Write>(writer: &mut W, raw: &[f64], processed: &[f64]) -> Result<()> {
    writeln!(writer, "Raw Data:")?;
    for value in raw {
        writeln!(writer, "{}", value)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Processed Data:")?;
    for value in processed {
        writeln!(writer, "{}", value)?;
    }

    Ok(())
}

pub fn save_series<P: AsRef<Path>>(path: P, raw: &[f64], processed: &[f64]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_series(&mut writer, raw, processed)?;
    writer.flush()?;
    log::info!("Saved series to {}", path.as_ref().display());
    Ok(())
}
