//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands compute a
//! serialisable report first and render it afterwards, so the report
//! builders can be tested without capturing stdout.

use std::io::{self, Write};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

pub mod asian;
pub mod bond;
pub mod diagnose;
pub mod european;
pub mod series;

/// Writes `report` as pretty JSON or through the command's table renderer.
pub(crate) fn render<T, W, F>(out: &mut W, format: OutputFormat, report: &T, table: F) -> Result<()>
where
    T: Serialize,
    W: Write,
    F: FnOnce(&mut W, &T) -> io::Result<()>,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => table(out, report)?,
    }
    Ok(())
}

/// Renders `report` to stdout.
pub(crate) fn emit<T, F>(format: OutputFormat, report: &T, table: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&mut io::StdoutLock<'static>, &T) -> io::Result<()>,
{
    let mut stdout = io::stdout().lock();
    render(&mut stdout, format, report, table)?;
    stdout.flush()?;
    Ok(())
}
