//! Status command for showing today's total.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use tasbeeh_core::{Clock, DailyAggregate, settings};
use tasbeeh_db::Database;

pub fn run<W: Write>(
    writer: &mut W,
    db: &Database,
    clock: impl Clock,
    database_path: &Path,
) -> Result<()> {
    let mut daily = DailyAggregate::new(db, clock);
    daily.load_or_rollover();
    let target = settings::load_default_target(db);

    writeln!(writer, "Tasbeeh status")?;
    writeln!(writer, "Database: {}", database_path.display())?;
    writeln!(writer, "Date: {}", daily.date())?;
    writeln!(writer, "Today: {}", daily.total())?;
    writeln!(writer, "Default target: {target}")?;

    Ok(())
}
