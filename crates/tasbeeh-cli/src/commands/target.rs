//! Target command for changing the default repetition count.

use std::io::Write;

use anyhow::{Context, Result};

use tasbeeh_core::{Target, settings};
use tasbeeh_db::Database;

pub fn run<W: Write>(writer: &mut W, db: &Database, target: Target) -> Result<()> {
    settings::save_default_target(db, target).context("failed to save default target")?;
    let kind = if target.is_quick_pick() { "" } else { " (custom)" };
    writeln!(writer, "Default target set to {target}{kind}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_command_persists_value() {
        let db = Database::open_in_memory().unwrap();
        let mut output = Vec::new();

        run(&mut output, &db, Target::new(50).unwrap()).unwrap();

        assert_eq!(settings::load_default_target(&db).get(), 50);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Default target set to 50 (custom)\n"
        );
    }

    #[test]
    fn target_command_quick_pick() {
        let db = Database::open_in_memory().unwrap();
        let mut output = Vec::new();

        run(&mut output, &db, Target::new(1000).unwrap()).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Default target set to 1000\n");
    }
}
