//! Add command for user-defined azkar.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use tasbeeh_core::{Category, catalog};
use tasbeeh_db::Database;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// List to add to.
    #[arg(long)]
    pub category: Category,
    /// How many times the dhikr is repeated.
    #[arg(long, default_value_t = 1)]
    pub count: u32,
    /// The dhikr text.
    pub text: String,
}

pub fn run<W: Write>(writer: &mut W, db: &Database, args: &AddArgs) -> Result<()> {
    let entry = catalog::add_custom_azkar(db, args.category, &args.text, args.count)
        .context("failed to add dhikr")?;
    writeln!(
        writer,
        "Added {} to {} azkar (x{})",
        entry.id,
        args.category,
        entry.count.unwrap_or(1)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_command_persists_entry() {
        let db = Database::open_in_memory().unwrap();
        let args = AddArgs {
            category: Category::Evening,
            count: 3,
            text: "حسبي الله لا إله إلا هو".to_string(),
        };
        let mut output = Vec::new();

        run(&mut output, &db, &args).unwrap();

        let entries = catalog::load_azkar(&db, Category::Evening);
        let added = entries.last().unwrap();
        assert_eq!(added.text, args.text);
        assert_eq!(added.count, Some(3));

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, format!("Added {} to evening azkar (x3)\n", added.id));
    }

    #[test]
    fn add_command_rejects_blank_text() {
        let db = Database::open_in_memory().unwrap();
        let args = AddArgs {
            category: Category::Morning,
            count: 1,
            text: "  ".to_string(),
        };
        let err = run(&mut Vec::new(), &db, &args).unwrap_err();
        assert!(format!("{err:#}").contains("dhikr text cannot be empty"));
    }
}
