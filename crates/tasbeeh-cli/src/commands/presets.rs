//! Presets command for listing selectable dhikr.

use std::io::Write;

use anyhow::Result;

use tasbeeh_core::{Category, CatalogEntry, catalog};
use tasbeeh_db::Database;

pub fn run<W: Write>(writer: &mut W, db: &Database, category: Option<Category>) -> Result<()> {
    let entries = match category {
        Some(category) => catalog::load_azkar(db, category),
        None => catalog::presets(),
    };
    write_entries(writer, &entries)
}

fn write_entries<W: Write>(writer: &mut W, entries: &[CatalogEntry]) -> Result<()> {
    writeln!(writer, "{:<38} {:>5}  TEXT", "ID", "COUNT")?;
    for entry in entries {
        let count = entry
            .count
            .map_or_else(|| "-".to_string(), |c| c.to_string());
        writeln!(writer, "{:<38} {:>5}  {}", entry.id.as_str(), count, entry.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(output: Vec<u8>) -> Vec<String> {
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn presets_lists_builtin_grid() {
        let db = Database::open_in_memory().unwrap();
        let mut output = Vec::new();
        run(&mut output, &db, None).unwrap();

        let lines = lines(output);
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("1 "));
        assert!(lines[1].ends_with("-  سبحان الله"));
    }

    #[test]
    fn presets_for_category_include_custom() {
        let db = Database::open_in_memory().unwrap();
        catalog::add_custom_azkar(&db, Category::Morning, "custom morning", 4).unwrap();
        let mut output = Vec::new();
        run(&mut output, &db, Some(Category::Morning)).unwrap();

        let lines = lines(output);
        assert_eq!(lines.len(), catalog::builtin_azkar(Category::Morning).len() + 2);
        assert!(lines.last().unwrap().ends_with("    4  custom morning"));
    }
}
