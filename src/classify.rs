//! Standalone re-classification pass over an existing CSV.
//!
//! Header-agnostic and purely positional: the first column is the title,
//! the last column the category. Only rows still carrying the sentinel
//! category are touched, which makes the pass idempotent.

use std::path::PathBuf;

use anyhow::Context as _;

use crate::brands;
use crate::cli::ClassifyArgs;
use crate::store::{self, Table};

pub fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    let input = PathBuf::from(&args.input);
    let output = args.out.map_or_else(|| input.clone(), PathBuf::from);

    let mut table =
        store::read_all(&input).with_context(|| format!("read {}", input.display()))?;
    let updated = reclassify(&mut table);
    tracing::info!(rows = table.rows.len(), updated, "reclassified categories");

    store::write_all(&output, &table).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

/// Replace the sentinel category in each row's last column with a brand
/// lookup over the row's first column. Returns the number of rows changed.
pub fn reclassify(table: &mut Table) -> usize {
    let mut updated = 0;

    for row in &mut table.rows {
        if row.last().map(String::as_str) != Some(brands::DEFAULT_CATEGORY) {
            continue;
        }

        let category = brands::classify(&row[0]);
        if category == brands::DEFAULT_CATEGORY {
            // stable fixed point: no brand matched, sentinel stays
            continue;
        }

        let last = row.len() - 1;
        row[last] = category.to_owned();
        updated += 1;
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, category: &str) -> Vec<String> {
        vec![title.to_owned(), "serial".to_owned(), category.to_owned()]
    }

    fn sample_table() -> Table {
        Table {
            header: vec!["Title".into(), "Serial".into(), "Bike Type".into()],
            rows: vec![
                row("Trek Domane SL6", "Other"),
                row("Unbranded Frame", "Other"),
                row("Norco Storm", "Cruiser Bike"),
            ],
        }
    }

    #[test]
    fn only_sentinel_rows_are_reclassified() {
        let mut table = sample_table();
        assert_eq!(reclassify(&mut table), 1);

        assert_eq!(table.rows[0][2], "Road Bike");
        // no brand match keeps the sentinel
        assert_eq!(table.rows[1][2], "Other");
        // already-classified rows pass through untouched, even when the
        // brand lookup would now disagree
        assert_eq!(table.rows[2][2], "Cruiser Bike");
    }

    #[test]
    fn reclassify_is_idempotent() {
        let mut table = sample_table();
        reclassify(&mut table);
        let once = table.clone();

        assert_eq!(reclassify(&mut table), 0);
        assert_eq!(table, once);
    }

    #[test]
    fn run_rewrites_the_file_in_place() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bikes.csv");
        std::fs::write(&path, "Title,Type\nTrek Domane,Other\nMystery,Other\n")?;

        let args = crate::cli::ClassifyArgs {
            input: path.display().to_string(),
            out: None,
        };
        run(args)?;

        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(contents, "Title,Type\nTrek Domane,Road Bike\nMystery,Other\n");
        Ok(())
    }

    #[test]
    fn second_run_produces_byte_identical_output() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bikes.csv");
        std::fs::write(
            &path,
            "Title,Serial,Colors,Date,Location,Type\n\
             Giant Talon 2,G123,Black,2024-01-02,Ottawa,Other\n\
             Unknown ride,,,,,Other\n",
        )?;

        let args = || crate::cli::ClassifyArgs {
            input: path.display().to_string(),
            out: None,
        };

        run(args())?;
        let first = std::fs::read(&path)?;
        run(args())?;
        assert_eq!(std::fs::read(&path)?, first);
        Ok(())
    }
}
