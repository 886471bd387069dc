// src/output.rs
use crate::error::PricerResult;
use crate::table::PricingTable;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Header line of visible column names, then one line per row
pub fn write_table_csv<W: Write>(mut out: W, table: &PricingTable) -> io::Result<()> {
    writeln!(out, "{}", table.column_names().join(","))?;
    for row in table.rows() {
        let line: Vec<String> = row
            .select(table.columns())
            .iter()
            .map(|v| v.to_string())
            .collect();
        writeln!(out, "{}", line.join(","))?;
    }
    Ok(())
}

/// Write `table` to a CSV file, preceded by one `# ` line per comment
pub fn write_table_to_csv(
    filename: impl AsRef<Path>,
    table: &PricingTable,
    comments: &[String],
) -> PricerResult<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    for comment in comments {
        writeln!(file, "# {}", comment)?;
    }
    write_table_csv(&mut file, table)?;
    file.flush()?;
    Ok(())
}

/// Array of objects keyed by the visible column names.
///
/// Non-finite values have no JSON representation and become `null`.
pub fn table_to_json(table: &PricingTable) -> PricerResult<String> {
    let names = table.column_names();
    let records: Vec<Value> = table
        .rows()
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (name, value) in names.iter().zip(row.select(table.columns())) {
                obj.insert((*name).to_string(), Value::from(value));
            }
            Value::Object(obj)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
