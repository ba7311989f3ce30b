// Text tables for opaque backend records, rendered with comfy-table.
// Columns follow the order in which keys first appear across the rows,
// so heterogeneous records still line up.

use crate::api::ProductRecord;
use comfy_table::{ContentArrangement, Table};
use serde_json::{Map, Value};

/// Shown in place of a table when a fetched collection is empty.
pub const EMPTY_TABLE: &str = "Sin registros";

/// Column holding rows that are not JSON objects.
pub const VALUE_COLUMN: &str = "value";

/// Collect the union of keys across `records`, first-seen order. Any
/// non-object row contributes the `value` column.
pub fn columns(records: &[ProductRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    let mut push = |key: &str| {
        if !columns.iter().any(|c| c == key) {
            columns.push(key.to_string());
        }
    };
    for record in records {
        match record {
            Value::Object(fields) => fields.keys().for_each(|k| push(k)),
            _ => push(VALUE_COLUMN),
        }
    }
    columns
}

/// Display form of a single cell.
pub fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn row_cell(record: &ProductRecord, column: &str) -> String {
    match record {
        Value::Object(fields) => cell(fields.get(column)),
        other if column == VALUE_COLUMN => cell(Some(other)),
        _ => String::new(),
    }
}

/// Render records as a table. `width` enables wrapping to the terminal
/// width; without it the table is laid out at its natural size.
pub fn render_records(records: &[ProductRecord], width: Option<u16>) -> String {
    if records.is_empty() {
        return EMPTY_TABLE.to_string();
    }
    let header = columns(records);
    let mut table = new_table(width);
    table.set_header(&header);
    for record in records {
        let row: Vec<String> = header.iter().map(|c| row_cell(record, c)).collect();
        table.add_row(row);
    }
    table.to_string()
}

/// Render one analysis section as received. A list is a table of rows,
/// `null` is an empty table and any other value is a single row.
pub fn render_section(section: &Value, width: Option<u16>) -> String {
    match section {
        Value::Array(rows) => render_records(rows, width),
        Value::Null => EMPTY_TABLE.to_string(),
        single => render_records(std::slice::from_ref(single), width),
    }
}

/// Two-column table of the scalar entries in `fields`. Returns `None`
/// when there is nothing scalar to show.
pub fn render_summary(fields: &Map<String, Value>, width: Option<u16>) -> Option<String> {
    let scalars: Vec<(&String, &Value)> = fields
        .iter()
        .filter(|(_, v)| !matches!(v, Value::Array(_) | Value::Object(_)))
        .collect();
    if scalars.is_empty() {
        return None;
    }
    let mut table = new_table(width);
    for (key, value) in scalars {
        table.add_row(vec![key.clone(), cell(Some(value))]);
    }
    Some(table.to_string())
}

fn new_table(width: Option<u16>) -> Table {
    let mut table = Table::new();
    if let Some(width) = width {
        table.set_width(width);
        table.set_content_arrangement(ContentArrangement::Dynamic);
    }
    table
}
