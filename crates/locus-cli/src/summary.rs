use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use locus_transform::any_to_string;

/// Print a preview of the frame to stdout, followed by its shape.
pub fn print_frame(df: &DataFrame, preview_rows: usize) {
    let shown = df.height().min(preview_rows);
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    let columns = df.get_columns();
    for idx in 0..shown {
        let row: Vec<Cell> = columns
            .iter()
            .map(|column| value_cell(any_to_string(column.get(idx).unwrap_or(AnyValue::Null))))
            .collect();
        table.add_row(row);
    }
    println!("{table}");
    if shown < df.height() {
        println!("({shown} of {} rows shown)", df.height());
    }
    println!("{} rows x {} columns", df.height(), df.width());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: String) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
