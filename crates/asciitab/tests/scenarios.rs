//! End-to-end scenarios across mutation and rendering.

use asciitab::{Align, Table, TableError, TableStyle};

fn render_table(table: &Table) -> String {
    let mut out = Vec::new();
    table.render_table(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ============================================================================
// Mutation scenarios
// ============================================================================

#[test]
fn headings_row_then_longer_column() {
    let mut table = Table::with_name("T");
    table.add_column_heading("A");
    table.add_column_heading("B");
    assert_eq!(table.num_columns(), 2);
    assert_eq!(table.field_width(), 1);

    table.add_row(["x", "yy"]).unwrap();
    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.field_width(), 2);

    table.add_column(["p", "q", "r"], "C");
    assert_eq!(table.num_columns(), 3);
    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.row(0).unwrap(), ["x", "yy", "p"]);
    assert_eq!(table.row(1).unwrap(), ["", "", "q"]);
    assert_eq!(table.row(2).unwrap(), ["", "", "r"]);
}

#[test]
fn rejected_row_leaves_table_renderable() {
    let mut table = Table::with_name("T");
    table.replace_all_headings(["A", "B"]).unwrap();
    let before = render_table(&table);

    let err = table.add_row(["a", "b", "c"]).unwrap_err();
    assert!(matches!(err, TableError::SizeMismatch { .. }));
    assert_eq!(render_table(&table), before);
}

// ============================================================================
// Rendering scenarios
// ============================================================================

#[test]
fn grown_table_renders_with_shared_width() {
    let mut table = Table::with_name("T");
    table.add_column_heading("A");
    table.add_column_heading("B");
    table.add_row(["x", "yy"]).unwrap();
    table.add_column(["p", "q", "r"], "C");

    let expected = "\n\
T:\n \
--------\n\
|A |B |C |\n \
--------\n\
|x |yy|p |\n\
|  |  |q |\n\
|  |  |r |\n \
--------\n\
\n";
    assert_eq!(render_table(&table), expected);
}

#[test]
fn styled_table_renders_with_style() {
    let mut table = Table::with_name("Fruit");
    table.replace_all_headings(["Name", "Qty"]).unwrap();
    table.add_row(["apple", "3"]).unwrap();
    table.add_row(["fig", "12"]).unwrap();

    let style = TableStyle::from_yaml(
        r#"
name: Stock
border: "||"
align: left
width: 6
"#,
    )
    .unwrap();
    table.apply_style(&style);

    assert_eq!(table.align(), Align::Left);
    let output = render_table(&table);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Stock:");
    assert_eq!(lines[2], "  --------------");
    assert_eq!(lines[3], "||Name  ||Qty   ||");
    assert_eq!(lines[5], "||apple ||3     ||");
    assert_eq!(lines[6], "||fig   ||12    ||");
}

#[test]
fn column_view_uses_table_alignment() {
    let mut table = Table::new();
    table.replace_all_headings(["Id", "Label"]).unwrap();
    table.add_row(["1", "one"]).unwrap();
    table.add_row(["2", "two"]).unwrap();
    table.set_align(Align::Right);

    let mut out = Vec::new();
    table.render_column(&mut out, 0).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output,
        " -----\n|   Id|\n -----\n|    1|\n|    2|\n -----\n"
    );
}

#[test]
fn rendering_is_read_only() {
    let mut table = Table::with_name("T");
    table.replace_all_headings(["A", "B"]).unwrap();
    table.add_row(["1", "22"]).unwrap();
    let snapshot = table.clone();

    let first = render_table(&table);
    let second = render_table(&table);
    assert_eq!(first, second);

    let mut out = Vec::new();
    table.render_heading_line(&mut out).unwrap();
    table.render_rows(&mut out).unwrap();
    table.render_row(&mut out, 0).unwrap();
    table.render_column(&mut out, 1).unwrap();
    assert_eq!(table, snapshot);
}

#[test]
fn empty_table_renders_frame_only() {
    let table = Table::new();
    assert_eq!(render_table(&table), "\nTable:\n \n\n \n \n\n");
}
