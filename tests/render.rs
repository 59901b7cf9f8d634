use plaintable::{Cell, Result, TableBuilder, TableError};

fn sample_table() -> Result<TableBuilder> {
    let mut table = TableBuilder::new(vec!["a", "bb"]);
    table
        .add_row(1, vec![Cell::from("x"), Cell::from("yy")])?
        .add_row(22, vec![Cell::nil(), Cell::from("z")])?;
    Ok(table)
}

#[test]
fn renders_aligned_block_through_public_api() {
    let table = sample_table().unwrap();

    let expected = concat!("idx   a  bb \n", "  1   x  yy \n", " 22 nil   z \n");
    assert_eq!(table.render(), expected);
    assert_eq!(table.to_string(), expected);
}

#[test]
fn malformed_row_is_reported_and_skipped() {
    let mut table = sample_table().unwrap();
    let before = table.render();

    let err = table.add_row(3, vec!["too", "many", "cells"]).unwrap_err();
    assert_eq!(
        err,
        TableError::RowLengthMismatch {
            expected: 2,
            actual: 3
        }
    );

    assert_eq!(table.render(), before);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn grows_between_renders() {
    let mut table = TableBuilder::with_index_name("step", vec!["status"]);
    assert_eq!(table.render(), "step status \n");

    table.add_row(1, vec!["ok"]).unwrap();
    assert_eq!(table.render(), "step status \n   1     ok \n");
}
