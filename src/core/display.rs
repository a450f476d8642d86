use prettytable::{
    format::consts::FORMAT_BOX_CHARS,
    {Cell, Row, Table},
};
use std::fmt::Display;

/// Renders a matrix as a box-drawn table, one table row per matrix row.
pub fn table<T: Display>(matrix: &[Vec<T>]) -> Table {
    let rows = matrix
        .iter()
        .map(|row| Row::from(row.iter().map(Cell::from)))
        .collect();

    let mut table = Table::init(rows);
    table.set_format(*FORMAT_BOX_CHARS);
    table
}
