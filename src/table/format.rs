//! Plain-text rendering of a truth table
//!
//! ```text
//! +---+---+-----+
//! | A | C | A+C |
//! +---+---+-----+
//! | 0 | 0 | 0   |
//! | 0 | 1 | 1   |
//! | 1 | 0 | 1   |
//! | 1 | 1 | 1   |
//! +---+---+-----+
//! ```
//!
//! Each variable gets a three-character column; the last column is as wide
//! as the expression's display form plus padding.

use super::TruthTable;
use std::fmt::{self, Write};

fn bit(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}

/// Top and bottom border
fn border_line(out: &mut String, columns: usize, width: usize) {
    out.push('+');
    out.push_str(&"---+".repeat(columns));
    out.push_str(&"-".repeat(width));
    out.push_str("--+\n");
}

fn header(out: &mut String, table: &TruthTable, width: usize) -> fmt::Result {
    border_line(out, table.variables().len(), width);
    for var in table.variables() {
        write!(out, "| {} ", var)?;
    }
    writeln!(out, "| {} |", table.expression())?;
    out.push_str(&"+---".repeat(table.variables().len()));
    out.push('+');
    out.push_str(&"-".repeat(width));
    out.push_str("--+\n");
    Ok(())
}

/// Render the whole table as bordered text, one line per row
pub fn render_text(table: &TruthTable) -> Result<String, fmt::Error> {
    let width = table.expression().chars().count();
    let mut out = String::new();

    header(&mut out, table, width)?;
    for row in table.rows() {
        for (_, value) in row.assignment.iter() {
            write!(out, "| {} ", bit(value))?;
        }
        writeln!(out, "| {}{}|", bit(row.result), " ".repeat(width))?;
    }
    border_line(&mut out, table.variables().len(), width);

    Ok(out)
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_text(self)?)
    }
}
