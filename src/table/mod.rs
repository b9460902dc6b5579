//! Truth-table data produced by the evaluator
//!
//! A [`TruthTable`] is an ordered list of [`ResultRow`]s, one per
//! [`Assignment`] of the expression's variables. Rows are stored in counting
//! order with the first (alphabetically smallest) variable as the most
//! significant bit.
//!
//! Rendering lives in [`format`]; the table's [`Display`](std::fmt::Display)
//! impl produces the bordered text layout.

pub mod format;

use std::fmt;

/// Values of every variable for one row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<(char, bool)>,
}

impl Assignment {
    /// Build the assignment for row `index` of a table over `variables`.
    ///
    /// `variables[0]` takes the highest bit of `index`.
    pub fn from_index(variables: &[char], index: usize) -> Self {
        let count = variables.len();
        let values = variables
            .iter()
            .enumerate()
            .map(|(i, &name)| (name, (index >> (count - 1 - i)) & 1 == 1))
            .collect();
        Assignment { values }
    }

    /// Value of `name`, or `None` if it is not part of this assignment
    pub fn get(&self, name: char) -> Option<bool> {
        self.values
            .iter()
            .find(|(var, _)| *var == name)
            .map(|&(_, value)| value)
    }

    /// `(variable, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One line of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub assignment: Assignment,
    pub result: bool,
}

impl ResultRow {
    pub fn new(assignment: Assignment, result: bool) -> Self {
        ResultRow { assignment, result }
    }
}

/// What a complete truth table says about its expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// True under every assignment
    Tautology,
    /// False under every assignment
    Contradiction,
    /// True under some assignments and false under others
    Contingent,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "tautology"),
            Classification::Contradiction => write!(f, "contradiction"),
            Classification::Contingent => write!(f, "contingent"),
        }
    }
}

/// Complete truth table for one expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    expression: String,
    variables: Vec<char>,
    rows: Vec<ResultRow>,
}

impl TruthTable {
    pub fn new(expression: String, variables: Vec<char>, rows: Vec<ResultRow>) -> Self {
        TruthTable {
            expression,
            variables,
            rows,
        }
    }

    /// Display form of the expression this table was built from
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Result column only, in row order
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// Rows as 0/1 vectors: one entry per variable, then the result
    pub fn values_matrix(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| {
                row.assignment
                    .iter()
                    .map(|(_, value)| u8::from(value))
                    .chain(std::iter::once(u8::from(row.result)))
                    .collect()
            })
            .collect()
    }

    pub fn classification(&self) -> Classification {
        if self.results().all(|result| result) {
            Classification::Tautology
        } else if self.results().all(|result| !result) {
            Classification::Contradiction
        } else {
            Classification::Contingent
        }
    }

    /// Number of rows that evaluate to true
    pub fn true_count(&self) -> usize {
        self.results().filter(|&result| result).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_bit_order() {
        let vars = ['A', 'B', 'C'];
        let assignment = Assignment::from_index(&vars, 0b100);
        assert_eq!(assignment.get('A'), Some(true));
        assert_eq!(assignment.get('B'), Some(false));
        assert_eq!(assignment.get('C'), Some(false));
        assert_eq!(assignment.get('D'), None);

        let assignment = Assignment::from_index(&vars, 0b011);
        let values: Vec<bool> = assignment.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![false, true, true]);
    }

    #[test]
    fn test_empty_assignment() {
        let assignment = Assignment::from_index(&[], 0);
        assert!(assignment.is_empty());
        assert_eq!(assignment.len(), 0);
    }

    fn table_with_results(results: &[bool]) -> TruthTable {
        let vars = vec!['A', 'B'];
        let rows = results
            .iter()
            .enumerate()
            .map(|(i, &r)| ResultRow::new(Assignment::from_index(&vars, i), r))
            .collect();
        TruthTable::new("test".to_string(), vars, rows)
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            table_with_results(&[true, true, true, true]).classification(),
            Classification::Tautology
        );
        assert_eq!(
            table_with_results(&[false, false, false, false]).classification(),
            Classification::Contradiction
        );
        assert_eq!(
            table_with_results(&[false, true, true, true]).classification(),
            Classification::Contingent
        );
    }

    #[test]
    fn test_values_matrix() {
        let table = table_with_results(&[false, true, true, false]);
        assert_eq!(
            table.values_matrix(),
            vec![
                vec![0, 0, 0],
                vec![0, 1, 1],
                vec![1, 0, 1],
                vec![1, 1, 0],
            ]
        );
        assert_eq!(table.true_count(), 2);
    }
}
