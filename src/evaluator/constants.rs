// Constants for truth-table generation

/// Largest number of distinct variables a truth table is built for.
/// Tables grow as 2^n rows, so anything above this is refused up front.
pub const MAX_VARIABLES: usize = 5;
