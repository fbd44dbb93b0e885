use miette::Diagnostic;
use thiserror::Error;

/// Everything that can go wrong while reading a board.
///
/// All of these are detected eagerly during parsing, before any traversal
/// starts; exploration itself cannot fail.
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("missing the {name} before the board")]
    #[diagnostic(code(grid_explorer::malformed_input))]
    MissingDimension { name: &'static str },

    #[error("expected an integer for the {name}, got {token:?}")]
    #[diagnostic(code(grid_explorer::malformed_input))]
    BadDimensionToken { name: &'static str, token: String },

    #[error("board dimensions must be positive, got {cols} x {rows}")]
    #[diagnostic(code(grid_explorer::malformed_input))]
    NonPositiveDimensions { cols: i64, rows: i64 },

    #[error("board declares {expected} cells but only {found} symbols were supplied")]
    #[diagnostic(code(grid_explorer::malformed_input))]
    TruncatedGrid { expected: usize, found: usize },

    #[error("unrecognized symbol {symbol:?} at row {row}, column {col}")]
    #[diagnostic(code(grid_explorer::malformed_input))]
    UnrecognizedSymbol { symbol: char, row: usize, col: usize },

    #[error("no player start 'P' in the board")]
    #[diagnostic(code(grid_explorer::missing_start))]
    MissingStart,

    #[error("second player start 'P' at row {row}, column {col}")]
    #[diagnostic(code(grid_explorer::malformed_input))]
    DuplicateStart { row: usize, col: usize },
}
