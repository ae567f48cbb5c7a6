use thiserror::Error;

/// Everything that can abort a conversion. There is no recovery: the first
/// error ends the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bitmap row that is not a single hexadecimal byte.
    #[error("line {line}: bitmap row {text:?} is not a hex byte")]
    MalformedRow { line: usize, text: String },

    /// Input ended inside a `BITMAP` block.
    #[error("line {line}: input ended after {rows_read} of 16 bitmap rows")]
    Truncated { line: usize, rows_read: usize },
}
