use thiserror::Error;

/// An error that happened when configuring or querying a word grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The board has a zero width or height.
    #[error("Board dimensions {width} columns x {height} rows must both be positive")]
    InvalidBoardSize {
        /// The requested number of columns.
        width: usize,
        /// The requested number of rows.
        height: usize,
    },

    /// The alignment configuration has every shape category switched off.
    #[error("Alignment configuration enables no placement shapes")]
    NoShapesEnabled,

    /// A word in the word list has no characters.
    #[error("Word at index {0} is empty")]
    EmptyWord(usize),

    /// Block placement is enabled but a word has a length that no rectangle in the block table can hold.
    #[error("Block placement is enabled but word {word:?} has unsupported length {len}")]
    UnsupportedBlockLength {
        /// The offending word.
        word: String,
        /// Its length in characters.
        len: usize,
    },

    /// A coordinate outside the board was queried.
    #[error("Coordinate ({row}, {col}) is outside the {height} rows x {width} columns board")]
    OutOfBounds {
        /// Queried row.
        row: usize,
        /// Queried column.
        col: usize,
        /// Board width.
        width: usize,
        /// Board height.
        height: usize,
    },
}
