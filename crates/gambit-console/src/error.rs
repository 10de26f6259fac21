//! Console session errors.

/// Errors that can occur while reading and interpreting console input.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A move was not four characters of file-rank-file-rank.
    #[error("invalid move format: {input}")]
    InvalidMoveFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// A move named a file or rank outside the board.
    #[error("square out of bounds in move: {input}")]
    OutOfBounds {
        /// The text that named the square.
        input: String,
    },

    /// The depth for `count` or `divide` was missing or not a number.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// `set` named an option the session does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as typed.
        name: String,
    },

    /// `set` gave an option a value it cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
