//! Error types for move attempts and board construction.

use crate::color::Color;
use crate::square::Square;

/// Why a proposed move was rejected. The board is unchanged after any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A coordinate lies outside `0..8`.
    #[error("source or destination square is out of bounds")]
    OutOfBounds,
    /// The source square holds no piece.
    #[error("there is no piece at {square}")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
    /// The source piece belongs to the other side.
    #[error("the piece on {square} belongs to {owner}")]
    WrongColor {
        /// The source square.
        square: Square,
        /// The color of the piece found there.
        owner: Color,
    },
    /// The piece cannot move that way, or its path is blocked.
    #[error("the piece on {from} cannot move to {to}")]
    IllegalGeometry {
        /// The source square.
        from: Square,
        /// The destination square.
        to: Square,
    },
    /// Completing the move would leave the mover's king attacked.
    #[error("moving {from}{to} leaves the {mover} king in check")]
    OwnKingExposed {
        /// The source square.
        from: Square,
        /// The destination square.
        to: Square,
        /// The side that tried to move.
        mover: Color,
    },
    /// The game already ended in checkmate or stalemate.
    #[error("the game is over")]
    GameOver,
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// A pawn stands on row 0 or row 7.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn was found.
        square: Square,
    },
    /// The cached king square does not hold that side's king.
    #[error("cached {color} king square {cached} does not hold the king")]
    StaleKingSquare {
        /// Whose cache is wrong.
        color: Color,
        /// The cached square.
        cached: Square,
    },
}
