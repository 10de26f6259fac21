//! Fluent builder for setting up positions piece by piece.
//!
//! ```
//! use gambit_core::{BoardBuilder, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::E1, Piece::WHITE_KING)
//!     .piece(Square::E8, Piece::BLACK_KING)
//!     .piece(Square::E2, Piece::WHITE_PAWN)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_at(Square::E2), Some(Piece::WHITE_PAWN));
//! ```

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::square::Square;

/// A fluent builder for constructing [`Board`] positions.
///
/// Pieces are placed unmoved unless given with [`Piece::moved`]; an unmoved
/// king on column 4 next to an unmoved rook in the corner may castle.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    last_move: Option<Move>,
}

impl BoardBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding the standard starting position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::starting_position();
        let pieces = Square::all()
            .filter_map(|sq| board.piece_at(sq).map(|p| (sq, p)))
            .collect();
        BoardBuilder {
            pieces,
            last_move: None,
        }
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove whatever stands on a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Record the move that led to the position (enables en passant replies).
    #[must_use]
    pub fn last_move(mut self, mv: Move) -> Self {
        self.last_move = Some(mv);
        self
    }

    /// Build and validate the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (sq, piece) in self.pieces {
            board.put(sq, piece);
        }
        board.set_last_move(self.last_move);
        board.validate()?;
        Ok(board)
    }
}
