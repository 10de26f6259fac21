//! Move representation, move classification, and promotion choice.

use std::fmt;

use crate::castling::CastleSide;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const SRC_MASK: u16 = 0x003F;
const DST_MASK: u16 = 0x0FC0;
const DST_SHIFT: u32 = 6;

/// A move from one square to another, encoded in 16 bits.
///
/// ```text
/// bits  0-5:  source square      (0-63)
/// bits  6-11: destination square (0-63)
/// ```
///
/// The move carries no kind information: how it executes (capture, en
/// passant, castling) depends on the board it is played on and is reported
/// by [`Board::classify`](crate::Board::classify).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Create a move between two squares.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move((source.index() as u16) | ((dest.index() as u16) << DST_SHIFT))
    }

    /// Extract the source square.
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    /// Extract the destination square.
    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }

    /// Return `true` if the move stays on one column and covers exactly two rows.
    pub const fn is_two_row_advance(self) -> bool {
        let (src, dst) = (self.source(), self.dest());
        src.col() == dst.col() && src.row().abs_diff(dst.row()) == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source(), self.dest())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

/// How a geometrically legal move executes on a particular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Onto an empty square.
    Quiet,
    /// Onto a square holding an enemy piece.
    Capture,
    /// A pawn's two-square first move.
    DoublePush,
    /// A pawn capture of the pawn that just passed it.
    EnPassant,
    /// King and rook move together.
    Castle(CastleSide),
}

impl MoveKind {
    /// Return `true` if the move removes an enemy piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }
}

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Promotion {
    Knight,
    Bishop,
    Rook,
    #[default]
    Queen,
}

impl Promotion {
    /// All promotion choices.
    pub const ALL: [Promotion; 4] = [
        Promotion::Knight,
        Promotion::Bishop,
        Promotion::Rook,
        Promotion::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            Promotion::Knight => PieceKind::Knight,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Queen => PieceKind::Queen,
        }
    }

    /// Parse one of `Q`, `R`, `N`, `B` (case-insensitive).
    pub fn from_letter(c: char) -> Option<Promotion> {
        match PieceKind::from_letter(c)? {
            PieceKind::Knight => Some(Promotion::Knight),
            PieceKind::Bishop => Some(Promotion::Bishop),
            PieceKind::Rook => Some(Promotion::Rook),
            PieceKind::Queen => Some(Promotion::Queen),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_piece_kind().letter())
    }
}

/// Supplies the promotion piece when a pawn reaches the far rank.
///
/// The engine asks only after the move has been found legal. A fixed
/// [`Promotion`] value always answers with itself; closures can prompt a user.
pub trait PromotionChooser {
    /// Pick the piece for the `color` pawn that just arrived on `square`.
    fn choose(&mut self, color: Color, square: Square) -> Promotion;
}

impl PromotionChooser for Promotion {
    fn choose(&mut self, _color: Color, _square: Square) -> Promotion {
        *self
    }
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color, Square) -> Promotion,
{
    fn choose(&mut self, color: Color, square: Square) -> Promotion {
        self(color, square)
    }
}
