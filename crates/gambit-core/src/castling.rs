//! Castling geometry.
//!
//! Castling is identified by the king's destination column on its home row:
//! column 2 castles toward the a-file rook, column 6 toward the h-file rook.

/// Column every castling king starts from.
pub(crate) const KING_START_COL: u8 = 4;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Return the side whose king destination is `col`, if any.
    #[inline]
    pub const fn from_king_dest(col: u8) -> Option<CastleSide> {
        match col {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_dest_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook starts on.
    #[inline]
    pub const fn rook_src_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on (the square the king passes over).
    #[inline]
    pub const fn rook_dest_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Columns between king and rook that must be empty.
    #[inline]
    pub const fn empty_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king passes through or lands on; none may be attacked.
    #[inline]
    pub const fn transit_cols(self) -> [u8; 2] {
        match self {
            CastleSide::KingSide => [5, 6],
            CastleSide::QueenSide => [3, 2],
        }
    }
}
