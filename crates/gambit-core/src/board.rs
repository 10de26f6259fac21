//! The chess board: piece placement, cached king squares, and the previous move.

use std::fmt;

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete chess position state.
///
/// Cells are written only through [`Board::put`] and [`Board::lift`]; `put`
/// refreshes the cached king square whenever it places a king, so the cache
/// always matches the grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index()`].
    cells: [Option<Piece>; Square::COUNT],
    /// King square for each side, indexed by [`Color::index()`].
    king_squares: [Square; Color::COUNT],
    /// The move played immediately before this position, if any.
    last_move: Option<Move>,
}

impl Board {
    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            board.put(Square::new(0, col), Piece::new(kind, Color::Black));
            board.put(Square::new(1, col), Piece::BLACK_PAWN);
            board.put(Square::new(6, col), Piece::WHITE_PAWN);
            board.put(Square::new(7, col), Piece::new(kind, Color::White));
        }
        board
    }

    /// An empty grid. The king cache points at the kings' home squares until
    /// kings are placed.
    pub(crate) fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
            king_squares: [Square::E1, Square::E8],
            last_move: None,
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return the piece at `(row, col)`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..8`; callers must validate
    /// untrusted coordinates first.
    pub fn piece_at_coords(&self, row: usize, col: usize) -> Option<Piece> {
        assert!(row < 8 && col < 8, "coordinates ({row}, {col}) are off the board");
        self.cells[row * 8 + col]
    }

    /// Return `true` if the given square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Return the cached square of the king for the given side.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Return the move that produced this position, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Iterate over the squares and pieces of one side, in square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color() == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Place a piece, overwriting the square. Keeps the king cache in step.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        if piece.kind() == PieceKind::King {
            self.king_squares[piece.color().index()] = sq;
        }
        self.cells[sq.index()] = Some(piece);
    }

    /// Remove and return the piece on a square.
    #[inline]
    pub(crate) fn lift(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Record the move that produced this position.
    #[inline]
    pub(crate) fn set_last_move(&mut self, mv: Option<Move>) {
        self.last_move = mv;
    }

    /// Overwrite both king squares. Only the undo path uses this.
    #[inline]
    pub(crate) fn restore_king_squares(&mut self, squares: [Square; Color::COUNT]) {
        self.king_squares = squares;
    }

    /// Snapshot of both king squares.
    #[inline]
    pub(crate) fn king_squares(&self) -> [Square; Color::COUNT] {
        self.king_squares
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let kings: Vec<Square> = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .map(|(sq, _)| sq)
                .collect();
            if kings.len() != 1 {
                return Err(BoardError::InvalidKingCount {
                    color,
                    count: kings.len() as u32,
                });
            }
            let cached = self.king_square(color);
            if kings[0] != cached {
                return Err(BoardError::StaleKingSquare { color, cached });
            }
        }

        for sq in Square::all().filter(|sq| sq.row() == 0 || sq.row() == 7) {
            if self.piece_at(sq).is_some_and(|p| p.kind() == PieceKind::Pawn) {
                return Err(BoardError::PawnOnBackRank { square: sq });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            glyphs: false,
            coordinates: true,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ last_move: {:?} }}", self.last_move)?;
        write!(f, "{}", self.pretty())
    }
}

/// Wrapper for printing a board as an 8x8 grid, row 0 first.
///
/// Empty squares print as `.`; pieces print as letters (uppercase White) or,
/// with [`PrettyBoard::glyphs`], as Unicode chess symbols.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    glyphs: bool,
    coordinates: bool,
}

impl PrettyBoard<'_> {
    /// Use Unicode chess symbols instead of letters.
    pub fn glyphs(mut self, glyphs: bool) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Print rank numbers and file letters around the grid.
    pub fn coordinates(mut self, coordinates: bool) -> Self {
        self.coordinates = coordinates;
        self
    }
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            if self.coordinates {
                write!(f, "{}  ", 8 - row)?;
            }
            for col in 0u8..8 {
                let c = match self.board.piece_at(Square::new(row, col)) {
                    Some(piece) if self.glyphs => piece.glyph(),
                    Some(piece) => piece.letter(),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        if self.coordinates {
            writeln!(f, "   a b c d e f g h")?;
        }
        Ok(())
    }
}
