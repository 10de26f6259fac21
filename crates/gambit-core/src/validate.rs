//! Per-piece move geometry.
//!
//! Every predicate here takes `&self`: deciding legality never touches the
//! board. Turn order and own-king safety are the executor's concern.

use crate::board::Board;
use crate::castling::{CastleSide, KING_START_COL};
use crate::chess_move::MoveKind;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Signed `(d_row, d_col)` from `src` to `dst`.
#[inline]
fn delta(src: Square, dst: Square) -> (i8, i8) {
    (
        dst.row() as i8 - src.row() as i8,
        dst.col() as i8 - src.col() as i8,
    )
}

#[inline]
fn is_knight_jump(d_row: i8, d_col: i8) -> bool {
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

#[inline]
fn is_king_step(d_row: i8, d_col: i8) -> bool {
    d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
}

#[inline]
fn is_diagonal(d_row: i8, d_col: i8) -> bool {
    d_row.abs() == d_col.abs() && d_row != 0
}

#[inline]
fn is_straight(d_row: i8, d_col: i8) -> bool {
    (d_row == 0) != (d_col == 0)
}

impl Board {
    /// Return how the piece on `src` would move to `dst`, or `None` if its
    /// geometry forbids it.
    ///
    /// Rejects self-moves, empty sources, and destinations holding a piece of
    /// the mover's color. Castling additionally requires that the king is
    /// not in check and does not pass through or land on an attacked square.
    pub fn classify(&self, src: Square, dst: Square) -> Option<MoveKind> {
        if src == dst {
            return None;
        }
        let piece = self.piece_at(src)?;
        let plain = match self.piece_at(dst) {
            Some(target) if target.color() == piece.color() => return None,
            Some(_) => MoveKind::Capture,
            None => MoveKind::Quiet,
        };
        let (d_row, d_col) = delta(src, dst);

        match piece.kind() {
            PieceKind::Pawn => self.classify_pawn(src, dst, piece),
            PieceKind::Knight => is_knight_jump(d_row, d_col).then_some(plain),
            PieceKind::Bishop => {
                (is_diagonal(d_row, d_col) && self.path_clear(src, dst)).then_some(plain)
            }
            PieceKind::Rook => {
                (is_straight(d_row, d_col) && self.path_clear(src, dst)).then_some(plain)
            }
            PieceKind::Queen => {
                let line = is_diagonal(d_row, d_col) || is_straight(d_row, d_col);
                (line && self.path_clear(src, dst)).then_some(plain)
            }
            PieceKind::King => {
                if is_king_step(d_row, d_col) {
                    Some(plain)
                } else {
                    self.castle_side(src, dst, piece).map(MoveKind::Castle)
                }
            }
        }
    }

    /// Return `true` if the piece on `src` may move to `dst` by its movement
    /// rules, ignoring whose turn it is and own-king safety.
    #[inline]
    pub fn is_legal_geometry(&self, src: Square, dst: Square) -> bool {
        self.classify(src, dst).is_some()
    }

    /// Return `true` if the piece on `src` could capture on `target` in one move.
    ///
    /// Unlike [`Board::classify`] this ignores what stands on `target`: pawns
    /// use their diagonal capture pattern even onto empty squares, and
    /// castling never attacks.
    pub fn attacks(&self, src: Square, target: Square) -> bool {
        let Some(piece) = self.piece_at(src) else {
            return false;
        };
        let (d_row, d_col) = delta(src, target);
        match piece.kind() {
            PieceKind::Pawn => d_row == piece.color().pawn_direction() && d_col.abs() == 1,
            PieceKind::Knight => is_knight_jump(d_row, d_col),
            PieceKind::Bishop => is_diagonal(d_row, d_col) && self.path_clear(src, target),
            PieceKind::Rook => is_straight(d_row, d_col) && self.path_clear(src, target),
            PieceKind::Queen => {
                (is_diagonal(d_row, d_col) || is_straight(d_row, d_col))
                    && self.path_clear(src, target)
            }
            PieceKind::King => is_king_step(d_row, d_col),
        }
    }

    /// Return the square of the pawn a pawn on `src` would capture en passant
    /// by moving to the empty square `dst`.
    ///
    /// The victim must be an enemy pawn beside `src` in `dst`'s column that
    /// arrived there by a two-row advance on the immediately preceding move.
    pub(crate) fn en_passant_victim(&self, src: Square, dst: Square, color: Color) -> Option<Square> {
        let victim_sq = src.with_col(dst.col());
        let victim = self.piece_at(victim_sq)?;
        let last = self.last_move()?;
        let passed = victim.is(PieceKind::Pawn, !color)
            && last.dest() == victim_sq
            && last.is_two_row_advance();
        passed.then_some(victim_sq)
    }

    fn classify_pawn(&self, src: Square, dst: Square, pawn: Piece) -> Option<MoveKind> {
        let color = pawn.color();
        let dir = color.pawn_direction();
        let (d_row, d_col) = delta(src, dst);

        match (d_row, d_col.abs()) {
            (r, 0) if r == dir => self.is_empty(dst).then_some(MoveKind::Quiet),
            (r, 0) if r == 2 * dir => {
                let between = src.offset(dir, 0)?;
                let first_move = !pawn.has_moved() && src.row() == color.pawn_row();
                (first_move && self.is_empty(between) && self.is_empty(dst))
                    .then_some(MoveKind::DoublePush)
            }
            (r, 1) if r == dir => {
                if !self.is_empty(dst) {
                    Some(MoveKind::Capture)
                } else {
                    self.en_passant_victim(src, dst, color)
                        .map(|_| MoveKind::EnPassant)
                }
            }
            _ => None,
        }
    }

    /// Castling side for an unmoved king on its home square moving two columns.
    fn castle_side(&self, src: Square, dst: Square, king: Piece) -> Option<CastleSide> {
        let color = king.color();
        if king.has_moved()
            || src.row() != color.home_row()
            || dst.row() != src.row()
            || src.col() != KING_START_COL
        {
            return None;
        }
        let side = CastleSide::from_king_dest(dst.col())?;

        if side.empty_cols().iter().any(|&col| !self.is_empty(src.with_col(col))) {
            return None;
        }
        let rook = self.piece_at(src.with_col(side.rook_src_col()))?;
        if !rook.is(PieceKind::Rook, color) || rook.has_moved() {
            return None;
        }

        let them = !color;
        if self.is_square_attacked(src, them) {
            return None;
        }
        if side
            .transit_cols()
            .iter()
            .any(|&col| self.is_square_attacked(src.with_col(col), them))
        {
            return None;
        }
        Some(side)
    }

    /// Return `true` if every square strictly between `src` and `dst` is
    /// empty. The squares must share a row, column or diagonal.
    fn path_clear(&self, src: Square, dst: Square) -> bool {
        let (d_row, d_col) = delta(src, dst);
        let (step_row, step_col) = (d_row.signum(), d_col.signum());
        let mut cursor = src.offset(step_row, step_col);
        while let Some(sq) = cursor {
            if sq == dst {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            cursor = sq.offset(step_row, step_col);
        }
        false
    }
}
