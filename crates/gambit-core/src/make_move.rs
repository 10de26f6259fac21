//! Move execution via make-unmake.
//!
//! Every move is first applied inside a [`Trial`]: a guard holding the
//! board and an [`Undo`] record. Dropping the guard reverts the move, so a
//! rejected move can never leave the board half-changed. Only
//! [`Trial::commit`] keeps it.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::board::Board;
use crate::chess_move::{Move, MoveKind, Promotion, PromotionChooser};
use crate::color::Color;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Everything an applied move overwrote.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Undo {
    mv: Move,
    /// The moving piece as it stood on the source square.
    piece: Piece,
    /// Captured piece and the square it was taken from (differs from the
    /// destination for en passant).
    captured: Option<(Square, Piece)>,
    /// Castling rook: source, destination, and the rook as it stood.
    rook: Option<(Square, Square, Piece)>,
    king_squares: [Square; Color::COUNT],
    last_move: Option<Move>,
}

impl Undo {
    /// The captured piece, if any.
    pub(crate) fn captured(&self) -> Option<Piece> {
        self.captured.map(|(_, piece)| piece)
    }
}

/// Outcome of a successfully executed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The move that was played.
    pub mv: Move,
    /// How the move was classified.
    pub kind: MoveKind,
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    /// The piece removed from the board, if any.
    pub captured: Option<Piece>,
    /// The promotion chosen, if the move was a pawn reaching its last row.
    pub promotion: Option<Promotion>,
}

/// A move applied to a board that reverts itself when dropped.
pub(crate) struct Trial<'a> {
    board: &'a mut Board,
    undo: Option<Undo>,
}

impl<'a> Trial<'a> {
    /// Apply `mv` of the given kind. `piece` must be the piece on the source
    /// square and `kind` what [`Board::classify`] returned for the move.
    pub(crate) fn begin(board: &'a mut Board, mv: Move, kind: MoveKind, piece: Piece) -> Trial<'a> {
        let undo = board.apply(mv, kind, piece);
        Trial {
            board,
            undo: Some(undo),
        }
    }

    /// Replace the pawn that just reached its last row.
    pub(crate) fn promote(&mut self, kind: PieceKind) {
        if let Some(undo) = &self.undo {
            let dst = undo.mv.dest();
            let promoted = Piece::new(kind, undo.piece.color()).moved();
            self.board.lift(dst);
            self.board.put(dst, promoted);
        }
    }

    /// Keep the move and hand back its undo record.
    pub(crate) fn commit(mut self) -> Option<Undo> {
        self.undo.take()
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.board.revert(&undo);
        }
    }
}

/// Return `true` if moving `piece` to `dst` lands on its promotion row.
#[inline]
fn promotes(piece: Piece, dst: Square) -> bool {
    piece.kind() == PieceKind::Pawn && dst.row() == piece.color().promotion_row()
}

impl Board {
    /// Attempt to play `src -> dst` for `mover`.
    ///
    /// Checks run in order: the source must hold a piece, the piece must
    /// belong to `mover`, the geometry must allow the move, and the move must
    /// not leave `mover`'s king attacked. On any failure the board is exactly
    /// as it was. A pawn reaching its last row asks `chooser` for the
    /// replacement piece.
    pub fn try_apply_move(
        &mut self,
        src: Square,
        dst: Square,
        mover: Color,
        chooser: &mut impl PromotionChooser,
    ) -> Result<MoveRecord, MoveError> {
        let mv = Move::new(src, dst);
        let Some(piece) = self.piece_at(src) else {
            debug!(%mv, "rejected: empty source");
            return Err(MoveError::EmptySource { square: src });
        };
        if piece.color() != mover {
            debug!(%mv, owner = %piece.color(), "rejected: wrong color");
            return Err(MoveError::WrongColor {
                square: src,
                owner: piece.color(),
            });
        }
        let Some(kind) = self.classify(src, dst) else {
            debug!(%mv, "rejected: illegal geometry");
            return Err(MoveError::IllegalGeometry { from: src, to: dst });
        };

        let mut trial = Trial::begin(self, mv, kind, piece);
        if trial.is_in_check(mover) {
            debug!(%mv, %mover, "rejected: king left in check");
            return Err(MoveError::OwnKingExposed {
                from: src,
                to: dst,
                mover,
            });
        }

        let promotion = promotes(piece, dst).then(|| {
            let choice = chooser.choose(mover, dst);
            trial.promote(choice.to_piece_kind());
            choice
        });
        let captured = trial.commit().and_then(|undo| undo.captured());

        debug!(%mv, ?kind, ?captured, ?promotion, "move applied");
        Ok(MoveRecord {
            mv,
            kind,
            piece,
            captured,
            promotion,
        })
    }

    /// Return `true` if `color` has at least one move that does not leave its
    /// own king attacked.
    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut scratch = self.clone();
        for (mv, kind, piece) in self.candidates(color) {
            let trial = Trial::begin(&mut scratch, mv, kind, piece);
            if !trial.is_in_check(color) {
                return true;
            }
        }
        false
    }

    /// Every legal move for `color`, in source-then-destination square order.
    ///
    /// A promoting pawn move appears once; the piece is chosen when it is played.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut scratch = self.clone();
        self.candidates(color)
            .into_iter()
            .filter(|&(mv, kind, piece)| {
                let trial = Trial::begin(&mut scratch, mv, kind, piece);
                !trial.is_in_check(color)
            })
            .map(|(mv, _, _)| mv)
            .collect()
    }

    /// Return `true` if `color` is in check and has no legal move.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Return `true` if `color` is not in check but has no legal move.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// All geometrically legal moves for `color`, before the king-safety test.
    pub(crate) fn candidates(&self, color: Color) -> Vec<(Move, MoveKind, Piece)> {
        let mut out = Vec::new();
        for (src, piece) in self.pieces(color) {
            for dst in Square::all() {
                if let Some(kind) = self.classify(src, dst) {
                    out.push((Move::new(src, dst), kind, piece));
                }
            }
        }
        out
    }

    /// Apply a classified move, marking the moved pieces and recording it as
    /// the last move.
    fn apply(&mut self, mv: Move, kind: MoveKind, piece: Piece) -> Undo {
        let (src, dst) = (mv.source(), mv.dest());
        let king_squares = self.king_squares();
        let last_move = self.last_move();

        let captured_sq = match kind {
            MoveKind::EnPassant => src.with_col(dst.col()),
            _ => dst,
        };
        let captured = self.lift(captured_sq).map(|victim| (captured_sq, victim));

        self.lift(src);
        self.put(dst, piece.moved());

        let rook = match kind {
            MoveKind::Castle(side) => {
                let rook_src = src.with_col(side.rook_src_col());
                let rook_dst = src.with_col(side.rook_dest_col());
                self.lift(rook_src).map(|rook| {
                    self.put(rook_dst, rook.moved());
                    (rook_src, rook_dst, rook)
                })
            }
            _ => None,
        };

        self.set_last_move(Some(mv));
        Undo {
            mv,
            piece,
            captured,
            rook,
            king_squares,
            last_move,
        }
    }

    /// Put back everything `apply` changed.
    fn revert(&mut self, undo: &Undo) {
        let (src, dst) = (undo.mv.source(), undo.mv.dest());
        self.lift(dst);
        self.put(src, undo.piece);
        if let Some((sq, victim)) = undo.captured {
            self.put(sq, victim);
        }
        if let Some((rook_src, rook_dst, rook)) = undo.rook {
            self.lift(rook_dst);
            self.put(rook_src, rook);
        }
        self.restore_king_squares(undo.king_squares);
        self.set_last_move(undo.last_move);
    }
}
