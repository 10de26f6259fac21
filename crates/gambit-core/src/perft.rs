//! Move-tree enumeration for move legality verification.
//!
//! Counts are cumulative over every ply: a position reached at depth 1 and
//! one reached at depth 3 both add to `positions`. Transpositions are
//! counted once per path.

use std::ops::AddAssign;

use tracing::trace;

use crate::board::Board;
use crate::chess_move::{MoveKind, Promotion};
use crate::color::Color;
use crate::make_move::Trial;
use crate::piece_kind::PieceKind;

/// Tallies gathered while walking the move tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionCounts {
    /// Positions reached by a legal move.
    pub positions: u64,
    /// Moves that removed a piece, en passant included.
    pub captures: u64,
    /// Positions where the side to move is in check.
    pub checks: u64,
    /// Checks with no legal reply.
    pub checkmates: u64,
    /// Positions without check and without a legal move.
    pub stalemates: u64,
}

impl PositionCounts {
    /// Add another tally into this one.
    pub fn merge(&mut self, rhs: PositionCounts) {
        self.positions += rhs.positions;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
        self.stalemates += rhs.stalemates;
    }
}

impl AddAssign for PositionCounts {
    fn add_assign(&mut self, rhs: PositionCounts) {
        self.merge(rhs);
    }
}

/// Count every position reachable from `board` in `1..=depth` moves, `side`
/// moving first. Pawns reaching the last row become queens.
///
/// The board is identical to its starting state when this returns.
/// Depth 0 counts nothing.
pub fn count_from(board: &mut Board, depth: usize, side: Color) -> PositionCounts {
    count_from_with(board, depth, side, Promotion::Queen)
}

/// [`count_from`] with an explicit piece for every promotion.
pub fn count_from_with(
    board: &mut Board,
    depth: usize,
    side: Color,
    promotion: Promotion,
) -> PositionCounts {
    let mut counts = PositionCounts::default();
    walk(board, depth, side, promotion, &mut counts);
    counts
}

/// Run the enumeration with a per-move breakdown (useful for debugging).
///
/// Returns `(move, counts)` pairs sorted by move text; each entry covers the
/// root move itself plus everything below it.
pub fn divide(
    board: &mut Board,
    depth: usize,
    side: Color,
    promotion: Promotion,
) -> Vec<(String, PositionCounts)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut results = Vec::new();
    for (mv, kind, piece) in board.candidates(side) {
        let mut trial = Trial::begin(board, mv, kind, piece);
        if trial.is_in_check(side) {
            continue;
        }
        let mut counts = PositionCounts::default();
        visit(&mut trial, kind, piece.kind(), depth, side, promotion, &mut counts);
        results.push((mv.to_string(), counts));
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

fn walk(board: &mut Board, depth: usize, side: Color, promotion: Promotion, counts: &mut PositionCounts) {
    if depth == 0 {
        return;
    }
    for (mv, kind, piece) in board.candidates(side) {
        let mut trial = Trial::begin(board, mv, kind, piece);
        if trial.is_in_check(side) {
            continue;
        }
        trace!(%mv, depth, "enumerating");
        visit(&mut trial, kind, piece.kind(), depth, side, promotion, counts);
    }
}

/// Tally the position a trial produced and descend below it.
fn visit(
    trial: &mut Trial<'_>,
    kind: MoveKind,
    moved: PieceKind,
    depth: usize,
    side: Color,
    promotion: Promotion,
    counts: &mut PositionCounts,
) {
    let dst = trial.last_move().map(|mv| mv.dest());
    if moved == PieceKind::Pawn && dst.is_some_and(|sq| sq.row() == side.promotion_row()) {
        trial.promote(promotion.to_piece_kind());
    }

    let them = side.flip();
    counts.positions += 1;
    if kind.is_capture() {
        counts.captures += 1;
    }
    let in_check = trial.is_in_check(them);
    if in_check {
        counts.checks += 1;
    }
    if !trial.has_legal_move(them) {
        if in_check {
            counts.checkmates += 1;
        } else {
            counts.stalemates += 1;
        }
        return;
    }
    walk(trial, depth - 1, them, promotion, counts);
}
