//! A game in progress: one board, whose turn it is, and how things stand.

use tracing::{debug, info};

use crate::board::Board;
use crate::chess_move::PromotionChooser;
use crate::color::Color;
use crate::error::MoveError;
use crate::make_move::MoveRecord;
use crate::square::Square;

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Evaluate the position for `side`, the side about to move.
    pub fn of(board: &Board, side: Color) -> GameStatus {
        let in_check = board.is_in_check(side);
        match (in_check, board.has_legal_move(side)) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Return `true` once no further moves may be played.
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// An accepted move and the status it left the opponent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub record: MoveRecord,
    pub status: GameStatus,
}

/// Owns the board and enforces turn order.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
}

impl Game {
    /// A new game from the starting position, White to move.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), Color::White)
    }

    /// Continue from an arbitrary position.
    pub fn from_board(board: Board, side_to_move: Color) -> Game {
        let status = GameStatus::of(&board, side_to_move);
        Game {
            board,
            side_to_move,
            status,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for analysis that restores the board, such as enumeration.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The side that delivered checkmate, if the game ended that way.
    pub fn winner(&self) -> Option<Color> {
        (self.status == GameStatus::Checkmate).then(|| self.side_to_move.flip())
    }

    /// Start over from the starting position.
    pub fn reset(&mut self) {
        info!("new game");
        *self = Game::new();
    }

    /// Play a move for the side to move. On success the turn passes to the
    /// other side and the returned status describes their position.
    pub fn play(
        &mut self,
        src: Square,
        dst: Square,
        chooser: &mut impl PromotionChooser,
    ) -> Result<MoveReport, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let record = self
            .board
            .try_apply_move(src, dst, self.side_to_move, chooser)?;
        self.side_to_move = self.side_to_move.flip();
        self.status = GameStatus::of(&self.board, self.side_to_move);
        if self.status.is_over() {
            info!(status = ?self.status, "game over");
        } else {
            debug!(status = ?self.status, to_move = %self.side_to_move, "turn passed");
        }
        Ok(MoveReport {
            record,
            status: self.status,
        })
    }

    /// [`Game::play`] from raw `(row, col)` coordinates, rejecting anything
    /// off the board with [`MoveError::OutOfBounds`].
    pub fn play_coords(
        &mut self,
        src_row: i32,
        src_col: i32,
        dst_row: i32,
        dst_col: i32,
        chooser: &mut impl PromotionChooser,
    ) -> Result<MoveReport, MoveError> {
        let src = Square::from_coords(src_row, src_col).ok_or(MoveError::OutOfBounds)?;
        let dst = Square::from_coords(dst_row, dst_col).ok_or(MoveError::OutOfBounds)?;
        self.play(src, dst, chooser)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
