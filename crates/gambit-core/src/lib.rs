//! Core chess types: board representation, move rules, and game state.

mod board;
mod builder;
mod castling;
mod check;
mod chess_move;
mod color;
mod error;
mod game;
mod make_move;
mod perft;
mod piece;
mod piece_kind;
mod square;
mod validate;

pub use board::{Board, PrettyBoard};
pub use builder::BoardBuilder;
pub use castling::CastleSide;
pub use chess_move::{Move, MoveKind, Promotion, PromotionChooser};
pub use color::Color;
pub use error::{BoardError, MoveError};
pub use game::{Game, GameStatus, MoveReport};
pub use make_move::MoveRecord;
pub use perft::{PositionCounts, count_from, count_from_with, divide};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
