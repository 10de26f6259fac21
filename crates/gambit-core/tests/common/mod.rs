//! Shared helpers for gambit-core integration tests.

#![allow(dead_code)]

use gambit_core::{Board, BoardBuilder, Color, Piece, PieceKind, Square};

/// Kiwipete: castling, en passant and pins all within two plies.
pub const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

/// Sparse endgame with a rook pin along the fourth rank.
pub const ROOK_ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8";

/// Build a board from a diagram: rows from the top separated by `/`,
/// digits for runs of empty squares, uppercase White, lowercase Black.
///
/// Every piece starts unmoved.
pub fn diagram(placement: &str) -> BoardBuilder {
    let mut builder = BoardBuilder::new();
    for (row, line) in placement.split('/').enumerate() {
        let mut col = 0u8;
        for c in line.chars() {
            if let Some(run) = c.to_digit(10) {
                col += run as u8;
                continue;
            }
            let kind = PieceKind::from_letter(c).expect("piece letter");
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            builder = builder.piece(Square::new(row as u8, col), Piece::new(kind, color));
            col += 1;
        }
    }
    builder
}

/// [`diagram`] built and validated.
pub fn board(placement: &str) -> Board {
    diagram(placement).build().expect("valid diagram")
}
