//! Attack and check detection.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

impl Board {
    /// Return `true` if any piece of `by_color` attacks `sq`.
    ///
    /// Scans every piece of the attacking side and asks [`Board::attacks`]
    /// whether it reaches `sq`. Squares holding `by_color`'s own pieces count
    /// as attacked when defended.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        self.pieces(by_color)
            .any(|(from, _)| self.attacks(from, sq))
    }

    /// Return `true` if the king of `color` is attacked.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.flip())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::builder::BoardBuilder;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn is_square_attacked_starting() {
        let board = Board::starting_position();
        // e2 is defended by White pieces (king, queen, bishop).
        assert!(board.is_square_attacked(Square::E2, Color::White));
        // e4 is not attacked by anyone in the starting position.
        assert!(!board.is_square_attacked(Square::E4, Color::White));
        assert!(!board.is_square_attacked(Square::E4, Color::Black));
        // Pawns attack the row in front of them.
        assert!(board.is_square_attacked(Square::D3, Color::White));
        assert!(board.is_square_attacked(Square::H6, Color::Black));
    }

    #[test]
    fn is_square_attacked_knight() {
        let board = Board::starting_position();
        // f3 attacked by the white knight on g1.
        assert!(board.is_square_attacked(Square::F3, Color::White));
        // f6 attacked by the black knight on g8.
        assert!(board.is_square_attacked(Square::F6, Color::Black));
    }

    #[test]
    fn nobody_in_check_at_start() {
        let board = Board::starting_position();
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }

    #[test]
    fn rook_check_and_block() {
        let checked = BoardBuilder::new()
            .piece(Square::E1, Piece::WHITE_KING)
            .piece(Square::E8, Piece::BLACK_KING)
            .piece(Square::A1, Piece::BLACK_ROOK)
            .build()
            .unwrap();
        assert!(checked.is_in_check(Color::White));
        assert!(!checked.is_in_check(Color::Black));

        let blocked = BoardBuilder::new()
            .piece(Square::E1, Piece::WHITE_KING)
            .piece(Square::E8, Piece::BLACK_KING)
            .piece(Square::A1, Piece::BLACK_ROOK)
            .piece(Square::C1, Piece::WHITE_BISHOP)
            .build()
            .unwrap();
        assert!(!blocked.is_in_check(Color::White));
    }

    #[test]
    fn pawn_check_is_diagonal() {
        let diagonal = BoardBuilder::new()
            .piece(Square::E1, Piece::WHITE_KING)
            .piece(Square::E8, Piece::BLACK_KING)
            .piece(Square::D7, Piece::WHITE_PAWN)
            .build()
            .unwrap();
        assert!(diagonal.is_in_check(Color::Black));

        let straight = BoardBuilder::new()
            .piece(Square::E1, Piece::WHITE_KING)
            .piece(Square::E8, Piece::BLACK_KING)
            .piece(Square::E7, Piece::WHITE_PAWN)
            .build()
            .unwrap();
        assert!(!straight.is_in_check(Color::Black));
    }

    #[test]
    fn knight_check() {
        let board = BoardBuilder::new()
            .piece(Square::E1, Piece::WHITE_KING)
            .piece(Square::E8, Piece::BLACK_KING)
            .piece(Square::F3, Piece::BLACK_KNIGHT)
            .build()
            .unwrap();
        assert!(board.is_in_check(Color::White));
    }
}
