//! End-to-end rule scenarios through the public API.

mod common;

use gambit_core::{
    BoardBuilder, CastleSide, Color, Game, GameStatus, Move, MoveError, MoveKind, Piece,
    PieceKind, Promotion, Square,
};

use common::board;

// ── Opening move ──────────────────────────────────────────────────────────────

#[test]
fn e2e4_from_start() {
    let mut game = Game::new();
    let report = game
        .play_coords(6, 4, 4, 4, &mut Promotion::Queen)
        .unwrap();
    assert_eq!(report.status, GameStatus::Ongoing);
    assert!(!game.board().is_in_check(Color::Black));
    assert_eq!(game.board().piece_at_coords(4, 4), Some(Piece::WHITE_PAWN.moved()));
    assert_eq!(game.board().piece_at_coords(6, 4), None);
}

// ── King on an open file ──────────────────────────────────────────────────────

fn king_facing_rook() -> Game {
    let board = BoardBuilder::new()
        .piece(Square::E1, Piece::WHITE_KING)
        .piece(Square::E8, Piece::BLACK_ROOK)
        .piece(Square::A8, Piece::BLACK_KING)
        .build()
        .unwrap();
    Game::from_board(board, Color::White)
}

#[test]
fn king_may_not_stay_on_the_file() {
    let mut game = king_facing_rook();
    let before = game.board().clone();

    let first = game.play(Square::E1, Square::E2, &mut Promotion::Queen);
    let second = game.play(Square::E1, Square::E2, &mut Promotion::Queen);
    let expected = Err(MoveError::OwnKingExposed {
        from: Square::E1,
        to: Square::E2,
        mover: Color::White,
    });
    // Same answer twice, and nothing moved in between.
    assert_eq!(first, expected);
    assert_eq!(second, expected);
    assert_eq!(game.board(), &before);
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn king_may_step_off_the_file() {
    for dst in [Square::D1, Square::F1, Square::D2, Square::F2] {
        let mut game = king_facing_rook();
        let report = game.play(Square::E1, dst, &mut Promotion::Queen).unwrap();
        assert_eq!(report.record.kind, MoveKind::Quiet);
        assert_eq!(game.board().king_square(Color::White), dst);
    }
}

// ── En passant ────────────────────────────────────────────────────────────────

#[test]
fn en_passant_removes_the_passed_pawn() {
    let board = BoardBuilder::new()
        .piece(Square::E1, Piece::WHITE_KING)
        .piece(Square::E8, Piece::BLACK_KING)
        .piece(Square::E5, Piece::WHITE_PAWN.moved())
        .piece(Square::D7, Piece::BLACK_PAWN)
        .build()
        .unwrap();
    let mut game = Game::from_board(board, Color::Black);
    game.play(Square::D7, Square::D5, &mut Promotion::Queen).unwrap();
    assert_eq!(game.board().last_move(), Some(Move::new(Square::D7, Square::D5)));

    assert!(game.board().is_empty(Square::D6));
    let report = game.play(Square::E5, Square::D6, &mut Promotion::Queen).unwrap();
    assert_eq!(report.record.kind, MoveKind::EnPassant);
    assert_eq!(report.record.captured, Some(Piece::BLACK_PAWN.moved()));
    assert_eq!(game.board().piece_at(Square::D6), Some(Piece::WHITE_PAWN.moved()));
    assert!(game.board().is_empty(Square::D5));
    assert!(game.board().is_empty(Square::E5));
}

#[test]
fn attack_queries_never_remove_pieces() {
    let board = BoardBuilder::new()
        .piece(Square::E1, Piece::WHITE_KING)
        .piece(Square::E8, Piece::BLACK_KING)
        .piece(Square::E5, Piece::WHITE_PAWN.moved())
        .piece(Square::D5, Piece::BLACK_PAWN.moved())
        .last_move(Move::new(Square::D7, Square::D5))
        .build()
        .unwrap();
    let before = board.clone();
    assert!(board.is_legal_geometry(Square::E5, Square::D6));
    let _ = board.is_square_attacked(Square::D6, Color::White);
    let _ = board.is_in_check(Color::Black);
    let _ = board.legal_moves(Color::White);
    assert_eq!(board, before);
}

// ── Castling ──────────────────────────────────────────────────────────────────

#[test]
fn kingside_castling_moves_both_pieces() {
    let board = BoardBuilder::new()
        .piece(Square::E1, Piece::WHITE_KING)
        .piece(Square::H1, Piece::WHITE_ROOK)
        .piece(Square::E8, Piece::BLACK_KING)
        .build()
        .unwrap();
    let mut game = Game::from_board(board, Color::White);
    let report = game.play(Square::E1, Square::G1, &mut Promotion::Queen).unwrap();

    assert_eq!(report.record.kind, MoveKind::Castle(CastleSide::KingSide));
    assert_eq!(game.board().piece_at(Square::G1), Some(Piece::WHITE_KING.moved()));
    assert_eq!(game.board().piece_at(Square::F1), Some(Piece::WHITE_ROOK.moved()));
    assert!(game.board().is_empty(Square::E1));
    assert!(game.board().is_empty(Square::H1));
}

#[test]
fn castling_rejected_through_attacked_square() {
    // The rook on f8 covers f1.
    let board = BoardBuilder::new()
        .piece(Square::E1, Piece::WHITE_KING)
        .piece(Square::H1, Piece::WHITE_ROOK)
        .piece(Square::A1, Piece::WHITE_ROOK)
        .piece(Square::F8, Piece::BLACK_ROOK)
        .piece(Square::B8, Piece::BLACK_KING)
        .build()
        .unwrap();
    let mut game = Game::from_board(board, Color::White);
    let before = game.board().clone();
    assert_eq!(
        game.play(Square::E1, Square::G1, &mut Promotion::Queen),
        Err(MoveError::IllegalGeometry {
            from: Square::E1,
            to: Square::G1
        })
    );
    assert_eq!(game.board(), &before);
    game.play(Square::E1, Square::C1, &mut Promotion::Queen).unwrap();
    assert_eq!(game.board().piece_at(Square::D1), Some(Piece::WHITE_ROOK.moved()));
}

#[test]
fn castling_rejected_after_rook_moved() {
    let mut game = Game::from_board(board("4k3/p7/8/8/8/8/8/4K2R"), Color::White);
    let mut queen = Promotion::Queen;
    game.play(Square::H1, Square::H2, &mut queen).unwrap();
    game.play(Square::A7, Square::A6, &mut queen).unwrap();
    game.play(Square::H2, Square::H1, &mut queen).unwrap();
    game.play(Square::A6, Square::A5, &mut queen).unwrap();

    assert!(matches!(
        game.play(Square::E1, Square::G1, &mut queen),
        Err(MoveError::IllegalGeometry { .. })
    ));
}

// ── Checkmate and stalemate ───────────────────────────────────────────────────

#[test]
fn queen_and_rook_mate() {
    // Queen on g7 guarded by the rook on g1.
    let mated = board("7k/6Q1/8/8/8/8/8/K5R1");
    assert!(mated.is_in_check(Color::Black));
    assert!(mated.is_checkmate(Color::Black));

    // Without the rook the king simply takes the queen.
    let escapes = BoardBuilder::new()
        .piece(Square::H8, Piece::BLACK_KING)
        .piece(Square::G7, Piece::WHITE_QUEEN)
        .piece(Square::A1, Piece::WHITE_KING)
        .build()
        .unwrap();
    assert!(escapes.is_in_check(Color::Black));
    assert!(!escapes.is_checkmate(Color::Black));
    assert_eq!(escapes.legal_moves(Color::Black), vec![Move::new(Square::H8, Square::G7)]);
}

#[test]
fn stalemate_ends_the_game_as_a_draw() {
    let mut game = Game::from_board(board("k7/2Q5/8/8/8/8/8/2K5"), Color::White);
    let report = game.play(Square::C7, Square::B6, &mut Promotion::Queen).unwrap();
    assert_eq!(report.status, GameStatus::Stalemate);
    assert!(game.board().is_stalemate(Color::Black));
    assert!(!game.board().is_checkmate(Color::Black));
    assert_eq!(game.winner(), None);
    assert_eq!(
        game.play(Square::A8, Square::A7, &mut Promotion::Queen),
        Err(MoveError::GameOver)
    );
}

// ── Pawn pushes ───────────────────────────────────────────────────────────────

#[test]
fn double_push_boundaries() {
    // Unmoved pawn on its starting row with both squares ahead empty.
    let open = board("4k3/8/8/8/8/8/4P3/4K3");
    assert!(open.is_legal_geometry(Square::E2, Square::E4));

    // Blocked one square ahead.
    let near = board("4k3/8/8/8/8/4n3/4P3/4K3");
    assert!(!near.is_legal_geometry(Square::E2, Square::E4));

    // Blocked two squares ahead.
    let far = board("4k3/8/8/8/4n3/8/4P3/4K3");
    assert!(!far.is_legal_geometry(Square::E2, Square::E4));
    assert!(far.is_legal_geometry(Square::E2, Square::E3));

    // Any other row, moved or not.
    let advanced = board("4k3/8/8/8/8/4P3/8/4K3");
    assert!(!advanced.is_legal_geometry(Square::E3, Square::E5));
    let black = board("4k3/8/3p4/8/8/8/8/4K3");
    assert!(!black.is_legal_geometry(Square::D6, Square::D4));
}

#[test]
fn pawn_cannot_double_push_twice() {
    let mut game = Game::new();
    let mut queen = Promotion::Queen;
    game.play(Square::A2, Square::A3, &mut queen).unwrap();
    game.play(Square::H7, Square::H6, &mut queen).unwrap();
    assert!(matches!(
        game.play(Square::A3, Square::A5, &mut queen),
        Err(MoveError::IllegalGeometry { .. })
    ));
}

// ── Promotion ─────────────────────────────────────────────────────────────────

#[test]
fn every_promotion_choice() {
    for choice in Promotion::ALL {
        let mut game = Game::from_board(board("8/4P3/8/8/8/8/8/K6k"), Color::White);
        let report = game.play(Square::E7, Square::E8, &mut { choice }).unwrap();
        assert_eq!(report.record.promotion, Some(choice));

        let promoted = game.board().piece_at(Square::E8).unwrap();
        assert_eq!(promoted.kind(), choice.to_piece_kind());
        assert_eq!(promoted.color(), Color::White);
        assert!(promoted.has_moved());
        assert!(game.board().is_empty(Square::E7));
    }
}

#[test]
fn black_promotes_on_row_seven() {
    let mut game = Game::from_board(board("k7/8/8/8/8/8/3p4/7K"), Color::Black);
    let mut asked = None;
    let report = game
        .play(Square::D2, Square::D1, &mut |color: Color, sq: Square| {
            asked = Some((color, sq));
            Promotion::Rook
        })
        .unwrap();
    assert_eq!(asked, Some((Color::Black, Square::D1)));
    assert_eq!(report.record.promotion, Some(Promotion::Rook));
    assert_eq!(
        game.board().piece_at(Square::D1).map(|p| p.kind()),
        Some(PieceKind::Rook)
    );
    // The new rook checks the king along the first row.
    assert_eq!(report.status, GameStatus::Check);
}
