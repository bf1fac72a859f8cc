use rand::{rngs::StdRng, Rng, SeedableRng};

use ply_chess::game_state::chess_types::{Color, PieceKind, Square};
use ply_chess::game_state::game_state::GameState;
use ply_chess::move_validation::legal_move_checks::{is_king_in_check, king_into_check};
use ply_chess::moves::move_record::records_from_tokens;
use ply_chess::move_validation::legal_game::is_legal_game;

const POSITIONS: [&str; 4] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
    "4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1",
    "8/8/8/r2Pp2K/8/8/8/4k3 w - e6 0 1",
];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_square(rng: &mut StdRng) -> Square {
    Square::from_rank_file(rng.random_range(0..8), rng.random_range(0..8))
}

/// Every non-disambiguated SAN token that could name a move in `game`, with
/// the capture marker chosen to match the destination.
fn candidate_tokens(game: &GameState) -> Vec<String> {
    let mut tokens = vec!["O-O".to_owned(), "O-O-O".to_owned()];
    for square in Square::all() {
        let occupied = !game.piece_at(square).is_empty;
        let marker = if occupied { "x" } else { "" };
        for letter in ['N', 'B', 'R', 'Q', 'K'] {
            tokens.push(format!("{letter}{marker}{square}"));
        }
        if occupied {
            for d_file in [-1i32, 1] {
                let file = square.file() as i32 + d_file;
                if (0..8).contains(&file) {
                    tokens.push(format!("{}x{square}", char::from(b'a' + file as u8)));
                }
            }
        } else {
            tokens.push(square.to_string());
        }
    }
    tokens
}

#[test]
fn check_probe_is_idempotent_and_never_mutates() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for fen in POSITIONS {
        let game = GameState::from_fen(fen).expect("fixture FEN should parse");
        let before = game.clone();
        for _ in 0..500 {
            let from = random_square(&mut rng);
            let to = random_square(&mut rng);
            let first = king_into_check(&game, from, to);
            let second = king_into_check(&game, from, to);
            assert_eq!(first, second, "{fen}: {from}->{to}");
        }
        assert_eq!(game, before);
    }
}

#[test]
fn garbage_notation_never_mutates_on_rejection() {
    init_logger();
    const ALPHABET: &[u8] = b"abcdefghijNBRQKPOx-=+#!?0123456789 ";
    let mut rng = StdRng::seed_from_u64(42);

    for fen in POSITIONS {
        let mut game = GameState::from_fen(fen).expect("fixture FEN should parse");
        for _ in 0..2_000 {
            let len = rng.random_range(0..8);
            let token: String = (0..len)
                .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
                .collect();

            let expected = game.is_legal_move(&token);
            let before = game.clone();
            let applied = game.apply_move(&token);
            assert_eq!(applied, expected, "{fen}: `{token}`");
            if applied {
                game = before;
            } else {
                assert_eq!(game, before, "{fen}: `{token}` mutated the board");
            }
        }
    }
}

#[test]
fn random_playouts_keep_board_invariants() {
    init_logger();

    for seed in 0..12u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new_game();
        let mut played = Vec::new();

        for _ in 0..80 {
            let legal: Vec<String> = candidate_tokens(&game)
                .into_iter()
                .filter(|token| game.is_legal_move(token))
                .collect();
            if legal.is_empty() {
                break;
            }

            let token = &legal[rng.random_range(0..legal.len())];
            let mover = game.side_to_move();
            assert!(game.apply_move(token), "seed {seed}: `{token}` was legal a moment ago");
            played.push(token.clone());

            assert!(!is_king_in_check(&game, mover), "seed {seed}: `{token}` left the king attacked");
            assert_eq!(game.side_to_move(), mover.opposite());
            for color in [Color::White, Color::Black] {
                let king = game.king_square(color);
                assert!(game.piece_at(king).is(color, PieceKind::King), "seed {seed}: stale king cache");
                let kings = Square::all()
                    .filter(|square| game.piece_at(*square).is(color, PieceKind::King))
                    .count();
                assert_eq!(kings, 1);
            }

            let reparsed = GameState::from_fen(&game.get_fen()).expect("generated FEN should parse");
            assert_eq!(reparsed.board(), game.board());
            assert_eq!(reparsed.en_passant_square(), game.en_passant_square());
            assert_eq!(reparsed.material_score(), game.material_score());
        }

        let tokens: Vec<&str> = played.iter().map(String::as_str).collect();
        assert!(is_legal_game(&records_from_tokens(tokens)), "seed {seed}: replay disagreed");
    }
}
