use chessvar::chess_boards::chess_board::ZOBRIST;
use chessvar::{ChessField, ChessVar, MoveError, Outcome};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

const GAMES: u64 = 40;
const MAX_PLIES: usize = 300;

fn random_label(rng: &mut Pcg64) -> String {
    let field = ChessField::new(rng.gen_range(0..8), rng.gen_range(0..8));
    field.as_algebraic()
}

#[test]
fn random_games_keep_invariants() {
    for seed in 0..GAMES {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut game = ChessVar::new();

        for _ in 0..MAX_PLIES {
            // a random, usually illegal, attempt must not change anything
            let before = game.clone();
            let (from, to) = (random_label(&mut rng), random_label(&mut rng));
            let attempt = game.apply_move(&from, &to);
            if attempt.is_err() {
                assert_eq!(game, before);
                assert_eq!(game.apply_move(&from, &to), attempt);
                assert_eq!(game, before);
            } else {
                assert_ne!(game.turn(), before.turn());
            }

            if game.is_over() {
                break;
            }

            let moves = game.legal_moves();
            let Some(mv) = moves.choose(&mut rng) else {
                break;
            };
            let before = game.clone();
            let total_before = game.remaining_counts().total();
            game.make_move(*mv).unwrap();

            assert_ne!(game.turn(), before.turn());
            let dropped = total_before - game.remaining_counts().total();
            assert!(dropped <= 1);
            let changed = before
                .remaining_counts()
                .iter()
                .zip(game.remaining_counts().iter())
                .filter(|((_, a), (_, b))| a != b)
                .count();
            assert_eq!(changed as u32, dropped);
            assert_eq!(game.hash(), ZOBRIST.calculate_hash(game.board(), game.turn()));
        }

        if game.is_over() {
            let outcome = game.outcome();
            assert_ne!(outcome, Outcome::Unfinished);
            assert_eq!(game.apply_move("e2", "e4"), Err(MoveError::GameOver));
            assert_eq!(game.outcome(), outcome);
            assert!(game.legal_moves().is_empty());
        }
    }
}

#[test]
fn generated_moves_agree_with_apply_move() {
    let mut rng = Pcg64::seed_from_u64(7);
    let mut game = ChessVar::new();

    for _ in 0..60 {
        let legal = game.legal_moves();
        for from in ChessField::all() {
            for to in ChessField::all() {
                let mut probe = game.clone();
                let accepted = probe.apply_move(&from.as_algebraic(), &to.as_algebraic()).is_ok();
                let listed = legal.iter().any(|m| m.from == from && m.to == to);
                assert_eq!(accepted, listed, "{}{} in {}", from, to, game);
            }
        }
        let Some(mv) = legal.choose(&mut rng) else {
            break;
        };
        game.make_move(*mv).unwrap();
        if game.is_over() {
            break;
        }
    }
}
