use crate::chess_boards::chess_board::{ChessField, Color, ALL_PIECE_TYPES};
use crate::chess_boards::game::{ChessVar, Outcome};
use std::io::{self, stdin, stdout, BufRead, Write};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::{debug, error};

const HELP: &str = "\
commands:
  <from> <to>   play a move, e.g. `e2 e4` or `e2e4`
  board         show the board
  counts        show the remaining pieces
  moves [sq]    list legal moves, optionally from one square
  turn          show the side to move
  layout        print the position as a layout string
  help          show this help
  quit          leave";

#[derive(Tabled)]
struct CountRow {
    piece: String,
    white: u8,
    black: u8,
}

/// What the console should do after a line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    Continue(String),
    Quit,
}

/// Renders the remaining-count table for both sides.
pub fn render_counts(game: &ChessVar) -> String {
    let counts = game.remaining_counts();
    let rows: Vec<CountRow> = ALL_PIECE_TYPES
        .into_iter()
        .map(|kind| CountRow {
            piece: kind.to_string(),
            white: counts.get(kind, Color::White),
            black: counts.get(kind, Color::Black),
        })
        .collect();
    Table::new(rows).with(Style::modern()).to_string()
}

pub fn describe_outcome(game: &ChessVar) -> String {
    match game.outcome() {
        Outcome::Unfinished => format!("{} to move", game.turn()),
        Outcome::WhiteWon => "White won".to_string(),
        Outcome::BlackWon => "Black won".to_string(),
    }
}

/// Handles one line of console input against the game.
pub fn execute_command(game: &mut ChessVar, line: &str) -> Response {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = tokens.first() else {
        return Response::Continue(String::new());
    };

    let output = match (command, tokens.len()) {
        ("quit" | "exit", _) => return Response::Quit,
        ("help", _) => HELP.to_string(),
        ("board", _) => game.render_to_string(),
        ("counts", _) => render_counts(game),
        ("turn", _) => describe_outcome(game),
        ("layout", _) => game.to_layout(),
        ("moves", 1) => join_moves(game.legal_moves().iter().map(|m| m.as_algebraic())),
        ("moves", _) => match ChessField::from_algebraic(tokens[1]) {
            Ok(field) => join_moves(game.legal_moves_from(field).iter().map(|m| m.as_algebraic())),
            Err(e) => format!("Error: {}", e),
        },
        (mv, 1) if mv.len() == 4 && mv.is_ascii() => play(game, &mv[0..2], &mv[2..4]),
        (from, 2) => play(game, from, tokens[1]),
        _ => format!("Unknown command: {}. Type `help` for a list of commands.", line.trim()),
    };
    Response::Continue(output)
}

fn play(game: &mut ChessVar, from: &str, to: &str) -> String {
    match game.apply_move(from, to) {
        Ok(()) => format!("{}\n{}", game.render_to_string(), describe_outcome(game)),
        Err(e) => format!("Illegal move {} {}: {}", from, to, e),
    }
}

fn join_moves(moves: impl Iterator<Item = String>) -> String {
    let moves: Vec<String> = moves.collect();
    if moves.is_empty() {
        "no legal moves".to_string()
    } else {
        moves.join(" ")
    }
}

/// Interactive loop on stdin/stdout until `quit` or end of input.
pub fn run_console(mut game: ChessVar) {
    println!("{}", game.render_to_string());
    println!("{}", describe_outcome(&game));

    if let Err(err) = console_loop(&mut game, stdin().lock(), stdout().lock()) {
        error!(%err, "console stopped");
    }
}

/// Reads commands from `input` and writes the answers to `output` until
/// `quit`, end of input, or an I/O error.
pub fn console_loop<R: BufRead, W: Write>(game: &mut ChessVar, input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        debug!(input = %line, "console command");
        match execute_command(game, line) {
            Response::Continue(text) => {
                writeln!(output, "{}", text)?;
                output.flush()?;
            }
            Response::Quit => return Ok(()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(game: &mut ChessVar, line: &str) -> String {
        match execute_command(game, line) {
            Response::Continue(s) => s,
            Response::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_play_moves_in_both_notations() {
        let mut game = ChessVar::new();
        let out = output(&mut game, "e2 e4");
        assert!(out.ends_with("Black to move"));
        let out = output(&mut game, "e7e5");
        assert!(out.ends_with("White to move"));
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_rejected_move_reports_error() {
        let mut game = ChessVar::new();
        let out = output(&mut game, "a1 a8");
        assert_eq!(out, "Illegal move a1 a8: piece cannot move that way");
        assert_eq!(game, ChessVar::new());
    }

    #[test]
    fn test_moves_command() {
        let mut game = ChessVar::new();
        assert_eq!(output(&mut game, "moves b1"), "b1a3 b1c3");
        assert_eq!(output(&mut game, "moves e7"), "no legal moves");
        assert_eq!(output(&mut game, "moves").split(' ').count(), 20);
        assert!(output(&mut game, "moves z1").starts_with("Error"));
    }

    #[test]
    fn test_counts_table() {
        let mut game = ChessVar::new();
        let table = output(&mut game, "counts");
        assert!(table.contains("piece"));
        assert!(table.contains("Knight"));
        assert_eq!(table.lines().filter(|l| l.contains("Pawn")).count(), 1);
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "stdin closed"))
        }
    }

    #[test]
    fn test_console_loop_plays_until_quit() {
        let mut game = ChessVar::new();
        let mut out = Vec::new();
        console_loop(&mut game, "e2 e4\n\n  turn \nquit\ne7e5\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Black to move"));
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_console_loop_stops_on_read_error() {
        let mut game = ChessVar::new();
        let input = io::BufReader::new(FailingReader);
        let result = console_loop(&mut game, input, Vec::new());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::Other);
        assert_eq!(game, ChessVar::new());
    }

    #[test]
    fn test_misc_commands() {
        let mut game = ChessVar::new();
        assert_eq!(execute_command(&mut game, "quit"), Response::Quit);
        assert_eq!(output(&mut game, "   "), "");
        assert_eq!(output(&mut game, "layout"), game.to_layout());
        assert!(output(&mut game, "dance").starts_with("Unknown command"));
        assert!(output(&mut game, "help").contains("moves"));
    }
}
