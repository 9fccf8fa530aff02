use chessvar::chess_boards::chess_board::layout::INITIAL_POSITION;
use chessvar::chess_boards::chess_board::Move;
use chessvar::chess_boards::perft::perft_divide;
use chessvar::chess_boards::ChessVar;
use chessvar::ui::{describe_outcome, render_counts, run_console};
use std::process::ExitCode;

use clap::arg;
use clap::command;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(
            Command::new("play").about("Play a game on the console").arg(
                arg!(
                -l --layout <LAYOUT> "Starting position"
                        )
                .default_value(INITIAL_POSITION),
            ),
        )
        .subcommand(
            Command::new("replay")
                .about("Apply a list of moves and show the result")
                .arg(
                    arg!(
                    -l --layout <LAYOUT> "Starting position"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(
                    arg!(
                    -m --moves <moves> "List of moves like e2e4"
                            )
                    .num_args(1..)
                    .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("perft")
                .about("Count move sequences")
                .arg(
                    arg!(
                    -l --layout <LAYOUT> "Board position"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(
                    arg!(
                    -x --depth <d> "depth"
                            )
                    .default_value("3")
                    .value_parser(clap::value_parser!(u8)),
                ),
        )
        .get_matches();

    install_tracing(matches.get_flag("debug"));

    match matches.subcommand() {
        Some(("play", arg_matches)) => {
            let layout = arg_matches.get_one::<String>("layout").map(String::as_str).unwrap_or(INITIAL_POSITION);
            match ChessVar::from_layout(layout) {
                Ok(game) => {
                    run_console(game);
                    ExitCode::SUCCESS
                }
                Err(e) => fail(&format!("Invalid layout: {}", e)),
            }
        }
        Some(("replay", arg_matches)) => {
            let layout = arg_matches.get_one::<String>("layout").map(String::as_str).unwrap_or(INITIAL_POSITION);
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|&v| !v.is_empty())
                .collect::<Vec<_>>();
            replay(layout, moves)
        }
        Some(("perft", arg_matches)) => {
            let layout = arg_matches.get_one::<String>("layout").map(String::as_str).unwrap_or(INITIAL_POSITION);
            let depth = arg_matches.get_one::<u8>("depth").copied().unwrap_or(3);
            perft(layout, depth)
        }
        None => {
            run_console(ChessVar::new());
            ExitCode::SUCCESS
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

/// Logs go to stderr so they never mix with the board on stdout.
fn install_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: &str) -> ExitCode {
    error!("{}", message);
    ExitCode::FAILURE
}

fn replay(layout: &str, moves: Vec<&String>) -> ExitCode {
    let mut game = match ChessVar::from_layout(layout) {
        Ok(game) => game,
        Err(e) => return fail(&format!("Invalid layout: {}", e)),
    };
    info!(layout, moves = moves.len(), "replaying moves");

    for m in moves {
        let result = Move::from_algebraic(m).and_then(|mv| game.make_move(mv));
        if let Err(e) = result {
            println!("{}", game.render_to_string());
            return fail(&format!("Move {} rejected: {}", m, e));
        }
    }

    println!("{}", game.render_to_string());
    println!("{}", describe_outcome(&game));
    println!("{}", render_counts(&game));
    ExitCode::SUCCESS
}

#[derive(Tabled)]
struct PerftRow {
    mv: String,
    nodes: u64,
}

fn perft(layout: &str, depth: u8) -> ExitCode {
    let game = match ChessVar::from_layout(layout) {
        Ok(game) => game,
        Err(e) => return fail(&format!("Invalid layout: {}", e)),
    };
    println!("Perft test for {} with depth {}", layout, depth);

    let result_moves = perft_divide(&game, depth);
    let num_nodes: u64 = result_moves.iter().map(|(_, c)| c).sum();
    let table_rows: Vec<PerftRow> = result_moves
        .into_iter()
        .map(|(mv, nodes)| PerftRow { mv, nodes })
        .collect();
    println!("{}", Table::new(table_rows).with(Style::modern()));
    println!("\nNodes searched: {}", num_nodes);
    ExitCode::SUCCESS
}
