//! Terminal front end for the perfect-play tic-tac-toe engine.
//!
//! This binary is presentation glue only: it collects the game options,
//! forwards human moves to the session, and renders what the session
//! reports back. All rules live in the library.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use perfect_tictactoe::{GameSession, GameStatus, Player, Position};
use std::io::{BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe against a perfect opponent.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Mark to play as.
    #[arg(long, value_enum, default_value_t = Player::X)]
    symbol: Player,

    /// Let the computer make the first move.
    #[arg(long)]
    second: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!(symbol = %cli.symbol, second = cli.second, "Starting game");

    let mut session = GameSession::configure(cli.symbol, !cli.second);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", session.board().display());
        println!("{}", session.status_line());

        if session.status().is_over() {
            if !prompt_yes_no(&mut lines, "Play again? (y/n): ")? {
                break;
            }
            session.reset();
            continue;
        }

        print!("Your move (1-9 or a label like 'center'): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;

        // Players type 1-based square numbers; the board indexes from 0.
        let parsed = match line.trim().parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => Position::from_index(n - 1),
            Ok(_) => None,
            Err(_) => Position::from_label_or_number(&line),
        };

        let Some(position) = parsed else {
            println!("Unrecognized square: {}", line.trim());
            continue;
        };

        if let Err(rejection) = session.apply_move(position) {
            debug!(%rejection, "Move rejected");
            println!("{rejection}");
        }
    }

    if session.status() == GameStatus::InProgress {
        info!("Game abandoned");
    }
    Ok(())
}

/// Asks a yes/no question and returns the answer, defaulting to no on EOF.
fn prompt_yes_no(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    question: &str,
) -> Result<bool> {
    print!("{question}");
    std::io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}
