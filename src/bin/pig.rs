use std::error::Error;
use std::io;
use std::process;

use clap::{ArgAction, Parser};
use tracing::info;

use pig::game::DEFAULT_SEED;
use pig::{Game, Session, build_players, create_bot};

#[derive(Parser, Debug)]
#[command(name = "pig", about = "Play the dice game Pig on the console.")]
struct Args {
    /// 'human' or 'computer'
    #[arg(long = "player1")]
    player1: String,

    /// 'human' or 'computer'
    #[arg(long = "player2")]
    player2: String,

    /// Activate the one minute timer
    #[arg(long = "timed", action = ArgAction::SetTrue)]
    timed: bool,

    /// Seed for the die; the same seed replays the same rolls
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let players = build_players(&args.player1, &args.player2)?;
    let bots = [create_bot(players[0].kind()), create_bot(players[1].kind())];
    let game = Game::builder(players)
        .with_seed(args.seed)
        .timed(args.timed)
        .build()?;

    let mut session = Session::new(game, bots, io::stdout());
    let status = session.run()?;
    info!(?status, "session finished");
    Ok(())
}
