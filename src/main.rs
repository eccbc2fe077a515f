//! Terminal front end.
//!
//! Usage:
//!   funny-bunny                      # funny bunny, asks for a seed
//!   funny-bunny --seed 1             # funny bunny with a fixed seed
//!   funny-bunny cryptogram
//!   funny-bunny molkky
//!   funny-bunny -vv bunny            # debug logs on stderr

use anyhow::Context;
use clap::{Parser, Subcommand};

use funny_bunny::core::{BoardConfig, Console};
use funny_bunny::games::{cryptogram, funny_bunny as bunny, molkky};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Use this seed instead of asking for one
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    seed: Option<i64>,

    #[command(subcommand)]
    game: Option<Game>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default)]
enum Game {
    /// Hop the bunny to the carrot
    #[default]
    Bunny,
    /// Decode a shuffled sentence
    Cryptogram,
    /// Score exactly 50 with skittles
    Molkky,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let game = args.game.unwrap_or_default();
    log::debug!("starting {game:?}, seed {:?}", args.seed);

    let mut console = Console::stdio();
    match game {
        Game::Bunny => {
            bunny::play(&mut console, &BoardConfig::default(), args.seed)
                .context("funny bunny stopped")?;
        }
        Game::Cryptogram => {
            cryptogram::play(&mut console, args.seed).context("cryptogram stopped")?;
        }
        Game::Molkky => {
            if args.seed.is_some() {
                log::warn!("molkky has no randomness, ignoring --seed");
            }
            molkky::play(&mut console).context("molkky stopped")?;
        }
    }

    Ok(())
}
