//! Funny bunny game implementation.

use std::io::{BufRead, Write};

use crate::board::{Board, Coord, Marker};
use crate::core::{BoardConfig, ConfigError, Console, GameError, GameRng, RandomSource, Result};
use crate::rules::{resolve_move, Dice, Position};

pub const WELCOME: &str = "Welcome to play funny bunny!";
pub const SEED_PROMPT: &str = "Enter a seed:";
pub const FELL_INTO_HOLE: &str = "Your bunny fell into a hole!";

/// What happened during one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The bunny hopped onto a safe cell.
    Moved { to: Coord },
    /// The bunny fell into a hole and is back off the board.
    FellIntoHole { at: Coord },
    /// The bunny reached the carrot.
    Won { moves: u32 },
}

/// A resolved turn: the throw, its outcome and the board as shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub throw: u32,
    pub outcome: TurnOutcome,
    /// Board rendered with the bunny on it (or the hole it fell into).
    pub rendered: String,
}

/// Funny bunny game state.
///
/// Owns the board and the bunny; randomness is passed in per call so the
/// same game can be driven by a seeded or a scripted source.
#[derive(Clone, Debug)]
pub struct FunnyBunny {
    board: Board,
    dice: Dice,
    position: Position,
    moves: u32,
    won: bool,
}

impl FunnyBunny {
    /// Set up a new game: holes are drawn from `rng`.
    pub fn new(config: &BoardConfig, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        let board = Board::generate(config, rng)?;
        Ok(Self {
            board,
            dice: Dice::from_config(config),
            position: Position::OffBoard,
            moves: 0,
            won: false,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Turns taken so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Resolve one turn for an already-drawn throw.
    ///
    /// The bunny marker is only on the board while the turn is rendered;
    /// afterwards the cell shows what it showed before. A bunny that falls
    /// into a hole leaves the hole in place and restarts off the board.
    pub fn play_turn(&mut self, throw: u32) -> Turn {
        assert!(!self.won, "Game already won, no more turns");
        assert!(throw > 0, "A throw moves at least one step");

        self.moves += 1;

        let cell = match resolve_move(self.board.layout(), self.position, throw) {
            Position::On(coord) => coord,
            Position::OffBoard => unreachable!("a positive throw always lands on the path"),
        };
        let under = self.board.set(cell, Marker::Bunny);

        let outcome = if under == Marker::Hole {
            self.board.set(cell, Marker::Hole);
            self.position = Position::OffBoard;
            log::debug!("turn {}: fell into the hole at {cell}", self.moves);
            TurnOutcome::FellIntoHole { at: cell }
        } else {
            self.position = Position::On(cell);
            if self.board[self.board.goal()] == Marker::Bunny {
                self.won = true;
                log::debug!("turn {}: reached the carrot", self.moves);
                TurnOutcome::Won { moves: self.moves }
            } else {
                log::trace!("turn {}: hopped to {cell}", self.moves);
                TurnOutcome::Moved { to: cell }
            }
        };

        let rendered = self.board.render();

        if !matches!(outcome, TurnOutcome::FellIntoHole { .. }) {
            self.board.set(cell, under);
        }

        Turn {
            throw,
            outcome,
            rendered,
        }
    }

    /// Play turns until the bunny reaches the carrot.
    ///
    /// Returns the number of moves it took. There is no turn limit.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut impl RandomSource,
    ) -> Result<u32> {
        loop {
            let throw = self.dice.draw(console, rng)?;
            let turn = self.play_turn(throw);

            match turn.outcome {
                TurnOutcome::FellIntoHole { .. } => console.say(FELL_INTO_HOLE)?,
                TurnOutcome::Won { moves } => {
                    console.say(format!("You won the game in {moves} moves!"))?;
                }
                TurnOutcome::Moved { .. } => {}
            }

            console.write_raw(&turn.rendered)?;

            if let TurnOutcome::Won { moves } = turn.outcome {
                return Ok(moves);
            }
        }
    }
}

/// Play a whole game on `console`.
///
/// Asks for the seed unless one is given, prints the initial board, then
/// runs turns until the bunny wins. Returns the number of moves.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &BoardConfig,
    seed: Option<i64>,
) -> Result<u32, GameError> {
    console.say(WELCOME)?;

    let seed = match seed {
        Some(seed) => seed,
        None => console.prompt_int(SEED_PROMPT)?,
    };
    log::info!("funny bunny seeded with {seed}");

    let mut rng = GameRng::from_player_seed(seed);
    let mut game = FunnyBunny::new(config, &mut rng)?;
    console.write_raw(&game.board().render())?;

    let moves = game.run(console, &mut rng)?;
    log::info!("won in {moves} moves");
    Ok(moves)
}
