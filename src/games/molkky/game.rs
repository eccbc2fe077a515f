//! Mölkky turn loop.

use std::io::{BufRead, Write};

use super::scoring::{add_points, parse_knocked, points, Knocked, WINNING_SCORE};
use crate::core::{Console, Result};

const NAME_PROMPT: &str = "Enter the name of the player:";
const SKITTLE_PROMPT: &str =
    "Enter all the skittles that were knocked over, separate the numbers by commas:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

/// Players in turn order with their scores.
#[derive(Clone, Debug, Default)]
pub struct Molkky {
    players: Vec<Player>,
}

impl Molkky {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player at the end of the turn order.
    ///
    /// Returns `false` if the name is already taken.
    pub fn add_player(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.players.iter().any(|p| p.name == name) {
            return false;
        }
        self.players.push(Player { name, score: 0 });
        true
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Apply one throw for the player at `index`. Returns the new score.
    pub fn record_throw(&mut self, index: usize, knocked: &[u8]) -> u32 {
        let player = &mut self.players[index];
        player.score = add_points(player.score, points(knocked));
        log::debug!("{} knocked {:?}, now on {}", player.name, knocked, player.score);
        player.score
    }

    /// First player (in turn order) on exactly the winning score.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.score == WINNING_SCORE)
    }

    /// Ask for player names until an empty line.
    pub fn register_players<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Self> {
        let mut game = Self::new();
        console.say("Enter all players. Stop with an empty line.")?;

        loop {
            let name = console.prompt_line(NAME_PROMPT)?;
            if name.is_empty() {
                if game.players.is_empty() {
                    console.say("Add at least one player.")?;
                    continue;
                }
                break;
            }
            if !game.add_player(name.as_str()) {
                console.say(format!("You've already added {name}."))?;
            }
        }

        Ok(game)
    }

    fn ask_knocked<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Knocked> {
        loop {
            let line = console.prompt_line(SKITTLE_PROMPT)?;
            match parse_knocked(&line) {
                Ok(knocked) => return Ok(knocked),
                Err(err) => {
                    log::debug!("rejected skittles {line:?}: {err}");
                    console.say("Skittle numbers must be distinct values between 1 and 12.")?;
                }
            }
        }
    }

    fn print_situation<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.blank()?;
        console.say("Current situation:")?;
        for player in &self.players {
            console.say(format!("{}: {}", player.name, player.score))?;
        }
        console.blank()
    }

    /// Play rounds until someone reaches exactly 50. Returns the winner's name.
    ///
    /// # Panics
    ///
    /// Panics if no player has been added.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<String> {
        assert!(!self.players.is_empty(), "Molkky needs at least one player");

        loop {
            for index in 0..self.players.len() {
                console.say(format!("{}'s turn!", self.players[index].name))?;
                let knocked = Self::ask_knocked(console)?;
                self.record_throw(index, &knocked);

                self.print_situation(console)?;

                if let Some(winner) = self.winner() {
                    let name = winner.name.clone();
                    console.say(format!("The winner is {name}!"))?;
                    return Ok(name);
                }
            }
        }
    }
}

/// Register players and play a whole game. Returns the winner's name.
pub fn play<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String> {
    let mut game = Molkky::register_players(console)?;
    log::info!("molkky with {} players", game.players().len());
    game.run(console)
}
