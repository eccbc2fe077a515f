//! Skittle parsing and score rules.

use smallvec::SmallVec;
use thiserror::Error;

pub const SKITTLE_COUNT: u8 = 12;
pub const WINNING_SCORE: u32 = 50;
pub const RESET_SCORE: u32 = 25;

/// Skittles knocked over in one throw.
pub type Knocked = SmallVec<[u8; SKITTLE_COUNT as usize]>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkittleError {
    #[error("'{0}' is not a skittle number")]
    NotANumber(String),
    #[error("there is no skittle {0}")]
    NoSuchSkittle(u32),
    #[error("skittle {0} listed twice")]
    Duplicate(u8),
}

/// Parse a comma-separated list of skittle numbers.
///
/// A blank line means nothing was knocked over.
pub fn parse_knocked(line: &str) -> Result<Knocked, SkittleError> {
    let mut knocked = Knocked::new();
    if line.trim().is_empty() {
        return Ok(knocked);
    }

    for part in line.split(',') {
        let part = part.trim();
        let number: u32 = part
            .parse()
            .map_err(|_| SkittleError::NotANumber(part.to_string()))?;
        if number == 0 || number > u32::from(SKITTLE_COUNT) {
            return Err(SkittleError::NoSuchSkittle(number));
        }

        let skittle = number as u8;
        if knocked.contains(&skittle) {
            return Err(SkittleError::Duplicate(skittle));
        }
        knocked.push(skittle);
    }

    Ok(knocked)
}

/// Points for one throw.
#[must_use]
pub fn points(knocked: &[u8]) -> u32 {
    match knocked {
        [] => 0,
        [single] => u32::from(*single),
        many => many.len() as u32,
    }
}

/// New score after adding `points`; overshooting 50 falls back to 25.
#[must_use]
pub fn add_points(score: u32, points: u32) -> u32 {
    let total = score + points;
    if total > WINNING_SCORE {
        RESET_SCORE
    } else {
        total
    }
}
