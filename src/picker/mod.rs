pub mod pool;
pub mod selection;

pub use pool::*;
pub use selection::*;

use chrono::{DateTime, Utc};

use crate::error::LeagueError;
use crate::model::Tournament;

/// # Errors
///
/// Will return `Err` once the tournament has started
pub fn ensure_picks_open(tournament: &Tournament, now: DateTime<Utc>) -> Result<(), LeagueError> {
    if tournament.picks_open(now) {
        Ok(())
    } else {
        Err(LeagueError::PicksLocked(tournament.id.clone()))
    }
}
