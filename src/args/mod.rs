pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use clap::Parser;

use crate::error::LeagueError;
use crate::model::LeagueSnapshot;

/// # Errors
///
/// Will return `Err` if the snapshot does not hold together
pub fn args_checks() -> Result<CleanArgs, LeagueError> {
    Args::parse().clean()
}

impl Args {
    /// Resolves the snapshot and merges command line overrides into its playoff config.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the snapshot does not hold together
    pub fn clean(self) -> Result<CleanArgs, LeagueError> {
        let snapshot = LeagueSnapshot::from_json(&self.snapshot)?;
        let mut playoff = snapshot.playoff_config();
        if let Some(gold_cut) = self.gold_cut {
            playoff.gold_cut = gold_cut;
        }
        if let Some(silver_cut) = self.silver_cut {
            playoff.silver_cut = silver_cut;
        }
        if let Some(tour) = self.tour.as_deref() {
            if snapshot.tour_name(tour).is_none() {
                return Err(LeagueError::NotFound(format!("tour {tour}")));
            }
        }
        Ok(CleanArgs {
            snapshot,
            tour: self.tour,
            now: self.now.unwrap_or_else(chrono::Utc::now),
            score_tournament: self.score_tournament,
            playoff,
            json: self.json,
        })
    }
}
