use ahash::RandomState;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

use crate::error::LeagueError;
use crate::model::{Golfer, Team, Tier, Tour, TourCard, Tournament};
use crate::playoff::PlayoffConfig;

/// Everything the league reads from the backend for one season.
///
/// format we expect is this:
/// { "tours": [{"id", "name"}], "tourCards": [...], "tournaments": [...], "tiers": [...],
///   "teams": [...], "pickPools": { "<tournament id>": [golfer, ...] }, "playoff": {...} }
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub tours: Vec<Tour>,
    #[serde(default)]
    pub tour_cards: Vec<TourCard>,
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub tiers: Vec<Tier>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub pick_pools: HashMap<String, Vec<Golfer>>,
    #[serde(default)]
    pub playoff: Option<PlayoffConfig>,
}

impl LeagueSnapshot {
    /// # Errors
    ///
    /// Will return `Err` if the json does not match the snapshot format or fails validation
    pub fn from_json(json: &Value) -> Result<Self, LeagueError> {
        let snapshot: LeagueSnapshot = serde_json::from_value(json.clone())?;
        snapshot.validate()?;
        debug!(
            "loaded snapshot: {} tours, {} cards, {} tournaments, {} teams",
            snapshot.tours.len(),
            snapshot.tour_cards.len(),
            snapshot.tournaments.len(),
            snapshot.teams.len()
        );
        Ok(snapshot)
    }

    /// # Errors
    ///
    /// Will return `Err` if the string is not valid json or fails validation
    pub fn from_json_str(contents: &str) -> Result<Self, LeagueError> {
        let json: Value = serde_json::from_str(contents)?;
        Self::from_json(&json)
    }

    /// Checks that every reference inside the snapshot resolves.
    ///
    /// # Errors
    ///
    /// Will return `Err` naming the first dangling or duplicated id found
    pub fn validate(&self) -> Result<(), LeagueError> {
        let tour_ids = unique_ids(self.tours.iter().map(|t| t.id.as_str()), "tour")?;
        let card_ids = unique_ids(self.tour_cards.iter().map(|c| c.id.as_str()), "tour card")?;
        let tier_ids = unique_ids(self.tiers.iter().map(|t| t.id.as_str()), "tier")?;
        let tournament_ids =
            unique_ids(self.tournaments.iter().map(|t| t.id.as_str()), "tournament")?;
        unique_ids(self.teams.iter().map(|t| t.id.as_str()), "team")?;

        if let Some(card) = self
            .tour_cards
            .iter()
            .find(|c| !tour_ids.contains(c.tour_id.as_str()))
        {
            return Err(LeagueError::InvalidSnapshot(format!(
                "tour card {} references unknown tour {}",
                card.id, card.tour_id
            )));
        }
        if let Some(tournament) = self
            .tournaments
            .iter()
            .find(|t| !tier_ids.contains(t.tier_id.as_str()))
        {
            return Err(LeagueError::InvalidSnapshot(format!(
                "tournament {} references unknown tier {}",
                tournament.id, tournament.tier_id
            )));
        }
        for team in &self.teams {
            if !card_ids.contains(team.tour_card_id.as_str()) {
                return Err(LeagueError::InvalidSnapshot(format!(
                    "team {} references unknown tour card {}",
                    team.id, team.tour_card_id
                )));
            }
            if !tournament_ids.contains(team.tournament_id.as_str()) {
                return Err(LeagueError::InvalidSnapshot(format!(
                    "team {} references unknown tournament {}",
                    team.id, team.tournament_id
                )));
            }
        }
        if let Some(key) = self
            .pick_pools
            .keys()
            .find(|k| !tournament_ids.contains(k.as_str()))
        {
            return Err(LeagueError::InvalidSnapshot(format!(
                "pick pool for unknown tournament {key}"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn tier_for(&self, tournament: &Tournament) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.id == tournament.tier_id)
    }

    #[must_use]
    pub fn tournament(&self, tournament_id: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == tournament_id)
    }

    #[must_use]
    pub fn tour_name(&self, tour_id: &str) -> Option<&str> {
        self.tours
            .iter()
            .find(|t| t.id == tour_id)
            .map(|t| t.name.as_str())
    }

    #[must_use]
    pub fn playoff_config(&self) -> PlayoffConfig {
        self.playoff.clone().unwrap_or_default()
    }
}

fn unique_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind: &str,
) -> Result<HashSet<&'a str, RandomState>, LeagueError> {
    let mut seen = HashSet::with_hasher(RandomState::new());
    for id in ids {
        if !seen.insert(id) {
            return Err(LeagueError::InvalidSnapshot(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(seen)
}
