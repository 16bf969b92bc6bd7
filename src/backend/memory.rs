use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{BackendError, LeagueBackend};
use crate::model::{Golfer, LeagueSnapshot, NewTeam, Team};

/// Serves a loaded snapshot from memory. Clones share the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    snapshot: Arc<RwLock<LeagueSnapshot>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new(snapshot: LeagueSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    pub async fn snapshot(&self) -> LeagueSnapshot {
        self.snapshot.read().await.clone()
    }

    pub async fn team(&self, team_id: &str) -> Option<Team> {
        let snapshot = self.snapshot.read().await;
        snapshot.teams.iter().find(|t| t.id == team_id).cloned()
    }
}

#[async_trait]
impl LeagueBackend for MemoryBackend {
    async fn get_pick_pool(&self, tournament_id: &str) -> Result<Vec<Golfer>, BackendError> {
        let snapshot = self.snapshot.read().await;
        if snapshot.tournament(tournament_id).is_none() {
            return Err(BackendError::new(format!(
                "unknown tournament {tournament_id}"
            )));
        }
        Ok(snapshot
            .pick_pools
            .get(tournament_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_team(&self, team: NewTeam) -> Result<String, BackendError> {
        let mut snapshot = self.snapshot.write().await;
        if !snapshot.tour_cards.iter().any(|c| c.id == team.tour_card_id) {
            return Err(BackendError::new(format!(
                "unknown tour card {}",
                team.tour_card_id
            )));
        }
        let mut n = snapshot.teams.len() + 1;
        while snapshot.teams.iter().any(|t| t.id == format!("team-{n}")) {
            n += 1;
        }
        let id = format!("team-{n}");
        snapshot.teams.push(Team::new(
            id.clone(),
            team.tournament_id,
            team.tour_card_id,
            team.golfer_ids,
        ));
        Ok(id)
    }

    async fn update_team(&self, team_id: &str, golfer_ids: &[i64]) -> Result<(), BackendError> {
        let mut snapshot = self.snapshot.write().await;
        let team = snapshot
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| BackendError::new(format!("unknown team {team_id}")))?;
        team.golfer_ids = golfer_ids.to_vec();
        Ok(())
    }
}
