pub mod http;
pub mod memory;

pub use http::HttpBackend;
pub use memory::MemoryBackend;

use async_trait::async_trait;
use log::info;
use std::error::Error;
use std::fmt;

use crate::model::{Golfer, NewTeam};

#[derive(Debug, Clone)]
pub struct BackendError {
    message: String,
}

impl BackendError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(value: reqwest::Error) -> Self {
        Self::new(value.to_string())
    }
}

/// Read and write access to the league documents, authenticated elsewhere.
#[async_trait]
pub trait LeagueBackend: Send + Sync {
    async fn get_pick_pool(&self, tournament_id: &str) -> Result<Vec<Golfer>, BackendError>;
    /// Returns the id of the new team.
    async fn create_team(&self, team: NewTeam) -> Result<String, BackendError>;
    async fn update_team(&self, team_id: &str, golfer_ids: &[i64]) -> Result<(), BackendError>;
}

/// Updates the team in place when its id is known, otherwise creates it.
///
/// # Errors
///
/// Will return `Err` if the backend call fails
pub async fn upsert_team(
    backend: &dyn LeagueBackend,
    team_id: Option<&str>,
    team: NewTeam,
) -> Result<String, BackendError> {
    match team_id {
        Some(id) => {
            backend.update_team(id, &team.golfer_ids).await?;
            info!("updated team {id} for tour card {}", team.tour_card_id);
            Ok(id.to_string())
        }
        None => {
            let id = backend.create_team(team.clone()).await?;
            info!(
                "created team {id} for tour card {} in tournament {}",
                team.tour_card_id, team.tournament_id
            );
            Ok(id)
        }
    }
}
