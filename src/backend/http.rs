use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{BackendError, LeagueBackend};
use crate::model::{Golfer, NewTeam};

/// JSON-over-HTTP client for the league document service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct CreatedTeam {
    id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamUpdate<'a> {
    golfer_ids: &'a [i64],
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl LeagueBackend for HttpBackend {
    async fn get_pick_pool(&self, tournament_id: &str) -> Result<Vec<Golfer>, BackendError> {
        let url = self.url(&format!("tournaments/{tournament_id}/golfers"));
        debug!("GET {url}");
        let resp = self.client.get(&url).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    async fn create_team(&self, team: NewTeam) -> Result<String, BackendError> {
        let url = self.url("teams");
        debug!("POST {url}");
        let resp = self
            .client
            .post(&url)
            .json(&team)
            .send()
            .await?
            .error_for_status()?;
        let created: CreatedTeam = resp.json().await?;
        Ok(created.id)
    }

    async fn update_team(&self, team_id: &str, golfer_ids: &[i64]) -> Result<(), BackendError> {
        let url = self.url(&format!("teams/{team_id}"));
        debug!("PATCH {url}");
        self.client
            .patch(&url)
            .json(&TeamUpdate { golfer_ids })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
