use serde::{Deserialize, Serialize};

/// One member's golfer selection for one tournament.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub tournament_id: String,
    pub tour_card_id: String,
    #[serde(default)]
    pub golfer_ids: Vec<i64>,
    /// Strokes relative to par; `None` until the tournament is played.
    #[serde(default)]
    pub score: Option<i32>,
    /// Per-round scores as the backend stores them. Carried, not scored.
    #[serde(default)]
    pub rounds: Vec<Option<i32>>,
    #[serde(default)]
    pub points: Option<i32>,
    #[serde(default)]
    pub earnings: Option<i64>,
    #[serde(default)]
    pub position: Option<String>,
}

impl Team {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        tournament_id: impl Into<String>,
        tour_card_id: impl Into<String>,
        golfer_ids: Vec<i64>,
    ) -> Self {
        Self {
            id: id.into(),
            tournament_id: tournament_id.into(),
            tour_card_id: tour_card_id.into(),
            golfer_ids,
            score: None,
            rounds: vec![],
            points: None,
            earnings: None,
            position: None,
        }
    }
}

/// Payload for the "create team" mutation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub tournament_id: String,
    pub tour_card_id: String,
    pub golfer_ids: Vec<i64>,
}
