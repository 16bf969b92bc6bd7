use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LeagueError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("picks are locked for tournament {0}")]
    PicksLocked(String),
}

impl From<serde_json::Error> for LeagueError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
