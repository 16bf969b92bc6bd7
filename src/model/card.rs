use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub name: String,
}

/// A member's seasonal entry in one tour.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TourCard {
    pub id: String,
    pub member_id: String,
    pub tour_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub earnings: i64,
    /// Derived from `points`; see `standings::assign_positions`.
    #[serde(default)]
    pub current_position: Option<String>,
    #[serde(default)]
    pub playoff: Option<PlayoffBracket>,
}

impl TourCard {
    #[must_use]
    pub fn is_playoff_eligible(&self) -> bool {
        self.playoff.is_some()
    }

    /// Name to show in reports, falling back to the member id.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.member_id
        } else {
            &self.display_name
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlayoffBracket {
    Gold,
    Silver,
}

impl fmt::Display for PlayoffBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayoffBracket::Gold => "gold",
            PlayoffBracket::Silver => "silver",
        };
        write!(f, "{s}")
    }
}
