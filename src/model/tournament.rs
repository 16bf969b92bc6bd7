use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub tier_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Tournament {
    #[must_use]
    pub fn is_completed(&self, now: DateTime<Utc>) -> bool {
        self.end_date < now
    }

    /// Teams may be created or edited only before the first tee time.
    #[must_use]
    pub fn picks_open(&self, now: DateTime<Utc>) -> bool {
        now < self.start_date
    }
}

/// Scheduling and payout scale shared by a set of tournaments.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub id: String,
    pub name: String,
    /// Carried through from the backend; playoff seeding keys off the
    /// bracket config, not this flag.
    #[serde(default)]
    pub playoff: bool,
    /// Indexed by finish rank, winner first.
    #[serde(default)]
    pub points: Vec<i32>,
    #[serde(default)]
    pub payouts: Vec<i64>,
}

/// Latest tournament that has finished by `now`.
#[must_use]
pub fn latest_completed(tournaments: &[Tournament], now: DateTime<Utc>) -> Option<&Tournament> {
    tournaments
        .iter()
        .filter(|t| t.is_completed(now))
        .max_by_key(|t| t.end_date)
}
