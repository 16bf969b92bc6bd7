use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Golfer;

pub const TEAM_SIZE: usize = 10;
pub const MAX_PER_GROUP: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pick {
    golfer_id: i64,
    group: Option<u8>,
}

/// Golfers currently picked for a team, in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickSelection {
    picks: Vec<Pick>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    TeamFull,
    GroupFull(u8),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TeamFull => write!(f, "team already has {TEAM_SIZE} golfers"),
            Rejection::GroupFull(group) => {
                write!(f, "group {group} already has {MAX_PER_GROUP} golfers")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    Rejected(Rejection),
}

impl PickSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a saved team's picks, taking groups from the pick pool.
    /// Ids missing from the pool count as ungrouped.
    #[must_use]
    pub fn from_team(golfer_ids: &[i64], pool: &[Golfer]) -> Self {
        let mut picks: Vec<Pick> = Vec::with_capacity(golfer_ids.len());
        for &golfer_id in golfer_ids {
            if picks.iter().any(|p| p.golfer_id == golfer_id) {
                continue;
            }
            let group = pool
                .iter()
                .find(|g| g.api_id == golfer_id)
                .and_then(|g| g.group);
            picks.push(Pick { golfer_id, group });
        }
        Self { picks }
    }

    #[must_use]
    pub fn contains(&self, golfer_id: i64) -> bool {
        self.picks.iter().any(|p| p.golfer_id == golfer_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    #[must_use]
    pub fn golfer_ids(&self) -> Vec<i64> {
        self.picks.iter().map(|p| p.golfer_id).collect()
    }

    #[must_use]
    pub fn group_count(&self, group: u8) -> usize {
        self.picks.iter().filter(|p| p.group == Some(group)).count()
    }

    /// Whether `golfer` could be added right now.
    ///
    /// # Errors
    ///
    /// Will return `Err` with the rule that blocks the pick
    pub fn check_add(&self, golfer: &Golfer) -> Result<(), Rejection> {
        if self.picks.len() >= TEAM_SIZE {
            return Err(Rejection::TeamFull);
        }
        match golfer.group {
            Some(group) if self.group_count(group) >= MAX_PER_GROUP => {
                Err(Rejection::GroupFull(group))
            }
            _ => Ok(()),
        }
    }

    /// Removes `golfer` if picked, otherwise adds it when the rules allow.
    /// A rejected toggle leaves the selection untouched.
    pub fn toggle(&mut self, golfer: &Golfer) -> ToggleOutcome {
        if let Some(i) = self.picks.iter().position(|p| p.golfer_id == golfer.api_id) {
            self.picks.remove(i);
            return ToggleOutcome::Removed;
        }
        match self.check_add(golfer) {
            Ok(()) => {
                self.picks.push(Pick {
                    golfer_id: golfer.api_id,
                    group: golfer.group,
                });
                ToggleOutcome::Added
            }
            Err(rejection) => ToggleOutcome::Rejected(rejection),
        }
    }

    #[must_use]
    pub fn can_save(&self) -> bool {
        self.picks.len() == TEAM_SIZE
    }
}
