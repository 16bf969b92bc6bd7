use ahash::RandomState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::ranking::{Position, rank_by_points};
use crate::model::{Team, TourCard, Tournament, latest_completed};

/// A card's cup points either side of the latest completed tournament.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CardHistory {
    pub card_id: String,
    pub tour_id: String,
    pub points_after: i32,
    /// `None` when the card had not played before the latest tournament.
    pub points_before: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PositionChange {
    pub card_id: String,
    pub tour_id: String,
    pub position: Position,
    pub previous: Option<Position>,
    /// Places gained (positive) or lost (negative).
    pub change: Option<i32>,
}

impl PositionChange {
    #[must_use]
    pub fn change_or_zero(&self) -> i32 {
        self.change.unwrap_or(0)
    }
}

/// Rebuilds each card's points history from the teams of completed tournaments.
#[must_use]
pub fn card_histories(
    cards: &[TourCard],
    teams: &[Team],
    tournaments: &[Tournament],
    now: DateTime<Utc>,
) -> Vec<CardHistory> {
    let Some(latest) = latest_completed(tournaments, now) else {
        return cards
            .iter()
            .map(|card| CardHistory {
                card_id: card.id.clone(),
                tour_id: card.tour_id.clone(),
                points_after: card.points,
                points_before: None,
            })
            .collect();
    };

    let earlier: HashSet<&str, RandomState> = tournaments
        .iter()
        .filter(|t| t.is_completed(now) && t.id != latest.id)
        .map(|t| t.id.as_str())
        .collect();

    cards
        .iter()
        .map(|card| {
            let mut latest_points = 0;
            let mut played_before = false;
            for team in teams.iter().filter(|t| t.tour_card_id == card.id) {
                if team.tournament_id == latest.id {
                    latest_points = team.points.unwrap_or(0);
                } else if earlier.contains(team.tournament_id.as_str()) {
                    played_before = true;
                }
            }
            CardHistory {
                card_id: card.id.clone(),
                tour_id: card.tour_id.clone(),
                points_after: card.points,
                points_before: played_before.then(|| card.points - latest_points),
            }
        })
        .collect()
}

/// Ranks every tour before and after the latest tournament and reports the
/// change per card, in the order of `histories`.
#[must_use]
pub fn compute_position_changes(histories: &[CardHistory]) -> Vec<PositionChange> {
    let mut by_tour: HashMap<&str, Vec<usize>, RandomState> = HashMap::default();
    for (i, history) in histories.iter().enumerate() {
        by_tour.entry(history.tour_id.as_str()).or_default().push(i);
    }

    let mut current = vec![None; histories.len()];
    let mut previous = vec![None; histories.len()];
    for members in by_tour.values() {
        let after: Vec<i32> = members.iter().map(|&i| histories[i].points_after).collect();
        for (&i, position) in members.iter().zip(rank_by_points(&after)) {
            current[i] = Some(position);
        }

        let with_history: Vec<usize> = members
            .iter()
            .copied()
            .filter(|&i| histories[i].points_before.is_some())
            .collect();
        let before: Vec<i32> = with_history
            .iter()
            .filter_map(|&i| histories[i].points_before)
            .collect();
        for (&i, position) in with_history.iter().zip(rank_by_points(&before)) {
            previous[i] = Some(position);
        }
    }

    histories
        .iter()
        .zip(current.into_iter().zip(previous))
        .filter_map(|(history, (position, previous))| {
            let position = position?;
            let change = previous.map(|p| rank_delta(p, position));
            Some(PositionChange {
                card_id: history.card_id.clone(),
                tour_id: history.tour_id.clone(),
                position,
                previous,
                change,
            })
        })
        .collect()
}

/// Rewrites every card's position string from its points within its tour.
pub fn assign_positions(cards: &mut [TourCard]) {
    let mut by_tour: HashMap<String, Vec<usize>, RandomState> = HashMap::default();
    for (i, card) in cards.iter().enumerate() {
        by_tour.entry(card.tour_id.clone()).or_default().push(i);
    }
    for members in by_tour.values() {
        let points: Vec<i32> = members.iter().map(|&i| cards[i].points).collect();
        for (&i, position) in members.iter().zip(rank_by_points(&points)) {
            cards[i].current_position = Some(position.to_string());
        }
    }
}

fn rank_delta(before: Position, after: Position) -> i32 {
    let before = i64::try_from(before.rank).unwrap_or(i64::MAX);
    let after = i64::try_from(after.rank).unwrap_or(i64::MAX);
    i32::try_from(before - after).unwrap_or(0)
}
