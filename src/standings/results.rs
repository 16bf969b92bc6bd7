use ahash::RandomState;
use log::{info, warn};
use std::collections::HashMap;
use std::ops::Range;

use super::ranking::rank_by_score;
use crate::model::{Team, Tier, TourCard, Tournament};

/// Ranks one tournament's teams inside each tour and awards points and
/// earnings from the tier tables. Tied teams split the places they span.
///
/// Returns the number of teams that received a finishing position.
pub fn score_tournament(
    tournament: &Tournament,
    tier: &Tier,
    cards: &[TourCard],
    teams: &mut [Team],
) -> usize {
    let tour_of: HashMap<&str, &str, RandomState> = cards
        .iter()
        .map(|c| (c.id.as_str(), c.tour_id.as_str()))
        .collect();

    let mut by_tour: HashMap<String, Vec<usize>, RandomState> = HashMap::default();
    for (i, team) in teams.iter_mut().enumerate() {
        if team.tournament_id != tournament.id {
            continue;
        }
        match tour_of.get(team.tour_card_id.as_str()) {
            Some(tour_id) if team.score.is_some() => {
                by_tour.entry((*tour_id).to_string()).or_default().push(i);
            }
            Some(_) => {
                team.points = Some(0);
                team.earnings = Some(0);
                team.position = None;
            }
            None => warn!(
                "team {} references unknown tour card {}, skipping",
                team.id, team.tour_card_id
            ),
        }
    }

    let mut scored = 0;
    for members in by_tour.values() {
        let scores: Vec<i32> = members
            .iter()
            .map(|&i| teams[i].score.unwrap_or_default())
            .collect();
        let mut tied: HashMap<i32, usize, RandomState> = HashMap::default();
        for &score in &scores {
            *tied.entry(score).or_default() += 1;
        }

        for (k, position) in rank_by_score(&scores).into_iter().enumerate() {
            let first = position.rank - 1;
            let places = first..first + tied[&scores[k]];
            let team = &mut teams[members[k]];
            team.points = Some(split_evenly(&tier.points, places.clone()));
            team.earnings = Some(split_evenly(&tier.payouts, places));
            team.position = Some(position.to_string());
        }
        scored += members.len();
    }

    info!(
        "scored {scored} teams for tournament {} ({})",
        tournament.id, tier.name
    );
    scored
}

/// Folds a tournament's awarded points and earnings into the tour cards.
pub fn apply_results(cards: &mut [TourCard], teams: &[Team], tournament_id: &str) {
    for team in teams.iter().filter(|t| t.tournament_id == tournament_id) {
        let Some(card) = cards.iter_mut().find(|c| c.id == team.tour_card_id) else {
            warn!("no tour card {} for team {}", team.tour_card_id, team.id);
            continue;
        };
        card.points += team.points.unwrap_or(0);
        card.earnings += team.earnings.unwrap_or(0);
    }
}

/// Mean of the table entries covering `places`, rounded. Places past the end
/// of the table are worth nothing.
fn split_evenly<T: Award>(table: &[T], places: Range<usize>) -> T {
    if places.is_empty() {
        return T::default();
    }
    let count = places.len() as f64;
    let total: f64 = places
        .map(|i| table.get(i).copied().unwrap_or_default().as_f64())
        .sum();
    T::from_rounded(total / count)
}

trait Award: Copy + Default {
    fn as_f64(self) -> f64;
    fn from_rounded(value: f64) -> Self;
}

impl Award for i32 {
    fn as_f64(self) -> f64 {
        f64::from(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_rounded(value: f64) -> Self {
        value.round() as i32
    }
}

impl Award for i64 {
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_rounded(value: f64) -> Self {
        value.round() as i64
    }
}
