use ahash::RandomState;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::PlayoffConfig;
use super::strokes::{gold_strokes, silver_strokes};
use crate::model::{PlayoffBracket, TourCard};
use crate::standings::ranking::finishing_order;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BracketEntry {
    pub card_id: String,
    pub tour_id: String,
    pub bracket: PlayoffBracket,
    pub points: i32,
    pub strokes: f64,
}

/// Cuts each tour's standings into gold and silver and sets every card's
/// playoff flag. Cards level on points at a cut line keep their input order.
pub fn assign_brackets(cards: &mut [TourCard], config: &PlayoffConfig) {
    let tours: Vec<Vec<usize>> = group_by_tour(cards).into_values().collect();
    for members in tours {
        let points: Vec<i32> = members.iter().map(|&i| cards[i].points).collect();
        for (place, k) in finishing_order(&points, |a, b| b.cmp(a))
            .into_iter()
            .enumerate()
        {
            cards[members[k]].playoff = if place < config.gold_cut {
                Some(PlayoffBracket::Gold)
            } else if place < config.gold_cut + config.silver_cut {
                Some(PlayoffBracket::Silver)
            } else {
                None
            };
        }
    }
}

/// Starting strokes for every card holding a bracket, tour by tour, gold
/// before silver, best card first.
#[must_use]
pub fn playoff_strokes(cards: &[TourCard], config: &PlayoffConfig) -> Vec<BracketEntry> {
    let by_tour = group_by_tour(cards);
    let mut tour_ids: Vec<&str> = by_tour.keys().copied().collect();
    tour_ids.sort_unstable();

    let mut entries = Vec::new();
    for tour_id in tour_ids {
        let members = &by_tour[tour_id];
        for bracket in [PlayoffBracket::Gold, PlayoffBracket::Silver] {
            let mut seeded: Vec<&TourCard> = members
                .iter()
                .map(|&i| &cards[i])
                .filter(|c| c.playoff == Some(bracket))
                .collect();
            seeded.sort_by(|a, b| b.points.cmp(&a.points));

            let points: Vec<i32> = seeded.iter().map(|c| c.points).collect();
            let strokes = match bracket {
                PlayoffBracket::Gold => gold_strokes(&points, config),
                PlayoffBracket::Silver => silver_strokes(&points, config),
            };
            debug!("{tour_id} {bracket}: {} cards seeded", seeded.len());

            entries.extend(seeded.into_iter().zip(strokes).map(|(card, strokes)| {
                BracketEntry {
                    card_id: card.id.clone(),
                    tour_id: card.tour_id.clone(),
                    bracket,
                    points: card.points,
                    strokes,
                }
            }));
        }
    }
    entries
}

fn group_by_tour(cards: &[TourCard]) -> HashMap<&str, Vec<usize>, RandomState> {
    let mut by_tour: HashMap<&str, Vec<usize>, RandomState> = HashMap::default();
    for (i, card) in cards.iter().enumerate() {
        by_tour.entry(card.tour_id.as_str()).or_default().push(i);
    }
    by_tour
}
