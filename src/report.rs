use ahash::RandomState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write;

use crate::model::{LeagueSnapshot, PlayoffBracket};
use crate::playoff::{PlayoffConfig, assign_brackets, playoff_strokes};
use crate::standings::{
    PositionChange, assign_positions, card_histories, compute_position_changes,
};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StandingsRow {
    pub tour_id: String,
    pub tour_name: String,
    pub card_id: String,
    pub name: String,
    pub position: String,
    pub rank: usize,
    pub change: i32,
    pub points: i32,
    pub earnings: i64,
    pub bracket: Option<PlayoffBracket>,
    pub strokes: Option<f64>,
}

/// Standings for every tour (or just `tour`), best card first within a tour.
#[must_use]
pub fn standings_report(
    snapshot: &LeagueSnapshot,
    now: DateTime<Utc>,
    config: &PlayoffConfig,
    tour: Option<&str>,
) -> Vec<StandingsRow> {
    let mut cards = snapshot.tour_cards.clone();
    if let Some(tour) = tour {
        cards.retain(|c| c.tour_id == tour);
    }
    assign_positions(&mut cards);
    assign_brackets(&mut cards, config);

    let histories = card_histories(&cards, &snapshot.teams, &snapshot.tournaments, now);
    let changes: HashMap<String, PositionChange, RandomState> = compute_position_changes(&histories)
        .into_iter()
        .map(|c| (c.card_id.clone(), c))
        .collect();
    let strokes: HashMap<String, f64, RandomState> = playoff_strokes(&cards, config)
        .into_iter()
        .map(|e| (e.card_id, e.strokes))
        .collect();

    let mut rows: Vec<StandingsRow> = cards
        .iter()
        .map(|card| {
            let change = changes.get(&card.id);
            StandingsRow {
                tour_id: card.tour_id.clone(),
                tour_name: snapshot
                    .tour_name(&card.tour_id)
                    .unwrap_or(card.tour_id.as_str())
                    .to_string(),
                card_id: card.id.clone(),
                name: card.label().to_string(),
                position: card.current_position.clone().unwrap_or_default(),
                rank: change.map_or(0, |c| c.position.rank),
                change: change.map_or(0, PositionChange::change_or_zero),
                points: card.points,
                earnings: card.earnings,
                bracket: card.playoff,
                strokes: strokes.get(&card.id).copied(),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.tour_name
            .cmp(&b.tour_name)
            .then_with(|| a.rank.cmp(&b.rank))
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

/// Plain text table, one block per tour.
#[must_use]
pub fn render_text(rows: &[StandingsRow]) -> String {
    let mut out = String::new();
    let mut current_tour: Option<&str> = None;
    for row in rows {
        if current_tour != Some(row.tour_id.as_str()) {
            if current_tour.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "== {} ==", row.tour_name);
            let _ = writeln!(
                out,
                "{:<5} {:>4}  {:<24} {:>7} {:>12}  {}",
                "POS", "+/-", "NAME", "POINTS", "EARNINGS", "PLAYOFF"
            );
            current_tour = Some(row.tour_id.as_str());
        }
        let playoff = match (row.bracket, row.strokes) {
            (Some(bracket), Some(strokes)) => format!("{bracket} {strokes:.1}"),
            (Some(bracket), None) => bracket.to_string(),
            (None, _) => String::new(),
        };
        let _ = writeln!(
            out,
            "{:<5} {:>4}  {:<24} {:>7} {:>12}  {}",
            row.position,
            format_change(row.change),
            row.name,
            row.points,
            format!("${}", row.earnings),
            playoff
        );
    }
    out
}

fn format_change(change: i32) -> String {
    match change {
        0 => "-".to_string(),
        c if c > 0 => format!("+{c}"),
        c => c.to_string(),
    }
}
