mod common;
use crate::common::card;

use rusty_golf_league::model::{PlayoffBracket, Team, Tier, Tournament};
use rusty_golf_league::playoff::{
    PlayoffConfig, allocate_strokes, assign_brackets, gold_strokes, playoff_strokes,
    silver_strokes,
};
use rusty_golf_league::standings::{apply_results, rank_by_score, score_tournament};

#[test]
fn test02_gold_interpolates_between_top_and_last() {
    let config = PlayoffConfig::default();
    let strokes = gold_strokes(&[100, 100, 90, 80], &config);
    assert_eq!(strokes, vec![-10.0, -10.0, -5.0, 0.0]);

    let strokes = gold_strokes(&[300, 250, 210, 200], &config);
    assert_eq!(strokes, vec![-10.0, -5.0, -1.0, 0.0]);

    // one decimal
    let strokes = gold_strokes(&[30, 20, 0], &config);
    assert_eq!(strokes, vec![-10.0, -6.7, 0.0]);
}

#[test]
fn test02_degenerate_brackets_are_even() {
    let config = PlayoffConfig::default();
    assert!(gold_strokes(&[], &config).is_empty());
    for size in 1..=40 {
        let points = vec![75; size];
        let gold = gold_strokes(&points, &config);
        let silver = silver_strokes(&points, &config);
        assert_eq!(gold.len(), size);
        assert!(gold.iter().all(|s| *s == 0.0 && s.is_finite()));
        assert!(silver.iter().all(|s| *s == 0.0 && s.is_finite()));
    }
    assert_eq!(gold_strokes(&[5], &config), vec![0.0]);
}

#[test]
fn test02_silver_floor_stops_at_thirty_sixth() {
    let config = PlayoffConfig::default();
    // 140 down to 101; the 36th card has 105
    let points: Vec<i32> = (0..40).map(|i| 140 - i).collect();

    let silver = silver_strokes(&points, &config);
    assert_eq!(silver[0], -10.0);
    assert_eq!(silver[35], 0.0);
    assert_eq!(silver[7], -8.0);
    // past the floor the strokes are not clamped
    assert_eq!(silver[39], 1.1);

    let gold = gold_strokes(&points, &config);
    assert_eq!(gold[35], -1.0);
    assert_eq!(gold[39], 0.0);

    // small silver brackets floor on their own last card, same as gold
    let small: Vec<i32> = (0..20).map(|i| 60 - i).collect();
    assert_eq!(silver_strokes(&small, &config), gold_strokes(&small, &config));
}

#[test]
fn test02_ties_take_the_mean_and_allocation_is_repeatable() {
    let points = [100, 97, 97, 90];
    let first = allocate_strokes(&points, None, 10.0);
    let second = allocate_strokes(&points, None, 10.0);
    assert_eq!(first, second);
    assert_eq!(first, vec![-10.0, -7.0, -7.0, 0.0]);
    // the floor card reads as 0.0, not -0.0
    assert!(!first[3].is_sign_negative());
}

#[test]
fn test02_assign_brackets_and_seed() {
    let config = PlayoffConfig {
        gold_cut: 2,
        silver_cut: 3,
        ..PlayoffConfig::default()
    };
    let mut cards = vec![
        card("f", "pga", 10),
        card("a", "pga", 100),
        card("c", "pga", 60),
        card("b", "pga", 80),
        card("e", "pga", 20),
        card("d", "pga", 40),
        card("x", "dp", 5),
    ];
    assign_brackets(&mut cards, &config);
    let bracket = |id: &str| cards.iter().find(|c| c.id == id).unwrap().playoff;
    assert_eq!(bracket("a"), Some(PlayoffBracket::Gold));
    assert_eq!(bracket("b"), Some(PlayoffBracket::Gold));
    assert_eq!(bracket("c"), Some(PlayoffBracket::Silver));
    assert_eq!(bracket("d"), Some(PlayoffBracket::Silver));
    assert_eq!(bracket("e"), Some(PlayoffBracket::Silver));
    assert_eq!(bracket("f"), None);
    assert_eq!(bracket("x"), Some(PlayoffBracket::Gold));
    assert!(cards.iter().find(|c| c.id == "a").unwrap().is_playoff_eligible());

    let entries = playoff_strokes(&cards, &config);
    let summary: Vec<(&str, PlayoffBracket, f64)> = entries
        .iter()
        .map(|e| (e.card_id.as_str(), e.bracket, e.strokes))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("x", PlayoffBracket::Gold, 0.0),
            ("a", PlayoffBracket::Gold, -10.0),
            ("b", PlayoffBracket::Gold, 0.0),
            ("c", PlayoffBracket::Silver, -10.0),
            ("d", PlayoffBracket::Silver, -5.0),
            ("e", PlayoffBracket::Silver, 0.0),
        ]
    );
}

#[test]
fn test02_score_tournament_splits_ties() -> Result<(), Box<dyn std::error::Error>> {
    let tournament = Tournament {
        id: "t9".to_string(),
        name: "Memorial".to_string(),
        tier_id: "standard".to_string(),
        start_date: "2026-06-04T12:00:00Z".parse()?,
        end_date: "2026-06-07T23:00:00Z".parse()?,
    };
    let tier = Tier {
        id: "standard".to_string(),
        name: "Standard".to_string(),
        playoff: false,
        points: vec![100, 50, 30, 10],
        payouts: vec![1000, 500, 301, 100],
    };
    let mut cards = vec![
        card("a", "pga", 0),
        card("b", "pga", 0),
        card("c", "pga", 0),
        card("d", "pga", 0),
        card("e", "pga", 0),
        card("f", "dp", 0),
    ];
    let mut teams: Vec<Team> = ["a", "b", "c", "d", "e", "f"]
        .iter()
        .map(|id| Team::new(format!("team-{id}"), "t9", *id, vec![]))
        .collect();
    for (team, score) in teams.iter_mut().zip([Some(-5), Some(-3), Some(-3), Some(2), None, Some(4)]) {
        team.score = score;
    }
    let mut other = Team::new("team-old", "t8", "a", vec![]);
    other.points = Some(7);
    teams.push(other);

    let scored = score_tournament(&tournament, &tier, &cards, &mut teams);
    assert_eq!(scored, 5);

    let result = |id: &str| {
        let team = teams.iter().find(|t| t.tour_card_id == id && t.tournament_id == "t9").unwrap();
        (team.position.clone(), team.points, team.earnings)
    };
    assert_eq!(result("a"), (Some("1".to_string()), Some(100), Some(1000)));
    assert_eq!(result("b"), (Some("T2".to_string()), Some(40), Some(401)));
    assert_eq!(result("c"), (Some("T2".to_string()), Some(40), Some(401)));
    assert_eq!(result("d"), (Some("4".to_string()), Some(10), Some(100)));
    assert_eq!(result("e"), (None, Some(0), Some(0)));
    // wins its own tour
    assert_eq!(result("f"), (Some("1".to_string()), Some(100), Some(1000)));

    apply_results(&mut cards, &teams, "t9");
    let totals: Vec<(i32, i64)> = cards.iter().map(|c| (c.points, c.earnings)).collect();
    assert_eq!(
        totals,
        vec![(100, 1000), (40, 401), (40, 401), (10, 100), (0, 0), (100, 1000)]
    );
    Ok(())
}

#[test]
fn test02_score_positions_follow_score_ranking() -> Result<(), Box<dyn std::error::Error>> {
    let tournament = Tournament {
        id: "t9".to_string(),
        name: "Memorial".to_string(),
        tier_id: "short".to_string(),
        start_date: "2026-06-04T12:00:00Z".parse()?,
        end_date: "2026-06-07T23:00:00Z".parse()?,
    };
    let tier = Tier {
        id: "short".to_string(),
        name: "Short".to_string(),
        playoff: false,
        points: vec![90, 60, 30],
        payouts: vec![900, 600, 301],
    };
    let ids = ["a", "b", "c", "d", "e"];
    let scores = [1, -4, 1, 1, -4];
    let cards: Vec<_> = ids.iter().map(|id| card(id, "pga", 0)).collect();
    let mut teams: Vec<Team> = ids
        .iter()
        .zip(scores)
        .map(|(id, score)| {
            let mut team = Team::new(format!("team-{id}"), "t9", *id, vec![]);
            team.score = Some(score);
            team
        })
        .collect();

    assert_eq!(score_tournament(&tournament, &tier, &cards, &mut teams), 5);

    let expected: Vec<String> = rank_by_score(&scores).iter().map(ToString::to_string).collect();
    let positions: Vec<String> = teams.iter().filter_map(|t| t.position.clone()).collect();
    assert_eq!(positions, expected);
    assert_eq!(positions, vec!["T3", "T1", "T3", "T3", "T1"]);

    // T1 splits places one and two; T3 covers place three and two past the table
    let awards: Vec<(Option<i32>, Option<i64>)> =
        teams.iter().map(|t| (t.points, t.earnings)).collect();
    assert_eq!(
        awards,
        vec![
            (Some(10), Some(100)),
            (Some(75), Some(750)),
            (Some(10), Some(100)),
            (Some(10), Some(100)),
            (Some(75), Some(750)),
        ]
    );
    Ok(())
}
