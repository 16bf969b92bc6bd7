#![allow(dead_code)]

use async_trait::async_trait;
use rusty_golf_league::LeagueSnapshot;
use rusty_golf_league::backend::{BackendError, LeagueBackend, MemoryBackend};
use rusty_golf_league::model::{Golfer, NewTeam, TourCard};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub fn card(id: &str, tour_id: &str, points: i32) -> TourCard {
    TourCard {
        id: id.to_string(),
        member_id: format!("member-{id}"),
        tour_id: tour_id.to_string(),
        display_name: id.to_uppercase(),
        points,
        earnings: 0,
        current_position: None,
        playoff: None,
    }
}

pub fn golfer(api_id: i64, group: Option<u8>) -> Golfer {
    Golfer::new(api_id, format!("Golfer {api_id}"), group)
}

/// Twenty golfers: groups 1 through 5 with three each, then five ungrouped.
pub fn pool() -> Vec<Golfer> {
    let mut pool: Vec<Golfer> = (0..15)
        .map(|i| golfer(i + 1, Some(u8::try_from(i / 3 + 1).unwrap())))
        .collect();
    pool.extend((16..=20).map(|id| golfer(id, None)));
    pool
}

pub fn load_snapshot() -> LeagueSnapshot {
    LeagueSnapshot::from_json_str(include_str!("../test05/league_snapshot.json")).unwrap()
}

/// Wraps a memory backend and fails saves while `fail_saves` is set.
pub struct FlakyBackend {
    pub inner: MemoryBackend,
    pub fail_saves: AtomicBool,
    pub save_calls: AtomicUsize,
}

impl FlakyBackend {
    pub fn new(inner: MemoryBackend) -> Self {
        Self {
            inner,
            fail_saves: AtomicBool::new(true),
            save_calls: AtomicUsize::new(0),
        }
    }

    fn check(&self) -> Result<(), BackendError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            Err(BackendError::new("connection reset"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LeagueBackend for FlakyBackend {
    async fn get_pick_pool(&self, tournament_id: &str) -> Result<Vec<Golfer>, BackendError> {
        self.inner.get_pick_pool(tournament_id).await
    }

    async fn create_team(&self, team: NewTeam) -> Result<String, BackendError> {
        self.check()?;
        self.inner.create_team(team).await
    }

    async fn update_team(&self, team_id: &str, golfer_ids: &[i64]) -> Result<(), BackendError> {
        self.check()?;
        self.inner.update_team(team_id, golfer_ids).await
    }
}
