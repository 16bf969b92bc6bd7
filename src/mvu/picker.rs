use log::{debug, warn};
use serde::Serialize;

use crate::backend::{LeagueBackend, upsert_team};
use crate::model::{Golfer, NewTeam, Team};
use crate::picker::{PickSelection, PoolGroup, Rejection, ToggleOutcome, pool_view};

pub const EMPTY_POOL_MESSAGE: &str = "No golfers are available to pick for this tournament yet.";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Closed,
    Loading,
    EmptyPool,
    Ready,
    Saving,
}

#[derive(Debug, Clone)]
pub struct PickerModel {
    pub tournament_id: String,
    pub tour_card_id: String,
    /// The card's saved team for this tournament, if any.
    pub team: Option<Team>,
    pub state: PickerState,
    pub pool: Vec<Golfer>,
    pub selection: PickSelection,
    pub error: Option<String>,
    pub last_rejection: Option<Rejection>,
}

impl PickerModel {
    #[must_use]
    pub fn new(
        tournament_id: impl Into<String>,
        tour_card_id: impl Into<String>,
        team: Option<Team>,
    ) -> Self {
        Self {
            tournament_id: tournament_id.into(),
            tour_card_id: tour_card_id.into(),
            team,
            state: PickerState::Closed,
            pool: vec![],
            selection: PickSelection::new(),
            error: None,
            last_rejection: None,
        }
    }

    fn reset(&mut self) {
        self.pool.clear();
        self.selection = PickSelection::new();
        self.error = None;
        self.last_rejection = None;
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Open,
    PoolLoaded(Vec<Golfer>),
    PoolFailed(String),
    Toggle(i64),
    Save,
    Saved {
        team_id: String,
        golfer_ids: Vec<i64>,
    },
    SaveFailed(String),
    DismissError,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPool,
    UpsertTeam {
        team_id: Option<String>,
        team: NewTeam,
    },
}

pub fn update(model: &mut PickerModel, msg: Msg) -> Vec<Effect> {
    debug!("picker {:?} <- {msg:?}", model.state);
    match msg {
        Msg::Open => {
            if model.state != PickerState::Closed {
                return vec![];
            }
            model.reset();
            model.state = PickerState::Loading;
            vec![Effect::FetchPool]
        }
        Msg::PoolLoaded(pool) => {
            if model.state != PickerState::Loading {
                return vec![];
            }
            if pool.is_empty() {
                model.state = PickerState::EmptyPool;
                model.error = Some(EMPTY_POOL_MESSAGE.to_string());
                return vec![];
            }
            model.selection = match &model.team {
                Some(team) => PickSelection::from_team(&team.golfer_ids, &pool),
                None => PickSelection::new(),
            };
            model.pool = pool;
            model.state = PickerState::Ready;
            vec![]
        }
        Msg::PoolFailed(e) => {
            if model.state == PickerState::Loading {
                model.state = PickerState::EmptyPool;
                model.error = Some(e);
            }
            vec![]
        }
        Msg::Toggle(golfer_id) => {
            if model.state != PickerState::Ready {
                return vec![];
            }
            if let Some(golfer) = model.pool.iter().find(|g| g.api_id == golfer_id) {
                model.last_rejection = match model.selection.toggle(golfer) {
                    ToggleOutcome::Rejected(rejection) => Some(rejection),
                    ToggleOutcome::Added | ToggleOutcome::Removed => None,
                };
            }
            vec![]
        }
        Msg::Save => {
            if model.state != PickerState::Ready || !model.selection.can_save() {
                return vec![];
            }
            model.state = PickerState::Saving;
            model.error = None;
            model.last_rejection = None;
            vec![Effect::UpsertTeam {
                team_id: model.team.as_ref().map(|t| t.id.clone()),
                team: NewTeam {
                    tournament_id: model.tournament_id.clone(),
                    tour_card_id: model.tour_card_id.clone(),
                    golfer_ids: model.selection.golfer_ids(),
                },
            }]
        }
        Msg::Saved {
            team_id,
            golfer_ids,
        } => {
            // recorded even if the dialog was closed mid-save, so the next save updates
            match model.team.as_mut() {
                Some(team) => team.golfer_ids = golfer_ids,
                None => {
                    model.team = Some(Team::new(
                        team_id,
                        model.tournament_id.clone(),
                        model.tour_card_id.clone(),
                        golfer_ids,
                    ));
                }
            }
            if model.state == PickerState::Saving {
                model.state = PickerState::Closed;
                model.reset();
            }
            vec![]
        }
        Msg::SaveFailed(e) => {
            if model.state == PickerState::Saving {
                model.state = PickerState::Ready;
                model.error = Some(format!("Could not save your team: {e}"));
            }
            vec![]
        }
        Msg::DismissError => {
            if model.state != PickerState::EmptyPool {
                model.error = None;
                model.last_rejection = None;
            }
            vec![]
        }
        Msg::Close => {
            model.state = PickerState::Closed;
            model.reset();
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub backend: &'a dyn LeagueBackend,
}

pub async fn run_effect(effect: Effect, model: &PickerModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::FetchPool => match deps.backend.get_pick_pool(&model.tournament_id).await {
            Ok(pool) => Msg::PoolLoaded(pool),
            Err(e) => {
                warn!("pick pool for {} failed: {e}", model.tournament_id);
                Msg::PoolFailed(e.to_string())
            }
        },
        Effect::UpsertTeam { team_id, team } => {
            let golfer_ids = team.golfer_ids.clone();
            match upsert_team(deps.backend, team_id.as_deref(), team).await {
                Ok(team_id) => Msg::Saved {
                    team_id,
                    golfer_ids,
                },
                Err(e) => {
                    warn!("saving team for {} failed: {e}", model.tour_card_id);
                    Msg::SaveFailed(e.to_string())
                }
            }
        }
    }
}

/// What the picker dialog shows for a given model.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PickerView {
    pub state: PickerState,
    pub groups: Vec<PoolGroup>,
    pub selected: usize,
    pub can_save: bool,
    pub message: Option<String>,
}

#[must_use]
pub fn view(model: &PickerModel) -> PickerView {
    let groups = match model.state {
        PickerState::Ready | PickerState::Saving => pool_view(&model.pool, &model.selection),
        PickerState::Closed | PickerState::Loading | PickerState::EmptyPool => vec![],
    };
    PickerView {
        state: model.state,
        groups,
        selected: model.selection.len(),
        can_save: model.state == PickerState::Ready && model.selection.can_save(),
        message: model
            .error
            .clone()
            .or_else(|| model.last_rejection.map(|r| r.to_string())),
    }
}
