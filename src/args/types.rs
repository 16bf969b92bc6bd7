use chrono::{DateTime, Utc};
use clap::Parser;
use serde_json::Value;

use crate::model::LeagueSnapshot;
use crate::playoff::PlayoffConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// League snapshot json: tours, tour cards, tournaments, tiers, teams and pick pools.
    #[arg(
        short = 's',
        long,
        value_name = "SNAPSHOT_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub snapshot: Value,
    /// Only report this tour.
    #[arg(short = 't', long, value_name = "TOUR_ID")]
    pub tour: Option<String>,
    /// Treat this instant as the current time (RFC 3339). Defaults to now.
    #[arg(
        long,
        value_name = "RFC3339",
        value_parser = crate::args::validation::check_rfc3339
    )]
    pub now: Option<DateTime<Utc>>,
    /// Award points and earnings for this tournament from its team scores before reporting.
    #[arg(long, value_name = "TOURNAMENT_ID")]
    pub score_tournament: Option<String>,
    /// Cards per tour seeded into the gold bracket. Overrides the snapshot.
    #[arg(long, value_name = "COUNT")]
    pub gold_cut: Option<usize>,
    /// Cards per tour seeded into the silver bracket. Overrides the snapshot.
    #[arg(long, value_name = "COUNT")]
    pub silver_cut: Option<usize>,
    /// Print the standings as json instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub snapshot: LeagueSnapshot,
    pub tour: Option<String>,
    pub now: DateTime<Utc>,
    pub score_tournament: Option<String>,
    pub playoff: PlayoffConfig,
    pub json: bool,
}
