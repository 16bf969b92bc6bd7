use log::{error, info};
use rusty_golf_league::LeagueError;
use rusty_golf_league::args::{self, CleanArgs};
use rusty_golf_league::report::{render_text, standings_report};
use rusty_golf_league::standings::{apply_results, score_tournament};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if let Err(e) = args::args_checks().and_then(run) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: CleanArgs) -> Result<(), LeagueError> {
    let mut snapshot = args.snapshot;

    if let Some(tournament_id) = args.score_tournament.as_deref() {
        let tournament = snapshot
            .tournament(tournament_id)
            .cloned()
            .ok_or_else(|| LeagueError::NotFound(format!("tournament {tournament_id}")))?;
        let tier = snapshot
            .tier_for(&tournament)
            .cloned()
            .ok_or_else(|| LeagueError::NotFound(format!("tier {}", tournament.tier_id)))?;
        let scored = score_tournament(&tournament, &tier, &snapshot.tour_cards, &mut snapshot.teams);
        apply_results(&mut snapshot.tour_cards, &snapshot.teams, tournament_id);
        info!("applied {scored} results from {}", tournament.name);
    }

    let rows = standings_report(&snapshot, args.now, &args.playoff, args.tour.as_deref());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_text(&rows));
    }
    Ok(())
}
