pub mod args;
pub mod backend;
pub mod error;
pub mod model;
pub mod mvu;
pub mod picker;
pub mod playoff;
pub mod report;
pub mod standings;

pub use error::LeagueError;
pub use model::LeagueSnapshot;
