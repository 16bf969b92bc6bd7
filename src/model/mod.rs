pub mod card;
pub mod golfer;
pub mod snapshot;
pub mod team;
pub mod tournament;

pub use card::*;
pub use golfer::*;
pub use snapshot::*;
pub use team::*;
pub use tournament::*;
