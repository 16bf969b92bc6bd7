pub mod position_change;
pub mod ranking;
pub mod results;

pub use position_change::*;
pub use ranking::*;
pub use results::*;
