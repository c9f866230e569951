//! Command implementations

pub mod best_start;
pub mod octordle;
pub mod play;
pub mod showdown;

pub use best_start::{BestStartResult, OpenerScore, run_best_start};
pub use octordle::{Command, Octordle, Outcome};
pub use play::run_play;
pub use showdown::{BrokenMatch, MatchOutcome, ShowdownResult, play_match, run_showdown};
