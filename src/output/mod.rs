//! Terminal output formatting
//!
//! Colored board rendering and result printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_best_start_result, print_showdown_result, write_board_header, write_guess_history,
};
