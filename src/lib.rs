//! Octordle Solver
//!
//! Feedback-driven candidate elimination for Wordle-style games played on
//! several boards at once.
//!
//! # Quick Start
//!
//! ```rust
//! use octordle_solver::board::CandidateBoard;
//! use octordle_solver::core::{FeedbackCode, Word};
//!
//! let universe: Vec<Word> = ["haunt", "taunt", "plumb"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut board = CandidateBoard::new(1, &universe);
//!
//! let otter = Word::new("otter").unwrap();
//! board.update_result(&otter, FeedbackCode::parse("APAAA").unwrap()).unwrap();
//!
//! assert_eq!(board.sole_candidate().map(Word::text), Some("haunt"));
//! ```

// Core domain types
pub mod core;

// Boards and candidate filtering
pub mod board;

// Multi-board play, configuration and persistence
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
