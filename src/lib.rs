//! Wordle Session
//!
//! Core of a Wordle-style game: guess scoring, keyboard hints, the turn state
//! machine, and saving unfinished games.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_session::core::{Feedback, LetterState, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess);
//! assert_eq!(feedback.states()[1], LetterState::Correct);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Board and turn state machine
pub mod game;

// Session codec and lifecycle
pub mod session;

// Statistics, settings and saved games
pub mod store;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
