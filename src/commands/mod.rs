//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreResult, score_words};
pub use simple::{LineAction, answer_resume, handle_line, run_simple};
