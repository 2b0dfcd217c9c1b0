//! Per-letter classification

use std::fmt;

/// Classification of one guessed letter
///
/// Totally ordered: a higher state supersedes a lower one. The numeric codes
/// are the ones written to saved sessions (0 is reserved for keyboard keys that
/// were never guessed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    /// Letter does not occur in the secret (or its occurrences are used up)
    Absent = 1,
    /// Letter occurs in the secret at another position
    Present = 2,
    /// Letter is at the exact position
    Correct = 3,
}

impl LetterState {
    /// Numeric code of the state (1-3)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse a numeric code (1-3)
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Absent),
            2 => Some(Self::Present),
            3 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Emoji square used in shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}
