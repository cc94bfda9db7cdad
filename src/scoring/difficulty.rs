//! Difficulty tiers and their tuning constants
//!
//! A tier fixes the word-length band, the time budget, the hint allowance,
//! and the weights the scorer applies. The core never loads these from
//! anywhere; callers pick a tier and pass it in.

use std::fmt;
use std::time::Duration;

/// Game difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Advanced,
    Challenge,
}

/// Tuning constants for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultySettings {
    /// Inclusive band of word lengths played at this tier
    pub word_length_range: (usize, usize),
    /// Inclusive band of acceptable optimal ladder lengths (in steps)
    pub path_length_range: (u32, u32),
    /// Round time budget; `None` means untimed
    pub time_limit: Option<Duration>,
    /// Hints the player may spend per round
    pub hint_limit: u32,
    /// Score floor the round starts from
    pub base_score: u32,
    /// Bonus for matching the optimal ladder exactly
    pub optimal_path_bonus: u32,
    /// Points lost per second in untimed play
    pub time_factor: u32,
    /// Points lost per step beyond the optimal ladder
    pub move_factor: u32,
    /// Base cost of a hint; the i-th hint costs i times this
    pub hint_factor: u32,
}

const BEGINNER: DifficultySettings = DifficultySettings {
    word_length_range: (3, 4),
    path_length_range: (2, 4),
    time_limit: None,
    hint_limit: 5,
    base_score: 1000,
    optimal_path_bonus: 300,
    time_factor: 2,
    move_factor: 25,
    hint_factor: 50,
};

const ADVANCED: DifficultySettings = DifficultySettings {
    word_length_range: (5, 6),
    path_length_range: (4, 7),
    time_limit: Some(Duration::from_secs(300)),
    hint_limit: 3,
    base_score: 2000,
    optimal_path_bonus: 500,
    time_factor: 5,
    move_factor: 50,
    hint_factor: 150,
};

const CHALLENGE: DifficultySettings = DifficultySettings {
    word_length_range: (6, 8),
    path_length_range: (7, u32::MAX),
    time_limit: Some(Duration::from_secs(180)),
    hint_limit: 1,
    base_score: 3000,
    optimal_path_bonus: 1000,
    time_factor: 10,
    move_factor: 100,
    hint_factor: 300,
};

impl Difficulty {
    /// Create difficulty from name string
    ///
    /// Supported names: "beginner", "advanced", "challenge".
    /// Defaults to beginner if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "advanced" => Self::Advanced,
            "challenge" => Self::Challenge,
            _ => Self::Beginner,
        }
    }

    /// Short display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Advanced => "advanced",
            Self::Challenge => "challenge",
        }
    }

    /// The tuning constants for this tier
    #[must_use]
    pub const fn settings(self) -> &'static DifficultySettings {
        match self {
            Self::Beginner => &BEGINNER,
            Self::Advanced => &ADVANCED,
            Self::Challenge => &CHALLENGE,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
