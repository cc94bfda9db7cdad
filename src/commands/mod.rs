//! Command implementations

pub mod compare;
pub mod hint;
pub mod score;
pub mod search;
pub mod suggest;

pub use compare::{CompareReport, CompareRow, run_compare};
pub use hint::{DEFAULT_HINT_CAP, HintReport, run_hint};
pub use score::{ScoreReport, run_score};
pub use search::{SearchReport, run_search};
pub use suggest::{SuggestedPair, run_suggest};
