//! Library layer for the People's Scorecard: FEC fetch orchestration,
//! input validation, and the contribution classification and aggregation
//! engine behind the big-money percentage.

pub mod analysis;
pub mod classify;
pub mod error;
pub mod fetcher;
pub mod validation;

pub use scorecard_fec;
pub use scorecard_fec::types;

pub use analysis::{analyze, AnalysisResult, CategoryBreakdown, CategorySummary, CategoryTotal};
pub use classify::{candidate_last_name, classify, DonorCategory};
pub use error::ScorecardError;
pub use fetcher::Fetcher;
