//! Client crate for the FEC campaign-finance API.
//!
//! Provides typed access to candidate search, candidate committees, and
//! Schedule A itemized receipts, with request pacing and bounded retries.

mod client;
mod errors;
pub mod query;
pub mod retry;
pub mod types;

pub use self::client::FecClient;
pub use self::errors::FecError;
pub use self::query::{CandidateSearchQuery, CommitteeQuery, ReceiptsQuery};
pub use self::retry::{with_retry, RetryPolicy};
