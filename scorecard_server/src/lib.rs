//! Router construction for the scorecard API, shared by the binary and
//! the integration tests.

pub mod routes;

pub use routes::{router, AppState};
