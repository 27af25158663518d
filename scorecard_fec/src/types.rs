//! Types for FEC API requests and responses.

use serde::{Deserialize, Serialize};

// ============================================================================
// Candidate Types
// ============================================================================

/// Response wrapper for candidate search endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CandidateSearchResponse {
    pub results: Vec<Candidate>,
    pub pagination: Pagination,
}

/// Candidate record from the FEC API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Candidate {
    pub candidate_id: String,
    pub name: String,
    pub party: Option<String>,
    pub office: Option<String>,
    pub office_full: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    #[serde(default)]
    pub cycles: Vec<i32>,
    pub candidate_status: Option<String>,
    pub incumbent_challenge: Option<String>,
}

/// Page-number pagination info returned by every endpoint used here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Pagination {
    pub count: i64,
    pub page: Option<i64>,
    pub pages: Option<i64>,
    pub per_page: i64,
}

// ============================================================================
// Committee Types
// ============================================================================

/// Response wrapper for the candidate committees endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommitteeResponse {
    pub results: Vec<Committee>,
    pub pagination: Pagination,
}

/// Committee record from the FEC API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Committee {
    pub committee_id: String,
    pub name: String,
    pub committee_type: Option<String>,
    pub designation: Option<String>,
    pub party: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub cycles: Vec<i32>,
}

// ============================================================================
// Schedule A (Contribution) Types
// ============================================================================

/// Response wrapper for the Schedule A receipts endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReceiptsResponse {
    pub results: Vec<Contribution>,
    pub pagination: Pagination,
}

/// Itemized contribution record from Schedule A.
///
/// Every field is optional; upstream records are frequently sparse and the
/// analysis layer absorbs missing values rather than rejecting them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Contribution {
    pub sub_id: Option<String>,
    pub contributor_name: Option<String>,
    pub contributor_state: Option<String>,
    pub contributor_employer: Option<String>,
    pub contributor_occupation: Option<String>,
    pub entity_type: Option<String>,
    pub contribution_receipt_date: Option<String>,
    pub contribution_receipt_amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contribution_tolerates_sparse_records() {
        let record: Contribution = serde_json::from_str("{}").unwrap();
        assert!(record.contributor_name.is_none());
        assert!(record.entity_type.is_none());
        assert!(record.contribution_receipt_amount.is_none());
    }

    #[test]
    fn pagination_tolerates_missing_pages() {
        let json = r#"{"count": 0, "per_page": 100}"#;
        let pagination: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(pagination.count, 0);
        assert!(pagination.pages.is_none());
    }
}
