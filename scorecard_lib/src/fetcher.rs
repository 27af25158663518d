//! Fetch orchestration over the FEC client.
//!
//! Hides pagination and transient-failure retry from the analysis layer:
//! callers get plain record lists.

use scorecard_fec::types::{Candidate, Committee, Contribution};
use scorecard_fec::{CandidateSearchQuery, CommitteeQuery, FecClient, ReceiptsQuery};

use crate::error::ScorecardError;
use crate::validation;

/// Records per page requested from the FEC API.
const PAGE_SIZE: i32 = 100;

/// High-level fetch operations against the FEC API.
pub struct Fetcher {
    client: FecClient,
}

impl Fetcher {
    pub fn new(client: FecClient) -> Self {
        Self { client }
    }

    /// Search candidates by name, one page of at most 100 matches.
    pub async fn search_candidates(
        &self,
        name: &str,
        cycle: i32,
        office: Option<&str>,
    ) -> Result<Vec<Candidate>, ScorecardError> {
        let name = validation::sanitize_name(name)?;
        let cycle = validation::validate_cycle(cycle)?;

        let mut query = CandidateSearchQuery::default()
            .with_name(&name)
            .with_cycle(cycle)
            .with_per_page(PAGE_SIZE);
        if let Some(office) = office {
            query = query.with_office(&validation::validate_office(office)?);
        }

        let response = self.client.search_candidates(&query).await?;
        Ok(response.results)
    }

    /// All committees authorized by a candidate for the cycle. An empty
    /// list means the candidate has no committees for that cycle.
    pub async fn get_candidate_committees(
        &self,
        candidate_id: &str,
        cycle: i32,
    ) -> Result<Vec<Committee>, ScorecardError> {
        let cycle = validation::validate_cycle(cycle)?;

        let query = CommitteeQuery::default()
            .with_cycle(cycle)
            .with_per_page(PAGE_SIZE);
        let response = self
            .client
            .get_candidate_committees(candidate_id, &query)
            .await?;
        Ok(response.results)
    }

    /// Fetch itemized receipts for a committee, newest first, page by page
    /// until the API reports no further pages or `max_pages` is reached.
    ///
    /// A page-level failure after the client's retries are exhausted stops
    /// paging and returns whatever was accumulated so far; partial data is
    /// preferred over an all-or-nothing fetch.
    pub async fn get_committee_receipts(
        &self,
        committee_id: &str,
        cycle: i32,
        max_pages: Option<u32>,
    ) -> Vec<Contribution> {
        let mut all_receipts: Vec<Contribution> = Vec::new();
        let mut page: u32 = 1;

        loop {
            if let Some(cap) = max_pages {
                if page > cap {
                    break;
                }
            }

            let query = ReceiptsQuery::default()
                .with_committee_id(committee_id)
                .with_cycle(cycle)
                .with_per_page(PAGE_SIZE)
                .with_page(page as i32)
                .with_sort("-contribution_receipt_date");

            let response = match self.client.get_receipts(&query).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(
                        "Receipts page {} for {} failed after retries, returning {} records fetched so far: {}",
                        page,
                        committee_id,
                        all_receipts.len(),
                        e
                    );
                    break;
                }
            };

            if response.results.is_empty() {
                break;
            }
            all_receipts.extend(response.results);
            tracing::info!(
                "Fetched receipts page {} for {}, {} records so far",
                page,
                committee_id,
                all_receipts.len()
            );

            if (page as i64) >= response.pagination.pages.unwrap_or(1) {
                break;
            }
            page += 1;
        }

        all_receipts
    }
}
