//! Query builders for FEC API endpoints.

// ============================================================================
// Candidate Search
// ============================================================================

/// Query builder for the candidate search endpoint.
#[derive(Debug, Clone, Default)]
pub struct CandidateSearchQuery {
    pub name: Option<String>,
    pub office: Option<String>,
    pub state: Option<String>,
    pub party: Option<String>,
    pub cycle: Option<i32>,
    pub page: Option<i32>,
    pub per_page: Option<i32>,
}

impl CandidateSearchQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_office(mut self, office: &str) -> Self {
        self.office = Some(office.to_string());
        self
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn with_party(mut self, party: &str) -> Self {
        self.party = Some(party.to_string());
        self
    }

    pub fn with_cycle(mut self, cycle: i32) -> Self {
        self.cycle = Some(cycle);
        self
    }

    pub fn with_page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: i32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Build query parameter pairs (excluding None values).
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref name) = self.name {
            params.push(("name".to_string(), name.clone()));
        }
        if let Some(ref office) = self.office {
            params.push(("office".to_string(), office.clone()));
        }
        if let Some(ref state) = self.state {
            params.push(("state".to_string(), state.clone()));
        }
        if let Some(ref party) = self.party {
            params.push(("party".to_string(), party.clone()));
        }
        if let Some(cycle) = self.cycle {
            params.push(("cycle".to_string(), cycle.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page".to_string(), per_page.to_string()));
        }

        params
    }
}

// ============================================================================
// Candidate Committees
// ============================================================================

/// Query builder for the candidate committees endpoint.
#[derive(Debug, Clone, Default)]
pub struct CommitteeQuery {
    pub cycle: Option<i32>,
    pub per_page: Option<i32>,
}

impl CommitteeQuery {
    pub fn with_cycle(mut self, cycle: i32) -> Self {
        self.cycle = Some(cycle);
        self
    }

    pub fn with_per_page(mut self, per_page: i32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Build query parameter pairs (excluding None values).
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(cycle) = self.cycle {
            params.push(("cycle".to_string(), cycle.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page".to_string(), per_page.to_string()));
        }

        params
    }
}

// ============================================================================
// Schedule A Receipts
// ============================================================================

/// Query builder for the Schedule A receipts endpoint.
///
/// Receipts are paged by explicit page number against the
/// `two_year_transaction_period`, sorted by receipt date.
#[derive(Debug, Clone, Default)]
pub struct ReceiptsQuery {
    pub committee_id: Option<String>,
    pub two_year_transaction_period: Option<i32>,
    pub per_page: Option<i32>,
    pub page: Option<i32>,
    pub sort: Option<String>,
}

impl ReceiptsQuery {
    pub fn with_committee_id(mut self, committee_id: &str) -> Self {
        self.committee_id = Some(committee_id.to_string());
        self
    }

    pub fn with_cycle(mut self, cycle: i32) -> Self {
        self.two_year_transaction_period = Some(cycle);
        self
    }

    pub fn with_per_page(mut self, per_page: i32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_page(mut self, page: i32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }

    /// Build query parameter pairs (excluding None values).
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref committee_id) = self.committee_id {
            params.push(("committee_id".to_string(), committee_id.clone()));
        }
        if let Some(cycle) = self.two_year_transaction_period {
            params.push((
                "two_year_transaction_period".to_string(),
                cycle.to_string(),
            ));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(ref sort) = self.sort {
            params.push(("sort".to_string(), sort.clone()));
        }

        params
    }
}

// ============================================================================
// Tests
// ============================================================================
