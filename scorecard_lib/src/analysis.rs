//! Aggregation of classified contributions into a per-candidate summary.
//!
//! [`analyze`] is a pure function from a record slice and a candidate name
//! to an [`AnalysisResult`]. It owns no shared state and is safe to call
//! concurrently across independent invocations.

use serde::Serialize;

use scorecard_fec::types::Contribution;

use crate::classify::{candidate_last_name, classify, DonorCategory};

/// Running totals, one accumulator per category. Constructed fresh per
/// analysis call and returned by value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub small_individual_donors: f64,
    pub large_individual_donors: f64,
    pub pacs: f64,
    pub party_committees: f64,
    pub other_candidates: f64,
    pub organizations: f64,
    pub self_funding: f64,
    pub conduits: f64,
    pub unknown: f64,
}

impl CategoryBreakdown {
    pub fn add(&mut self, category: DonorCategory, amount: f64) {
        match category {
            DonorCategory::SmallIndividualDonors => self.small_individual_donors += amount,
            DonorCategory::LargeIndividualDonors => self.large_individual_donors += amount,
            DonorCategory::Pacs => self.pacs += amount,
            DonorCategory::PartyCommittees => self.party_committees += amount,
            DonorCategory::OtherCandidates => self.other_candidates += amount,
            DonorCategory::Organizations => self.organizations += amount,
            DonorCategory::SelfFunding => self.self_funding += amount,
            DonorCategory::Conduits => self.conduits += amount,
            DonorCategory::Unknown => self.unknown += amount,
        }
    }

    /// Sum of all nine accumulators. Equals total raised: every counted
    /// record lands in exactly one category.
    pub fn total(&self) -> f64 {
        self.small_individual_donors
            + self.large_individual_donors
            + self.pacs
            + self.party_committees
            + self.other_candidates
            + self.organizations
            + self.self_funding
            + self.conduits
            + self.unknown
    }
}

/// One category's share of the money: rounded amount plus its percentage
/// of total raised.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub amount: f64,
    pub percentage: f64,
}

/// Per-category amounts and percentages, every percentage computed against
/// total raised.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub small_individual_donors: CategoryTotal,
    pub large_individual_donors: CategoryTotal,
    pub pacs: CategoryTotal,
    pub party_committees: CategoryTotal,
    pub other_candidates: CategoryTotal,
    pub organizations: CategoryTotal,
    pub self_funding: CategoryTotal,
    pub conduits: CategoryTotal,
    pub unknown: CategoryTotal,
}

/// The analysis output for one candidate. Immutable once computed.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub total_raised: f64,
    /// Number of records supplied, including excluded ones.
    pub total_receipts: usize,
    pub self_funding_amount: f64,
    pub big_money_amount: f64,
    pub grassroots_total: f64,
    pub countable_total: f64,
    pub big_money_percentage: f64,
    pub categories: CategorySummary,
}

/// Round to cents, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place, half away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn category_total(amount: f64, total_raised: f64) -> CategoryTotal {
    let percentage = if total_raised > 0.0 {
        round1(amount / total_raised * 100.0)
    } else {
        0.0
    };
    CategoryTotal {
        amount: round2(amount),
        percentage,
    }
}

/// Classify and aggregate a list of contribution records for one candidate.
///
/// Big money is PACs, party committees, other candidates' committees,
/// organizations, and large individual donors. Conduit money counts as
/// grassroots. The headline percentage is big money over the countable
/// total (total raised minus self-funding); small donors and conduits stay
/// in that denominator.
pub fn analyze(records: &[Contribution], candidate_name: &str) -> AnalysisResult {
    let last_name = candidate_last_name(candidate_name);

    let mut breakdown = CategoryBreakdown::default();
    for record in records {
        if let Some(category) = classify(record, last_name.as_deref()) {
            let amount = record.contribution_receipt_amount.unwrap_or(0.0);
            breakdown.add(category, amount);
        }
    }

    let total_raised = breakdown.total();
    let big_money = breakdown.pacs
        + breakdown.party_committees
        + breakdown.other_candidates
        + breakdown.organizations
        + breakdown.large_individual_donors;
    let grassroots = breakdown.small_individual_donors + breakdown.conduits;
    let countable = total_raised - breakdown.self_funding;

    let big_money_percentage = if countable > 0.0 {
        round1(big_money / countable * 100.0)
    } else {
        0.0
    };

    let categories = CategorySummary {
        small_individual_donors: category_total(breakdown.small_individual_donors, total_raised),
        large_individual_donors: category_total(breakdown.large_individual_donors, total_raised),
        pacs: category_total(breakdown.pacs, total_raised),
        party_committees: category_total(breakdown.party_committees, total_raised),
        other_candidates: category_total(breakdown.other_candidates, total_raised),
        organizations: category_total(breakdown.organizations, total_raised),
        self_funding: category_total(breakdown.self_funding, total_raised),
        conduits: category_total(breakdown.conduits, total_raised),
        unknown: category_total(breakdown.unknown, total_raised),
    };

    AnalysisResult {
        total_raised: round2(total_raised),
        total_receipts: records.len(),
        self_funding_amount: round2(breakdown.self_funding),
        big_money_amount: round2(big_money),
        grassroots_total: round2(grassroots),
        countable_total: round2(countable),
        big_money_percentage,
        categories,
    }
}
