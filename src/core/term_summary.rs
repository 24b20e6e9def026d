use crate::core::agreement::JusticeAgreementAggregator;
use crate::core::classification::{classify, CaseClassification};
use crate::core::court_summary::CourtSummaryAggregator;
use crate::core::justice_summary::JusticeSummaryAggregator;
use crate::core::timing::decision_timing;
use crate::domain::model::{Case, TermId};
use crate::domain::summary::{CaseOverview, TermSummaryResponse};
use crate::utils::error::{Result, TrackerError};

/// Cases that carry opinions and an argument date.
pub fn merit_cases(cases: &[Case]) -> Vec<&Case> {
    cases
        .iter()
        .filter(|case| {
            let merit = case.is_merit();
            if !merit {
                tracing::debug!("Case {} is not a merit case, skipping", case.id);
            }
            merit
        })
        .collect()
}

/// Runs every term aggregate over the merit cases of `cases`. Never fails;
/// a term without merit cases yields empty aggregates.
pub fn build_term_summary(term_id: TermId, cases: &[Case]) -> TermSummaryResponse {
    let merit = merit_cases(cases);
    tracing::debug!(
        "Term {}: {} of {} cases eligible for analysis",
        term_id,
        merit.len(),
        cases.len()
    );

    let mut justices = JusticeSummaryAggregator::new();
    let mut courts = CourtSummaryAggregator::new();
    let mut unanimous = Vec::new();
    let mut party_split = Vec::new();

    for case in &merit {
        justices.add_case(case);
        courts.add_case(case);
        match classify(case) {
            CaseClassification::Unanimous => unanimous.push(CaseOverview::from(*case)),
            CaseClassification::PartySplit => party_split.push(CaseOverview::from(*case)),
            CaseClassification::Divided => {}
        }
    }

    let mut agreement = JusticeAgreementAggregator::new(justices.justice_ids());
    for case in &merit {
        agreement.add_case(case);
    }

    let timing = decision_timing(merit.iter().copied());
    let term_end_date = merit.iter().filter_map(|case| case.decision_date).max();

    TermSummaryResponse {
        term_id,
        term_end_date,
        justice_summary: justices.finish(),
        court_summary: courts.finish(),
        justice_agreement: agreement.finish(),
        unanimous,
        party_split,
        average_decision_days: timing.average_days,
        median_decision_days: timing.median_days,
    }
}

/// Like [`build_term_summary`], but a term without any case at all is an error.
pub fn summarize_term(term_id: TermId, cases: &[Case]) -> Result<TermSummaryResponse> {
    if cases.is_empty() {
        return Err(TrackerError::TermNotFound { term_id });
    }
    Ok(build_term_summary(term_id, cases))
}
