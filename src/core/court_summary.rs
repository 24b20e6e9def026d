use crate::domain::model::{Case, Court, CourtId, LowerCourtOutcome};
use crate::domain::summary::TermCourtSummary;
use std::collections::{BTreeMap, HashMap};

/// Lower-court affirm / reverse tallies, keyed by court.
#[derive(Debug, Default)]
pub struct CourtSummaryAggregator {
    summaries: BTreeMap<CourtId, TermCourtSummary>,
}

impl CourtSummaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_case(&mut self, case: &Case) {
        let outcomes: HashMap<(CourtId, LowerCourtOutcome), &Court> = case
            .dockets
            .iter()
            .filter(|d| d.outcome != LowerCourtOutcome::Pending)
            .map(|d| ((d.lower_court.id, d.outcome), &d.lower_court))
            .collect();

        for ((court_id, outcome), court) in outcomes {
            let summary = self
                .summaries
                .entry(court_id)
                .or_insert_with(|| TermCourtSummary::new(court.clone()));
            summary.cases += 1;
            match outcome {
                LowerCourtOutcome::ReversedRemanded => summary.reversed_remanded += 1,
                LowerCourtOutcome::Affirmed => summary.affirmed += 1,
                LowerCourtOutcome::Pending => {}
            }
        }
    }

    pub fn finish(self) -> Vec<TermCourtSummary> {
        self.summaries.into_values().collect()
    }
}
