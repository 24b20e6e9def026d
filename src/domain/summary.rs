use crate::domain::model::{Case, CaseId, Court, Justice, JusticeId, OpinionType, TermId};
use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Per-justice authorship and participation counters for one term.
#[derive(Debug, Clone, PartialEq)]
pub struct TermJusticeSummary {
    pub justice: Justice,
    pub majority_author: u32,
    pub concurring_author: u32,
    pub concur_judgement_author: u32,
    pub dissent_author: u32,
    pub dissent_judgement_author: u32,
    pub cases_in_majority: u32,
    pub cases_with_opinion: u32,
}

impl TermJusticeSummary {
    pub fn new(justice: Justice) -> Self {
        Self {
            justice,
            majority_author: 0,
            concurring_author: 0,
            concur_judgement_author: 0,
            dissent_author: 0,
            dissent_judgement_author: 0,
            cases_in_majority: 0,
            cases_with_opinion: 0,
        }
    }

    /// `None` when the justice has no counted cases.
    pub fn percent_in_majority(&self) -> Option<f64> {
        if self.cases_with_opinion == 0 {
            return None;
        }
        Some(f64::from(self.cases_in_majority) / f64::from(self.cases_with_opinion))
    }

    pub fn increment_type(&mut self, opinion_type: OpinionType) {
        match opinion_type {
            OpinionType::Majority => self.majority_author += 1,
            OpinionType::Concurrence => self.concurring_author += 1,
            OpinionType::ConcurJudgement => self.concur_judgement_author += 1,
            OpinionType::Dissent => self.dissent_author += 1,
            OpinionType::DissentJudgement => self.dissent_judgement_author += 1,
            // per curiam opinions have no official author
            OpinionType::PerCurium => {}
        }
    }
}

impl Serialize for TermJusticeSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TermJusticeSummary", 9)?;
        state.serialize_field("justice", &self.justice)?;
        state.serialize_field("majorityAuthor", &self.majority_author)?;
        state.serialize_field("concurringAuthor", &self.concurring_author)?;
        state.serialize_field("concurJudgementAuthor", &self.concur_judgement_author)?;
        state.serialize_field("dissentAuthor", &self.dissent_author)?;
        state.serialize_field("dissentJudgementAuthor", &self.dissent_judgement_author)?;
        state.serialize_field("casesInMajority", &self.cases_in_majority)?;
        state.serialize_field("casesWithOpinion", &self.cases_with_opinion)?;
        state.serialize_field("percentInMajority", &self.percent_in_majority())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermCourtSummary {
    pub court: Court,
    pub cases: u32,
    pub affirmed: u32,
    pub reversed_remanded: u32,
}

impl TermCourtSummary {
    pub fn new(court: Court) -> Self {
        Self {
            court,
            cases: 0,
            affirmed: 0,
            reversed_remanded: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JusticeAgreementResponse {
    pub justice_id: JusticeId,
    pub opinion_agreement_map: BTreeMap<JusticeId, f64>,
    pub case_agreement_map: BTreeMap<JusticeId, f64>,
}

/// Case listing used in the unanimous and party-split lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseOverview {
    pub id: CaseId,
    pub title: String,
    pub short_summary: String,
    pub status: String,
    pub argument_date: Option<NaiveDate>,
    pub decision_date: Option<NaiveDate>,
    pub result: Option<String>,
    pub decision_summary: Option<String>,
    pub important: bool,
}

impl From<&Case> for CaseOverview {
    fn from(case: &Case) -> Self {
        Self {
            id: case.id,
            title: case.title.clone(),
            short_summary: case.short_summary.clone(),
            status: case.status.clone(),
            argument_date: case.argument_date,
            decision_date: case.decision_date,
            result: case.result.clone(),
            decision_summary: case.decision_summary.clone(),
            important: case.important,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSummaryResponse {
    pub term_id: TermId,
    pub term_end_date: Option<NaiveDate>,
    pub justice_summary: Vec<TermJusticeSummary>,
    pub court_summary: Vec<TermCourtSummary>,
    pub justice_agreement: Vec<JusticeAgreementResponse>,
    pub unanimous: Vec<CaseOverview>,
    pub party_split: Vec<CaseOverview>,
    /// `None` when no merit case has both an argument and a decision date.
    pub average_decision_days: Option<i64>,
    pub median_decision_days: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn justice() -> Justice {
        Justice {
            id: 1,
            name: "John Roberts".to_string(),
            party: "R".to_string(),
            date_confirmed: NaiveDate::from_ymd_opt(2005, 9, 29).unwrap(),
            birthday: None,
            date_retired: None,
        }
    }

    #[test]
    fn test_percent_in_majority_without_cases_is_none() {
        let summary = TermJusticeSummary::new(justice());
        assert_eq!(summary.percent_in_majority(), None);
    }

    #[test]
    fn test_percent_in_majority_ratio() {
        let mut summary = TermJusticeSummary::new(justice());
        summary.cases_in_majority = 3;
        summary.cases_with_opinion = 4;
        assert_eq!(summary.percent_in_majority(), Some(0.75));
    }

    #[test]
    fn test_increment_type_ignores_per_curiam() {
        let mut summary = TermJusticeSummary::new(justice());
        summary.increment_type(OpinionType::PerCurium);
        summary.increment_type(OpinionType::DissentJudgement);
        assert_eq!(summary.majority_author, 0);
        assert_eq!(summary.dissent_judgement_author, 1);
    }

    #[test]
    fn test_justice_summary_serializes_derived_percent() {
        let mut summary = TermJusticeSummary::new(justice());
        summary.cases_in_majority = 1;
        summary.cases_with_opinion = 2;
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["percentInMajority"], serde_json::json!(0.5));
        assert_eq!(value["casesWithOpinion"], serde_json::json!(2));
        assert_eq!(value["justice"]["id"], serde_json::json!(1));
        assert_eq!(value["justice"]["dateConfirmed"], serde_json::json!("2005-09-29"));
        assert!(value["justice"].get("date_confirmed").is_none());
    }

    #[test]
    fn test_court_summary_serializes_court_in_camel_case() {
        let summary = TermCourtSummary::new(Court {
            id: 9,
            short_name: "CA9".to_string(),
            name: "Ninth Circuit".to_string(),
        });
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["court"]["shortName"], serde_json::json!("CA9"));
        assert_eq!(value["reversedRemanded"], serde_json::json!(0));
    }
}
