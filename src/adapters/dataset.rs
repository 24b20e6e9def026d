//! Normalized dataset file, one table per entity, resolved into fully
//! populated [`Case`] values.
//!
//! ```json
//! {
//!   "terms":    [{ "id": 1, "name": "2019-2020", "ot_name": "OT2019" }],
//!   "justices": [{ "id": 1, "name": "...", "party": "R", "date_confirmed": "2005-09-29" }],
//!   "courts":   [{ "id": 9, "short_name": "CA9", "name": "..." }],
//!   "cases":    [{ "id": 1, "title": "...", "term_id": 1, "argument_date": "2019-10-07", ... }],
//!   "opinions": [{ "id": 1, "case_id": 1, "opinion_type": "MAJORITY",
//!                  "justices": [{ "justice_id": 1, "is_author": true }] }],
//!   "dockets":  [{ "id": 1, "case_id": 1, "lower_court_id": 9, "lower_court_overruled": true, ... }]
//! }
//! ```

use crate::core::{Storage, TermCaseLoader};
use crate::domain::model::{
    Case, CaseId, Court, CourtId, Docket, Justice, JusticeId, LowerCourtOutcome, Opinion,
    OpinionJustice, OpinionType, Term, TermId,
};
use crate::utils::error::{Result, TrackerError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: CaseId,
    pub title: String,
    #[serde(default)]
    pub short_summary: String,
    #[serde(default)]
    pub status: String,
    pub argument_date: Option<NaiveDate>,
    pub decision_date: Option<NaiveDate>,
    pub result: Option<String>,
    pub decision_summary: Option<String>,
    pub term_id: TermId,
    #[serde(default)]
    pub important: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpinionJusticeRecord {
    pub justice_id: JusticeId,
    #[serde(default)]
    pub is_author: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpinionRecord {
    pub id: u64,
    pub case_id: CaseId,
    pub opinion_type: OpinionType,
    #[serde(default)]
    pub summary: String,
    pub justices: Vec<OpinionJusticeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocketRecord {
    pub id: u64,
    pub case_id: Option<CaseId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub docket_number: String,
    pub lower_court_id: CourtId,
    #[serde(default)]
    pub lower_court_ruling: String,
    pub lower_court_overruled: Option<bool>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub justices: Vec<Justice>,
    #[serde(default)]
    pub courts: Vec<Court>,
    #[serde(default)]
    pub cases: Vec<CaseRecord>,
    #[serde(default)]
    pub opinions: Vec<OpinionRecord>,
    #[serde(default)]
    pub dockets: Vec<DocketRecord>,
}

impl Dataset {
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let dataset: Dataset = serde_json::from_slice(data)?;
        tracing::debug!(
            "Parsed dataset: {} terms, {} justices, {} courts, {} cases, {} opinions, {} dockets",
            dataset.terms.len(),
            dataset.justices.len(),
            dataset.courts.len(),
            dataset.cases.len(),
            dataset.opinions.len(),
            dataset.dockets.len()
        );
        Ok(dataset)
    }

    fn resolve_opinion(
        record: &OpinionRecord,
        justices: &HashMap<JusticeId, &Justice>,
    ) -> Result<Opinion> {
        let opinion_justices = record
            .justices
            .iter()
            .map(|oj| {
                let justice = justices.get(&oj.justice_id).ok_or(TrackerError::UnknownJustice {
                    opinion_id: record.id,
                    justice_id: oj.justice_id,
                })?;
                Ok(OpinionJustice {
                    is_author: oj.is_author,
                    justice: (*justice).clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Opinion {
            id: record.id,
            case_id: record.case_id,
            opinion_type: record.opinion_type,
            opinion_justices,
            summary: record.summary.clone(),
        })
    }

    fn resolve_docket(record: &DocketRecord, courts: &HashMap<CourtId, &Court>) -> Result<Docket> {
        let court = courts
            .get(&record.lower_court_id)
            .ok_or(TrackerError::UnknownCourt {
                docket_id: record.id,
                court_id: record.lower_court_id,
            })?;

        Ok(Docket {
            id: record.id,
            case_id: record.case_id,
            title: record.title.clone(),
            docket_number: record.docket_number.clone(),
            lower_court: (*court).clone(),
            lower_court_ruling: record.lower_court_ruling.clone(),
            outcome: LowerCourtOutcome::from(record.lower_court_overruled),
            status: record.status.clone(),
        })
    }

    /// Every case of the term with opinions, joins and dockets resolved,
    /// in dataset order.
    pub fn cases_for_term(&self, term_id: TermId) -> Result<Vec<Case>> {
        let justices = unique_index("justices", self.justices.iter().map(|j| (j.id, j)))?;
        let courts = unique_index("courts", self.courts.iter().map(|c| (c.id, c)))?;
        let case_ids = unique_index("cases", self.cases.iter().map(|c| (c.id, ())))?;

        let mut cases: Vec<Case> = self
            .cases
            .iter()
            .filter(|c| c.term_id == term_id)
            .map(|c| Case {
                id: c.id,
                title: c.title.clone(),
                short_summary: c.short_summary.clone(),
                status: c.status.clone(),
                argument_date: c.argument_date,
                decision_date: c.decision_date,
                result: c.result.clone(),
                decision_summary: c.decision_summary.clone(),
                term_id: c.term_id,
                important: c.important,
                opinions: Vec::new(),
                dockets: Vec::new(),
            })
            .collect();
        let index: HashMap<CaseId, usize> =
            cases.iter().enumerate().map(|(i, c)| (c.id, i)).collect();

        for record in &self.opinions {
            if !case_ids.contains_key(&record.case_id) {
                tracing::warn!(
                    "Opinion {} references unknown case {}, skipping",
                    record.id,
                    record.case_id
                );
                continue;
            }
            if let Some(&i) = index.get(&record.case_id) {
                cases[i].opinions.push(Self::resolve_opinion(record, &justices)?);
            }
        }

        for record in &self.dockets {
            let Some(case_id) = record.case_id else {
                continue;
            };
            if !case_ids.contains_key(&case_id) {
                tracing::warn!(
                    "Docket {} references unknown case {}, skipping",
                    record.id,
                    case_id
                );
                continue;
            }
            if let Some(&i) = index.get(&case_id) {
                cases[i].dockets.push(Self::resolve_docket(record, &courts)?);
            }
        }

        Ok(cases)
    }
}

/// Id lookup for one dataset table; a repeated id fails the load.
fn unique_index<T>(
    table: &'static str,
    entries: impl IntoIterator<Item = (u64, T)>,
) -> Result<HashMap<u64, T>> {
    let mut index = HashMap::new();
    for (id, value) in entries {
        if index.insert(id, value).is_some() {
            return Err(TrackerError::DuplicateRecord { table, id });
        }
    }
    Ok(index)
}

/// [`TermCaseLoader`] over a dataset file read through [`Storage`].
pub struct DatasetLoader<S: Storage> {
    storage: S,
    dataset_path: String,
}

impl<S: Storage> DatasetLoader<S> {
    pub fn new(storage: S, dataset_path: String) -> Self {
        Self {
            storage,
            dataset_path,
        }
    }

    async fn read_dataset(&self) -> Result<Dataset> {
        tracing::debug!("Reading dataset from {}", self.dataset_path);
        let data = self.storage.read_file(&self.dataset_path).await?;
        Dataset::from_slice(&data)
    }
}

impl<S: Storage> TermCaseLoader for DatasetLoader<S> {
    async fn load_cases_for_term(&self, term_id: TermId) -> Result<Vec<Case>> {
        let dataset = self.read_dataset().await?;
        dataset.cases_for_term(term_id)
    }

    async fn list_terms(&self) -> Result<Vec<Term>> {
        let dataset = self.read_dataset().await?;
        Ok(dataset.terms)
    }
}
