use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type TermId = u64;
pub type CaseId = u64;
pub type JusticeId = u64;
pub type CourtId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub name: String,
    pub ot_name: String,
    #[serde(default)]
    pub inactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Justice {
    pub id: JusticeId,
    pub name: String,
    /// Nominating-party label, e.g. "R" or "D".
    pub party: String,
    pub date_confirmed: NaiveDate,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub date_retired: Option<NaiveDate>,
}

impl Justice {
    pub fn is_active(&self) -> bool {
        self.date_retired.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Court {
    pub id: CourtId,
    pub short_name: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpinionType {
    Majority,
    PerCurium,
    Concurrence,
    Dissent,
    ConcurJudgement,
    DissentJudgement,
}

impl OpinionType {
    pub const MAJORITY_TYPES: [OpinionType; 4] = [
        OpinionType::Majority,
        OpinionType::ConcurJudgement,
        OpinionType::Concurrence,
        OpinionType::PerCurium,
    ];

    pub const DISSENT_TYPES: [OpinionType; 2] =
        [OpinionType::Dissent, OpinionType::DissentJudgement];

    /// Opinion sides with the outcome of the case.
    pub fn is_majority(self) -> bool {
        Self::MAJORITY_TYPES.contains(&self)
    }

    pub fn is_dissent(self) -> bool {
        Self::DISSENT_TYPES.contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpinionJustice {
    pub is_author: bool,
    pub justice: Justice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opinion {
    pub id: u64,
    pub case_id: CaseId,
    pub opinion_type: OpinionType,
    pub opinion_justices: Vec<OpinionJustice>,
    pub summary: String,
}

impl Opinion {
    /// The first join flagged as author. Well-formed opinions carry exactly one.
    pub fn author(&self) -> Option<&Justice> {
        self.opinion_justices
            .iter()
            .find(|oj| oj.is_author)
            .map(|oj| &oj.justice)
    }

    pub fn justices(&self) -> impl Iterator<Item = &Justice> {
        self.opinion_justices.iter().map(|oj| &oj.justice)
    }
}

/// What the Supreme Court did with the lower court's ruling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowerCourtOutcome {
    Affirmed,
    ReversedRemanded,
    /// Not decided yet, or not applicable.
    Pending,
}

impl From<Option<bool>> for LowerCourtOutcome {
    fn from(overruled: Option<bool>) -> Self {
        match overruled {
            Some(true) => LowerCourtOutcome::ReversedRemanded,
            Some(false) => LowerCourtOutcome::Affirmed,
            None => LowerCourtOutcome::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docket {
    pub id: u64,
    pub case_id: Option<CaseId>,
    pub title: String,
    pub docket_number: String,
    pub lower_court: Court,
    pub lower_court_ruling: String,
    pub outcome: LowerCourtOutcome,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub title: String,
    pub short_summary: String,
    pub status: String,
    pub argument_date: Option<NaiveDate>,
    pub decision_date: Option<NaiveDate>,
    pub result: Option<String>,
    pub decision_summary: Option<String>,
    pub term_id: TermId,
    pub important: bool,
    pub opinions: Vec<Opinion>,
    pub dockets: Vec<Docket>,
}

impl Case {
    /// Eligible for term analytics: at least one opinion and an argument date.
    pub fn is_merit(&self) -> bool {
        !self.opinions.is_empty() && self.argument_date.is_some()
    }

    pub fn majority_opinions(&self) -> impl Iterator<Item = &Opinion> {
        self.opinions
            .iter()
            .filter(|o| o.opinion_type.is_majority())
    }

    pub fn dissent_opinions(&self) -> impl Iterator<Item = &Opinion> {
        self.opinions.iter().filter(|o| o.opinion_type.is_dissent())
    }
}
