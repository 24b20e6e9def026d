use crate::domain::model::{Case, Opinion};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClassification {
    Unanimous,
    PartySplit,
    Divided,
}

/// No dissenting opinion of any kind.
pub fn is_unanimous(case: &Case) -> bool {
    !case.opinions.iter().any(|o| o.opinion_type.is_dissent())
}

fn parties<'a>(opinions: impl Iterator<Item = &'a Opinion>) -> HashSet<&'a str> {
    opinions
        .flat_map(|o| o.justices())
        .map(|j| j.party.as_str())
        .collect()
}

/// Every majority justice shares one party, every dissenter shares a different one.
pub fn is_split_on_party(case: &Case) -> bool {
    let majority = parties(case.majority_opinions());
    let dissent = parties(case.dissent_opinions());
    majority.len() == 1 && dissent.len() == 1 && majority.is_disjoint(&dissent)
}

pub fn classify(case: &Case) -> CaseClassification {
    if is_unanimous(case) {
        CaseClassification::Unanimous
    } else if is_split_on_party(case) {
        CaseClassification::PartySplit
    } else {
        CaseClassification::Divided
    }
}
