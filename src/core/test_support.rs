//! Builders for court records used by the engine's unit tests.

use crate::domain::model::{
    Case, Court, Docket, Justice, LowerCourtOutcome, Opinion, OpinionJustice, OpinionType,
};
use chrono::NaiveDate;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn justice(id: u64, party: &str) -> Justice {
    Justice {
        id,
        name: format!("Justice {}", id),
        party: party.to_string(),
        date_confirmed: date(2000, 1, 1),
        birthday: None,
        date_retired: None,
    }
}

/// `author` is joined first with `is_author = true`, then each of `joiners`.
pub(crate) fn opinion(
    id: u64,
    opinion_type: OpinionType,
    author: Option<&Justice>,
    joiners: &[&Justice],
) -> Opinion {
    let mut opinion_justices = Vec::new();
    if let Some(author) = author {
        opinion_justices.push(OpinionJustice {
            is_author: true,
            justice: author.clone(),
        });
    }
    for j in joiners {
        opinion_justices.push(OpinionJustice {
            is_author: false,
            justice: (*j).clone(),
        });
    }
    Opinion {
        id,
        case_id: 0,
        opinion_type,
        opinion_justices,
        summary: String::new(),
    }
}

pub(crate) fn court(id: u64) -> Court {
    Court {
        id,
        short_name: format!("CA{}", id),
        name: format!("Court of Appeals for the {} Circuit", id),
    }
}

pub(crate) fn docket(id: u64, court: &Court, overruled: Option<bool>) -> Docket {
    Docket {
        id,
        case_id: None,
        title: format!("Docket {}", id),
        docket_number: format!("{}-{}", 19, id),
        lower_court: court.clone(),
        lower_court_ruling: String::new(),
        outcome: LowerCourtOutcome::from(overruled),
        status: "judgement_issued".to_string(),
    }
}

pub(crate) fn case(
    id: u64,
    argument_date: Option<NaiveDate>,
    decision_date: Option<NaiveDate>,
    opinions: Vec<Opinion>,
    dockets: Vec<Docket>,
) -> Case {
    let opinions = opinions
        .into_iter()
        .map(|o| Opinion { case_id: id, ..o })
        .collect();
    let dockets = dockets
        .into_iter()
        .map(|d| Docket {
            case_id: Some(id),
            ..d
        })
        .collect();
    Case {
        id,
        title: format!("Case {}", id),
        short_summary: String::new(),
        status: "decided".to_string(),
        argument_date,
        decision_date,
        result: None,
        decision_summary: None,
        term_id: 1,
        important: false,
        opinions,
        dockets,
    }
}
