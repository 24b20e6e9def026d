use crate::domain::model::Case;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionTiming {
    pub average_days: Option<i64>,
    pub median_days: Option<i64>,
}

/// Days between argument and decision for every case carrying both dates.
pub fn decision_days<'a>(cases: impl IntoIterator<Item = &'a Case>) -> Vec<i64> {
    cases
        .into_iter()
        .filter_map(|case| match (case.argument_date, case.decision_date) {
            (Some(argued), Some(decided)) => Some((decided - argued).num_days()),
            (Some(_), None) => {
                tracing::warn!(
                    "Case {} ({}) has no decision date, excluded from decision timing",
                    case.id,
                    case.title
                );
                None
            }
            (None, _) => None,
        })
        .collect()
}

/// Integer mean, truncated toward zero.
pub fn average(days: &[i64]) -> Option<i64> {
    if days.is_empty() {
        return None;
    }
    Some(days.iter().sum::<i64>() / days.len() as i64)
}

pub fn median(days: &[i64]) -> Option<i64> {
    if days.is_empty() {
        return None;
    }
    let mut sorted = days.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2)
    } else {
        Some(sorted[mid])
    }
}

pub fn decision_timing<'a>(cases: impl IntoIterator<Item = &'a Case>) -> DecisionTiming {
    let days = decision_days(cases);
    DecisionTiming {
        average_days: average(&days),
        median_days: median(&days),
    }
}
