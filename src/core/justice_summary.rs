use crate::domain::model::{Case, Justice, JusticeId, Opinion, OpinionType};
use crate::domain::summary::TermJusticeSummary;
use std::collections::{BTreeMap, HashMap};

/// Running per-justice counters, created the first time a justice is seen.
#[derive(Debug, Default)]
pub struct JusticeSummaryAggregator {
    summaries: BTreeMap<JusticeId, TermJusticeSummary>,
}

fn distinct_justices<'a>(
    opinions: impl Iterator<Item = &'a Opinion>,
) -> HashMap<JusticeId, &'a Justice> {
    opinions
        .flat_map(|o| o.justices())
        .map(|j| (j.id, j))
        .collect()
}

impl JusticeSummaryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    fn summary_mut(&mut self, justice: &Justice) -> &mut TermJusticeSummary {
        self.summaries
            .entry(justice.id)
            .or_insert_with(|| TermJusticeSummary::new(justice.clone()))
    }

    pub fn add_case(&mut self, case: &Case) {
        let mut authors: HashMap<(JusticeId, OpinionType), &Justice> = HashMap::new();
        for opinion in &case.opinions {
            match opinion.author() {
                Some(author) => {
                    authors.insert((author.id, opinion.opinion_type), author);
                }
                None if opinion.opinion_type == OpinionType::PerCurium => {}
                None => {
                    tracing::warn!(
                        "Opinion {} on case {} has no author, skipping author count",
                        opinion.id,
                        case.id
                    );
                }
            }
        }
        for ((_, opinion_type), author) in authors {
            self.summary_mut(author).increment_type(opinion_type);
        }

        for justice in distinct_justices(case.majority_opinions()).into_values() {
            self.summary_mut(justice).cases_in_majority += 1;
        }

        for justice in distinct_justices(case.opinions.iter()).into_values() {
            self.summary_mut(justice).cases_with_opinion += 1;
        }
    }

    pub fn justice_ids(&self) -> impl Iterator<Item = JusticeId> + '_ {
        self.summaries.keys().copied()
    }

    pub fn finish(self) -> Vec<TermJusticeSummary> {
        self.summaries.into_values().collect()
    }
}
