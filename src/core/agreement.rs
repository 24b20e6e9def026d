use crate::domain::model::{Case, JusticeId, Opinion};
use crate::domain::summary::JusticeAgreementResponse;
use std::collections::{BTreeMap, BTreeSet};

const FULL_BENCH: usize = 9;

#[derive(Debug, Default)]
struct AgreementTally {
    total_opinions: u32,
    total_cases: u32,
    opinion_counts: BTreeMap<JusticeId, u32>,
    case_counts: BTreeMap<JusticeId, u32>,
}

impl AgreementTally {
    fn count_opinion(&mut self, joiners: &BTreeSet<JusticeId>) {
        self.total_opinions += 1;
        for id in joiners {
            *self.opinion_counts.entry(*id).or_insert(0) += 1;
        }
    }

    fn count_case(&mut self, side: &BTreeSet<JusticeId>) {
        self.total_cases += 1;
        for id in side {
            *self.case_counts.entry(*id).or_insert(0) += 1;
        }
    }
}

fn ratios(counts: &BTreeMap<JusticeId, u32>, total: u32) -> BTreeMap<JusticeId, f64> {
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .iter()
        .map(|(id, count)| (*id, f64::from(*count) / f64::from(total)))
        .collect()
}

fn joiner_ids<'a>(opinions: impl Iterator<Item = &'a Opinion>) -> BTreeSet<JusticeId> {
    opinions.flat_map(|o| o.justices()).map(|j| j.id).collect()
}

/// Pairwise agreement between the justices active in a term, at the
/// opinion level (signed the same opinion) and the case level (landed on
/// the same side).
#[derive(Debug)]
pub struct JusticeAgreementAggregator {
    tallies: BTreeMap<JusticeId, AgreementTally>,
}

impl JusticeAgreementAggregator {
    pub fn new(justice_ids: impl IntoIterator<Item = JusticeId>) -> Self {
        Self {
            tallies: justice_ids
                .into_iter()
                .map(|id| (id, AgreementTally::default()))
                .collect(),
        }
    }

    pub fn add_case(&mut self, case: &Case) {
        for opinion in &case.opinions {
            let joiners = joiner_ids(std::iter::once(opinion));
            for id in &joiners {
                if let Some(tally) = self.tallies.get_mut(id) {
                    tally.count_opinion(&joiners);
                }
            }
        }

        let majority = joiner_ids(case.majority_opinions());
        let dissent = joiner_ids(case.dissent_opinions());
        if majority.len() + dissent.len() != FULL_BENCH {
            tracing::debug!(
                "Case {} has {} majority and {} dissenting justices",
                case.id,
                majority.len(),
                dissent.len()
            );
        }

        for (id, tally) in self.tallies.iter_mut() {
            if majority.contains(id) {
                tally.count_case(&majority);
            } else if dissent.contains(id) {
                tally.count_case(&dissent);
            }
        }
    }

    pub fn finish(self) -> Vec<JusticeAgreementResponse> {
        self.tallies
            .into_iter()
            .map(|(justice_id, tally)| JusticeAgreementResponse {
                justice_id,
                opinion_agreement_map: ratios(&tally.opinion_counts, tally.total_opinions),
                case_agreement_map: ratios(&tally.case_counts, tally.total_cases),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::*;
    use crate::domain::model::OpinionType;

    fn agreement_for(
        responses: &[JusticeAgreementResponse],
        id: JusticeId,
    ) -> &JusticeAgreementResponse {
        responses.iter().find(|r| r.justice_id == id).unwrap()
    }

    #[test]
    fn test_opinion_level_ratios() {
        let a = justice(1, "R");
        let b = justice(2, "R");
        let c = justice(3, "D");
        let first = case(
            1,
            Some(date(2020, 1, 1)),
            None,
            vec![
                opinion(1, OpinionType::Majority, Some(&a), &[&b]),
                opinion(2, OpinionType::Dissent, Some(&c), &[]),
            ],
            vec![],
        );
        let second = case(
            2,
            Some(date(2020, 2, 1)),
            None,
            vec![opinion(3, OpinionType::Majority, Some(&a), &[&c])],
            vec![],
        );

        let mut aggregator = JusticeAgreementAggregator::new([1, 2, 3]);
        aggregator.add_case(&first);
        aggregator.add_case(&second);
        let responses = aggregator.finish();

        let a_agreement = agreement_for(&responses, 1);
        assert_eq!(a_agreement.opinion_agreement_map[&1], 1.0);
        assert_eq!(a_agreement.opinion_agreement_map[&2], 0.5);
        assert_eq!(a_agreement.opinion_agreement_map[&3], 0.5);

        let b_agreement = agreement_for(&responses, 2);
        assert_eq!(b_agreement.opinion_agreement_map[&1], 1.0);
        assert!(!b_agreement.opinion_agreement_map.contains_key(&3));
    }

    #[test]
    fn test_case_level_counts_aligned_side() {
        let a = justice(1, "R");
        let b = justice(2, "R");
        let c = justice(3, "D");
        let d = justice(4, "D");
        let divided = case(
            1,
            Some(date(2020, 1, 1)),
            None,
            vec![
                opinion(1, OpinionType::Majority, Some(&a), &[&b]),
                opinion(2, OpinionType::Concurrence, Some(&b), &[]),
                opinion(3, OpinionType::Dissent, Some(&c), &[&d]),
            ],
            vec![],
        );

        let mut aggregator = JusticeAgreementAggregator::new([1, 2, 3, 4]);
        aggregator.add_case(&divided);
        let responses = aggregator.finish();

        let b_agreement = agreement_for(&responses, 2);
        assert_eq!(b_agreement.case_agreement_map[&1], 1.0);
        assert_eq!(b_agreement.case_agreement_map[&2], 1.0);
        assert!(!b_agreement.case_agreement_map.contains_key(&3));
        // two opinions signed by b, a joined one of them
        assert_eq!(b_agreement.opinion_agreement_map[&1], 0.5);

        let d_agreement = agreement_for(&responses, 4);
        assert_eq!(d_agreement.case_agreement_map[&3], 1.0);
        assert!(!d_agreement.case_agreement_map.contains_key(&1));
    }

    #[test]
    fn test_majority_side_takes_precedence() {
        let a = justice(1, "R");
        let b = justice(2, "D");
        let c = case(
            1,
            Some(date(2020, 1, 1)),
            None,
            vec![
                opinion(1, OpinionType::Majority, Some(&a), &[]),
                opinion(2, OpinionType::ConcurJudgement, Some(&b), &[]),
                opinion(3, OpinionType::DissentJudgement, Some(&b), &[]),
            ],
            vec![],
        );

        let mut aggregator = JusticeAgreementAggregator::new([1, 2]);
        aggregator.add_case(&c);
        let responses = aggregator.finish();

        let b_agreement = agreement_for(&responses, 2);
        assert_eq!(b_agreement.case_agreement_map.len(), 2);
        assert_eq!(b_agreement.case_agreement_map[&1], 1.0);
        assert_eq!(b_agreement.case_agreement_map[&2], 1.0);
    }

    #[test]
    fn test_ratios_stay_within_unit_interval() {
        let justices: Vec<_> = (1..=9)
            .map(|id| justice(id, if id % 2 == 0 { "D" } else { "R" }))
            .collect();
        let refs: Vec<_> = justices.iter().collect();
        let cases = vec![
            case(
                1,
                Some(date(2020, 1, 1)),
                None,
                vec![
                    opinion(1, OpinionType::Majority, Some(refs[0]), &refs[1..5]),
                    opinion(2, OpinionType::Dissent, Some(refs[5]), &refs[6..9]),
                ],
                vec![],
            ),
            case(
                2,
                Some(date(2020, 2, 1)),
                None,
                vec![opinion(3, OpinionType::PerCurium, None, &refs[..])],
                vec![],
            ),
        ];

        let mut aggregator = JusticeAgreementAggregator::new(1..=9);
        for c in &cases {
            aggregator.add_case(c);
        }
        for response in aggregator.finish() {
            for ratio in response
                .opinion_agreement_map
                .values()
                .chain(response.case_agreement_map.values())
            {
                assert!((0.0..=1.0).contains(ratio));
            }
            assert_eq!(response.opinion_agreement_map[&response.justice_id], 1.0);
        }
    }

    #[test]
    fn test_short_bench_case_is_still_counted() {
        let justices: Vec<_> = (1..=7).map(|id| justice(id, "R")).collect();
        let refs: Vec<_> = justices.iter().collect();
        let c = case(
            1,
            Some(date(2020, 1, 1)),
            None,
            vec![
                opinion(1, OpinionType::Majority, Some(refs[0]), &refs[1..5]),
                opinion(2, OpinionType::Dissent, Some(refs[5]), &refs[6..7]),
            ],
            vec![],
        );

        let mut aggregator = JusticeAgreementAggregator::new(1..=7);
        aggregator.add_case(&c);
        let responses = aggregator.finish();

        let author = agreement_for(&responses, 1);
        assert_eq!(author.case_agreement_map.len(), 5);
        assert_eq!(author.case_agreement_map[&5], 1.0);
        let dissenter = agreement_for(&responses, 7);
        assert_eq!(dissenter.case_agreement_map[&6], 1.0);
        assert!(!dissenter.case_agreement_map.contains_key(&1));
    }

    #[test]
    fn test_untracked_justices_get_no_entry_and_absent_justice_gets_empty_maps() {
        let a = justice(1, "R");
        let b = justice(2, "R");
        let c = case(
            1,
            Some(date(2020, 1, 1)),
            None,
            vec![opinion(1, OpinionType::Majority, Some(&a), &[&b])],
            vec![],
        );

        let mut aggregator = JusticeAgreementAggregator::new([1, 99]);
        aggregator.add_case(&c);
        let responses = aggregator.finish();

        assert_eq!(responses.len(), 2);
        assert_eq!(agreement_for(&responses, 1).opinion_agreement_map[&2], 1.0);
        let absent = agreement_for(&responses, 99);
        assert!(absent.opinion_agreement_map.is_empty());
        assert!(absent.case_agreement_map.is_empty());
    }
}
