//! Property tests for scoring, ranking, and allocation.

use proptest::prelude::*;

use u_taskrank::allocation::{allocate, AllocationConfig, Allocator, Rounding};
use u_taskrank::criteria::{Criteria, Criterion, TaskSet};
use u_taskrank::ranking::{rank, RankedEntry};
use u_taskrank::scoring::{Scorer, UrgencyCurve, WeightConfig};

fn criteria_strategy() -> impl Strategy<Value = Criteria> {
    (0.0..=100.0f64, 0.0..=10.0f64, 0.0..=30.0f64, 0u32..=365)
        .prop_map(|(core, effort, org, due)| Criteria::new(core, effort, org, due))
}

fn weight_strategy() -> impl Strategy<Value = WeightConfig> {
    (0.0..=5.0f64, 0.0..=5.0f64, 0.0..=5.0f64, 0.0..=5.0f64).prop_map(|(a, b, c, d)| {
        WeightConfig::default()
            .with_weight(Criterion::CorePercentage, a)
            .with_weight(Criterion::EffortComplexity, b)
            .with_weight(Criterion::OrganizationValue, c)
            .with_weight(Criterion::DueInDays, d)
    })
}

proptest! {
    #[test]
    fn no_due_date_has_zero_urgency(c in criteria_strategy(), w in weight_strategy()) {
        let c = Criteria { due_in_days: 0, ..c };
        let b = Scorer::new(w).breakdown(&c);
        prop_assert_eq!(b.term(Criterion::DueInDays).unwrap().normalized, 0.0);
    }

    #[test]
    fn urgency_strictly_decreasing(d in 1u32..200) {
        let curve = UrgencyCurve::default();
        let near = curve.evaluate(d);
        let far = curve.evaluate(d + 1);
        prop_assert!(far < near);
        prop_assert!(far > curve.base);
        prop_assert!(near <= curve.base + curve.scale);
    }

    #[test]
    fn organization_sub_score_in_unit_range(org in 0.0..1_000.0f64) {
        let b = Scorer::default().breakdown(&Criteria::new(0.0, 0.0, org, 0));
        let sub = b.term(Criterion::OrganizationValue).unwrap().normalized;
        prop_assert!((0.0..=1.0).contains(&sub));
    }

    #[test]
    fn ranking_is_sorted_and_complete(
        tasks in prop::collection::vec(criteria_strategy(), 0..30),
        w in weight_strategy(),
    ) {
        let set: TaskSet = tasks
            .into_iter()
            .enumerate()
            .map(|(i, c)| (format!("task-{i}"), c))
            .collect();
        let ranked = rank(&set, &Scorer::new(w));
        prop_assert_eq!(ranked.len(), set.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn equal_scores_keep_input_order(n in 2usize..20, core in 0.0..=100.0f64) {
        let set: TaskSet = (0..n)
            .map(|i| (format!("t{i:02}"), Criteria::new(core, 1.0, 1.0, 5)))
            .collect();
        let ranked = rank(&set, &Scorer::default());
        let names: Vec<&str> = ranked.iter().map(|e| e.name.as_str()).collect();
        let expected: Vec<&str> = set.names().collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn allocation_percentages_sum_to_hundred(
        scores in prop::collection::vec(0.0..50.0f64, 1..40),
        budget in 1u32..200,
    ) {
        prop_assume!(scores.iter().sum::<f64>() > 0.0);
        let ranked: Vec<RankedEntry> = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| RankedEntry::new(format!("t{i}"), s))
            .collect();
        let allocator = Allocator::new(AllocationConfig::default().with_budget(budget));
        let dist = allocator.allocate(&ranked);

        prop_assert!(!dist.is_degenerate());
        prop_assert!((dist.total_percentage() - 100.0).abs() < 1e-6);
        for a in dist.iter() {
            prop_assert!(a.parts <= budget);
        }
    }

    #[test]
    fn rounding_modes_differ_by_at_most_one_part(
        scores in prop::collection::vec(0.1..10.0f64, 1..20),
    ) {
        let ranked: Vec<RankedEntry> = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| RankedEntry::new(format!("t{i}"), s))
            .collect();
        let even = allocate(&ranked);
        let away = Allocator::new(
            AllocationConfig::default().with_rounding(Rounding::HalfAwayFromZero),
        )
        .allocate(&ranked);
        for (a, b) in even.iter().zip(away.iter()) {
            prop_assert!(a.parts.abs_diff(b.parts) <= 1);
        }
    }
}

#[test]
fn all_zero_weights_give_empty_allocation() {
    let set: TaskSet = [
        ("a", Criteria::default()),
        ("b", Criteria::new(50.0, 5.0, 5.0, 10)),
    ]
    .into_iter()
    .collect();
    let ranked = rank(&set, &Scorer::new(WeightConfig::uniform(0.0)));
    let dist = allocate(&ranked);
    assert!(dist.is_degenerate());
    assert!(dist.allocations.is_empty());
}

#[test]
fn reference_single_task() {
    let set: TaskSet = [("only", Criteria::new(100.0, 5.0, 10.0, 30))]
        .into_iter()
        .collect();
    let ranked = rank(&set, &Scorer::default());
    assert!((ranked[0].score - 3.7987).abs() < 1e-4);

    let dist = allocate(&ranked);
    assert_eq!(dist.allocations[0].parts, 20);
    assert!((dist.allocations[0].percentage - 100.0).abs() < 1e-12);
}
