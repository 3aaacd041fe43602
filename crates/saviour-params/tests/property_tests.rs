//! Property-based tests for the masternode cost schedule
//!
//! Uses proptest to verify tier resolution across randomized schedules and heights

use proptest::prelude::*;
use saviour_params::{CostQuery, CostSchedule, CostStep, MASTERNODE_COST_DELTA};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate an ordered schedule starting at genesis with 1-6 tiers
fn schedule_strategy() -> impl Strategy<Value = CostSchedule> {
    (
        prop::collection::vec((1i64..50_000, 1u64..100_000), 0..6),
        0i64..5_000,
    )
        .prop_map(|(gaps, window)| {
            let mut height = 0;
            let mut steps = vec![CostStep::new(0, 1)];
            for (gap, cost) in gaps {
                height += gap;
                steps.push(CostStep::new(height, cost));
            }
            CostSchedule::new(steps, window).expect("ordered schedule")
        })
}

/// Generate query heights, including negative ones
fn height_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..400_000
}

// ============================================================================
// Tier Resolution Properties
// ============================================================================

proptest! {
    /// Property: Resolution is deterministic
    #[test]
    fn prop_resolve_deterministic(
        schedule in schedule_strategy(),
        height in height_strategy()
    ) {
        for query in [CostQuery::Current, CostQuery::Previous] {
            prop_assert_eq!(schedule.resolve(height, query), schedule.resolve(height, query));
        }
    }

    /// Property: Current tier is the last step strictly below the height
    #[test]
    fn prop_current_is_last_step_below(
        schedule in schedule_strategy(),
        height in height_strategy()
    ) {
        let steps = schedule.steps();
        let expected = steps
            .iter()
            .filter(|step| step.activation_height < height)
            .last()
            .unwrap_or(&steps[0])
            .cost;
        prop_assert_eq!(schedule.resolve(height, CostQuery::Current), Some(expected));
    }

    /// Property: A step never applies at its own activation height
    #[test]
    fn prop_activation_is_strict(schedule in schedule_strategy()) {
        let steps = schedule.steps();
        for (i, step) in steps.iter().enumerate().skip(1) {
            if steps[i - 1].activation_height < step.activation_height {
                prop_assert_eq!(schedule.current_tier(step.activation_height), i - 1);
                prop_assert_eq!(schedule.current_tier(step.activation_height + 1), i);
            }
        }
    }

    /// Property: Previous is only answered inside the grace window and never in tier 0
    #[test]
    fn prop_previous_respects_window(
        schedule in schedule_strategy(),
        height in height_strategy()
    ) {
        let tier = schedule.current_tier(height);
        let previous = schedule.resolve(height, CostQuery::Previous);
        if tier == 0 {
            prop_assert_eq!(previous, None);
        } else {
            let steps = schedule.steps();
            let inside = height - schedule.grace_window() < steps[tier].activation_height;
            if inside {
                prop_assert_eq!(previous, Some(steps[tier - 1].cost));
            } else {
                prop_assert_eq!(previous, None);
            }
        }
    }
}

// ============================================================================
// Built-in Schedule Properties
// ============================================================================

proptest! {
    /// Property: Mainnet collateral never decreases with height
    #[test]
    fn prop_mainnet_cost_monotonic(a in height_strategy(), b in height_strategy()) {
        let schedule = CostSchedule::mainnet();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_cost = schedule.resolve(low, CostQuery::Current).unwrap();
        let high_cost = schedule.resolve(high, CostQuery::Current).unwrap();
        prop_assert!(low_cost <= high_cost);
    }

    /// Property: Mainnet uses the default grace window
    #[test]
    fn prop_mainnet_window(offset in 1i64..MASTERNODE_COST_DELTA) {
        let schedule = CostSchedule::mainnet();
        prop_assert_eq!(schedule.resolve(48_961 + offset, CostQuery::Previous), Some(1_000));
        prop_assert_eq!(
            schedule.resolve(48_961 + MASTERNODE_COST_DELTA + offset, CostQuery::Previous),
            None
        );
    }
}
