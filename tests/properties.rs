//! Property tests for the attendance calculation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use attendance_calculator::calculation::compute;
use attendance_calculator::models::{
    AttendanceInput, AttendanceResult, DesiredPercentage, STANDARD_THRESHOLDS,
};

fn meets(attended: u64, total: u64, desired: u8) -> bool {
    100 * u128::from(attended) >= u128::from(desired) * u128::from(total)
}

fn record() -> impl Strategy<Value = (i64, i64, u8)> {
    (1i64..1000)
        .prop_flat_map(|total| (Just(total), 0..=total))
        .prop_flat_map(|(total, attended)| {
            (
                Just(total),
                Just(attended),
                prop::sample::select(STANDARD_THRESHOLDS.to_vec()),
            )
        })
}

fn run(total: i64, attended: i64, desired: u8) -> AttendanceResult {
    let input = AttendanceInput::new(total, attended, DesiredPercentage::new(desired).unwrap());
    compute(&input).unwrap()
}

proptest! {
    #[test]
    fn at_most_one_count_is_positive((total, attended, desired) in record()) {
        let result = run(total, attended, desired);
        prop_assert!(result.classes_needed == 0 || result.classes_can_miss == 0);
        prop_assert_eq!(
            result.classes_needed == 0,
            meets(attended as u64, total as u64, desired)
        );
    }

    #[test]
    fn classes_needed_is_the_minimum((total, attended, desired) in record()) {
        let needed = run(total, attended, desired).classes_needed;
        let (a, t) = (attended as u64, total as u64);

        prop_assert!(meets(a + needed, t + needed, desired));
        if needed > 0 {
            prop_assert!(!meets(a + needed - 1, t + needed - 1, desired));
        }
    }

    #[test]
    fn classes_can_miss_is_the_maximum((total, attended, desired) in record()) {
        let result = run(total, attended, desired);
        prop_assume!(result.classes_needed == 0);
        let can_miss = result.classes_can_miss;
        let (a, t) = (attended as u64, total as u64);

        prop_assert!(meets(a, t + can_miss, desired));
        prop_assert!(!meets(a, t + can_miss + 1, desired));
    }

    #[test]
    fn percentage_is_within_half_a_hundredth((total, attended, desired) in record()) {
        let shown = run(total, attended, desired).current_attendance_percentage;
        let exact = Decimal::from(attended) * Decimal::ONE_HUNDRED / Decimal::from(total);

        prop_assert!((shown - exact).abs() <= Decimal::new(5, 3));
        prop_assert_eq!(shown.scale(), 2);
    }
}
