//! Overdue fine bands.

use crate::config::FineSchedule;

const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

/// Fine owed for an item `days_overdue` whole days past its due date.
///
/// Bands, checked in order:
/// - under 1 day: nothing
/// - under 30 days: `daily` per day
/// - under 365 days: `monthly` per full 30-day month
/// - otherwise: `yearly`, flat
///
/// Amounts saturate at `u64::MAX` instead of overflowing.
pub fn fine_for_days(days_overdue: i64, schedule: &FineSchedule) -> u64 {
    if days_overdue < 1 {
        0
    } else if days_overdue < DAYS_PER_MONTH {
        schedule.daily.saturating_mul(days_overdue.unsigned_abs())
    } else if days_overdue < DAYS_PER_YEAR {
        schedule
            .monthly
            .saturating_mul((days_overdue / DAYS_PER_MONTH).unsigned_abs())
    } else {
        schedule.yearly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fine(days: i64) -> u64 {
        fine_for_days(days, &FineSchedule::default())
    }

    #[test]
    fn not_yet_due_is_free() {
        assert_eq!(fine(-3), 0);
        assert_eq!(fine(0), 0);
    }

    #[test]
    fn daily_band() {
        assert_eq!(fine(1), 15);
        assert_eq!(fine(2), 30);
        assert_eq!(fine(29), 435);
    }

    #[test]
    fn monthly_band_counts_full_months() {
        assert_eq!(fine(30), 500);
        assert_eq!(fine(59), 500);
        assert_eq!(fine(60), 1_000);
        assert_eq!(fine(364), 6_000);
    }

    #[test]
    fn yearly_band_is_flat() {
        assert_eq!(fine(365), 10_000);
        assert_eq!(fine(750), 10_000);
    }

    #[test]
    fn custom_schedule() {
        let schedule = FineSchedule { daily: 1, monthly: 10, yearly: 100 };
        assert_eq!(fine_for_days(5, &schedule), 5);
        assert_eq!(fine_for_days(95, &schedule), 30);
        assert_eq!(fine_for_days(400, &schedule), 100);
    }

    #[test]
    fn huge_rates_saturate() {
        let schedule = FineSchedule { daily: u64::MAX, monthly: u64::MAX, yearly: u64::MAX };
        assert_eq!(fine_for_days(2, &schedule), u64::MAX);
        assert_eq!(fine_for_days(60, &schedule), u64::MAX);
        assert_eq!(fine_for_days(400, &schedule), u64::MAX);
    }
}
