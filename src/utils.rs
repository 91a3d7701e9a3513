use chrono::{Datelike as _, NaiveDate, Weekday};

/// Round-half-up on the cent
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Counts calendar days in `[start, end]` with a weekday in Mon..Sat.
/// Saturdays are working days here, only Sunday is excluded.
pub fn count_working_days(mut start: NaiveDate, end: NaiveDate) -> u32 {
    let mut working_days = 0;

    while start <= end {
        if start.weekday() != Weekday::Sun {
            working_days += 1;
        }

        start = start.succ_opt().unwrap();
    }

    working_days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(20.5333333), 20.53);
        assert_eq!(round2(0.520625), 0.52);
        assert_eq!(round2(6.666666), 6.67);
        assert_eq!(round2(121.00000000000001), 121.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_count_working_days() {
        let period_start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let period_end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

        // June 2025 has 5 Sundays
        assert_eq!(count_working_days(period_start, period_end), 25);
    }

    #[test]
    fn test_count_working_days_single_week() {
        // Monday through Sunday, the Sunday does not count
        let period_start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let period_end = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();

        assert_eq!(count_working_days(period_start, period_end), 6);
    }
}
