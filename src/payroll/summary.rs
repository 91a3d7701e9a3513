use serde::{Deserialize, Serialize};

use crate::model::{AttendanceRecord, AttendanceStatus, PayrollSettings, Period};
use crate::utils::{count_working_days, round2};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub days_worked: u32,
    pub days_absent: u32,
    pub days_late: u32,
}

/// Reduces the worker's attendance records for the period into aggregate
/// worked/overtime hours and day counts. The caller already restricted
/// `records` to the period.
pub fn summarize(
    records: &[AttendanceRecord],
    period: &Period,
    settings: &PayrollSettings,
) -> AttendanceSummary {
    let mut total_hours = 0.0;
    let mut overtime_hours = 0.0;
    let mut days_worked = 0;
    let mut days_absent = 0;
    let mut days_late = 0;

    for record in records {
        if record.status == AttendanceStatus::Late {
            days_late += 1;
        }

        if record.status == AttendanceStatus::Absent {
            days_absent += 1;
            continue;
        }

        days_worked += 1;

        let worked = worked_hours(record, settings);
        total_hours += worked;
        overtime_hours += (worked - settings.working_hours_per_day).max(0.0);
    }

    // A working day with no record at all counts as an absence. Cannot go
    // negative when more records than working days were handed in.
    let working_days = count_working_days(period.start_date, period.end_date);
    days_absent += working_days.saturating_sub(records.len() as u32);

    let total_hours = round2(total_hours);
    let overtime_hours = round2(overtime_hours);

    AttendanceSummary {
        total_hours,
        regular_hours: round2(total_hours - overtime_hours),
        overtime_hours,
        days_worked,
        days_absent,
        days_late,
    }
}

/// Worked hours for one record: check-out minus check-in minus the break.
/// A record with no break times is still assumed to include the standard
/// unpaid break.
fn worked_hours(record: &AttendanceRecord, settings: &PayrollSettings) -> f64 {
    let (Some(check_in), Some(check_out)) = (record.check_in, record.check_out) else {
        return 0.0;
    };

    let break_minutes = match (record.break_start, record.break_end) {
        (Some(break_start), Some(break_end)) => (break_end - break_start).num_minutes(),
        _ => settings.break_duration_minutes,
    };

    let minutes = (check_out - check_in).num_minutes() - break_minutes;

    round2(minutes.max(0) as f64 / 60.0)
}

/// Unpaid time lost to tardiness beyond the tolerance window, in hours.
///
/// Only records marked late with both a check-in and a scheduled start can be
/// evaluated; the rest contribute zero. Returned unrounded so the discount
/// multiplication rounds once.
pub fn lost_hours(records: &[AttendanceRecord], settings: &PayrollSettings) -> f64 {
    let mut lost_minutes = 0;

    for record in records {
        if record.status != AttendanceStatus::Late {
            continue;
        }

        let (Some(check_in), Some(scheduled_start)) = (record.check_in, record.scheduled_start_time) else {
            continue;
        };

        let late = (check_in - scheduled_start).num_minutes() - settings.late_tolerance_minutes;
        lost_minutes += late.max(0);
    }

    lost_minutes as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    use crate::model::PeriodType;

    use super::*;

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: Uuid::new_v4(),
            worker_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            scheduled_start_time: Some(time(8, 0)),
            scheduled_end_time: Some(time(17, 0)),
            check_in: Some(time(8, 0)),
            check_out: Some(time(17, 0)),
            break_start: None,
            break_end: None,
            status,
            late_minutes: None,
            notes: None,
        }
    }

    // 22 working days (Mon..Sat): June 2 to June 26 2025, 3 Sundays in between
    fn period() -> Period {
        Period {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 26).unwrap(),
            period_type: PeriodType::Monthly,
        }
    }

    #[test]
    fn test_worked_hours_default_break() {
        let settings = PayrollSettings::default();

        // 9h on the clock minus the assumed 60 minute break
        assert_eq!(worked_hours(&record(AttendanceStatus::Present), &settings), 8.0);
    }

    #[test]
    fn test_worked_hours_explicit_break() {
        let settings = PayrollSettings::default();

        let mut r = record(AttendanceStatus::Present);
        r.check_out = Some(time(16, 0));
        r.break_start = Some(time(12, 0));
        r.break_end = Some(time(12, 30));

        assert_eq!(worked_hours(&r, &settings), 7.5);
    }

    #[test]
    fn test_worked_hours_floors_at_zero() {
        let settings = PayrollSettings::default();

        let mut r = record(AttendanceStatus::Present);
        r.check_in = Some(time(9, 0));
        r.check_out = Some(time(9, 30));

        assert_eq!(worked_hours(&r, &settings), 0.0);
    }

    #[test]
    fn test_worked_hours_missing_clock_times() {
        let settings = PayrollSettings::default();

        let mut r = record(AttendanceStatus::Present);
        r.check_out = None;

        assert_eq!(worked_hours(&r, &settings), 0.0);
    }

    #[test]
    fn test_summarize_overtime_split() {
        let settings = PayrollSettings::default();

        let mut r = record(AttendanceStatus::Present);
        r.check_out = Some(time(19, 0));

        let records = vec![r; 22];
        let summary = summarize(&records, &period(), &settings);

        assert_eq!(summary.total_hours, 220.0);
        assert_eq!(summary.regular_hours, 176.0);
        assert_eq!(summary.overtime_hours, 44.0);
        assert_eq!(summary.days_worked, 22);
        assert_eq!(summary.days_absent, 0);
    }

    #[test]
    fn test_summarize_counts_missing_days_as_absences() {
        let settings = PayrollSettings::default();

        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Absent),
        ];
        let summary = summarize(&records, &period(), &settings);

        assert_eq!(summary.days_worked, 2);
        // 1 explicit absence + 19 working days with no record at all
        assert_eq!(summary.days_absent, 20);
        assert_eq!(summary.total_hours, 16.0);
    }

    #[test]
    fn test_summarize_no_negative_synthetic_absences() {
        let settings = PayrollSettings::default();

        let records = vec![record(AttendanceStatus::Present); 25];
        let summary = summarize(&records, &period(), &settings);

        assert_eq!(summary.days_worked, 25);
        assert_eq!(summary.days_absent, 0);
    }

    #[test]
    fn test_summarize_absent_record_hours_ignored() {
        let settings = PayrollSettings::default();

        // Absent but with clock times on file, the hours must not count
        let records = vec![record(AttendanceStatus::Absent)];
        let summary = summarize(&records, &period(), &settings);

        assert_eq!(summary.total_hours, 0.0);
        assert_eq!(summary.days_worked, 0);
        assert_eq!(summary.days_absent, 22);
    }

    #[test]
    fn test_lost_hours_beyond_tolerance() {
        let settings = PayrollSettings::default();

        let mut r = record(AttendanceStatus::Late);
        r.check_in = Some(time(8, 20));

        // 20 minutes late, 15 tolerated
        assert_eq!(lost_hours(&[r], &settings), 5.0 / 60.0);
    }

    #[test]
    fn test_lost_hours_within_tolerance() {
        let settings = PayrollSettings::default();

        let mut r = record(AttendanceStatus::Late);
        r.check_in = Some(time(8, 10));

        assert_eq!(lost_hours(&[r], &settings), 0.0);
    }

    #[test]
    fn test_lost_hours_missing_scheduled_start() {
        let settings = PayrollSettings::default();

        let mut r = record(AttendanceStatus::Late);
        r.check_in = Some(time(9, 0));
        r.scheduled_start_time = None;

        // Cannot be evaluated, contributes zero
        assert_eq!(lost_hours(&[r], &settings), 0.0);
    }

    #[test]
    fn test_lost_hours_only_counts_late_status() {
        let settings = PayrollSettings::default();

        let mut r = record(AttendanceStatus::Present);
        r.check_in = Some(time(9, 0));

        assert_eq!(lost_hours(&[r], &settings), 0.0);
    }
}
