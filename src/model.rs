use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: Uuid,
    pub name: String,
    pub dni: String,
    pub position: String,
    pub base_salary: f64,
    /// Standing raise/cut; overrides `base_salary` when present
    pub current_salary: Option<f64>,
    pub last_salary_adjustment: Option<SalaryAdjustment>,
}

impl Worker {
    pub fn effective_salary(&self) -> f64 {
        self.current_salary.unwrap_or(self.base_salary)
    }
}

/// Audit trail of the last raise/cut, does not affect calculation
/// beyond whatever `current_salary` already says
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryAdjustment {
    pub amount: f64,
    pub reason: String,
    pub adjusted_by: Uuid,
    pub adjusted_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Partial,
}

/// One clock-event group per worker per day, produced by manual edit
/// or device capture; read-only input to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub date: NaiveDate,
    pub scheduled_start_time: Option<NaiveTime>,
    pub scheduled_end_time: Option<NaiveTime>,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub status: AttendanceStatus,
    /// Device-reported; lateness is recomputed from the clock times instead
    pub late_minutes: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusType {
    Performance,
    ExtraHours,
    Special,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub bonus_type: BonusType,
    pub created_by: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Tenant-wide fallback when a worker has no salary on file
    pub base_salary: f64,
    pub working_days_per_month: f64,
    pub working_hours_per_day: f64,
    pub overtime_multiplier: f64,
    pub invalid_insurance_amount: f64,
    /// Fraction of gross, 0..=1
    pub pension_fund_percentage: f64,
    pub essalud_amount: f64,
    pub late_tolerance_minutes: i64,
    /// Assumed unpaid break when a record carries no break times
    pub break_duration_minutes: i64,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            base_salary: 1500.0,
            working_days_per_month: 26.0,
            working_hours_per_day: 8.0,
            overtime_multiplier: 1.25,
            invalid_insurance_amount: 28.0,
            pension_fund_percentage: 0.10,
            essalud_amount: 165.0,
            late_tolerance_minutes: 15,
            break_duration_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub period_type: PeriodType,
}

impl Period {
    /// Expected work commitment for the period, independent of actual attendance
    pub fn scheduled_days(&self, settings: &PayrollSettings) -> f64 {
        match self.period_type {
            PeriodType::Weekly => 6.0,
            PeriodType::Monthly => settings.working_days_per_month,
        }
    }

    /// Inclusive on both ends
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Sparse manual overlay for one worker + one period. Every override is an
/// `Option` so that "override to 0" and "no override" stay distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollAdjustment {
    pub worker_id: Uuid,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub manual_bonuses: Option<f64>,
    pub manual_deductions: Option<f64>,
    pub custom_hours: Option<f64>,
    pub custom_days: Option<f64>,
    pub override_invalid_insurance: Option<f64>,
    pub override_pension_fund: Option<f64>,
    pub override_essalud_deduction: Option<f64>,
    pub adjustment_notes: Option<String>,
    pub adjustment_reason: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualAdjustments {
    pub bonuses: f64,
    pub deductions: f64,
    pub notes: Option<String>,
}

/// The computed result, carrying every intermediate figure. Created fresh on
/// every calculation call and never mutated afterwards; payment lifecycle
/// fields are added by the persistence layer once saved, not here.
///
/// `days_worked`/`days_absent` are fractional on purpose: a manual-hours
/// adjustment prorates deductions by `custom_hours / working_hours_per_day`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    pub worker_id: Uuid,
    pub period: Period,

    pub daily_rate: f64,
    pub hourly_rate: f64,
    pub overtime_rate: f64,

    pub total_hours: f64,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub days_worked: f64,
    pub days_absent: f64,
    pub days_late: u32,
    pub lost_hours: f64,
    pub scheduled_days: f64,
    pub scheduled_hours: f64,

    pub regular_pay: f64,
    pub overtime_pay: f64,
    pub bonuses: f64,
    pub gross_pay: f64,

    pub absent_discount: f64,
    pub late_discount: f64,
    pub invalid_insurance: f64,
    pub pension_fund: f64,
    pub essalud_deduction: f64,
    pub total_discounts: f64,
    pub net_pay: f64,

    /// Employer-side, informational, not subtracted from `net_pay`
    pub essalud_contribution: f64,

    pub has_manual_adjustments: bool,
    pub manual_adjustments: Option<ManualAdjustments>,
}

/// Everything one calculation call needs, bundled for the CLI runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollJob {
    pub worker: Worker,
    pub attendance: Vec<AttendanceRecord>,
    pub bonuses: Vec<Bonus>,
    pub period: Period,
    pub settings: Option<PayrollSettings>,
    pub adjustment: Option<PayrollAdjustment>,
}
