use tracing::debug;

use crate::model::{
    AttendanceRecord, Bonus, ManualAdjustments, PayrollAdjustment, PayrollCalculation,
    PayrollSettings, Period, Worker,
};
use crate::utils::round2;

mod rates;
mod summary;

pub use rates::Rates;
pub use summary::{AttendanceSummary, lost_hours, summarize};

/// Full gross/discount/net computation for one worker over one period.
///
/// Pure function over its inputs, nothing is validated and nothing can fail;
/// malformed settings (e.g. zero working hours per day) are a caller
/// precondition and propagate as division artifacts. Negative net pay is a
/// valid output and surfaced as-is.
pub fn calculate_payroll(
    worker: &Worker,
    attendance: &[AttendanceRecord],
    bonuses: &[Bonus],
    period: &Period,
    settings: &PayrollSettings,
) -> PayrollCalculation {
    debug!(worker = %worker.id, "calculating payroll");

    let rates = Rates::derive(worker.effective_salary(), settings);
    let summary = summarize(attendance, period, settings);

    let scheduled_days = period.scheduled_days(settings);
    let scheduled_hours = scheduled_days * settings.working_hours_per_day;

    let regular_pay = round2(summary.regular_hours * rates.hourly_rate);
    let overtime_pay = round2(summary.overtime_hours * rates.overtime_rate);

    let total_bonuses = round2(
        bonuses
            .iter()
            .filter(|bonus| period.contains(bonus.date))
            .map(|bonus| bonus.amount)
            .sum(),
    );

    let gross_pay = round2(regular_pay + overtime_pay + total_bonuses);

    let lost = lost_hours(attendance, settings);

    // Fixed 30-day divisor, mirrors the daily rate derivation. The
    // configured working days per month only drive the scheduled days.
    let proportion_worked = summary.days_worked as f64 / 30.0;

    // No work, no mandatory deductions and no late/absence penalty
    let invalid_insurance = if proportion_worked > 0.0 {
        round2(settings.invalid_insurance_amount * proportion_worked)
    } else {
        0.0
    };
    let pension_fund = if gross_pay > 0.0 {
        round2(gross_pay * settings.pension_fund_percentage)
    } else {
        0.0
    };
    let essalud_deduction = if proportion_worked > 0.0 {
        round2(settings.essalud_amount * proportion_worked)
    } else {
        0.0
    };
    let absent_discount = if gross_pay > 0.0 {
        round2(summary.days_absent as f64 * rates.daily_rate)
    } else {
        0.0
    };
    let late_discount = if gross_pay > 0.0 {
        round2(lost * rates.hourly_rate)
    } else {
        0.0
    };

    let total_discounts = round2(
        absent_discount + late_discount + invalid_insurance + pension_fund + essalud_deduction,
    );

    PayrollCalculation {
        worker_id: worker.id,
        period: period.clone(),
        daily_rate: rates.daily_rate,
        hourly_rate: rates.hourly_rate,
        overtime_rate: rates.overtime_rate,
        total_hours: summary.total_hours,
        regular_hours: summary.regular_hours,
        overtime_hours: summary.overtime_hours,
        days_worked: summary.days_worked as f64,
        days_absent: summary.days_absent as f64,
        days_late: summary.days_late,
        lost_hours: round2(lost),
        scheduled_days,
        scheduled_hours,
        regular_pay,
        overtime_pay,
        bonuses: total_bonuses,
        gross_pay,
        absent_discount,
        late_discount,
        invalid_insurance,
        pension_fund,
        essalud_deduction,
        total_discounts,
        net_pay: round2(gross_pay - total_discounts),
        essalud_contribution: round2(settings.essalud_amount * proportion_worked),
        has_manual_adjustments: false,
        manual_adjustments: None,
    }
}

/// Applies a manual overlay on top of a base calculation, re-deriving every
/// dependent total. Without an adjustment this is the identity.
///
/// Custom hours take priority over custom days when both are present.
/// Overridden deductions are taken verbatim, including an override to 0;
/// absent deductions are recomputed under the same gating as the base
/// calculation. The worked/absent day counts become fractional when custom
/// hours do not land on whole days, matching the prorated deductions.
pub fn apply_adjustment(
    base: &PayrollCalculation,
    adjustment: Option<&PayrollAdjustment>,
    settings: &PayrollSettings,
) -> PayrollCalculation {
    let Some(adjustment) = adjustment else {
        return base.clone();
    };

    debug!(worker = %base.worker_id, "applying manual adjustment");

    let mut result = base.clone();

    let custom_hours = adjustment
        .custom_hours
        .or(adjustment.custom_days.map(|days| days * settings.working_hours_per_day));

    if let Some(hours) = custom_hours {
        let regular_hours = hours.min(base.scheduled_hours);
        let overtime_hours = (hours - regular_hours).max(0.0);

        let days_worked = match adjustment.custom_hours {
            Some(hours) => hours / settings.working_hours_per_day,
            None => adjustment.custom_days.unwrap_or(0.0),
        };

        result.total_hours = hours;
        result.regular_hours = regular_hours;
        result.overtime_hours = overtime_hours;
        result.days_worked = days_worked;
        result.days_absent = (base.scheduled_days - days_worked).max(0.0);
        result.regular_pay = round2(regular_hours * base.hourly_rate);
        result.overtime_pay = round2(overtime_hours * base.overtime_rate);
    }

    let manual_bonuses = adjustment.manual_bonuses.unwrap_or(0.0);
    let manual_deductions = adjustment.manual_deductions.unwrap_or(0.0);

    result.bonuses = round2(base.bonuses + manual_bonuses);
    result.gross_pay =
        round2(result.regular_pay + result.overtime_pay + base.bonuses + manual_bonuses);

    let proportion_worked = result.days_worked / 30.0;

    result.invalid_insurance = match adjustment.override_invalid_insurance {
        Some(amount) => amount,
        None if proportion_worked > 0.0 => {
            round2(settings.invalid_insurance_amount * proportion_worked)
        }
        None => 0.0,
    };
    result.pension_fund = match adjustment.override_pension_fund {
        Some(amount) => amount,
        None if result.gross_pay > 0.0 => {
            round2(result.gross_pay * settings.pension_fund_percentage)
        }
        None => 0.0,
    };
    result.essalud_deduction = match adjustment.override_essalud_deduction {
        Some(amount) => amount,
        None if proportion_worked > 0.0 => round2(settings.essalud_amount * proportion_worked),
        None => 0.0,
    };

    // Carried over from the base calculation, gated on the adjusted gross
    result.absent_discount = if result.gross_pay > 0.0 { base.absent_discount } else { 0.0 };
    result.late_discount = if result.gross_pay > 0.0 { base.late_discount } else { 0.0 };

    result.total_discounts = round2(
        result.absent_discount
            + result.late_discount
            + result.invalid_insurance
            + result.pension_fund
            + result.essalud_deduction
            + manual_deductions,
    );
    result.net_pay = round2(result.gross_pay - result.total_discounts);
    result.essalud_contribution = round2(settings.essalud_amount * proportion_worked);

    result.has_manual_adjustments = true;
    result.manual_adjustments = Some(ManualAdjustments {
        bonuses: manual_bonuses,
        deductions: manual_deductions,
        notes: adjustment.adjustment_notes.clone(),
    });

    result
}
