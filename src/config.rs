use std::env;

use tracing::info;

use crate::model::PayrollSettings;

pub struct Config {
    pub settings: PayrollSettings,
}

pub fn load() -> Config {
    Config {
        settings: load_settings(),
    }
}

/// Tenant settings from `PAYROLL_*` environment variables, falling back to
/// the documented defaults. Values are not validated here beyond parsing;
/// a zero `PAYROLL_WORKING_HOURS_PER_DAY` is on whoever deployed it.
fn load_settings() -> PayrollSettings {
    let defaults = PayrollSettings::default();

    PayrollSettings {
        base_salary: env_f64("PAYROLL_BASE_SALARY", defaults.base_salary),
        working_days_per_month: env_f64("PAYROLL_WORKING_DAYS_PER_MONTH", defaults.working_days_per_month),
        working_hours_per_day: env_f64("PAYROLL_WORKING_HOURS_PER_DAY", defaults.working_hours_per_day),
        overtime_multiplier: env_f64("PAYROLL_OVERTIME_MULTIPLIER", defaults.overtime_multiplier),
        invalid_insurance_amount: env_f64("PAYROLL_INVALID_INSURANCE_AMOUNT", defaults.invalid_insurance_amount),
        pension_fund_percentage: env_f64("PAYROLL_PENSION_FUND_PERCENTAGE", defaults.pension_fund_percentage),
        essalud_amount: env_f64("PAYROLL_ESSALUD_AMOUNT", defaults.essalud_amount),
        late_tolerance_minutes: env_i64("PAYROLL_LATE_TOLERANCE_MINUTES", defaults.late_tolerance_minutes),
        break_duration_minutes: env_i64("PAYROLL_BREAK_DURATION_MINUTES", defaults.break_duration_minutes),
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    info!("Loading environment `{key}`");

    match env::var(key) {
        Ok(var) => var.parse().unwrap_or_else(|_| panic!("`{key}` is not a valid number")),
        Err(_) => default,
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    info!("Loading environment `{key}`");

    match env::var(key) {
        Ok(var) => var.parse().unwrap_or_else(|_| panic!("`{key}` is not a valid number")),
        Err(_) => default,
    }
}
