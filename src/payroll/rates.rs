use serde::{Deserialize, Serialize};

use crate::model::PayrollSettings;
use crate::utils::round2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    pub daily_rate: f64,
    pub hourly_rate: f64,
    pub overtime_rate: f64,
}

impl Rates {
    /// Fixed 30-day divisor regardless of calendar month length.
    ///
    /// The overtime rate is left unrounded so that overtime pay rounds
    /// exactly once, at assignment into the result.
    pub fn derive(effective_salary: f64, settings: &PayrollSettings) -> Self {
        let daily_rate = round2(effective_salary / 30.0);
        let hourly_rate = round2(daily_rate / settings.working_hours_per_day);
        let overtime_rate = hourly_rate * settings.overtime_multiplier;

        Self { daily_rate, hourly_rate, overtime_rate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive() {
        let rates = Rates::derive(1500.0, &PayrollSettings::default());

        assert_eq!(rates.daily_rate, 50.0);
        assert_eq!(rates.hourly_rate, 6.25);
        assert_eq!(rates.overtime_rate, 7.8125);
    }

    #[test]
    fn test_hourly_times_hours_matches_daily() {
        let settings = PayrollSettings::default();

        for salary in [930.0, 1500.0, 2047.5, 3600.0] {
            let rates = Rates::derive(salary, &settings);
            let rebuilt = rates.hourly_rate * settings.working_hours_per_day;

            assert!((rebuilt - rates.daily_rate).abs() <= 0.01 * settings.working_hours_per_day);
        }
    }
}
