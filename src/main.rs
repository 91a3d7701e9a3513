use std::fs::OpenOptions;

use thiserror::Error;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Layer, Registry, filter, fmt, layer::SubscriberExt};

use planilla_engine::model::PayrollJob;
use planilla_engine::{config, payroll};

#[derive(Debug, Error)]
enum JobError {
    #[error("unable to read job file: {0}")]
    Read(#[from] std::io::Error),
    #[error("malformed job file: {0}")]
    Parse(#[from] serde_json::Error),
}

fn load_job(path: &str) -> Result<PayrollJob, JobError> {
    let raw = std::fs::read_to_string(path)?;

    Ok(serde_json::from_str(&raw)?)
}

fn main() {
    let _ = dotenvy::dotenv();

    let log_file = OpenOptions::new()
        .append(true)
        .create(true)
        .open("trace.log")
        .unwrap();

    let subscriber = Registry::default()
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_line_number(true)
                .with_filter(EnvFilter::from_default_env())
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(log_file)
                .with_filter(filter::LevelFilter::from_level(Level::TRACE))
        );

    tracing::subscriber::set_global_default(subscriber).unwrap();

    let config::Config { settings } = config::load();

    let path = std::env::args().nth(1).expect("Usage: planilla-engine <job.json>");
    let job = load_job(&path).unwrap_or_else(|err| panic!("{err}"));

    // Per-job settings win over the environment ones
    let settings = job.settings.clone().unwrap_or(settings);

    info!(worker = %job.worker.id, "processing payroll job");

    let base = payroll::calculate_payroll(
        &job.worker,
        &job.attendance,
        &job.bonuses,
        &job.period,
        &settings,
    );
    let result = payroll::apply_adjustment(&base, job.adjustment.as_ref(), &settings);

    println!("{}", serde_json::to_string_pretty(&result).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_job_missing_file() {
        let err = load_job("does-not-exist.json").unwrap_err();
        assert!(matches!(err, JobError::Read(_)));
    }

    #[test]
    fn test_load_job_malformed() {
        let path = std::env::temp_dir().join("planilla-malformed-job.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_job(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, JobError::Parse(_)));
    }
}
