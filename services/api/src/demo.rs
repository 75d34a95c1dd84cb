use chrono::{Datelike, Local};
use clap::Args;
use std::path::PathBuf;
use underwriter::error::AppError;
use underwriter::simulation::{calculate_risk, IntakeError, SimulationRequest};

#[derive(Args, Debug, Default)]
pub(crate) struct SimulateArgs {
    /// Path to a JSON file with the simulation request payload.
    /// Defaults to a built-in sample profile.
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Override the current year used by the vehicle recency rule
    /// (defaults to today's year).
    #[arg(long)]
    pub(crate) year: Option<i32>,
}

const SAMPLE_PROFILE: &str = r#"{
    "age": 35,
    "dependents": 2,
    "house": {"ownership_status": "mortgaged"},
    "income": 45000,
    "marital_status": "married",
    "risk_questions": [true, false, true],
    "vehicle": {"year": 2018}
}"#;

pub(crate) fn run_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let raw = match &args.profile {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_PROFILE.to_string(),
    };

    let request: SimulationRequest = serde_json::from_str(&raw).map_err(|err| {
        tracing::debug!(%err, "simulation payload failed to parse");
        IntakeError {
            violations: vec!["Payload incorrect, please fix it".to_string()],
        }
    })?;

    let profile = request.into_profile()?;
    let year = args.year.unwrap_or_else(|| Local::now().year());
    let assessment = calculate_risk(&profile, year);

    let rendered =
        serde_json::to_string_pretty(&assessment).unwrap_or_else(|_| "<unprintable>".to_string());
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_profile_scores_cleanly() {
        let request: SimulationRequest =
            serde_json::from_str(SAMPLE_PROFILE).expect("sample parses");
        let profile = request.into_profile().expect("sample is valid");
        let assessment = calculate_risk(&profile, 2018);
        assert_eq!(assessment.life.label(), "responsible");
    }

    #[test]
    fn run_simulate_accepts_the_default_sample() {
        run_simulate(SimulateArgs {
            profile: None,
            year: Some(2018),
        })
        .expect("sample profile scores");
    }

    #[test]
    fn missing_profile_file_surfaces_an_io_error() {
        let result = run_simulate(SimulateArgs {
            profile: Some(PathBuf::from("/nonexistent/profile.json")),
            year: None,
        });
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
