//! Turn workouts into reports and drive batches of sensor packages.

use crate::config::{Config, LabelsConfig};
use crate::error::{Result, WorkoutError};
use crate::factory::WorkoutFactory;
use crate::models::{Report, Workout};

/// Raw sensor package: a type code plus positional readings
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}

/// The packages the reference sensor driver emits
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Derive the report for one workout
pub fn compute_report(workout: &Workout, labels: &LabelsConfig) -> Result<Report> {
    let report = Report {
        workout_type_name: labels.label(workout.workout_type()).to_string(),
        duration_hours: workout.duration_hours(),
        distance_km: workout.distance_km(),
        mean_speed_kmh: workout.mean_speed_kmh()?,
        calories_kcal: workout.spent_calories()?,
    };

    tracing::debug!(
        workout_type = %workout.workout_type(),
        distance_km = report.distance_km,
        mean_speed_kmh = report.mean_speed_kmh,
        calories_kcal = report.calories_kcal,
        "Computed report"
    );
    Ok(report)
}

/// Render the text summary using the default labels
pub fn render_report(workout: &Workout) -> Result<String> {
    Ok(compute_report(workout, &LabelsConfig::default())?.render())
}

/// Render the text summary, print it to stdout and return it
pub fn show_report(workout: &Workout, labels: &LabelsConfig) -> Result<String> {
    let message = compute_report(workout, labels)?.render();
    println!("{}", message);
    Ok(message)
}

/// A package that could not be turned into a report
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub index: usize,
    pub code: String,
    pub error: WorkoutError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub reports: Vec<Report>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn all_failed(&self) -> bool {
        self.reports.is_empty() && !self.failures.is_empty()
    }
}

/// Classifies packages and computes their reports
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    factory: WorkoutFactory,
    labels: LabelsConfig,
}

impl Calculator {
    pub fn new(factory: WorkoutFactory, labels: LabelsConfig) -> Self {
        Self { factory, labels }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.factory(), config.labels.clone())
    }

    pub fn labels(&self) -> &LabelsConfig {
        &self.labels
    }

    pub fn workout(&self, package: &Package) -> Result<Workout> {
        self.factory.create(&package.code, &package.data)
    }

    pub fn report(&self, package: &Package) -> Result<Report> {
        compute_report(&self.workout(package)?, &self.labels)
    }

    /// Process every package; a failing package is recorded and skipped
    pub fn run_batch(&self, packages: &[Package]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for (index, package) in packages.iter().enumerate() {
            match self.report(package) {
                Ok(report) => outcome.reports.push(report),
                Err(error) => {
                    tracing::warn!(index, code = %package.code, %error, "Skipping package");
                    outcome.failures.push(BatchFailure {
                        index,
                        code: package.code.clone(),
                        error,
                    });
                }
            }
        }

        outcome
    }
}
