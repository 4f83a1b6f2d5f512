//! Classify raw sensor packages into workouts.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkoutError};
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutType};

/// What to do with a type code that is not RUN, WLK or SWM
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCodePolicy {
    /// Fail with `WorkoutError::UnknownTypeCode`
    #[default]
    Reject,
    /// Treat the package as sports walking (legacy sensor firmware behaviour)
    SportsWalking,
}

/// Builds workouts from a type code and positional readings
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutFactory {
    policy: UnknownCodePolicy,
}

impl WorkoutFactory {
    pub fn new(policy: UnknownCodePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownCodePolicy {
        self.policy
    }

    /// Resolve a type code under this factory's policy
    pub fn classify(&self, code: &str) -> Result<WorkoutType> {
        match code.parse::<WorkoutType>() {
            Ok(workout_type) => Ok(workout_type),
            Err(err) => match self.policy {
                UnknownCodePolicy::Reject => Err(err),
                UnknownCodePolicy::SportsWalking => {
                    tracing::warn!(code, "Unknown type code, treating as sports walking");
                    Ok(WorkoutType::SportsWalking)
                }
            },
        }
    }

    /// Build a workout from a sensor package.
    ///
    /// `data` is positional: action count, duration (h), weight (kg), then
    /// height (cm) for walking or pool length (m) and lap count for swimming.
    pub fn create(&self, code: &str, data: &[f64]) -> Result<Workout> {
        let workout_type = self.classify(code)?;

        if data.len() != workout_type.arity() {
            return Err(WorkoutError::Arity {
                workout_type,
                expected: workout_type.arity(),
                actual: data.len(),
            });
        }

        let action_count = count("action_count", data[0])?;
        let duration_hours = measure("duration_hours", data[1])?;
        let weight_kg = measure("weight_kg", data[2])?;

        let workout = match workout_type {
            WorkoutType::Running => {
                Workout::Running(Running::new(action_count, duration_hours, weight_kg))
            }
            WorkoutType::SportsWalking => Workout::SportsWalking(SportsWalking::new(
                action_count,
                duration_hours,
                weight_kg,
                measure("height_cm", data[3])?,
            )),
            WorkoutType::Swimming => Workout::Swimming(Swimming::new(
                action_count,
                duration_hours,
                weight_kg,
                measure("pool_length_m", data[3])?,
                count("pool_lap_count", data[4])?,
            )),
        };

        tracing::debug!(code, %workout_type, "Classified sensor package");
        Ok(workout)
    }
}

/// Build a workout, rejecting unknown type codes
pub fn create_workout(code: &str, data: &[f64]) -> Result<Workout> {
    WorkoutFactory::default().create(code, data)
}

fn measure(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(WorkoutError::InvalidValue { field, value });
    }
    Ok(value)
}

fn count(field: &'static str, value: f64) -> Result<u32> {
    let value = measure(field, value)?;
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(WorkoutError::InvalidValue { field, value });
    }
    Ok(value as u32)
}
