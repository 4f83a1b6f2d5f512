use serde::{Deserialize, Serialize};

use crate::constants::{
    CM_IN_M, KMH_TO_MS, LAND_STEP_M, MIN_IN_H, M_IN_KM, RUN_SPEED_MULTIPLIER, RUN_SPEED_SHIFT,
    SWIM_SPEED_SHIFT, SWIM_STROKE_M, SWIM_WEIGHT_MULTIPLIER, WALK_SPEED_HEIGHT_MULTIPLIER,
    WALK_WEIGHT_MULTIPLIER,
};
use crate::error::{Result, WorkoutError};

/// Kind of workout, identified on the wire by a three letter type code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Running,
        WorkoutType::SportsWalking,
        WorkoutType::Swimming,
    ];

    /// Sensor package type code
    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
            WorkoutType::Swimming => "SWM",
        }
    }

    /// Number of positional values a sensor package of this type carries
    pub fn arity(self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
            WorkoutType::Swimming => 5,
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutType::Running => write!(f, "Running"),
            WorkoutType::SportsWalking => write!(f, "SportsWalking"),
            WorkoutType::Swimming => write!(f, "Swimming"),
        }
    }
}

impl std::str::FromStr for WorkoutType {
    type Err = WorkoutError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::SportsWalking),
            "SWM" => Ok(WorkoutType::Swimming),
            _ => Err(WorkoutError::UnknownTypeCode(s.to_string())),
        }
    }
}

/// Readings every workout carries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Steps or strokes
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Session {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    fn distance_km(&self, step_m: f64) -> f64 {
        f64::from(self.action_count) * step_m / M_IN_KM
    }

    fn speed_kmh(&self, distance_km: f64) -> Result<f64> {
        finite(
            divide(distance_km, self.duration_hours, "duration_hours")?,
            "mean_speed_kmh",
        )
    }
}

fn divide(numerator: f64, denominator: f64, quantity: &'static str) -> Result<f64> {
    if denominator == 0.0 {
        return Err(WorkoutError::DivisionByZero { quantity });
    }
    Ok(numerator / denominator)
}

fn finite(value: f64, quantity: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(WorkoutError::NonFinite { quantity });
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    #[serde(flatten)]
    pub session: Session,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            session: Session::new(action_count, duration_hours, weight_kg),
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.session.distance_km(LAND_STEP_M)
    }

    pub fn mean_speed_kmh(&self) -> Result<f64> {
        self.session.speed_kmh(self.distance_km())
    }

    pub fn spent_calories(&self) -> Result<f64> {
        let s = &self.session;
        finite(
            (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh()? + RUN_SPEED_SHIFT) * s.weight_kg
                / M_IN_KM
                * s.duration_hours
                * MIN_IN_H,
            "calories_kcal",
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    #[serde(flatten)]
    pub session: Session,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            session: Session::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.session.distance_km(LAND_STEP_M)
    }

    pub fn mean_speed_kmh(&self) -> Result<f64> {
        self.session.speed_kmh(self.distance_km())
    }

    pub fn spent_calories(&self) -> Result<f64> {
        let s = &self.session;
        let speed_ms = self.mean_speed_kmh()? * KMH_TO_MS;
        let speed_height_ratio = divide(speed_ms.powi(2), self.height_cm / CM_IN_M, "height_cm")?;

        finite(
            (WALK_WEIGHT_MULTIPLIER * s.weight_kg
                + speed_height_ratio * WALK_SPEED_HEIGHT_MULTIPLIER * s.weight_kg)
                * s.duration_hours
                * MIN_IN_H,
            "calories_kcal",
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    #[serde(flatten)]
    pub session: Session,
    pub pool_length_m: f64,
    pub pool_lap_count: u32,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> Self {
        Self {
            session: Session::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_lap_count,
        }
    }

    /// Stroke-based distance. Not used for speed.
    pub fn distance_km(&self) -> f64 {
        self.session.distance_km(SWIM_STROKE_M)
    }

    /// Speed from the pool laps actually swum
    pub fn mean_speed_kmh(&self) -> Result<f64> {
        let pool_distance_km = self.pool_length_m * f64::from(self.pool_lap_count) / M_IN_KM;
        self.session.speed_kmh(pool_distance_km)
    }

    pub fn spent_calories(&self) -> Result<f64> {
        let s = &self.session;
        finite(
            (self.mean_speed_kmh()? + SWIM_SPEED_SHIFT)
                * SWIM_WEIGHT_MULTIPLIER
                * s.weight_kg
                * s.duration_hours,
            "calories_kcal",
        )
    }
}

/// A single workout, built once from sensor data and never mutated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Workout::Running(_) => WorkoutType::Running,
            Workout::SportsWalking(_) => WorkoutType::SportsWalking,
            Workout::Swimming(_) => WorkoutType::Swimming,
        }
    }

    pub fn session(&self) -> &Session {
        match self {
            Workout::Running(w) => &w.session,
            Workout::SportsWalking(w) => &w.session,
            Workout::Swimming(w) => &w.session,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        self.session().duration_hours
    }

    /// Distance covered in km
    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    /// Average speed in km/h
    pub fn mean_speed_kmh(&self) -> Result<f64> {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    /// Calories burned in kcal
    pub fn spent_calories(&self) -> Result<f64> {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }
}
