// Library exports for the training stats calculator
// This allows testing of internal modules

pub mod calculator;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod factory;
pub mod models;

pub use calculator::{compute_report, render_report, show_report, Calculator, Package};
pub use error::WorkoutError;
pub use factory::{create_workout, UnknownCodePolicy, WorkoutFactory};
pub use models::{Report, Workout, WorkoutType};
