pub mod report;
pub mod workout;

pub use report::Report;
pub use workout::{Running, Session, SportsWalking, Swimming, Workout, WorkoutType};
