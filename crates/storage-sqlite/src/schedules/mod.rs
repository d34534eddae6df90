pub mod model;
pub mod repository;

pub use model::{ScheduleExerciseDB, WorkoutScheduleDB};
pub use repository::ScheduleRepository;
