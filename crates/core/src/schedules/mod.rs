//! Workout schedules module.

mod schedules_model;
mod schedules_service;
mod schedules_traits;

pub use schedules_model::{NewScheduleExercise, ScheduleExercise, WorkoutSchedule};
pub use schedules_service::ScheduleService;
pub use schedules_traits::{ScheduleRepositoryTrait, ScheduleServiceTrait};
