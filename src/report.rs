//! Workout report assembly.
//!
//! Dispatches a workout record to the per-activity calculators and renders
//! the fixed five-line textual summary.

use crate::metrics;
use crate::types::{ActivityKind, TrainingSummary, Workout};
use std::fmt;

/// Sentinel returned for an unrecognized activity tag.
///
/// The exact text is an external-interface contract.
pub const UNKNOWN_TRAINING_TYPE: &str = "unknown training type";

/// Compute the full metric set for a workout.
///
/// Returns `None` for an unrecognized activity; nothing is computed on
/// that path.
pub fn summarize(workout: &Workout) -> Option<TrainingSummary> {
    let (speed, calories) = match workout.activity {
        ActivityKind::Running => (
            metrics::mean_speed_kmh(workout.action_count, workout.duration_h),
            metrics::running_calories(workout.action_count, workout.weight_kg, workout.duration_h),
        ),
        ActivityKind::Walking => (
            metrics::mean_speed_kmh(workout.action_count, workout.duration_h),
            metrics::walking_calories(
                workout.action_count,
                workout.duration_h,
                workout.weight_kg,
                workout.height_cm,
            ),
        ),
        ActivityKind::Swimming => (
            metrics::swim_mean_speed_kmh(
                workout.pool_length_m,
                workout.pool_lengths,
                workout.duration_h,
            ),
            metrics::swimming_calories(
                workout.pool_length_m,
                workout.pool_lengths,
                workout.duration_h,
                workout.weight_kg,
            ),
        ),
        ActivityKind::Unknown => return None,
    };

    Some(TrainingSummary {
        activity: workout.activity,
        duration_h: workout.duration_h,
        // Stride-based distance for every activity, swimming included
        distance_km: metrics::distance_km(workout.action_count),
        mean_speed_kmh: speed,
        calories_kcal: calories,
    })
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training type: {}", self.activity)?;
        writeln!(f, "Duration: {:.2} h.", self.duration_h)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.mean_speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories_kcal)
    }
}

/// Render the five-line workout report for a raw activity record.
///
/// The tag is matched against the fixed activity literals; an
/// unrecognized tag returns [`UNKNOWN_TRAINING_TYPE`] verbatim.
pub fn training_info(
    action_count: u32,
    training_type: &str,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
    pool_length_m: u32,
    pool_lengths: u32,
) -> String {
    let workout = Workout {
        activity: ActivityKind::from_tag(training_type),
        action_count,
        duration_h,
        weight_kg,
        height_cm,
        pool_length_m,
        pool_lengths,
    };

    match summarize(&workout) {
        Some(summary) => summary.to_string(),
        None => {
            tracing::debug!("Unrecognized activity tag: {:?}", training_type);
            UNKNOWN_TRAINING_TYPE.to_string()
        }
    }
}
