//! Core domain types for workout metric computation.
//!
//! This module defines:
//! - Activity kinds and their tag parsing
//! - The transient workout record
//! - The computed metric summary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of recorded activity
///
/// Tag dispatch is a closed enum with exhaustive matching; anything
/// outside the three known tags collapses into `Unknown`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
    Unknown,
}

impl ActivityKind {
    /// Parse an activity tag into a kind.
    ///
    /// Tags are exact literals (`"Running"`, `"Walking"`, `"Swimming"`);
    /// no case folding. Every other string maps to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Running" => ActivityKind::Running,
            "Walking" => ActivityKind::Walking,
            "Swimming" => ActivityKind::Swimming,
            _ => ActivityKind::Unknown,
        }
    }

    /// Human label used in the report header
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "Walking",
            ActivityKind::Swimming => "Swimming",
            ActivityKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single workout record, as raw counters
///
/// Purely transient call data: nothing is persisted or mutated, and every
/// metric is recomputed from these fields on each call. Fields an activity
/// does not use stay at zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Workout {
    pub activity: ActivityKind,
    /// Steps for running and walking, strokes for swimming
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_h: f64,
    /// Athlete body weight in kilograms
    pub weight_kg: f64,
    /// Athlete height in centimetres (walking only)
    #[serde(default)]
    pub height_cm: f64,
    /// Pool length in metres (swimming only)
    #[serde(default)]
    pub pool_length_m: u32,
    /// Completed pool lengths (swimming only)
    #[serde(default)]
    pub pool_lengths: u32,
}

impl Workout {
    /// Running workout record
    pub fn running(action_count: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            activity: ActivityKind::Running,
            action_count,
            duration_h,
            weight_kg,
            height_cm: 0.0,
            pool_length_m: 0,
            pool_lengths: 0,
        }
    }

    /// Walking workout record
    pub fn walking(action_count: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            activity: ActivityKind::Walking,
            action_count,
            duration_h,
            weight_kg,
            height_cm,
            pool_length_m: 0,
            pool_lengths: 0,
        }
    }

    /// Swimming workout record
    ///
    /// `action_count` carries the stroke count; pool geometry drives the
    /// speed and calorie figures.
    pub fn swimming(
        action_count: u32,
        pool_length_m: u32,
        pool_lengths: u32,
        duration_h: f64,
        weight_kg: f64,
    ) -> Self {
        Self {
            activity: ActivityKind::Swimming,
            action_count,
            duration_h,
            weight_kg,
            height_cm: 0.0,
            pool_length_m,
            pool_lengths,
        }
    }
}

/// Computed metric set for one workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrainingSummary {
    pub activity: ActivityKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parsing_exact_literals() {
        assert_eq!(ActivityKind::from_tag("Running"), ActivityKind::Running);
        assert_eq!(ActivityKind::from_tag("Walking"), ActivityKind::Walking);
        assert_eq!(ActivityKind::from_tag("Swimming"), ActivityKind::Swimming);
    }

    #[test]
    fn test_tag_parsing_rejects_everything_else() {
        // Exact-match contract: case variants are not recognized tags
        assert_eq!(ActivityKind::from_tag("running"), ActivityKind::Unknown);
        assert_eq!(ActivityKind::from_tag("RUNNING"), ActivityKind::Unknown);
        assert_eq!(ActivityKind::from_tag("Cycling"), ActivityKind::Unknown);
        assert_eq!(ActivityKind::from_tag(""), ActivityKind::Unknown);
    }

    #[test]
    fn test_label_round_trips_through_from_tag() {
        for kind in [
            ActivityKind::Running,
            ActivityKind::Walking,
            ActivityKind::Swimming,
        ] {
            assert_eq!(ActivityKind::from_tag(kind.label()), kind);
        }
    }

    #[test]
    fn test_activity_kind_serde_names() {
        let json = serde_json::to_string(&ActivityKind::Swimming).unwrap();
        assert_eq!(json, "\"swimming\"");

        let parsed: ActivityKind = serde_json::from_str("\"running\"").unwrap();
        assert_eq!(parsed, ActivityKind::Running);
    }

    #[test]
    fn test_constructors_zero_unused_fields() {
        let run = Workout::running(8500, 1.25, 72.0);
        assert_eq!(run.activity, ActivityKind::Running);
        assert_eq!(run.pool_length_m, 0);
        assert_eq!(run.height_cm, 0.0);

        let walk = Workout::walking(6000, 1.0, 70.0, 175.0);
        assert_eq!(walk.activity, ActivityKind::Walking);
        assert_eq!(walk.height_cm, 175.0);
        assert_eq!(walk.pool_lengths, 0);

        let swim = Workout::swimming(1200, 25, 40, 1.0, 80.0);
        assert_eq!(swim.activity, ActivityKind::Swimming);
        assert_eq!(swim.action_count, 1200);
        assert_eq!(swim.pool_length_m, 25);
        assert_eq!(swim.height_cm, 0.0);
    }

    #[test]
    fn test_workout_deserializes_without_optional_fields() {
        // Pool and height fields default to zero when absent
        let json = r#"{
            "activity": "running",
            "action_count": 5000,
            "duration_h": 0.5,
            "weight_kg": 68.0
        }"#;

        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.activity, ActivityKind::Running);
        assert_eq!(workout.height_cm, 0.0);
        assert_eq!(workout.pool_length_m, 0);
        assert_eq!(workout.pool_lengths, 0);
    }
}
