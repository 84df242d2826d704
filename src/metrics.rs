//! Pure metric calculators for workout records.
//!
//! Distance and mean speed share a single action-count pipeline; calorie
//! estimation is specialized per activity with fixed empirical multipliers.
//! Every function is deterministic and side-effect-free. Input validation
//! is the caller's responsibility.

/// Average stride length in metres (a step when walking or running, a
/// stroke when swimming).
pub const STRIDE_LEN_M: f64 = 0.65;

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// km/h to m/s conversion factor
pub const KMH_IN_MSEC: f64 = 0.278;

/// Centimetres in a metre
pub const CM_IN_M: f64 = 100.0;

// Empirical constants for running calorie estimation.
const RUN_SPEED_MULT: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

// Empirical constants for walking calorie estimation, calibrated for
// speed in m/s and height in metres.
const WALK_WEIGHT_MULT: f64 = 0.035;
const WALK_HEIGHT_MULT: f64 = 0.029;

// Empirical constants for swimming calorie estimation.
const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULT: f64 = 2.0;

/// Distance covered in kilometres for a step or stroke count.
pub fn distance_km(action_count: u32) -> f64 {
    f64::from(action_count) * STRIDE_LEN_M / M_IN_KM
}

/// Mean speed over the workout in km/h.
///
/// A duration of exactly zero yields zero speed instead of a division
/// error; this masking policy is part of the contract.
pub fn mean_speed_kmh(action_count: u32, duration_h: f64) -> f64 {
    if duration_h == 0.0 {
        return 0.0;
    }
    distance_km(action_count) / duration_h
}

/// Calories burned while running.
pub fn running_calories(action_count: u32, weight_kg: f64, duration_h: f64) -> f64 {
    let speed = mean_speed_kmh(action_count, duration_h);
    RUN_SPEED_MULT * speed * RUN_SPEED_SHIFT * weight_kg / M_IN_KM * duration_h * MIN_IN_H
}

/// Calories burned while walking.
///
/// Unit convention: mean speed is converted to m/s and squared, then
/// divided by height in METRES (input arrives in centimetres). The 0.035
/// and 0.029 multipliers are calibrated for exactly those units, and the
/// duration term is in minutes.
pub fn walking_calories(action_count: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> f64 {
    let speed_ms = mean_speed_kmh(action_count, duration_h) * KMH_IN_MSEC;
    let height_m = height_cm / CM_IN_M;
    (WALK_WEIGHT_MULT + (speed_ms.powi(2) / height_m) * WALK_HEIGHT_MULT)
        * weight_kg
        * duration_h
        * MIN_IN_H
}

/// Mean swimming speed in km/h, from pool geometry.
///
/// Zero duration yields zero speed, same masking policy as
/// [`mean_speed_kmh`].
pub fn swim_mean_speed_kmh(pool_length_m: u32, pool_lengths: u32, duration_h: f64) -> f64 {
    if duration_h == 0.0 {
        return 0.0;
    }
    f64::from(pool_length_m) * f64::from(pool_lengths) / M_IN_KM / duration_h
}

/// Calories burned while swimming.
pub fn swimming_calories(
    pool_length_m: u32,
    pool_lengths: u32,
    duration_h: f64,
    weight_kg: f64,
) -> f64 {
    let speed = swim_mean_speed_kmh(pool_length_m, pool_lengths, duration_h);
    (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULT * weight_kg * duration_h
}
