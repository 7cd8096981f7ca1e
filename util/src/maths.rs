//! Utility maths functions
//!
//! Angles in degrees are normalised into the window (-180, 180]. All heading
//! maths in the drive software goes through `norm_angle_deg` and
//! `ang_delta_deg` so that the convention is applied consistently.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Clamp a value between a minimum and maximum.
pub fn clamp<T>(value: &T, min: &T, max: &T) -> T
where
    T: Float
{
    let mut ret = *value;

    if ret > *max {
        ret = *max
    }
    if ret < *min {
        ret = *min
    }

    ret
}

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
///
/// This function is taken from the std library as num is missing it.
///
/// In particular, the return value `r` satisfies `0.0 <= r < rhs.abs()` in
/// most cases. However, due to a floating point round-off error it can
/// result in `r == rhs.abs()` if `lhs` is much smaller than `rhs.abs()` in
/// magnitude and `lhs < 0.0`.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float
{
    let r = lhs % rhs;
    if r < T::zero() { r + rhs.abs() } else { r }
}

/// Map an angle in degrees into the window (-180, 180].
pub fn norm_angle_deg<T>(angle_deg: T) -> T
where
    T: Float
{
    let half_turn = T::from(180.0).unwrap();
    let full_turn = T::from(360.0).unwrap();

    let norm = half_turn - rem_euclid(half_turn - angle_deg, full_turn);

    // Catch the round-off case in rem_euclid which would land us on -180
    if norm <= -half_turn {
        norm + full_turn
    }
    else {
        norm
    }
}

/// Get the shortest signed rotation from `b` to `a` in degrees.
///
/// The result lies in (-180, 180], so `ang_delta_deg(a, b)` is equal to
/// `-ang_delta_deg(b, a)` everywhere except at exactly 180 degrees, where both
/// directions give `+180`.
pub fn ang_delta_deg<T>(a: T, b: T) -> T
where
    T: Float
{
    norm_angle_deg(a - b)
}
