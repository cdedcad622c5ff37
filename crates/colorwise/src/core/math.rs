use crate::Float;

/// Per-representation constants for floating point numbers.
pub(crate) trait FloatExt {
    /// The power of ten that determines how many decimals survive when
    /// comparing or hashing colors.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e3;
}

// --------------------------------------------------------------------------------------------------------------------

/// A compensated sum.
///
/// Mixing and averaging colors add up many small weighted terms. This struct
/// keeps the rounding error of those sums in check with [Neumaier's variant
/// of Kahan summation](https://en.wikipedia.org/wiki/Kahan_summation_algorithm).
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    sum: Float,
    compensation: Float,
}

impl Accumulator {
    #[inline]
    pub fn total(&self) -> Float {
        self.sum + self.compensation
    }
}

impl std::ops::AddAssign<Float> for Accumulator {
    fn add_assign(&mut self, rhs: Float) {
        let t = self.sum + rhs;
        if rhs.abs() < self.sum.abs() {
            self.compensation += (self.sum - t) + rhs;
        } else {
            self.compensation += (rhs - t) + self.sum;
        }
        self.sum = t;
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Round the value to the given number of decimals, dropping the sign of
/// negative zero.
pub(crate) fn round_to(value: Float, decimals: i32) -> Float {
    let factor = (10.0 as Float).powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Normalize the hue into `0..360`. Not-a-number becomes zero.
pub(crate) fn normalize_hue(hue: Float) -> Float {
    if !hue.is_finite() {
        return 0.0;
    }

    let hue = hue.rem_euclid(360.0);
    // rem_euclid of tiny negative numbers rounds up to the modulus
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Linearly interpolate between the two values.
#[inline]
pub(crate) fn lerp(start: Float, end: Float, fraction: Float) -> Float {
    fraction.mul_add(end - start, start)
}

/// Determine the signed difference from the first to the second hue along the
/// shorter arc. The result is in `-180..=180`.
pub(crate) fn shortest_hue_delta(from: Float, to: Float) -> Float {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Compute the weighted circular mean of the hues.
///
/// The mean is the angle of the sum of weighted unit vectors. If those vectors
/// cancel each other out, the mean is zero.
pub(crate) fn circular_mean<I>(hues_and_weights: I) -> Float
where
    I: IntoIterator<Item = (Float, Float)>,
{
    let mut sin = Accumulator::default();
    let mut cos = Accumulator::default();
    for (hue, weight) in hues_and_weights {
        let radians = hue.to_radians();
        sin += weight * radians.sin();
        cos += weight * radians.cos();
    }

    let (sin, cos) = (sin.total(), cos.total());
    if sin.abs() < 1e-10 && cos.abs() < 1e-10 {
        0.0
    } else {
        normalize_hue(sin.atan2(cos).to_degrees())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a gamma-corrected sRGB component to linear light.
#[inline]
pub(crate) fn srgb_to_linear(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.04045 {
        value / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
    }
}

/// Convert a linear light component to gamma-corrected sRGB.
#[inline]
pub(crate) fn linear_to_srgb(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.0031308 {
        value * 12.92
    } else {
        magnitude
            .powf(1.0 / 2.4)
            .mul_add(1.055, -0.055)
            .copysign(value)
    }
}

// https://github.com/color-js/color.js/blob/main/src/spaces/rec2020.js

#[allow(clippy::excessive_precision)]
const REC2020_ALPHA: Float = 1.09929682680944;
#[allow(clippy::excessive_precision)]
const REC2020_BETA: Float = 0.018053968510807;

/// Convert a gamma-corrected Rec. 2020 component to linear light.
#[inline]
pub(crate) fn rec2020_to_linear(value: Float) -> Float {
    if value < REC2020_BETA * 4.5 {
        value / 4.5
    } else {
        ((value + REC2020_ALPHA - 1.0) / REC2020_ALPHA).powf((0.45 as Float).recip())
    }
}

/// Convert a linear light component to gamma-corrected Rec. 2020.
#[inline]
pub(crate) fn linear_to_rec2020(value: Float) -> Float {
    if value < REC2020_BETA {
        value * 4.5
    } else {
        REC2020_ALPHA.mul_add(value.powf(0.45), -(REC2020_ALPHA - 1.0))
    }
}

#[cfg(test)]
mod test {
    use super::{
        circular_mean, lerp, linear_to_rec2020, linear_to_srgb, normalize_hue, rec2020_to_linear,
        round_to, shortest_hue_delta, srgb_to_linear, Accumulator,
    };
    use crate::assert_close_enough;

    #[test]
    fn test_accumulator() {
        let mut accum = Accumulator::default();
        accum += 1.0;
        accum += 1e30;
        accum += 1.0;
        accum += -1e30;
        assert_eq!(accum.total(), 2.0);
        assert_eq!(1.0 + 1e30 + 1.0 - 1e30, 0.0);
    }

    #[test]
    fn test_rounding_and_hues() {
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(-0.0001, 2), 0.0);
        assert!(round_to(-0.0001, 2).is_sign_positive());
        assert_eq!(round_to(127.5, 0), 128.0);

        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(crate::Float::NAN), 0.0);
        assert!(normalize_hue(-1e-20) < 360.0);

        assert_eq!(shortest_hue_delta(350.0, 10.0), 20.0);
        assert_eq!(shortest_hue_delta(10.0, 350.0), -20.0);
        assert_eq!(shortest_hue_delta(0.0, 180.0), 180.0);

        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    }

    #[test]
    fn test_circular_mean() {
        let mean = circular_mean([(350.0, 1.0), (10.0, 1.0)]);
        assert!(mean < 1e-9 || 360.0 - mean < 1e-9, "mean is {}", mean);
        assert_close_enough!(circular_mean([(90.0, 1.0), (180.0, 1.0)]), 135.0);
        assert_eq!(circular_mean([(0.0, 1.0), (180.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_transfer_functions() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert_close_enough!(srgb_to_linear(1.0), 1.0);
        assert_close_enough!(srgb_to_linear(0.04), 0.04 / 12.92);
        assert_close_enough!(linear_to_srgb(srgb_to_linear(0.5)), 0.5);
        assert_close_enough!(linear_to_srgb(srgb_to_linear(0.02)), 0.02);

        assert_close_enough!(rec2020_to_linear(1.0), 1.0);
        assert_close_enough!(linear_to_rec2020(rec2020_to_linear(0.6)), 0.6);
        assert_close_enough!(linear_to_rec2020(rec2020_to_linear(0.05)), 0.05);
    }
}
