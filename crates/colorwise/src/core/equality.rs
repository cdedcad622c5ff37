use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings. With a
/// third argument, it instead checks that the two numbers differ by at most
/// that tolerance, which suits expected values with few significant digits.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical or the
/// numbers differ by more than the tolerance. Its message places the numbers
/// below each other at the beginning of subsequent lines for easy
/// comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {
        let (f1, f2, tolerance) = ($f1, $f2, $tolerance);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ by more than {:?}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    };
}

/// Test macro for asserting the equality of colors.
///
/// This macro tests the color objects for equality using the `Eq` trait. The
/// implementation, in turn, normalizes the channels by zeroing out
/// not-a-numbers, reducing resolution, and dropping the sign of negative zeros
/// before comparing the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the channels below each other at the beginning of
/// subsequent lines for easy comparability.
#[macro_export]
macro_rules! assert_same_color {
    ($c1:expr, $c2:expr $(,)?) => {
        let (c1, c2) = ($c1, $c2);
        assert_eq!(
            c1,
            c2,
            "color channels differ:\n{:?}\n{:?}",
            c1.channels(),
            c2.channels()
        );
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Normalize the RGBA channels for equality testing and hashing.
#[must_use = "function returns new bit strings and does not mutate original value"]
pub(crate) fn to_eq_channels(channels: &[Float; 4]) -> [Bits; 4] {
    let [r, g, b, a] = *channels;
    [
        to_eq_bits(r),
        to_eq_bits(g),
        to_eq_bits(b),
        to_eq_bits(a),
    ]
}

/// Determine whether the chroma or saturation is small enough to treat the
/// color as gray.
#[inline]
pub(crate) fn is_achromatic(chroma: Float, threshold: Float) -> bool {
    chroma.is_nan() || chroma <= threshold
}
