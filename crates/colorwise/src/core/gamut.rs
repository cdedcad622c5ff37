use super::conversion::{from_polar, oklab_to_srgb, srgb_to_oklab};
use crate::Float;

/// Determine whether the unit-range sRGB coordinates are in gamut.
pub(crate) fn in_gamut(coordinates: &[Float; 3]) -> bool {
    coordinates.iter().all(|c| 0.0 <= *c && *c <= 1.0)
}

/// Clip the unit-range sRGB coordinates to the gamut.
pub(crate) fn clip(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = coordinates;
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

/// Compute the Euclidean distance between two Oklab colors.
pub(crate) fn delta_e_ok(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [l1, a1, b1] = coordinates1;
    let [l2, a2, b2] = coordinates2;

    let dl = l1 - l2;
    let da = a1 - a2;
    let db = b1 - b2;
    dl.mul_add(dl, da.mul_add(da, db * db)).sqrt()
}

const JND: Float = 0.02;
const EPSILON: Float = 0.0001;

/// Map the given Oklch coordinates into the sRGB gamut.
///
/// This function implements the CSS Color 4 [gamut mapping
/// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping). It
/// basically performs a binary search in Oklch for a color with less chroma
/// than the original, whose clipped version is within the *just noticeable
/// difference*. Since, by definition, the clipped version also is in gamut, it
/// becomes the result of the search. The result is unit-range sRGB.
#[allow(clippy::while_float)]
pub(crate) fn to_gamut(oklch: &[Float; 3]) -> [Float; 3] {
    let [l, c, h] = *oklch;
    let l = if l.is_nan() { 0.0 } else { l };
    let c = if c.is_nan() { 0.0 } else { c.max(0.0) };
    let h = if h.is_nan() { 0.0 } else { h };

    // Preliminary 1/2: Clamp lightness
    if 1.0 <= l {
        return [1.0, 1.0, 1.0];
    }
    if l <= 0.0 {
        return [0.0, 0.0, 0.0];
    }

    // Preliminary 2/2: Check gamut
    let origin = oklab_to_srgb(&from_polar(&[l, c, h]));
    if in_gamut(&origin) {
        return origin;
    }

    // Goal: Minimize just noticeable difference between current and clipped
    // colors
    let mut current = [l, c, h];
    let mut clipped = clip(&origin);

    if delta_e_ok(&srgb_to_oklab(&clipped), &from_polar(&current)) < JND {
        return clipped;
    }

    // Strategy: Binary search by adjusting chroma in Oklch
    let mut min = 0.0;
    let mut max = c;
    let mut min_in_gamut = true;

    while EPSILON < max - min {
        let chroma = (min + max) / 2.0;
        current = [l, chroma, h];

        let candidate = oklab_to_srgb(&from_polar(&current));
        if min_in_gamut && in_gamut(&candidate) {
            min = chroma;
            continue;
        }

        clipped = clip(&candidate);
        let difference = delta_e_ok(&srgb_to_oklab(&clipped), &from_polar(&current));

        if difference < JND {
            if JND - difference < EPSILON {
                return clipped;
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }

    clipped
}
