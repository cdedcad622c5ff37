use super::math::round_to;
use crate::Float;

/// The sRGB luminance weights, applied after APCA's simplified
/// linearization.
const APCA_WEIGHTS: [Float; 3] = [0.2126729, 0.7151522, 0.0721750];

/// Compute the APCA screen luminance of unit-range sRGB coordinates.
///
/// Unlike the Y of CIE XYZ, this quantity linearizes each channel with a
/// plain 2.4 power, preserving the sign of out-of-gamut values.
pub(crate) fn to_contrast_luminance(coordinates: &[Float; 3]) -> Float {
    let [wr, wg, wb] = APCA_WEIGHTS;
    let [r, g, b] = coordinates.map(|c| c.abs().powf(2.4).copysign(c));
    r.mul_add(wr, g.mul_add(wg, b * wb))
}

const BLACK_LEVEL: Float = 0.022;
const BLACK_CLAMP: Float = 1.414;
const MIN_DELTA_Y: Float = 0.0005;
const LC_SCALE: Float = 1.14;
const LC_OFFSET: Float = 0.027;
const MIN_LC: Float = 0.1;

/// Lift luminance near black, which APCA models as flare.
fn soft_clamp_black(luminance: Float) -> Float {
    if luminance < BLACK_LEVEL {
        luminance + (BLACK_LEVEL - luminance).powf(BLACK_CLAMP)
    } else {
        luminance
    }
}

/// Compute the APCA lightness contrast Lc between text and background
/// luminance, following version 0.0.98G-4g of
/// [APCA](https://github.com/Myndex/apca-w3) as a unit-range number.
///
/// Text comes first. The result is positive for dark text on a lighter
/// background, negative for light text on a darker background, and zero if
/// either luminance is invalid or the contrast is too low to matter.
pub(crate) fn to_contrast(text_luminance: Float, background_luminance: Float) -> Float {
    let valid = 0.0..=1.1;
    if !valid.contains(&text_luminance) || !valid.contains(&background_luminance) {
        return 0.0;
    }

    let text = soft_clamp_black(text_luminance);
    let background = soft_clamp_black(background_luminance);
    if (text - background).abs() < MIN_DELTA_Y {
        return 0.0;
    }

    if text < background {
        // Normal polarity
        let lc = LC_SCALE * (background.powf(0.56) - text.powf(0.57));
        if lc < MIN_LC {
            0.0
        } else {
            lc - LC_OFFSET
        }
    } else {
        // Reverse polarity
        let lc = LC_SCALE * (background.powf(0.65) - text.powf(0.62));
        if -MIN_LC < lc {
            0.0
        } else {
            lc + LC_OFFSET
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the WCAG 2 relative luminance for the given unit-range sRGB
/// coordinates.
pub(crate) fn to_relative_luminance(coordinates: &[Float; 3]) -> Float {
    fn linearize(value: Float) -> Float {
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [r, g, b] = *coordinates;
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Compute the WCAG 2 contrast ratio between two relative luminances, rounded
/// to two decimals.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    round_to((lighter + 0.05) / (darker + 0.05), 2)
}

#[cfg(test)]
mod test {
    use super::{to_contrast, to_contrast_luminance, to_contrast_ratio, to_relative_luminance};
    use crate::assert_close_enough;

    #[test]
    fn test_contrast() {
        let blue = to_contrast_luminance(&[104.0 / 255.0, 114.0 / 255.0, 1.0]);

        // Black and white text on the same medium blue
        assert_close_enough!(to_contrast(0.0, blue), 0.38390416110716424);
        assert_close_enough!(to_contrast(1.0, blue), -0.7119199952225724);
        assert_eq!(to_contrast(blue, blue), 0.0);
    }

    #[test]
    fn test_contrast_ratio() {
        let white = to_relative_luminance(&[1.0, 1.0, 1.0]);
        let black = to_relative_luminance(&[0.0, 0.0, 0.0]);
        assert_close_enough!(white, 1.0);
        assert_eq!(black, 0.0);
        assert_eq!(to_contrast_ratio(white, black), 21.0);
        assert_eq!(to_contrast_ratio(black, white), 21.0);

        let gray = to_relative_luminance(&[119.0 / 255.0; 3]);
        assert_eq!(to_contrast_ratio(white, gray), 4.48);
    }
}
