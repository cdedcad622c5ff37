use super::math::{
    linear_to_rec2020, linear_to_srgb, normalize_hue, rec2020_to_linear, srgb_to_linear,
};
use super::ColorSpace;
use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected RGB to linear RGB using sRGB's
/// gamma. Display P3 uses the very same gamma.
pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    [
        srgb_to_linear(value[0]),
        srgb_to_linear(value[1]),
        srgb_to_linear(value[2]),
    ]
}

/// Convert coordinates from linear RGB to gamma-corrected RGB using sRGB's
/// gamma. Display P3 uses the very same gamma.
pub(crate) fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    [
        linear_to_srgb(value[0]),
        linear_to_srgb(value[1]),
        linear_to_srgb(value[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/p3-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_DISPLAY_P3_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4865709486482162, 0.26566769316909306, 0.1982172852343625 ],
    [ 0.2289745640697488, 0.6917385218365064,  0.079286914093745  ],
    [ 0.0000000000000000, 0.04511338185890264, 1.043944368900976  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_DISPLAY_P3: [[Float; 3]; 3] = [
    [  2.493496911941425,   -0.9313836179191239,  -0.40271078445071684  ],
    [ -0.8294889695615747,   1.7626640603183463,   0.023624685841943577 ],
    [  0.03584583024378447, -0.07617238926804182,  0.9568845240076872   ],
];

// https://github.com/color-js/color.js/blob/main/src/spaces/rec2020-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_REC2020_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.6369580483012914, 0.14461690358620832,  0.1688809751641721  ],
    [ 0.2627002120112671, 0.6779980715188708,   0.05930171646986196 ],
    [ 0.000000000000000,  0.028072693049087428, 1.060985057710791   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_REC2020: [[Float; 3]; 3] = [
    [  1.716651187971268,  -0.355670783776392, -0.253366281373660  ],
    [ -0.666684351832489,   1.616481236634939,  0.0157685458139111 ],
    [  0.017639857445311,  -0.042770613257809,  0.942103121235474  ],
];

/// Convert gamma-corrected RGB coordinates in the given color space to XYZ.
fn rgb_to_xyz(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    match space {
        ColorSpace::Srgb => multiply(&LINEAR_SRGB_TO_XYZ, &rgb_to_linear_rgb(value)),
        ColorSpace::DisplayP3 => multiply(&LINEAR_DISPLAY_P3_TO_XYZ, &rgb_to_linear_rgb(value)),
        ColorSpace::Rec2020 => multiply(
            &LINEAR_REC2020_TO_XYZ,
            &[
                rec2020_to_linear(value[0]),
                rec2020_to_linear(value[1]),
                rec2020_to_linear(value[2]),
            ],
        ),
    }
}

/// Convert XYZ coordinates to gamma-corrected RGB in the given color space.
fn xyz_to_rgb(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    match space {
        ColorSpace::Srgb => linear_rgb_to_rgb(&multiply(&XYZ_TO_LINEAR_SRGB, value)),
        ColorSpace::DisplayP3 => linear_rgb_to_rgb(&multiply(&XYZ_TO_LINEAR_DISPLAY_P3, value)),
        ColorSpace::Rec2020 => {
            let [r, g, b] = multiply(&XYZ_TO_LINEAR_REC2020, value);
            [
                linear_to_rec2020(r),
                linear_to_rec2020(g),
                linear_to_rec2020(b),
            ]
        }
    }
}

/// Convert unit-range RGB coordinates between color spaces.
///
/// Conversions between distinct spaces go through XYZ. The result is not
/// clipped and hence may fall outside the target's gamut.
pub(crate) fn convert(from: ColorSpace, to: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    if from == to {
        return *value;
    }

    xyz_to_rgb(to, &rgb_to_xyz(from, value))
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

/// Convert coordinates for Oklab to XYZ. This requires two matrix
/// multiplications and a coordinate-wise exponential.
fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
}

/// Convert coordinates for XYZ to Oklab. This requires two matrix
/// multiplications and a coordinate-wise cube root.
fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

/// Convert unit-range sRGB coordinates to Oklab.
pub(crate) fn srgb_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_oklab(&rgb_to_xyz(ColorSpace::Srgb, value))
}

/// Convert Oklab coordinates to unit-range sRGB. The result may be out of
/// gamut.
pub(crate) fn oklab_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_rgb(ColorSpace::Srgb, &oklab_to_xyz(value))
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/main/src/spaces/lab.js, adapted to D65

#[allow(clippy::excessive_precision)]
const D65_WHITE: [Float; 3] = [0.9504559270516717, 1.0, 1.0890577507598784];
const EPSILON: Float = 216.0 / 24389.0;
const KAPPA: Float = 24389.0 / 27.0;

/// Convert XYZ coordinates to CIELAB relative to the D65 white point.
fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, 16.0) / 116.0
        }
    }

    let fx = f(value[0] / D65_WHITE[0]);
    let fy = f(value[1] / D65_WHITE[1]);
    let fz = f(value[2] / D65_WHITE[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIELAB coordinates relative to the D65 white point to XYZ.
#[allow(non_snake_case)]
fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;
    let fy = (L + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let x = if fx.powi(3) > EPSILON {
        fx.powi(3)
    } else {
        (116.0 * fx - 16.0) / KAPPA
    };
    let y = if L > KAPPA * EPSILON {
        fy.powi(3)
    } else {
        L / KAPPA
    };
    let z = if fz.powi(3) > EPSILON {
        fz.powi(3)
    } else {
        (116.0 * fz - 16.0) / KAPPA
    };

    [x * D65_WHITE[0], y * D65_WHITE[1], z * D65_WHITE[2]]
}

/// Convert unit-range sRGB coordinates to CIELAB.
pub(crate) fn srgb_to_lab(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_lab(&rgb_to_xyz(ColorSpace::Srgb, value))
}

/// Convert CIELAB coordinates to unit-range sRGB. The result may be out of
/// gamut.
pub(crate) fn lab_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_rgb(ColorSpace::Srgb, &lab_to_xyz(value))
}

// --------------------------------------------------------------------------------------------------------------------

/// The chroma below which Oklch treats a color as achromatic.
pub(crate) const OK_ACHROMATIC: Float = 0.0002;

/// The chroma below which CIELCh treats a color as achromatic.
pub(crate) const LAB_ACHROMATIC: Float = 0.02;

/// Convert Cartesian lightness and a/b coordinates to lightness, chroma, and
/// hue. If chroma does not exceed the threshold, the hue is zero.
#[allow(non_snake_case)]
pub(crate) fn to_polar(value: &[Float; 3], threshold: Float) -> [Float; 3] {
    let [L, a, b] = *value;
    let C = a.hypot(b);
    if C <= threshold {
        [L, C, 0.0]
    } else {
        [L, C, normalize_hue(b.atan2(a).to_degrees())]
    }
}

/// Convert lightness, chroma, and hue to Cartesian coordinates.
#[allow(non_snake_case)]
pub(crate) fn from_polar(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;
    let radians = h.to_radians();
    [L, C * radians.cos(), C * radians.sin()]
}

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#rgb-to-hsl

const SPREAD_THRESHOLD: Float = 1e-12;

/// Compute the hue of unit-range RGB coordinates from their maximum and
/// spread.
fn hue_of(r: Float, g: Float, b: Float, max: Float, spread: Float) -> Float {
    let sector = if max == r {
        (g - b) / spread
    } else if max == g {
        (b - r) / spread + 2.0
    } else {
        (r - g) / spread + 4.0
    };
    normalize_hue(60.0 * sector)
}

/// Convert unit-range RGB coordinates to HSL with hue in degrees and
/// saturation and lightness in unit range.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let spread = max - min;

    if spread <= SPREAD_THRESHOLD {
        return [0.0, 0.0, lightness];
    }

    let saturation = if lightness <= 0.0 || lightness >= 1.0 {
        0.0
    } else {
        (max - lightness) / lightness.min(1.0 - lightness)
    };

    [hue_of(r, g, b, max, spread), saturation, lightness]
}

/// Convert HSL coordinates with saturation and lightness in unit range to
/// unit-range RGB.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let h = normalize_hue(h);
    let a = s * l.min(1.0 - l);

    let f = |n: Float| {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };

    [f(0.0), f(8.0), f(4.0)]
}

/// Convert unit-range RGB coordinates to HSV with hue in degrees and
/// saturation and value in unit range.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let spread = max - min;

    if spread <= SPREAD_THRESHOLD {
        return [0.0, 0.0, max];
    }

    let saturation = if max <= 0.0 { 0.0 } else { spread / max };
    [hue_of(r, g, b, max, spread), saturation, max]
}

/// Convert HSV coordinates with saturation and value in unit range to
/// unit-range RGB.
pub(crate) fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let h = normalize_hue(h);

    let f = |n: Float| {
        let k = (n + h / 60.0) % 6.0;
        v - v * s * k.min(4.0 - k).clamp(0.0, 1.0)
    };

    [f(5.0), f(3.0), f(1.0)]
}

/// Convert unit-range RGB coordinates to HWB with hue in degrees and
/// whiteness and blackness in unit range.
pub(crate) fn rgb_to_hwb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = rgb_to_hsv(value);
    [h, (1.0 - s) * v, 1.0 - v]
}

/// Convert HWB coordinates with whiteness and blackness in unit range to
/// unit-range RGB. If whiteness and blackness add up to one or more, the
/// result is the gray with their ratio.
pub(crate) fn hwb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, w, b] = *value;
    if w + b >= 1.0 {
        let gray = w / (w + b);
        return [gray, gray, gray];
    }

    let [r, g, bl] = hsl_to_rgb(&[h, 1.0, 0.5]);
    let scale = 1.0 - w - b;
    [
        r.mul_add(scale, w),
        g.mul_add(scale, w),
        bl.mul_add(scale, w),
    ]
}

/// Convert unit-range RGB coordinates to unit-range CMYK.
pub(crate) fn rgb_to_cmyk(value: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *value;
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }

    let white = 1.0 - k;
    [
        (white - r) / white,
        (white - g) / white,
        (white - b) / white,
        k,
    ]
}

/// Convert unit-range CMYK coordinates to unit-range RGB.
pub(crate) fn cmyk_to_rgb(value: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = *value;
    let white = 1.0 - k;
    [(1.0 - c) * white, (1.0 - m) * white, (1.0 - y) * white]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    fn assert_close(actual: [Float; 3], expected: [Float; 3], tolerance: Float) {
        for index in 0..3 {
            assert_close_enough!(actual[index], expected[index], tolerance);
        }
    }

    #[test]
    fn test_lab() {
        let red = srgb_to_lab(&[1.0, 0.0, 0.0]);
        assert_close(red, [53.237116, 80.090114, 67.203264], 1e-5);

        let white = srgb_to_lab(&[1.0, 1.0, 1.0]);
        assert_close(white, [100.0, 0.0, 0.0], 1e-6);

        let back = lab_to_srgb(&red);
        assert_close(back, [1.0, 0.0, 0.0], 1e-9);

        let dark = lab_to_srgb(&srgb_to_lab(&[0.01, 0.02, 0.005]));
        assert_close(dark, [0.01, 0.02, 0.005], 1e-9);
    }

    #[test]
    fn test_oklab() {
        let red = srgb_to_oklab(&[1.0, 0.0, 0.0]);
        assert_close(red, [0.627955, 0.224863, 0.125846], 1e-5);

        let lch = to_polar(&red, OK_ACHROMATIC);
        assert_close(lch, [0.627955, 0.257683, 29.2339], 1e-4);
        assert_close(from_polar(&lch), red, 1e-12);

        let white = to_polar(&srgb_to_oklab(&[1.0, 1.0, 1.0]), OK_ACHROMATIC);
        assert_close(white, [1.0, 0.0, 0.0], 1e-6);
        assert_eq!(white[2], 0.0);

        assert_close(oklab_to_srgb(&red), [1.0, 0.0, 0.0], 1e-9);
    }

    #[test]
    fn test_spaces() {
        let p3 = convert(ColorSpace::Srgb, ColorSpace::DisplayP3, &[1.0, 0.0, 0.0]);
        assert_close(p3, [0.917488, 0.200287, 0.138561], 1e-5);
        assert_close(
            convert(ColorSpace::DisplayP3, ColorSpace::Srgb, &p3),
            [1.0, 0.0, 0.0],
            1e-9,
        );

        let rec = convert(ColorSpace::Srgb, ColorSpace::Rec2020, &[0.2, 0.4, 0.6]);
        assert_close(
            convert(ColorSpace::Rec2020, ColorSpace::Srgb, &rec),
            [0.2, 0.4, 0.6],
            1e-9,
        );
    }

    #[test]
    fn test_cylindrical() {
        assert_close(rgb_to_hsl(&[1.0, 0.0, 0.0]), [0.0, 1.0, 0.5], 1e-12);
        assert_close(rgb_to_hsl(&[0.0, 1.0, 1.0]), [180.0, 1.0, 0.5], 1e-12);
        assert_close(rgb_to_hsl(&[0.5, 0.5, 0.5]), [0.0, 0.0, 0.5], 1e-12);
        assert_close(hsl_to_rgb(&[180.0, 1.0, 0.5]), [0.0, 1.0, 1.0], 1e-12);
        assert_close(hsl_to_rgb(&[360.0, 1.0, 0.5]), [1.0, 0.0, 0.0], 1e-12);
        assert_close(hsl_to_rgb(&[210.0, 0.5, 0.25]), [0.125, 0.25, 0.375], 1e-12);

        assert_close(rgb_to_hsv(&[0.0, 0.5, 0.25]), [150.0, 1.0, 0.5], 1e-12);
        assert_close(hsv_to_rgb(&[150.0, 1.0, 0.5]), [0.0, 0.5, 0.25], 1e-12);

        assert_close(rgb_to_hwb(&[0.6, 0.2, 0.2]), [0.0, 0.2, 0.4], 1e-12);
        assert_close(hwb_to_rgb(&[0.0, 0.2, 0.4]), [0.6, 0.2, 0.2], 1e-12);
        assert_close(hwb_to_rgb(&[120.0, 0.6, 0.6]), [0.5, 0.5, 0.5], 1e-12);
    }

    #[test]
    fn test_cmyk() {
        assert_eq!(rgb_to_cmyk(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0, 1.0]);
        let cmyk = rgb_to_cmyk(&[1.0, 0.5, 0.0]);
        for (actual, expected) in cmyk.iter().zip([0.0, 0.5, 1.0, 0.0]) {
            assert_close_enough!(*actual, expected);
        }
        assert_close(cmyk_to_rgb(&cmyk), [1.0, 0.5, 0.0], 1e-12);
    }
}
