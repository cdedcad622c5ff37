//! Perceptual color difference.
//!
//! [`delta_e`] measures how different two colors look with one of three CIE
//! formulae, each computed on CIELAB coordinates. [`delta_e_lab`] exposes
//! the same computation for coordinates that are not tied to an sRGB color.
//!
//! ```
//! # use colorwise::{Color, ColorError};
//! # use colorwise::difference::{delta_e, DeltaEMethod, DeltaEOptions};
//! let red = Color::new("#f00")?;
//! let crimson = Color::new("crimson")?;
//!
//! let ciede2000 = delta_e(&red, &crimson, &DeltaEOptions::default());
//! let cie76 = delta_e(&red, &crimson, &DeltaEOptions { method: DeltaEMethod::Cie76 });
//! assert!(0.0 < ciede2000 && ciede2000 < cie76);
//! assert_eq!(delta_e(&red, &red, &DeltaEOptions::default()), 0.0);
//! # Ok::<(), ColorError>(())
//! ```

use crate::core::normalize_hue;
use crate::error::ColorError;
use crate::model::Lab;
use crate::{Color, Float};

/// 25 to the 7th power, which recurs in CIEDE2000's chroma weighting.
const POW25_7: Float = 6_103_515_625.0;

/// The weighting factors of CIE94.
///
/// The defaults are the graphic arts factors. Textiles use `k_l = 2`,
/// `k1 = 0.048`, and `k2 = 0.014`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cie94Params {
    pub k_l: Float,
    pub k_c: Float,
    pub k_h: Float,
    pub k1: Float,
    pub k2: Float,
}

impl Default for Cie94Params {
    fn default() -> Self {
        Self {
            k_l: 1.0,
            k_c: 1.0,
            k_h: 1.0,
            k1: 0.045,
            k2: 0.015,
        }
    }
}

/// The formula for computing delta E.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DeltaEMethod {
    /// The Euclidean distance in CIELAB.
    Cie76,
    /// The CIE94 distance with separate weights for lightness, chroma, and
    /// hue.
    Cie94(Cie94Params),
    /// The CIEDE2000 distance, which corrects CIE94 for blues and grays.
    #[default]
    Ciede2000,
}

impl DeltaEMethod {
    /// Get this method's name, which [`FromStr`](std::str::FromStr) accepts back.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cie76 => "cie76",
            Self::Cie94(_) => "cie94",
            Self::Ciede2000 => "ciede2000",
        }
    }
}

impl std::str::FromStr for DeltaEMethod {
    type Err = ColorError;

    /// Parse the method's name. CIE94 uses the default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cie76" | "cie1976" => Ok(Self::Cie76),
            "cie94" | "cie1994" => Ok(Self::Cie94(Cie94Params::default())),
            "ciede2000" | "cie2000" | "de2000" => Ok(Self::Ciede2000),
            _ => Err(ColorError::unknown_option("delta E method", s)),
        }
    }
}

impl std::fmt::Display for DeltaEMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The options for computing delta E.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DeltaEOptions {
    /// The formula, which defaults to CIEDE2000.
    pub method: DeltaEMethod,
}

// --------------------------------------------------------------------------------------------------------------------

fn cie76(lab1: &Lab, lab2: &Lab) -> Float {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Compute CIE94.
///
/// The formula as published weighs chroma and hue by the first color's
/// chroma, which makes it asymmetric. Using the geometric mean of both
/// chromas instead restores symmetry.
fn cie94(lab1: &Lab, lab2: &Lab, params: &Cie94Params) -> Float {
    let c1 = lab1.a.hypot(lab1.b);
    let c2 = lab2.a.hypot(lab2.b);

    let dl = lab1.l - lab2.l;
    let dc = c1 - c2;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    let dh_squared = (da * da + db * db - dc * dc).max(0.0);

    let chroma = (c1 * c2).sqrt();
    let sc = 1.0 + params.k1 * chroma;
    let sh = 1.0 + params.k2 * chroma;

    let l_term = dl / params.k_l;
    let c_term = dc / (params.k_c * sc);
    let h_scale = params.k_h * sh;
    (l_term * l_term + c_term * c_term + dh_squared / (h_scale * h_scale)).sqrt()
}

/// Determine the hue angle in degrees, with zero for the origin.
fn hue_angle(a: Float, b: Float) -> Float {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    }
}

fn ciede2000(lab1: &Lab, lab2: &Lab) -> Float {
    // Stretch a* for low-chroma colors
    let c_mean = (lab1.a.hypot(lab1.b) + lab2.a.hypot(lab2.b)) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

    let a1 = lab1.a * (1.0 + g);
    let a2 = lab2.a * (1.0 + g);
    let c1 = a1.hypot(lab1.b);
    let c2 = a2.hypot(lab2.b);
    let h1 = hue_angle(a1, lab1.b);
    let h2 = hue_angle(a2, lab2.b);
    let chromatic = c1 * c2 != 0.0;

    let dl = lab2.l - lab1.l;
    let dc = c2 - c1;
    let dh = if chromatic {
        let delta = h2 - h1;
        if 180.0 < delta {
            delta - 360.0
        } else if delta < -180.0 {
            delta + 360.0
        } else {
            delta
        }
    } else {
        0.0
    };
    let dh = 2.0 * (c1 * c2).sqrt() * (dh / 2.0).to_radians().sin();

    let l_mean = (lab1.l + lab2.l) / 2.0;
    let c_mean = (c1 + c2) / 2.0;
    let h_mean = if !chromatic {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l_offset = (l_mean - 50.0) * (l_mean - 50.0);
    let sl = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let sc = 1.0 + 0.045 * c_mean;
    let sh = 1.0 + 0.015 * c_mean * t;

    // Rotate chroma and hue differences for blues
    let theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let c_mean7 = c_mean.powi(7);
    let rc = 2.0 * (c_mean7 / (c_mean7 + POW25_7)).sqrt();
    let rt = -(2.0 * theta).to_radians().sin() * rc;

    let l_term = dl / sl;
    let c_term = dc / sc;
    let h_term = dh / sh;
    (l_term * l_term + c_term * c_term + h_term * h_term + rt * c_term * h_term)
        .max(0.0)
        .sqrt()
}

/// Compute delta E between two CIELAB colors.
pub fn delta_e_lab(lab1: &Lab, lab2: &Lab, method: &DeltaEMethod) -> Float {
    match method {
        DeltaEMethod::Cie76 => cie76(lab1, lab2),
        DeltaEMethod::Cie94(params) => cie94(lab1, lab2, params),
        DeltaEMethod::Ciede2000 => ciede2000(lab1, lab2),
    }
}

/// Compute delta E between two colors.
///
/// The result is non-negative, zero for identical colors, and symmetric.
/// Alpha is ignored.
pub fn delta_e(color1: &Color, color2: &Color, options: &DeltaEOptions) -> Float {
    delta_e_lab(&color1.to_lab(), &color2.to_lab(), &options.method)
}

#[cfg(test)]
mod test {
    use super::{delta_e, delta_e_lab, Cie94Params, DeltaEMethod, DeltaEOptions};
    use crate::assert_close_enough;
    use crate::{Color, ColorError, Lab};

    fn lab(l: crate::Float, a: crate::Float, b: crate::Float) -> Lab {
        Lab { l, a, b }
    }

    #[test]
    fn test_ciede2000() {
        // Sharma, Wu, and Dalal's reference pairs
        let pairs = [
            (lab(50.0, 2.6772, -79.7751), lab(50.0, 0.0, -82.7485), 2.0425),
            (lab(50.0, 0.0, 0.0), lab(50.0, -1.0, 2.0), 2.3669),
            (lab(50.0, 2.49, -0.001), lab(50.0, -2.49, 0.0009), 7.1792),
            (lab(50.0, -0.001, 2.49), lab(50.0, 0.0009, -2.49), 4.8045),
            (lab(50.0, 2.5, 0.0), lab(50.0, 0.0, -2.5), 4.3065),
            (lab(50.0, 2.5, 0.0), lab(73.0, 25.0, -18.0), 27.1492),
        ];

        for (lab1, lab2, expected) in pairs {
            let forward = delta_e_lab(&lab1, &lab2, &DeltaEMethod::Ciede2000);
            let backward = delta_e_lab(&lab2, &lab1, &DeltaEMethod::Ciede2000);
            assert!((forward - expected).abs() < 1e-4, "{forward} vs {expected}");
            assert_close_enough!(forward, backward);
        }
    }

    #[test]
    fn test_cie76_and_cie94() {
        assert_eq!(
            delta_e_lab(
                &lab(50.0, 0.0, 0.0),
                &lab(53.0, 4.0, 0.0),
                &DeltaEMethod::Cie76,
            ),
            5.0
        );

        let method = DeltaEMethod::Cie94(Cie94Params::default());
        let lab1 = lab(50.0, 2.6772, -79.7751);
        let lab2 = lab(50.0, 0.0, -82.7485);
        let forward = delta_e_lab(&lab1, &lab2, &method);
        assert!((forward - 1.3801295).abs() < 1e-6);
        assert_close_enough!(forward, delta_e_lab(&lab2, &lab1, &method));

        let lab1 = lab(50.0, 2.5, 0.0);
        let lab2 = lab(73.0, 25.0, -18.0);
        assert!((delta_e_lab(&lab1, &lab2, &method) - 31.0393745).abs() < 1e-6);

        let textiles = DeltaEMethod::Cie94(Cie94Params {
            k_l: 2.0,
            k1: 0.048,
            k2: 0.014,
            ..Cie94Params::default()
        });
        assert!((delta_e_lab(&lab1, &lab2, &textiles) - 23.4932789).abs() < 1e-6);
    }

    #[test]
    fn test_colors() -> Result<(), ColorError> {
        let black = Color::new("#000")?;
        let white = Color::new("#fff")?;
        let teal = Color::new("#008080")?;
        let options = DeltaEOptions {
            method: DeltaEMethod::Cie76,
        };

        assert!((delta_e(&black, &white, &options) - 100.0).abs() < 1e-3);

        for method in [
            DeltaEMethod::Cie76,
            DeltaEMethod::Cie94(Cie94Params::default()),
            DeltaEMethod::Ciede2000,
        ] {
            let options = DeltaEOptions { method };
            assert_eq!(delta_e(&teal, &teal, &options), 0.0);
            assert_close_enough!(
                delta_e(&teal, &white, &options),
                delta_e(&white, &teal, &options)
            );
            assert!(0.0 < delta_e(&teal, &black, &options));
        }
        Ok(())
    }

    #[test]
    fn test_method_names() -> Result<(), ColorError> {
        assert_eq!("CIE76".parse::<DeltaEMethod>()?, DeltaEMethod::Cie76);
        assert_eq!(
            "cie94".parse::<DeltaEMethod>()?,
            DeltaEMethod::Cie94(Cie94Params::default())
        );
        assert_eq!(
            " ciede2000 ".parse::<DeltaEMethod>()?,
            DeltaEMethod::Ciede2000
        );
        assert_eq!(DeltaEMethod::default().to_string(), "ciede2000");
        assert_eq!(
            "cmc".parse::<DeltaEMethod>(),
            Err(ColorError::unknown_option("delta E method", "cmc"))
        );
        Ok(())
    }
}
