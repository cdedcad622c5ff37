//! Color wheel harmonies.
//!
//! [`harmony`] derives related colors by rotating the HSL hue of the input
//! color, or for [`Harmony::Monochromatic`], by shifting its lightness. The
//! input color always comes first. [`harmonize`] instead nudges one color's
//! hue towards another's, which keeps semantic colors such as red for errors
//! recognizable while fitting them to a brand color.
//!
//! ```
//! # use colorwise::{Color, ColorError};
//! # use colorwise::harmony::{harmony, Harmony};
//! let red = Color::new("#f00")?;
//! let hexes: Vec<String> = harmony(&red, Harmony::Triadic).iter().map(Color::to_hex).collect();
//! assert_eq!(hexes, ["#ff0000", "#00ff00", "#0000ff"]);
//! # Ok::<(), ColorError>(())
//! ```

use crate::core::{is_achromatic, normalize_hue, shortest_hue_delta, OK_ACHROMATIC};
use crate::error::ColorError;
use crate::model::Hsla;
use crate::{Color, Float};

/// The largest hue rotation applied by [`harmonize`] with amount 1.
const MAX_HARMONIZE_DEGREES: Float = 15.0;

/// A color harmony.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// The opposite hue at 180°.
    Complementary,
    /// The two hues next to the complement at 150° and 210°.
    SplitComplementary,
    /// The neighboring hues at -30° and 30°.
    Analogous,
    /// Three evenly spaced hues at 120° and 240°.
    Triadic,
    /// A rectangle on the color wheel at 60°, 180°, and 240°.
    Tetradic,
    /// Four evenly spaced hues at 90°, 180°, and 270°.
    Square,
    /// The same hue with HSL lightness shifted by -20, -10, 10, and 20.
    Monochromatic,
}

impl Harmony {
    /// All harmonies.
    pub const ALL: [Harmony; 7] = [
        Self::Complementary,
        Self::SplitComplementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
        Self::Square,
        Self::Monochromatic,
    ];

    /// Get this harmony's kebab-case name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Square => "square",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Get the hue rotations of the derived colors.
    const fn rotations(&self) -> &'static [Float] {
        match self {
            Self::Complementary => &[180.0],
            Self::SplitComplementary => &[150.0, 210.0],
            Self::Analogous => &[-30.0, 30.0],
            Self::Triadic => &[120.0, 240.0],
            Self::Tetradic => &[60.0, 180.0, 240.0],
            Self::Square => &[90.0, 180.0, 270.0],
            Self::Monochromatic => &[],
        }
    }
}

impl std::str::FromStr for Harmony {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complementary" => Ok(Self::Complementary),
            "split-complementary" | "splitcomplementary" => Ok(Self::SplitComplementary),
            "analogous" => Ok(Self::Analogous),
            "triadic" => Ok(Self::Triadic),
            "tetradic" | "rectangle" => Ok(Self::Tetradic),
            "square" => Ok(Self::Square),
            "monochromatic" => Ok(Self::Monochromatic),
            _ => Err(ColorError::unknown_option("harmony", s)),
        }
    }
}

impl std::fmt::Display for Harmony {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The lightness shifts of monochromatic harmonies.
const MONOCHROMATIC_SHIFTS: [Float; 4] = [-20.0, -10.0, 10.0, 20.0];

/// Derive the colors of the harmony.
///
/// The result starts with the input color, followed by the derived colors in
/// order of increasing rotation or lightness. All derived colors share the
/// input color's alpha.
pub fn harmony(color: &Color, harmony: Harmony) -> Vec<Color> {
    let hsla = color.to_hsla();
    let alpha = color.alpha();

    let derived = if harmony == Harmony::Monochromatic {
        MONOCHROMATIC_SHIFTS
            .iter()
            .map(|shift| {
                let l = (hsla.l + shift).clamp(0.0, 100.0);
                Color::from_model(&Hsla { l, ..hsla }, alpha)
            })
            .collect::<Vec<_>>()
    } else {
        harmony
            .rotations()
            .iter()
            .map(|rotation| {
                let h = normalize_hue(hsla.h + rotation);
                Color::from_model(&Hsla { h, ..hsla }, alpha)
            })
            .collect::<Vec<_>>()
    };

    let mut colors = Vec::with_capacity(derived.len() + 1);
    colors.push(*color);
    colors.extend(derived);
    colors
}

/// Rotate the color's hue towards the target's hue.
///
/// The rotation happens in Oklch and takes the shorter arc. It covers the
/// full distance between hues but no more than 15° times the amount, which
/// is clamped to `0..=1`. If the result falls outside the sRGB gamut, it is
/// gamut mapped. Achromatic colors and targets leave the color unchanged.
#[must_use = "function returns a new color and does not mutate original value"]
pub fn harmonize(color: &Color, target: &Color, amount: Float) -> Color {
    let oklch = color.to_oklch();
    let target = target.to_oklch();
    if is_achromatic(oklch.c, OK_ACHROMATIC) || is_achromatic(target.c, OK_ACHROMATIC) {
        return *color;
    }

    let amount = if amount.is_nan() {
        0.0
    } else {
        amount.clamp(0.0, 1.0)
    };
    let delta = shortest_hue_delta(oklch.h, target.h);
    let rotation = delta.signum() * delta.abs().min(MAX_HARMONIZE_DEGREES * amount);
    if rotation == 0.0 {
        return *color;
    }

    Color::from_oklch_mapped(oklch.l, oklch.c, normalize_hue(oklch.h + rotation))
        .with_alpha(color.alpha())
}

#[cfg(test)]
mod test {
    use super::{harmonize, harmony, Harmony};
    use crate::{Color, ColorError};

    fn hexes(color: &Color, kind: Harmony) -> Vec<String> {
        harmony(color, kind).iter().map(Color::to_hex).collect()
    }

    #[test]
    fn test_rotations() -> Result<(), ColorError> {
        let red = Color::new("#ff0000")?;

        assert_eq!(hexes(&red, Harmony::Complementary), ["#ff0000", "#00ffff"]);
        assert_eq!(
            hexes(&red, Harmony::SplitComplementary),
            ["#ff0000", "#00ff80", "#0080ff"]
        );
        assert_eq!(
            hexes(&red, Harmony::Analogous),
            ["#ff0000", "#ff0080", "#ff8000"]
        );
        assert_eq!(
            hexes(&red, Harmony::Triadic),
            ["#ff0000", "#00ff00", "#0000ff"]
        );
        assert_eq!(
            hexes(&red, Harmony::Tetradic),
            ["#ff0000", "#ffff00", "#00ffff", "#0000ff"]
        );
        assert_eq!(
            hexes(&red, Harmony::Square),
            ["#ff0000", "#80ff00", "#00ffff", "#8000ff"]
        );
        Ok(())
    }

    #[test]
    fn test_monochromatic() -> Result<(), ColorError> {
        let red = Color::new("#ff0000")?;
        assert_eq!(
            hexes(&red, Harmony::Monochromatic),
            ["#ff0000", "#990000", "#cc0000", "#ff3333", "#ff6666"]
        );

        let translucent = red.with_alpha(0.25);
        for color in harmony(&translucent, Harmony::Monochromatic) {
            assert_eq!(color.alpha(), 0.25);
        }
        Ok(())
    }

    #[test]
    fn test_input_first() -> Result<(), ColorError> {
        let color = Color::new("oklch(0.7 0.1 200)")?;
        for kind in Harmony::ALL {
            let colors = harmony(&color, kind);
            assert_eq!(colors[0].channels(), color.channels());
            assert!(2 <= colors.len());
        }
        Ok(())
    }

    #[test]
    fn test_harmonize() -> Result<(), ColorError> {
        let red = Color::new("#ff0000")?;
        let blue = Color::new("#0000ff")?;
        let gray = Color::new("#808080")?;

        let nudged = harmonize(&red, &blue, 1.0);
        assert!((nudged.to_oklch().h - 14.23388).abs() < 1.0);
        assert_ne!(nudged, red);

        assert_eq!(harmonize(&red, &blue, 0.0), red);
        assert_eq!(harmonize(&red, &gray, 1.0), red);
        assert_eq!(harmonize(&gray, &blue, 1.0), gray);
        assert_eq!(harmonize(&red, &red, 1.0), red);
        Ok(())
    }

    #[test]
    fn test_names() -> Result<(), ColorError> {
        for kind in Harmony::ALL {
            assert_eq!(kind.to_string().parse::<Harmony>()?, kind);
        }
        assert_eq!(
            "Golden".parse::<Harmony>(),
            Err(ColorError::unknown_option("harmony", "Golden"))
        );
        Ok(())
    }
}
