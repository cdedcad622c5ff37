//! Adjusting lightness, saturation, and hue of a single color.
//!
//! [`Color::brighten`], [`Color::darken`], [`Color::saturate`], and
//! [`Color::desaturate`] take an [`AdjustOptions`] record, which selects the
//! amount and the color model to adjust the color in:
//!
//! ```
//! # use colorwise::{Color, ColorError};
//! # use colorwise::adjust::{AdjustOptions, AdjustSpace};
//! let red = Color::new("#f00")?;
//! assert_eq!(red.brighten(&AdjustOptions::default()).to_hex(), "#ff3333");
//!
//! let options = AdjustOptions { amount: 10.0, space: AdjustSpace::Lch };
//! assert_eq!(red.desaturate(&options).to_hex(), "#ee3a20");
//! # Ok::<(), ColorError>(())
//! ```

use crate::core::{is_achromatic, LAB_ACHROMATIC};
use crate::error::ColorError;
use crate::model::{Hsla, Lab, Lch};
use crate::{Color, Float};

/// The scale of one step in CIELAB lightness or CIELCh chroma, relative to the
/// amount of an adjustment.
const LAB_STEP: Float = 18.0 / 10.0;

/// The color model for adjusting colors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdjustSpace {
    /// Add the amount to HSL lightness or saturation in percentage points.
    #[default]
    Hsl,
    /// Add the scaled amount to CIELAB lightness. Saturation goes through
    /// CIELCh.
    Lab,
    /// Add the scaled amount to CIELCh lightness or chroma.
    Lch,
}

impl AdjustSpace {
    /// Get this adjustment space's lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hsl => "hsl",
            Self::Lab => "lab",
            Self::Lch => "lch",
        }
    }
}

impl std::str::FromStr for AdjustSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hsl" => Ok(Self::Hsl),
            "lab" => Ok(Self::Lab),
            "lch" => Ok(Self::Lch),
            _ => Err(ColorError::unknown_option("adjustment space", s)),
        }
    }
}

impl std::fmt::Display for AdjustSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The options for brightening, darkening, saturating, and desaturating.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdjustOptions {
    /// The amount, which defaults to 10.
    pub amount: Float,
    /// The color model, which defaults to HSL.
    pub space: AdjustSpace,
}

impl Default for AdjustOptions {
    fn default() -> Self {
        Self {
            amount: 10.0,
            space: AdjustSpace::Hsl,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl Color {
    /// Add the signed delta to this color's lightness.
    fn shift_lightness(&self, delta: Float, space: AdjustSpace) -> Self {
        match space {
            AdjustSpace::Hsl => {
                let hsla = self.to_hsla();
                Self::from_model(
                    &Hsla {
                        l: (hsla.l + delta).clamp(0.0, 100.0),
                        ..hsla
                    },
                    self.alpha(),
                )
            }
            AdjustSpace::Lab => {
                let lab = self.to_lab();
                Self::from_model(
                    &Lab {
                        l: (lab.l + LAB_STEP * delta).clamp(0.0, 100.0),
                        ..lab
                    },
                    self.alpha(),
                )
            }
            AdjustSpace::Lch => {
                let lch = self.to_lch();
                Self::from_lch(lch.l + LAB_STEP * delta, lch.c, lch.h, self.alpha())
            }
        }
    }

    /// Add the signed delta to this color's saturation or chroma.
    fn shift_saturation(&self, delta: Float, space: AdjustSpace) -> Self {
        match space {
            AdjustSpace::Hsl => {
                let hsla = self.to_hsla();
                Self::from_model(
                    &Hsla {
                        s: (hsla.s + delta).clamp(0.0, 100.0),
                        ..hsla
                    },
                    self.alpha(),
                )
            }
            AdjustSpace::Lab | AdjustSpace::Lch => {
                let lch = self.to_lch();
                Self::from_lch(lch.l, lch.c + LAB_STEP * delta, lch.h, self.alpha())
            }
        }
    }

    fn from_lch(l: Float, c: Float, h: Float, alpha: Float) -> Self {
        let c = c.max(0.0);
        let h = if is_achromatic(c, LAB_ACHROMATIC) {
            0.0
        } else {
            h
        };
        Self::from_model(
            &Lch {
                l: l.clamp(0.0, 100.0),
                c,
                h,
            },
            alpha,
        )
    }

    /// Brighten this color by the amount in the options.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn brighten(&self, options: &AdjustOptions) -> Self {
        self.shift_lightness(options.amount, options.space)
    }

    /// Darken this color by the amount in the options.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken(&self, options: &AdjustOptions) -> Self {
        self.shift_lightness(-options.amount, options.space)
    }

    /// Saturate this color by the amount in the options.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn saturate(&self, options: &AdjustOptions) -> Self {
        self.shift_saturation(options.amount, options.space)
    }

    /// Desaturate this color by the amount in the options.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn desaturate(&self, options: &AdjustOptions) -> Self {
        self.shift_saturation(-options.amount, options.space)
    }

    /// Rotate this color's HSL hue by the given degrees.
    ///
    /// The resulting hue is normalized into `0..360` and then truncated to an
    /// integer.
    ///
    /// ```
    /// # use colorwise::{Color, ColorError};
    /// let red = Color::new("#ff0000")?;
    /// assert_eq!(red.spin(180.0).to_hex(), "#00ffff");
    /// assert_eq!(red.spin(-30.0).to_hex(), "#ff0080");
    /// # Ok::<(), ColorError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn spin(&self, degrees: Float) -> Self {
        let hsla = self.to_hsla();
        let hue = (((hsla.h + degrees) % 360.0 + 360.0) % 360.0).floor();
        Self::from_model(&Hsla { h: hue, ..hsla }, self.alpha())
    }

    /// Remove all saturation from this color.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn grayscale(&self) -> Self {
        let hsla = self.to_hsla();
        Self::from_model(&Hsla { s: 0.0, ..hsla }, self.alpha())
    }
}

#[cfg(test)]
mod test {
    use super::{AdjustOptions, AdjustSpace};
    use crate::{Color, ColorError};

    fn options(amount: crate::Float, space: AdjustSpace) -> AdjustOptions {
        AdjustOptions { amount, space }
    }

    #[test]
    fn test_hsl() -> Result<(), ColorError> {
        let red = Color::new("#ff0000")?;
        let defaults = AdjustOptions::default();

        assert_eq!(red.brighten(&defaults).to_hex(), "#ff3333");
        assert_eq!(red.darken(&defaults).to_hex(), "#cc0000");
        assert_eq!(red.desaturate(&defaults).to_hex(), "#f20d0d");
        assert_eq!(red.saturate(&defaults), red);
        assert_eq!(
            red.brighten(&options(100.0, AdjustSpace::Hsl)).to_hex(),
            "#ffffff"
        );
        assert_eq!(
            red.darken(&options(100.0, AdjustSpace::Hsl)).to_hex(),
            "#000000"
        );

        let translucent = red.with_alpha(0.5);
        assert_eq!(translucent.darken(&defaults).alpha(), 0.5);
        Ok(())
    }

    #[test]
    fn test_lab_and_lch() -> Result<(), ColorError> {
        let black = Color::new("#000")?;
        assert_eq!(
            black.brighten(&options(10.0, AdjustSpace::Lab)).to_hex(),
            "#2c2c2c"
        );
        assert_eq!(
            black.brighten(&options(10.0, AdjustSpace::Lch)).to_hex(),
            "#2c2c2c"
        );

        let red = Color::new("#f00")?;
        assert_eq!(
            red.brighten(&options(10.0, AdjustSpace::Lab)).to_hex(),
            "#ff5a36"
        );
        assert_eq!(
            red.desaturate(&options(10.0, AdjustSpace::Lch)).to_hex(),
            "#ee3a20"
        );
        assert_eq!(
            red.desaturate(&options(10.0, AdjustSpace::Lab)).to_hex(),
            "#ee3a20"
        );

        // Chroma bottoms out at zero, which makes for a gray without hue
        let gray = red.desaturate(&options(100.0, AdjustSpace::Lch));
        let [r, g, b, _] = gray.channels();
        assert!((r - g).abs() < 1e-6 && (g - b).abs() < 1e-6);
        assert_eq!(gray.to_lch().h, 0.0);
        Ok(())
    }

    #[test]
    fn test_spin_and_grayscale() -> Result<(), ColorError> {
        let red = Color::new("#ff0000")?;
        assert_eq!(red.spin(180.0).to_hex(), "#00ffff");
        assert_eq!(red.spin(540.0).to_hex(), "#00ffff");
        assert_eq!(red.spin(-30.0).to_hex(), "#ff0080");
        assert_eq!(red.spin(120.5).to_hsl().h.round(), 120.0);
        assert_eq!(red.spin(0.0), red);

        assert_eq!(red.grayscale().to_hex(), "#808080");
        assert_eq!(red.grayscale().to_hsl().s, 0.0);
        Ok(())
    }

    #[test]
    fn test_space_names() -> Result<(), ColorError> {
        assert_eq!("LCH".parse::<AdjustSpace>()?, AdjustSpace::Lch);
        assert_eq!(AdjustSpace::Lab.to_string(), "lab");
        assert_eq!(
            "hsv".parse::<AdjustSpace>(),
            Err(ColorError::unknown_option("adjustment space", "hsv"))
        );
        Ok(())
    }
}
