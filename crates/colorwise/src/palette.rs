//! Design system palettes.
//!
//! A [`ColorPalette`] expands one primary color into the swatches a user
//! interface needs: the primary swatch, secondary swatches from a color
//! harmony, a pure and a tinted neutral swatch, and five semantic swatches.
//! The semantic colors start out as conventional blue, green, red, amber,
//! and purple and are then [harmonized](crate::harmony::harmonize) with the
//! primary color.
//!
//! ```
//! # use colorwise::{Color, ColorError};
//! # use colorwise::palette::{ColorPalette, PaletteOptions};
//! let primary = Color::new("#008080")?;
//! let palette = ColorPalette::new(&primary, &PaletteOptions::default());
//! assert_eq!(palette.primary.main_color(), primary);
//! assert_eq!(palette.secondaries.len(), 2);
//! # Ok::<(), ColorError>(())
//! ```

use crate::harmony::{harmonize, harmony, Harmony};
use crate::swatch::{ColorSwatch, SwatchOptions};
use crate::{Color, Float};

/// The Oklch chroma of the tinted neutral.
const TINTED_CHROMA: Float = 0.02;

/// The options for creating a palette.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PaletteOptions {
    /// The harmony for the secondary colors, which defaults to analogous.
    pub harmony: Harmony,
    /// The amount for harmonizing semantic colors with the primary color,
    /// which defaults to 1.
    pub harmonize: Float,
    /// The options for all swatches.
    pub swatch: SwatchOptions,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            harmony: Harmony::Analogous,
            harmonize: 1.0,
            swatch: SwatchOptions::default(),
        }
    }
}

/// A semantic role within a palette.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Semantic {
    /// Informational messages, based on blue.
    Info,
    /// Success, based on green.
    Positive,
    /// Errors and destructive actions, based on red.
    Negative,
    /// Warnings, based on amber.
    Warning,
    /// Highlights, based on purple.
    Special,
}

impl Semantic {
    /// All semantic roles.
    pub const ALL: [Semantic; 5] = [
        Self::Info,
        Self::Positive,
        Self::Negative,
        Self::Warning,
        Self::Special,
    ];

    /// Get this role's name, e.g., `"negative"` for [`Semantic::Negative`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Warning => "warning",
            Self::Special => "special",
        }
    }

    /// Get the role's color before harmonization.
    pub fn base_color(&self) -> Color {
        match self {
            Self::Info => Color::from_24bit(0x3b, 0x82, 0xf6),
            Self::Positive => Color::from_24bit(0x22, 0xc5, 0x5e),
            Self::Negative => Color::from_24bit(0xef, 0x44, 0x44),
            Self::Warning => Color::from_24bit(0xf5, 0x9e, 0x0b),
            Self::Special => Color::from_24bit(0xa8, 0x55, 0xf7),
        }
    }
}

impl std::fmt::Display for Semantic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A palette of swatches derived from a primary color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPalette {
    /// The swatch for the primary color.
    pub primary: ColorSwatch,
    /// The swatches for the harmony's derived colors.
    pub secondaries: Vec<ColorSwatch>,
    /// A gray swatch.
    pub neutral: ColorSwatch,
    /// A gray swatch with a hint of the primary hue.
    pub tinted_neutral: ColorSwatch,
    pub info: ColorSwatch,
    pub positive: ColorSwatch,
    pub negative: ColorSwatch,
    pub warning: ColorSwatch,
    pub special: ColorSwatch,
}

impl ColorPalette {
    /// Create a new palette for the primary color.
    pub fn new(primary: &Color, options: &PaletteOptions) -> Self {
        let swatch = |color: &Color| ColorSwatch::new(color, &options.swatch);
        let semantic = |role: Semantic| {
            swatch(&harmonize(&role.base_color(), primary, options.harmonize))
        };

        let oklch = primary.to_oklch();
        let neutral = Color::from_oklch_mapped(oklch.l, 0.0, 0.0);
        let tinted = Color::from_oklch_mapped(oklch.l, oklch.c.min(TINTED_CHROMA), oklch.h);

        Self {
            primary: swatch(primary),
            secondaries: harmony(primary, options.harmony)
                .iter()
                .skip(1)
                .map(swatch)
                .collect(),
            neutral: swatch(&neutral),
            tinted_neutral: swatch(&tinted),
            info: semantic(Semantic::Info),
            positive: semantic(Semantic::Positive),
            negative: semantic(Semantic::Negative),
            warning: semantic(Semantic::Warning),
            special: semantic(Semantic::Special),
        }
    }

    /// Get the swatch for the semantic role.
    pub fn semantic(&self, role: Semantic) -> &ColorSwatch {
        match role {
            Semantic::Info => &self.info,
            Semantic::Positive => &self.positive,
            Semantic::Negative => &self.negative,
            Semantic::Warning => &self.warning,
            Semantic::Special => &self.special,
        }
    }
}
