//! Readability of text on backgrounds.
//!
//! This module implements two metrics. [`wcag_contrast_ratio`] is the
//! symmetric contrast ratio of [WCAG 2](https://www.w3.org/TR/WCAG21/), which
//! underlies [`is_readable`] and [`most_readable`].
//! [`apca_readability_score`] is the asymmetric lightness contrast of
//! [APCA](https://github.com/Myndex/apca-w3), which distinguishes between
//! text and background and tracks perceived contrast more closely.
//!
//! ```
//! # use colorwise::{Color, ColorError};
//! # use colorwise::contrast::{apca_readability_score, wcag_contrast_ratio};
//! let black = Color::new("#000")?;
//! let white = Color::new("#fff")?;
//! assert_eq!(wcag_contrast_ratio(&black, &white), 21.0);
//! assert!(106.0 < apca_readability_score(&black, &white));
//! assert!(apca_readability_score(&white, &black) < -107.0);
//! # Ok::<(), ColorError>(())
//! ```

use crate::core::{to_contrast, to_contrast_luminance, to_contrast_ratio, to_relative_luminance};
use crate::error::ColorError;
use crate::{Color, Float};

/// Composite the color over the opaque backdrop, returning unit-range sRGB
/// coordinates.
fn composite(color: &Color, backdrop: &[Float; 3]) -> [Float; 3] {
    let alpha = color.alpha();
    let rgb = color.to_unit_rgb();
    if 1.0 <= alpha {
        return rgb;
    }

    std::array::from_fn(|index| alpha * rgb[index] + (1.0 - alpha) * backdrop[index])
}

const WHITE: [Float; 3] = [1.0, 1.0, 1.0];

/// Compute the WCAG 2 contrast ratio between two colors.
///
/// The result is in `1..=21`, rounded to two decimals, and independent of
/// argument order. A translucent color is composited over the other color if
/// that color is opaque. If both colors are translucent, each is composited
/// over white. Two fully transparent colors have no contrast, i.e., a ratio
/// of 1.
pub fn wcag_contrast_ratio(color1: &Color, color2: &Color) -> Float {
    let (alpha1, alpha2) = (color1.alpha(), color2.alpha());
    if alpha1 == 0.0 && alpha2 == 0.0 {
        return 1.0;
    }

    let (rgb1, rgb2) = if alpha1 < 1.0 && alpha2 < 1.0 {
        (composite(color1, &WHITE), composite(color2, &WHITE))
    } else if alpha1 < 1.0 {
        let rgb2 = color2.to_unit_rgb();
        (composite(color1, &rgb2), rgb2)
    } else {
        let rgb1 = color1.to_unit_rgb();
        (rgb1, composite(color2, &rgb1))
    };

    to_contrast_ratio(to_relative_luminance(&rgb1), to_relative_luminance(&rgb2))
}

/// Compute the APCA lightness contrast of text on a background.
///
/// The arguments are *not* interchangeable. The result is positive for dark
/// text on light backgrounds, negative for light text on dark backgrounds,
/// and zero for colors too close to each other. Its magnitude is in
/// percent, reaching about 106 for black on white and about 108 for white on
/// black. A translucent background is composited over white and translucent
/// text over the background.
pub fn apca_readability_score(text: &Color, background: &Color) -> Float {
    let background = composite(background, &WHITE);
    let text = composite(text, &background);

    100.0 * to_contrast(
        to_contrast_luminance(&text),
        to_contrast_luminance(&background),
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// The WCAG 2 conformance level.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WcagLevel {
    #[default]
    Aa,
    Aaa,
}

/// The size of text, with large text being at least 18pt or bold 14pt.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl WcagLevel {
    /// Get this level's name in upper case.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// Get the minimum contrast ratio for text of the given size.
    pub const fn minimum_ratio(&self, size: TextSize) -> Float {
        match (self, size) {
            (Self::Aa, TextSize::Normal) => 4.5,
            (Self::Aa, TextSize::Large) => 3.0,
            (Self::Aaa, TextSize::Normal) => 7.0,
            (Self::Aaa, TextSize::Large) => 4.5,
        }
    }
}

impl std::str::FromStr for WcagLevel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aa" => Ok(Self::Aa),
            "aaa" => Ok(Self::Aaa),
            _ => Err(ColorError::unknown_option("WCAG level", s)),
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TextSize {
    /// Get this text size's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Large => "large",
        }
    }
}

impl std::str::FromStr for TextSize {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "small" => Ok(Self::Normal),
            "large" => Ok(Self::Large),
            _ => Err(ColorError::unknown_option("text size", s)),
        }
    }
}

impl std::fmt::Display for TextSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Determine whether text is readable on the background at the given WCAG 2
/// level.
pub fn is_readable(text: &Color, background: &Color, level: WcagLevel, size: TextSize) -> bool {
    level.minimum_ratio(size) <= wcag_contrast_ratio(text, background)
}

/// Find the candidate with the highest WCAG 2 contrast against the
/// background.
///
/// Ties go to the earlier candidate. This function returns `None` if there
/// are no candidates.
pub fn most_readable(background: &Color, candidates: &[Color]) -> Option<Color> {
    let mut best: Option<(Color, Float)> = None;
    for candidate in candidates {
        let ratio = wcag_contrast_ratio(candidate, background);
        if best.map_or(true, |(_, highest)| highest < ratio) {
            best = Some((*candidate, ratio));
        }
    }
    best.map(|(color, _)| color)
}

#[cfg(test)]
mod test {
    use super::{
        apca_readability_score, is_readable, most_readable, wcag_contrast_ratio, TextSize,
        WcagLevel,
    };
    use crate::{assert_close_enough, Color, ColorError};

    #[test]
    fn test_wcag() -> Result<(), ColorError> {
        let black = Color::new("#000")?;
        let white = Color::new("#fff")?;
        let navy = Color::new("navy")?;

        assert_eq!(wcag_contrast_ratio(&black, &white), 21.0);
        assert_eq!(wcag_contrast_ratio(&white, &black), 21.0);
        assert_eq!(wcag_contrast_ratio(&navy, &white), 16.01);
        assert_eq!(wcag_contrast_ratio(&black, &navy), 1.31);
        assert_eq!(wcag_contrast_ratio(&navy, &navy), 1.0);
        Ok(())
    }

    #[test]
    fn test_wcag_alpha() -> Result<(), ColorError> {
        let white = Color::new("#fff")?;
        let shadow = Color::new("rgb(0 0 0 / 0.5)")?;
        assert_eq!(wcag_contrast_ratio(&shadow, &white), 3.98);
        assert_eq!(wcag_contrast_ratio(&white, &shadow), 3.98);

        let pink = Color::new("rgb(255 0 0 / 50%)")?;
        let lavender = Color::new("rgb(0 0 255 / 50%)")?;
        assert_eq!(wcag_contrast_ratio(&pink, &lavender), 1.34);

        let clear = Color::new("transparent")?;
        assert_eq!(wcag_contrast_ratio(&clear, &clear), 1.0);
        Ok(())
    }

    #[test]
    fn test_apca() -> Result<(), ColorError> {
        let black = Color::new("#000")?;
        let white = Color::new("#fff")?;
        let gray = Color::new("#888")?;

        assert_close_enough!(apca_readability_score(&black, &white), 106.04067, 1e-4);
        assert_close_enough!(apca_readability_score(&white, &black), -107.88473, 1e-4);
        assert_close_enough!(apca_readability_score(&gray, &white), 63.05647, 1e-4);
        assert_eq!(apca_readability_score(&gray, &gray), 0.0);

        // Translucent backgrounds sit on white
        let clear = Color::new("transparent")?;
        assert_close_enough!(apca_readability_score(&black, &clear), 106.04067, 1e-4);
        Ok(())
    }

    #[test]
    fn test_readability() -> Result<(), ColorError> {
        let white = Color::new("#fff")?;
        let gray = Color::new("#777")?;

        assert!(!is_readable(&gray, &white, WcagLevel::Aa, TextSize::Normal));
        assert!(is_readable(&gray, &white, WcagLevel::Aa, TextSize::Large));
        assert!(!is_readable(&gray, &white, WcagLevel::Aaa, TextSize::Large));

        let navy = Color::new("navy")?;
        let black = Color::new("#000")?;
        assert_eq!(most_readable(&navy, &[black, gray, white]), Some(white));
        assert_eq!(most_readable(&white, &[navy, black]), Some(black));
        assert_eq!(most_readable(&white, &[]), None);

        assert_eq!("AAA".parse::<WcagLevel>()?, WcagLevel::Aaa);
        assert_eq!("large".parse::<TextSize>()?, TextSize::Large);
        assert_eq!(TextSize::Large.to_string(), "large");
        assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
        assert_eq!(
            "A".parse::<WcagLevel>(),
            Err(ColorError::unknown_option("WCAG level", "A"))
        );
        Ok(())
    }
}
