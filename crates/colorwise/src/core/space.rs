use crate::error::ColorError;
use crate::Float;

/// The enumeration of supported RGB color spaces.
///
/// From smallest to largest gamut, they are:
///
///   * [sRGB](https://en.wikipedia.org/wiki/SRGB), which has long served as the
///     default color space for the web and is the color space of a
///     [`Color`](crate::Color)'s canonical channels.
///   * [Display P3](https://en.wikipedia.org/wiki/DCI-P3), which is
///     well-positioned to become sRGB's successor. It shares sRGB's transfer
///     function but has wider primaries.
///   * [Rec. 2020](https://en.wikipedia.org/wiki/Rec._2020), which is the
///     standard color space for ultra-high-definition (UDH) video and, when it
///     comes to display hardware, currently aspirational. It has its own
///     transfer function.
///
/// For all three color spaces, in-gamut coordinates range from 0 to 1,
/// inclusive. Conversions between them go through XYZ with the D65 standard
/// illuminant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    #[default]
    Srgb,
    DisplayP3,
    Rec2020,
}

impl ColorSpace {
    /// Get the CSS name for this color space, as used by the `color()`
    /// function.
    pub const fn css_name(&self) -> &'static str {
        match self {
            Self::Srgb => "srgb",
            Self::DisplayP3 => "display-p3",
            Self::Rec2020 => "rec2020",
        }
    }

    /// Determine whether the unit-range coordinates for this color space fall
    /// into the sRGB gamut.
    ///
    /// ```
    /// # use colorwise::ColorSpace;
    /// assert!(ColorSpace::DisplayP3.in_srgb_gamut(&[0.5, 0.5, 0.5]));
    /// assert!(!ColorSpace::DisplayP3.in_srgb_gamut(&[1.0, 0.0, 0.0]));
    /// ```
    pub fn in_srgb_gamut(&self, coordinates: &[Float; 3]) -> bool {
        const TOLERANCE: Float = 1e-9;

        super::convert(*self, Self::Srgb, coordinates)
            .iter()
            .all(|c| -TOLERANCE <= *c && *c <= 1.0 + TOLERANCE)
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srgb" => Ok(Self::Srgb),
            "display-p3" | "displayp3" | "p3" => Ok(Self::DisplayP3),
            "rec2020" | "rec-2020" => Ok(Self::Rec2020),
            _ => Err(ColorError::unknown_option("color space", s)),
        }
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}

#[cfg(test)]
mod test {
    use super::ColorSpace;
    use crate::error::ColorError;

    #[test]
    fn test_names() -> Result<(), ColorError> {
        assert_eq!("Display-P3".parse::<ColorSpace>()?, ColorSpace::DisplayP3);
        assert_eq!(" rec2020 ".parse::<ColorSpace>()?, ColorSpace::Rec2020);
        assert_eq!(ColorSpace::DisplayP3.to_string(), "display-p3");
        assert!(matches!(
            "xyz".parse::<ColorSpace>(),
            Err(ColorError::UnknownOption { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_gamut() {
        assert!(ColorSpace::Srgb.in_srgb_gamut(&[1.0, 0.0, 0.0]));
        assert!(ColorSpace::Rec2020.in_srgb_gamut(&[0.0, 0.0, 0.0]));
        assert!(ColorSpace::Rec2020.in_srgb_gamut(&[1.0, 1.0, 1.0]));
        assert!(!ColorSpace::Rec2020.in_srgb_gamut(&[0.0, 1.0, 0.0]));
    }
}
