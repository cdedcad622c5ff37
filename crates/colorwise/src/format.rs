//! Format tags, untyped inputs, and the disambiguator resolving one into the
//! other.

use crate::error::ColorError;
use crate::model::{
    Cmyk, ColorValue, Hsl, Hsla, Hsv, Hsva, Hwb, Hwba, Lab, Lch, Oklab, Oklch, Rgb, Rgba,
};
use crate::Float;

/// The closed set of color format tags.
///
/// Each tag names a [`ColorValue`] variant. Tags parse case-insensitively from
/// their lowercase names:
///
/// ```
/// # use colorwise::ColorFormat;
/// assert_eq!("OKLCH".parse::<ColorFormat>(), Ok(ColorFormat::Oklch));
/// assert!("xyz".parse::<ColorFormat>().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Hex,
    Hex8,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsv,
    Hsva,
    Hwb,
    Hwba,
    Cmyk,
    Lab,
    Oklab,
    Lch,
    Oklch,
}

impl ColorFormat {
    /// All format tags.
    pub const ALL: [ColorFormat; 15] = [
        Self::Hex,
        Self::Hex8,
        Self::Rgb,
        Self::Rgba,
        Self::Hsl,
        Self::Hsla,
        Self::Hsv,
        Self::Hsva,
        Self::Hwb,
        Self::Hwba,
        Self::Cmyk,
        Self::Lab,
        Self::Oklab,
        Self::Lch,
        Self::Oklch,
    ];

    /// Get this format's lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Hex8 => "hex8",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsv => "hsv",
            Self::Hsva => "hsva",
            Self::Hwb => "hwb",
            Self::Hwba => "hwba",
            Self::Cmyk => "cmyk",
            Self::Lab => "lab",
            Self::Oklab => "oklab",
            Self::Lch => "lch",
            Self::Oklch => "oklch",
        }
    }

    /// Determine whether values of this format carry an explicit alpha
    /// channel.
    pub const fn has_alpha(&self) -> bool {
        matches!(
            self,
            Self::Hex8 | Self::Rgba | Self::Hsla | Self::Hsva | Self::Hwba
        )
    }
}

impl std::str::FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .find(|format| format.name() == name)
            .copied()
            .ok_or_else(|| ColorError::unknown_option("color format", s))
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A bag of optional, single-letter channels.
///
/// This struct mirrors an untyped object such as `{ "l": 0.5, "c": 0.1, "h":
/// 30 }`. The set of present fields determines the format, with
/// [`parse_format`] resolving the ambiguity between CIE and OK variants.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Channels {
    pub r: Option<Float>,
    pub g: Option<Float>,
    pub b: Option<Float>,
    pub a: Option<Float>,
    pub h: Option<Float>,
    pub s: Option<Float>,
    pub l: Option<Float>,
    pub v: Option<Float>,
    pub w: Option<Float>,
    pub c: Option<Float>,
    pub m: Option<Float>,
    pub y: Option<Float>,
    pub k: Option<Float>,
}

impl Channels {
    /// Get the names of the present fields, in declaration order.
    pub fn shape(&self) -> String {
        [
            ('r', self.r),
            ('g', self.g),
            ('b', self.b),
            ('a', self.a),
            ('h', self.h),
            ('s', self.s),
            ('l', self.l),
            ('v', self.v),
            ('w', self.w),
            ('c', self.c),
            ('m', self.m),
            ('y', self.y),
            ('k', self.k),
        ]
        .iter()
        .filter(|(_, value)| value.is_some())
        .map(|(name, _)| *name)
        .collect()
    }
}

/// The input to the strict color constructor.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorInput {
    /// A hex color, named color, temperature label, or CSS color function.
    Text(String),
    /// An untyped bag of channels.
    Channels(Channels),
    /// An already tagged value.
    Value(ColorValue),
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Channels> for ColorInput {
    fn from(value: Channels) -> Self {
        Self::Channels(value)
    }
}

impl From<ColorValue> for ColorInput {
    fn from(value: ColorValue) -> Self {
        Self::Value(value)
    }
}

macro_rules! input_from_model {
    ($($model:ident),*) => {
        $(
            impl From<$model> for ColorInput {
                fn from(value: $model) -> Self {
                    Self::Value(ColorValue::$model(value))
                }
            }
        )*
    };
}

input_from_model!(Rgb, Rgba, Hsl, Hsla, Hsv, Hsva, Hwb, Hwba);
input_from_model!(Cmyk, Lab, Oklab, Lch, Oklch);

// --------------------------------------------------------------------------------------------------------------------

/// Resolve the input into a validated, tagged color value.
///
/// Text must be a hashed hexadecimal color, a CSS named color, or a color
/// temperature label; the latter two resolve to [`ColorValue::Hex`] or, for
/// `transparent`, [`ColorValue::Hex8`]. CSS color functions are the string
/// parser's domain, see [`parse_css`](crate::parse_css).
///
/// Channels resolve by the set of present fields. `{l, a, b}` and `{l, c, h}`
/// are ambiguous between CIE and OK variants. Without a hint, lightness in
/// `0..=1` selects the OK variant and anything else the CIE variant. As a
/// consequence, CIE colors with a lightness of at most 1 need an explicit
/// hint.
///
/// An explicit hint must be compatible with the input's shape. It overrides
/// the lightness heuristic but cannot turn, say, `{r, g, b, a}` into `rgb`.
pub fn parse_format(
    input: &ColorInput,
    hint: Option<ColorFormat>,
) -> Result<ColorValue, ColorError> {
    let value = match input {
        ColorInput::Text(text) => parse_text(text)?,
        ColorInput::Channels(channels) => parse_channels(channels, hint)?,
        ColorInput::Value(value) => value.clone(),
    };

    if let Some(format) = hint {
        if format != value.format() {
            return Err(ColorError::FormatMismatch {
                format: format.to_string(),
                shape: value.format().to_string(),
            });
        }
    }

    value.validate()?;
    Ok(value)
}

fn parse_text(text: &str) -> Result<ColorValue, ColorError> {
    let lowercase = text.trim().to_ascii_lowercase();

    if lowercase.starts_with('#') {
        let digits = lowercase.len() - 1;
        return if digits == 4 || digits == 8 {
            Ok(ColorValue::Hex8(lowercase))
        } else {
            Ok(ColorValue::Hex(lowercase))
        };
    }

    if let Some([r, g, b, a]) = crate::named::lookup_name(&lowercase) {
        let rgba = Rgba { r, g, b, a };
        return Ok(if a < 1.0 {
            ColorValue::Hex8(crate::core::format_hex(&rgba, true))
        } else {
            ColorValue::Hex(crate::core::format_hex(&rgba, false))
        });
    }

    if let Some(kelvin) = crate::named::lookup_temperature(&lowercase) {
        let [r, g, b] = crate::named::temperature_to_rgb(kelvin);
        let rgba = Rgba { r, g, b, a: 1.0 };
        return Ok(ColorValue::Hex(crate::core::format_hex(&rgba, false)));
    }

    Err(ColorError::UnknownFormat(text.to_owned()))
}

fn parse_channels(
    channels: &Channels,
    hint: Option<ColorFormat>,
) -> Result<ColorValue, ColorError> {
    let shape = channels.shape();

    let value = match (shape.as_str(), channels) {
        (
            "rgb",
            &Channels {
                r: Some(r),
                g: Some(g),
                b: Some(b),
                ..
            },
        ) => ColorValue::Rgb(Rgb { r, g, b }),
        (
            "rgba",
            &Channels {
                r: Some(r),
                g: Some(g),
                b: Some(b),
                a: Some(a),
                ..
            },
        ) => ColorValue::Rgba(Rgba { r, g, b, a }),
        (
            "hsl",
            &Channels {
                h: Some(h),
                s: Some(s),
                l: Some(l),
                ..
            },
        ) => ColorValue::Hsl(Hsl { h, s, l }),
        (
            "ahsl",
            &Channels {
                h: Some(h),
                s: Some(s),
                l: Some(l),
                a: Some(a),
                ..
            },
        ) => ColorValue::Hsla(Hsla { h, s, l, a }),
        (
            "hsv",
            &Channels {
                h: Some(h),
                s: Some(s),
                v: Some(v),
                ..
            },
        ) => ColorValue::Hsv(Hsv { h, s, v }),
        (
            "ahsv",
            &Channels {
                h: Some(h),
                s: Some(s),
                v: Some(v),
                a: Some(a),
                ..
            },
        ) => ColorValue::Hsva(Hsva { h, s, v, a }),
        (
            "bhw",
            &Channels {
                h: Some(h),
                w: Some(w),
                b: Some(b),
                ..
            },
        ) => ColorValue::Hwb(Hwb { h, w, b }),
        (
            "bahw",
            &Channels {
                h: Some(h),
                w: Some(w),
                b: Some(b),
                a: Some(a),
                ..
            },
        ) => ColorValue::Hwba(Hwba { h, w, b, a }),
        (
            "cmyk",
            &Channels {
                c: Some(c),
                m: Some(m),
                y: Some(y),
                k: Some(k),
                ..
            },
        ) => ColorValue::Cmyk(Cmyk { c, m, y, k }),
        (
            "bal",
            &Channels {
                l: Some(l),
                a: Some(a),
                b: Some(b),
                ..
            },
        ) => {
            if is_ok_variant(l, hint, ColorFormat::Oklab, ColorFormat::Lab) {
                ColorValue::Oklab(Oklab { l, a, b })
            } else {
                ColorValue::Lab(Lab { l, a, b })
            }
        }
        (
            "hlc",
            &Channels {
                l: Some(l),
                c: Some(c),
                h: Some(h),
                ..
            },
        ) => {
            if is_ok_variant(l, hint, ColorFormat::Oklch, ColorFormat::Lch) {
                ColorValue::Oklch(Oklch { l, c, h })
            } else {
                ColorValue::Lch(Lch { l, c, h })
            }
        }
        _ => {
            return Err(match hint {
                Some(format) => ColorError::FormatMismatch {
                    format: format.to_string(),
                    shape: format!("channels {{{}}}", shape),
                },
                None => ColorError::UnknownFormat(format!("channels {{{}}}", shape)),
            })
        }
    };

    Ok(value)
}

/// Decide between the OK and CIE variants of an ambiguous shape.
fn is_ok_variant(
    lightness: Float,
    hint: Option<ColorFormat>,
    ok: ColorFormat,
    cie: ColorFormat,
) -> bool {
    match hint {
        Some(format) if format == ok => true,
        Some(format) if format == cie => false,
        _ => {
            let is_ok = (0.0..=1.0).contains(&lightness);
            tracing::trace!(
                lightness,
                chosen = if is_ok { ok.name() } else { cie.name() },
                "resolved ambiguous lightness"
            );
            is_ok
        }
    }
}

#[cfg(test)]
mod test {
    use super::{parse_format, Channels, ColorFormat, ColorInput};
    use crate::error::ColorError;
    use crate::model::{ColorValue, Lab, Lch, Oklab, Oklch, Rgb};

    fn channels(l: f64, x: f64, y: f64, polar: bool) -> ColorInput {
        let l = Some(l as crate::Float);
        let (x, y) = (Some(x as crate::Float), Some(y as crate::Float));
        if polar {
            ColorInput::Channels(Channels {
                l,
                c: x,
                h: y,
                ..Channels::default()
            })
        } else {
            ColorInput::Channels(Channels {
                l,
                a: x,
                b: y,
                ..Channels::default()
            })
        }
    }

    #[test]
    fn test_format_names() -> Result<(), ColorError> {
        assert_eq!("rgba".parse::<ColorFormat>()?, ColorFormat::Rgba);
        assert_eq!(" HSL ".parse::<ColorFormat>()?, ColorFormat::Hsl);
        assert_eq!(ColorFormat::Hex8.to_string(), "hex8");
        assert_eq!(
            "hsx".parse::<ColorFormat>(),
            Err(ColorError::unknown_option("color format", "hsx"))
        );
        Ok(())
    }

    #[test]
    fn test_structural_detection() -> Result<(), ColorError> {
        let input = ColorInput::Channels(Channels {
            r: Some(255.0),
            g: Some(0.0),
            b: Some(0.0),
            ..Channels::default()
        });
        assert_eq!(
            parse_format(&input, None)?,
            ColorValue::Rgb(Rgb {
                r: 255.0,
                g: 0.0,
                b: 0.0
            })
        );

        let input = ColorInput::Channels(Channels {
            h: Some(120.0),
            w: Some(10.0),
            b: Some(20.0),
            a: Some(0.5),
            ..Channels::default()
        });
        assert_eq!(parse_format(&input, None)?.format(), ColorFormat::Hwba);

        let input = ColorInput::Channels(Channels {
            c: Some(0.0),
            m: Some(50.0),
            y: Some(100.0),
            k: Some(0.0),
            ..Channels::default()
        });
        assert_eq!(parse_format(&input, None)?.format(), ColorFormat::Cmyk);

        let input = ColorInput::Channels(Channels {
            r: Some(255.0),
            g: Some(0.0),
            ..Channels::default()
        });
        assert!(matches!(
            parse_format(&input, None),
            Err(ColorError::UnknownFormat(_))
        ));

        Ok(())
    }

    #[test]
    fn test_lightness_heuristic() -> Result<(), ColorError> {
        assert_eq!(
            parse_format(&channels(0.5, 0.1, 30.0, true), None)?,
            ColorValue::Oklch(Oklch {
                l: 0.5,
                c: 0.1,
                h: 30.0
            })
        );
        assert_eq!(
            parse_format(&channels(50.0, 40.0, 30.0, true), None)?,
            ColorValue::Lch(Lch {
                l: 50.0,
                c: 40.0,
                h: 30.0
            })
        );
        assert_eq!(
            parse_format(&channels(0.5, 0.1, -0.1, false), None)?,
            ColorValue::Oklab(Oklab {
                l: 0.5,
                a: 0.1,
                b: -0.1
            })
        );

        // A very dark CIELAB color is misread as Oklab without a hint.
        assert_eq!(
            parse_format(&channels(1.0, 20.0, 20.0, false), None)?.format(),
            ColorFormat::Oklab
        );
        assert_eq!(
            parse_format(&channels(1.0, 20.0, 20.0, false), Some(ColorFormat::Lab))?,
            ColorValue::Lab(Lab {
                l: 1.0,
                a: 20.0,
                b: 20.0
            })
        );

        // The hint overrides the heuristic, but validation still applies.
        assert!(matches!(
            parse_format(&channels(50.0, 0.1, 30.0, true), Some(ColorFormat::Oklch)),
            Err(ColorError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_format(&channels(150.0, 0.1, 30.0, true), None),
            Err(ColorError::OutOfRange { .. })
        ));

        Ok(())
    }

    #[test]
    fn test_hints_and_text() -> Result<(), ColorError> {
        assert!(matches!(
            parse_format(&channels(0.5, 0.1, 30.0, true), Some(ColorFormat::Rgb)),
            Err(ColorError::FormatMismatch { .. })
        ));

        let input = ColorInput::from("#FFF");
        assert_eq!(
            parse_format(&input, None)?,
            ColorValue::Hex("#fff".to_string())
        );
        assert!(matches!(
            parse_format(&input, Some(ColorFormat::Hex8)),
            Err(ColorError::FormatMismatch { .. })
        ));
        assert_eq!(
            parse_format(&ColorInput::from("#ff000080"), Some(ColorFormat::Hex8))?,
            ColorValue::Hex8("#ff000080".to_string())
        );
        assert_eq!(
            parse_format(&ColorInput::from("RebeccaPurple"), None)?,
            ColorValue::Hex("#663399".to_string())
        );
        assert_eq!(
            parse_format(&ColorInput::from("transparent"), None)?,
            ColorValue::Hex8("#00000000".to_string())
        );
        assert!(matches!(
            parse_format(&ColorInput::from("#ggg"), None),
            Err(ColorError::MalformedHex(_))
        ));
        assert!(matches!(
            parse_format(&ColorInput::from("#+1+2+3"), None),
            Err(ColorError::MalformedHex(_))
        ));
        assert!(matches!(
            parse_format(&ColorInput::from("rgb(1 2 3)"), None),
            Err(ColorError::UnknownFormat(_))
        ));

        let value = ColorInput::from(Rgb {
            r: 1.0,
            g: 2.0,
            b: 3.0,
        });
        assert!(matches!(
            parse_format(&value, Some(ColorFormat::Rgba)),
            Err(ColorError::FormatMismatch { .. })
        ));

        Ok(())
    }
}
