//! The color models and their conversion to and from the RGBA hub.
//!
//! Each model is a plain struct with public fields in the model's natural CSS
//! units:
//!
//! | Model                 | Channels                                        |
//! | --------------------- | ----------------------------------------------- |
//! | [`Rgb`], [`Rgba`]     | r, g, b in `0..=255`                            |
//! | [`Hsl`], [`Hsla`]     | h in degrees, s and l in percent `0..=100`      |
//! | [`Hsv`], [`Hsva`]     | h in degrees, s and v in percent `0..=100`      |
//! | [`Hwb`], [`Hwba`]     | h in degrees, w and b in percent `0..=100`      |
//! | [`Cmyk`]              | c, m, y, k in percent `0..=100`                 |
//! | [`Lab`], [`Lch`]      | l in `0..=100`, a/b unbounded, c `0..`, h in degrees |
//! | [`Oklab`], [`Oklch`]  | l in `0..=1`, a/b unbounded, c `0..`, h in degrees |
//!
//! Models ending in `a` also carry an alpha channel in `0..=1`. All
//! conversions between models route through [`Rgba`], which is the hub with
//! unclamped RGB channels.

use crate::core::{
    cmyk_to_rgb, from_polar, hsl_to_rgb, hsv_to_rgb, hwb_to_rgb, lab_to_srgb, oklab_to_srgb,
    rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, rgb_to_hwb, srgb_to_lab, srgb_to_oklab, to_polar,
    LAB_ACHROMATIC, OK_ACHROMATIC,
};
use crate::error::{check_finite, check_range, ColorError};
use crate::format::ColorFormat;
use crate::Float;

/// A color model that converts to and from RGBA.
pub trait ColorModel: Copy {
    /// The format tag for this model.
    const FORMAT: ColorFormat;

    /// Ensure that all channels are within range.
    fn validate(&self) -> Result<(), ColorError>;

    /// Convert to the RGBA hub. The result is not clamped.
    fn to_rgba(&self) -> Rgba;

    /// Convert from the RGBA hub. Models without alpha drop it.
    fn from_rgba(rgba: &Rgba) -> Self;
}

/// Ensure that alpha is within range. Non-finite alpha passes, since colors
/// treat it as fully opaque.
fn check_alpha(alpha: Float) -> Result<(), ColorError> {
    if alpha.is_finite() {
        check_range("alpha", alpha, 0.0, 1.0)
    } else {
        Ok(())
    }
}

/// Ensure that a percentage is within range.
fn check_percent(channel: &'static str, value: Float) -> Result<(), ColorError> {
    check_range(channel, value, 0.0, 100.0)
}

#[inline]
fn unit_rgb(rgba: &Rgba) -> [Float; 3] {
    [rgba.r / 255.0, rgba.g / 255.0, rgba.b / 255.0]
}

#[inline]
fn from_unit_rgb(rgb: [Float; 3], a: Float) -> Rgba {
    Rgba {
        r: rgb[0] * 255.0,
        g: rgb[1] * 255.0,
        b: rgb[2] * 255.0,
        a,
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An opaque RGB color with channels in `0..=255`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgb {
    pub r: Float,
    pub g: Float,
    pub b: Float,
}

/// An RGB color with channels in `0..=255` and alpha in `0..=1`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: Float,
    pub g: Float,
    pub b: Float,
    pub a: Float,
}

impl ColorModel for Rgb {
    const FORMAT: ColorFormat = ColorFormat::Rgb;

    fn validate(&self) -> Result<(), ColorError> {
        check_range("red", self.r, 0.0, 255.0)?;
        check_range("green", self.g, 0.0, 255.0)?;
        check_range("blue", self.b, 0.0, 255.0)
    }

    fn to_rgba(&self) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: 1.0,
        }
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
        }
    }
}

impl ColorModel for Rgba {
    const FORMAT: ColorFormat = ColorFormat::Rgba;

    fn validate(&self) -> Result<(), ColorError> {
        check_range("red", self.r, 0.0, 255.0)?;
        check_range("green", self.g, 0.0, 255.0)?;
        check_range("blue", self.b, 0.0, 255.0)?;
        check_alpha(self.a)
    }

    fn to_rgba(&self) -> Rgba {
        *self
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        *rgba
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An opaque HSL color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

/// An HSL color with alpha.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsla {
    pub h: Float,
    pub s: Float,
    pub l: Float,
    pub a: Float,
}

impl ColorModel for Hsl {
    const FORMAT: ColorFormat = ColorFormat::Hsl;

    fn validate(&self) -> Result<(), ColorError> {
        check_finite("hue", self.h)?;
        check_percent("saturation", self.s)?;
        check_percent("lightness", self.l)
    }

    fn to_rgba(&self) -> Rgba {
        from_unit_rgb(hsl_to_rgb(&[self.h, self.s / 100.0, self.l / 100.0]), 1.0)
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let [h, s, l] = rgb_to_hsl(&unit_rgb(rgba));
        Self {
            h,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl ColorModel for Hsla {
    const FORMAT: ColorFormat = ColorFormat::Hsla;

    fn validate(&self) -> Result<(), ColorError> {
        Hsl::from(*self).validate()?;
        check_alpha(self.a)
    }

    fn to_rgba(&self) -> Rgba {
        Rgba {
            a: self.a,
            ..Hsl::from(*self).to_rgba()
        }
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let Hsl { h, s, l } = Hsl::from_rgba(rgba);
        Self { h, s, l, a: rgba.a }
    }
}

impl From<Hsla> for Hsl {
    fn from(value: Hsla) -> Self {
        Self {
            h: value.h,
            s: value.s,
            l: value.l,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An opaque HSV color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsv {
    pub h: Float,
    pub s: Float,
    pub v: Float,
}

/// An HSV color with alpha.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsva {
    pub h: Float,
    pub s: Float,
    pub v: Float,
    pub a: Float,
}

impl ColorModel for Hsv {
    const FORMAT: ColorFormat = ColorFormat::Hsv;

    fn validate(&self) -> Result<(), ColorError> {
        check_finite("hue", self.h)?;
        check_percent("saturation", self.s)?;
        check_percent("value", self.v)
    }

    fn to_rgba(&self) -> Rgba {
        from_unit_rgb(hsv_to_rgb(&[self.h, self.s / 100.0, self.v / 100.0]), 1.0)
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let [h, s, v] = rgb_to_hsv(&unit_rgb(rgba));
        Self {
            h,
            s: s * 100.0,
            v: v * 100.0,
        }
    }
}

impl ColorModel for Hsva {
    const FORMAT: ColorFormat = ColorFormat::Hsva;

    fn validate(&self) -> Result<(), ColorError> {
        Hsv::from(*self).validate()?;
        check_alpha(self.a)
    }

    fn to_rgba(&self) -> Rgba {
        Rgba {
            a: self.a,
            ..Hsv::from(*self).to_rgba()
        }
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let Hsv { h, s, v } = Hsv::from_rgba(rgba);
        Self { h, s, v, a: rgba.a }
    }
}

impl From<Hsva> for Hsv {
    fn from(value: Hsva) -> Self {
        Self {
            h: value.h,
            s: value.s,
            v: value.v,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An opaque HWB color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hwb {
    pub h: Float,
    pub w: Float,
    pub b: Float,
}

/// An HWB color with alpha.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hwba {
    pub h: Float,
    pub w: Float,
    pub b: Float,
    pub a: Float,
}

impl ColorModel for Hwb {
    const FORMAT: ColorFormat = ColorFormat::Hwb;

    fn validate(&self) -> Result<(), ColorError> {
        check_finite("hue", self.h)?;
        check_percent("whiteness", self.w)?;
        check_percent("blackness", self.b)
    }

    fn to_rgba(&self) -> Rgba {
        from_unit_rgb(hwb_to_rgb(&[self.h, self.w / 100.0, self.b / 100.0]), 1.0)
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let [h, w, b] = rgb_to_hwb(&unit_rgb(rgba));
        Self {
            h,
            w: w * 100.0,
            b: b * 100.0,
        }
    }
}

impl ColorModel for Hwba {
    const FORMAT: ColorFormat = ColorFormat::Hwba;

    fn validate(&self) -> Result<(), ColorError> {
        Hwb::from(*self).validate()?;
        check_alpha(self.a)
    }

    fn to_rgba(&self) -> Rgba {
        Rgba {
            a: self.a,
            ..Hwb::from(*self).to_rgba()
        }
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let Hwb { h, w, b } = Hwb::from_rgba(rgba);
        Self { h, w, b, a: rgba.a }
    }
}

impl From<Hwba> for Hwb {
    fn from(value: Hwba) -> Self {
        Self {
            h: value.h,
            w: value.w,
            b: value.b,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A CMYK color with channels in percent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cmyk {
    pub c: Float,
    pub m: Float,
    pub y: Float,
    pub k: Float,
}

impl ColorModel for Cmyk {
    const FORMAT: ColorFormat = ColorFormat::Cmyk;

    fn validate(&self) -> Result<(), ColorError> {
        check_percent("cyan", self.c)?;
        check_percent("magenta", self.m)?;
        check_percent("yellow", self.y)?;
        check_percent("black", self.k)
    }

    fn to_rgba(&self) -> Rgba {
        from_unit_rgb(
            cmyk_to_rgb(&[
                self.c / 100.0,
                self.m / 100.0,
                self.y / 100.0,
                self.k / 100.0,
            ]),
            1.0,
        )
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let [c, m, y, k] = rgb_to_cmyk(&unit_rgb(rgba));
        Self {
            c: c * 100.0,
            m: m * 100.0,
            y: y * 100.0,
            k: k * 100.0,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A CIELAB color relative to the D65 white point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

impl ColorModel for Lab {
    const FORMAT: ColorFormat = ColorFormat::Lab;

    fn validate(&self) -> Result<(), ColorError> {
        check_range("lightness", self.l, 0.0, 100.0)?;
        check_finite("a", self.a)?;
        check_finite("b", self.b)
    }

    fn to_rgba(&self) -> Rgba {
        from_unit_rgb(lab_to_srgb(&[self.l, self.a, self.b]), 1.0)
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let [l, a, b] = srgb_to_lab(&unit_rgb(rgba));
        Self { l, a, b }
    }
}

/// A CIELCh color, i.e., CIELAB in polar coordinates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

impl ColorModel for Lch {
    const FORMAT: ColorFormat = ColorFormat::Lch;

    fn validate(&self) -> Result<(), ColorError> {
        check_range("lightness", self.l, 0.0, 100.0)?;
        check_range("chroma", self.c, 0.0, Float::MAX)?;
        check_finite("hue", self.h)
    }

    fn to_rgba(&self) -> Rgba {
        from_unit_rgb(lab_to_srgb(&from_polar(&[self.l, self.c, self.h])), 1.0)
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let [l, c, h] = to_polar(&srgb_to_lab(&unit_rgb(rgba)), LAB_ACHROMATIC);
        Self { l, c, h }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An Oklab color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oklab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

impl ColorModel for Oklab {
    const FORMAT: ColorFormat = ColorFormat::Oklab;

    fn validate(&self) -> Result<(), ColorError> {
        check_range("lightness", self.l, 0.0, 1.0)?;
        check_finite("a", self.a)?;
        check_finite("b", self.b)
    }

    fn to_rgba(&self) -> Rgba {
        from_unit_rgb(oklab_to_srgb(&[self.l, self.a, self.b]), 1.0)
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let [l, a, b] = srgb_to_oklab(&unit_rgb(rgba));
        Self { l, a, b }
    }
}

/// An Oklch color, i.e., Oklab in polar coordinates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oklch {
    pub l: Float,
    pub c: Float,
    pub h: Float,
}

impl ColorModel for Oklch {
    const FORMAT: ColorFormat = ColorFormat::Oklch;

    fn validate(&self) -> Result<(), ColorError> {
        check_range("lightness", self.l, 0.0, 1.0)?;
        check_range("chroma", self.c, 0.0, Float::MAX)?;
        check_finite("hue", self.h)
    }

    fn to_rgba(&self) -> Rgba {
        from_unit_rgb(oklab_to_srgb(&from_polar(&[self.l, self.c, self.h])), 1.0)
    }

    fn from_rgba(rgba: &Rgba) -> Self {
        let [l, c, h] = to_polar(&srgb_to_oklab(&unit_rgb(rgba)), OK_ACHROMATIC);
        Self { l, c, h }
    }
}

// ====================================================================================================================

/// A color tagged with its format.
///
/// This enumeration has one variant per [`ColorFormat`]. The two hexadecimal
/// variants carry the hashed string, normalized to lowercase; all others carry
/// the model struct.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "format", content = "value", rename_all = "lowercase"))]
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    Hex(String),
    Hex8(String),
    Rgb(Rgb),
    Rgba(Rgba),
    Hsl(Hsl),
    Hsla(Hsla),
    Hsv(Hsv),
    Hsva(Hsva),
    Hwb(Hwb),
    Hwba(Hwba),
    Cmyk(Cmyk),
    Lab(Lab),
    Oklab(Oklab),
    Lch(Lch),
    Oklch(Oklch),
}

impl ColorValue {
    /// Get this value's format tag.
    pub const fn format(&self) -> ColorFormat {
        match self {
            Self::Hex(_) => ColorFormat::Hex,
            Self::Hex8(_) => ColorFormat::Hex8,
            Self::Rgb(_) => ColorFormat::Rgb,
            Self::Rgba(_) => ColorFormat::Rgba,
            Self::Hsl(_) => ColorFormat::Hsl,
            Self::Hsla(_) => ColorFormat::Hsla,
            Self::Hsv(_) => ColorFormat::Hsv,
            Self::Hsva(_) => ColorFormat::Hsva,
            Self::Hwb(_) => ColorFormat::Hwb,
            Self::Hwba(_) => ColorFormat::Hwba,
            Self::Cmyk(_) => ColorFormat::Cmyk,
            Self::Lab(_) => ColorFormat::Lab,
            Self::Oklab(_) => ColorFormat::Oklab,
            Self::Lch(_) => ColorFormat::Lch,
            Self::Oklch(_) => ColorFormat::Oklch,
        }
    }

    /// Ensure that this value is well-formed and all channels are in range.
    pub fn validate(&self) -> Result<(), ColorError> {
        match self {
            Self::Hex(text) | Self::Hex8(text) => crate::core::parse_hex(text).map(|_| ()),
            Self::Rgb(value) => value.validate(),
            Self::Rgba(value) => value.validate(),
            Self::Hsl(value) => value.validate(),
            Self::Hsla(value) => value.validate(),
            Self::Hsv(value) => value.validate(),
            Self::Hsva(value) => value.validate(),
            Self::Hwb(value) => value.validate(),
            Self::Hwba(value) => value.validate(),
            Self::Cmyk(value) => value.validate(),
            Self::Lab(value) => value.validate(),
            Self::Oklab(value) => value.validate(),
            Self::Lch(value) => value.validate(),
            Self::Oklch(value) => value.validate(),
        }
    }

    /// Convert this value to the RGBA hub.
    ///
    /// This method fails only for malformed hexadecimal strings. It does not
    /// validate the other models' channels; use [`ColorValue::validate`] for
    /// that.
    pub fn to_rgba(&self) -> Result<Rgba, ColorError> {
        Ok(match self {
            Self::Hex(text) | Self::Hex8(text) => {
                let [r, g, b, a] = crate::core::parse_hex(text)?;
                Rgba { r, g, b, a }
            }
            Self::Rgb(value) => value.to_rgba(),
            Self::Rgba(value) => value.to_rgba(),
            Self::Hsl(value) => value.to_rgba(),
            Self::Hsla(value) => value.to_rgba(),
            Self::Hsv(value) => value.to_rgba(),
            Self::Hsva(value) => value.to_rgba(),
            Self::Hwb(value) => value.to_rgba(),
            Self::Hwba(value) => value.to_rgba(),
            Self::Cmyk(value) => value.to_rgba(),
            Self::Lab(value) => value.to_rgba(),
            Self::Oklab(value) => value.to_rgba(),
            Self::Lch(value) => value.to_rgba(),
            Self::Oklch(value) => value.to_rgba(),
        })
    }

    /// Convert the RGBA hub to a value of the given format.
    pub fn from_rgba(format: ColorFormat, rgba: &Rgba) -> Self {
        match format {
            ColorFormat::Hex => Self::Hex(crate::core::format_hex(rgba, false)),
            ColorFormat::Hex8 => Self::Hex8(crate::core::format_hex(rgba, true)),
            ColorFormat::Rgb => Self::Rgb(Rgb::from_rgba(rgba)),
            ColorFormat::Rgba => Self::Rgba(Rgba::from_rgba(rgba)),
            ColorFormat::Hsl => Self::Hsl(Hsl::from_rgba(rgba)),
            ColorFormat::Hsla => Self::Hsla(Hsla::from_rgba(rgba)),
            ColorFormat::Hsv => Self::Hsv(Hsv::from_rgba(rgba)),
            ColorFormat::Hsva => Self::Hsva(Hsva::from_rgba(rgba)),
            ColorFormat::Hwb => Self::Hwb(Hwb::from_rgba(rgba)),
            ColorFormat::Hwba => Self::Hwba(Hwba::from_rgba(rgba)),
            ColorFormat::Cmyk => Self::Cmyk(Cmyk::from_rgba(rgba)),
            ColorFormat::Lab => Self::Lab(Lab::from_rgba(rgba)),
            ColorFormat::Oklab => Self::Oklab(Oklab::from_rgba(rgba)),
            ColorFormat::Lch => Self::Lch(Lch::from_rgba(rgba)),
            ColorFormat::Oklch => Self::Oklch(Oklch::from_rgba(rgba)),
        }
    }
}

macro_rules! value_from_model {
    ($($model:ident),*) => {
        $(
            impl From<$model> for ColorValue {
                fn from(value: $model) -> Self {
                    Self::$model(value)
                }
            }
        )*
    };
}

value_from_model!(Rgb, Rgba, Hsl, Hsla, Hsv, Hsva, Hwb, Hwba);
value_from_model!(Cmyk, Lab, Oklab, Lch, Oklch);

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    const RED: Rgba = Rgba {
        r: 255.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    #[test]
    fn test_validation() {
        assert!(Rgb {
            r: 255.0,
            g: 0.0,
            b: 0.0
        }
        .validate()
        .is_ok());
        assert!(matches!(
            Rgba {
                a: 2.0,
                ..RED
            }
            .validate(),
            Err(ColorError::OutOfRange {
                channel: "alpha",
                ..
            })
        ));
        assert!(Rgba {
            a: Float::NAN,
            ..RED
        }
        .validate()
        .is_ok());
        assert!(Hsl {
            h: -720.0,
            s: 50.0,
            l: 50.0
        }
        .validate()
        .is_ok());
        assert!(Hsl {
            h: Float::INFINITY,
            s: 50.0,
            l: 50.0
        }
        .validate()
        .is_err());
        assert!(Oklch {
            l: 50.0,
            c: 0.1,
            h: 0.0
        }
        .validate()
        .is_err());
        assert!(Lch {
            l: 50.0,
            c: -1.0,
            h: 0.0
        }
        .validate()
        .is_err());
        assert!(ColorValue::Hex("#12".to_string()).validate().is_err());
    }

    #[test]
    fn test_hub() -> Result<(), ColorError> {
        let hsl = Hsl::from_rgba(&RED);
        assert_eq!(
            hsl,
            Hsl {
                h: 0.0,
                s: 100.0,
                l: 50.0,
            }
        );

        let cmyk = Cmyk::from_rgba(&RED);
        assert_eq!(
            cmyk,
            Cmyk {
                c: 0.0,
                m: 100.0,
                y: 100.0,
                k: 0.0,
            }
        );

        let hsla = Hsla {
            h: 120.0,
            s: 100.0,
            l: 50.0,
            a: 0.5,
        }
        .to_rgba();
        assert_close_enough!(hsla.r, 0.0);
        assert_close_enough!(hsla.g, 255.0);
        assert_close_enough!(hsla.b, 0.0);
        assert_eq!(hsla.a, 0.5);

        let value = ColorValue::from_rgba(ColorFormat::Hex8, &hsla);
        assert_eq!(value, ColorValue::Hex8("#00ff0080".to_string()));
        assert_eq!(value.format(), ColorFormat::Hex8);

        let rgba = ColorValue::Hex("#FF0000".to_string()).to_rgba()?;
        assert_eq!(rgba, RED);

        let rgb = ColorValue::from(Rgb {
            r: 1.0,
            g: 2.0,
            b: 3.0,
        })
        .to_rgba()?;
        assert_eq!(rgb.a, 1.0);

        let oklch = Oklch::from_rgba(&RED);
        let back = oklch.to_rgba();
        assert_close_enough!(back.r, 255.0);
        assert_close_enough!(back.g, 0.0);
        assert_close_enough!(back.b, 0.0);

        let gray = Lch::from_rgba(&Rgba {
            r: 128.0,
            g: 128.0,
            b: 128.0,
            a: 1.0,
        });
        assert_eq!(gray.h, 0.0);

        Ok(())
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_test {
    use super::{ColorValue, Hsl};

    #[test]
    fn test_tagged_value() -> Result<(), serde_json::Error> {
        let value = ColorValue::Hsl(Hsl {
            h: 120.0,
            s: 100.0,
            l: 25.0,
        });
        let json = serde_json::to_value(&value)?;
        assert_eq!(
            json,
            serde_json::json!({ "format": "hsl", "value": { "h": 120.0, "s": 100.0, "l": 25.0 } })
        );
        assert_eq!(serde_json::from_value::<ColorValue>(json)?, value);

        let hex: ColorValue =
            serde_json::from_str(r##"{ "format": "hex8", "value": "#00000000" }"##)?;
        assert_eq!(hex, ColorValue::Hex8("#00000000".to_string()));

        let unknown = serde_json::from_str::<ColorValue>(r#"{ "format": "xyz", "value": 1 }"#);
        assert!(unknown.is_err());
        Ok(())
    }
}
