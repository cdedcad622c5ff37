use std::str::FromStr;

use crate::core::{
    clip, convert, format_function, format_hex, format_number, parse, srgb_to_oklab, to_contrast,
    to_contrast_luminance, to_eq_channels, to_gamut, to_polar, to_relative_luminance, ColorSpace,
    OK_ACHROMATIC,
};
use crate::error::ColorError;
use crate::format::{parse_format, ColorFormat, ColorInput};
use crate::model::{
    Cmyk, ColorModel, ColorValue, Hsl, Hsla, Hsv, Hsva, Hwb, Hwba, Lab, Lch, Oklab, Oklch, Rgb,
    Rgba,
};
use crate::Float;

/// An immutable color.
///
/// Every color holds canonical sRGB channels in `0..=255` at full floating
/// point precision plus an alpha channel in `0..=1`. All other
/// representations, whether [`Hsl`], [`Oklch`], or a hexadecimal string, are
/// computed on demand. Channels are rounded to integers only when formatting
/// a color, so that chains of operations do not compound rounding errors.
///
/// # Construction
///
/// [`Color::new`] is the strict constructor. It accepts anything that
/// converts into a [`ColorInput`], i.e., a string, a bag of [`Channels`],
/// a [`ColorValue`], or one of the model structs:
///
/// ```
/// # use colorwise::{Color, ColorError, Hsl};
/// let red = Color::new("#f00")?;
/// assert_eq!(red, Color::new(Hsl { h: 0.0, s: 100.0, l: 50.0 })?);
/// assert_eq!(red, Color::new("rgb(255 0 0)")?);
/// assert!(Color::new("rgba(255, 0, 0, 2)").is_err());
/// # Ok::<(), ColorError>(())
/// ```
///
/// Out-of-range channels and malformed strings are errors. Only the output is
/// ever clamped. [`parse_css_color_string`] is the permissive counterpart,
/// which returns `None` instead of an error. `Color` has no [`Default`];
/// [`Color::random`] is the only constructor without arguments and draws
/// uniformly from the RGB cube.
///
/// # Equality Testing and Hashing
///
/// Equality testing and hashing both normalize the channels before comparing
/// them: they zero out not-a-numbers, reduce precision by rounding, and drop
/// the sign of negative zero. As a result, colors that differ only through
/// floating point error compare equal and also hash the same.
///
/// [`Channels`]: crate::Channels
#[derive(Copy, Clone)]
pub struct Color {
    r: Float,
    g: Float,
    b: Float,
    a: Float,
}

impl Color {
    /// Create a new color from the given input.
    ///
    /// Text is parsed with [`parse_css`]. All other inputs are resolved with
    /// [`parse_format`], which also validates their channels.
    pub fn new<I: Into<ColorInput>>(input: I) -> Result<Self, ColorError> {
        match input.into() {
            ColorInput::Text(text) => parse(&text),
            input => {
                let value = parse_format(&input, None)?;
                Ok(Self::from_rgba(value.to_rgba()?))
            }
        }
    }

    /// Create a new color from the given input, which must have the given
    /// format.
    ///
    /// The format overrides the lightness heuristic for `{l, a, b}` and `{l,
    /// c, h}` channels. For text, only hashed hexadecimal colors, named
    /// colors, and temperature labels are supported.
    ///
    /// ```
    /// # use colorwise::{Channels, Color, ColorError, ColorFormat};
    /// let lab = Channels { l: Some(1.0), a: Some(0.0), b: Some(0.0), ..Channels::default() };
    /// let dark = Color::with_format(lab, ColorFormat::Lab)?;
    /// assert_eq!(dark.to_hex(), "#040404");
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn with_format<I: Into<ColorInput>>(
        input: I,
        format: ColorFormat,
    ) -> Result<Self, ColorError> {
        let value = parse_format(&input.into(), Some(format))?;
        Ok(Self::from_rgba(value.to_rgba()?))
    }

    /// Create a new color from the RGBA hub.
    ///
    /// This constructor clamps the channels to their ranges, replaces
    /// not-a-number RGB channels with zero, and treats non-finite alpha as
    /// fully opaque. It is the documented permissive path into a color.
    pub fn from_rgba(rgba: Rgba) -> Self {
        fn channel(value: Float) -> Float {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, 255.0)
            }
        }

        Self {
            r: channel(rgba.r),
            g: channel(rgba.g),
            b: channel(rgba.b),
            a: if rgba.a.is_finite() {
                rgba.a.clamp(0.0, 1.0)
            } else {
                1.0
            },
        }
    }

    /// Create a new opaque color from 24-bit integer channels.
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as Float,
            g: g as Float,
            b: b as Float,
            a: 1.0,
        }
    }

    /// Create a new opaque color with uniformly distributed channels, using
    /// the thread-local random number generator.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Create a new opaque color with uniformly distributed channels, using
    /// the given random number generator.
    ///
    /// ```
    /// # use colorwise::Color;
    /// use rand::SeedableRng;
    ///
    /// let mut rng1 = rand::rngs::StdRng::seed_from_u64(665);
    /// let mut rng2 = rand::rngs::StdRng::seed_from_u64(665);
    /// assert_eq!(Color::random_with(&mut rng1), Color::random_with(&mut rng2));
    /// ```
    pub fn random_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(0.0..=255.0),
            g: rng.random_range(0.0..=255.0),
            b: rng.random_range(0.0..=255.0),
            a: 1.0,
        }
    }

    /// Create a new color from unit-range coordinates in the given RGB color
    /// space.
    ///
    /// If the coordinates fall outside the sRGB gamut, this constructor maps
    /// them into gamut by reducing chroma in Oklch, which preserves lightness
    /// and hue.
    pub fn from_space(space: ColorSpace, coordinates: [Float; 3], alpha: Float) -> Self {
        let srgb = convert(space, ColorSpace::Srgb, &coordinates);
        let srgb = if space.in_srgb_gamut(&coordinates) {
            clip(&srgb)
        } else {
            to_gamut(&to_polar(&srgb_to_oklab(&srgb), OK_ACHROMATIC))
        };

        Self::from_unit_rgb(srgb, alpha)
    }

    /// Create a new opaque color from Oklch coordinates, mapping them into
    /// the sRGB gamut if necessary.
    ///
    /// ```
    /// # use colorwise::Color;
    /// let green = Color::from_oklch_mapped(0.7, 0.4, 150.0);
    /// assert_eq!(green.to_hex(), "#00c248");
    /// ```
    pub fn from_oklch_mapped(l: Float, c: Float, h: Float) -> Self {
        Self::from_unit_rgb(to_gamut(&[l, c, h]), 1.0)
    }

    /// Create a new opaque color approximating a black body radiator at the
    /// given temperature in kelvin.
    pub fn from_temperature(kelvin: Float) -> Self {
        let [r, g, b] = crate::named::temperature_to_rgb(kelvin);
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color from the model with the given alpha, which
    /// overrides the model's own alpha.
    pub(crate) fn from_model<M: ColorModel>(model: &M, alpha: Float) -> Self {
        Self::from_rgba(Rgba {
            a: alpha,
            ..model.to_rgba()
        })
    }

    pub(crate) fn from_unit_rgb(rgb: [Float; 3], alpha: Float) -> Self {
        Self::from_rgba(Rgba {
            r: rgb[0] * 255.0,
            g: rgb[1] * 255.0,
            b: rgb[2] * 255.0,
            a: alpha,
        })
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the red, green, blue, and alpha channels at full precision.
    #[inline]
    pub const fn channels(&self) -> [Float; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Get the alpha channel.
    #[inline]
    pub const fn alpha(&self) -> Float {
        self.a
    }

    /// Replace the alpha channel. Alpha is clamped and not-a-number becomes
    /// fully opaque.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self::from_rgba(Rgba {
            a: alpha,
            ..self.hub()
        })
    }

    /// Get the RGBA hub at full precision.
    #[inline]
    pub(crate) const fn hub(&self) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: self.a,
        }
    }

    /// Get the unit-range sRGB coordinates.
    #[inline]
    pub(crate) fn to_unit_rgb(&self) -> [Float; 3] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0]
    }

    /// Convert this color to the given color model at full precision.
    ///
    /// ```
    /// # use colorwise::{Color, ColorError, Hsv};
    /// let yellow = Color::new("#ff0")?;
    /// assert_eq!(yellow.to_model::<Hsv>(), Hsv { h: 60.0, s: 100.0, v: 100.0 });
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn to_model<M: ColorModel>(&self) -> M {
        M::from_rgba(&self.hub())
    }

    /// Convert this color to a tagged value of the given format.
    pub fn to_value(&self, format: ColorFormat) -> ColorValue {
        ColorValue::from_rgba(format, &self.hub())
    }

    /// Convert this color to RGB with channels rounded to integers.
    pub fn to_rgb(&self) -> Rgb {
        Rgb {
            r: self.r.round(),
            g: self.g.round(),
            b: self.b.round(),
        }
    }

    /// Convert this color to RGBA with channels rounded to integers. Alpha
    /// retains full precision.
    pub fn to_rgba(&self) -> Rgba {
        Rgba {
            r: self.r.round(),
            g: self.g.round(),
            b: self.b.round(),
            a: self.a,
        }
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        self.to_model()
    }

    /// Convert this color to HSL with alpha.
    pub fn to_hsla(&self) -> Hsla {
        self.to_model()
    }

    /// Convert this color to HSV.
    pub fn to_hsv(&self) -> Hsv {
        self.to_model()
    }

    /// Convert this color to HSV with alpha.
    pub fn to_hsva(&self) -> Hsva {
        self.to_model()
    }

    /// Convert this color to HWB.
    pub fn to_hwb(&self) -> Hwb {
        self.to_model()
    }

    /// Convert this color to HWB with alpha.
    pub fn to_hwba(&self) -> Hwba {
        self.to_model()
    }

    /// Convert this color to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        self.to_model()
    }

    /// Convert this color to CIELAB.
    pub fn to_lab(&self) -> Lab {
        self.to_model()
    }

    /// Convert this color to CIELCh.
    pub fn to_lch(&self) -> Lch {
        self.to_model()
    }

    /// Convert this color to Oklab.
    pub fn to_oklab(&self) -> Oklab {
        self.to_model()
    }

    /// Convert this color to Oklch.
    pub fn to_oklch(&self) -> Oklch {
        self.to_model()
    }

    /// Convert this color to unit-range coordinates in the given RGB color
    /// space. The result is not clamped.
    pub fn to_space(&self, space: ColorSpace) -> [Float; 3] {
        convert(ColorSpace::Srgb, space, &self.to_unit_rgb())
    }

    /// Convert this color to 24-bit integer channels.
    pub fn to_24bit(&self) -> [u8; 3] {
        let Rgb { r, g, b } = self.to_rgb();
        [r as u8, g as u8, b as u8]
    }

    /// Determine the CSS name of this color, if it is opaque and has one.
    ///
    /// Where several names denote the same color, such as `aqua` and `cyan`,
    /// this method returns the alphabetically first one.
    pub fn to_name(&self) -> Option<&'static str> {
        if self.a < 1.0 {
            return None;
        }
        crate::named::find_name(self.to_24bit())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Format this color as a hashed hexadecimal string `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format_hex(&self.hub(), false)
    }

    /// Format this color as a hashed hexadecimal string `#rrggbbaa`.
    pub fn to_hex8(&self) -> String {
        format_hex(&self.hub(), true)
    }

    fn optional_alpha(&self) -> Option<Float> {
        if self.a < 1.0 {
            Some(self.a)
        } else {
            None
        }
    }

    fn percent(value: Float) -> String {
        format!("{}%", format_number(value, 3))
    }

    fn to_rgb_function(&self, name: &str, alpha: Option<Float>) -> String {
        let Rgb { r, g, b } = self.to_rgb();
        let channels = [r, g, b].map(|c| format_number(c, 0));
        format_function(name, &channels, alpha)
    }

    fn to_hue_function(&self, name: &str, [h, x, y]: [Float; 3], alpha: Option<Float>) -> String {
        let channels = [format_number(h, 3), Self::percent(x), Self::percent(y)];
        format_function(name, &channels, alpha)
    }

    /// Format this color with the CSS `rgb()` function, e.g., `rgb(255 0 0)`.
    /// Alpha is included only if the color is translucent.
    pub fn to_rgb_string(&self) -> String {
        self.to_rgb_function("rgb", self.optional_alpha())
    }

    /// Format this color with the CSS `rgba()` function, always including
    /// alpha.
    pub fn to_rgba_string(&self) -> String {
        self.to_rgb_function("rgba", Some(self.a))
    }

    /// Format this color with the CSS `hsl()` function, e.g., `hsl(0 100%
    /// 50%)`.
    pub fn to_hsl_string(&self) -> String {
        let Hsl { h, s, l } = self.to_hsl();
        self.to_hue_function("hsl", [h, s, l], self.optional_alpha())
    }

    /// Format this color with the `hsla()` function, always including alpha.
    pub fn to_hsla_string(&self) -> String {
        let Hsl { h, s, l } = self.to_hsl();
        self.to_hue_function("hsla", [h, s, l], Some(self.a))
    }

    /// Format this color with the non-standard `hsv()` function, adding
    /// alpha only for translucent colors.
    pub fn to_hsv_string(&self) -> String {
        let Hsv { h, s, v } = self.to_hsv();
        self.to_hue_function("hsv", [h, s, v], self.optional_alpha())
    }

    /// Format this color with the non-standard `hsva()` function, which
    /// always includes alpha.
    pub fn to_hsva_string(&self) -> String {
        let Hsv { h, s, v } = self.to_hsv();
        self.to_hue_function("hsva", [h, s, v], Some(self.a))
    }

    /// Format this color with the CSS `hwb()` function.
    pub fn to_hwb_string(&self) -> String {
        let Hwb { h, w, b } = self.to_hwb();
        self.to_hue_function("hwb", [h, w, b], self.optional_alpha())
    }

    /// Format this color with the `hwba()` function, which always includes
    /// alpha.
    pub fn to_hwba_string(&self) -> String {
        let Hwb { h, w, b } = self.to_hwb();
        self.to_hue_function("hwba", [h, w, b], Some(self.a))
    }

    /// Format this color with the `cmyk()` function, e.g., `cmyk(0% 100%
    /// 100% 0%)`.
    pub fn to_cmyk_string(&self) -> String {
        let Cmyk { c, m, y, k } = self.to_cmyk();
        let channels = [c, m, y, k].map(Self::percent);
        format_function("cmyk", &channels, self.optional_alpha())
    }

    /// Format this color with the CSS `lab()` function.
    pub fn to_lab_string(&self) -> String {
        let Lab { l, a, b } = self.to_lab();
        let channels = [l, a, b].map(|c| format_number(c, 3));
        format_function("lab", &channels, self.optional_alpha())
    }

    /// Format this color with the CSS `lch()` function.
    pub fn to_lch_string(&self) -> String {
        let Lch { l, c, h } = self.to_lch();
        let channels = [l, c, h].map(|c| format_number(c, 3));
        format_function("lch", &channels, self.optional_alpha())
    }

    /// Format this color with the CSS `oklab()` function, using six decimals.
    pub fn to_oklab_string(&self) -> String {
        let Oklab { l, a, b } = self.to_oklab();
        let channels = [l, a, b].map(|c| format_number(c, 6));
        format_function("oklab", &channels, self.optional_alpha())
    }

    /// Format this color with the CSS `oklch()` function, using six decimals.
    ///
    /// ```
    /// # use colorwise::{Color, ColorError};
    /// let red = Color::new("red")?;
    /// assert_eq!(red.to_oklch_string(), "oklch(0.627955 0.257683 29.23388)");
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn to_oklch_string(&self) -> String {
        let Oklch { l, c, h } = self.to_oklch();
        let channels = [l, c, h].map(|c| format_number(c, 6));
        format_function("oklch", &channels, self.optional_alpha())
    }

    /// Format this color with the CSS `color()` function for the given color
    /// space, e.g., `color(display-p3 0.917488 0.200287 0.138561)`.
    pub fn to_color_string(&self, space: ColorSpace) -> String {
        let coordinates = self.to_space(space);
        let mut channels = vec![space.css_name().to_owned()];
        channels.extend(coordinates.iter().map(|c| format_number(*c, 6)));
        format_function("color", &channels, self.optional_alpha())
    }

    /// Format this color in the given format.
    ///
    /// Hexadecimal formats produce hashed strings. All others produce CSS
    /// functions as described for the corresponding `to_<model>_string`
    /// method.
    pub fn to_string_as(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.to_hex(),
            ColorFormat::Hex8 => self.to_hex8(),
            ColorFormat::Rgb => self.to_rgb_string(),
            ColorFormat::Rgba => self.to_rgba_string(),
            ColorFormat::Hsl => self.to_hsl_string(),
            ColorFormat::Hsla => self.to_hsla_string(),
            ColorFormat::Hsv => self.to_hsv_string(),
            ColorFormat::Hsva => self.to_hsva_string(),
            ColorFormat::Hwb => self.to_hwb_string(),
            ColorFormat::Hwba => self.to_hwba_string(),
            ColorFormat::Cmyk => self.to_cmyk_string(),
            ColorFormat::Lab => self.to_lab_string(),
            ColorFormat::Oklab => self.to_oklab_string(),
            ColorFormat::Lch => self.to_lch_string(),
            ColorFormat::Oklch => self.to_oklch_string(),
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the WCAG 2 relative luminance of this color, ignoring alpha.
    pub fn luminance(&self) -> Float {
        to_relative_luminance(&self.to_unit_rgb())
    }

    /// Compute the perceived brightness of this color in `0..=255` with the
    /// YIQ weights.
    pub fn brightness(&self) -> Float {
        (299.0 * self.r + 587.0 * self.g + 114.0 * self.b) / 1000.0
    }

    /// Determine whether this color is light, i.e., has a perceived
    /// brightness of at least 128.
    pub fn is_light(&self) -> bool {
        128.0 <= self.brightness()
    }

    /// Determine whether this color is dark, i.e., not light.
    pub fn is_dark(&self) -> bool {
        !self.is_light()
    }

    /// Determine whether black text has more perceptual contrast than white
    /// text against a background with this color.
    ///
    /// ```
    /// # use colorwise::{Color, ColorError};
    /// let blue: Color = str::parse("#6872ff")?;
    /// assert!(!blue.use_black_text());
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn use_black_text(&self) -> bool {
        let luminance = to_contrast_luminance(&self.to_unit_rgb());
        -to_contrast(1.0, luminance) <= to_contrast(0.0, luminance)
    }

    /// Get the complementary color, i.e., the color with the opposite HSL hue.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn complement(&self) -> Self {
        let hsla = self.to_hsla();
        Self::from_rgba(
            Hsla {
                h: (hsla.h + 180.0) % 360.0,
                ..hsla
            }
            .to_rgba(),
        )
    }

    /// Invert the RGB channels of this color. Alpha remains unchanged.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn invert(&self) -> Self {
        Self {
            r: 255.0 - self.r,
            g: 255.0 - self.g,
            b: 255.0 - self.b,
            a: self.a,
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse a color with [`parse_css`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl From<Rgba> for Color {
    fn from(value: Rgba) -> Self {
        Color::from_rgba(value)
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_channels(&self.channels()).hash(state);
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        let (c1, c2) = (self.channels(), other.channels());
        c1 == c2 || to_eq_channels(&c1) == to_eq_channels(&c2)
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Color({}, {}, {}, {})",
            self.r, self.g, self.b, self.a
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color in hashed hexadecimal notation. Translucent colors
    /// include the alpha channel.
    ///
    /// ```
    /// # use colorwise::{Color, ColorError};
    /// let purple = Color::new("rebeccapurple")?;
    /// assert_eq!(format!("{}", purple), "#663399");
    /// assert_eq!(format!("{}", purple.with_alpha(0.5)), "#66339980");
    /// # Ok::<(), ColorError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a < 1.0 {
            f.write_str(&self.to_hex8())
        } else {
            f.write_str(&self.to_hex())
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}

// ====================================================================================================================

/// Parse the string into a color, failing on malformed or out-of-range
/// input.
///
/// This function recognizes hashed hexadecimal colors with 3, 4, 6, or 8
/// digits, the CSS named colors plus `transparent`, color temperature labels
/// such as `candlelight` or `blue sky`, and the color functions `rgb()`,
/// `rgba()`, `hsl()`, `hsla()`, `hsv()`, `hsva()`, `hwb()`, `hwba()`,
/// `cmyk()`, `device-cmyk()`, `lab()`, `lch()`, `oklab()`, `oklch()`, and
/// `color()`. Parsing is case-insensitive and ignores leading and trailing
/// white space.
///
/// Function arguments may be separated by commas or white space. Alpha is
/// either a trailing argument or follows a slash. Numbers may be percentages,
/// which are scaled to each channel's natural range, and hues may carry the
/// `deg`, `grad`, `rad`, or `turn` unit.
///
/// ```
/// # use colorwise::{parse_css, ColorError};
/// assert_eq!(parse_css("hsl(120deg 100% 25% / 50%)")?.to_hex8(), "#00800080");
/// assert_eq!(parse_css("RGB(0, 128, 0)")?.to_hex(), "#008000");
/// assert!(parse_css("rgb(256 0 0)").is_err());
/// # Ok::<(), ColorError>(())
/// ```
pub fn parse_css(text: &str) -> Result<Color, ColorError> {
    parse(text)
}

/// Parse the string into a color, returning `None` on malformed or
/// out-of-range input.
///
/// This function accepts the same syntax as [`parse_css`]. It suits
/// interactive callers, for whom invalid input is expected while the user is
/// still typing. It logs the reason for rejecting input at debug level.
pub fn parse_css_color_string(text: &str) -> Option<Color> {
    match parse(text) {
        Ok(color) => Some(color),
        Err(error) => {
            tracing::debug!(text, %error, "rejected color string");
            None
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_test {
    use super::Color;

    #[test]
    fn test_color_as_string() -> Result<(), serde_json::Error> {
        let purple = Color::from_24bit(0x66, 0x33, 0x99);
        assert_eq!(serde_json::to_string(&purple)?, r##""#663399""##);
        assert_eq!(
            serde_json::to_string(&purple.with_alpha(0.5))?,
            r##""#66339980""##
        );

        let parsed: Color = serde_json::from_str(r#""RebeccaPurple""#)?;
        assert_eq!(parsed, purple);

        let colors: Vec<Color> = serde_json::from_str(r##"["#f00", "hsl(240 100% 50%)"]"##)?;
        let hexes: Vec<String> = colors.iter().map(Color::to_hex).collect();
        assert_eq!(hexes, ["#ff0000", "#0000ff"]);

        assert!(serde_json::from_str::<Color>(r##""#+f+f+f""##).is_err());
        assert!(serde_json::from_str::<Color>(r#""rgb(256 0 0)""#).is_err());
        assert!(serde_json::from_str::<Color>("255").is_err());
        Ok(())
    }
}
