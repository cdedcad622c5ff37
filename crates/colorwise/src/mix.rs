//! Mixing, blending, and averaging colors.
//!
//! [`mix_colors`] combines any number of weighted colors, either additively
//! like light or subtractively like ink. [`blend`] composes two colors with a
//! blend mode, and [`average_colors`] computes the weighted mean with proper
//! handling of hues.

use crate::core::{
    circular_mean, is_achromatic, lerp, linear_rgb_to_rgb, normalize_hue, rgb_to_linear_rgb,
    shortest_hue_delta, Accumulator, LAB_ACHROMATIC, OK_ACHROMATIC,
};
use crate::error::{check_range, ColorError};
use crate::model::{Cmyk, Hsl, Hsla, Lab, Lch, Oklab, Oklch};
use crate::{Color, Float};

/// The kind of mixing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MixType {
    /// Mixing light.
    #[default]
    Additive,
    /// Mixing ink, which is only supported in CMYK.
    Subtractive,
}

impl MixType {
    /// Get this mixing type's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Subtractive => "subtractive",
        }
    }
}

impl std::str::FromStr for MixType {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "additive" => Ok(Self::Additive),
            "subtractive" => Ok(Self::Subtractive),
            _ => Err(ColorError::unknown_option("mix type", s)),
        }
    }
}

impl std::fmt::Display for MixType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The color model for mixing and averaging.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MixSpace {
    #[default]
    Rgb,
    LinearRgb,
    Hsl,
    Lab,
    Lch,
    Oklab,
    Oklch,
    Cmyk,
}

impl MixSpace {
    /// All mixing spaces.
    pub const ALL: [MixSpace; 8] = [
        Self::Rgb,
        Self::LinearRgb,
        Self::Hsl,
        Self::Lab,
        Self::Lch,
        Self::Oklab,
        Self::Oklch,
        Self::Cmyk,
    ];

    /// Get this mixing space's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::LinearRgb => "linear-rgb",
            Self::Hsl => "hsl",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
            Self::Cmyk => "cmyk",
        }
    }

    /// Get the index of the hue channel, if this space is polar.
    const fn hue_index(&self) -> Option<usize> {
        match self {
            Self::Hsl => Some(0),
            Self::Lch | Self::Oklch => Some(2),
            _ => None,
        }
    }

    /// Determine whether the hue of the given coordinates is powerless.
    fn is_achromatic(&self, coordinates: &[Float; 4]) -> bool {
        match self {
            Self::Hsl => coordinates[1] <= 0.0,
            Self::Lch => is_achromatic(coordinates[1], LAB_ACHROMATIC),
            Self::Oklch => is_achromatic(coordinates[1], OK_ACHROMATIC),
            _ => false,
        }
    }

    /// Convert the color to this space. Spaces with three channels leave the
    /// fourth channel zero.
    fn coordinates(&self, color: &Color) -> [Float; 4] {
        match self {
            Self::Rgb => {
                let [r, g, b, _] = color.channels();
                [r, g, b, 0.0]
            }
            Self::LinearRgb => {
                let [r, g, b] = rgb_to_linear_rgb(&color.to_unit_rgb());
                [r, g, b, 0.0]
            }
            Self::Hsl => {
                let Hsl { h, s, l } = color.to_hsl();
                [h, s, l, 0.0]
            }
            Self::Lab => {
                let Lab { l, a, b } = color.to_lab();
                [l, a, b, 0.0]
            }
            Self::Lch => {
                let Lch { l, c, h } = color.to_lch();
                [l, c, h, 0.0]
            }
            Self::Oklab => {
                let Oklab { l, a, b } = color.to_oklab();
                [l, a, b, 0.0]
            }
            Self::Oklch => {
                let Oklch { l, c, h } = color.to_oklch();
                [l, c, h, 0.0]
            }
            Self::Cmyk => {
                let Cmyk { c, m, y, k } = color.to_cmyk();
                [c / 100.0, m / 100.0, y / 100.0, k / 100.0]
            }
        }
    }

    /// Convert the coordinates in this space back to a color, clamping them
    /// to their ranges.
    fn color(&self, coordinates: &[Float; 4], alpha: Float) -> Color {
        let [x, y, z, w] = *coordinates;
        match self {
            Self::Rgb => Color::from_rgba(crate::Rgba {
                r: x,
                g: y,
                b: z,
                a: alpha,
            }),
            Self::LinearRgb => Color::from_unit_rgb(
                linear_rgb_to_rgb(&[x.clamp(0.0, 1.0), y.clamp(0.0, 1.0), z.clamp(0.0, 1.0)]),
                alpha,
            ),
            Self::Hsl => Color::from_model(
                &Hsla {
                    h: normalize_hue(x),
                    s: y.clamp(0.0, 100.0),
                    l: z.clamp(0.0, 100.0),
                    a: alpha,
                },
                alpha,
            ),
            Self::Lab => Color::from_model(
                &Lab {
                    l: x.clamp(0.0, 100.0),
                    a: y,
                    b: z,
                },
                alpha,
            ),
            Self::Lch => Color::from_model(
                &Lch {
                    l: x.clamp(0.0, 100.0),
                    c: y.max(0.0),
                    h: normalize_hue(z),
                },
                alpha,
            ),
            Self::Oklab => Color::from_model(
                &Oklab {
                    l: x.clamp(0.0, 1.0),
                    a: y,
                    b: z,
                },
                alpha,
            ),
            Self::Oklch => Color::from_model(
                &Oklch {
                    l: x.clamp(0.0, 1.0),
                    c: y.max(0.0),
                    h: normalize_hue(z),
                },
                alpha,
            ),
            Self::Cmyk => Color::from_model(
                &Cmyk {
                    c: 100.0 * x.clamp(0.0, 1.0),
                    m: 100.0 * y.clamp(0.0, 1.0),
                    y: 100.0 * z.clamp(0.0, 1.0),
                    k: 100.0 * w.clamp(0.0, 1.0),
                },
                alpha,
            ),
        }
    }
}

impl std::str::FromStr for MixSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        match name.as_str() {
            "linearrgb" | "linear-srgb" => Ok(Self::LinearRgb),
            _ => Self::ALL
                .iter()
                .find(|space| space.name() == name)
                .copied()
                .ok_or_else(|| ColorError::unknown_option("mixing space", s)),
        }
    }
}

impl std::fmt::Display for MixSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The options for [`mix_colors`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MixOptions {
    /// The kind of mixing, which defaults to additive.
    pub mix_type: MixType,
    /// The color model, which defaults to RGB.
    pub space: MixSpace,
    /// The weights, one per color. They default to 1 for every color.
    pub weights: Option<Vec<Float>>,
}

/// The options for [`average_colors`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct AverageOptions {
    /// The color model, which defaults to Oklch.
    pub space: MixSpace,
    /// The weights, one per color. They default to 1 for every color.
    pub weights: Option<Vec<Float>>,
}

impl Default for AverageOptions {
    fn default() -> Self {
        Self {
            space: MixSpace::Oklch,
            weights: None,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Resolve the optional weights for the given number of colors.
///
/// Missing weights are 1 each. Weights must be non-negative and match the
/// colors in number. If they sum to zero, they are replaced with equal
/// weights.
fn resolve_weights(
    operation: &'static str,
    count: usize,
    weights: Option<&[Float]>,
) -> Result<Vec<Float>, ColorError> {
    if count == 0 {
        return Err(ColorError::TooFewColors {
            operation,
            expected: 1,
            actual: 0,
        });
    }

    let Some(weights) = weights else {
        return Ok(vec![1.0; count]);
    };

    if weights.len() != count {
        return Err(ColorError::WeightCount {
            expected: count,
            actual: weights.len(),
        });
    }

    let mut total = Accumulator::default();
    for weight in weights {
        check_range("weight", *weight, 0.0, Float::MAX)?;
        total += *weight;
    }

    if total.total() == 0.0 {
        tracing::debug!(operation, count, "weights sum to zero, using equal weights");
        return Ok(vec![1.0; count]);
    }

    Ok(weights.to_vec())
}

/// Scale the weights so that they sum to one.
fn normalize(weights: &[Float]) -> Vec<Float> {
    let mut total = Accumulator::default();
    for weight in weights {
        total += *weight;
    }
    let total = total.total();
    weights.iter().map(|w| w / total).collect()
}

/// Compute the weighted sum of the channels and the weighted mean of alpha.
fn weighted_sum(space: MixSpace, colors: &[Color], weights: &[Float]) -> Color {
    let alpha_weights = normalize(weights);
    let mut sums: [Accumulator; 4] = Default::default();
    let mut alpha = Accumulator::default();

    for ((color, weight), alpha_weight) in colors.iter().zip(weights).zip(&alpha_weights) {
        let coordinates = space.coordinates(color);
        for (sum, value) in sums.iter_mut().zip(coordinates) {
            *sum += weight * value;
        }
        alpha += alpha_weight * color.alpha();
    }

    space.color(&sums.map(|sum| sum.total()), alpha.total())
}

/// Compute the weighted mean of the channels, using the circular mean for
/// hues. Achromatic colors do not contribute to the hue, unless all colors
/// are achromatic.
fn weighted_mean(space: MixSpace, colors: &[Color], weights: &[Float]) -> Color {
    let weights = normalize(weights);
    let coordinates: Vec<[Float; 4]> = colors.iter().map(|c| space.coordinates(c)).collect();

    let mut means: [Float; 4] = [0.0; 4];
    for (index, mean) in means.iter_mut().enumerate() {
        let mut sum = Accumulator::default();
        for (values, weight) in coordinates.iter().zip(&weights) {
            sum += weight * values[index];
        }
        *mean = sum.total();
    }

    if let Some(index) = space.hue_index() {
        let all_achromatic = coordinates.iter().all(|c| space.is_achromatic(c));
        means[index] = circular_mean(
            coordinates
                .iter()
                .zip(&weights)
                .filter(|(values, _)| all_achromatic || !space.is_achromatic(values))
                .map(|(values, weight)| (values[index], *weight)),
        );
    }

    let mut alpha = Accumulator::default();
    for (color, weight) in colors.iter().zip(&weights) {
        alpha += weight * color.alpha();
    }

    space.color(&means, alpha.total())
}

/// Compute the subtractive mix `1 - Π(1 - cᵢ)^wᵢ` per CMYK channel with
/// normalized weights.
fn subtractive_mix(colors: &[Color], weights: &[Float]) -> Color {
    let weights = normalize(weights);
    let mut products: [Float; 4] = [1.0; 4];
    let mut alpha = Accumulator::default();

    for (color, weight) in colors.iter().zip(&weights) {
        let coordinates = MixSpace::Cmyk.coordinates(color);
        for (product, value) in products.iter_mut().zip(coordinates) {
            *product *= (1.0 - value).max(0.0).powf(*weight);
        }
        alpha += weight * color.alpha();
    }

    MixSpace::Cmyk.color(&products.map(|p| 1.0 - p), alpha.total())
}

/// Mix the colors.
///
/// Additive mixing in RGB and linear RGB sums up the weighted channels, just
/// like light adds up, and then clamps the result. Additive mixing in the
/// other spaces, except CMYK, computes the weighted mean with the circular
/// mean for hues. Subtractive mixing composes the complements of CMYK
/// channels and is supported in CMYK only.
///
/// ```
/// # use colorwise::{Color, ColorError};
/// # use colorwise::mix::{mix_colors, MixOptions};
/// let colors = ["#ff0000", "#00ff00", "#0000ff"]
///     .map(|s| Color::new(s))
///     .into_iter()
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(mix_colors(&colors, &MixOptions::default())?.to_hex(), "#ffffff");
/// # Ok::<(), ColorError>(())
/// ```
pub fn mix_colors(colors: &[Color], options: &MixOptions) -> Result<Color, ColorError> {
    let weights = resolve_weights("mixing", colors.len(), options.weights.as_deref())?;

    match (options.mix_type, options.space) {
        (MixType::Additive, MixSpace::Rgb | MixSpace::LinearRgb) => {
            Ok(weighted_sum(options.space, colors, &weights))
        }
        (MixType::Additive, MixSpace::Cmyk) => Err(ColorError::UnsupportedSpace {
            operation: "additive mixing",
            space: options.space.to_string(),
        }),
        (MixType::Additive, space) => Ok(weighted_mean(space, colors, &weights)),
        (MixType::Subtractive, MixSpace::Cmyk) => Ok(subtractive_mix(colors, &weights)),
        (MixType::Subtractive, space) => Err(ColorError::UnsupportedSpace {
            operation: "subtractive mixing",
            space: space.to_string(),
        }),
    }
}

/// Average the colors.
///
/// Linear channels average arithmetically, whereas hues average as the angle
/// of the weighted sum of their unit vectors. That way, the average of 350º
/// and 10º is 0º and not 180º.
pub fn average_colors(colors: &[Color], options: &AverageOptions) -> Result<Color, ColorError> {
    let weights = resolve_weights("averaging", colors.len(), options.weights.as_deref())?;
    Ok(weighted_mean(options.space, colors, &weights))
}

// ====================================================================================================================

/// The blend mode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
}

impl BlendMode {
    /// Get this blend mode's kebab-case name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
        }
    }

    /// Apply this blend mode to unit-range base and overlay values.
    fn apply(&self, base: Float, overlay: Float) -> Float {
        match self {
            Self::Normal => overlay,
            Self::Multiply => base * overlay,
            Self::Screen => 1.0 - (1.0 - base) * (1.0 - overlay),
            Self::Overlay => {
                if base < 0.5 {
                    2.0 * base * overlay
                } else {
                    1.0 - 2.0 * (1.0 - base) * (1.0 - overlay)
                }
            }
        }
    }
}

impl std::str::FromStr for BlendMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "multiply" => Ok(Self::Multiply),
            "screen" => Ok(Self::Screen),
            "overlay" => Ok(Self::Overlay),
            _ => Err(ColorError::unknown_option("blend mode", s)),
        }
    }
}

impl std::fmt::Display for BlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The color model for blending.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendSpace {
    /// Blend each RGB channel.
    #[default]
    Rgb,
    /// Blend saturation and lightness, while the hue travels along the
    /// shorter arc.
    Hsl,
}

impl BlendSpace {
    /// Get this blending space's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

impl std::str::FromStr for BlendSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            _ => Err(ColorError::unknown_option("blending space", s)),
        }
    }
}

impl std::fmt::Display for BlendSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The options for [`blend`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlendOptions {
    /// The blend mode, which defaults to normal.
    pub mode: BlendMode,
    /// The ratio between base and blended color, which defaults to 0.5. It is
    /// clamped to `0..=1`.
    pub ratio: Float,
    /// The color model, which defaults to RGB.
    pub space: BlendSpace,
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self {
            mode: BlendMode::Normal,
            ratio: 0.5,
            space: BlendSpace::Rgb,
        }
    }
}

/// Blend the overlay into the base color.
///
/// ```
/// # use colorwise::{Color, ColorError};
/// # use colorwise::mix::{blend, BlendOptions};
/// let red = Color::new("#f00")?;
/// let blue = Color::new("#00f")?;
/// assert_eq!(blend(&red, &blue, &BlendOptions::default()).to_hex(), "#800080");
/// # Ok::<(), ColorError>(())
/// ```
pub fn blend(base: &Color, overlay: &Color, options: &BlendOptions) -> Color {
    let ratio = if options.ratio.is_nan() {
        0.0
    } else {
        options.ratio.clamp(0.0, 1.0)
    };
    let mode = options.mode;
    let alpha = lerp(base.alpha(), overlay.alpha(), ratio);

    match options.space {
        BlendSpace::Rgb => {
            let b = base.to_unit_rgb();
            let o = overlay.to_unit_rgb();
            let rgb = std::array::from_fn(|i| lerp(b[i], mode.apply(b[i], o[i]), ratio));
            Color::from_unit_rgb(rgb, alpha)
        }
        BlendSpace::Hsl => {
            let b = base.to_hsl();
            let o = overlay.to_hsl();
            let s = mode.apply(b.s / 100.0, o.s / 100.0);
            let l = mode.apply(b.l / 100.0, o.l / 100.0);
            Color::from_model(
                &Hsl {
                    h: normalize_hue(b.h + ratio * shortest_hue_delta(b.h, o.h)),
                    s: 100.0 * lerp(b.s / 100.0, s, ratio),
                    l: 100.0 * lerp(b.l / 100.0, l, ratio),
                },
                alpha,
            )
        }
    }
}

#[cfg(test)]
mod test {
    use super::{
        average_colors, blend, mix_colors, AverageOptions, BlendMode, BlendOptions, BlendSpace,
        MixOptions, MixSpace, MixType,
    };
    use crate::{assert_close_enough, Color, ColorError, Hsl};

    fn colors(hexes: &[&str]) -> Result<Vec<Color>, ColorError> {
        hexes.iter().map(|hex| Color::new(*hex)).collect()
    }

    #[test]
    fn test_additive() -> Result<(), ColorError> {
        let rgb = colors(&["#ff0000", "#00ff00", "#0000ff"])?;
        assert_eq!(
            mix_colors(&rgb, &MixOptions::default())?.to_hex(),
            "#ffffff"
        );

        let red_blue = colors(&["#ff0000", "#0000ff"])?;
        let halves = MixOptions {
            weights: Some(vec![0.5, 0.5]),
            ..MixOptions::default()
        };
        assert_eq!(mix_colors(&red_blue, &halves)?.to_hex(), "#800080");

        let linear = MixOptions {
            space: MixSpace::LinearRgb,
            ..halves.clone()
        };
        assert_eq!(mix_colors(&red_blue, &linear)?.to_hex(), "#bc00bc");

        let zero = MixOptions {
            weights: Some(vec![0.0, 0.0]),
            ..MixOptions::default()
        };
        assert_eq!(mix_colors(&red_blue, &zero)?.to_hex(), "#ff00ff");
        Ok(())
    }

    #[test]
    fn test_hue_wraparound() -> Result<(), ColorError> {
        let hues = [
            Color::new(Hsl {
                h: 350.0,
                s: 100.0,
                l: 50.0,
            })?,
            Color::new(Hsl {
                h: 10.0,
                s: 100.0,
                l: 50.0,
            })?,
        ];
        let options = MixOptions {
            space: MixSpace::Hsl,
            ..MixOptions::default()
        };
        let mixed = mix_colors(&hues, &options)?;
        let hue = mixed.to_hsl().h;
        assert!(hue < 0.5 || hue > 359.5, "hue is {}", hue);
        assert_eq!(mixed.to_hex(), "#ff0000");
        Ok(())
    }

    #[test]
    fn test_subtractive() -> Result<(), ColorError> {
        let inks = colors(&["#00ffff", "#ffff00"])?;
        let options = MixOptions {
            mix_type: MixType::Subtractive,
            space: MixSpace::Cmyk,
            weights: None,
        };
        assert_eq!(mix_colors(&inks, &options)?.to_hex(), "#00ff00");

        let wrong = MixOptions {
            mix_type: MixType::Subtractive,
            ..MixOptions::default()
        };
        assert_eq!(
            mix_colors(&inks, &wrong),
            Err(ColorError::UnsupportedSpace {
                operation: "subtractive mixing",
                space: "rgb".to_string()
            })
        );
        Ok(())
    }

    #[test]
    fn test_errors() -> Result<(), ColorError> {
        assert!(matches!(
            mix_colors(&[], &MixOptions::default()),
            Err(ColorError::TooFewColors { actual: 0, .. })
        ));

        let pair = colors(&["#000", "#fff"])?;
        let options = MixOptions {
            weights: Some(vec![1.0]),
            ..MixOptions::default()
        };
        assert_eq!(
            mix_colors(&pair, &options),
            Err(ColorError::WeightCount {
                expected: 2,
                actual: 1
            })
        );

        let negative = MixOptions {
            weights: Some(vec![1.0, -1.0]),
            ..MixOptions::default()
        };
        assert!(matches!(
            mix_colors(&pair, &negative),
            Err(ColorError::OutOfRange {
                channel: "weight",
                ..
            })
        ));

        assert_eq!("Linear-RGB".parse::<MixSpace>()?, MixSpace::LinearRgb);
        assert_eq!("oklch".parse::<MixSpace>()?, MixSpace::Oklch);
        assert!("xyz".parse::<MixSpace>().is_err());
        assert_eq!("SUBTRACTIVE".parse::<MixType>()?, MixType::Subtractive);
        Ok(())
    }

    #[test]
    fn test_average() -> Result<(), ColorError> {
        let pair = colors(&["#000000", "#ffffff"])?;
        let rgb = AverageOptions {
            space: MixSpace::Rgb,
            weights: None,
        };
        assert_eq!(average_colors(&pair, &rgb)?.to_hex(), "#808080");

        let weighted = AverageOptions {
            weights: Some(vec![3.0, 1.0]),
            ..rgb
        };
        assert_eq!(average_colors(&pair, &weighted)?.to_hex(), "#404040");

        // Gray has no hue and hence does not pull red's hue towards zero
        let gray_red = colors(&["#808080", "#ff0000"])?;
        let lch = AverageOptions {
            space: MixSpace::Lch,
            weights: None,
        };
        let average = average_colors(&gray_red, &lch)?;
        assert_close_enough!(average.to_lch().h, 40.0, 0.01);
        assert_eq!(average.to_hex(), "#ca6048");

        let translucent = [Color::new("#000")?.with_alpha(0.0), Color::new("#000")?];
        assert_eq!(
            average_colors(&translucent, &AverageOptions::default())?.alpha(),
            0.5
        );
        Ok(())
    }

    #[test]
    fn test_blend() -> Result<(), ColorError> {
        let [red, blue, white, black] = [
            Color::new("#f00")?,
            Color::new("#00f")?,
            Color::new("#fff")?,
            Color::new("#000")?,
        ];
        let defaults = BlendOptions::default();
        assert_eq!(blend(&red, &blue, &defaults).to_hex(), "#800080");

        let full = |mode| BlendOptions {
            mode,
            ratio: 1.0,
            space: BlendSpace::Rgb,
        };
        assert_eq!(blend(&white, &red, &full(BlendMode::Multiply)), red);
        assert_eq!(blend(&black, &red, &full(BlendMode::Screen)), red);
        assert_eq!(
            blend(&red, &Color::new("#808080")?, &full(BlendMode::Overlay)),
            red
        );
        assert_eq!(blend(&red, &blue, &full(BlendMode::Normal)), blue);

        let clamped = BlendOptions {
            ratio: 2.0,
            ..defaults
        };
        assert_eq!(blend(&red, &blue, &clamped), blue);

        let hsl = BlendOptions {
            space: BlendSpace::Hsl,
            ..defaults
        };
        assert_eq!(blend(&red, &blue, &hsl).to_hex(), "#ff00ff");
        assert_eq!("Overlay".parse::<BlendMode>()?, BlendMode::Overlay);
        for space in [BlendSpace::Rgb, BlendSpace::Hsl] {
            assert_eq!(space.to_string().parse::<BlendSpace>()?, space);
        }
        assert_eq!(BlendSpace::Hsl.name(), "hsl");
        Ok(())
    }
}
