//! Multi-stop gradients.
//!
//! [`create_gradient`] samples equally spaced, optionally eased positions
//! along the track through two or more anchor colors. The track either
//! consists of straight segments between consecutive anchors or is a single
//! Bézier curve using all anchors as control points. It runs through one of
//! the [`GradientSpace`]s, with polar spaces honoring the
//! [`HueInterpolation`] strategy.
//!
//! ```
//! # use colorwise::{Color, ColorError};
//! # use colorwise::gradient::{create_gradient, GradientOptions, GradientSpace, HueInterpolation};
//! let red = Color::new("#f00")?;
//! let blue = Color::new("#00f")?;
//!
//! let options = GradientOptions {
//!     stops: 3,
//!     space: GradientSpace::Hsl,
//!     hue_interpolation: HueInterpolation::Longest,
//!     ..GradientOptions::default()
//! };
//! let gradient = create_gradient(&[red, blue], &options)?;
//! assert_eq!(gradient[1].to_hex(), "#00ff00");
//! # Ok::<(), ColorError>(())
//! ```

use crate::core::{
    is_achromatic, lerp, normalize_hue, shortest_hue_delta, LAB_ACHROMATIC, OK_ACHROMATIC,
};
use crate::error::ColorError;
use crate::model::{Hsla, Hsva, Lch, Oklab, Oklch};
use crate::{Color, Float, Rgba};

/// The threshold for treating HSL or HSV saturation in percent as gray.
const SATURATION_ACHROMATIC: Float = 1e-4;

/// The shape of the track through the anchors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Straight segments between consecutive anchors.
    #[default]
    Linear,
    /// One Bézier curve with all anchors as control points. Only the first
    /// and last anchor lie on the curve.
    Bezier,
}

impl Interpolation {
    /// Get this interpolation's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Bezier => "bezier",
        }
    }
}

impl std::str::FromStr for Interpolation {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "bezier" => Ok(Self::Bezier),
            _ => Err(ColorError::unknown_option("interpolation", s)),
        }
    }
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The easing function applied to equally spaced positions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Get this easing function's kebab-case name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }

    /// Ease the position in `0..=1`. Both ends are fixed points.
    pub fn apply(&self, position: Float) -> Float {
        match self {
            Self::Linear => position,
            Self::EaseIn => position * position,
            Self::EaseOut => {
                let rest = 1.0 - position;
                1.0 - rest * rest
            }
            Self::EaseInOut => {
                if position < 0.5 {
                    4.0 * position * position * position
                } else {
                    let rest = 2.0 - 2.0 * position;
                    1.0 - rest * rest * rest / 2.0
                }
            }
        }
    }
}

impl std::str::FromStr for Easing {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "ease-in" | "easein" => Ok(Self::EaseIn),
            "ease-out" | "easeout" => Ok(Self::EaseOut),
            "ease-in-out" | "easeinout" => Ok(Self::EaseInOut),
            _ => Err(ColorError::unknown_option("easing", s)),
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The color model for interpolating between anchors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientSpace {
    Rgb,
    Hsl,
    Hsv,
    Lch,
    Oklab,
    #[default]
    Oklch,
}

impl GradientSpace {
    /// Get this space's lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Lch => "lch",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
        }
    }

    /// Determine whether this space has a hue coordinate.
    pub const fn is_polar(&self) -> bool {
        self.hue_index().is_some()
    }

    /// Get the index of the hue coordinate. Chroma or saturation always has
    /// index 1.
    const fn hue_index(&self) -> Option<usize> {
        match self {
            Self::Hsl | Self::Hsv => Some(0),
            Self::Lch | Self::Oklch => Some(2),
            Self::Rgb | Self::Oklab => None,
        }
    }

    fn is_achromatic(&self, coordinates: &[Float; 4]) -> bool {
        match self {
            Self::Hsl | Self::Hsv => is_achromatic(coordinates[1], SATURATION_ACHROMATIC),
            Self::Lch => is_achromatic(coordinates[1], LAB_ACHROMATIC),
            Self::Oklch => is_achromatic(coordinates[1], OK_ACHROMATIC),
            Self::Rgb | Self::Oklab => false,
        }
    }

    /// Get the color's coordinates in this space, with alpha as fourth
    /// coordinate.
    fn coordinates(&self, color: &Color) -> [Float; 4] {
        let alpha = color.alpha();
        match self {
            Self::Rgb => color.channels(),
            Self::Hsl => {
                let Hsla { h, s, l, .. } = color.to_hsla();
                [h, s, l, alpha]
            }
            Self::Hsv => {
                let Hsva { h, s, v, .. } = color.to_hsva();
                [h, s, v, alpha]
            }
            Self::Lch => {
                let Lch { l, c, h } = color.to_lch();
                [l, c, h, alpha]
            }
            Self::Oklab => {
                let Oklab { l, a, b } = color.to_oklab();
                [l, a, b, alpha]
            }
            Self::Oklch => {
                let Oklch { l, c, h } = color.to_oklch();
                [l, c, h, alpha]
            }
        }
    }

    /// Clamp the coordinates to this space's range. Hues are left alone.
    #[must_use = "method returns new color coordinates and does not mutate original values"]
    fn clamp(&self, coordinates: &[Float; 4]) -> [Float; 4] {
        let [x, y, z, alpha] = *coordinates;
        match self {
            Self::Rgb => [
                x.clamp(0.0, 255.0),
                y.clamp(0.0, 255.0),
                z.clamp(0.0, 255.0),
                alpha,
            ],
            Self::Hsl | Self::Hsv => [x, y.clamp(0.0, 100.0), z.clamp(0.0, 100.0), alpha],
            Self::Lch => [x.clamp(0.0, 100.0), y.clamp(0.0, 150.0), z, alpha],
            Self::Oklab => [x.clamp(0.0, 1.0), y, z, alpha],
            Self::Oklch => [x.clamp(0.0, 1.0), y.clamp(0.0, 0.5), z, alpha],
        }
    }

    fn color(&self, coordinates: &[Float; 4]) -> Color {
        let [x, y, z, a] = *coordinates;
        match self {
            Self::Rgb => Color::from_rgba(Rgba {
                r: x,
                g: y,
                b: z,
                a,
            }),
            Self::Hsl => Color::from_model(
                &Hsla {
                    h: normalize_hue(x),
                    s: y,
                    l: z,
                    a,
                },
                a,
            ),
            Self::Hsv => Color::from_model(
                &Hsva {
                    h: normalize_hue(x),
                    s: y,
                    v: z,
                    a,
                },
                a,
            ),
            Self::Lch => Color::from_model(
                &Lch {
                    l: x,
                    c: y.max(0.0),
                    h: normalize_hue(z),
                },
                a,
            ),
            Self::Oklab => Color::from_model(&Oklab { l: x, a: y, b: z }, a),
            Self::Oklch => Color::from_model(
                &Oklch {
                    l: x,
                    c: y.max(0.0),
                    h: normalize_hue(z),
                },
                a,
            ),
        }
    }
}

impl std::str::FromStr for GradientSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            "hsv" => Ok(Self::Hsv),
            "lch" => Ok(Self::Lch),
            "oklab" => Ok(Self::Oklab),
            "oklch" => Ok(Self::Oklch),
            _ => Err(ColorError::unknown_option("gradient space", s)),
        }
    }
}

impl std::fmt::Display for GradientSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A choice of strategy for interpolating hues.
///
/// Since hues are angles, the same perceptual hue has an infinite number of
/// representations modulo 360 and there are two arcs between any two hues.
/// Consistent with [CSS Color 4](https://www.w3.org/TR/css-color-4/#hue-interpolation),
/// [`HueInterpolation::Shortest`] and [`HueInterpolation::Longest`] pick the
/// arc by its length, [`HueInterpolation::Increasing`] and
/// [`HueInterpolation::Decreasing`] by its direction. Each anchor's hue is
/// shifted by multiples of 360 relative to the previous anchor, so that the
/// hue track stays continuous across all segments.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HueInterpolation {
    /// Interpolate the cartesian projection of chroma and hue, which cuts
    /// through the color wheel instead of following its circumference.
    Cartesian,
    /// Take the shorter arc between two hues.
    #[default]
    Shortest,
    /// Take the longer arc between two hues.
    Longest,
    /// Keep increasing hue angles.
    Increasing,
    /// Keep decreasing hue angles.
    Decreasing,
    /// Interpolate the hue angles as numbers.
    Raw,
}

impl HueInterpolation {
    /// Get this strategy's name, e.g., `"shortest"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cartesian => "cartesian",
            Self::Shortest => "shortest",
            Self::Longest => "longest",
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Raw => "raw",
        }
    }
}

impl std::str::FromStr for HueInterpolation {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cartesian" => Ok(Self::Cartesian),
            "shortest" | "shorter" => Ok(Self::Shortest),
            "longest" | "longer" => Ok(Self::Longest),
            "increasing" => Ok(Self::Increasing),
            "decreasing" => Ok(Self::Decreasing),
            "raw" => Ok(Self::Raw),
            _ => Err(ColorError::unknown_option("hue interpolation", s)),
        }
    }
}

impl std::fmt::Display for HueInterpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Determine the signed distance from one hue to the next.
///
/// Identical hues stay identical for all strategies. Otherwise, a gray anchor
/// that borrows its neighbor's hue would trigger a full sweep around the
/// color wheel.
fn hue_delta(strategy: HueInterpolation, from: Float, to: Float) -> Float {
    let delta = normalize_hue(to - from);
    match strategy {
        HueInterpolation::Shortest => shortest_hue_delta(from, to),
        HueInterpolation::Longest => {
            if delta == 0.0 || 180.0 <= delta {
                delta
            } else {
                delta - 360.0
            }
        }
        HueInterpolation::Increasing => delta,
        HueInterpolation::Decreasing => {
            if delta == 0.0 {
                0.0
            } else {
                delta - 360.0
            }
        }
        HueInterpolation::Cartesian | HueInterpolation::Raw => to - from,
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The options for creating a gradient.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GradientOptions {
    /// The number of colors, which defaults to 5 and is at least 2.
    pub stops: usize,
    /// The shape of the track, which defaults to straight segments.
    pub interpolation: Interpolation,
    /// The easing of positions, which defaults to none.
    pub easing: Easing,
    /// The interpolation space, which defaults to Oklch.
    pub space: GradientSpace,
    /// The hue interpolation strategy for polar spaces, which defaults to
    /// the shorter arc.
    pub hue_interpolation: HueInterpolation,
    /// Whether to clamp interpolated coordinates to the space's range, which
    /// defaults to true.
    pub clamp_to_gamut: bool,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            stops: 5,
            interpolation: Interpolation::Linear,
            easing: Easing::Linear,
            space: GradientSpace::Oklch,
            hue_interpolation: HueInterpolation::Shortest,
            clamp_to_gamut: true,
        }
    }
}

/// Let achromatic anchors borrow the hue of the nearest chromatic anchor,
/// preferring the earlier one on ties.
fn borrow_hues(space: GradientSpace, hue: usize, points: &mut [[Float; 4]]) {
    let chromatic: Vec<bool> = points.iter().map(|p| !space.is_achromatic(p)).collect();
    if !chromatic.contains(&true) {
        return;
    }

    let count = points.len();
    for index in 0..count {
        if chromatic[index] {
            continue;
        }

        let neighbor = (1..count).find_map(|distance| {
            let before = index
                .checked_sub(distance)
                .filter(|&other| chromatic[other]);
            let after = Some(index + distance).filter(|&other| other < count && chromatic[other]);
            before.or(after)
        });

        if let Some(neighbor) = neighbor {
            points[index][hue] = points[neighbor][hue];
        }
    }
}

/// Convert anchor colors into interpolation-ready coordinates.
///
/// Hues are either unwound into a continuous track or, for the cartesian
/// strategy, replaced by the projection of chroma and hue onto the plane.
fn prepare(anchors: &[Color], options: &GradientOptions) -> Vec<[Float; 4]> {
    let space = options.space;
    let mut points: Vec<[Float; 4]> = anchors.iter().map(|c| space.coordinates(c)).collect();

    let Some(hue) = space.hue_index() else {
        return points;
    };

    borrow_hues(space, hue, &mut points);

    if options.hue_interpolation == HueInterpolation::Cartesian {
        for point in points.iter_mut() {
            let (chroma, radians) = (point[1], point[hue].to_radians());
            point[1] = chroma * radians.cos();
            point[hue] = chroma * radians.sin();
        }
    } else {
        for index in 1..points.len() {
            let previous = points[index - 1][hue];
            let delta = hue_delta(options.hue_interpolation, previous, points[index][hue]);
            points[index][hue] = previous + delta;
        }
    }

    points
}

/// Undo the cartesian projection.
fn from_cartesian(hue: usize, point: &[Float; 4]) -> [Float; 4] {
    let (x, y) = (point[1], point[hue]);
    let chroma = x.hypot(y);

    let mut result = *point;
    result[1] = chroma;
    result[hue] = if chroma < 1e-9 {
        0.0
    } else {
        normalize_hue(y.atan2(x).to_degrees())
    };
    result
}

/// Interpolate between the prepared coordinates.
#[must_use = "function returns new color coordinates and does not mutate original values"]
fn interpolate(fraction: Float, point1: &[Float; 4], point2: &[Float; 4]) -> [Float; 4] {
    std::array::from_fn(|index| lerp(point1[index], point2[index], fraction))
}

/// Evaluate the Bézier curve with the given control points.
fn de_casteljau(points: &[[Float; 4]], fraction: Float) -> [Float; 4] {
    let mut scratch = points.to_vec();
    for level in (1..scratch.len()).rev() {
        for index in 0..level {
            scratch[index] = interpolate(fraction, &scratch[index], &scratch[index + 1]);
        }
    }
    scratch.first().copied().unwrap_or_default()
}

/// Create a gradient through the anchors.
///
/// This function returns `options.stops` colors, with the first and last
/// color being the first and last anchor. For straight segments, each
/// anchor appears unchanged wherever its position coincides with a stop.
///
/// # Errors
///
/// This function fails with [`ColorError::TooFewColors`] if there are fewer
/// than two anchors.
pub fn create_gradient(
    anchors: &[Color],
    options: &GradientOptions,
) -> Result<Vec<Color>, ColorError> {
    if anchors.len() < 2 {
        return Err(ColorError::TooFewColors {
            operation: "gradient",
            expected: 2,
            actual: anchors.len(),
        });
    }

    let stops = options.stops.max(2);
    tracing::trace!(
        anchors = anchors.len(),
        stops,
        space = %options.space,
        interpolation = %options.interpolation,
        hue_interpolation = %options.hue_interpolation,
        "create gradient"
    );

    let points = prepare(anchors, options);
    let last_anchor = anchors.len() - 1;
    let last_stop = (stops - 1) as Float;

    let gradient = (0..stops)
        .map(|index| {
            let position = options.easing.apply(index as Float / last_stop);

            let point = match options.interpolation {
                Interpolation::Linear => {
                    let scaled = position * last_anchor as Float;
                    if scaled.fract() == 0.0 {
                        return anchors[(scaled as usize).min(last_anchor)];
                    }

                    let segment = (scaled.floor() as usize).min(last_anchor - 1);
                    interpolate(
                        scaled - segment as Float,
                        &points[segment],
                        &points[segment + 1],
                    )
                }
                Interpolation::Bezier => {
                    if position <= 0.0 {
                        return anchors[0];
                    } else if 1.0 <= position {
                        return anchors[last_anchor];
                    }
                    de_casteljau(&points, position)
                }
            };

            let point = match options.space.hue_index() {
                Some(hue) if options.hue_interpolation == HueInterpolation::Cartesian => {
                    from_cartesian(hue, &point)
                }
                _ => point,
            };

            if options.clamp_to_gamut {
                options.space.color(&options.space.clamp(&point))
            } else {
                options.space.color(&point)
            }
        })
        .collect();

    Ok(gradient)
}


#[cfg(all(test, feature = "serde"))]
mod serde_test {
    use super::{Easing, GradientOptions, GradientSpace, HueInterpolation, Interpolation};

    #[test]
    fn test_options() -> Result<(), serde_json::Error> {
        let options: GradientOptions = serde_json::from_str(
            r#"{"stops":3,"space":"hsl","hue_interpolation":"longest","easing":"ease-in-out"}"#,
        )?;
        assert_eq!(
            options,
            GradientOptions {
                stops: 3,
                space: GradientSpace::Hsl,
                hue_interpolation: HueInterpolation::Longest,
                easing: Easing::EaseInOut,
                ..GradientOptions::default()
            }
        );

        let json = serde_json::to_value(GradientOptions::default())?;
        assert_eq!(json["space"], "oklch");
        assert_eq!(json["interpolation"], "linear");
        assert_eq!(
            serde_json::from_value::<GradientOptions>(json)?,
            GradientOptions::default()
        );

        let bezier: GradientOptions = serde_json::from_str(r#"{ "interpolation": "bezier" }"#)?;
        assert_eq!(bezier.interpolation, Interpolation::Bezier);
        let unknown = serde_json::from_str::<GradientOptions>(r#"{ "space": "xyz" }"#);
        assert!(unknown.is_err());
        Ok(())
    }
}
