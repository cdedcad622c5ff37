//! # Colorwise
//!
//! Colorwise converts colors between the color models and color spaces of the
//! web, measures how different and how readable they are, and derives
//! harmonies, palettes, and gradients from them.
//!
//!
//! ## 1. Overview
//!
//! Colorwise's main abstractions are:
//!
//!   * [`Color`] implements an **immutable color** with sRGB channels in
//!     `0..=255` at [`Float`] precision plus alpha. Its methods convert to all
//!     other models and format CSS strings. [`Color::new`] is the strict
//!     constructor, [`parse_css_color_string`] the permissive parser.
//!   * The **color models** [`Rgb`], [`Rgba`], [`Hsl`], [`Hsla`], [`Hsv`],
//!     [`Hsva`], [`Hwb`], [`Hwba`], [`Cmyk`], [`Lab`], [`Lch`], [`Oklab`], and
//!     [`Oklch`] are plain structs in natural CSS units. [`ColorValue`] tags
//!     them with their [`ColorFormat`], and [`parse_format`] resolves untyped
//!     [`Channels`] into such a value.
//!   * [`ColorSpace`] covers the **RGB color spaces** sRGB, Display P3, and
//!     Rec. 2020. Colors from the wider gamuts are mapped into sRGB with the
//!     CSS Color 4 gamut mapping algorithm.
//!   * The [`adjust`] and [`mix`] modules **manipulate and combine** colors,
//!     the [`gradient`] module **interpolates** between them.
//!   * The [`difference`] and [`contrast`] modules measure **perceptual
//!     difference** and **readability**.
//!   * The [`harmony`], [`swatch`], and [`palette`] modules **derive related
//!     colors**, from color wheel harmonies to complete design system
//!     palettes.
//!
//!
//! ## 2. Getting Started
//!
//! ```
//! # use colorwise::{Color, ColorError};
//! # use colorwise::gradient::{create_gradient, GradientOptions, GradientSpace};
//! let red = Color::new("#ff0000")?;
//! let blue = Color::new("rgb(0 0 255)")?;
//! assert_eq!(red.spin(180.0).to_hex(), "#00ffff");
//!
//! let options = GradientOptions {
//!     stops: 5,
//!     space: GradientSpace::Rgb,
//!     ..GradientOptions::default()
//! };
//! let hexes: Vec<String> = create_gradient(&[red, blue], &options)?
//!     .iter()
//!     .map(Color::to_hex)
//!     .collect();
//! assert_eq!(hexes, ["#ff0000", "#bf0040", "#800080", "#4000bf", "#0000ff"]);
//! # Ok::<(), ColorError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Colorwise supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives serialization for models, values, and option
//!     records and serializes [`Color`] as its hexadecimal string. This
//!     feature is disabled by default.
//!
//! Colorwise logs through [tracing](https://docs.rs/tracing) but never
//! installs a subscriber.
//!
//!
//! ## 4. Acknowledgements
//!
//! The conversions between color spaces reuse the formulae of [Lea
//! Verou](http://lea.verou.me/)'s and [Chris Lilley](https://svgees.us/)'s
//! [Color.js](https://colorjs.io) and implement several [CSS Color
//! 4](https://www.w3.org/TR/css-color-4/) algorithms. The perceptual contrast
//! follows [APCA](https://github.com/Myndex/apca-w3).

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

pub mod adjust;
pub mod contrast;
mod core;
pub mod difference;
mod error;
mod format;
pub mod gradient;
pub mod harmony;
pub mod mix;
mod model;
mod named;
mod object;
pub mod palette;
pub mod swatch;

#[doc(hidden)]
pub use crate::core::to_eq_bits;

pub use crate::core::ColorSpace;
pub use error::ColorError;
pub use format::{parse_format, Channels, ColorFormat, ColorInput};
pub use model::{
    Cmyk, ColorModel, ColorValue, Hsl, Hsla, Hsv, Hsva, Hwb, Hwba, Lab, Lch, Oklab, Oklch, Rgb,
    Rgba,
};
pub use object::{parse_css, parse_css_color_string, Color};
