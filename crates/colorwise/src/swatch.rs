//! Tonal swatches.
//!
//! A [`ColorSwatch`] holds tonal variants of one color, keyed by stops from
//! 100, the lightest, to 900, the darkest, with 50 and 950 as optional
//! extremes. All variants share the input color's Oklch hue and chroma, with
//! chroma reduced where necessary to stay within the sRGB gamut. The input
//! color itself takes the stop whose lightness comes closest.
//!
//! ```
//! # use colorwise::{Color, ColorError};
//! # use colorwise::swatch::{ColorSwatch, SwatchOptions};
//! let red = Color::new("#f00")?;
//! let swatch = ColorSwatch::new(&red, &SwatchOptions::default());
//! assert_eq!(swatch.len(), 9);
//! assert_eq!(swatch.main_stop(), 500);
//! assert_eq!(swatch.get(500), Some(red));
//! # Ok::<(), ColorError>(())
//! ```

use std::collections::BTreeMap;

use crate::{Color, Float};

/// The Oklch lightness of each stop.
const STOP_LIGHTNESS: [(u16, Float); 11] = [
    (50, 0.97),
    (100, 0.93),
    (200, 0.86),
    (300, 0.78),
    (400, 0.70),
    (500, 0.62),
    (600, 0.54),
    (700, 0.46),
    (800, 0.38),
    (900, 0.30),
    (950, 0.24),
];

/// The options for creating a swatch.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SwatchOptions {
    /// Whether to add stops 50 and 950, which defaults to false.
    pub extended: bool,
}

/// A swatch of tonal variants.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorSwatch {
    stops: BTreeMap<u16, Color>,
    main_stop: u16,
    main_color: Color,
}

impl ColorSwatch {
    /// Create a new swatch for the color.
    pub fn new(color: &Color, options: &SwatchOptions) -> Self {
        let lightness: Vec<(u16, Float)> = STOP_LIGHTNESS
            .iter()
            .copied()
            .filter(|&(stop, _)| options.extended || (100..=900).contains(&stop))
            .collect();

        let oklch = color.to_oklch();
        let main_stop = lightness
            .iter()
            .min_by(|(_, l1), (_, l2)| (l1 - oklch.l).abs().total_cmp(&(l2 - oklch.l).abs()))
            .map_or(500, |&(stop, _)| stop);

        let stops = lightness
            .iter()
            .map(|&(stop, l)| {
                let variant = if stop == main_stop {
                    *color
                } else {
                    Color::from_oklch_mapped(l, oklch.c, oklch.h).with_alpha(color.alpha())
                };
                (stop, variant)
            })
            .collect();

        Self {
            stops,
            main_stop,
            main_color: *color,
        }
    }

    /// Get the stop holding the input color.
    pub fn main_stop(&self) -> u16 {
        self.main_stop
    }

    /// Get the input color.
    pub fn main_color(&self) -> Color {
        self.main_color
    }

    /// Get the color for the stop.
    pub fn get(&self, stop: u16) -> Option<Color> {
        self.stops.get(&stop).copied()
    }

    /// Get the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Determine whether this swatch has no stops, which never is the case.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Iterate over stops and colors from lightest to darkest.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, u16, Color> {
        self.stops.iter()
    }

    /// Access the underlying map.
    pub fn as_map(&self) -> &BTreeMap<u16, Color> {
        &self.stops
    }
}

impl<'a> IntoIterator for &'a ColorSwatch {
    type Item = (&'a u16, &'a Color);
    type IntoIter = std::collections::btree_map::Iter<'a, u16, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}

#[cfg(test)]
mod test {
    use super::{ColorSwatch, SwatchOptions};
    use crate::{Color, ColorError};

    #[test]
    fn test_stops() -> Result<(), ColorError> {
        let teal = Color::new("#008080")?;

        let swatch = ColorSwatch::new(&teal, &SwatchOptions::default());
        let stops: Vec<u16> = swatch.iter().map(|(stop, _)| *stop).collect();
        assert_eq!(stops, [100, 200, 300, 400, 500, 600, 700, 800, 900]);
        assert_eq!(swatch.main_stop(), 600);
        assert_eq!(swatch.main_color(), teal);
        assert_eq!(swatch.get(600).map(|c| c.channels()), Some(teal.channels()));
        assert_eq!(swatch.get(50), None);

        let swatch = ColorSwatch::new(&teal, &SwatchOptions { extended: true });
        assert_eq!(swatch.len(), 11);
        assert!(swatch.get(50).is_some() && swatch.get(950).is_some());
        Ok(())
    }

    #[test]
    fn test_lightness_order() -> Result<(), ColorError> {
        for hex in ["#ff0000", "#008080", "#6872ff", "#ffd700", "#fafafa", "#101010"] {
            let color = Color::new(hex)?;
            let swatch = ColorSwatch::new(&color, &SwatchOptions { extended: true });

            let lightness: Vec<_> = swatch.iter().map(|(_, c)| c.to_oklch().l).collect();
            for pair in lightness.windows(2) {
                assert!(pair[1] < pair[0], "{hex}: {lightness:?}");
            }
            for (_, variant) in &swatch {
                assert_eq!(variant.alpha(), 1.0);
            }
        }
        Ok(())
    }

    #[test]
    fn test_extremes() -> Result<(), ColorError> {
        let white = Color::new("#fff")?;
        let black = Color::new("#000")?;

        assert_eq!(
            ColorSwatch::new(&white, &SwatchOptions::default()).main_stop(),
            100
        );
        assert_eq!(
            ColorSwatch::new(&black, &SwatchOptions::default()).main_stop(),
            900
        );
        assert_eq!(
            ColorSwatch::new(&black, &SwatchOptions { extended: true }).main_stop(),
            950
        );

        // Gray stays gray
        let swatch = ColorSwatch::new(&black, &SwatchOptions::default());
        let [r, g, b, _] = swatch.get(500).map(|c| c.channels()).unwrap_or_default();
        assert!((r - g).abs() < 1e-6 && (g - b).abs() < 1e-6);
        Ok(())
    }
}
