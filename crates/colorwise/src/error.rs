//! Utility module with colorwise's error.

use crate::Float;

/// An erroneous color, channel, or option.
///
/// Every fallible operation in this crate returns this error. Its variants
/// carry enough context to name the offending value, so that the display
/// version doubles as a diagnostic. The permissive entry points, such as
/// [`parse_css_color_string`](crate::parse_css_color_string), swallow the error
/// after logging it at debug level.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// An input that matches none of the known shapes or grammars. For
    /// example, `banana` is neither a hex color, nor a named color, nor a
    /// color function.
    #[error("unknown color format \"{0}\"")]
    UnknownFormat(String),

    /// A hashed hexadecimal color with the wrong number of digits or a
    /// non-hexadecimal digit.
    #[error("malformed hex color \"{0}\"")]
    MalformedHex(String),

    /// A channel of a color function that does not parse as a number with
    /// a valid unit.
    #[error("malformed number \"{text}\" for channel {index}")]
    MalformedNumber { index: usize, text: String },

    /// A color function with too few or too many channels.
    #[error("{function}() expects {expected} channels but got {actual}")]
    ChannelCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// A channel value outside the channel's range. Non-finite values are
    /// always out of range.
    #[error("{channel} is {value} but must be between {min} and {max}")]
    OutOfRange {
        channel: &'static str,
        value: Float,
        min: Float,
        max: Float,
    },

    /// A format hint that does not match the shape of the input.
    #[error("format {format} does not match {shape}")]
    FormatMismatch { format: String, shape: String },

    /// An unknown name for an enumeration, such as a delta E method or
    /// harmony.
    #[error("unknown {kind} \"{value}\"")]
    UnknownOption { kind: &'static str, value: String },

    /// An operation that is not defined for the given color space.
    #[error("{operation} is not supported in {space}")]
    UnsupportedSpace {
        operation: &'static str,
        space: String,
    },

    /// An operation invoked with too few colors.
    #[error("{operation} requires at least {expected} colors but got {actual}")]
    TooFewColors {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Weights whose number does not match the number of colors.
    #[error("expected {expected} weights but got {actual}")]
    WeightCount { expected: usize, actual: usize },
}

impl ColorError {
    /// Create a new out-of-range error.
    pub(crate) fn out_of_range(
        channel: &'static str,
        value: Float,
        min: Float,
        max: Float,
    ) -> Self {
        Self::OutOfRange {
            channel,
            value,
            min,
            max,
        }
    }

    /// Create a new unknown option error.
    pub(crate) fn unknown_option<S: AsRef<str>>(kind: &'static str, value: S) -> Self {
        Self::UnknownOption {
            kind,
            value: value.as_ref().to_owned(),
        }
    }
}

/// Ensure that the value is finite and within the inclusive range.
pub(crate) fn check_range(
    channel: &'static str,
    value: Float,
    min: Float,
    max: Float,
) -> Result<(), ColorError> {
    if value.is_finite() && min <= value && value <= max {
        Ok(())
    } else {
        Err(ColorError::out_of_range(channel, value, min, max))
    }
}

/// Ensure that the value is finite.
pub(crate) fn check_finite(channel: &'static str, value: Float) -> Result<(), ColorError> {
    check_range(channel, value, Float::MIN, Float::MAX)
}

#[cfg(test)]
mod test {
    use super::{check_finite, check_range, ColorError};

    #[test]
    fn test_messages() {
        assert_eq!(
            ColorError::MalformedHex("#12".to_string()).to_string(),
            "malformed hex color \"#12\""
        );
        assert_eq!(
            ColorError::out_of_range("alpha", 2.0, 0.0, 1.0).to_string(),
            "alpha is 2 but must be between 0 and 1"
        );
        assert_eq!(
            ColorError::unknown_option("delta E method", "cie2001").to_string(),
            "unknown delta E method \"cie2001\""
        );
        assert_eq!(
            ColorError::ChannelCount {
                function: "rgb".to_string(),
                expected: 3,
                actual: 2
            }
            .to_string(),
            "rgb() expects 3 channels but got 2"
        );
    }

    #[test]
    fn test_checks() {
        assert!(check_range("red", 255.0, 0.0, 255.0).is_ok());
        assert!(check_range("red", 255.5, 0.0, 255.0).is_err());
        assert!(check_range("red", crate::Float::NAN, 0.0, 255.0).is_err());
        assert!(check_finite("hue", -720.0).is_ok());
        assert!(check_finite("hue", crate::Float::INFINITY).is_err());
    }
}
