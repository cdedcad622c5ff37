use super::math::round_to;
use super::ColorSpace;
use crate::error::{check_range, ColorError};
use crate::model::{Cmyk, ColorValue, Hsla, Hsva, Hwba, Lab, Lch, Oklab, Oklch, Rgba};
use crate::{Color, Float};

/// Parse a color in hashed hexadecimal format. If successful, this function
/// returns the RGB channels in `0..=255` followed by alpha in `0..=1`. It
/// transparently handles single-digit channels as well as a trailing alpha
/// channel.
pub(crate) fn parse_hex(s: &str) -> Result<[Float; 4], ColorError> {
    let malformed = || ColorError::MalformedHex(s.to_owned());

    let digits = s.trim().strip_prefix('#').ok_or_else(malformed)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let factor = match digits.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(malformed()),
    };

    let parse_channel = |index: usize| -> Result<u8, ColorError> {
        let t = digits
            .get(factor * index..factor * (index + 1))
            .ok_or_else(malformed)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| malformed())?;
        Ok(if factor == 1 { 16 * n + n } else { n })
    };

    let r = parse_channel(0)?;
    let g = parse_channel(1)?;
    let b = parse_channel(2)?;
    let a = if digits.len() == 4 || digits.len() == 8 {
        parse_channel(3)? as Float / 255.0
    } else {
        1.0
    };

    Ok([r as Float, g as Float, b as Float, a])
}

/// Format the RGBA channels as a hashed hexadecimal string. Channels are
/// clamped and rounded.
pub(crate) fn format_hex(rgba: &Rgba, with_alpha: bool) -> String {
    #[inline]
    fn to_byte(value: Float, scale: Float) -> u8 {
        if value.is_nan() {
            0
        } else {
            (value * scale).round().clamp(0.0, 255.0) as u8
        }
    }

    let r = to_byte(rgba.r, 1.0);
    let g = to_byte(rgba.g, 1.0);
    let b = to_byte(rgba.b, 1.0);

    if with_alpha {
        let a = if rgba.a.is_nan() {
            255
        } else {
            to_byte(rgba.a, 255.0)
        };
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The kinds of channels in CSS color functions. Each kind determines the
/// scale for percentages and the acceptable units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Channel {
    /// RGB in `0..=255`, with `100%` mapping to 255.
    Rgb,
    /// S/L/V/W/B or CMYK, where bare numbers already are percentages.
    Percent,
    /// A hue in degrees, optionally with `deg`, `grad`, `rad`, or `turn`.
    Hue,
    /// CIELAB lightness, with `100%` mapping to 100.
    LabLightness,
    /// CIELAB a/b, with `100%` mapping to 125.
    LabAxis,
    /// CIELCh chroma, with `100%` mapping to 150.
    LabChroma,
    /// Oklab lightness, with `100%` mapping to 1.
    OkLightness,
    /// Oklab a/b and Oklch chroma, with `100%` mapping to 0.4.
    OkAxis,
    /// Alpha or `color()` coordinates, with `100%` mapping to 1.
    Unit,
}

impl Channel {
    /// Parse the token for this kind of channel. The keyword `none` stands for
    /// a missing component and parses as zero.
    fn parse(&self, index: usize, token: &str) -> Result<Float, ColorError> {
        let malformed = || ColorError::MalformedNumber {
            index,
            text: token.to_owned(),
        };

        let number = |text: &str| -> Result<Float, ColorError> {
            text.parse::<Float>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(malformed)
        };

        if token == "none" {
            return Ok(0.0);
        }

        if let Some(percent) = token.strip_suffix('%') {
            let percent = number(percent)?;
            return match self {
                Self::Rgb => Ok(percent * 255.0 / 100.0),
                Self::Percent | Self::LabLightness => Ok(percent),
                Self::Hue => Err(malformed()),
                Self::LabAxis => Ok(percent * 1.25),
                Self::LabChroma => Ok(percent * 1.5),
                Self::OkLightness | Self::Unit => Ok(percent / 100.0),
                Self::OkAxis => Ok(percent * 0.004),
            };
        }

        if *self == Self::Hue {
            const UNITS: [(&str, Float); 4] = [
                ("deg", 1.0),
                ("grad", 0.9),
                ("rad", 180.0 / std::f64::consts::PI as Float),
                ("turn", 360.0),
            ];

            for (unit, factor) in UNITS {
                if let Some(value) = token.strip_suffix(unit) {
                    return Ok(number(value)? * factor);
                }
            }
        }

        number(token)
    }
}

/// Split the function body into channel tokens and an optional alpha token.
///
/// Bodies with commas use the legacy syntax, where alpha is the trailing
/// argument. Otherwise, channels are separated by whitespace, and alpha either
/// follows a slash or is the trailing argument.
fn split_arguments(
    function: &str,
    body: &str,
    count: usize,
) -> Result<(Vec<String>, Option<String>), ColorError> {
    let (mut tokens, slashed): (Vec<String>, Option<String>) = if body.contains(',') {
        (body.split(',').map(|t| t.trim().to_owned()).collect(), None)
    } else if let Some((main, alpha)) = body.split_once('/') {
        let alpha: Vec<&str> = alpha.split_whitespace().collect();
        if alpha.len() != 1 {
            return Err(ColorError::ChannelCount {
                function: function.to_owned(),
                expected: count + 1,
                actual: main.split_whitespace().count() + alpha.len(),
            });
        }
        (
            main.split_whitespace().map(str::to_owned).collect(),
            Some(alpha[0].to_owned()),
        )
    } else {
        (body.split_whitespace().map(str::to_owned).collect(), None)
    };

    let actual = tokens.len() + usize::from(slashed.is_some());
    let alpha = match slashed {
        Some(alpha) if tokens.len() == count => Some(alpha),
        None if tokens.len() == count => None,
        None if tokens.len() == count + 1 => tokens.pop(),
        _ => {
            return Err(ColorError::ChannelCount {
                function: function.to_owned(),
                expected: count,
                actual,
            })
        }
    };

    Ok((tokens, alpha))
}

/// Parse the channels of a CSS color function.
fn parse_channels<const N: usize>(
    function: &str,
    body: &str,
    kinds: [Channel; N],
) -> Result<([Float; N], Float), ColorError> {
    let (tokens, alpha) = split_arguments(function, body, N)?;

    let mut values: [Float; N] = [0.0; N];
    for (index, (kind, token)) in kinds.iter().zip(tokens.iter()).enumerate() {
        values[index] = kind.parse(index, token)?;
    }

    let alpha = match alpha {
        Some(token) => {
            let alpha = Channel::Unit.parse(N, &token)?;
            check_range("alpha", alpha, 0.0, 1.0)?;
            alpha
        }
        None => 1.0,
    };

    Ok((values, alpha))
}

/// Convert a color value with an alpha channel into a color, after
/// validation.
fn to_color(value: ColorValue, alpha: Float) -> Result<Color, ColorError> {
    value.validate()?;
    let rgba = value.to_rgba()?;
    Ok(Color::from_rgba(Rgba { a: alpha, ..rgba }))
}

/// Parse a CSS color function. The name must be lowercase.
fn parse_function(name: &str, body: &str) -> Result<Color, ColorError> {
    use Channel::*;

    match name {
        "rgb" | "rgba" => {
            let ([r, g, b], a) = parse_channels(name, body, [Rgb, Rgb, Rgb])?;
            to_color(ColorValue::Rgba(Rgba { r, g, b, a }), a)
        }
        "hsl" | "hsla" => {
            let ([h, s, l], a) = parse_channels(name, body, [Hue, Percent, Percent])?;
            to_color(ColorValue::Hsla(Hsla { h, s, l, a }), a)
        }
        "hsv" | "hsva" => {
            let ([h, s, v], a) = parse_channels(name, body, [Hue, Percent, Percent])?;
            to_color(ColorValue::Hsva(Hsva { h, s, v, a }), a)
        }
        "hwb" | "hwba" => {
            let ([h, w, b], a) = parse_channels(name, body, [Hue, Percent, Percent])?;
            to_color(ColorValue::Hwba(Hwba { h, w, b, a }), a)
        }
        "cmyk" | "device-cmyk" => {
            let ([c, m, y, k], a) =
                parse_channels(name, body, [Percent, Percent, Percent, Percent])?;
            to_color(ColorValue::Cmyk(Cmyk { c, m, y, k }), a)
        }
        "lab" => {
            let ([l, a, b], alpha) = parse_channels(name, body, [LabLightness, LabAxis, LabAxis])?;
            to_color(ColorValue::Lab(Lab { l, a, b }), alpha)
        }
        "lch" => {
            let ([l, c, h], a) = parse_channels(name, body, [LabLightness, LabChroma, Hue])?;
            to_color(ColorValue::Lch(Lch { l, c, h }), a)
        }
        "oklab" => {
            let ([l, a, b], alpha) = parse_channels(name, body, [OkLightness, OkAxis, OkAxis])?;
            to_color(ColorValue::Oklab(Oklab { l, a, b }), alpha)
        }
        "oklch" => {
            let ([l, c, h], a) = parse_channels(name, body, [OkLightness, OkAxis, Hue])?;
            to_color(ColorValue::Oklch(Oklch { l, c, h }), a)
        }
        "color" => {
            let body = body.trim_start();
            let (space, rest) = body
                .split_once(char::is_whitespace)
                .unwrap_or((body, ""));
            let space = space.parse::<ColorSpace>()?;
            let ([r, g, b], a) = parse_channels(name, rest, [Unit, Unit, Unit])?;
            check_range("red", r, 0.0, 1.0)?;
            check_range("green", g, 0.0, 1.0)?;
            check_range("blue", b, 0.0, 1.0)?;
            Ok(Color::from_space(space, [r, g, b], a))
        }
        _ => Err(ColorError::UnknownFormat(name.to_owned())),
    }
}

/// Parse the string into a color.
///
/// This function recognizes hashed hexadecimal colors with 3, 4, 6, or 8
/// digits, the CSS named colors plus `transparent`, color temperature labels,
/// and the CSS color functions `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`,
/// `hsva()`, `hwb()`, `hwba()`, `cmyk()`, `device-cmyk()`, `lab()`, `lch()`,
/// `oklab()`, `oklch()`, and `color()`. Before trying to parse either of these
/// formats, this function trims leading and trailing white space and converts
/// ASCII letters to lowercase.
pub(crate) fn parse(s: &str) -> Result<Color, ColorError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        let [r, g, b, a] = parse_hex(s)?;
        return Ok(Color::from_rgba(Rgba { r, g, b, a }));
    }

    if let Some((name, rest)) = s.split_once('(') {
        let body = rest
            .trim_end()
            .strip_suffix(')')
            .ok_or_else(|| ColorError::UnknownFormat(s.to_owned()))?;
        return parse_function(name.trim_end(), body);
    }

    if let Some([r, g, b, a]) = crate::named::lookup_name(s) {
        return Ok(Color::from_rgba(Rgba { r, g, b, a }));
    }

    if let Some(kelvin) = crate::named::lookup_temperature(s) {
        return Ok(Color::from_temperature(kelvin));
    }

    Err(ColorError::UnknownFormat(s.to_owned()))
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the number with at most the given number of decimals.
///
/// CSS mandates NO trailing zeros whatsoever. But formatting floats with a
/// precision produces trailing zeros. Rounding avoids them, for the most
/// part. If the fractional part is zero, we do need an explicit
/// precision of zero!
pub(crate) fn format_number(value: Float, decimals: i32) -> String {
    let value = round_to(value, decimals);
    if value == value.trunc() {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Format a CSS color function with space-separated channels and, if given,
/// alpha after a slash.
pub(crate) fn format_function(name: &str, channels: &[String], alpha: Option<Float>) -> String {
    let mut result = format!("{}({}", name, channels.join(" "));
    if let Some(alpha) = alpha {
        result.push_str(" / ");
        result.push_str(&format_number(alpha, 3));
    }
    result.push(')');
    result
}

#[cfg(test)]
mod test {
    use super::{format_function, format_hex, format_number, parse, parse_hex, split_arguments};
    use crate::error::ColorError;
    use crate::model::Rgba;

    #[test]
    fn test_parse_hex() -> Result<(), ColorError> {
        assert_eq!(parse_hex("#123")?, [17.0, 34.0, 51.0, 1.0]);
        assert_eq!(parse_hex("#112233")?, [17.0, 34.0, 51.0, 1.0]);
        assert_eq!(parse_hex("#FFFFFF")?, [255.0, 255.0, 255.0, 1.0]);
        assert_eq!(parse_hex("#0000")?, [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(parse_hex("#ff000080")?[3], 128.0 / 255.0);

        assert_eq!(
            parse_hex("fff"),
            Err(ColorError::MalformedHex("fff".to_string()))
        );
        assert!(matches!(parse_hex("#12"), Err(ColorError::MalformedHex(_))));
        assert!(matches!(parse_hex("#12345"), Err(ColorError::MalformedHex(_))));
        assert!(matches!(parse_hex("#00g"), Err(ColorError::MalformedHex(_))));
        assert!(matches!(parse_hex("#💩00"), Err(ColorError::MalformedHex(_))));
        assert!(matches!(parse_hex("#+1+2+3"), Err(ColorError::MalformedHex(_))));
        assert!(matches!(parse_hex("#+f+f+f"), Err(ColorError::MalformedHex(_))));
        assert!(matches!(parse_hex("#-1-2-3"), Err(ColorError::MalformedHex(_))));
        assert!(matches!(parse_hex("# 12345"), Err(ColorError::MalformedHex(_))));

        Ok(())
    }

    #[test]
    fn test_format_hex() {
        let rgba = Rgba {
            r: 127.5,
            g: 300.0,
            b: -3.0,
            a: 0.5,
        };
        assert_eq!(format_hex(&rgba, false), "#80ff00");
        assert_eq!(format_hex(&rgba, true), "#80ff0080");
    }

    #[test]
    fn test_split_arguments() -> Result<(), ColorError> {
        let (tokens, alpha) = split_arguments("rgb", " 1, 2 ,3 ", 3)?;
        assert_eq!(tokens, vec!["1", "2", "3"]);
        assert_eq!(alpha, None);

        let (tokens, alpha) = split_arguments("rgb", "1,2,3,0.5", 3)?;
        assert_eq!(tokens, vec!["1", "2", "3"]);
        assert_eq!(alpha.as_deref(), Some("0.5"));

        let (tokens, alpha) = split_arguments("rgb", "1 2  3 / 50%", 3)?;
        assert_eq!(tokens, vec!["1", "2", "3"]);
        assert_eq!(alpha.as_deref(), Some("50%"));

        let (_, alpha) = split_arguments("rgb", "1 2 3 0.5", 3)?;
        assert_eq!(alpha.as_deref(), Some("0.5"));

        assert_eq!(
            split_arguments("rgb", "1 2", 3),
            Err(ColorError::ChannelCount {
                function: "rgb".to_string(),
                expected: 3,
                actual: 2
            })
        );
        assert!(split_arguments("rgb", "1 2 3 4 / 5", 3).is_err());
        assert!(split_arguments("rgb", "1 2 3 / 4 5", 3).is_err());

        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ColorError> {
        assert_eq!(parse("  #FF0000 ")?.to_hex(), "#ff0000");
        assert_eq!(parse("rgb(255, 0, 0)")?.to_hex(), "#ff0000");
        assert_eq!(parse("RGBA(100%, 0%, 0%, 50%)")?.to_hex8(), "#ff000080");
        assert_eq!(parse("rgb(255 0 0 / 0.5)")?.to_hex8(), "#ff000080");
        assert_eq!(parse("hsl(120deg 100% 50%)")?.to_hex(), "#00ff00");
        assert_eq!(parse("hsl(0.5turn, 100%, 50%)")?.to_hex(), "#00ffff");
        assert_eq!(parse("hsla(240, 100, 50, 1)")?.to_hex(), "#0000ff");
        assert_eq!(parse("hsv(60 100% 100%)")?.to_hex(), "#ffff00");
        assert_eq!(parse("hwb(0 0% 0%)")?.to_hex(), "#ff0000");
        assert_eq!(parse("device-cmyk(0% 100% 100% 0%)")?.to_hex(), "#ff0000");
        assert_eq!(parse("cmyk(0, 0, 0, 100)")?.to_hex(), "#000000");
        assert_eq!(parse("lab(100 0 0)")?.to_hex(), "#ffffff");
        assert_eq!(parse("lch(0% 0 0)")?.to_hex(), "#000000");
        assert_eq!(parse("oklab(1 0 0)")?.to_hex(), "#ffffff");
        assert_eq!(
            parse("oklch(62.7955% 0.257683 29.2339deg)")?.to_hex(),
            "#ff0000"
        );
        assert_eq!(parse("color(srgb 1 0 0 / 0.5)")?.to_hex8(), "#ff000080");
        assert_eq!(parse("color(display-p3 0.2 0.2 0.2)")?.to_hex(), "#333333");
        assert_eq!(parse("rebeccapurple")?.to_hex(), "#663399");
        assert_eq!(parse("Blue Sky")?, crate::Color::from_temperature(10000.0));

        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse("banana"), Err(ColorError::UnknownFormat(_))));
        assert!(matches!(
            parse("whatever(1 1 1)"),
            Err(ColorError::UnknownFormat(_))
        ));
        assert!(matches!(parse("rgb(1 1 1"), Err(ColorError::UnknownFormat(_))));
        assert!(matches!(
            parse("rgb(255,0,0,2)"),
            Err(ColorError::OutOfRange {
                channel: "alpha",
                ..
            })
        ));
        assert!(matches!(
            parse("rgb(256 0 0)"),
            Err(ColorError::OutOfRange { channel: "red", .. })
        ));
        assert!(matches!(
            parse("rgb(a 0 0)"),
            Err(ColorError::MalformedNumber { index: 0, .. })
        ));
        assert!(matches!(
            parse("hsl(10% 50% 50%)"),
            Err(ColorError::MalformedNumber { index: 0, .. })
        ));
        assert!(matches!(
            parse("hsl(10 50%)"),
            Err(ColorError::ChannelCount { .. })
        ));
        assert!(matches!(
            parse("color(xyz 1 1 1)"),
            Err(ColorError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse("oklch(2 0.1 30)"),
            Err(ColorError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_number(0.1234567, 3), "0.123");
        assert_eq!(format_number(255.0, 0), "255");
        assert_eq!(format_number(127.5, 0), "128");
        assert_eq!(format_number(-0.0001, 3), "0");
        assert_eq!(
            format_function("hsl", &["120".to_string(), "50%".to_string()], Some(0.5)),
            "hsl(120 50% / 0.5)"
        );
        assert_eq!(format_function("lab", &["50".to_string()], None), "lab(50)");
    }
}
