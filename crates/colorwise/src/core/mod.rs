mod contrast;
mod conversion;
mod equality;
mod gamut;
mod math;
mod space;
mod string;

// contrast
pub(crate) use contrast::{
    to_contrast, to_contrast_luminance, to_contrast_ratio, to_relative_luminance,
};

// conversion
pub(crate) use conversion::{
    cmyk_to_rgb, convert, from_polar, hsl_to_rgb, hsv_to_rgb, hwb_to_rgb, lab_to_srgb,
    linear_rgb_to_rgb, oklab_to_srgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv, rgb_to_hwb,
    rgb_to_linear_rgb, srgb_to_lab, srgb_to_oklab, to_polar, LAB_ACHROMATIC, OK_ACHROMATIC,
};

// equality
pub use equality::to_eq_bits;
pub(crate) use equality::{is_achromatic, to_eq_channels};

// gamut
pub(crate) use gamut::{clip, to_gamut};

// math
pub(crate) use math::{
    circular_mean, lerp, normalize_hue, shortest_hue_delta, Accumulator, FloatExt,
};

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format_function, format_hex, format_number, parse, parse_hex};
