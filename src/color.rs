//! Validated RGBA colors.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use rgb::{RGBA, RGB8, RGBA8};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An RGBA color with channels in \[0, 1\].
///
/// Channels are checked when the color is built, so a `Color` never
/// holds NaN, infinities or values outside \[0, 1\].  Equality is
/// component-wise.  "No color" is not a `Color`: use `Option<Color>`.
///
/// Serialized as a hex string when every channel sits exactly on the
/// 8-bit grid, as an `[r, g, b, a]` float array otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "ColorRepr")]
pub struct Color(RGBA<f64>);

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels([f64; 4]),
}

// Channels are finite and `-0.` is folded into `0.` at construction.
impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

fn check(channel: char, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::NonFiniteChannel { channel, value });
    }
    if !(0. ..= 1.).contains(&value) {
        return Err(Error::ChannelOutOfRange { channel, value });
    }
    Ok(value + 0.) // -0. + 0. == +0.
}

/// sRGB transfer function, IEC 61966-2-1.
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 { c / 12.92 }
    else { ((c + 0.055) / 1.055).powf(2.4) }
}

impl Color {
    pub const BLACK: Color = Color(RGBA { r: 0., g: 0., b: 0., a: 1. });
    pub const WHITE: Color = Color(RGBA { r: 1., g: 1., b: 1., a: 1. });

    /// Create a color from its components in \[0, 1\].
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Color> {
        Ok(Color(RGBA { r: check('r', r)?, g: check('g', g)?,
                        b: check('b', b)?, a: check('a', a)? }))
    }

    /// Opaque color from components in \[0, 1\].
    pub fn rgb(r: f64, g: f64, b: f64) -> Result<Color> {
        Color::new(r, g, b, 1.)
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgba8(c: RGBA8) -> Color {
        Color(RGBA { r: c.r as f64 / 255., g: c.g as f64 / 255.,
                     b: c.b as f64 / 255., a: c.a as f64 / 255. })
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    ///
    /// ```
    /// use swatch_picker::Color;
    /// assert_eq!(Color::from_argb(0xFF000000), Color::BLACK);
    /// ```
    pub fn from_argb(argb: u32) -> Color {
        let [a, r, g, b] = argb.to_be_bytes();
        Color::from_rgba8(RGBA8 { r, g, b, a })
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Color> {
        let invalid = || Error::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i .. i + 2], 16);
        let c = match digits.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&digits[i .. i + 1], 16).map(|n| n * 17)
                };
                RGBA8 { r: nibble(0).map_err(|_| invalid())?,
                        g: nibble(1).map_err(|_| invalid())?,
                        b: nibble(2).map_err(|_| invalid())?, a: 255 }
            }
            6 | 8 => {
                let a = if digits.len() == 8 {
                    byte(6).map_err(|_| invalid())?
                } else { 255 };
                RGBA8 { r: byte(0).map_err(|_| invalid())?,
                        g: byte(2).map_err(|_| invalid())?,
                        b: byte(4).map_err(|_| invalid())?, a }
            }
            _ => return Err(invalid()),
        };
        Ok(Color::from_rgba8(c))
    }

    /// Return the same color with alpha `a` ∈ \[0, 1\].
    pub fn with_alpha(self, a: f64) -> Result<Color> {
        let RGBA { r, g, b, .. } = self.0;
        Color::new(r, g, b, a)
    }

    #[inline] pub fn r(&self) -> f64 { self.0.r }
    #[inline] pub fn g(&self) -> f64 { self.0.g }
    #[inline] pub fn b(&self) -> f64 { self.0.b }
    #[inline] pub fn a(&self) -> f64 { self.0.a }

    /// Exact bit patterns of the r, g, b and a channels.  Two colors
    /// are equal if and only if their bits are.
    pub fn to_bits(&self) -> [u64; 4] {
        let RGBA { r, g, b, a } = self.0;
        [r.to_bits(), g.to_bits(), b.to_bits(), a.to_bits()]
    }

    /// Whether every channel is exactly some `n / 255`.
    pub fn is_8bit(&self) -> bool {
        Color::from_rgba8(self.to_rgba8()) == *self
    }

    /// Channels rounded to 8 bits.
    pub fn to_rgba8(&self) -> RGBA8 {
        let q = |c: f64| (c * 255.).round() as u8;
        RGBA8 { r: q(self.0.r), g: q(self.0.g), b: q(self.0.b), a: q(self.0.a) }
    }

    /// Packed `0xAARRGGBB` value, rounded to 8 bits per channel.
    pub fn to_argb(&self) -> u32 {
        let RGBA8 { r, g, b, a } = self.to_rgba8();
        u32::from_be_bytes([a, r, g, b])
    }

    /// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        let RGBA8 { r, g, b, a } = self.to_rgba8();
        if a == 255 { format!("#{r:02X}{g:02X}{b:02X}") }
        else { format!("#{r:02X}{g:02X}{b:02X}{a:02X}") }
    }

    /// Relative luminance in \[0, 1\].
    ///
    /// The channels are assumed to be sRGB encoded; they are linearized
    /// before being weighted with the Rec. 709 coefficients.  Alpha is
    /// ignored.
    pub fn luminance(&self) -> f64 {
        let RGBA { r, g, b, .. } = self.0;
        let l = 0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g)
            + 0.0722 * srgb_to_linear(b);
        l.clamp(0., 1.)
    }
}

impl From<RGB8> for Color {
    fn from(c: RGB8) -> Self {
        Color::from_rgba8(RGBA8 { r: c.r, g: c.g, b: c.b, a: 255 })
    }
}

impl From<RGBA8> for Color {
    fn from(c: RGBA8) -> Self { Color::from_rgba8(c) }
}

impl From<Color> for RGBA<f64> {
    fn from(c: Color) -> Self { c.0 }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Color> { Color::from_hex(s) }
}

impl TryFrom<ColorRepr> for Color {
    type Error = Error;

    fn try_from(repr: ColorRepr) -> Result<Color> {
        match repr {
            ColorRepr::Hex(s) => Color::from_hex(&s),
            ColorRepr::Channels([r, g, b, a]) => Color::new(r, g, b, a),
        }
    }
}

impl From<Color> for ColorRepr {
    fn from(c: Color) -> ColorRepr {
        if c.is_8bit() { ColorRepr::Hex(c.to_hex()) }
        else { ColorRepr::Channels(c.to_bits().map(f64::from_bits)) }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
