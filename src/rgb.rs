//! 8-bit-per-channel RGB colors.
//!
//! [`Rgb`] is the integer side of the conversion. It packs to and from the
//! `0xRRGGBB` hex layout and GDI's `COLORREF` layout (`0x00BBGGRR`), parses
//! from hex strings or known color names, and displays as its known name or
//! `#RRGGBB`.

use crate::error::{Error, Result};
use crate::hsb::{rgb_to_hsb, Hsb};
use crate::named::NamedColorTable;
use std::fmt;
use std::str::FromStr;

/// An opaque color with red, green and blue channels (0 - 255).
///
/// # Example
///
/// ```
/// use ergonomic_color::rgb::Rgb;
///
/// let color: Rgb = "#6495ED".parse()?;
/// assert_eq!(color, Rgb::new(100, 149, 237));
/// assert_eq!(color.to_string(), "CornflowerBlue");
/// # Ok::<(), ergonomic_color::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a hex value (0xRRGGBB). The top byte is ignored.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Packs the color as 0xRRGGBB.
    #[inline]
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Creates a color from a GDI `COLORREF` value (0x00BBGGRR).
    #[inline]
    pub const fn from_colorref(value: u32) -> Self {
        Self::new(
            (value & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            ((value >> 16) & 0xFF) as u8,
        )
    }

    /// Packs the color as a GDI `COLORREF` value (0x00BBGGRR).
    #[inline]
    pub const fn to_colorref(self) -> u32 {
        self.r as u32 | ((self.g as u32) << 8) | ((self.b as u32) << 16)
    }

    /// Returns the channels as an array.
    #[inline]
    pub const fn into_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts to hue/saturation/brightness.
    #[inline]
    pub fn to_hsb(self) -> Hsb {
        rgb_to_hsb(self)
    }

    /// Hue in degrees, `[0, 360)`. Zero for grays.
    pub fn hue(self) -> f32 {
        rgb_to_hsb(self).hue
    }

    /// Saturation, `[0, 1]`.
    pub fn saturation(self) -> f32 {
        rgb_to_hsb(self).saturation
    }

    /// Brightness, `[0, 1]`, computed as `(max + min) / 2`.
    pub fn brightness(self) -> f32 {
        rgb_to_hsb(self).brightness
    }

    /// Returns the known color name for this exact value, if any.
    #[inline]
    pub fn name(self) -> Option<&'static str> {
        NamedColorTable::name_of(self)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.into_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
        }
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parses `#RRGGBB`, `RRGGBB`, `#RGB`, or a known color name
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(rgb) = NamedColorTable::lookup(s) {
            return Ok(rgb);
        }

        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            log::debug!("rejecting color string {s:?}");
            return Err(Error::parse(s));
        }

        match (digits.len(), s.starts_with('#')) {
            (6, _) => u32::from_str_radix(digits, 16)
                .map(Self::from_hex)
                .map_err(|_| Error::parse(s)),
            (3, true) => {
                let mut channels = [0u8; 3];
                for (channel, digit) in channels.iter_mut().zip(digits.bytes()) {
                    // 0xF -> 0xFF
                    let nibble = (digit as char).to_digit(16).unwrap_or(0) as u8;
                    *channel = nibble * 0x11;
                }
                Ok(Self::from(channels))
            }
            _ => {
                log::debug!("rejecting color string {s:?}: bad length");
                Err(Error::parse(s))
            }
        }
    }
}
