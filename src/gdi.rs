//! Interop with GDI and Direct2D color types.
//!
//! GDI passes colors as `COLORREF` (0x00BBGGRR) and Direct2D as normalized
//! `D2D1_COLOR_F`. These conversions let an [`Rgb`] be handed straight to
//! either API.

use crate::rgb::Rgb;
use windows::Win32::Foundation::COLORREF;
use windows::Win32::Graphics::Direct2D::Common::D2D1_COLOR_F;

impl From<Rgb> for COLORREF {
    fn from(rgb: Rgb) -> Self {
        COLORREF(rgb.to_colorref())
    }
}

impl From<COLORREF> for Rgb {
    fn from(value: COLORREF) -> Self {
        Rgb::from_colorref(value.0)
    }
}

impl From<Rgb> for D2D1_COLOR_F {
    /// Fully opaque.
    fn from(rgb: Rgb) -> Self {
        D2D1_COLOR_F {
            r: rgb.r as f32 / 255.0,
            g: rgb.g as f32 / 255.0,
            b: rgb.b as f32 / 255.0,
            a: 1.0,
        }
    }
}
