//! # Ergonomic Color
//!
//! RGB/HSB color-space conversion for Rust, with the known-color naming and
//! `COLORREF` packing used by GDI-era Windows code.
//!
//! This crate provides:
//!
//! - **Error Handling**: A small error type for rejected input
//! - **RGB**: 8-bit color values, hex and `COLORREF` packing, parsing
//! - **HSB**: Hue/saturation/brightness values and conversions both ways
//! - **Named Colors**: The 140 known colors and `#RRGGBB` formatting
//! - **GDI Interop** (Windows only): `COLORREF` and `D2D1_COLOR_F` conversions
//!
//! All operations are pure and may be called from any thread.
//!
//! ## Quick Start
//!
//! ```
//! use ergonomic_color::prelude::*;
//!
//! // RGB to HSB never fails
//! let hsb = rgb_to_hsb(Rgb::new(100, 149, 237));
//! println!("hue {:.1}, saturation {:.3}", hsb.hue, hsb.saturation);
//!
//! // HSB to RGB validates its input
//! let red = hsb_to_rgb(0.0, 1.0, 0.5)?;
//! assert_eq!(display_string(red), "Red");
//!
//! assert!(hsb_to_rgb(0.0, 1.5, 0.5).is_err());
//!
//! # Ok::<(), ergonomic_color::error::Error>(())
//! ```
//!
//! ## Feature Highlights
//!
//! ### Parsing and Display
//!
//! ```
//! use ergonomic_color::rgb::Rgb;
//!
//! let color: Rgb = "cornflowerblue".parse()?;
//! assert_eq!(color.to_hex(), 0x6495ED);
//!
//! let custom: Rgb = "#123".parse()?;
//! assert_eq!(custom.to_string(), "#112233");
//!
//! # Ok::<(), ergonomic_color::error::Error>(())
//! ```
//!
//! ### Out-of-Range Input
//!
//! ```
//! use ergonomic_color::error::Error;
//! use ergonomic_color::hsb::hsb_to_rgb;
//!
//! match hsb_to_rgb(-1.0, 0.0, 0.0) {
//!     Err(Error::OutOfRange { parameter, .. }) => assert_eq!(parameter, "hue"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

#![warn(missing_docs)]

// Core modules
pub mod error;
pub mod hsb;
pub mod named;
pub mod rgb;

// Platform interop
#[cfg(windows)]
pub mod gdi;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::hsb::{hsb_to_rgb, rgb_to_hsb, Hsb};
    pub use crate::named::{display_string, NamedColorTable};
    pub use crate::rgb::Rgb;
}
