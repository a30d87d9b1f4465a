//! Hue/saturation/brightness colors and the conversions to and from RGB.
//!
//! Brightness here is `(max + min) / 2` of the normalized channels, the
//! definition used by GDI+ `Color.GetBrightness`. Converting RGB to HSB never
//! fails. Converting back validates its inputs and rejects anything outside
//! `hue ∈ [0, 360]`, `saturation ∈ [0, 1]`, `brightness ∈ [0, 1]`.
//!
//! # Example
//!
//! ```
//! use ergonomic_color::hsb::{hsb_to_rgb, rgb_to_hsb};
//! use ergonomic_color::rgb::Rgb;
//!
//! let hsb = rgb_to_hsb(Rgb::new(255, 0, 0));
//! assert_eq!((hsb.hue, hsb.saturation, hsb.brightness), (0.0, 1.0, 0.5));
//!
//! let rgb = hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness)?;
//! assert_eq!(rgb, Rgb::new(255, 0, 0));
//! # Ok::<(), ergonomic_color::error::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::rgb::Rgb;

/// A color as hue (degrees), saturation and brightness.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsb {
    /// Hue in degrees (0.0 - 360.0).
    pub hue: f32,
    /// Saturation (0.0 - 1.0).
    pub saturation: f32,
    /// Brightness (0.0 - 1.0).
    pub brightness: f32,
}

impl Hsb {
    /// Creates a new HSB color, validating each component.
    ///
    /// A hue of exactly 360 is accepted and treated like 0.
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Result<Self> {
        validate(hue, saturation, brightness)?;
        Ok(Self {
            hue,
            saturation,
            brightness,
        })
    }

    /// Converts to RGB.
    ///
    /// The fields are public, so they are validated again here.
    #[inline]
    pub fn to_rgb(self) -> Result<Rgb> {
        hsb_to_rgb(self.hue, self.saturation, self.brightness)
    }
}

impl From<Rgb> for Hsb {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsb(rgb)
    }
}

impl TryFrom<Hsb> for Rgb {
    type Error = Error;

    fn try_from(hsb: Hsb) -> Result<Self> {
        hsb.to_rgb()
    }
}

/// Which of the three computed levels lands in a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Max,
    Mid,
    Min,
}

/// Channel assignment `(r, g, b)` for each 60° wedge of the hue wheel.
const SEXTANT_CHANNELS: [[Level; 3]; 6] = {
    use Level::{Max, Mid, Min};
    [
        [Max, Mid, Min], // red -> yellow
        [Mid, Max, Min], // yellow -> green
        [Min, Max, Mid], // green -> cyan
        [Min, Mid, Max], // cyan -> blue
        [Mid, Min, Max], // blue -> magenta
        [Max, Min, Mid], // magenta -> red
    ]
};

fn validate(hue: f32, saturation: f32, brightness: f32) -> Result<()> {
    // `contains` is false for NaN, so NaN is rejected too.
    let checks = [
        ("hue", hue, 360.0),
        ("saturation", saturation, 1.0),
        ("brightness", brightness, 1.0),
    ];
    for (parameter, value, upper) in checks {
        if !(0.0..=upper).contains(&value) {
            log::debug!("rejecting HSB input: {parameter} = {value}");
            return Err(Error::out_of_range(parameter, value));
        }
    }
    Ok(())
}

#[inline]
fn to_channel(level: f32) -> u8 {
    (level * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts an RGB color to hue/saturation/brightness.
///
/// Grays (r = g = b) get a hue of 0; their saturation and brightness are
/// still computed normally, so saturation is 0 and brightness is `r / 255`.
pub fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let r = rgb.r as f32 / 255.0;
    let g = rgb.g as f32 / 255.0;
    let b = rgb.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let brightness = (max + min) / 2.0;

    if rgb.r == rgb.g && rgb.g == rgb.b {
        return Hsb {
            hue: 0.0,
            saturation: 0.0,
            brightness,
        };
    }

    let saturation = if brightness <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    // Ties resolve red first, then green.
    let mut hue = if r == max {
        60.0 * ((g - b) / delta)
    } else if g == max {
        60.0 * (2.0 + (b - r) / delta)
    } else {
        60.0 * (4.0 + (r - g) / delta)
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    Hsb {
        hue,
        saturation,
        brightness,
    }
}

/// Converts hue/saturation/brightness to an RGB color.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] naming the first offending parameter if
/// `hue` is outside `[0, 360]` or `saturation`/`brightness` are outside
/// `[0, 1]`.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Result<Rgb> {
    validate(hue, saturation, brightness)?;

    if saturation == 0.0 {
        let level = to_channel(brightness);
        return Ok(Rgb::new(level, level, level));
    }

    let (max, min) = if brightness > 0.5 {
        (
            brightness - brightness * saturation + saturation,
            brightness + brightness * saturation - saturation,
        )
    } else {
        (
            brightness + brightness * saturation,
            brightness - brightness * saturation,
        )
    };

    // A hue of exactly 360 lands in wedge 6, which is wedge 0 again.
    let sextant = (hue / 60.0).floor() as usize % 6;

    // Position inside the wedge, in [0, 1) for even wedges, [-1, 0) for odd ones.
    let wrapped = if hue >= 300.0 { hue - 360.0 } else { hue };
    let offset = 2.0 * (((sextant + 1) % 6) / 2) as f32;
    let local = wrapped / 60.0 - offset;

    let mid = if sextant % 2 == 0 {
        min + local * (max - min)
    } else {
        min - local * (max - min)
    };

    let levels = [to_channel(max), to_channel(mid), to_channel(min)];
    let [r, g, b] = SEXTANT_CHANNELS[sextant].map(|level| match level {
        Level::Max => levels[0],
        Level::Mid => levels[1],
        Level::Min => levels[2],
    });

    Ok(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(rgb: Rgb, back: Rgb) {
        let diff = |a: u8, b: u8| (a as i16 - b as i16).abs();
        assert!(
            diff(rgb.r, back.r) <= 1 && diff(rgb.g, back.g) <= 1 && diff(rgb.b, back.b) <= 1,
            "{rgb:?} came back as {back:?}"
        );
    }

    #[test]
    fn test_red_fixed_point() {
        let hsb = rgb_to_hsb(Rgb::new(255, 0, 0));
        assert_eq!(hsb.hue, 0.0);
        assert_eq!(hsb.saturation, 1.0);
        assert_eq!(hsb.brightness, 0.5);
        assert_eq!(hsb.to_rgb().unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_primary_and_secondary_hues() {
        let cases = [
            (0.0, Rgb::new(255, 0, 0)),
            (60.0, Rgb::new(255, 255, 0)),
            (120.0, Rgb::new(0, 255, 0)),
            (180.0, Rgb::new(0, 255, 255)),
            (240.0, Rgb::new(0, 0, 255)),
            (300.0, Rgb::new(255, 0, 255)),
        ];
        for (hue, expected) in cases {
            assert_eq!(hsb_to_rgb(hue, 1.0, 0.5).unwrap(), expected, "hue {hue}");
            let hsb = rgb_to_hsb(expected);
            assert!((hsb.hue - hue).abs() < 1e-4, "{expected:?} -> {hsb:?}");
        }
    }

    #[test]
    fn test_every_wedge_uses_its_own_permutation() {
        // Midpoint of each wedge, where the mid channel is exactly half way.
        let cases = [
            (30.0, Rgb::new(255, 128, 0)),
            (90.0, Rgb::new(128, 255, 0)),
            (150.0, Rgb::new(0, 255, 128)),
            (210.0, Rgb::new(0, 128, 255)),
            (270.0, Rgb::new(128, 0, 255)),
            (330.0, Rgb::new(255, 0, 128)),
        ];
        for (hue, expected) in cases {
            assert_close(expected, hsb_to_rgb(hue, 1.0, 0.5).unwrap());
        }
    }

    #[test]
    fn test_dark_and_light_branches() {
        // Navy: brightness below one half.
        let navy = Rgb::new(0, 0, 128);
        let hsb = rgb_to_hsb(navy);
        assert_eq!(hsb.hue, 240.0);
        assert_eq!(hsb.saturation, 1.0);
        assert_eq!(hsb.to_rgb().unwrap(), navy);

        // Light pink: brightness above one half.
        let pink = Rgb::new(255, 182, 193);
        let hsb = rgb_to_hsb(pink);
        assert!(hsb.brightness > 0.5);
        assert_close(pink, hsb.to_rgb().unwrap());
    }

    #[test]
    fn test_green_hue() {
        let hsb = rgb_to_hsb(Rgb::new(0, 128, 0));
        assert_eq!(hsb.hue, 120.0);
        assert_eq!(hsb.saturation, 1.0);
    }

    #[test]
    fn test_negative_hue_wraps() {
        // Red is max and blue exceeds green, so the raw hue is negative.
        let hsb = rgb_to_hsb(Rgb::new(255, 0, 51));
        assert!(hsb.hue > 300.0 && hsb.hue < 360.0, "{hsb:?}");
    }

    #[test]
    fn test_achromatic() {
        for v in 0..=255u8 {
            let hsb = rgb_to_hsb(Rgb::new(v, v, v));
            assert_eq!(hsb.hue, 0.0);
            assert_eq!(hsb.saturation, 0.0);
            assert_eq!(hsb.brightness, v as f32 / 255.0);
            assert_eq!(hsb.to_rgb().unwrap(), Rgb::new(v, v, v));
        }
    }

    #[test]
    fn test_black_and_white() {
        assert_eq!(hsb_to_rgb(0.0, 0.0, 0.0).unwrap(), Rgb::new(0, 0, 0));
        assert_eq!(hsb_to_rgb(0.0, 0.0, 1.0).unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(hsb_to_rgb(200.0, 1.0, 0.0).unwrap(), Rgb::new(0, 0, 0));
        assert_eq!(hsb_to_rgb(200.0, 1.0, 1.0).unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_hue_360_wraps_to_0() {
        for s in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for b in [0.0, 0.1, 0.5, 0.9, 1.0] {
                assert_eq!(
                    hsb_to_rgb(360.0, s, b).unwrap(),
                    hsb_to_rgb(0.0, s, b).unwrap(),
                    "s={s} b={b}"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_names_parameter() {
        let cases = [
            ((-1.0, 0.0, 0.0), "hue"),
            ((360.5, 0.0, 0.0), "hue"),
            ((f32::NAN, 0.0, 0.0), "hue"),
            ((10.0, 1.5, 0.0), "saturation"),
            ((10.0, -0.01, 0.0), "saturation"),
            ((10.0, 0.0, -0.1), "brightness"),
            ((10.0, 0.0, 1.01), "brightness"),
            ((10.0, 0.5, f32::INFINITY), "brightness"),
        ];
        for ((h, s, b), parameter) in cases {
            let err = hsb_to_rgb(h, s, b).unwrap_err();
            assert_eq!(err.parameter(), Some(parameter), "({h}, {s}, {b})");
            assert_eq!(Hsb::new(h, s, b).unwrap_err().parameter(), Some(parameter));
        }
    }

    #[test]
    fn test_round_trip_rgb_cube() {
        // Every fifth step per channel, endpoints included.
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let rgb = Rgb::new(r, g, b);
                    assert_close(rgb, rgb_to_hsb(rgb).to_rgb().unwrap());
                }
            }
        }
    }

    #[test]
    fn test_rgb_to_hsb_ranges() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let hsb = rgb_to_hsb(Rgb::new(r, g, b));
                    assert!((0.0..360.0).contains(&hsb.hue), "{hsb:?}");
                    assert!((0.0..=1.0).contains(&hsb.saturation), "{hsb:?}");
                    assert!((0.0..=1.0).contains(&hsb.brightness), "{hsb:?}");
                }
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn hue_distance(a: f32, b: f32) -> f32 {
            let d = (a - b).abs();
            d.min(360.0 - d)
        }

        proptest! {
            #[test]
            fn rgb_round_trip_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let rgb = Rgb::new(r, g, b);
                let back = rgb_to_hsb(rgb).to_rgb().unwrap();
                prop_assert!((rgb.r as i16 - back.r as i16).abs() <= 1, "{:?} -> {:?}", rgb, back);
                prop_assert!((rgb.g as i16 - back.g as i16).abs() <= 1, "{:?} -> {:?}", rgb, back);
                prop_assert!((rgb.b as i16 - back.b as i16).abs() <= 1, "{:?} -> {:?}", rgb, back);
            }

            #[test]
            fn hsb_round_trip_within_tolerance(
                hue in 0.0f32..360.0,
                saturation in 0.5f32..=1.0,
                brightness in 0.25f32..=0.75,
            ) {
                let back = rgb_to_hsb(hsb_to_rgb(hue, saturation, brightness).unwrap());
                prop_assert!(hue_distance(back.hue, hue) < 1.5, "hue {} -> {}", hue, back.hue);
                prop_assert!((back.saturation - saturation).abs() < 0.02,
                    "saturation {} -> {}", saturation, back.saturation);
                prop_assert!((back.brightness - brightness).abs() < 0.005,
                    "brightness {} -> {}", brightness, back.brightness);
            }

            #[test]
            fn gray_hsb_round_trip_has_zero_hue(hue in 0.0f32..=360.0, brightness in 0.0f32..=1.0) {
                let back = rgb_to_hsb(hsb_to_rgb(hue, 0.0, brightness).unwrap());
                prop_assert_eq!(back.hue, 0.0);
                prop_assert_eq!(back.saturation, 0.0);
            }

            #[test]
            fn hue_360_matches_hue_0(saturation in 0.0f32..=1.0, brightness in 0.0f32..=1.0) {
                prop_assert_eq!(
                    hsb_to_rgb(360.0, saturation, brightness).unwrap(),
                    hsb_to_rgb(0.0, saturation, brightness).unwrap()
                );
            }

            #[test]
            fn in_range_input_never_fails(
                hue in 0.0f32..=360.0,
                saturation in 0.0f32..=1.0,
                brightness in 0.0f32..=1.0,
            ) {
                prop_assert!(hsb_to_rgb(hue, saturation, brightness).is_ok());
            }
        }
    }
}
