//! Fuzz target for HSB to RGB conversion.
//!
//! Any float triple must either convert or be rejected with an
//! out-of-range error naming one of the three parameters. Never a panic.

#![no_main]

use arbitrary::Arbitrary;
use ergonomic_color::error::Error;
use ergonomic_color::hsb::hsb_to_rgb;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    hue: f32,
    saturation: f32,
    brightness: f32,
}

fuzz_target!(|input: Input| {
    let in_range = (0.0..=360.0).contains(&input.hue)
        && (0.0..=1.0).contains(&input.saturation)
        && (0.0..=1.0).contains(&input.brightness);

    match hsb_to_rgb(input.hue, input.saturation, input.brightness) {
        Ok(rgb) => {
            assert!(in_range, "accepted out-of-range input {:?}", input);
            // Hue 360 is the same as hue 0
            if input.hue == 360.0 {
                let zero = hsb_to_rgb(0.0, input.saturation, input.brightness);
                assert_eq!(zero, Ok(rgb));
            }
        }
        Err(Error::OutOfRange { parameter, .. }) => {
            assert!(!in_range, "rejected valid input {:?}", input);
            assert!(matches!(parameter, "hue" | "saturation" | "brightness"));
        }
        Err(other) => panic!("unexpected error {other:?}"),
    }
});
