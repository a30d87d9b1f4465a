//! Fuzz target for the RGB -> HSB -> RGB roundtrip.
//!
//! Every channel must come back within one step of the original.

#![no_main]

use ergonomic_color::hsb::rgb_to_hsb;
use ergonomic_color::rgb::Rgb;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 3]| {
    let rgb = Rgb::from(data);
    let hsb = rgb_to_hsb(rgb);

    assert!((0.0..360.0).contains(&hsb.hue), "hue out of range: {:?}", hsb);
    assert!((0.0..=1.0).contains(&hsb.saturation), "saturation out of range: {:?}", hsb);
    assert!((0.0..=1.0).contains(&hsb.brightness), "brightness out of range: {:?}", hsb);

    let back = hsb.to_rgb().expect("rgb_to_hsb output must be valid input");
    for (a, b) in rgb.into_array().into_iter().zip(back.into_array()) {
        assert!(a.abs_diff(b) <= 1, "{:?} came back as {:?}", rgb, back);
    }
});
