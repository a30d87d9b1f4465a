//! Fuzz target for color string parsing.
//!
//! Parsing arbitrary text must never panic, and anything that parses must
//! parse again to the same value from its display form.

#![no_main]

use ergonomic_color::rgb::Rgb;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(rgb) = data.parse::<Rgb>() {
        let shown = rgb.to_string();
        assert_eq!(shown.parse::<Rgb>(), Ok(rgb), "display form {:?} did not parse back", shown);
    }
});
