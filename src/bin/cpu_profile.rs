//! CPU profiling binary for flamegraph analysis.
//!
//! Run with:
//! ```bash
//! cargo flamegraph --bin cpu-profile
//! ```
//!
//! This generates flamegraph.svg showing CPU time spent in each function.

use ergonomic_color::prelude::*;
use std::hint::black_box;

fn main() {
    println!("=== CPU Profiling for ergonomic-color ===\n");
    println!("Running CPU-intensive workloads for flamegraph analysis...\n");

    // Run each workload multiple times to get good sampling
    for iteration in 1..=3 {
        println!("--- Iteration {} ---", iteration);

        profile_rgb_to_hsb();
        profile_hsb_to_rgb();
        profile_display_string();
        profile_parse();
    }

    println!("\n=== CPU Profiling Complete ===");
    println!("If run with `cargo flamegraph`, check flamegraph.svg");
}

/// Sweep the whole RGB cube once.
fn profile_rgb_to_hsb() {
    let mut count = 0usize;
    for r in 0..=255u8 {
        for g in 0..=255u8 {
            for b in 0..=255u8 {
                black_box(rgb_to_hsb(black_box(Rgb::new(r, g, b))));
                count += 1;
            }
        }
    }
    println!("  rgb_to_hsb: {} conversions", count);
}

/// Walk the hue wheel at several saturation/brightness levels.
fn profile_hsb_to_rgb() {
    const STEPS: usize = 100_000;
    let levels = [0.25f32, 0.5, 0.75, 1.0];

    for &s in &levels {
        for &b in &levels {
            for i in 0..STEPS {
                let hue = 360.0 * i as f32 / STEPS as f32;
                let _ = black_box(hsb_to_rgb(black_box(hue), s, b));
            }
        }
    }
    println!("  hsb_to_rgb: {} conversions", STEPS * levels.len() * levels.len());
}

/// Mix of named hits and hex fallbacks.
fn profile_display_string() {
    const ITERATIONS: usize = 100_000;

    for i in 0..ITERATIONS {
        let rgb = Rgb::from_hex((i as u32).wrapping_mul(2_654_435_761) & 0x00FF_FFFF);
        black_box(display_string(black_box(rgb)));
    }
    for (_, rgb) in NamedColorTable::iter() {
        for _ in 0..ITERATIONS / 100 {
            black_box(display_string(black_box(rgb)));
        }
    }
    println!("  display_string: {} calls", ITERATIONS + NamedColorTable::len() * ITERATIONS / 100);
}

fn profile_parse() {
    const ITERATIONS: usize = 50_000;
    let inputs = ["#112233", "aabbcc", "#f0a", "CornflowerBlue", "yellowgreen", "bogus"];

    for _ in 0..ITERATIONS {
        for input in &inputs {
            let _ = black_box(black_box(*input).parse::<Rgb>());
        }
    }
    println!("  parse: {} calls", ITERATIONS * inputs.len());
}
