//! Memory profiling binary using dhat.
//!
//! Run with: cargo run --bin memory-profile --features dhat-heap

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use ergonomic_color::prelude::*;

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    println!("=== Memory Profiling for ergonomic-color ===\n");

    // The named-color index is built lazily on first use
    profile_index_build();

    // Conversions themselves should not allocate
    profile_conversions();

    // Display strings allocate one String each
    profile_display_strings();

    // Parsing lowercases the input for the name lookup
    profile_parse();

    println!("\n=== Profiling Complete ===");
    println!("Check dhat-heap.json for detailed heap analysis");
}

fn profile_index_build() {
    println!("--- Index Build ---");
    let name = NamedColorTable::name_of(Rgb::new(255, 0, 0));
    println!("First lookup: {:?}", name);
}

fn profile_conversions() {
    println!("--- Conversions ---");

    let mut total = 0u64;
    for r in (0..=255u8).step_by(3) {
        for g in (0..=255u8).step_by(3) {
            for b in (0..=255u8).step_by(3) {
                let hsb = rgb_to_hsb(Rgb::new(r, g, b));
                if let Ok(back) = hsb.to_rgb() {
                    total += back.r as u64;
                }
            }
        }
    }

    println!("Completed strided RGB cube round trip (checksum {})", total);
}

fn profile_display_strings() {
    println!("--- Display Strings ---");

    let strings: Vec<String> = (0..1000u32)
        .map(|i| display_string(Rgb::from_hex(i * 16_777)))
        .collect();
    let named = strings.iter().filter(|s| !s.starts_with('#')).count();

    println!("Created {} display strings ({} named)", strings.len(), named);
}

fn profile_parse() {
    println!("--- Parsing ---");

    let inputs = ["#112233", "LightGoldenrodYellow", "#abc", "not a color"];
    let mut ok = 0;
    for _ in 0..1000 {
        for input in &inputs {
            if input.parse::<Rgb>().is_ok() {
                ok += 1;
            }
        }
    }

    println!("Parsed {} inputs ({} succeeded)", inputs.len() * 1000, ok);
}
