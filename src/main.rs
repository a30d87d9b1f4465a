//! Command-line front end for the ergonomic-color library.

use clap::{Parser, Subcommand};
use ergonomic_color::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "ergonomic-color", version, about = "Convert between RGB and HSB colors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an RGB triple to HSB and print its display name.
    Rgb {
        /// Red channel (0-255).
        r: u8,
        /// Green channel (0-255).
        g: u8,
        /// Blue channel (0-255).
        b: u8,
    },
    /// Convert hue/saturation/brightness to RGB.
    Hsb {
        /// Hue in degrees (0-360).
        #[arg(allow_negative_numbers = true)]
        hue: f32,
        /// Saturation (0-1).
        #[arg(allow_negative_numbers = true)]
        saturation: f32,
        /// Brightness (0-1).
        #[arg(allow_negative_numbers = true)]
        brightness: f32,
    },
    /// Parse a color name or hex string.
    Name {
        /// A known color name, `#RRGGBB`, `RRGGBB` or `#RGB`.
        text: String,
    },
}

fn print_rgb(rgb: Rgb) {
    let hsb = rgb_to_hsb(rgb);
    println!("RGB:        {}, {}, {}", rgb.r, rgb.g, rgb.b);
    println!("Hex:        #{:06X}", rgb.to_hex());
    println!("Hue:        {:.2}", hsb.hue);
    println!("Saturation: {:.4}", hsb.saturation);
    println!("Brightness: {:.4}", hsb.brightness);
    println!("Display:    {}", display_string(rgb));
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli.command);

    match cli.command {
        Command::Rgb { r, g, b } => print_rgb(Rgb::new(r, g, b)),
        Command::Hsb {
            hue,
            saturation,
            brightness,
        } => print_rgb(hsb_to_rgb(hue, saturation, brightness)?),
        Command::Name { text } => print_rgb(text.parse()?),
    }

    Ok(())
}
