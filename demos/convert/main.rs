//! TWX/PNG Texture Converter
//!
//! Converts TWX textures to PNG for editing and back again, keeping the
//! original container's header and block format untouched.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example convert -- to-png --input some/texture.twx --output some/texture.twx.png
//! cargo run --example convert -- to-twx --original some/texture.twx --input some/texture.twx.png --output some/texture.twx
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use gamearc_rs::prelude::Twx;
use image::{ImageBuffer, RgbaImage};
use log::info;

#[derive(Parser)]
#[command(name = "convert")]
#[command(about = "Convert TWX textures to PNG and back", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a TWX texture's base mip level to a PNG file.
	ToPng {
		/// Input TWX file path.
		#[arg(value_name = "INPUT_TWX")]
		input: PathBuf,

		/// Output PNG file path.
		#[arg(value_name = "OUTPUT_PNG")]
		output: PathBuf,
	},

	/// Re-encode a PNG into an existing TWX texture's container and format.
	ToTwx {
		/// Path of the original TWX file, whose header and format are preserved.
		#[arg(long)]
		original: PathBuf,

		/// Input PNG file path, matching the original texture's base mip dimensions.
		#[arg(value_name = "INPUT_PNG")]
		input: PathBuf,

		/// Output TWX file path.
		#[arg(value_name = "OUTPUT_TWX")]
		output: PathBuf,

		/// BC1/BC3 block-codec quality, 0 (fastest) to 18 (best).
		#[arg(long, default_value_t = 10)]
		quality: u8,
	},
}

fn main() -> Result<()> {
	env_logger::init();
	let cli = Cli::parse();

	match cli.command {
		Commands::ToPng {
			input,
			output,
		} => to_png(&input, &output),
		Commands::ToTwx {
			original,
			input,
			output,
			quality,
		} => to_twx(&original, &input, &output, quality),
	}
}

fn to_png(input: &PathBuf, output: &PathBuf) -> Result<()> {
	let data = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
	let twx = Twx::from_bytes(&data)?;

	info!("decoding {} ({}x{}, {:?})", input.display(), twx.width(), twx.height(), twx.format());
	let rgba = twx.decode_to_rgba();
	let image: RgbaImage = ImageBuffer::from_raw(u32::from(twx.width()), u32::from(twx.height()), rgba)
		.context("decoded buffer did not match the texture's declared dimensions")?;

	if let Some(parent) = output.parent() {
		fs::create_dir_all(parent)?;
	}
	image.save(output).with_context(|| format!("writing {}", output.display()))
}

fn to_twx(original: &PathBuf, input: &PathBuf, output: &PathBuf, quality: u8) -> Result<()> {
	let original_bytes = fs::read(original).with_context(|| format!("reading {}", original.display()))?;
	let original_twx = Twx::from_bytes(&original_bytes)?;

	let image = image::open(input).with_context(|| format!("reading {}", input.display()))?.to_rgba8();
	ensure!(
		image.width() == u32::from(original_twx.width()) && image.height() == u32::from(original_twx.height()),
		"PNG is {}x{}, but the original texture is {}x{}",
		image.width(),
		image.height(),
		original_twx.width(),
		original_twx.height()
	);

	info!("encoding {} as {:?} at quality {quality}", output.display(), original_twx.format());
	let rebuilt = original_twx.with_encoded_rgba(image.as_raw(), quality);

	if let Some(parent) = output.parent() {
		fs::create_dir_all(parent)?;
	}
	fs::write(output, rebuilt.to_bytes()).with_context(|| format!("writing {}", output.display()))
}
