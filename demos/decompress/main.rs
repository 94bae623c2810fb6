//! ALZ Batch Decompressor
//!
//! The inverse of the `compress` demo: recursively decompresses every file
//! under an input directory, mirroring the directory structure into an
//! output directory. Files without a recognized ALZ header pass through
//! unchanged.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example decompress -- --input-dir resources/extracted --output-dir resources/decompressed
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gamearc_rs::prelude::alz;
use log::info;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "decompress")]
#[command(about = "Decompress every file under a directory with the ALZ codec", long_about = None)]
struct Cli {
	/// Input directory of ALZ-compressed (or plain) files.
	#[arg(long, default_value = "resources/extracted_resources")]
	input_dir: PathBuf,

	/// Output directory for decompressed files, mirroring `input_dir`'s layout.
	#[arg(long, default_value = "resources/decompressed_resources")]
	output_dir: PathBuf,
}

fn main() -> Result<()> {
	env_logger::init();
	let cli = Cli::parse();

	fs::create_dir_all(&cli.output_dir)?;

	let mut paths: Vec<PathBuf> = WalkDir::new(&cli.input_dir)
		.into_iter()
		.filter_map(Result::ok)
		.filter(|e| e.file_type().is_file())
		.map(|e| e.path().strip_prefix(&cli.input_dir).unwrap().to_path_buf())
		.collect();
	paths.sort();

	for relative in &paths {
		info!("decompressing {}", relative.display());
		let data = fs::read(cli.input_dir.join(relative)).with_context(|| format!("reading {}", relative.display()))?;
		let decompressed = alz::decompress(&data);

		let output_path = cli.output_dir.join(relative);
		if let Some(parent) = output_path.parent() {
			fs::create_dir_all(parent)?;
		}
		fs::write(&output_path, decompressed).with_context(|| format!("writing {}", output_path.display()))?;
	}

	info!("decompressed {} files", paths.len());
	Ok(())
}
