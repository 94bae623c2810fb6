//! Archive Unpacker
//!
//! Decrypts an `INFO.DAT` table of contents and extracts every entry's
//! payload out of the paired `GAME.DAT` blob into an output directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example unpack -- --info resources/original_gamefiles/INFO.DAT \
//!     --game resources/original_gamefiles/GAME.DAT --output-dir resources/extracted_resources
//! ```

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gamearc_rs::prelude::{Toc, archive};
use log::info;

#[derive(Parser)]
#[command(name = "unpack")]
#[command(about = "Extract every entry in an INFO/GAME archive pair to a directory", long_about = None)]
struct Cli {
	/// Path of the encrypted INFO.DAT table of contents.
	#[arg(long, default_value = "resources/original_gamefiles/INFO.DAT")]
	info: PathBuf,

	/// Path of the GAME.DAT data blob.
	#[arg(long, default_value = "resources/original_gamefiles/GAME.DAT")]
	game: PathBuf,

	/// Output directory path.
	#[arg(long, default_value = "resources/extracted_resources")]
	output_dir: PathBuf,
}

fn main() -> Result<()> {
	env_logger::init();
	let cli = Cli::parse();

	fs::create_dir_all(&cli.output_dir)?;

	let info_bytes = fs::read(&cli.info).with_context(|| format!("reading {}", cli.info.display()))?;
	let toc = Toc::from_encrypted_bytes(&info_bytes)?;

	let game_file = File::open(&cli.game).with_context(|| format!("opening {}", cli.game.display()))?;
	let mut reader = BufReader::new(game_file);

	for entry in toc.entries() {
		info!("unpacking {}", entry.name());
		let data = archive::read_payload(&mut reader, entry)
			.with_context(|| format!("reading payload for {}", entry.name()))?;

		let output_path = cli.output_dir.join(entry.name());
		if let Some(parent) = output_path.parent() {
			fs::create_dir_all(parent)?;
		}
		fs::write(&output_path, data).with_context(|| format!("writing {}", output_path.display()))?;
	}

	info!("unpacked {} entries", toc.entries().len());
	Ok(())
}
