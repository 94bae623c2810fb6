//! Archive Packer
//!
//! Rebuilds an `INFO.DAT`/`GAME.DAT` pair from a directory of (possibly
//! edited) extracted files. Entries whose file is missing from the edited
//! directory fall back to the corresponding file in the original extraction,
//! so a partial edit only touches the files actually replaced.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example pack -- --info resources/original_gamefiles/INFO.DAT \
//!     --original-extract-dir resources/extracted_resources \
//!     --extract-dir resources/extracted_resources_edited \
//!     --output-dir resources/packed_gamefiles
//! ```

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use gamearc_rs::prelude::{Toc, archive};
use log::info;

#[derive(Parser)]
#[command(name = "pack")]
#[command(about = "Rebuild an INFO/GAME archive pair from an extracted (and possibly edited) directory", long_about = None)]
struct Cli {
	/// Path of the original encrypted INFO.DAT table of contents.
	#[arg(long, default_value = "resources/original_gamefiles/INFO.DAT")]
	info: PathBuf,

	/// Directory holding the unmodified extraction, used as a fallback source.
	#[arg(long, default_value = "resources/extracted_resources")]
	original_extract_dir: PathBuf,

	/// Directory holding edited files to pack in preference to the original extraction.
	#[arg(long, default_value = "resources/extracted_resources_edited")]
	extract_dir: PathBuf,

	/// Output directory for the rebuilt INFO.DAT/GAME.DAT pair.
	#[arg(long, default_value = "resources/packed_gamefiles")]
	output_dir: PathBuf,
}

fn main() -> Result<()> {
	env_logger::init();
	let cli = Cli::parse();

	fs::create_dir_all(&cli.output_dir)?;

	let info_bytes = fs::read(&cli.info).with_context(|| format!("reading {}", cli.info.display()))?;
	let mut toc = Toc::from_encrypted_bytes(&info_bytes)?;

	for entry in toc.entries_mut() {
		let edited_path = cli.extract_dir.join(entry.name());
		if edited_path.exists() {
			info!("updating {}", entry.name());
			let data = fs::read(&edited_path).with_context(|| format!("reading {}", edited_path.display()))?;
			entry.update_info(&data);
		}
	}
	toc.recalculate_offsets();

	fs::write(cli.output_dir.join("INFO.DAT"), toc.to_encrypted_bytes())?;

	let game_file = File::create(cli.output_dir.join("GAME.DAT"))?;
	let mut writer = std::io::BufWriter::new(game_file);

	for entry in toc.entries() {
		info!("packing {}", entry.name());
		let edited_path = cli.extract_dir.join(entry.name());
		let original_path = cli.original_extract_dir.join(entry.name());

		let data = if edited_path.exists() {
			fs::read(&edited_path)
		} else if original_path.exists() {
			fs::read(&original_path)
		} else {
			bail!("{}: neither edited nor original file exists", entry.name());
		}
		.with_context(|| format!("reading payload for {}", entry.name()))?;

		archive::write_payload(&mut writer, entry, &data)
			.with_context(|| format!("writing payload for {}", entry.name()))?;
	}

	info!("packed {} entries", toc.entries().len());
	Ok(())
}
