//! The TOC (`INFO`) model: a header entry plus the archive's entry list.

use log::debug;

use super::cipher;
use super::entry::{ENTRY_SIZE, FileEntry};
use crate::error::{FileKind, GameArcError};

/// A parsed table of contents.
///
/// The first 48 bytes of the on-disk buffer are the header — itself a
/// [`FileEntry`], and also the cipher's key material — followed immediately by
/// `header.file_count` more entries. The header is kept separate from
/// `entries` rather than folded into `entries[0]`, matching the original
/// archive's on-disk layout (see `DESIGN.md` for why this resolves the
/// header/entry-0 open question).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toc {
	header: FileEntry,
	entries: Vec<FileEntry>,
}

impl Toc {
	/// Parses a TOC from already-decrypted bytes.
	pub fn from_plain_bytes(data: &[u8]) -> Result<Self, GameArcError> {
		if data.len() < ENTRY_SIZE {
			return Err(GameArcError::Truncated {
				kind: FileKind::Toc,
			});
		}

		let header = FileEntry::from_bytes(&data[0..ENTRY_SIZE]);
		let file_count = header.file_count as usize;
		let required = ENTRY_SIZE + file_count * ENTRY_SIZE;
		if data.len() < required {
			return Err(GameArcError::Truncated {
				kind: FileKind::Toc,
			});
		}

		let mut entries = Vec::with_capacity(file_count);
		for i in 0..file_count {
			let offset = ENTRY_SIZE + i * ENTRY_SIZE;
			entries.push(FileEntry::from_bytes(&data[offset..offset + ENTRY_SIZE]));
		}

		debug!("toc: parsed {} entries", entries.len());
		Ok(Self {
			header,
			entries,
		})
	}

	/// Decrypts `data` and parses it as a TOC.
	pub fn from_encrypted_bytes(data: &[u8]) -> Result<Self, GameArcError> {
		Self::from_plain_bytes(&cipher::decrypt(data))
	}

	/// Serializes the TOC back to its plain (unencrypted) on-disk form.
	pub fn to_plain_bytes(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(ENTRY_SIZE * (self.entries.len() + 1));
		out.extend_from_slice(&self.header.to_bytes());
		for entry in &self.entries {
			out.extend_from_slice(&entry.to_bytes());
		}
		out
	}

	/// Serializes and encrypts the TOC back to its on-disk form.
	pub fn to_encrypted_bytes(&self) -> Vec<u8> {
		cipher::encrypt(&self.to_plain_bytes())
	}

	/// Returns the header entry's declared `file_count`.
	pub fn file_count(&self) -> usize {
		self.header.file_count as usize
	}

	/// Returns the archive's entries, in on-disk order.
	pub fn entries(&self) -> &[FileEntry] {
		&self.entries
	}

	/// Returns the archive's entries, in on-disk order, mutably.
	pub fn entries_mut(&mut self) -> &mut [FileEntry] {
		&mut self.entries
	}

	/// Finds an entry by name (case-sensitive, matching the stripped `name()`).
	pub fn find_entry(&self, name: &str) -> Option<&FileEntry> {
		self.entries.iter().find(|e| e.name() == name)
	}

	/// Finds an entry by name, mutably.
	pub fn find_entry_mut(&mut self, name: &str) -> Option<&mut FileEntry> {
		self.entries.iter_mut().find(|e| e.name() == name)
	}

	/// Recomputes `block_offset` for every entry in declared order: entries with
	/// `block_count > 0` are packed back-to-back starting at block 0; entries with
	/// `block_count == 0` are left untouched and consume no space.
	pub fn recalculate_offsets(&mut self) {
		let mut cursor = 0u32;
		for entry in &mut self.entries {
			if entry.block_count == 0 {
				continue;
			}
			entry.block_offset = cursor;
			cursor += entry.block_count;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn toc_with_block_counts(counts: &[u32]) -> Toc {
		let header = FileEntry::new("", 0, 0, 0, counts.len() as u32);
		let entries = counts.iter().map(|&c| FileEntry::new("f", 0, 0xDEAD, c, 0)).collect();
		Toc {
			header,
			entries,
		}
	}

	#[test]
	fn offset_recomputation_matches_scenario() {
		let mut toc = toc_with_block_counts(&[3, 0, 5, 2]);
		toc.recalculate_offsets();

		let offsets: Vec<u32> = toc.entries().iter().map(|e| e.block_offset).collect();
		assert_eq!(offsets, vec![0, 0xDEAD, 3, 8]);
	}

	#[test]
	fn parse_serialize_round_trip_without_mutation() {
		let header = FileEntry::new("HEADER", 0, 0, 0, 2);
		let entries = vec![FileEntry::new("a.bin", 10, 0, 1, 0), FileEntry::new("b.bin", 4096, 1, 2, 0)];
		let toc = Toc {
			header,
			entries,
		};

		let encrypted = toc.to_encrypted_bytes();
		let parsed = Toc::from_encrypted_bytes(&encrypted).unwrap();
		assert_eq!(parsed, toc);
		assert_eq!(parsed.to_encrypted_bytes(), encrypted);
	}

	#[test]
	fn truncated_buffer_errors() {
		assert!(matches!(Toc::from_plain_bytes(&[1u8; 10]), Err(GameArcError::Truncated { .. })));
	}
}
