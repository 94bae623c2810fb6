//! `FileEntry` — a single fixed 48-byte record inside a TOC.

use std::fmt::Formatter;

/// Size of one record within the TOC, in bytes.
pub const ENTRY_SIZE: usize = 0x30;

/// Size of one block within the `GAME` data blob, in bytes.
pub const BLOCK_SIZE: usize = 0x800;

const NAME_LEN: usize = 0x20;

/// A single 48-byte record in the TOC: a name, a payload size, a block-aligned
/// offset into the `GAME` blob, the number of blocks the payload occupies, and
/// (meaningful only on the header entry) the total number of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileEntry {
	raw_name: [u8; NAME_LEN],
	/// Payload byte length.
	pub size: u32,
	/// Starting block index within the `GAME` blob.
	pub block_offset: u32,
	/// Number of 2048-byte blocks the payload occupies.
	pub block_count: u32,
	/// Total number of entries in the archive. Meaningful only in the header entry.
	pub file_count: u32,
}

impl FileEntry {
	/// Creates an entry from a name and the rest of its fields.
	pub fn new(name: &str, size: u32, block_offset: u32, block_count: u32, file_count: u32) -> Self {
		let mut raw_name = [0u8; NAME_LEN];
		let bytes = name.as_bytes();
		let len = bytes.len().min(NAME_LEN);
		raw_name[..len].copy_from_slice(&bytes[..len]);

		Self {
			raw_name,
			size,
			block_offset,
			block_count,
			file_count,
		}
	}

	/// Returns the entry's name, with trailing NUL padding stripped.
	pub fn name(&self) -> String {
		String::from_utf8_lossy(&self.raw_name).trim_end_matches('\0').to_string()
	}

	/// Parses a single 48-byte record from `data`, which must be at least
	/// [`ENTRY_SIZE`] bytes long.
	pub fn from_bytes(data: &[u8]) -> Self {
		let mut raw_name = [0u8; NAME_LEN];
		raw_name.copy_from_slice(&data[0x00..0x20]);
		let size = u32::from_le_bytes(data[0x20..0x24].try_into().unwrap());
		let block_offset = u32::from_le_bytes(data[0x24..0x28].try_into().unwrap());
		let block_count = u32::from_le_bytes(data[0x28..0x2C].try_into().unwrap());
		let file_count = u32::from_le_bytes(data[0x2C..0x30].try_into().unwrap());

		Self {
			raw_name,
			size,
			block_offset,
			block_count,
			file_count,
		}
	}

	/// Serializes the entry back to its 48-byte on-disk form.
	pub fn to_bytes(&self) -> [u8; ENTRY_SIZE] {
		let mut buf = [0u8; ENTRY_SIZE];
		buf[0x00..0x20].copy_from_slice(&self.raw_name);
		buf[0x20..0x24].copy_from_slice(&self.size.to_le_bytes());
		buf[0x24..0x28].copy_from_slice(&self.block_offset.to_le_bytes());
		buf[0x28..0x2C].copy_from_slice(&self.block_count.to_le_bytes());
		buf[0x2C..0x30].copy_from_slice(&self.file_count.to_le_bytes());
		buf
	}

	/// Updates `size`/`block_count` for a new payload and resets `block_offset` to
	/// `0`, to be filled in later by [`crate::toc::Toc::recalculate_offsets`].
	pub fn update_info(&mut self, payload: &[u8]) {
		self.size = payload.len() as u32;
		self.block_count = (self.size as usize).div_ceil(BLOCK_SIZE) as u32;
		self.block_offset = 0;
	}
}

impl std::fmt::Display for FileEntry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"FileEntry {{ name: '{}', size: {}, block_offset: {}, block_count: {} }}",
			self.name(),
			self.size,
			self.block_offset,
			self.block_count
		)
	}
}
