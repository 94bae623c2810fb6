//! Archive I/O: reading and writing asset payloads at block-aligned positions
//! inside the `GAME` data blob.
//!
//! This layer only ever deals in whole payloads at a `FileEntry`'s declared
//! `block_offset`/`size`; it never touches the TOC itself and never writes the
//! padding between one payload and the next block boundary — that padding is
//! whatever the underlying storage already had there (zeros, for a freshly
//! created output file).

use std::io::{Read, Seek, SeekFrom, Write};

use crate::toc::{BLOCK_SIZE, FileEntry};

/// Reads a single entry's payload out of a `GAME` blob.
///
/// Entries with `block_count == 0` reference no data and are read back as an
/// empty buffer without touching `reader`.
pub fn read_payload<R: Read + Seek>(reader: &mut R, entry: &FileEntry) -> std::io::Result<Vec<u8>> {
	if entry.block_count == 0 {
		return Ok(Vec::new());
	}

	reader.seek(SeekFrom::Start(entry.block_offset as u64 * BLOCK_SIZE as u64))?;
	let mut buf = vec![0u8; entry.size as usize];
	reader.read_exact(&mut buf)?;
	Ok(buf)
}

/// Writes a single entry's payload into a `GAME` blob at its declared block offset.
///
/// Entries with `block_count == 0` are a no-op: there is no blob space reserved
/// for them.
pub fn write_payload<W: Write + Seek>(writer: &mut W, entry: &FileEntry, payload: &[u8]) -> std::io::Result<()> {
	if entry.block_count == 0 {
		return Ok(());
	}

	writer.seek(SeekFrom::Start(entry.block_offset as u64 * BLOCK_SIZE as u64))?;
	writer.write_all(payload)
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	#[test]
	fn zero_block_count_reads_empty_without_seeking() {
		let mut reader = Cursor::new(Vec::<u8>::new());
		let entry = FileEntry::new("empty", 0, 0, 0, 0);
		assert_eq!(read_payload(&mut reader, &entry).unwrap(), Vec::<u8>::new());
	}

	#[test]
	fn write_then_read_round_trip_at_block_offset() {
		let entry = FileEntry::new("a", 10, 2, 1, 0);
		let mut blob = Cursor::new(vec![0u8; 4 * BLOCK_SIZE]);
		write_payload(&mut blob, &entry, b"0123456789").unwrap();

		let mut reader = Cursor::new(blob.into_inner());
		let data = read_payload(&mut reader, &entry).unwrap();
		assert_eq!(data, b"0123456789");
	}
}
