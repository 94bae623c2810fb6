//! Archive-level integration tests: unpacking a `GAME`/`INFO` pair and
//! repacking it with no edits must reproduce the original bytes.

use std::io::Cursor;

use gamearc_types::archive;
use gamearc_types::toc::{BLOCK_SIZE, FileEntry, Toc};

fn build_archive(payloads: &[(&str, &[u8])]) -> (Vec<u8>, Vec<u8>) {
	let entries: Vec<FileEntry> = payloads
		.iter()
		.map(|(name, data)| {
			let mut entry = FileEntry::new(name, 0, 0, 0, 0);
			entry.update_info(data);
			entry
		})
		.collect();

	let header = FileEntry::new("", 0, 0, 0, entries.len() as u32);
	let mut toc = toc_from_parts(&header, &entries);
	toc.recalculate_offsets();

	let total_blocks: u32 = toc.entries().iter().map(|e| e.block_count).sum();
	let mut writer = Cursor::new(vec![0u8; total_blocks as usize * BLOCK_SIZE]);
	for (entry, (_, data)) in toc.entries().iter().zip(payloads) {
		archive::write_payload(&mut writer, entry, data).unwrap();
	}

	(toc.to_encrypted_bytes(), writer.into_inner())
}

fn toc_from_parts(header: &FileEntry, entries: &[FileEntry]) -> Toc {
	let mut bytes = header.to_bytes().to_vec();
	for entry in entries {
		bytes.extend_from_slice(&entry.to_bytes());
	}
	Toc::from_plain_bytes(&bytes).unwrap()
}

#[test]
fn unpack_then_pack_with_no_edits_reproduces_original_bytes() {
	let payloads: Vec<(&str, &[u8])> =
		vec![("readme.txt", b"hello world"), ("empty.bin", b""), ("data.bin", &[0xABu8; 5000])];
	let (info, game) = build_archive(&payloads);

	// Unpack: decrypt the TOC and read every entry's payload out of the blob.
	let toc = Toc::from_encrypted_bytes(&info).unwrap();
	let mut reader = Cursor::new(game.clone());
	let unpacked: Vec<Vec<u8>> = toc.entries().iter().map(|e| archive::read_payload(&mut reader, e).unwrap()).collect();

	for (expected, actual) in payloads.iter().map(|(_, d)| *d).zip(&unpacked) {
		assert_eq!(expected, actual.as_slice());
	}

	// Pack with no edits: re-encrypt the unchanged TOC and rewrite every payload
	// verbatim at its already-computed offset.
	let mut repacked_toc = toc.clone();
	repacked_toc.recalculate_offsets();
	assert_eq!(repacked_toc.to_encrypted_bytes(), info, "unedited repack must reproduce the original INFO bytes");

	let mut writer = Cursor::new(vec![0u8; game.len()]);
	for (entry, data) in repacked_toc.entries().iter().zip(&unpacked) {
		archive::write_payload(&mut writer, entry, data).unwrap();
	}
	let repacked_game = writer.into_inner();

	for entry in repacked_toc.entries() {
		let start = entry.block_offset as usize * BLOCK_SIZE;
		let end = start + entry.size as usize;
		assert_eq!(
			&repacked_game[start..end],
			&game[start..end],
			"{}: payload bytes at its declared window must be unchanged",
			entry.name()
		);
	}
}
