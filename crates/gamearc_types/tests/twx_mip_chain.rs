//! Re-encoding a BC3 texture must preserve the mip-chain length inferred at
//! parse time, even when that length is short of a full chain down to 4x4 —
//! the container has no business inventing extra mip levels the original
//! payload never implied.

use gamearc_types::twx::{Format, Twx};

const HEADER_SIZE: usize = 48;
const MAGIC: u32 = 0x30_58_57_54;

fn header_for(width: u16, height: u16, tag: u16) -> [u8; HEADER_SIZE] {
	let mut header = [0u8; HEADER_SIZE];
	header[0..4].copy_from_slice(&MAGIC.to_le_bytes());
	header[8..10].copy_from_slice(&width.to_le_bytes());
	header[10..12].copy_from_slice(&height.to_le_bytes());
	header[12..14].copy_from_slice(&tag.to_le_bytes());
	header
}

#[test]
fn partial_mip_chain_is_preserved_through_re_encode() {
	// 32x32 BC3 with only one mip level below the base (16x16), deliberately
	// short of a full chain down to 4x4 (which would need three).
	let level0_len = (32 / 4) * (32 / 4) * 16;
	let level1_len = (16 / 4) * (16 / 4) * 16;
	let mut bytes = header_for(32, 32, 11).to_vec();
	bytes.extend(vec![0u8; level0_len + level1_len]);

	let twx = Twx::from_bytes(&bytes).unwrap();
	assert_eq!(twx.format(), Format::Bc3);
	assert_eq!(twx.max_mipmap_level(), 1, "payload only implies one mip level below the base");

	let rgba = twx.decode_to_rgba();
	let rebuilt = twx.with_encoded_rgba(&rgba, 10);

	assert_eq!(
		rebuilt.max_mipmap_level(),
		1,
		"re-encoding must not invent extra mip levels beyond what the source payload implied"
	);

	let rebuilt_bytes = rebuilt.to_bytes();
	let reparsed = Twx::from_bytes(&rebuilt_bytes).expect("re-encoded payload must satisfy its own mip-chain length");
	assert_eq!(reparsed.max_mipmap_level(), 1);
	assert_eq!(rebuilt_bytes.len() - HEADER_SIZE, level0_len + level1_len);
}
