//! BC3 (S3TC/DXT5) block codec.
//!
//! Like [`crate::twx::bc1`], the interpolated-alpha and color block math is
//! delegated to `squish` rather than hand-rolled.

use squish::{Algorithm, Format, Params};

pub(crate) const BLOCK_SIZE: usize = 16;

fn params_for(quality: u8) -> Params {
	let algorithm = if quality >= 12 {
		Algorithm::IterativeClusterFit
	} else if quality >= 4 {
		Algorithm::ClusterFit
	} else {
		Algorithm::RangeFit
	};
	Params {
		algorithm,
		..Params::default()
	}
}

/// Decodes a single BC3 mip level into a tightly packed RGBA buffer.
pub fn decode(data: &[u8], width: u32, height: u32) -> Vec<u8> {
	let (width, height) = (width as usize, height as usize);
	let mut out = vec![0u8; width * height * 4];
	Format::Bc3.decompress(data, width, height, &mut out);
	out
}

/// Encodes a single RGBA mip level into a BC3 level at the given quality (0..18).
pub fn encode(rgba: &[u8], width: u32, height: u32, quality: u8) -> Vec<u8> {
	let (width, height) = (width as usize, height as usize);
	let mut out = vec![0u8; Format::Bc3.compressed_size(width, height)];
	Format::Bc3.compress(rgba, width, height, params_for(quality), &mut out);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn solid_block_round_trips_losslessly() {
		let width = 4u32;
		let height = 4u32;
		let rgba: Vec<u8> = std::iter::repeat([10u8, 200, 70, 128]).take(16).flatten().collect();
		let encoded = encode(&rgba, width, height, 10);
		assert_eq!(encoded.len(), BLOCK_SIZE);
		let decoded = decode(&encoded, width, height);
		for chunk in decoded.chunks_exact(4) {
			assert_eq!(chunk, &[10, 200, 70, 128]);
		}
	}

	#[test]
	fn image_round_trip_shape() {
		let width = 8u32;
		let height = 4u32;
		let rgba: Vec<u8> = (0..(width as usize * height as usize * 4)).map(|v| (v % 256) as u8).collect();
		let encoded = encode(&rgba, width, height, 10);
		assert_eq!(encoded.len(), (width as usize / 4) * (height as usize / 4) * BLOCK_SIZE);
		let decoded = decode(&encoded, width, height);
		assert_eq!(decoded.len(), rgba.len());
	}
}
