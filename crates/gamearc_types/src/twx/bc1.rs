//! BC1 (S3TC/DXT1) block codec.
//!
//! The block math itself (5:6:5 endpoints, 2-bit palette indices, the
//! 4-color/3-color mode split) is delegated to `squish` rather than
//! hand-rolled, the same way the original Python tooling delegates to
//! `quicktex` and the way `a3-paa` (an S3TC-handling crate in this
//! corpus) delegates to `squish` itself.

use squish::{Algorithm, Format, Params};

pub(crate) const BLOCK_SIZE: usize = 8;

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

/// Decodes a full BC1 image into a tightly packed RGBA buffer.
pub fn decode(data: &[u8], width: u16, height: u16) -> Vec<u8> {
	let (width, height) = (usize::from(width), usize::from(height));
	let mut out = vec![0u8; width * height * 4];
	Format::Bc1.decompress(data, width, height, &mut out);
	out
}

/// Encodes an RGBA buffer into a BC1 image at the given quality (0..18).
pub fn encode(rgba: &[u8], width: u16, height: u16, quality: u8) -> Vec<u8> {
	let (width, height) = (usize::from(width), usize::from(height));
	let mut out = vec![0u8; Format::Bc1.compressed_size(width, height)];
	Format::Bc1.compress(rgba, width, height, params_for(quality), &mut out);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn solid_color_image_round_trips_losslessly() {
		let width = 4u16;
		let height = 4u16;
		let rgba: Vec<u8> = std::iter::repeat([200u8, 40, 90, 255]).take(16).flatten().collect();
		let encoded = encode(&rgba, width, height, 10);
		assert_eq!(encoded.len(), BLOCK_SIZE);
		let decoded = decode(&encoded, width, height);
		for chunk in decoded.chunks_exact(4) {
			assert_eq!(&chunk[0..3], &[200, 40, 90]);
		}
	}

	#[test]
	fn image_round_trip_shape() {
		let width = 8u16;
		let height = 4u16;
		let rgba: Vec<u8> = (0..(width as usize * height as usize * 4)).map(|v| (v % 256) as u8).collect();
		let encoded = encode(&rgba, width, height, 10);
		assert_eq!(encoded.len(), (width as usize / 4) * (height as usize / 4) * BLOCK_SIZE);
		let decoded = decode(&encoded, width, height);
		assert_eq!(decoded.len(), rgba.len());
	}
}
