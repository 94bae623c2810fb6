//! The TWX texture container: a 48-byte header followed by raw RGB/RGBA pixels
//! or a BC1/BC3 block-compressed mip chain.

use image::RgbaImage;
use image::imageops::{FilterType, resize};
use log::debug;

use super::{bc1, bc3};
use crate::error::{FileKind, GameArcError};

const HEADER_SIZE: usize = 48;
const MAGIC: u32 = 0x30_58_57_54;

/// Pixel/block layout a [`Twx`] payload is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	/// Raw 24-bit RGB, no mip chain.
	Rgb,
	/// Raw 32-bit RGBA, no mip chain.
	Rgba,
	/// BC1 (S3TC/DXT1) block-compressed, no mip chain.
	Bc1,
	/// BC3 (S3TC/DXT5) block-compressed, with a mip chain down to 4×4.
	Bc3,
	/// Same block layout as [`Format::Bc3`] under a distinct on-disk tag.
	Bc3Variant,
}

impl Format {
	fn from_tag(tag: u16) -> Option<Self> {
		match tag {
			7 => Some(Self::Rgb),
			8 => Some(Self::Rgba),
			9 => Some(Self::Bc1),
			11 => Some(Self::Bc3),
			13 => Some(Self::Bc3Variant),
			_ => None,
		}
	}

	fn tag(self) -> u16 {
		match self {
			Self::Rgb => 7,
			Self::Rgba => 8,
			Self::Bc1 => 9,
			Self::Bc3 => 11,
			Self::Bc3Variant => 13,
		}
	}

	fn has_mip_chain(self) -> bool {
		matches!(self, Self::Bc3 | Self::Bc3Variant)
	}
}

/// A parsed TWX texture.
///
/// The 48-byte header is kept verbatim (not just its magic/width/height/format
/// fields) so a round-tripped file reproduces every opaque byte the original
/// writer put there.
#[derive(Debug, Clone)]
pub struct Twx {
	header: [u8; HEADER_SIZE],
	width: u16,
	height: u16,
	format: Format,
	payload: Vec<u8>,
	/// Number of mip levels below the base level, for [`Format::Bc3`]/[`Format::Bc3Variant`].
	max_mipmap_level: u32,
}

fn level0_block_len(width: u32, height: u32, bytes_per_block: u32) -> u64 {
	u64::from(width / 4) * u64::from(height / 4) * u64::from(bytes_per_block)
}

/// Validates `payload`'s length against `width`/`height`/`format` and, for
/// mip-chained formats, infers how many mip levels it holds.
fn check_size(payload: &[u8], width: u16, height: u16, format: Format) -> Result<u32, GameArcError> {
	let (width, height) = (u32::from(width), u32::from(height));
	let len = payload.len() as u64;

	match format {
		Format::Rgb => {
			let expected = u64::from(width) * u64::from(height) * 3;
			if len != expected {
				return Err(GameArcError::format_size(FileKind::Twx, payload.len(), expected as usize));
			}
			Ok(0)
		}
		Format::Rgba => {
			let expected = u64::from(width) * u64::from(height) * 4;
			if len != expected {
				return Err(GameArcError::format_size(FileKind::Twx, payload.len(), expected as usize));
			}
			Ok(0)
		}
		Format::Bc1 => {
			let expected = level0_block_len(width, height, 8);
			if len != expected {
				return Err(GameArcError::format_size(FileKind::Twx, payload.len(), expected as usize));
			}
			Ok(0)
		}
		Format::Bc3 | Format::Bc3Variant => {
			let mut level = 0u32;
			let (mut mw, mut mh) = (width, height);
			let mut expected = level0_block_len(mw, mh, 16);

			while len >= expected {
				if len == expected {
					break;
				}
				level += 1;
				mw = (mw / 2).max(1);
				mh = (mh / 2).max(1);
				expected += level0_block_len(mw, mh, 16);
			}

			if len != expected {
				return Err(GameArcError::format_size(FileKind::Twx, payload.len(), expected as usize));
			}
			Ok(level)
		}
	}
}

impl Twx {
	/// Parses a TWX container from its full on-disk bytes.
	pub fn from_bytes(data: &[u8]) -> Result<Self, GameArcError> {
		if data.len() < HEADER_SIZE {
			return Err(GameArcError::truncated(FileKind::Twx));
		}

		let magic = u32::from_le_bytes(data[0..4].try_into().unwrap());
		if magic != MAGIC {
			return Err(GameArcError::format_magic(FileKind::Twx));
		}

		let width = u16::from_le_bytes(data[8..10].try_into().unwrap());
		let height = u16::from_le_bytes(data[10..12].try_into().unwrap());
		let tag = u16::from_le_bytes(data[12..14].try_into().unwrap());
		let format = Format::from_tag(tag).ok_or(GameArcError::unsupported_format(FileKind::Twx, tag))?;

		let mut header = [0u8; HEADER_SIZE];
		header.copy_from_slice(&data[0..HEADER_SIZE]);
		let payload = data[HEADER_SIZE..].to_vec();

		let max_mipmap_level = check_size(&payload, width, height, format)?;
		debug!("twx: {width}x{height} format={format:?} mip_levels={max_mipmap_level}");

		Ok(Self {
			header,
			width,
			height,
			format,
			payload,
			max_mipmap_level,
		})
	}

	/// Serializes the container back to its on-disk bytes, header byte-for-byte
	/// unchanged.
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(HEADER_SIZE + self.payload.len());
		out.extend_from_slice(&self.header);
		out.extend_from_slice(&self.payload);
		out
	}

	/// Pixel width of the base mip level.
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Pixel height of the base mip level.
	pub fn height(&self) -> u16 {
		self.height
	}

	/// The container's storage format.
	pub fn format(&self) -> Format {
		self.format
	}

	/// Number of mip levels below the base level (always `0` for non-BC3 formats).
	pub fn max_mipmap_level(&self) -> u32 {
		self.max_mipmap_level
	}

	/// Decodes the base mip level to a tightly packed RGBA buffer.
	pub fn decode_to_rgba(&self) -> Vec<u8> {
		let (width, height) = (usize::from(self.width), usize::from(self.height));

		match self.format {
			Format::Rgb => {
				let mut out = Vec::with_capacity(width * height * 4);
				for chunk in self.payload.chunks_exact(3) {
					out.extend_from_slice(&[chunk[0], chunk[1], chunk[2], 255]);
				}
				out
			}
			Format::Rgba => self.payload.clone(),
			Format::Bc1 => bc1::decode(&self.payload, self.width, self.height),
			Format::Bc3 | Format::Bc3Variant => {
				let level0_len = level0_block_len(u32::from(self.width), u32::from(self.height), 16) as usize;
				bc3::decode(&self.payload[..level0_len], u32::from(self.width), u32::from(self.height))
			}
		}
	}

	/// Builds a new container of `format`, encoding `rgba` (a tightly packed
	/// `width*height*4` buffer) at the given block-codec quality (0..18,
	/// ignored for raw formats). The header is copied verbatim from `self`.
	pub fn with_encoded_rgba(&self, rgba: &[u8], quality: u8) -> Self {
		let (width, height) = (self.width, self.height);

		let payload = match self.format {
			Format::Rgb => {
				let mut out = Vec::with_capacity(usize::from(width) * usize::from(height) * 3);
				for chunk in rgba.chunks_exact(4) {
					out.extend_from_slice(&chunk[0..3]);
				}
				out
			}
			Format::Rgba => rgba.to_vec(),
			Format::Bc1 => bc1::encode(rgba, width, height, quality),
			Format::Bc3 | Format::Bc3Variant => encode_bc3_mip_chain(rgba, width, height, quality, self.max_mipmap_level),
		};

		Self {
			header: self.header,
			width,
			height,
			format: self.format,
			payload,
			// Preserved, not recomputed: the mip count is whatever `check_size` inferred
			// from the payload this container was parsed from, per the original's own
			// `load_from_image`, which re-encodes exactly that many levels rather than a
			// full chain down to 4x4.
			max_mipmap_level: self.max_mipmap_level,
		}
	}
}

/// Encodes the base level plus exactly `max_mipmap_level` further halvings, matching
/// whatever mip count this container was parsed with rather than a full chain to 4x4.
fn encode_bc3_mip_chain(rgba: &[u8], width: u16, height: u16, quality: u8, max_mipmap_level: u32) -> Vec<u8> {
	let mut out = bc3::encode(rgba, u32::from(width), u32::from(height), quality);

	let mut mw = u32::from(width);
	let mut mh = u32::from(height);
	let mut current = RgbaImage::from_raw(mw, mh, rgba.to_vec()).expect("rgba buffer matches width*height*4");

	for _ in 0..max_mipmap_level {
		mw = (mw / 2).max(1);
		mh = (mh / 2).max(1);
		current = resize(&current, mw, mh, FilterType::Lanczos3);
		out.extend_from_slice(&bc3::encode(current.as_raw(), mw, mh, quality));
	}

	out
}
