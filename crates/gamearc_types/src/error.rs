//! Unified error type for the archive, TOC, and texture codecs.

use thiserror::Error;

/// Which binary format an error was raised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
	/// The ALZ compression stream.
	Alz,
	/// The TOC (`INFO`) table of contents.
	Toc,
	/// The TWX texture container.
	Twx,
}

impl std::fmt::Display for FileKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FileKind::Alz => write!(f, "ALZ"),
			FileKind::Toc => write!(f, "TOC"),
			FileKind::Twx => write!(f, "TWX"),
		}
	}
}

/// Errors that can occur when parsing or rebuilding archive data.
#[derive(Debug, Error)]
pub enum GameArcError {
	/// Bad magic number or unsupported container version.
	#[error("{kind}: invalid magic number")]
	FormatMagic {
		/// Which format failed to validate.
		kind: FileKind,
	},

	/// Payload length doesn't match the geometry implied by the header.
	#[error("{kind}: payload size mismatch: got {actual} bytes, expected {expected}")]
	FormatSize {
		/// Which format failed to validate.
		kind: FileKind,
		/// Actual payload length in bytes.
		actual: usize,
		/// Expected payload length in bytes.
		expected: usize,
	},

	/// The format tag is recognized as a field but not a supported variant.
	#[error("{kind}: unsupported format tag {tag}")]
	UnsupportedFormat {
		/// Which format failed to validate.
		kind: FileKind,
		/// The unrecognized tag value.
		tag: u16,
	},

	/// Input ended in the middle of a token or record.
	#[error("{kind}: truncated input")]
	Truncated {
		/// Which format failed to validate.
		kind: FileKind,
	},

	/// Underlying filesystem failure.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl GameArcError {
	/// Builds a [`GameArcError::FormatMagic`] for the given kind.
	pub fn format_magic(kind: FileKind) -> Self {
		Self::FormatMagic {
			kind,
		}
	}

	/// Builds a [`GameArcError::FormatSize`] for the given kind.
	pub fn format_size(kind: FileKind, actual: usize, expected: usize) -> Self {
		Self::FormatSize {
			kind,
			actual,
			expected,
		}
	}

	/// Builds a [`GameArcError::UnsupportedFormat`] for the given kind.
	pub fn unsupported_format(kind: FileKind, tag: u16) -> Self {
		Self::UnsupportedFormat {
			kind,
			tag,
		}
	}

	/// Builds a [`GameArcError::Truncated`] for the given kind.
	pub fn truncated(kind: FileKind) -> Self {
		Self::Truncated {
			kind,
		}
	}
}
