//! Binary codecs for a game archive's `INFO`/`GAME` file pair: the ALZ
//! dictionary compressor, the TOC table-of-contents model and cipher, the
//! block-aligned archive I/O layer, and the TWX texture container.

pub mod alz;
pub mod archive;
pub mod error;
pub mod toc;
pub mod twx;

/// `use gamearc_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::{FileKind, GameArcError};
