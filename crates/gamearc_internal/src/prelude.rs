//! Prelude module for `gamearc_internal`.
//!
//! # Examples
//!
//! ```rust
//! use gamearc_internal::prelude::*;
//!
//! let compressed = alz::compress(b"hello hello hello");
//! let restored = alz::decompress(&compressed);
//! assert_eq!(restored, b"hello hello hello");
//! ```

#[doc(inline)]
pub use gamearc_types::prelude::*;

#[doc(inline)]
pub use gamearc_types;
