//! Internal crate for `gamearc-rs`.
//!
//! This module is separated into its own crate so the root crate can stay a thin
//! re-export and should not be depended on directly.
//!
//! # Examples
//!
//! ```rust
//! use gamearc_internal::prelude::*;
//!
//! let toc = Toc::from_plain_bytes(&[0u8; 48]).unwrap();
//! assert_eq!(toc.file_count(), 0);
//! ```

/// `use gamearc_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export gamearc_types for convenience.
pub use gamearc_types;
