#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `gamearc-rs` is an offline modding toolchain for a game archive format made of a
//! table-of-contents file (`INFO`) and a data blob (`GAME`).
//!
//! It exposes the archive's contents as editable files and rebuilds the archive
//! bit-exactly enough for the game to reload modified assets. The heavy lifting lives in
//! [`gamearc_types`]: the ALZ compressor, the TOC cipher/model, and the TWX texture
//! container with its BC1/BC3 block codecs.
pub use gamearc_internal::*;
