//! TWX texture container support: the header/mip-chain model and the BC1/BC3
//! S3TC block codecs it dispatches to.

mod bc1;
mod bc3;
mod container;

pub use container::{Format, Twx};
