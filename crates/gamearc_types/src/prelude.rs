//! Prelude module for `gamearc_types`.

#[doc(inline)]
pub use crate::alz;
#[doc(inline)]
pub use crate::archive;
#[doc(inline)]
pub use crate::error::{FileKind, GameArcError};
#[doc(inline)]
pub use crate::toc::{self, FileEntry, Toc};
#[doc(inline)]
pub use crate::twx::{self, Format as TwxFormat, Twx};
