//! Exams over filesystem paths (`file.*`).
//!
//! Paths are taken as written; relative paths resolve against the working directory.

mod emptiness;
mod kind;
mod path;

pub use emptiness::{IsEmpty, IsNotEmpty};
pub use kind::{IsDir, IsFile};
pub use path::Path;
