//! Filesystem side of the timeline: walking a root and turning each file
//! into a [`FileMetadataRecord`].

mod error;
mod inspect;
mod mode;
mod record;
mod walker;

pub use error::{InspectError, WalkError};
pub use inspect::inspect_file;
pub use mode::filemode;
pub use record::{FIELD_COUNT, FIELD_SEPARATOR, FileMetadataRecord, TIMESTAMP_FORMAT};
pub use walker::{FileWalk, WalkMode, walk_files};
