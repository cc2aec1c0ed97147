use std::{fmt, path::Path};

use chrono::{DateTime, Local};

use crate::mode::filemode;

/// ISO-8601 local time without offset, fixed microsecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub const FIELD_SEPARATOR: char = ',';

/// Number of columns in one serialized record.
pub const FIELD_COUNT: usize = 9;

/// Metadata for one file, captured at inspection time.
///
/// Only [`crate::inspect_file`] builds these, so a record always describes
/// a path that was successfully stat-ed. Fields are read-only.
///
/// `created_time` is the platform's notion of "created": on Unix it is
/// `st_ctime`, the last *inode change* time, not a birth time. A chmod or
/// chown moves it forward. On other platforms it is the OS creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadataRecord {
    pub(crate) file_path: String,
    pub(crate) file_name: String,
    pub(crate) file_size: u64,
    pub(crate) modified_time: DateTime<Local>,
    pub(crate) accessed_time: DateTime<Local>,
    pub(crate) created_time: DateTime<Local>,
    pub(crate) mode: u32,
    pub(crate) owner_uid: u32,
    pub(crate) owner_gid: u32,
}

impl FileMetadataRecord {
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn modified_time(&self) -> DateTime<Local> {
        self.modified_time
    }

    pub fn accessed_time(&self) -> DateTime<Local> {
        self.accessed_time
    }

    /// See the type-level docs: this is `st_ctime` on Unix.
    pub fn created_time(&self) -> DateTime<Local> {
        self.created_time
    }

    /// Raw mode bits the permission string is rendered from.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    pub fn permissions(&self) -> String {
        filemode(self.mode)
    }

    pub fn owner_uid(&self) -> u32 {
        self.owner_uid
    }

    pub fn owner_gid(&self) -> u32 {
        self.owner_gid
    }

    /// One output line, without the trailing newline.
    ///
    /// Columns: modified, accessed, created, path, name, size, permissions,
    /// uid, gid. Commas inside the path or name are written as-is.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FileMetadataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = FIELD_SEPARATOR;
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.modified_time.format(TIMESTAMP_FORMAT),
            self.accessed_time.format(TIMESTAMP_FORMAT),
            self.created_time.format(TIMESTAMP_FORMAT),
            self.file_path,
            self.file_name,
            self.file_size,
            self.permissions(),
            self.owner_uid,
            self.owner_gid,
        )
    }
}

/// Final path segment, lossily decoded. Empty for paths like `/` or `..`.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
