use std::{fs, path::Path, time::UNIX_EPOCH};

use chrono::{DateTime, Local, Utc};
use log::debug;

use crate::{
    error::InspectError,
    record::{FileMetadataRecord, display_name},
};

/// Stat `path` once (following symlinks) and build its record.
///
/// There are no retries: a transient failure is reported the same way as
/// a permanent one.
pub fn inspect_file(path: &Path) -> Result<FileMetadataRecord, InspectError> {
    let metadata = fs::metadata(path).map_err(|e| InspectError::from_io(path.to_path_buf(), e))?;

    let times = timestamps(&metadata);
    let (mode, owner_uid, owner_gid) = ownership(&metadata);

    Ok(FileMetadataRecord {
        file_path: path.to_string_lossy().into_owned(),
        file_name: display_name(path),
        file_size: metadata.len(),
        modified_time: times.modified,
        accessed_time: times.accessed,
        created_time: times.created,
        mode,
        owner_uid,
        owner_gid,
    })
}

struct Timestamps {
    modified: DateTime<Local>,
    accessed: DateTime<Local>,
    created: DateTime<Local>,
}

// `created` is st_ctime here, i.e. the inode change time. std's
// Metadata::created() would give the birth time, which is not what this
// column has always meant on Unix.
#[cfg(unix)]
fn timestamps(metadata: &fs::Metadata) -> Timestamps {
    use std::os::unix::fs::MetadataExt;

    Timestamps {
        modified: local_from_epoch(metadata.mtime(), metadata.mtime_nsec()),
        accessed: local_from_epoch(metadata.atime(), metadata.atime_nsec()),
        created: local_from_epoch(metadata.ctime(), metadata.ctime_nsec()),
    }
}

#[cfg(not(unix))]
fn timestamps(metadata: &fs::Metadata) -> Timestamps {
    let modified = metadata
        .modified()
        .map(DateTime::<Local>::from)
        .unwrap_or_else(|_| DateTime::<Local>::from(UNIX_EPOCH));
    let accessed = metadata
        .accessed()
        .map(DateTime::<Local>::from)
        .unwrap_or(modified);
    let created = metadata
        .created()
        .map(DateTime::<Local>::from)
        .unwrap_or(modified);

    Timestamps {
        modified,
        accessed,
        created,
    }
}

#[cfg(unix)]
fn ownership(metadata: &fs::Metadata) -> (u32, u32, u32) {
    use std::os::unix::fs::MetadataExt;

    (metadata.mode(), metadata.uid(), metadata.gid())
}

#[cfg(not(unix))]
fn ownership(metadata: &fs::Metadata) -> (u32, u32, u32) {
    let mode = crate::mode::synthesize_mode(metadata.permissions().readonly());
    (mode, 0, 0)
}

/// Convert raw epoch seconds plus nanoseconds to local time.
///
/// Values chrono cannot represent fall back to the Unix epoch.
#[cfg_attr(not(unix), allow(dead_code))]
fn local_from_epoch(secs: i64, nanos: i64) -> DateTime<Local> {
    let nanos = u32::try_from(nanos).unwrap_or(0);

    match DateTime::<Utc>::from_timestamp(secs, nanos) {
        Some(utc) => utc.with_timezone(&Local),
        None => {
            debug!("[inspect] timestamp {secs}.{nanos} out of range, using epoch");
            DateTime::<Local>::from(UNIX_EPOCH)
        }
    }
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
