use std::{
    fs,
    path::{Path, PathBuf},
};

use ignore::{DirEntry, Walk, WalkBuilder};
use log::debug;

use crate::error::WalkError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkMode {
    /// Direct children of the root only.
    #[default]
    Flat,
    /// The whole subtree beneath the root.
    Recursive,
}

impl WalkMode {
    pub fn from_flag(recursive: bool) -> Self {
        if recursive {
            WalkMode::Recursive
        } else {
            WalkMode::Flat
        }
    }

    fn max_depth(self) -> Option<usize> {
        match self {
            WalkMode::Flat => Some(1),
            WalkMode::Recursive => None,
        }
    }
}

/// Pull-based stream of regular file paths under a root.
///
/// Directories are read lazily as the iterator advances, so memory stays
/// bounded by the depth of the tree rather than its size. A directory that
/// cannot be listed yields a single `Err` and the walk moves on to its
/// siblings. The stream cannot be restarted.
pub struct FileWalk {
    inner: Walk,
}

/// Walk `root` in the given mode, yielding regular files only.
///
/// Nothing is filtered besides the file type: hidden files and anything
/// a `.gitignore` would exclude are still visited. Symlinks are reported
/// when they point at a regular file but are never descended into.
pub fn walk_files(root: &Path, mode: WalkMode) -> FileWalk {
    debug!("[walk] {} ({mode:?})", root.display());

    let inner = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(mode.max_depth())
        .build();

    FileWalk { inner }
}

impl Iterator for FileWalk {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if is_regular_file(&entry) {
                        return Some(Ok(entry.into_path()));
                    }
                }
                Err(e) => return Some(Err(WalkError::from(e))),
            }
        }
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        // Dangling links fail the stat and are dropped silently.
        Some(ft) if ft.is_symlink() => fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
