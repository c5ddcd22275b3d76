//! File existence port.

use std::path::Path;

/// Port for checking whether a path exists.
#[cfg_attr(test, mockall::automock)]
pub trait FileExistenceChecker: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

/// `FileExistenceChecker` backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileExistenceChecker;

impl FileExistenceChecker for FsFileExistenceChecker {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
